//! Repository for the `clients` table.

use casetrack_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// Timestamps are bound from the application so `created_at` and
    /// `updated_at` are exactly equal on insert. A duplicate email
    /// surfaces as a unique constraint violation from the store.
    pub async fn create(pool: &SqlitePool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO clients (name, email, phone, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a client. Only fields supplied in `input` are applied;
    /// `phone: Some(None)` clears the column.
    ///
    /// The row is loaded, modified in memory, and written back whole,
    /// so an empty input still refreshes `updated_at`. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let Some(mut client) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            client.name = name.clone();
        }
        if let Some(email) = &input.email {
            client.email = email.clone();
        }
        if let Some(phone) = &input.phone {
            client.phone = phone.clone();
        }

        let query = format!(
            "UPDATE clients SET name = $2, email = $3, phone = $4, updated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
