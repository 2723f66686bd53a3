//! Repository for the `matters` table.

use casetrack_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::matter::{CreateMatter, Matter, UpdateMatter};

const COLUMNS: &str = "id, client_id, name, description, status, created_at, updated_at";

/// Provides CRUD operations for matters.
pub struct MatterRepo;

impl MatterRepo {
    /// Insert a new matter, returning the created row.
    ///
    /// `status` defaults to "open" if omitted. The caller is expected
    /// to have verified that `client_id` references a live client.
    pub async fn create(pool: &SqlitePool, input: &CreateMatter) -> Result<Matter, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO matters (client_id, name, description, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Matter>(&query)
            .bind(input.client_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.as_deref().unwrap_or("open"))
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a matter by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Matter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matters WHERE id = $1");
        sqlx::query_as::<_, Matter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count matters owned by a client. Used for the delete pre-check.
    pub async fn count_by_client(pool: &SqlitePool, client_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM matters WHERE client_id = $1")
            .bind(client_id)
            .fetch_one(pool)
            .await
    }

    /// Update a matter. Only fields supplied in `input` are applied;
    /// `description: Some(None)` clears the column. The owning client
    /// cannot be changed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMatter,
    ) -> Result<Option<Matter>, sqlx::Error> {
        let Some(mut matter) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            matter.name = name.clone();
        }
        if let Some(description) = &input.description {
            matter.description = description.clone();
        }
        if let Some(status) = &input.status {
            matter.status = status.clone();
        }

        let query = format!(
            "UPDATE matters SET name = $2, description = $3, status = $4, updated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Matter>(&query)
            .bind(id)
            .bind(&matter.name)
            .bind(&matter.description)
            .bind(&matter.status)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a matter by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
