//! Repository for the `documents` table.

use casetrack_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

const COLUMNS: &str = "id, matter_id, name, content, version, created_at, updated_at";

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document at version 1, returning the created row.
    ///
    /// The caller is expected to have verified that `matter_id`
    /// references a live matter.
    pub async fn create(pool: &SqlitePool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO documents (matter_id, name, content, version, created_at, updated_at)
             VALUES ($1, $2, $3, 1, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.matter_id)
            .bind(&input.name)
            .bind(&input.content)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a document by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count documents owned by a matter. Used for the delete pre-check.
    pub async fn count_by_matter(pool: &SqlitePool, matter_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE matter_id = $1")
            .bind(matter_id)
            .fetch_one(pool)
            .await
    }

    /// Update a document. Only fields supplied in `input` are applied;
    /// `version` and the owning matter are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let Some(mut document) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            document.name = name.clone();
        }
        if let Some(content) = &input.content {
            document.content = content.clone();
        }

        let query = format!(
            "UPDATE documents SET name = $2, content = $3, updated_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&document.name)
            .bind(&document.content)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a document by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
