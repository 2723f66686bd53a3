//! Document entity model and DTOs.

use casetrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    /// Owning matter. Immutable after creation.
    pub matter_id: DbId,
    pub name: String,
    /// Plain text blob; file storage is out of scope.
    pub content: String,
    /// Starts at 1. No operation increments it.
    pub version: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub matter_id: DbId,
    pub name: String,
    pub content: String,
}

/// DTO for updating an existing document. `version` is deliberately
/// absent: it is not updatable through the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocument {
    pub name: Option<String>,
    pub content: Option<String>,
}
