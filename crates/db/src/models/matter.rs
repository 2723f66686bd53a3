//! Matter (legal case) entity model and DTOs.

use casetrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A matter row from the `matters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Matter {
    pub id: DbId,
    /// Owning client. Immutable after creation.
    pub client_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Free-form status label.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new matter.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatter {
    pub client_id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to "open" if omitted.
    #[serde(default)]
    pub status: Option<String>,
}

/// DTO for updating an existing matter. The owning client cannot be
/// reassigned; `description` is tri-state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMatter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
}
