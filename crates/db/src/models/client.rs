//! Client entity model and DTOs.

use casetrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    /// Must be unique across all clients.
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// DTO for updating an existing client. Omitted fields are left
/// unchanged; `phone` is tri-state, so an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub phone: Option<Option<String>>,
}
