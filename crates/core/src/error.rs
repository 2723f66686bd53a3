use crate::types::DbId;

/// Domain-level errors shared across the workspace.
///
/// The API layer maps each variant onto an HTTP status; nothing here
/// knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
