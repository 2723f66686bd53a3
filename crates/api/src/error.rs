use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casetrack_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a database variant.
/// Implements [`IntoResponse`] to produce the uniform `{"detail": ...}`
/// JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casetrack-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({ "detail": detail });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a unique constraint violation to a 409 with a friendly message,
/// passing every other database error through unchanged.
pub fn conflict_on_unique(err: sqlx::Error, detail: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Core(CoreError::Conflict(detail.to_string()))
    } else {
        AppError::Database(err)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Classify a sqlx error into an HTTP status and detail message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409 (fallback for paths that
///   did not go through [`conflict_on_unique`]).
/// - Foreign key violations map to 409 (the store refused a delete or
///   write that would orphan dependents). Uses the db crate's
///   predicate, which also covers SQLite's restricted-delete code.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
            StatusCode::CONFLICT,
            "Duplicate value violates a uniqueness constraint".to_string(),
        ),
        err if casetrack_db::is_foreign_key_violation(err) => (
            StatusCode::CONFLICT,
            "Operation violates a foreign key constraint".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
