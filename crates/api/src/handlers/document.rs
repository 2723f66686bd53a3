//! Handlers for the `/api/documents` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use casetrack_core::error::CoreError;
use casetrack_core::types::DbId;
use casetrack_db::models::document::{CreateDocument, Document, UpdateDocument};
use casetrack_db::repositories::{DocumentRepo, MatterRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/documents
///
/// The referenced matter must exist; a dangling `matter_id` is a
/// validation error, not an opaque constraint failure.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<(StatusCode, Json<Document>)> {
    if MatterRepo::find_by_id(&state.pool, input.matter_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "matter_id {} does not reference an existing matter",
            input.matter_id
        ))));
    }
    let document = DocumentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;
    Ok(Json(document))
}

/// PUT /api/documents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;
    Ok(Json(document))
}

/// DELETE /api/documents/{id}
///
/// Idempotent: 204 whether or not the row existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    DocumentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
