//! Handlers for the `/api/matters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use casetrack_core::error::CoreError;
use casetrack_core::types::DbId;
use casetrack_db::models::matter::{CreateMatter, Matter, UpdateMatter};
use casetrack_db::repositories::{ClientRepo, DocumentRepo, MatterRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/matters
///
/// The referenced client must exist; a dangling `client_id` is a
/// validation error, not an opaque constraint failure.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMatter>,
) -> AppResult<(StatusCode, Json<Matter>)> {
    if ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "client_id {} does not reference an existing client",
            input.client_id
        ))));
    }
    let matter = MatterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(matter)))
}

/// GET /api/matters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Matter>> {
    let matter = MatterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matter",
            id,
        }))?;
    Ok(Json(matter))
}

/// PUT /api/matters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMatter>,
) -> AppResult<Json<Matter>> {
    let matter = MatterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matter",
            id,
        }))?;
    Ok(Json(matter))
}

/// DELETE /api/matters/{id}
///
/// Idempotent: 204 whether or not the row existed. Refused with 409
/// while the matter still owns documents.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let dependents = DocumentRepo::count_by_matter(&state.pool, id).await?;
    if dependents > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Matter still owns {dependents} document(s)"
        ))));
    }
    MatterRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
