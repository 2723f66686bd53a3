//! Handlers for the `/api/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use casetrack_core::error::CoreError;
use casetrack_core::types::DbId;
use casetrack_db::models::client::{Client, CreateClient, UpdateClient};
use casetrack_db::repositories::{ClientRepo, MatterRepo};

use crate::error::{conflict_on_unique, AppError, AppResult};
use crate::state::AppState;

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, &input)
        .await
        .map_err(|e| conflict_on_unique(e, "Client email already in use"))?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| conflict_on_unique(e, "Client email already in use"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
///
/// Idempotent: 204 whether or not the row existed. Refused with 409
/// while the client still owns matters.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let dependents = MatterRepo::count_by_client(&state.pool, id).await?;
    if dependents > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Client still owns {dependents} matter(s)"
        ))));
    }
    ClientRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
