//! Route definitions for the `/matters` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::matter;
use crate::state::AppState;

/// Routes mounted at `/api/matters`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(matter::create))
        .route(
            "/{id}",
            get(matter::get_by_id)
                .put(matter::update)
                .delete(matter::delete),
        )
}
