pub mod client;
pub mod document;
pub mod health;
pub mod matter;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /clients          POST create
/// /clients/{id}     GET, PUT, DELETE
/// /matters          POST create
/// /matters/{id}     GET, PUT, DELETE
/// /documents        POST create
/// /documents/{id}   GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/matters", matter::router())
        .nest("/documents", document::router())
}
