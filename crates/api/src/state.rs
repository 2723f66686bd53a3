use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (the pool is already reference-counted,
/// the config sits behind an `Arc`). Constructed once at startup and
/// injected; there is no global store handle anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: casetrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
