use std::sync::Arc;

use crate::config::ServerConfig;
use crate::content::ContentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vernissage_db::DbPool,
    /// Server configuration (session credentials, CORS, cache windows).
    pub config: Arc<ServerConfig>,
    /// Content read path: cache, store, static fallback.
    pub content: Arc<ContentService>,
}
