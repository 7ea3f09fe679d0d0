pub mod admin;
pub mod auth;
pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/session                        validate session token
///
/// /content/sliders/{section}           public sliders (cached, fallback)
/// /content/sections/{key}?locale=xx    public section copy (cached, fallback)
/// /content/config                      public site settings (cached, fallback)
///
/// /admin/sliders                       list, create
/// /admin/sliders/{id}                  get, update, delete (cascades)
/// /admin/sliders/{id}/items            add item (POST)
/// /admin/sliders/{id}/reorder          full-list reorder (PUT)
/// /admin/items/{id}                    update, delete
/// /admin/items/{id}/toggle             flip is_active (POST)
///
/// /admin/sections                      list all rows
/// /admin/sections/{key}/{locale}       upsert (PUT)
/// /admin/config                        list all rows
/// /admin/config/{key}                  upsert (PUT)
/// /admin/cache/invalidate              invalidate cache tag (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin login and session check.
        .nest("/auth", auth::router())
        // Public read surface (cache + static fallback).
        .nest("/content", content::router())
        // Admin write surface (session-gated).
        .nest("/admin", admin::router())
}
