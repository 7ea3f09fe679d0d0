//! Route definitions for the session-gated admin write surface.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{cache, sections, site_config, sliders};
use crate::state::AppState;

/// Admin routes mounted at `/admin`. Every handler takes the
/// `AdminSession` extractor, so an invalid session rejects before any
/// store access.
///
/// ```text
/// GET    /sliders                 -> list_sliders (?section=)
/// POST   /sliders                 -> create_slider
/// GET    /sliders/{id}            -> get_slider
/// PATCH  /sliders/{id}            -> update_slider
/// DELETE /sliders/{id}            -> delete_slider
/// POST   /sliders/{id}/items      -> add_item
/// PUT    /sliders/{id}/reorder    -> reorder_items
/// PATCH  /items/{id}              -> update_item
/// DELETE /items/{id}              -> delete_item
/// POST   /items/{id}/toggle       -> toggle_item
///
/// GET    /sections                -> list_sections
/// PUT    /sections/{key}/{locale} -> upsert_section
/// GET    /config                  -> list_config
/// PUT    /config/{key}            -> upsert_config
/// POST   /cache/invalidate        -> invalidate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sliders",
            get(sliders::list_sliders).post(sliders::create_slider),
        )
        .route(
            "/sliders/{id}",
            get(sliders::get_slider)
                .patch(sliders::update_slider)
                .delete(sliders::delete_slider),
        )
        .route("/sliders/{id}/items", post(sliders::add_item))
        .route("/sliders/{id}/reorder", put(sliders::reorder_items))
        .route(
            "/items/{id}",
            patch(sliders::update_item).delete(sliders::delete_item),
        )
        .route("/items/{id}/toggle", post(sliders::toggle_item))
        .route("/sections", get(sections::list_sections))
        .route("/sections/{key}/{locale}", put(sections::upsert_section))
        .route("/config", get(site_config::list_config))
        .route("/config/{key}", put(site_config::upsert_config))
        .route("/cache/invalidate", post(cache::invalidate))
}
