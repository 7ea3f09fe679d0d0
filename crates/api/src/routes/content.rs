//! Route definitions for the public content read surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public content routes mounted at `/content`.
///
/// ```text
/// GET /sliders/{section}  -> sliders_by_section
/// GET /sections/{key}     -> section_content (?locale=xx)
/// GET /config             -> site_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sliders/{section}", get(content::sliders_by_section))
        .route("/sections/{key}", get(content::section_content))
        .route("/config", get(content::site_config))
}
