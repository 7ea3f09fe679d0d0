//! Handlers for the public `/content` read surface.
//!
//! These endpoints are unauthenticated and never fail on an empty or
//! unreachable store — the serving layer degrades to the bundled static
//! dataset instead.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use vernissage_core::locale::{self, DEFAULT_LOCALE};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /content/sections/{key}`.
#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    pub locale: Option<String>,
}

/// GET /api/v1/content/sliders/{section}
///
/// Active sliders of one page section, in render order.
pub async fn sliders_by_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<impl IntoResponse> {
    let sliders = state.content.sliders_by_section(&section).await;
    Ok(Json(DataResponse { data: sliders }))
}

/// GET /api/v1/content/sections/{key}?locale=xx
///
/// Section copy for the requested locale, falling back to the default
/// locale and then the bundled dataset. Returns 204 when no source
/// knows the section at all.
pub async fn section_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SectionQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = match query.locale {
        Some(raw) => locale::normalize(&raw)?,
        None => DEFAULT_LOCALE.to_string(),
    };

    match state.content.section_content(&key, &locale).await {
        Some(view) => Ok(Json(DataResponse { data: view }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/v1/content/config
///
/// All site settings.
pub async fn site_config(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = state.content.site_config().await;
    Ok(Json(DataResponse { data: config }))
}
