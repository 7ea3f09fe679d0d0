//! Handlers for the admin section-content surface.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::{locale, section};
use vernissage_db::models::section_content::UpsertSectionContent;
use vernissage_db::repositories::SectionContentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/sections
///
/// List every content row (all keys, all locales, active or not).
pub async fn list_sections(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sections = SectionContentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// PUT /api/v1/admin/sections/:key/:locale
///
/// Idempotent upsert of the copy for one `(section_key, locale)` pair.
pub async fn upsert_section(
    session: AdminSession,
    State(state): State<AppState>,
    Path((key, raw_locale)): Path<(String, String)>,
    Json(input): Json<UpsertSectionContent>,
) -> AppResult<impl IntoResponse> {
    let key = section::normalize_key(&key)?;
    let locale = locale::normalize(&raw_locale)?;
    section::validate_content(&input.content)?;

    let row = SectionContentRepo::upsert(&state.pool, &key, &locale, &input).await?;

    tracing::info!(
        section_key = %row.section_key,
        locale = %row.locale,
        admin = %session.email,
        "Section content upserted",
    );

    Ok(Json(DataResponse { data: row }))
}
