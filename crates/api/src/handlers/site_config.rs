//! Handlers for the admin site-config surface.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::site_config::{validate_value, ConfigType};
use vernissage_db::models::site_config::UpsertSiteConfig;
use vernissage_db::repositories::SiteConfigRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/config
///
/// List every setting with its admin-UI metadata.
pub async fn list_config(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let configs = SiteConfigRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: configs }))
}

/// PUT /api/v1/admin/config/:key
///
/// Idempotent upsert of one setting. The value is validated against the
/// declared `config_type` before the store is touched.
pub async fn upsert_config(
    session: AdminSession,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpsertSiteConfig>,
) -> AppResult<impl IntoResponse> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Config key must not be empty".to_string(),
        )));
    }

    let config_type = ConfigType::parse(&input.config_type)?;
    validate_value(config_type, &input.value)?;

    let row = SiteConfigRepo::upsert(&state.pool, &key, &input).await?;

    tracing::info!(
        key = %row.key,
        config_type = %row.config_type,
        admin = %session.email,
        "Site config upserted",
    );

    Ok(Json(DataResponse { data: row }))
}
