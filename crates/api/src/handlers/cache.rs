//! Handler for operator-triggered cache invalidation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::content::InvalidateTag;
use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Request body for `POST /admin/cache/invalidate`.
#[derive(Debug, Deserialize)]
pub struct InvalidateRequest {
    pub tag: InvalidateTag,
}

/// POST /api/v1/admin/cache/invalidate
///
/// Force the next read of the tagged data to bypass the staleness
/// window.
pub async fn invalidate(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<InvalidateRequest>,
) -> AppResult<impl IntoResponse> {
    state.content.invalidate(input.tag);

    tracing::info!(tag = ?input.tag, admin = %session.email, "Cache invalidation requested");

    Ok(StatusCode::NO_CONTENT)
}
