//! Admin-session extractor for Axum handlers.
//!
//! Every write-path handler takes [`AdminSession`] as a parameter, so an
//! invalid or missing session rejects the request before any store
//! access.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vernissage_core::error::CoreError;

use crate::auth::session::verify_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// A verified administrator session, extracted from the
/// `Authorization: Bearer <token>` header.
///
/// ```ignore
/// async fn admin_only(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(admin = %session.email, "handling admin request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The administrator's email (the token subject).
    pub email: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = verify_session_token(token, &state.config.session)?;

        Ok(AdminSession { email: claims.sub })
    }
}
