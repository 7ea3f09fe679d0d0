//! Handlers for the `/auth` resource (admin login and session check).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use vernissage_core::error::CoreError;

use crate::auth::password::verify_password;
use crate::auth::session::issue_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// Response body for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate the single configured administrator with email +
/// password. Returns a signed session token valid for the configured
/// window (default 7 days).
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let session = &state.config.session;

    // A single uniform rejection for unknown email and wrong password;
    // there is exactly one legitimate identity to probe.
    let email_matches = input.email.eq_ignore_ascii_case(&session.admin_email);
    let password_matches = email_matches
        && verify_password(&input.password, &session.admin_password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_matches {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = issue_session_token(session)?;

    tracing::info!(admin = %session.admin_email, "Administrator logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            expires_in: session.session_expiry_days * 24 * 60 * 60,
        },
    }))
}

/// GET /api/v1/auth/session
///
/// Validate the presented session token; returns the admin identity.
pub async fn session_info(session: AdminSession) -> AppResult<Json<DataResponse<SessionInfo>>> {
    Ok(Json(DataResponse {
        data: SessionInfo {
            email: session.email,
        },
    }))
}
