//! Admin session tokens: an opaque signed credential with a fixed
//! validity window.
//!
//! Tokens are HS256-signed JWTs carrying the administrator's email as
//! `sub`. Verification checks three things: a valid signature, an
//! unexpired token, and a subject equal to the configured administrator.
//! The encoding scheme is private to this module — callers only see the
//! issue/verify pair, so it can be swapped without touching call sites.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vernissage_core::error::CoreError;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the administrator's email.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logging.
    pub jti: String,
}

/// Configuration for session token issue and verification.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// The single administrator's email; tokens for any other subject
    /// are rejected.
    pub admin_email: String,
    /// PHC-formatted Argon2id hash of the administrator's password.
    pub admin_password_hash: String,
    /// Session lifetime in days (default: 7).
    pub session_expiry_days: i64,
}

/// Default session validity window in days.
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `SESSION_SECRET`      | **yes**  | --      |
    /// | `ADMIN_EMAIL`         | **yes**  | --      |
    /// | `ADMIN_PASSWORD_HASH` | **yes**  | --      |
    /// | `SESSION_EXPIRY_DAYS` | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let admin_email =
            std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in the environment");
        assert!(!admin_email.is_empty(), "ADMIN_EMAIL must not be empty");

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(
            !admin_password_hash.is_empty(),
            "ADMIN_PASSWORD_HASH must not be empty"
        );

        let session_expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_DAYS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            admin_email,
            admin_password_hash,
            session_expiry_days,
        }
    }
}

/// Issue a session token for the configured administrator.
pub fn issue_session_token(config: &SessionConfig) -> Result<String, CoreError> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.session_expiry_days * 24 * 60 * 60;

    let claims = Claims {
        sub: config.admin_email.clone(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| CoreError::Internal(format!("Failed to sign session token: {e}")))
}

/// Verify a session token and return its claims.
///
/// Rejects tokens with a bad signature, an elapsed validity window, or a
/// subject other than the configured administrator.
pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<Claims, CoreError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )
    .map_err(|_| CoreError::Unauthorized("Invalid or expired session token".into()))?;

    let claims = token_data.claims;
    if claims.sub != config.admin_email {
        return Err(CoreError::Unauthorized(
            "Session token does not belong to the configured administrator".into(),
        ));
    }
    Ok(claims)
}
