//! Site config models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vernissage_core::types::{DbId, Timestamp};

/// A row from the `site_configs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteConfig {
    pub id: DbId,
    pub key: String,
    pub value: String,
    /// Semantic type of `value` (see `vernissage_core::site_config`).
    pub config_type: String,
    /// Classification used to group settings in the admin UI.
    pub group_name: Option<String>,
    pub label: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the idempotent config upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSiteConfig {
    pub value: String,
    pub config_type: String,
    pub group_name: Option<String>,
    pub label: Option<String>,
}
