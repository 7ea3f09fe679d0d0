//! Section content models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vernissage_core::types::{DbId, Timestamp};

/// A row from the `section_contents` table.
///
/// Identified by `(section_key, locale)`. The `content` field is an
/// opaque JSON object whose shape depends on the section.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionContent {
    pub id: DbId,
    pub section_key: String,
    pub locale: String,
    pub content: serde_json::Value,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the idempotent section-content upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSectionContent {
    pub content: serde_json::Value,
    /// Defaults to `true` on first insert when omitted.
    pub is_active: Option<bool>,
}
