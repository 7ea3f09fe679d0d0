//! Slider item models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vernissage_core::types::{DbId, Timestamp};

/// A row from the `slider_items` table.
///
/// Exactly one of `url` / `youtube_id` is meaningful, depending on
/// `kind` (`image` and `video_url` use `url`, `youtube` uses
/// `youtube_id`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SliderItem {
    pub id: DbId,
    pub slider_id: DbId,
    /// `image`, `youtube`, or `video_url` (see `vernissage_core::media`).
    pub kind: String,
    pub url: Option<String>,
    pub youtube_id: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
    pub artist_name: Option<String>,
    /// Layout hints; not validated against the referenced media.
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Render order within the slider; gaps are tolerated, reads sort
    /// by `(position, id)`.
    pub position: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an item to a slider.
///
/// For `youtube` items, `youtube_ref` may be any recognized YouTube URL
/// shape or a bare 11-character id; the canonical id is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSliderItem {
    pub kind: String,
    pub url: Option<String>,
    pub youtube_ref: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
    pub artist_name: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// DTO for partially updating an item's descriptive fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSliderItem {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub artist_name: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_active: Option<bool>,
}

/// Request body for the full-list reorder operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    /// The complete desired ordering of the slider's item ids.
    pub item_ids: Vec<DbId>,
}
