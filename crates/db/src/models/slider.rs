//! Slider models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vernissage_core::types::{DbId, Timestamp};

use crate::models::slider_item::SliderItem;

/// A row from the `sliders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slider {
    pub id: DbId,
    pub name: String,
    /// URL-safe identifier derived from `name` at creation time.
    pub slug: String,
    /// Page region this slider belongs to (e.g. `"hero"`, `"stories"`).
    pub section: String,
    pub is_active: bool,
    /// Render order among the sliders of one section.
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A slider together with its items, in render order.
#[derive(Debug, Clone, Serialize)]
pub struct SliderWithItems {
    #[serde(flatten)]
    pub slider: Slider,
    pub items: Vec<SliderItem>,
}

/// DTO for creating a new slider. The slug is derived server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlider {
    pub name: String,
    pub section: String,
}

/// DTO for partially updating a slider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSlider {
    pub name: Option<String>,
    pub section: Option<String>,
    pub is_active: Option<bool>,
    pub position: Option<i32>,
}

/// Query parameters for the admin slider listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SliderListParams {
    /// Restrict the listing to one section.
    pub section: Option<String>,
}
