//! Serving-layer view types for the public read path.
//!
//! Views are what the public site consumes: row internals (ids, audit
//! columns) are dropped, and YouTube items gain derived thumbnail/embed
//! URLs. The bundled fallback dataset deserializes directly into these
//! types, so live and fallback responses are indistinguishable in shape.

use serde::{Deserialize, Serialize};
use vernissage_core::youtube::{self, EmbedOptions, ThumbnailQuality};
use vernissage_db::models::section_content::SectionContent;
use vernissage_db::models::site_config::SiteConfig;
use vernissage_db::models::slider::SliderWithItems;
use vernissage_db::models::slider_item::SliderItem;

/// One media item of a slider, in render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderItemView {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

/// A slider with its active items, as served to the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderView {
    pub name: String,
    pub slug: String,
    pub section: String,
    pub items: Vec<SliderItemView>,
}

/// Per-locale section copy, as served to the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContentView {
    pub section_key: String,
    pub locale: String,
    pub content: serde_json::Value,
}

/// One site setting, as served to the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfigView {
    pub key: String,
    pub value: String,
    pub config_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl From<&SliderItem> for SliderItemView {
    fn from(item: &SliderItem) -> Self {
        let (thumbnail_url, embed_url) = match item.youtube_id.as_deref() {
            Some(id) => (
                Some(youtube::thumbnail_url(id, ThumbnailQuality::HqDefault)),
                Some(youtube::embed_url(id, &EmbedOptions::default())),
            ),
            None => (None, None),
        };
        Self {
            kind: item.kind.clone(),
            url: item.url.clone(),
            youtube_id: item.youtube_id.clone(),
            thumbnail_url,
            embed_url,
            title: item.title.clone(),
            alt: item.alt.clone(),
            artist_name: item.artist_name.clone(),
            width: item.width,
            height: item.height,
        }
    }
}

impl From<&SliderWithItems> for SliderView {
    fn from(row: &SliderWithItems) -> Self {
        Self {
            name: row.slider.name.clone(),
            slug: row.slider.slug.clone(),
            section: row.slider.section.clone(),
            items: row.items.iter().map(SliderItemView::from).collect(),
        }
    }
}

impl From<&SectionContent> for SectionContentView {
    fn from(row: &SectionContent) -> Self {
        Self {
            section_key: row.section_key.clone(),
            locale: row.locale.clone(),
            content: row.content.clone(),
        }
    }
}

impl From<&SiteConfig> for SiteConfigView {
    fn from(row: &SiteConfig) -> Self {
        Self {
            key: row.key.clone(),
            value: row.value.clone(),
            config_type: row.config_type.clone(),
            group_name: row.group_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn youtube_row() -> SliderItem {
        SliderItem {
            id: 1,
            slider_id: 1,
            kind: "youtube".to_string(),
            url: None,
            youtube_id: Some("abcdEFGH123".to_string()),
            title: Some("Studio visit".to_string()),
            alt: None,
            artist_name: None,
            width: None,
            height: None,
            position: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn youtube_items_gain_derived_urls() {
        let view = SliderItemView::from(&youtube_row());
        assert_eq!(
            view.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/abcdEFGH123/hqdefault.jpg")
        );
        assert!(view
            .embed_url
            .as_deref()
            .unwrap()
            .starts_with("https://www.youtube.com/embed/abcdEFGH123"));
    }

    #[test]
    fn image_items_have_no_derived_urls() {
        let mut row = youtube_row();
        row.kind = "image".to_string();
        row.youtube_id = None;
        row.url = Some("https://cdn.gallery.example/a.jpg".to_string());

        let view = SliderItemView::from(&row);
        assert!(view.thumbnail_url.is_none());
        assert!(view.embed_url.is_none());
        assert_eq!(view.url.as_deref(), Some("https://cdn.gallery.example/a.jpg"));
    }
}
