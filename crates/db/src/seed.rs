//! Idempotent seed data applied at startup.
//!
//! Every entry goes through the same upserts the admin surface uses, so
//! running the seed twice produces zero net change. Seeded values are
//! overwritten freely by later admin edits — re-seeding restores the
//! defaults for config metadata but keeps edited values only where the
//! upsert semantics say so (config upserts overwrite all mutable
//! fields, matching the store contract).

use sqlx::PgPool;

use crate::models::section_content::UpsertSectionContent;
use crate::models::site_config::UpsertSiteConfig;
use crate::repositories::{SectionContentRepo, SiteConfigRepo};

/// A default `site_configs` row: `(key, value, config_type, group, label)`.
type ConfigDefault = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// Default site settings.
const DEFAULT_CONFIGS: &[ConfigDefault] = &[
    ("contact_email", "info@gallery.example", "email", "contact", "Contact email"),
    ("contact_phone", "+49 30 0000000", "phone", "contact", "Contact phone"),
    ("instagram_url", "https://instagram.com/gallery.example", "url", "social", "Instagram"),
    ("primary_color", "#1a1a1a", "color", "appearance", "Primary color"),
    ("accent_color", "#c8a24b", "color", "appearance", "Accent color"),
    ("heading_font", "serif", "select", "appearance", "Heading font"),
];

/// Default English copy for the editable page sections.
fn default_sections() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        (
            "hero",
            serde_json::json!({
                "headline": "Contemporary art, up close",
                "subline": "Exhibitions, stories, and evenings at the gallery",
                "cta_label": "Plan your visit"
            }),
        ),
        (
            "stories",
            serde_json::json!({
                "headline": "Stories from the studio",
                "intro": "Conversations with the artists behind the current shows"
            }),
        ),
        (
            "visit",
            serde_json::json!({
                "headline": "Visit us",
                "hours": "Tue\u{2013}Sun 10:00\u{2013}18:00",
                "admission": "Free admission"
            }),
        ),
    ]
}

/// Apply all default rows. Safe to run on every boot.
pub async fn apply_defaults(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (key, value, config_type, group, label) in DEFAULT_CONFIGS {
        let dto = UpsertSiteConfig {
            value: (*value).to_string(),
            config_type: (*config_type).to_string(),
            group_name: Some((*group).to_string()),
            label: Some((*label).to_string()),
        };
        SiteConfigRepo::upsert(pool, key, &dto).await?;
    }

    for (section_key, content) in default_sections() {
        let dto = UpsertSectionContent {
            content,
            is_active: None,
        };
        SectionContentRepo::upsert(pool, section_key, "en", &dto).await?;
    }

    tracing::info!(
        configs = DEFAULT_CONFIGS.len(),
        sections = default_sections().len(),
        "Seed defaults applied"
    );
    Ok(())
}
