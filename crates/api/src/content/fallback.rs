//! Bundled static fallback dataset.
//!
//! When the live store has no rows for a requested key, the public read
//! path serves this compiled-in dataset instead of an empty page. The
//! JSON files mirror the serving view types exactly.

use crate::content::view::{SectionContentView, SiteConfigView, SliderView};

const SLIDERS_JSON: &str = include_str!("../../fallback/sliders.json");
const SECTIONS_JSON: &str = include_str!("../../fallback/sections.json");
const CONFIG_JSON: &str = include_str!("../../fallback/config.json");

/// The full bundled dataset, parsed once at service construction.
#[derive(Debug, Clone)]
pub struct FallbackData {
    pub sliders: Vec<SliderView>,
    pub sections: Vec<SectionContentView>,
    pub config: Vec<SiteConfigView>,
}

impl FallbackData {
    /// Parse the bundled JSON.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in JSON is malformed; that is a build
    /// defect and must fail at startup, not at serve time.
    pub fn load() -> Self {
        Self {
            sliders: serde_json::from_str(SLIDERS_JSON)
                .expect("bundled fallback/sliders.json must parse"),
            sections: serde_json::from_str(SECTIONS_JSON)
                .expect("bundled fallback/sections.json must parse"),
            config: serde_json::from_str(CONFIG_JSON)
                .expect("bundled fallback/config.json must parse"),
        }
    }

    /// Fallback sliders for one section.
    pub fn sliders_for_section(&self, section: &str) -> Vec<SliderView> {
        self.sliders
            .iter()
            .filter(|s| s.section == section)
            .cloned()
            .collect()
    }

    /// Fallback copy for one section key (the dataset is English-only).
    pub fn section(&self, section_key: &str) -> Option<SectionContentView> {
        self.sections
            .iter()
            .find(|s| s.section_key == section_key)
            .cloned()
    }
}
