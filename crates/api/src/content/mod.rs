//! Content serving layer: the public read path.
//!
//! Reads go cache → store → bundled static fallback. The fallback branch
//! is a deliberate graceful-degradation policy, not an error: an empty
//! table (or a store outage) degrades the page to "static but still
//! correct", never to a blank or crashed page.

pub mod cache;
pub mod fallback;
pub mod view;

use std::time::Duration;

use vernissage_core::locale::DEFAULT_LOCALE;
use vernissage_db::repositories::{SectionContentRepo, SiteConfigRepo, SliderRepo};
use vernissage_db::DbPool;

use self::cache::TtlCache;
use self::fallback::FallbackData;
use self::view::{SectionContentView, SiteConfigView, SliderView};

/// Staleness windows for the content read path, per data kind.
///
/// Sliders are the most frequently edited data and get the shortest
/// window; site config barely changes and gets the longest.
#[derive(Debug, Clone)]
pub struct CacheTtls {
    pub sliders_secs: u64,
    pub sections_secs: u64,
    pub config_secs: u64,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            sliders_secs: 60,
            sections_secs: 120,
            config_secs: 300,
        }
    }
}

impl CacheTtls {
    /// Load cache windows from environment variables.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `CACHE_TTL_SLIDERS_SECS`  | `60`    |
    /// | `CACHE_TTL_SECTIONS_SECS` | `120`   |
    /// | `CACHE_TTL_CONFIG_SECS`   | `300`   |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sliders_secs: env_u64("CACHE_TTL_SLIDERS_SECS", defaults.sliders_secs),
            sections_secs: env_u64("CACHE_TTL_SECTIONS_SECS", defaults.sections_secs),
            config_secs: env_u64("CACHE_TTL_CONFIG_SECS", defaults.config_secs),
        }
    }
}

fn env_u64(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid u64")),
        Err(_) => default,
    }
}

/// Cache tags accepted by the invalidation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidateTag {
    Sliders,
    Sections,
    Config,
    All,
}

/// The content read path: cache, store, static fallback.
///
/// Constructed once at startup with an injected pool and handed to
/// handlers through `AppState` — no global store handle.
pub struct ContentService {
    pool: DbPool,
    sliders: TtlCache<Vec<SliderView>>,
    sections: TtlCache<SectionContentView>,
    config: TtlCache<Vec<SiteConfigView>>,
    fallback: FallbackData,
}

impl ContentService {
    pub fn new(pool: DbPool, ttls: &CacheTtls) -> Self {
        Self {
            pool,
            sliders: TtlCache::new(Duration::from_secs(ttls.sliders_secs)),
            sections: TtlCache::new(Duration::from_secs(ttls.sections_secs)),
            config: TtlCache::new(Duration::from_secs(ttls.config_secs)),
            fallback: FallbackData::load(),
        }
    }

    /// Active sliders of one section, freshest-acceptable.
    ///
    /// Never fails: a store error or an empty result set degrades to the
    /// bundled dataset for that section.
    pub async fn sliders_by_section(&self, section: &str) -> Vec<SliderView> {
        if let Some(cached) = self.sliders.get(section) {
            return cached;
        }

        let views = match SliderRepo::list_by_section(&self.pool, section).await {
            Ok(rows) if rows.is_empty() => {
                tracing::debug!(section, "Slider store empty, serving static fallback");
                self.fallback.sliders_for_section(section)
            }
            Ok(rows) => rows.iter().map(SliderView::from).collect(),
            Err(err) => {
                tracing::warn!(section, error = %err, "Slider store read failed, serving static fallback");
                self.fallback.sliders_for_section(section)
            }
        };

        self.sliders.insert(section, views.clone());
        views
    }

    /// Section copy for `(section_key, locale)`, freshest-acceptable.
    ///
    /// Falls back requested locale → default locale → bundled dataset.
    /// Returns `None` only when no source knows the section at all.
    pub async fn section_content(
        &self,
        section_key: &str,
        locale: &str,
    ) -> Option<SectionContentView> {
        let cache_key = format!("{section_key}:{locale}");
        if let Some(cached) = self.sections.get(&cache_key) {
            return Some(cached);
        }

        let view = match self.read_section(section_key, locale).await {
            Ok(view) => view,
            Err(err) => {
                tracing::warn!(
                    section_key,
                    locale,
                    error = %err,
                    "Section store read failed, serving static fallback"
                );
                self.fallback.section(section_key)
            }
        }?;

        self.sections.insert(&cache_key, view.clone());
        Some(view)
    }

    async fn read_section(
        &self,
        section_key: &str,
        locale: &str,
    ) -> Result<Option<SectionContentView>, sqlx::Error> {
        if let Some(row) = SectionContentRepo::find(&self.pool, section_key, locale).await? {
            return Ok(Some(SectionContentView::from(&row)));
        }
        if locale != DEFAULT_LOCALE {
            if let Some(row) =
                SectionContentRepo::find(&self.pool, section_key, DEFAULT_LOCALE).await?
            {
                return Ok(Some(SectionContentView::from(&row)));
            }
        }
        tracing::debug!(section_key, locale, "Section store empty, serving static fallback");
        Ok(self.fallback.section(section_key))
    }

    /// All site settings, freshest-acceptable.
    pub async fn site_config(&self) -> Vec<SiteConfigView> {
        if let Some(cached) = self.config.get("config") {
            return cached;
        }

        let views = match SiteConfigRepo::list_all(&self.pool).await {
            Ok(rows) if rows.is_empty() => {
                tracing::debug!("Config store empty, serving static fallback");
                self.fallback.config.clone()
            }
            Ok(rows) => rows.iter().map(SiteConfigView::from).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "Config store read failed, serving static fallback");
                self.fallback.config.clone()
            }
        };

        self.config.insert("config", views.clone());
        views
    }

    /// Force the next read for the tagged data to bypass the staleness
    /// window.
    pub fn invalidate(&self, tag: InvalidateTag) {
        match tag {
            InvalidateTag::Sliders => self.sliders.clear(),
            InvalidateTag::Sections => self.sections.clear(),
            InvalidateTag::Config => self.config.clear(),
            InvalidateTag::All => {
                self.sliders.clear();
                self.sections.clear();
                self.config.clear();
            }
        }
        tracing::info!(?tag, "Content cache invalidated");
    }
}
