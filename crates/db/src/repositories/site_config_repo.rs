//! Repository for the `site_configs` table.

use sqlx::PgPool;

use crate::models::site_config::{SiteConfig, UpsertSiteConfig};

/// Column list for `site_configs` queries.
const COLUMNS: &str = "\
    id, key, value, config_type, group_name, label, created_at, updated_at";

/// Provides upsert-by-key operations for site settings.
pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Insert or update the setting stored under `key`.
    ///
    /// Uses `ON CONFLICT (key)` so seeds and admin saves are the same
    /// idempotent operation; all mutable fields are overwritten.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        dto: &UpsertSiteConfig,
    ) -> Result<SiteConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_configs (key, value, config_type, group_name, label) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (key) DO UPDATE SET \
                 value       = EXCLUDED.value, \
                 config_type = EXCLUDED.config_type, \
                 group_name  = EXCLUDED.group_name, \
                 label       = EXCLUDED.label \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(key)
            .bind(&dto.value)
            .bind(&dto.config_type)
            .bind(&dto.group_name)
            .bind(&dto.label)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by its unique key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<SiteConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_configs WHERE key = $1");
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List every setting, grouped for the admin UI.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SiteConfig>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_configs ORDER BY group_name ASC NULLS LAST, key ASC"
        );
        sqlx::query_as::<_, SiteConfig>(&query).fetch_all(pool).await
    }

    /// Count all rows (used by seed-idempotence tests).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_configs")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
