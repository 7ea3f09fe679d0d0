//! Repository for the `section_contents` table.

use sqlx::PgPool;

use crate::models::section_content::{SectionContent, UpsertSectionContent};

/// Column list for `section_contents` queries.
const COLUMNS: &str = "\
    id, section_key, locale, content, is_active, created_at, updated_at";

/// Provides upsert-by-key operations for per-locale section content.
pub struct SectionContentRepo;

impl SectionContentRepo {
    /// Insert or update the content for `(section_key, locale)`.
    ///
    /// Uses `ON CONFLICT` on the unique `(section_key, locale)` pair so
    /// seeds and admin saves are the same idempotent operation.
    pub async fn upsert(
        pool: &PgPool,
        section_key: &str,
        locale: &str,
        dto: &UpsertSectionContent,
    ) -> Result<SectionContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO section_contents (section_key, locale, content, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, TRUE)) \
             ON CONFLICT (section_key, locale) DO UPDATE SET \
                 content   = EXCLUDED.content, \
                 is_active = COALESCE($4, section_contents.is_active) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SectionContent>(&query)
            .bind(section_key)
            .bind(locale)
            .bind(&dto.content)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find the active content row for `(section_key, locale)`.
    pub async fn find(
        pool: &PgPool,
        section_key: &str,
        locale: &str,
    ) -> Result<Option<SectionContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM section_contents \
             WHERE section_key = $1 AND locale = $2 AND is_active = TRUE"
        );
        sqlx::query_as::<_, SectionContent>(&query)
            .bind(section_key)
            .bind(locale)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing: every row, active or not.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SectionContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM section_contents ORDER BY section_key ASC, locale ASC"
        );
        sqlx::query_as::<_, SectionContent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count all rows (used by seed-idempotence tests).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM section_contents")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
