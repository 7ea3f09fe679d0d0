//! Repository for the `sliders` table.

use sqlx::PgPool;
use vernissage_core::types::DbId;

use crate::models::slider::{Slider, SliderWithItems, UpdateSlider};
use crate::repositories::SliderItemRepo;

/// Column list for `sliders` queries.
const COLUMNS: &str = "\
    id, name, slug, section, is_active, position, created_at, updated_at";

/// Provides CRUD operations for sliders.
pub struct SliderRepo;

impl SliderRepo {
    /// Insert a new slider with a pre-generated slug.
    ///
    /// The slider is appended to its section: `position` is computed as
    /// `max(position) + 1` over the section inside the INSERT itself, so
    /// concurrent creates cannot race a separate read.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        slug: &str,
        section: &str,
    ) -> Result<Slider, sqlx::Error> {
        let query = format!(
            "INSERT INTO sliders (name, slug, section, position) \
             VALUES ($1, $2, $3, \
                 (SELECT COALESCE(MAX(position) + 1, 0) FROM sliders WHERE section = $3)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(name)
            .bind(slug)
            .bind(section)
            .fetch_one(pool)
            .await
    }

    /// Find a slider by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sliders WHERE id = $1");
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing: every slider (active or not), optionally filtered
    /// to one section, each with all of its items.
    pub async fn list_all(
        pool: &PgPool,
        section: Option<&str>,
    ) -> Result<Vec<SliderWithItems>, sqlx::Error> {
        let sliders = match section {
            Some(section) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM sliders \
                     WHERE section = $1 \
                     ORDER BY position ASC, id ASC"
                );
                sqlx::query_as::<_, Slider>(&query)
                    .bind(section)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM sliders ORDER BY section ASC, position ASC, id ASC"
                );
                sqlx::query_as::<_, Slider>(&query).fetch_all(pool).await?
            }
        };

        let mut result = Vec::with_capacity(sliders.len());
        for slider in sliders {
            let items = SliderItemRepo::list_for_slider(pool, slider.id, false).await?;
            result.push(SliderWithItems { slider, items });
        }
        Ok(result)
    }

    /// Public listing: active sliders of one section in render order,
    /// each with its active items in render order. Ties break on `id`
    /// for determinism.
    pub async fn list_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Vec<SliderWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sliders \
             WHERE section = $1 AND is_active = TRUE \
             ORDER BY position ASC, id ASC"
        );
        let sliders = sqlx::query_as::<_, Slider>(&query)
            .bind(section)
            .fetch_all(pool)
            .await?;

        let mut result = Vec::with_capacity(sliders.len());
        for slider in sliders {
            let items = SliderItemRepo::list_for_slider(pool, slider.id, true).await?;
            result.push(SliderWithItems { slider, items });
        }
        Ok(result)
    }

    /// Partially update a slider.
    ///
    /// Returns `None` if no slider with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSlider,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET \
                 name      = COALESCE($2, name), \
                 section   = COALESCE($3, section), \
                 is_active = COALESCE($4, is_active), \
                 position  = COALESCE($5, position) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.section)
            .bind(dto.is_active)
            .bind(dto.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slider. The `ON DELETE CASCADE` constraint removes its
    /// items in the same transaction.
    ///
    /// Returns `true` if a slider was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
