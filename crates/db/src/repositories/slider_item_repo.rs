//! Repository for the `slider_items` table.

use sqlx::PgPool;
use vernissage_core::types::DbId;

use crate::models::slider_item::{SliderItem, UpdateSliderItem};

/// Column list for `slider_items` queries.
const COLUMNS: &str = "\
    id, slider_id, kind, url, youtube_id, title, alt, artist_name, \
    width, height, position, is_active, created_at, updated_at";

/// Field values for a new item, after handler-side validation has
/// resolved the media reference (canonical `youtube_id` or `url`).
#[derive(Debug, Clone)]
pub struct NewSliderItem {
    pub kind: String,
    pub url: Option<String>,
    pub youtube_id: Option<String>,
    pub title: Option<String>,
    pub alt: Option<String>,
    pub artist_name: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Provides CRUD and reorder operations for slider items.
pub struct SliderItemRepo;

impl SliderItemRepo {
    /// Insert a new item at the end of the slider.
    ///
    /// `position` is computed as `max(position) + 1` over the slider's
    /// items inside the INSERT, so concurrent appends cannot race a
    /// separate read.
    pub async fn create(
        pool: &PgPool,
        slider_id: DbId,
        item: &NewSliderItem,
    ) -> Result<SliderItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO slider_items \
                 (slider_id, kind, url, youtube_id, title, alt, artist_name, width, height, position) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, \
                 (SELECT COALESCE(MAX(position) + 1, 0) FROM slider_items WHERE slider_id = $1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SliderItem>(&query)
            .bind(slider_id)
            .bind(&item.kind)
            .bind(&item.url)
            .bind(&item.youtube_id)
            .bind(&item.title)
            .bind(&item.alt)
            .bind(&item.artist_name)
            .bind(item.width)
            .bind(item.height)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SliderItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slider_items WHERE id = $1");
        sqlx::query_as::<_, SliderItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a slider's items in render order (`position ASC, id ASC`).
    ///
    /// With `active_only`, soft-excluded items are filtered out.
    pub async fn list_for_slider(
        pool: &PgPool,
        slider_id: DbId,
        active_only: bool,
    ) -> Result<Vec<SliderItem>, sqlx::Error> {
        let query = if active_only {
            format!(
                "SELECT {COLUMNS} FROM slider_items \
                 WHERE slider_id = $1 AND is_active = TRUE \
                 ORDER BY position ASC, id ASC"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM slider_items \
                 WHERE slider_id = $1 \
                 ORDER BY position ASC, id ASC"
            )
        };
        sqlx::query_as::<_, SliderItem>(&query)
            .bind(slider_id)
            .fetch_all(pool)
            .await
    }

    /// The ids of a slider's items, in render order.
    pub async fn list_ids(pool: &PgPool, slider_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM slider_items WHERE slider_id = $1 ORDER BY position ASC, id ASC",
        )
        .bind(slider_id)
        .fetch_all(pool)
        .await
    }

    /// Atomically rewrite the slider's item positions to match `ordered_ids`
    /// (each item's position becomes its index in the list).
    ///
    /// Runs in one transaction: the slider's item rows are locked with
    /// `FOR UPDATE`, the locked id set is re-checked against the request,
    /// and only then are positions rewritten. Returns `Ok(None)` when the
    /// locked set no longer matches the request — i.e. a concurrent
    /// insert/delete won the race — leaving the table untouched. Readers
    /// never observe a partially renumbered slider.
    ///
    /// Callers are expected to have validated the request against
    /// `vernissage_core::ordering::validate_reorder` first; the in-
    /// transaction check only guards the race window.
    pub async fn reorder(
        pool: &PgPool,
        slider_id: DbId,
        ordered_ids: &[DbId],
    ) -> Result<Option<Vec<SliderItem>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut locked: Vec<DbId> = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM slider_items WHERE slider_id = $1 ORDER BY id FOR UPDATE",
        )
        .bind(slider_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut requested = ordered_ids.to_vec();
        requested.sort_unstable();
        locked.sort_unstable();
        if requested != locked {
            // Lost a race against a concurrent insert/delete; dropping
            // the transaction releases the locks without side effects.
            return Ok(None);
        }

        for (index, item_id) in ordered_ids.iter().enumerate() {
            sqlx::query("UPDATE slider_items SET position = $2 WHERE id = $1")
                .bind(item_id)
                .bind(index as i32)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM slider_items \
             WHERE slider_id = $1 \
             ORDER BY position ASC, id ASC"
        );
        let items = sqlx::query_as::<_, SliderItem>(&query)
            .bind(slider_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(items))
    }

    /// Partially update an item's descriptive fields.
    ///
    /// Returns `None` if no item with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSliderItem,
    ) -> Result<Option<SliderItem>, sqlx::Error> {
        let query = format!(
            "UPDATE slider_items SET \
                 title       = COALESCE($2, title), \
                 alt         = COALESCE($3, alt), \
                 artist_name = COALESCE($4, artist_name), \
                 width       = COALESCE($5, width), \
                 height      = COALESCE($6, height), \
                 is_active   = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SliderItem>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.alt)
            .bind(&dto.artist_name)
            .bind(dto.width)
            .bind(dto.height)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Flip an item's `is_active` flag, returning the updated row.
    ///
    /// Returns `None` if no item with the given ID exists.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<SliderItem>, sqlx::Error> {
        let query = format!(
            "UPDATE slider_items SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SliderItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slider_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count items referencing a slider (used by cascade-delete tests).
    pub async fn count_for_slider(pool: &PgPool, slider_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM slider_items WHERE slider_id = $1")
                .bind(slider_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
