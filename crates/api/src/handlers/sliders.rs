//! Handlers for the admin slider surface: slider CRUD, item CRUD, and
//! the full-list reorder operation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::media::MediaKind;
use vernissage_core::types::DbId;
use vernissage_core::{ordering, slug, youtube};
use vernissage_db::models::slider::{CreateSlider, SliderListParams, SliderWithItems, UpdateSlider};
use vernissage_db::models::slider_item::{CreateSliderItem, ReorderRequest, UpdateSliderItem};
use vernissage_db::repositories::slider_item_repo::NewSliderItem;
use vernissage_db::repositories::{SliderItemRepo, SliderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Normalize a section tag: trimmed, lowercased, non-empty.
fn normalize_section(section: &str) -> Result<String, CoreError> {
    let section = section.trim().to_lowercase();
    if section.is_empty() {
        return Err(CoreError::Validation(
            "Section must not be empty".to_string(),
        ));
    }
    Ok(section)
}

/// Resolve a create-item payload to stored field values.
///
/// Enforces the per-kind identity invariant: `image`/`video_url` items
/// carry a hosted `url`, `youtube` items carry a canonical 11-char id
/// extracted from whatever URL shape the editor pasted.
fn resolve_item(input: &CreateSliderItem) -> Result<NewSliderItem, CoreError> {
    let kind = MediaKind::parse(&input.kind)?;

    let (url, youtube_id) = if kind.requires_url() {
        let url = input
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                CoreError::Validation(format!("A url is required for {kind} items"))
            })?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CoreError::Validation(
                "Item url must start with http:// or https://".to_string(),
            ));
        }
        (Some(url.to_string()), None)
    } else {
        let reference = input.youtube_ref.as_deref().unwrap_or_default();
        let id = youtube::extract_id(reference).ok_or_else(|| {
            CoreError::Validation(format!(
                "Could not resolve a YouTube video id from '{reference}'"
            ))
        })?;
        (None, Some(id))
    };

    Ok(NewSliderItem {
        kind: kind.as_str().to_string(),
        url,
        youtube_id,
        title: input.title.clone(),
        alt: input.alt.clone(),
        artist_name: input.artist_name.clone(),
        width: input.width,
        height: input.height,
    })
}

// ---------------------------------------------------------------------------
// Slider endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/sliders?section=
///
/// List every slider (active or not) with its items.
pub async fn list_sliders(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<SliderListParams>,
) -> AppResult<impl IntoResponse> {
    let sliders = SliderRepo::list_all(&state.pool, params.section.as_deref()).await?;
    Ok(Json(DataResponse { data: sliders }))
}

/// POST /api/v1/admin/sliders
///
/// Create a slider. The slug is derived from the name; a duplicate slug
/// is rejected with 409 by the unique constraint.
pub async fn create_slider(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateSlider>,
) -> AppResult<impl IntoResponse> {
    let slug = slug::slugify(&input.name)?;
    let section = normalize_section(&input.section)?;

    let slider = SliderRepo::create(&state.pool, input.name.trim(), &slug, &section).await?;

    tracing::info!(
        slider_id = slider.id,
        slug = %slider.slug,
        section = %slider.section,
        admin = %session.email,
        "Slider created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: slider })))
}

/// GET /api/v1/admin/sliders/:id
///
/// Retrieve a single slider with all of its items.
pub async fn get_slider(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slider = SliderRepo::find_by_id(&state.pool, slider_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: slider_id,
        }))?;
    let items = SliderItemRepo::list_for_slider(&state.pool, slider_id, false).await?;

    Ok(Json(DataResponse {
        data: SliderWithItems { slider, items },
    }))
}

/// PATCH /api/v1/admin/sliders/:id
///
/// Partially update a slider.
pub async fn update_slider(
    session: AdminSession,
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
    Json(mut input): Json<UpdateSlider>,
) -> AppResult<impl IntoResponse> {
    if let Some(section) = &input.section {
        input.section = Some(normalize_section(section)?);
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Name must not be empty".to_string(),
            )));
        }
    }

    let slider = SliderRepo::update(&state.pool, slider_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: slider_id,
        }))?;

    tracing::info!(slider_id, admin = %session.email, "Slider updated");

    Ok(Json(DataResponse { data: slider }))
}

/// DELETE /api/v1/admin/sliders/:id
///
/// Delete a slider; its items go with it (cascade).
pub async fn delete_slider(
    session: AdminSession,
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SliderRepo::delete(&state.pool, slider_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: slider_id,
        }));
    }

    tracing::info!(slider_id, admin = %session.email, "Slider deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Item endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/sliders/:id/items
///
/// Append an item to a slider.
pub async fn add_item(
    session: AdminSession,
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
    Json(input): Json<CreateSliderItem>,
) -> AppResult<impl IntoResponse> {
    SliderRepo::find_by_id(&state.pool, slider_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: slider_id,
        }))?;

    let new_item = resolve_item(&input)?;
    let item = SliderItemRepo::create(&state.pool, slider_id, &new_item).await?;

    tracing::info!(
        slider_id,
        item_id = item.id,
        kind = %item.kind,
        admin = %session.email,
        "Slider item added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/sliders/:id/reorder
///
/// Atomically rewrite the slider's item order. The request must carry
/// the complete current item set, in the desired order.
pub async fn reorder_items(
    session: AdminSession,
    State(state): State<AppState>,
    Path(slider_id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    SliderRepo::find_by_id(&state.pool, slider_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Slider",
            id: slider_id,
        }))?;

    let current = SliderItemRepo::list_ids(&state.pool, slider_id).await?;
    ordering::validate_reorder(&current, &input.item_ids)?;

    let items = SliderItemRepo::reorder(&state.pool, slider_id, &input.item_ids)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Slider items changed while reordering; reload and retry".to_string(),
            ))
        })?;

    tracing::info!(
        slider_id,
        items = items.len(),
        admin = %session.email,
        "Slider items reordered",
    );

    Ok(Json(DataResponse { data: items }))
}

/// PATCH /api/v1/admin/items/:id
///
/// Partially update an item's descriptive fields.
pub async fn update_item(
    session: AdminSession,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateSliderItem>,
) -> AppResult<impl IntoResponse> {
    let item = SliderItemRepo::update(&state.pool, item_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SliderItem",
            id: item_id,
        }))?;

    tracing::info!(item_id, admin = %session.email, "Slider item updated");

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/admin/items/:id/toggle
///
/// Flip an item's `is_active` flag (soft-exclude from rendering).
pub async fn toggle_item(
    session: AdminSession,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = SliderItemRepo::toggle_active(&state.pool, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SliderItem",
            id: item_id,
        }))?;

    tracing::info!(
        item_id,
        is_active = item.is_active,
        admin = %session.email,
        "Slider item toggled",
    );

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/items/:id
///
/// Delete a single item.
pub async fn delete_item(
    session: AdminSession,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SliderItemRepo::delete(&state.pool, item_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SliderItem",
            id: item_id,
        }));
    }

    tracing::info!(item_id, admin = %session.email, "Slider item deleted");

    Ok(StatusCode::NO_CONTENT)
}
