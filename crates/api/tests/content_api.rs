//! Integration tests for the public content read surface: fallback on
//! empty store, live data, locale fallback, and cache invalidation.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_authed};
use sqlx::PgPool;
use vernissage_db::models::section_content::UpsertSectionContent;
use vernissage_db::repositories::slider_item_repo::NewSliderItem;
use vernissage_db::repositories::{SectionContentRepo, SliderItemRepo, SliderRepo};

fn youtube_item(id: &str) -> NewSliderItem {
    NewSliderItem {
        kind: "youtube".to_string(),
        url: None,
        youtube_id: Some(id.to_string()),
        title: Some("Studio visit".to_string()),
        alt: None,
        artist_name: Some("Resident artist".to_string()),
        width: None,
        height: None,
    }
}

// ---------------------------------------------------------------------------
// Fallback on empty store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_slider_store_serves_bundled_fallback(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sliders/hero").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // Not an empty array and not an error: the bundled hero slider.
    let sliders = json["data"].as_array().expect("data must be an array");
    assert!(!sliders.is_empty());
    assert_eq!(sliders[0]["slug"], "opening-nights");
    assert!(!sliders[0]["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_section_store_serves_bundled_fallback(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sections/visit").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["section_key"], "visit");
    assert!(json["data"]["content"]["headline"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_config_store_serves_bundled_fallback(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/config").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let keys: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"contact_email"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_section_returns_no_content(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sections/no-such-section").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Live data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn live_sliders_replace_fallback(pool: PgPool) {
    let slider = SliderRepo::create(&pool, "Summer Nights", "summer-nights", "hero")
        .await
        .unwrap();
    SliderItemRepo::create(&pool, slider.id, &youtube_item("abcdEFGH123"))
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sliders/hero").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let sliders = json["data"].as_array().unwrap();
    assert_eq!(sliders.len(), 1);
    assert_eq!(sliders[0]["slug"], "summer-nights");

    // YouTube items gain derived thumbnail and embed URLs.
    let item = &sliders[0]["items"][0];
    assert_eq!(
        item["thumbnail_url"],
        "https://img.youtube.com/vi/abcdEFGH123/hqdefault.jpg"
    );
    assert!(item["embed_url"]
        .as_str()
        .unwrap()
        .starts_with("https://www.youtube.com/embed/abcdEFGH123"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn other_sections_do_not_mask_fallback(pool: PgPool) {
    // A slider exists, but not for the requested section: the hero
    // request still degrades to the bundled dataset.
    SliderRepo::create(&pool, "Stories", "stories", "stories")
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sliders/hero").await;

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["slug"], "opening-nights");
}

// ---------------------------------------------------------------------------
// Locale fallback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn section_read_falls_back_to_default_locale(pool: PgPool) {
    SectionContentRepo::upsert(
        &pool,
        "visit",
        "en",
        &UpsertSectionContent {
            content: serde_json::json!({"headline": "Visit us"}),
            is_active: None,
        },
    )
    .await
    .unwrap();
    SectionContentRepo::upsert(
        &pool,
        "visit",
        "de",
        &UpsertSectionContent {
            content: serde_json::json!({"headline": "Besuchen Sie uns"}),
            is_active: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);

    // Requested locale exists: serve it.
    let response = get(&app, "/api/v1/content/sections/visit?locale=de").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "de");
    assert_eq!(json["data"]["content"]["headline"], "Besuchen Sie uns");

    // Requested locale missing: serve the default locale row.
    let response = get(&app, "/api/v1/content/sections/visit?locale=fr").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "en");
    assert_eq!(json["data"]["content"]["headline"], "Visit us");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_locale_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/api/v1/content/sections/visit?locale=english").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Cache staleness and invalidation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cached_read_stays_stale_until_invalidated(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // First read caches the fallback dataset.
    let json = body_json(get(&app, "/api/v1/content/sliders/hero").await).await;
    assert_eq!(json["data"][0]["slug"], "opening-nights");

    // A write lands after the cache was populated.
    SliderRepo::create(&pool, "Summer Nights", "summer-nights", "hero")
        .await
        .unwrap();

    // Within the staleness window the cached fallback is still served.
    let json = body_json(get(&app, "/api/v1/content/sliders/hero").await).await;
    assert_eq!(json["data"][0]["slug"], "opening-nights");

    // Operator-triggered invalidation forces the next read through.
    let response = post_authed(
        &app,
        "/api/v1/admin/cache/invalidate",
        &admin_token(),
        serde_json::json!({"tag": "sliders"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(&app, "/api/v1/content/sliders/hero").await).await;
    assert_eq!(json["data"][0]["slug"], "summer-nights");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cache_invalidation_requires_a_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::send(
        &app,
        axum::http::Method::POST,
        "/api/v1/admin/cache/invalidate",
        None,
        Some(serde_json::json!({"tag": "all"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
