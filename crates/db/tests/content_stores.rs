//! Integration tests for the config and section-content stores: upsert
//! idempotence, locale rows, and the startup seed.

use sqlx::PgPool;
use vernissage_db::models::section_content::UpsertSectionContent;
use vernissage_db::models::site_config::UpsertSiteConfig;
use vernissage_db::repositories::{SectionContentRepo, SiteConfigRepo};
use vernissage_db::seed;

// ---------------------------------------------------------------------------
// Site config upsert
// ---------------------------------------------------------------------------

fn email_config(value: &str) -> UpsertSiteConfig {
    UpsertSiteConfig {
        value: value.to_string(),
        config_type: "email".to_string(),
        group_name: Some("contact".to_string()),
        label: Some("Contact email".to_string()),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn config_upsert_is_idempotent(pool: PgPool) {
    let dto = email_config("info@gallery.example");

    let first = SiteConfigRepo::upsert(&pool, "contact_email", &dto).await.unwrap();
    let second = SiteConfigRepo::upsert(&pool, "contact_email", &dto).await.unwrap();

    // Same row, same stored state, no extra rows.
    assert_eq!(first.id, second.id);
    assert_eq!(first.value, second.value);
    assert_eq!(SiteConfigRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn config_upsert_overwrites_mutable_fields(pool: PgPool) {
    SiteConfigRepo::upsert(&pool, "contact_email", &email_config("old@gallery.example"))
        .await
        .unwrap();
    let updated = SiteConfigRepo::upsert(&pool, "contact_email", &email_config("new@gallery.example"))
        .await
        .unwrap();

    assert_eq!(updated.value, "new@gallery.example");

    let found = SiteConfigRepo::find_by_key(&pool, "contact_email")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.value, "new@gallery.example");
    assert_eq!(found.config_type, "email");
}

#[sqlx::test(migrations = "./migrations")]
async fn config_listing_orders_by_group_then_key(pool: PgPool) {
    SiteConfigRepo::upsert(
        &pool,
        "accent_color",
        &UpsertSiteConfig {
            value: "#c8a24b".to_string(),
            config_type: "color".to_string(),
            group_name: Some("appearance".to_string()),
            label: None,
        },
    )
    .await
    .unwrap();
    SiteConfigRepo::upsert(&pool, "contact_email", &email_config("info@gallery.example"))
        .await
        .unwrap();

    let all = SiteConfigRepo::list_all(&pool).await.unwrap();
    let keys: Vec<&str> = all.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["accent_color", "contact_email"]);
}

// ---------------------------------------------------------------------------
// Section content upsert and locales
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn section_upsert_is_idempotent_per_locale(pool: PgPool) {
    let dto = UpsertSectionContent {
        content: serde_json::json!({"headline": "Visit us"}),
        is_active: None,
    };

    let first = SectionContentRepo::upsert(&pool, "visit", "en", &dto).await.unwrap();
    let second = SectionContentRepo::upsert(&pool, "visit", "en", &dto).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(SectionContentRepo::count(&pool).await.unwrap(), 1);

    // A different locale is a separate row under the same key.
    let de = SectionContentRepo::upsert(&pool, "visit", "de", &dto).await.unwrap();
    assert_ne!(de.id, first.id);
    assert_eq!(SectionContentRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn section_upsert_replaces_content(pool: PgPool) {
    SectionContentRepo::upsert(
        &pool,
        "hero",
        "en",
        &UpsertSectionContent {
            content: serde_json::json!({"headline": "Old"}),
            is_active: None,
        },
    )
    .await
    .unwrap();

    let updated = SectionContentRepo::upsert(
        &pool,
        "hero",
        "en",
        &UpsertSectionContent {
            content: serde_json::json!({"headline": "New"}),
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.content["headline"], "New");
}

#[sqlx::test(migrations = "./migrations")]
async fn deactivated_section_is_invisible_to_find(pool: PgPool) {
    SectionContentRepo::upsert(
        &pool,
        "hero",
        "en",
        &UpsertSectionContent {
            content: serde_json::json!({"headline": "Hidden"}),
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    assert!(SectionContentRepo::find(&pool, "hero", "en").await.unwrap().is_none());

    // The admin listing still shows the row.
    assert_eq!(SectionContentRepo::list_all(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn seed_twice_produces_zero_net_change(pool: PgPool) {
    seed::apply_defaults(&pool).await.unwrap();
    let configs_after_first = SiteConfigRepo::count(&pool).await.unwrap();
    let sections_after_first = SectionContentRepo::count(&pool).await.unwrap();
    assert!(configs_after_first > 0);
    assert!(sections_after_first > 0);

    seed::apply_defaults(&pool).await.unwrap();
    assert_eq!(SiteConfigRepo::count(&pool).await.unwrap(), configs_after_first);
    assert_eq!(SectionContentRepo::count(&pool).await.unwrap(), sections_after_first);

    // Spot-check a seeded value survived the second run unchanged.
    let email = SiteConfigRepo::find_by_key(&pool, "contact_email")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(email.value, "info@gallery.example");
    assert_eq!(email.config_type, "email");
}

#[sqlx::test(migrations = "./migrations")]
async fn seed_defaults_are_served_through_the_normal_read_path(pool: PgPool) {
    seed::apply_defaults(&pool).await.unwrap();

    let hero = SectionContentRepo::find(&pool, "hero", "en").await.unwrap().unwrap();
    assert!(hero.content["headline"].is_string());
    assert!(hero.is_active);
}
