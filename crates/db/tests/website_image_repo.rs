//! Integration tests for `WebsiteImageRepo` against a real database.
//!
//! Exercises:
//! - Insert defaults and lookup by id
//! - Public read ordering and the active/section predicates
//! - Partial updates leave unset columns alone
//! - Delete reports whether a row existed
//!
//! Each test gets a fresh database from `sqlx::test`, created on the
//! server `DATABASE_URL` points at.

use sqlx::PgPool;
use thinklab_db::models::website_image::{CreateWebsiteImage, UpdateWebsiteImage};
use thinklab_db::repositories::WebsiteImageRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_image(section: &str, title: &str, display_order: i32, is_active: bool) -> CreateWebsiteImage {
    CreateWebsiteImage {
        title: title.to_string(),
        description: None,
        section: section.to_string(),
        image_url: format!("https://cdn.test/website-images/{section}/{title}.jpg"),
        alt_text: title.to_string(),
        display_order,
        is_active,
    }
}

fn titles(rows: &[thinklab_db::models::website_image::WebsiteImage]) -> Vec<&str> {
    rows.iter().map(|r| r.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Test: create then find round-trips every column
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find(pool: PgPool) {
    let mut input = new_image("hero", "Banner", 2, true);
    input.description = Some("Front page".into());

    let created = WebsiteImageRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.title, "Banner");
    assert_eq!(created.description.as_deref(), Some("Front page"));
    assert_eq!(created.display_order, 2);
    assert!(created.is_active);

    let found = WebsiteImageRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found, created);

    let missing = WebsiteImageRepo::find_by_id(&pool, uuid::Uuid::new_v4())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: public read returns active rows by display order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_active_filters_and_orders(pool: PgPool) {
    for input in [
        new_image("portrait", "Later", 5, true),
        new_image("portrait", "Sooner", 1, true),
        new_image("portrait", "Hidden", 0, false),
        new_image("events", "Wedding", 3, true),
    ] {
        WebsiteImageRepo::create(&pool, &input).await.unwrap();
    }

    let all = WebsiteImageRepo::list_active(&pool, None).await.unwrap();
    assert_eq!(titles(&all), vec!["Sooner", "Wedding", "Later"]);

    let portrait = WebsiteImageRepo::list_active(&pool, Some("portrait"))
        .await
        .unwrap();
    assert_eq!(titles(&portrait), vec!["Sooner", "Later"]);

    let admin = WebsiteImageRepo::list_all(&pool).await.unwrap();
    assert_eq!(titles(&admin), vec!["Wedding", "Hidden", "Sooner", "Later"]);
    assert_eq!(WebsiteImageRepo::count(&pool).await.unwrap(), 4);
}

// ---------------------------------------------------------------------------
// Test: update applies only the provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_is_partial(pool: PgPool) {
    let created = WebsiteImageRepo::create(&pool, &new_image("about", "Team", 0, true))
        .await
        .unwrap();

    let patch = UpdateWebsiteImage {
        is_active: Some(false),
        ..Default::default()
    };
    let updated = WebsiteImageRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");
    assert!(!updated.is_active);
    assert_eq!(updated.title, "Team");
    assert_eq!(updated.image_url, created.image_url);
    assert!(updated.updated_at >= created.updated_at);

    let none = WebsiteImageRepo::update(&pool, uuid::Uuid::new_v4(), &patch)
        .await
        .unwrap();
    assert!(none.is_none());
}

// ---------------------------------------------------------------------------
// Test: delete removes the row once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_existence(pool: PgPool) {
    let created = WebsiteImageRepo::create(&pool, &new_image("hero", "Banner", 0, true))
        .await
        .unwrap();

    assert!(WebsiteImageRepo::delete(&pool, created.id).await.unwrap());
    assert!(!WebsiteImageRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(WebsiteImageRepo::count(&pool).await.unwrap(), 0);
}
