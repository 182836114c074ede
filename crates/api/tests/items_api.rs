//! HTTP-level integration tests for the item catalog endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, TEST_BASE_URL};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /items returns the seeded catalog with derived image URLs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_items_returns_seeded_catalog(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());
    let response = get(app, "/items").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 6);

    assert_eq!(items[0]["title"], "Lâmpadas");
    assert_eq!(
        items[0]["image_url"],
        format!("{TEST_BASE_URL}/uploads/lampadas.svg")
    );
    assert_eq!(items[5]["title"], "Óleo de Cozinha");

    // Wire view exposes exactly id, title, and the derived URL.
    for item in items {
        assert!(item["id"].is_number());
        assert!(item.get("image").is_none(), "raw filename should stay internal");
        assert!(item.get("created_at").is_none(), "audit columns stay internal");
    }
}
