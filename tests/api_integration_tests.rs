//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle of the HTTP facade against a seeded
//! in-memory remote store.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use listing_cache::api::create_router;
use listing_cache::cache::TtlCache;
use listing_cache::config::CacheTtls;
use listing_cache::remote::MemoryStore;
use listing_cache::{AppState, ListingService};

// == Helper Functions ==

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .put_collection(
            "listings",
            vec![
                json!({
                    "id": "l1",
                    "name": "Corner Bakery",
                    "address": "12 Mill Lane",
                    "locality": "Brighton",
                    "phone": "+44 1273 000001",
                    "email": "hello@cornerbakery.example",
                    "status": "active",
                    "created_at": "2024-05-01T09:00:00Z"
                }),
                json!({
                    "id": "l2",
                    "name": "Ace Plumbing",
                    "address": "4 Harbour Road",
                    "locality": "Hove",
                    "phone": "+44 1273 000002",
                    "email": "office@aceplumbing.example",
                    "status": "inactive",
                    "created_at": "2024-06-12T14:30:00Z"
                }),
            ],
        )
        .await;
    store
        .put_collection(
            "listing_services",
            vec![json!({"id": "s1", "listing_id": "l1", "name": "catering"})],
        )
        .await;
    store
        .put_collection(
            "listing_images",
            vec![
                json!({"id": "i2", "listing_id": "l1", "url": "https://img.example/2.jpg", "display_order": 2}),
                json!({"id": "i1", "listing_id": "l1", "url": "https://img.example/1.jpg", "display_order": 1}),
            ],
        )
        .await;
    store.put_collection("listing_schedule", vec![]).await;
    store.put_collection("listing_payment_methods", vec![]).await;
    store
}

async fn create_test_app() -> Router {
    let service = ListingService::new(
        TtlCache::new(Duration::from_secs(300)),
        Arc::new(seeded_store().await),
        CacheTtls::default(),
    );
    create_router(AppState::new(service))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Listings Endpoints ==

#[tokio::test]
async fn test_list_endpoint_returns_all_listings() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    // Ordered by name
    assert_eq!(json["listings"][0]["name"], "Ace Plumbing");
    assert_eq!(json["listings"][1]["name"], "Corner Bakery");
}

#[tokio::test]
async fn test_list_endpoint_applies_filters() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/listings?status=active&locality=brighton").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["listings"][0]["id"], "l1");
}

#[tokio::test]
async fn test_get_endpoint_returns_aggregate() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/listings/l1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["listing"]["name"], "Corner Bakery");
    assert_eq!(json["services"].as_array().unwrap().len(), 1);
    // Images sorted by display_order
    assert_eq!(json["images"][0]["display_order"], 1);
    assert_eq!(json["images"][1]["display_order"], 2);
}

#[tokio::test]
async fn test_get_endpoint_unknown_id_is_404() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/listings/l999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("l999"));
}

// == Search and Category Endpoints ==

#[tokio::test]
async fn test_search_endpoint_matches_active_only() {
    let app = create_test_app().await;

    // "Harbour" appears only in the inactive listing's address
    let (status, json) = get_json(app.clone(), "/search?q=harbour").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);

    let (status, json) = get_json(app, "/search?q=bakery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_category_endpoint() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/categories/catering").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["listings"][0]["id"], "l1");
}

// == Cache Endpoints ==

#[tokio::test]
async fn test_invalidate_endpoint_drops_cached_entries() {
    let app = create_test_app().await;

    // Populate entity and list caches
    let (status, _) = get_json(app.clone(), "/listings/l1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_json(app.clone(), "/listings").await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get_json(app.clone(), "/cache/stats").await;
    assert_eq!(stats["entries"], 2);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/listings/l1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get_json(app, "/cache/stats").await;
    assert_eq!(stats["entries"], 0);
}

#[tokio::test]
async fn test_clear_endpoint_empties_cache() {
    let app = create_test_app().await;

    get_json(app.clone(), "/listings").await;
    get_json(app.clone(), "/categories/catering").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, stats) = get_json(app, "/cache/stats").await;
    assert_eq!(stats["entries"], 0);
}

#[tokio::test]
async fn test_stats_endpoint_tracks_hits_and_misses() {
    let app = create_test_app().await;

    // Miss then hit on the same list query
    get_json(app.clone(), "/listings").await;
    get_json(app.clone(), "/listings").await;

    let (status, stats) = get_json(app, "/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["entries"], 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
