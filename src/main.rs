//! Listing Cache - cached data-access layer for marketplace listings
//!
//! Hosts the library behind a small HTTP facade, backed by an in-memory
//! remote store seeded with demo data.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod remote;
mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use serde_json::json;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::TtlCache;
use config::Config;
use remote::MemoryStore;
use service::ListingService;

/// Main entry point for the listing cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Seed the in-memory remote store with demo data
/// 4. Build the cache and the listing service around it
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting listing cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, ttls: list={:?} entity={:?} search={:?} category={:?}",
        config.server_port,
        config.ttls.list,
        config.ttls.entity,
        config.ttls.search,
        config.ttls.category
    );

    let store = Arc::new(demo_store().await);
    let cache = TtlCache::new(config.ttls.list);
    let service = ListingService::new(cache, store, config.ttls);
    info!("Listing service initialized");

    let app = create_router(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}

/// Seeds an in-memory remote store with a couple of demo listings so the
/// server is usable out of the box.
async fn demo_store() -> MemoryStore {
    let store = MemoryStore::new();

    store
        .put_collection(
            remote::LISTINGS,
            vec![
                json!({
                    "id": "l1",
                    "name": "Corner Bakery",
                    "address": "12 Mill Lane",
                    "locality": "Brighton",
                    "phone": "+44 1273 000001",
                    "email": "hello@cornerbakery.example",
                    "status": "active",
                    "geo": {"lat": 50.8225, "lng": -0.1372},
                    "created_at": "2024-05-01T09:00:00Z"
                }),
                json!({
                    "id": "l2",
                    "name": "Ace Plumbing",
                    "address": "4 Harbour Road",
                    "locality": "Brighton",
                    "phone": "+44 1273 000002",
                    "email": "office@aceplumbing.example",
                    "status": "active",
                    "created_at": "2024-06-12T14:30:00Z"
                }),
                json!({
                    "id": "l3",
                    "name": "Harbour Books",
                    "address": "9 Quay Street",
                    "locality": "Hove",
                    "phone": "+44 1273 000003",
                    "email": "shop@harbourbooks.example",
                    "status": "pending",
                    "created_at": "2024-07-20T11:00:00Z"
                }),
            ],
        )
        .await;

    store
        .put_collection(
            remote::LISTING_SERVICES,
            vec![
                json!({"id": "s1", "listing_id": "l1", "name": "catering", "price": 120.0}),
                json!({"id": "s2", "listing_id": "l1", "name": "delivery", "price": 5.0}),
                json!({"id": "s3", "listing_id": "l2", "name": "repairs", "price": 60.0}),
                json!({"id": "s4", "listing_id": "l2", "name": "installation"}),
            ],
        )
        .await;

    store
        .put_collection(
            remote::LISTING_SCHEDULE,
            vec![
                json!({"id": "h1", "listing_id": "l1", "weekday": 0, "opens": "07:00", "closes": "16:00"}),
                json!({"id": "h2", "listing_id": "l1", "weekday": 5, "opens": "08:00", "closes": "13:00"}),
                json!({"id": "h3", "listing_id": "l2", "weekday": 0, "opens": "09:00", "closes": "17:30"}),
            ],
        )
        .await;

    store
        .put_collection(
            remote::LISTING_IMAGES,
            vec![
                json!({"id": "i2", "listing_id": "l1", "url": "https://img.example/l1/counter.jpg", "display_order": 2}),
                json!({"id": "i1", "listing_id": "l1", "url": "https://img.example/l1/front.jpg", "display_order": 1}),
            ],
        )
        .await;

    store
        .put_collection(
            remote::LISTING_PAYMENT_METHODS,
            vec![
                json!({"id": "p1", "listing_id": "l1", "name": "cash"}),
                json!({"id": "p2", "listing_id": "l1", "name": "card"}),
                json!({"id": "p3", "listing_id": "l2", "name": "transfer"}),
            ],
        )
        .await;

    store
}
