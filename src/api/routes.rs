//! API Routes
//!
//! Configures the Axum router with all listing facade endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    category_handler, clear_cache_handler, get_handler, health_handler, invalidate_handler,
    list_handler, search_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /listings` - List listings with optional filters
/// - `GET /listings/:id` - Assembled aggregate record for one listing
/// - `GET /search` - Free-text search over active listings
/// - `GET /categories/:name` - Active listings offering a service
/// - `DELETE /cache/listings/:id` - Invalidate a listing's cache entries
/// - `DELETE /cache` - Clear the entire cache
/// - `GET /cache/stats` - Cache hit/miss statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/listings", get(list_handler))
        .route("/listings/:id", get(get_handler))
        .route("/search", get(search_handler))
        .route("/categories/:name", get(category_handler))
        .route("/cache/listings/:id", delete(invalidate_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
