//! API Module
//!
//! HTTP handlers and routing for the listing facade.
//!
//! # Endpoints
//! - `GET /listings` - List listings with optional filters
//! - `GET /listings/:id` - Assembled aggregate record for one listing
//! - `GET /search` - Free-text search over active listings
//! - `GET /categories/:name` - Active listings offering a service
//! - `DELETE /cache/listings/:id` - Invalidate a listing's cache entries
//! - `DELETE /cache` - Clear the entire cache
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
