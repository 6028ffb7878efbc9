//! Listing Cache - cached data-access layer for marketplace listings
//!
//! A generic TTL key/value cache plus the domain service built on top of it:
//! filter-keyed list caching, parallel aggregate assembly, and delete-based
//! invalidation against a pluggable remote store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod service;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::{CacheTtls, Config};
pub use service::ListingService;
