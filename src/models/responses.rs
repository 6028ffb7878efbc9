//! Response DTOs for the HTTP facade
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Listing;

/// Response body for listing collections (list, search, category endpoints).
#[derive(Debug, Clone, Serialize)]
pub struct ListingsResponse {
    /// Number of listings returned
    pub count: usize,
    /// The listings themselves
    pub listings: Vec<Listing>,
}

impl ListingsResponse {
    /// Creates a new ListingsResponse
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            count: listings.len(),
            listings,
        }
    }
}

/// Response body for cache invalidation (DELETE /cache/listings/:id).
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The listing id whose cache entries were invalidated
    pub id: String,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            message: format!("Cache invalidated for listing '{}'", id),
            id,
        }
    }
}

/// Response body for a wholesale cache clear (DELETE /cache).
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /cache/stats).
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in the cache
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from the cache's lookup counters and its
    /// current entry count.
    pub fn from_stats(stats: &CacheStats, entries: usize) -> Self {
        let lookups = stats.lookups();
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            stats.hits as f64 / lookups as f64
        };
        Self {
            hits: stats.hits,
            misses: stats.misses,
            entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
