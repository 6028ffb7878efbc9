//! Cache Module
//!
//! Generic in-memory key/value caching with TTL expiry and lazy eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;
