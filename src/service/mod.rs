//! Domain Data Service
//!
//! The cached data-access layer: the [`ListingService`] facade, the aggregate
//! record assembler, cache key composition and the invalidation coordinator.

mod assembler;
mod invalidation;
pub mod keys;
mod listings;

pub use listings::{CacheValue, ListingService, SharedCache};
