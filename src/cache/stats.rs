//! Cache Statistics Module
//!
//! Lookup counters for a [`TtlCache`](crate::cache::TtlCache). Only read
//! resolution is tracked here; the entry count lives on the cache itself, and
//! derived figures like hit rates are left to the reporting layer.

use serde::Serialize;

// == Cache Stats ==
/// How cache reads resolved since the cache was created.
///
/// An expired entry found by `get` counts as a miss: the caller goes upstream
/// either way.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing, or only an expired entry
    pub misses: u64,
}

impl CacheStats {
    // == Record Hit ==
    /// Counts a read that returned a live entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a read that came back empty.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Lookups ==
    /// Total number of reads observed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}
