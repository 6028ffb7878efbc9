//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored value plus its expiry bookkeeping.
///
/// An entry is valid while `now - stored_at <= ttl`; once the TTL has fully
/// elapsed the entry must behave as absent on the next read.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant the value was stored
    stored_at: Instant,
    /// Time-to-live for this entry
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: the entry is still valid at exactly `ttl` elapsed
    /// and expired strictly after.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}
