//! Cache Store Module
//!
//! Generic TTL cache over a HashMap with lazy expiry: expired entries are
//! removed when they are next read, never by a background sweeper.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// In-memory key/value cache with per-entry TTL.
///
/// All operations are synchronous, infallible mutations of in-memory state.
/// There is no capacity bound; the only way an entry leaves the cache is an
/// explicit delete, a wholesale clear, or lazy expiry on read.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Hit/miss counters
    stats: CacheStats,
    /// TTL applied when `set` is called without an explicit TTL
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a value with an optional TTL.
    ///
    /// Overwrites any existing entry for the key unconditionally; the entry's
    /// clock restarts at the time of this call.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for missing keys. An expired entry is deleted on the
    /// spot and reported as absent, so an expired value is never returned,
    /// not even once. Reading a valid entry does not renew its TTL.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was present; deleting an absent key is not an
    /// error.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Remove Prefix ==
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// Returns the number of entries removed. Used by invalidation sweeps to
    /// target a single key namespace.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    // == Clear ==
    /// Empties the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Returns the current entry count.
    ///
    /// Expired entries that have not yet been lazily evicted are included;
    /// the count is not expiry-aware.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns the lookup counters accumulated so far.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
