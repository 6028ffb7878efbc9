//! Invalidation Coordinator
//!
//! Delete-based invalidation: no write path ever updates a cache entry in
//! place, the next read repopulates. Mutations to a listing call
//! [`ListingService::invalidate`]; full resets use
//! [`ListingService::clear_all`].

use tracing::debug;

use crate::service::keys;
use crate::service::ListingService;

impl ListingService {
    // == Invalidate ==
    /// Drops every cache entry that may hold stale data derived from the
    /// given listing: its `entity:` record plus all `list:` and `search:`
    /// results.
    ///
    /// `category:` entries are intentionally not swept and stay until their
    /// TTL lapses, so category pages can serve a stale membership for up to
    /// one category TTL after a mutation.
    pub async fn invalidate(&self, id: &str) {
        let mut cache = self.cache.write().await;
        cache.delete(&keys::entity_key(id));
        let lists = cache.remove_prefix(keys::LIST_PREFIX);
        let searches = cache.remove_prefix(keys::SEARCH_PREFIX);
        debug!(id, lists, searches, "invalidated listing cache entries");
    }

    // == Clear All ==
    /// Empties the entire cache unconditionally.
    pub async fn clear_all(&self) {
        self.cache.write().await.clear();
        debug!("cache cleared");
    }
}
