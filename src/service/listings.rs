//! Domain Data Service
//!
//! The facade callers use for all listing reads. Every read path follows the
//! same shape: compose a cache key from the canonicalized inputs, check the
//! cache, on miss query the remote store, store the result with an
//! operation-specific TTL, return it. Upstream errors are logged and
//! propagated unmodified; a failed fetch never populates the cache.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::cache::{CacheStats, TtlCache};
use crate::config::CacheTtls;
use crate::error::{Result, ServiceError};
use crate::models::{Listing, ListingDetail, ListingFilter, SearchFilter};
use crate::remote::{self, Order, Predicate, RemoteStore};
use crate::service::keys;

// == Cached Value ==
/// Value stored in the shared cache. List, search and category entries hold
/// listing collections; entity entries hold assembled aggregate records. The
/// key namespaces keep the two shapes from ever colliding.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Listings(Vec<Listing>),
    Detail(ListingDetail),
}

/// Shared handle to the service's cache. Constructed by the caller and
/// injected, so ownership of the cache is explicit rather than process-global.
pub type SharedCache = Arc<RwLock<TtlCache<CacheValue>>>;

// == Listing Service ==
/// Cached data-access facade over the remote store.
#[derive(Clone)]
pub struct ListingService {
    pub(crate) cache: SharedCache,
    pub(crate) store: Arc<dyn RemoteStore>,
    pub(crate) ttls: CacheTtls,
}

impl ListingService {
    // == Constructor ==
    /// Creates a service around an injected cache and remote store handle.
    pub fn new(cache: TtlCache<CacheValue>, store: Arc<dyn RemoteStore>, ttls: CacheTtls) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            store,
            ttls,
        }
    }

    // == List ==
    /// Lists listings matching the given filters, ordered by name.
    ///
    /// Results are cached under the `list:` namespace with the medium list
    /// TTL, keyed by the canonicalized filter.
    pub async fn list(&self, filter: &ListingFilter) -> Result<Vec<Listing>> {
        let key = keys::list_key(filter);
        if let Some(CacheValue::Listings(hit)) = self.cache.write().await.get(&key) {
            debug!(%key, "list cache hit");
            return Ok(hit);
        }

        debug!(%key, "list cache miss");
        let listings = self.fetch_list(filter).await.map_err(log_fetch_error)?;

        self.cache.write().await.set(
            key,
            CacheValue::Listings(listings.clone()),
            Some(self.ttls.list),
        );
        Ok(listings)
    }

    async fn fetch_list(&self, filter: &ListingFilter) -> Result<Vec<Listing>> {
        let mut clauses = Vec::new();
        if let Some(status) = filter.status {
            clauses.push(Predicate::eq("status", status.as_str()));
        }
        if let Some(locality) = &filter.locality {
            clauses.push(Predicate::contains("locality", locality));
        }
        if let Some(service) = &filter.service {
            let ids = self.listing_ids_offering(service).await?;
            clauses.push(Predicate::In("id".to_string(), ids));
        }

        let predicate = if clauses.is_empty() {
            Predicate::All
        } else {
            Predicate::And(clauses)
        };

        let records = self
            .store
            .find_many(
                remote::LISTINGS,
                predicate,
                Some(Order::asc("name")),
                filter.limit,
                filter.offset,
            )
            .await?;
        decode_records(remote::LISTINGS, records)
    }

    // == Search ==
    /// Free-text search over name and address of active listings.
    ///
    /// Results are cached under the `search:` namespace with the short search
    /// TTL; search results churn faster than list membership.
    pub async fn search(&self, query: &str, filter: &SearchFilter) -> Result<Vec<Listing>> {
        let key = keys::search_key(query, filter);
        if let Some(CacheValue::Listings(hit)) = self.cache.write().await.get(&key) {
            debug!(%key, "search cache hit");
            return Ok(hit);
        }

        debug!(%key, "search cache miss");
        let listings = self.fetch_search(query, filter).await.map_err(log_fetch_error)?;

        self.cache.write().await.set(
            key,
            CacheValue::Listings(listings.clone()),
            Some(self.ttls.search),
        );
        Ok(listings)
    }

    async fn fetch_search(&self, query: &str, filter: &SearchFilter) -> Result<Vec<Listing>> {
        let mut clauses = vec![
            Predicate::eq("status", "active"),
            Predicate::Or(vec![
                Predicate::contains("name", query),
                Predicate::contains("address", query),
            ]),
        ];
        if let Some(locality) = &filter.locality {
            clauses.push(Predicate::contains("locality", locality));
        }
        if let Some(service) = &filter.service {
            let ids = self.listing_ids_offering(service).await?;
            clauses.push(Predicate::In("id".to_string(), ids));
        }

        let records = self
            .store
            .find_many(
                remote::LISTINGS,
                Predicate::And(clauses),
                None,
                filter.limit,
                None,
            )
            .await?;
        decode_records(remote::LISTINGS, records)
    }

    // == By Category ==
    /// Active listings offering the given service, ordered by name.
    ///
    /// A two-step join: resolve which listing ids offer the service, then
    /// fetch those listings. Cached under the `category:` namespace with the
    /// long category TTL.
    pub async fn by_category(&self, service_name: &str) -> Result<Vec<Listing>> {
        let key = keys::category_key(service_name);
        if let Some(CacheValue::Listings(hit)) = self.cache.write().await.get(&key) {
            debug!(%key, "category cache hit");
            return Ok(hit);
        }

        debug!(%key, "category cache miss");
        let listings = self
            .fetch_category(service_name)
            .await
            .map_err(log_fetch_error)?;

        self.cache.write().await.set(
            key,
            CacheValue::Listings(listings.clone()),
            Some(self.ttls.category),
        );
        Ok(listings)
    }

    async fn fetch_category(&self, service_name: &str) -> Result<Vec<Listing>> {
        let ids = self.listing_ids_offering(service_name).await?;
        let records = self
            .store
            .find_many(
                remote::LISTINGS,
                Predicate::And(vec![
                    Predicate::In("id".to_string(), ids),
                    Predicate::eq("status", "active"),
                ]),
                Some(Order::asc("name")),
                None,
                None,
            )
            .await?;
        decode_records(remote::LISTINGS, records)
    }

    /// Resolves which listing ids offer a service, deduplicated.
    pub(crate) async fn listing_ids_offering(&self, service_name: &str) -> Result<Vec<String>> {
        let records = self
            .store
            .find_many(
                remote::LISTING_SERVICES,
                Predicate::eq("name", service_name),
                None,
                None,
                None,
            )
            .await?;

        let mut ids: Vec<String> = records
            .iter()
            .filter_map(|record| record.get(remote::LISTING_FK))
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    // == Introspection ==
    /// Current cache entry count (includes not-yet-evicted expired entries).
    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Current cache hit/miss statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

/// Logs an upstream failure before handing it back unchanged. The cache is
/// never used to mask upstream errors.
pub(crate) fn log_fetch_error(err: ServiceError) -> ServiceError {
    error!(error = %err, "remote fetch failed");
    err
}

/// Decodes a single JSON record into its typed model.
pub(crate) fn decode_record<T: DeserializeOwned>(collection: &str, record: Value) -> Result<T> {
    serde_json::from_value(record).map_err(|source| ServiceError::Decode {
        collection: collection.to_string(),
        source,
    })
}

/// Decodes a batch of JSON records into typed models.
pub(crate) fn decode_records<T: DeserializeOwned>(
    collection: &str,
    records: Vec<Value>,
) -> Result<Vec<T>> {
    records
        .into_iter()
        .map(|record| decode_record(collection, record))
        .collect()
}
