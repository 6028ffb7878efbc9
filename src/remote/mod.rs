//! Remote Query Interface
//!
//! The narrow abstraction over the hosted data store that the service reads
//! from. The store owns the wire protocol, retries, timeouts and auth; this
//! layer only sees collections of JSON records and a small query shape.

mod memory;
mod query;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use query::{Order, Predicate};

// == Collection Names ==
/// Primary entity collection.
pub const LISTINGS: &str = "listings";
/// Services offered by a listing (`listing_id` foreign key).
pub const LISTING_SERVICES: &str = "listing_services";
/// Weekly opening-hours entries.
pub const LISTING_SCHEDULE: &str = "listing_schedule";
/// Gallery images.
pub const LISTING_IMAGES: &str = "listing_images";
/// Accepted payment methods.
pub const LISTING_PAYMENT_METHODS: &str = "listing_payment_methods";

/// Foreign-key field linking sub-collection records to their listing.
pub const LISTING_FK: &str = "listing_id";

// == Remote Store Trait ==
/// The remote data store as seen by the cached data-access layer.
///
/// Implementations must be safe to call concurrently; the service fans out
/// several `find_related` calls at once when assembling an aggregate record.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches a single record by id, `None` when no such record exists.
    async fn find_by_id(&self, collection: &str, id: &str)
        -> Result<Option<Value>, StoreError>;

    /// Fetches all records in a collection matching `predicate`, optionally
    /// ordered and paginated. Offset is applied before limit.
    async fn find_many(
        &self,
        collection: &str,
        predicate: Predicate,
        order: Option<Order>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Value>, StoreError>;

    /// Fetches all records in `collection` whose `foreign_key` field equals
    /// `id`. No ordering is guaranteed.
    async fn find_related(
        &self,
        collection: &str,
        foreign_key: &str,
        id: &str,
    ) -> Result<Vec<Value>, StoreError>;
}
