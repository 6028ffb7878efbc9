//! Aggregate Record Assembler
//!
//! Builds the full [`ListingDetail`] view for a listing id: fetch the primary
//! record, then fan out the four sub-collection fetches concurrently with an
//! all-or-nothing join. Partial aggregates are never returned or cached.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    ListingDetail, ListingImage, PaymentMethod, ScheduleEntry, ServiceOffering,
};
use crate::remote;
use crate::service::keys;
use crate::service::listings::{decode_record, decode_records, log_fetch_error, CacheValue};
use crate::service::ListingService;

impl ListingService {
    // == Get By Id ==
    /// Returns the assembled aggregate record for a listing, `None` when the
    /// remote store has no such listing.
    ///
    /// Assembled views are cached under `entity:{id}` with the long entity
    /// TTL; aggregates change less often than list membership. Negative
    /// results are not cached, so every lookup of a nonexistent id goes back
    /// to the remote store. Concurrent callers missing on the same id each
    /// trigger their own fan-out; there is no single-flight deduplication.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ListingDetail>> {
        let key = keys::entity_key(id);
        if let Some(CacheValue::Detail(hit)) = self.cache.write().await.get(&key) {
            debug!(%key, "entity cache hit");
            return Ok(Some(hit));
        }

        debug!(%key, "entity cache miss");
        let Some(detail) = self.assemble(id).await.map_err(log_fetch_error)? else {
            return Ok(None);
        };

        self.cache.write().await.set(
            key,
            CacheValue::Detail(detail.clone()),
            Some(self.ttls.entity),
        );
        Ok(Some(detail))
    }

    /// Fetches the primary record and its four sub-collections. The fan-out
    /// rejects as soon as any one sub-fetch fails, even if the others would
    /// have succeeded.
    async fn assemble(&self, id: &str) -> Result<Option<ListingDetail>> {
        let Some(record) = self.store.find_by_id(remote::LISTINGS, id).await? else {
            return Ok(None);
        };
        let listing = decode_record(remote::LISTINGS, record)?;

        let (services, schedule, mut images, payment_methods) = tokio::try_join!(
            self.related::<ServiceOffering>(remote::LISTING_SERVICES, id),
            self.related::<ScheduleEntry>(remote::LISTING_SCHEDULE, id),
            self.related::<ListingImage>(remote::LISTING_IMAGES, id),
            self.related::<PaymentMethod>(remote::LISTING_PAYMENT_METHODS, id),
        )?;

        images.sort_by_key(|image| image.display_order);

        Ok(Some(ListingDetail {
            listing,
            services,
            schedule,
            images,
            payment_methods,
        }))
    }

    /// Fetches one sub-collection for a listing and decodes it.
    async fn related<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Vec<T>> {
        let records = self
            .store
            .find_related(collection, remote::LISTING_FK, id)
            .await?;
        decode_records(collection, records)
    }
}
