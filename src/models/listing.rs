//! Domain records for marketplace listings
//!
//! These are typed views over records owned by the remote store; the cache
//! only ever holds copies of them, never the source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Listing Status ==
/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Inactive,
}

impl ListingStatus {
    /// Canonical lowercase name, as stored in remote records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Pending => "pending",
            ListingStatus::Inactive => "inactive",
        }
    }
}

// == Geo Point ==
/// Geocoordinates of a listing's premises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// == Listing ==
/// Primary entity: a business listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub address: String,
    pub locality: String,
    pub phone: String,
    pub email: String,
    pub status: ListingStatus,
    #[serde(default)]
    pub geo: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
}

// == Sub-collection Records ==
/// A service offered by a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub listing_id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One weekly opening-hours entry. `weekday` is 0 (Monday) through 6 (Sunday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub listing_id: String,
    pub weekday: u8,
    pub opens: String,
    pub closes: String,
}

/// A gallery image attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub id: String,
    pub listing_id: String,
    pub url: String,
    pub display_order: u32,
}

/// A payment method the listing accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub listing_id: String,
    pub name: String,
}

// == Listing Detail ==
/// Aggregate record: a listing plus its four sub-collections, assembled from
/// independent fetches and cached as one composite value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub listing: Listing,
    pub services: Vec<ServiceOffering>,
    pub schedule: Vec<ScheduleEntry>,
    /// Sorted ascending by `display_order`
    pub images: Vec<ListingImage>,
    pub payment_methods: Vec<PaymentMethod>,
}

// == Filters ==
/// Optional narrowing for list queries. All fields are independent; `None`
/// means "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub status: Option<ListingStatus>,
    /// Case-insensitive substring match on the locality field
    #[serde(default)]
    pub locality: Option<String>,
    /// Only listings offering this service
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

/// Optional narrowing for free-text search. Search always targets active
/// listings, so there is no status field here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ListingStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let parsed: ListingStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, ListingStatus::Inactive);
    }

    #[test]
    fn test_listing_decodes_without_geo() {
        let json = serde_json::json!({
            "id": "l1",
            "name": "Corner Bakery",
            "address": "12 Mill Lane",
            "locality": "Brighton",
            "phone": "+44 1273 000000",
            "email": "hello@cornerbakery.example",
            "status": "active",
            "created_at": "2024-05-01T09:00:00Z"
        });

        let listing: Listing = serde_json::from_value(json).unwrap();
        assert_eq!(listing.name, "Corner Bakery");
        assert!(listing.geo.is_none());
    }

    #[test]
    fn test_filter_default_is_unfiltered() {
        let filter = ListingFilter::default();
        assert!(filter.status.is_none());
        assert!(filter.locality.is_none());
        assert!(filter.service.is_none());
    }

    #[test]
    fn test_filter_deserializes_from_query_shape() {
        let filter: ListingFilter =
            serde_json::from_str(r#"{"status":"active","limit":10}"#).unwrap();
        assert_eq!(filter.status, Some(ListingStatus::Active));
        assert_eq!(filter.limit, Some(10));
        assert!(filter.offset.is_none());
    }
}
