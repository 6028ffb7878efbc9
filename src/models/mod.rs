//! Domain models and HTTP DTOs
//!
//! `listing` holds the typed domain records; `requests`/`responses` hold the
//! DTOs used for serializing HTTP bodies at the facade.

pub mod listing;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use listing::{
    GeoPoint, Listing, ListingDetail, ListingFilter, ListingImage, ListingStatus, PaymentMethod,
    ScheduleEntry, SearchFilter, ServiceOffering,
};
pub use requests::SearchParams;
pub use responses::{
    ClearResponse, HealthResponse, InvalidateResponse, ListingsResponse, StatsResponse,
};
