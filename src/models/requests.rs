//! Request DTOs for the HTTP facade
//!
//! Query-string parameter shapes for the read endpoints.

use serde::Deserialize;

use crate::models::SearchFilter;

/// Query parameters for `GET /search`.
///
/// Kept flat rather than nesting a [`SearchFilter`] because query-string
/// deserialization does not cope with flattened optional numeric fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text query matched against listing name and address
    pub q: String,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchParams {
    /// Splits the parameters into the query text and the service-level filter.
    pub fn into_parts(self) -> (String, SearchFilter) {
        let filter = SearchFilter {
            locality: self.locality,
            service: self.service,
            limit: self.limit,
        };
        (self.q, filter)
    }
}
