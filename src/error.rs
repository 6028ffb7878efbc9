//! Error types for the listing data-access layer
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Store Error ==
/// Error raised by a [`RemoteStore`](crate::remote::RemoteStore) implementation.
///
/// The remote store owns its wire protocol, retries and timeouts; anything that
/// goes wrong on its side surfaces here as a single opaque failure.
#[derive(Error, Debug)]
#[error("remote store error: {0}")]
pub struct StoreError(pub String);

// == Service Error Enum ==
/// Unified error type for the domain data service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Listing not found in the remote store
    #[error("Listing not found: {0}")]
    NotFound(String),

    /// Upstream fetch failure, propagated unmodified from the remote store
    #[error(transparent)]
    Upstream(#[from] StoreError),

    /// A remote record could not be decoded into its typed model
    #[error("Failed to decode record from '{collection}': {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data-access layer.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::NotFound("abc123".to_string());
        assert_eq!(err.to_string(), "Listing not found: abc123");
    }

    #[test]
    fn test_upstream_is_transparent() {
        let err = ServiceError::from(StoreError("connection refused".to_string()));
        assert_eq!(err.to_string(), "remote store error: connection refused");
    }

    #[test]
    fn test_decode_names_collection() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = ServiceError::Decode {
            collection: "listings".to_string(),
            source,
        };
        assert!(err.to_string().contains("listings"));
    }
}
