//! API Handlers
//!
//! HTTP request handlers for each endpoint of the listing facade.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    ClearResponse, HealthResponse, InvalidateResponse, ListingDetail, ListingFilter,
    ListingsResponse, SearchParams, StatsResponse,
};
use crate::service::ListingService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cached data-access service
    pub service: ListingService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: ListingService) -> Self {
        Self { service }
    }
}

/// Handler for GET /listings
///
/// Lists listings matching the query-string filters.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Result<Json<ListingsResponse>> {
    let listings = state.service.list(&filter).await?;
    Ok(Json(ListingsResponse::new(listings)))
}

/// Handler for GET /listings/:id
///
/// Returns the assembled aggregate record, 404 when the listing is unknown.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingDetail>> {
    match state.service.get_by_id(&id).await? {
        Some(detail) => Ok(Json(detail)),
        None => Err(ServiceError::NotFound(id)),
    }
}

/// Handler for GET /search
///
/// Free-text search over active listings.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ListingsResponse>> {
    let (query, filter) = params.into_parts();
    let listings = state.service.search(&query, &filter).await?;
    Ok(Json(ListingsResponse::new(listings)))
}

/// Handler for GET /categories/:name
///
/// Active listings offering the named service.
pub async fn category_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ListingsResponse>> {
    let listings = state.service.by_category(&name).await?;
    Ok(Json(ListingsResponse::new(listings)))
}

/// Handler for DELETE /cache/listings/:id
///
/// Invalidates a listing's cache entries after an out-of-band mutation.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<InvalidateResponse> {
    state.service.invalidate(&id).await;
    Json(InvalidateResponse::new(id))
}

/// Handler for DELETE /cache
///
/// Wholesale cache clear.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.service.clear_all().await;
    Json(ClearResponse::new())
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;
    let entries = state.service.cache_size().await;
    Json(StatsResponse::from_stats(&stats, entries))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::config::CacheTtls;
    use crate::remote::{self, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    async fn test_state() -> AppState {
        let store = MemoryStore::new();
        store
            .put_collection(
                remote::LISTINGS,
                vec![json!({
                    "id": "l1",
                    "name": "Corner Bakery",
                    "address": "12 Mill Lane",
                    "locality": "Brighton",
                    "phone": "+44 1273 000000",
                    "email": "hello@cornerbakery.example",
                    "status": "active",
                    "created_at": "2024-05-01T09:00:00Z"
                })],
            )
            .await;

        let service = ListingService::new(
            TtlCache::new(Duration::from_secs(300)),
            Arc::new(store),
            CacheTtls::default(),
        );
        AppState::new(service)
    }

    #[tokio::test]
    async fn test_list_handler_returns_seeded_listing() {
        let state = test_state().await;

        let Json(resp) = list_handler(State(state), Query(ListingFilter::default()))
            .await
            .unwrap();

        assert_eq!(resp.count, 1);
        assert_eq!(resp.listings[0].name, "Corner Bakery");
    }

    #[tokio::test]
    async fn test_get_handler_unknown_id_is_not_found() {
        let state = test_state().await;

        let err = get_handler(State(state), Path("l999".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalidate_handler_reports_id() {
        let state = test_state().await;

        let Json(resp) = invalidate_handler(State(state), Path("l1".to_string())).await;

        assert_eq!(resp.id, "l1");
    }
}
