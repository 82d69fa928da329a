//! Route handlers for the API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use navi_directory::VenueFilter;
use navi_sheet::SheetSource;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{AreasResponse, HealthResponse, VenueQuery, VenueResponse, VenuesResponse};

/// GET /health - Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /v1/venues - List venues, optionally filtered by facets.
pub async fn list_venues<S: SheetSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<VenuesResponse>, ApiError> {
    let snapshot = state.directory.venues().await?;
    let filter = VenueFilter::from_query(&VenueQuery::from_pairs(pairs));
    let venues = filter.apply(snapshot.venues());

    tracing::debug!(
        "Venue query {:?} matched {} of {}",
        filter,
        venues.len(),
        snapshot.len()
    );

    Ok(Json(VenuesResponse {
        count: venues.len(),
        total: snapshot.len(),
        venues,
        fetched_at: snapshot.fetched_at(),
    }))
}

/// GET /v1/venues/:slug - Fetch one venue.
pub async fn get_venue<S: SheetSource>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
) -> Result<Json<VenueResponse>, ApiError> {
    let snapshot = state.directory.venues().await?;

    let venue = snapshot
        .find(&slug)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("venue not found: {slug}")))?;

    Ok(Json(VenueResponse {
        venue,
        fetched_at: snapshot.fetched_at(),
    }))
}

/// GET /v1/areas - Areas with venue counts.
pub async fn list_areas<S: SheetSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<AreasResponse>, ApiError> {
    let areas = state.directory.areas().await?;
    Ok(Json(AreasResponse { areas }))
}
