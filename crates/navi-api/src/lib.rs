//! navi-api: HTTP API layer for the family venue directory
//!
//! This crate defines the REST API endpoints:
//! - GET /health
//! - GET /v1/venues?n=yes&p=free|paid&a=<area>
//! - GET /v1/venues/:slug
//! - GET /v1/areas

mod error;
mod handlers;
mod state;
mod types;

pub use error::ApiError;
pub use state::AppState;
pub use types::{AreasResponse, HealthResponse, VenueQuery, VenueResponse, VenuesResponse};

use axum::{routing::get, Router};
use navi_sheet::SheetSource;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router over the given state.
pub fn create_router<S: SheetSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/venues", get(handlers::list_venues::<S>))
        .route("/v1/venues/:slug", get(handlers::get_venue::<S>))
        .route("/v1/areas", get(handlers::list_areas::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
