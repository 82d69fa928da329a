//! API request and response types.

use chrono::{DateTime, Utc};
use navi_directory::AreaCount;
use navi_types::VenueRecord;
use serde::Serialize;

pub use navi_directory::VenueQuery;

/// Response for the venue list.
#[derive(Debug, Serialize)]
pub struct VenuesResponse {
    /// Venues matching the query, in sheet order.
    pub venues: Vec<VenueRecord>,
    /// Number of matching venues.
    pub count: usize,
    /// Number of venues before filtering.
    pub total: usize,
    /// When the underlying sheet was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Response for a single venue.
#[derive(Debug, Serialize)]
pub struct VenueResponse {
    /// The venue.
    pub venue: VenueRecord,
    /// When the underlying sheet was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Response for the area listing.
#[derive(Debug, Serialize)]
pub struct AreasResponse {
    /// Areas in order of first appearance.
    pub areas: Vec<AreaCount>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
