//! The venue record.

use crate::playground::Playground;
use crate::text::fold;
use serde::{Deserialize, Serialize};

/// Area assigned to venues whose area cell is blank.
pub const DEFAULT_AREA: &str = "other";

/// A family-friendly venue, normalized from one spreadsheet row.
///
/// Records are built once per fetch and shared read-only afterwards.
/// `name` is never empty; rows without a name are dropped before a record
/// is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// URL-safe identifier, unique within one fetched list.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Street address (may be empty).
    pub address: String,
    /// District or neighbourhood; [`DEFAULT_AREA`] when unknown.
    pub area: String,
    /// Latitude, 0.0 when unknown.
    pub lat: f64,
    /// Longitude, 0.0 when unknown.
    pub lng: f64,
    /// Has a nursing room.
    pub nursing: bool,
    /// Has diaper-changing facilities.
    pub diaper: bool,
    /// Rents out strollers.
    pub stroller: bool,
    /// Playground status.
    pub playground: Playground,
    /// Opening hours, free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    /// Parent-oriented notes, free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl VenueRecord {
    /// Returns true if this venue's area equals `area` after folding both.
    pub fn in_area(&self, area: &str) -> bool {
        fold(&self.area) == fold(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(area: &str) -> VenueRecord {
        VenueRecord {
            slug: "central-world".to_string(),
            name: "Central World".to_string(),
            address: "999/9 Rama I Rd".to_string(),
            area: area.to_string(),
            lat: 13.7466,
            lng: 100.5393,
            nursing: true,
            diaper: true,
            stroller: false,
            playground: Playground::Paid,
            hours: Some("10:00-22:00".to_string()),
            tips: None,
        }
    }

    #[test]
    fn test_in_area_is_case_insensitive() {
        let v = venue("Pathumwan");
        assert!(v.in_area("pathumwan"));
        assert!(v.in_area(" PATHUMWAN "));
        assert!(!v.in_area("watthana"));
        assert!(!v.in_area("  "));
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let json = serde_json::to_value(venue("Pathumwan")).unwrap();
        assert_eq!(json["playground"], "paid");
        assert_eq!(json["hours"], "10:00-22:00");
        assert!(json.get("tips").is_none());
    }
}
