//! Facet filtering over the venue list.

use navi_types::{fold, Playground, VenueRecord};

/// Raw facet parameters as they arrive in a query string.
///
/// - `n`: `"yes"` keeps only venues with a nursing room
/// - `p`: `"free"` or `"paid"` keeps only that playground status
/// - `a`: area name, compared case-insensitively
#[derive(Debug, Clone, Default)]
pub struct VenueQuery {
    pub n: Option<String>,
    pub p: Option<String>,
    pub a: Option<String>,
}

impl VenueQuery {
    /// Build a query from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value. Unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "n" => &mut query.n,
                "p" => &mut query.p,
                "a" => &mut query.a,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Facets to apply to a venue list. All set facets must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    /// Keep only venues with a nursing room.
    pub nursing_only: bool,
    /// Keep only venues with this playground status (never `None`).
    pub playground: Option<Playground>,
    /// Keep only venues in this area (stored folded).
    pub area: Option<String>,
}

impl VenueFilter {
    /// Build a filter from query parameters.
    ///
    /// Unrecognized values switch their facet off instead of failing:
    /// `n` must be exactly `"yes"`, and `p` must be exactly `"free"` or
    /// `"paid"`. An empty `a` is ignored, but a whitespace-only `a` filters
    /// for a blank area and so matches nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use navi_directory::{VenueFilter, VenueQuery};
    /// use navi_types::Playground;
    ///
    /// let query = VenueQuery {
    ///     n: Some("yes".into()),
    ///     p: Some("free".into()),
    ///     a: None,
    /// };
    /// let filter = VenueFilter::from_query(&query);
    /// assert!(filter.nursing_only);
    /// assert_eq!(filter.playground, Some(Playground::Free));
    /// ```
    pub fn from_query(query: &VenueQuery) -> Self {
        let nursing_only = query.n.as_deref() == Some("yes");

        let playground = query
            .p
            .as_deref()
            .and_then(|p| p.parse::<Playground>().ok())
            .filter(Playground::is_available);

        let area = query.a.as_deref().filter(|a| !a.is_empty()).map(fold);

        Self {
            nursing_only,
            playground,
            area,
        }
    }

    /// Returns true if no facet is set.
    pub fn is_empty(&self) -> bool {
        !self.nursing_only && self.playground.is_none() && self.area.is_none()
    }

    /// Returns true if `venue` passes every set facet.
    pub fn matches(&self, venue: &VenueRecord) -> bool {
        if self.nursing_only && !venue.nursing {
            return false;
        }
        if let Some(playground) = self.playground {
            if venue.playground != playground {
                return false;
            }
        }
        match &self.area {
            Some(area) => venue.in_area(area),
            None => true,
        }
    }

    /// Return the matching venues, in sheet order.
    pub fn apply(&self, venues: &[VenueRecord]) -> Vec<VenueRecord> {
        venues.iter().filter(|v| self.matches(v)).cloned().collect()
    }
}
