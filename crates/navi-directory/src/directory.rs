//! Cached venue directory.
//!
//! The `Directory` struct owns a sheet source and keeps the last parsed
//! venue list for a revalidation window.

use crate::error::DirectoryError;
use chrono::{DateTime, Utc};
use navi_sheet::{parse_venues, SheetSource};
use navi_types::{fold, VenueRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// One parsed fetch of the sheet.
///
/// Cloning is cheap: the venue list is shared, never copied or mutated.
#[derive(Debug, Clone)]
pub struct Snapshot {
    venues: Arc<[VenueRecord]>,
    fetched_at: DateTime<Utc>,
    fetched_instant: Instant,
}

impl Snapshot {
    fn new(venues: Vec<VenueRecord>) -> Self {
        Self {
            venues: venues.into(),
            fetched_at: Utc::now(),
            fetched_instant: Instant::now(),
        }
    }

    /// The venues, in sheet order.
    pub fn venues(&self) -> &[VenueRecord] {
        &self.venues
    }

    /// Wall-clock time of the fetch.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of venues.
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Returns true if the sheet had no named venues.
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Look up a venue by slug.
    pub fn find(&self, slug: &str) -> Option<&VenueRecord> {
        self.venues.iter().find(|v| v.slug == slug)
    }

    fn is_fresh(&self, window: Duration) -> bool {
        self.fetched_instant.elapsed() < window
    }
}

/// An area and how many venues it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCount {
    /// Area name as first spelled in the sheet.
    pub area: String,
    /// Number of venues in the area.
    pub count: usize,
}

/// Count venues per area.
///
/// Areas are grouped by their folded form and reported with the first
/// spelling seen, in order of first appearance.
pub fn count_areas(venues: &[VenueRecord]) -> Vec<AreaCount> {
    let mut counts: Vec<AreaCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for venue in venues {
        let key = fold(&venue.area);
        match positions.get(&key) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push(AreaCount {
                    area: venue.area.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Venue directory backed by a sheet source, with a revalidating cache.
///
/// Within the revalidation window every call is served from the last
/// snapshot without touching the source. The first call after the window
/// fetches and parses the sheet again. Two calls racing on an expired
/// cache may both fetch; the later write wins and both results are valid.
///
/// There is no retry, and a failed fetch is returned as an error rather
/// than answered from the stale snapshot.
///
/// # Example
///
/// ```rust
/// use navi_directory::Directory;
/// use navi_sheet::MockSheetSource;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = MockSheetSource::new("name,area\nLumpini Park,Pathumwan\n");
///     let directory = Directory::new(source, Duration::from_secs(1800));
///
///     let snapshot = directory.venues().await?;
///     assert_eq!(snapshot.len(), 1);
///
///     let park = directory.find("lumpini-park").await?;
///     assert!(park.is_some());
///     Ok(())
/// }
/// ```
pub struct Directory<S> {
    /// Where the sheet comes from.
    source: S,

    /// How long a snapshot stays fresh.
    revalidate: Duration,

    /// Last successful snapshot.
    cache: RwLock<Option<Snapshot>>,
}

impl<S: SheetSource> Directory<S> {
    /// Create a directory with an empty cache.
    pub fn new(source: S, revalidate: Duration) -> Self {
        Self {
            source,
            revalidate,
            cache: RwLock::new(None),
        }
    }

    /// The current venue list, fetching it if the cache is empty or stale.
    pub async fn venues(&self) -> Result<Snapshot, DirectoryError> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            tracing::trace!("Serving {} venues from cache", snapshot.len());
            return Ok(snapshot);
        }
        self.refresh().await
    }

    /// Fetch and parse the sheet now, replacing the cached snapshot.
    ///
    /// On failure the previous snapshot stays cached but is not served
    /// once stale, so the next call tries the source again.
    pub async fn refresh(&self) -> Result<Snapshot, DirectoryError> {
        let csv = self.source.fetch_csv().await.map_err(|e| {
            tracing::warn!("Venue sheet fetch failed: {}", e);
            e
        })?;

        let snapshot = Snapshot::new(parse_venues(&csv)?);

        // The lock is taken only after the fetch so readers never wait on the network.
        *self.cache.write().await = Some(snapshot.clone());

        tracing::info!(
            "Refreshed venue directory: {} venues (fresh for {}s)",
            snapshot.len(),
            self.revalidate.as_secs()
        );

        Ok(snapshot)
    }

    /// Look up one venue by slug. Unknown slugs are `Ok(None)`.
    pub async fn find(&self, slug: &str) -> Result<Option<VenueRecord>, DirectoryError> {
        let snapshot = self.venues().await?;
        Ok(snapshot.find(slug).cloned())
    }

    /// Distinct areas with venue counts.
    pub async fn areas(&self) -> Result<Vec<AreaCount>, DirectoryError> {
        let snapshot = self.venues().await?;
        Ok(count_areas(snapshot.venues()))
    }

    async fn fresh_snapshot(&self) -> Option<Snapshot> {
        let guard = self.cache.read().await;
        guard
            .as_ref()
            .filter(|s| s.is_fresh(self.revalidate))
            .cloned()
    }
}
