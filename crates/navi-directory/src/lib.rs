//! navi-directory: Cached venue directory and filter engine.
//!
//! This crate provides the [`Directory`] struct, which fetches the venue
//! sheet through a [`SheetSource`](navi_sheet::SheetSource), keeps the
//! parsed list for a revalidation window, and answers list, detail and
//! area queries from it. [`VenueFilter`] applies the nursing, playground
//! and area facets.
//!
//! # Example
//!
//! ```rust,no_run
//! use navi_directory::{Directory, VenueFilter, VenueQuery};
//! use navi_sheet::{HttpSheetSource, SheetConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SheetConfig::from_env()?;
//!     let directory = Directory::new(HttpSheetSource::new(config.source_url), config.revalidate);
//!
//!     let query = VenueQuery { n: Some("yes".into()), ..Default::default() };
//!     let snapshot = directory.venues().await?;
//!     let matches = VenueFilter::from_query(&query).apply(snapshot.venues());
//!
//!     println!("{} of {} venues have a nursing room", matches.len(), snapshot.len());
//!     Ok(())
//! }
//! ```

mod directory;
mod error;
mod filter;

pub use directory::{count_areas, AreaCount, Directory, Snapshot};
pub use error::DirectoryError;
pub use filter::{VenueFilter, VenueQuery};

// Re-export commonly used types from dependencies for convenience
pub use navi_types::{Playground, VenueRecord};
