//! # navi-sheet
//!
//! Ingestion of the hand-edited venue spreadsheet.
//!
//! The sheet is published as CSV and maintained by non-technical editors
//! in Japanese and English. This crate turns that export into a list of
//! [`VenueRecord`](navi_types::VenueRecord)s:
//!
//! 1. [`tokenize`] splits the text into rows of fields
//! 2. [`ColumnMap::resolve`] finds each known [`Column`] in the header row
//!    via alias lists
//! 3. [`normalize`] turns raw cells into typed values, never failing
//! 4. [`map_rows`] builds records in sheet order, dropping nameless rows
//!    and assigning unique slugs
//!
//! [`parse_venues`] runs the whole pipeline on a string.
//!
//! ## Sources
//!
//! The [`SheetSource`] trait abstracts where the CSV comes from:
//!
//! - [`HttpSheetSource`]: GET against the published export URL
//! - [`MockSheetSource`]: fixed response for tests
//!
//! ```rust,no_run
//! use navi_sheet::{parse_venues, HttpSheetSource, SheetConfig, SheetSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SheetConfig::from_env()?;
//!     let source = HttpSheetSource::new(config.source_url);
//!
//!     let venues = parse_venues(&source.fetch_csv().await?)?;
//!     println!("Loaded {} venues", venues.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod header;
mod mapper;
mod mock;
pub mod normalize;
mod tokenizer;

pub use client::HttpSheetSource;
pub use config::SheetConfig;
pub use error::SheetError;
pub use header::{Column, ColumnMap};
pub use mapper::{map_rows, parse_venues, slugify, SlugAllocator};
pub use mock::MockSheetSource;
pub use tokenizer::tokenize;

/// Source of the raw sheet CSV.
///
/// Uses native async syntax rather than `async_trait`. Implementors must
/// be `Send + Sync` so a source can sit inside shared server state.
///
/// ## Implementors
///
/// - [`HttpSheetSource`]: Production implementation using reqwest
/// - [`MockSheetSource`]: Test implementation with a configurable response
pub trait SheetSource: Send + Sync {
    /// Fetch the full CSV text of the sheet.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Status`] for a non-success response and
    /// [`SheetError::Http`] if the request itself fails. There is no retry.
    fn fetch_csv(&self) -> impl std::future::Future<Output = Result<String, SheetError>> + Send;
}
