//! navi-types: Shared data structures for the family venue directory
//!
//! This crate defines the types used across the workspace:
//! - [`VenueRecord`] - One normalized row of the venue spreadsheet
//! - [`Playground`] - Playground status of a venue (none, free, paid)
//! - [`fold`] - The text folding shared by header matching, cell
//!   normalization and area filtering
//!
//! # Example
//!
//! ```rust
//! use navi_types::{fold, Playground};
//!
//! assert_eq!(fold("　Ｙｅｓ "), "yes");
//! assert_eq!("paid".parse::<Playground>().unwrap(), Playground::Paid);
//! ```

mod error;
mod playground;
mod text;
mod venue;

pub use error::TypeError;
pub use playground::Playground;
pub use text::fold;
pub use venue::{VenueRecord, DEFAULT_AREA};
