//! Error types for the directory.

use thiserror::Error;

/// Errors that can occur when loading the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Error from the sheet layer (fetch or tokenize).
    #[error("sheet error: {0}")]
    Sheet(#[from] navi_sheet::SheetError),
}
