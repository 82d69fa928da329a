//! Error types for sheet operations.

use thiserror::Error;

/// Errors that can occur when fetching or tokenizing the venue sheet.
///
/// Malformed cells are not errors; they degrade to defaults during
/// mapping. Only transport, status and reader failures surface here.
#[derive(Debug, Error)]
pub enum SheetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sheet endpoint answered with a non-success status.
    #[error("sheet fetch failed with status {status} from {url}")]
    Status { status: u16, url: String },

    /// CSV reader failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),
}
