//! Error types for navi-types.

use thiserror::Error;

/// Errors that can occur when working with types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Unknown playground status.
    #[error("invalid playground status: {0}")]
    InvalidPlayground(String),
}
