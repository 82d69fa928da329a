//! Mock sheet source for testing.
//!
//! `MockSheetSource` implements `SheetSource` with a fixed response and
//! counts how many times it was fetched, so cache behaviour can be
//! asserted without network calls.
//!
//! # Usage
//!
//! ```rust
//! use navi_sheet::{MockSheetSource, SheetSource};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockSheetSource::new("name\nLumpini Park\n");
//! let csv = mock.fetch_csv().await.unwrap();
//! assert_eq!(csv, "name\nLumpini Park\n");
//! assert_eq!(mock.fetch_count(), 1);
//! # }
//! ```

use crate::error::SheetError;
use crate::SheetSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// URL reported in errors from a failing mock.
const MOCK_URL: &str = "mock://sheet";

#[derive(Debug, Clone)]
enum Response {
    Csv(String),
    Status(u16),
}

/// Mock sheet source for testing.
///
/// Clones share the response and the fetch counter, so a test can keep a
/// handle while the directory owns another and swap the response between
/// fetches.
#[derive(Debug, Clone)]
pub struct MockSheetSource {
    response: Arc<RwLock<Response>>,
    fetches: Arc<AtomicUsize>,
}

impl MockSheetSource {
    /// Create a mock that returns `csv` on every fetch.
    pub fn new(csv: impl Into<String>) -> Self {
        Self::from_response(Response::Csv(csv.into()))
    }

    /// Create a mock that fails every fetch with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self::from_response(Response::Status(status))
    }

    fn from_response(response: Response) -> Self {
        Self {
            response: Arc::new(RwLock::new(response)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replace the CSV returned by later fetches.
    pub fn set_csv(&self, csv: impl Into<String>) {
        self.replace(Response::Csv(csv.into()));
    }

    /// Make later fetches fail with `status`.
    pub fn set_failure(&self, status: u16) {
        self.replace(Response::Status(status));
    }

    fn replace(&self, response: Response) {
        let mut guard = self.response.write().unwrap_or_else(|e| e.into_inner());
        *guard = response;
    }

    /// Number of fetches so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SheetSource for MockSheetSource {
    async fn fetch_csv(&self) -> Result<String, SheetError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let response = self
            .response
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        match response {
            Response::Csv(csv) => Ok(csv),
            Response::Status(status) => Err(SheetError::Status {
                status,
                url: MOCK_URL.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_fetches() {
        let mock = MockSheetSource::new("name\nA\n");
        mock.fetch_csv().await.unwrap();
        mock.fetch_csv().await.unwrap();
        assert_eq!(mock.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_failing() {
        let mock = MockSheetSource::failing(503);
        let err = mock.fetch_csv().await.unwrap_err();
        assert!(matches!(err, SheetError::Status { status: 503, .. }));
        assert_eq!(mock.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockSheetSource::new("a");
        let handle = mock.clone();
        handle.set_csv("b");
        assert_eq!(mock.fetch_csv().await.unwrap(), "b");
        assert_eq!(handle.fetch_count(), 1);

        handle.set_failure(500);
        assert!(mock.fetch_csv().await.is_err());
    }
}
