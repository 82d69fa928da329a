//! Application state for the API server.

use navi_directory::Directory;
use navi_sheet::SheetSource;

/// Shared application state.
pub struct AppState<S> {
    /// The cached venue directory.
    pub directory: Directory<S>,
}

impl<S: SheetSource> AppState<S> {
    /// Create a new application state with the given directory.
    pub fn new(directory: Directory<S>) -> Self {
        Self { directory }
    }
}
