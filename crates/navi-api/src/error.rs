//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API errors that can be returned to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The venue sheet could not be loaded.
    #[error("directory error: {0}")]
    Directory(#[from] navi_directory::DirectoryError),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            ApiError::Directory(e) => {
                tracing::error!("Directory error: {}", e);
                (StatusCode::BAD_GATEWAY, "upstream_error", Some(e.to_string()))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navi_directory::DirectoryError;
    use navi_sheet::SheetError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );

        let upstream = DirectoryError::Sheet(SheetError::Status {
            status: 503,
            url: "https://example.com".into(),
        });
        assert_eq!(
            ApiError::from(upstream).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
