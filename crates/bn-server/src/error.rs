//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type, rendered as a JSON body.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Nothing is served at the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No static asset with this name.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// A route path supplied by the client is not absolute.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::AssetNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Asset not found", "path": path}),
            ),
            Self::InvalidPath(path) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Path must start with '/'", "path": path}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServerError::PageNotFound("/api/x".to_owned())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::InvalidPath("learn".to_owned())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
