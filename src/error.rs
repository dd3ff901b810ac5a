//! Error types for the aggregator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Api Error Enum ==
/// Unified error type for the aggregation service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Out-of-range or malformed identifier in the request path
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No route matched the requested path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// An upstream data provider call failed, timed out, or returned a
    /// non-success status
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("Resource not found: {}", path),
            ),
            ApiError::Upstream(detail) => {
                // Upstream detail can leak provider URLs, keep it in the logs
                error!(detail = %detail, "upstream provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch data from the upstream source".to_string(),
                )
            }
        };

        let body = Json(json!({
            "code": status.as_u16(),
            "status": status.canonical_reason().unwrap_or("Unknown"),
            "message": message,
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the aggregation service.
pub type Result<T> = std::result::Result<T, ApiError>;
