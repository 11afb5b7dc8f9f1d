// Error types for the camlens relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Config(String),

    #[error("Image processing failed: {0}")]
    ImageDecode(String),

    #[error("Upstream provider timed out, please retry later")]
    UpstreamTimeout,

    #[error("Upstream provider request failed: {0}")]
    UpstreamRequest(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert RelayError to HTTP responses for Axum. Every error becomes a
// structured JSON body with at least an `error` field.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg }),
            ),
            RelayError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": msg }),
            ),
            RelayError::ImageDecode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            RelayError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                json!({ "error": self.to_string() }),
            ),
            RelayError::UpstreamRequest(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Upstream provider request failed", "detail": detail }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "detail": self.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
