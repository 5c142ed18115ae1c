//! Error types for backend API calls.

use thiserror::Error;

/// Errors that can occur when talking to the clip backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Json(String),

    /// A request URL could not be assembled from the configured base.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be built or the response made no sense.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// True when the failure happened at the request level (no usable
    /// response), as opposed to a response that could not be understood.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e.to_string())
    }
}
