//! Inference errors

use thiserror::Error;

/// Errors that can occur during a model call
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the model API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the model API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response could not be parsed or contained no usable candidate
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Call did not complete within the configured bound
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Quota or rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Model API returned an error status
    #[error("Server error: {0}")]
    ServerError(String),
}

impl InferenceError {
    /// Map a reqwest error against the configured timeout bound
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
