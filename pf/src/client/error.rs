//! Client error types

use std::time::Duration;

use promptcore::PromptError;
use thiserror::Error;

/// Errors that can occur while fetching or rendering a prompt
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ClientError::RateLimited { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::RateLimited { .. } => true,
            ClientError::Api { status, .. } => is_retryable_status(*status),
            ClientError::Network(_) => true,
            ClientError::Timeout(_) => true,
            ClientError::Json(_) => false,
            ClientError::Prompt(_) => false,
            ClientError::Config(_) => false,
        }
    }

    /// Get the retry duration if this is a rate limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ClientError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Statuses worth another attempt; 429 is handled separately
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 500 | 502 | 503 | 504)
}
