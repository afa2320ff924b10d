//! Error types for the Vigil scheduler client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the batch scheduler
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Scheduler API returned an error status code
    #[error("scheduler API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the scheduler
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Job or task not found
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// True when the scheduler does not know the job or task at all
    ///
    /// The response handlers map a 404 to [`ClientError::NotFound`], so a
    /// status check is not needed here.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for faults that may clear up on their own: connection-level
    /// failures and 5xx responses
    ///
    /// The monitors abort on any transport error; a caller that wants to
    /// re-issue the whole monitoring call can use this to decide whether
    /// that is worth attempting. A 4xx is a malformed request and never is.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed(_) => true,
            Self::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
