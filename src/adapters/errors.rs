//! Exchange adapter error types
//!
//! All upstream-related errors are wrapped in ExchangeError enum
//! which implements thiserror for consistent error handling.

use thiserror::Error;

/// Maximum number of response-body bytes kept in an `HttpStatus` error
pub const MAX_ERROR_BODY_LEN: usize = 256;

/// Exchange-specific error types for adapter operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Connection to exchange failed (DNS, TLS, reset, ...)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network operation timed out
    #[error("Network timeout after {0}ms")]
    NetworkTimeout(u64),

    /// Exchange answered with a non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Invalid or unexpected response from exchange
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ExchangeError {
    /// Build an `HttpStatus` error, truncating the body on a char boundary.
    pub fn http_status(status: u16, body: &str) -> Self {
        let mut end = body.len().min(MAX_ERROR_BODY_LEN);
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        ExchangeError::HttpStatus {
            status,
            body: body[..end].to_string(),
        }
    }

    /// Transport-level failures are retried; application-level ones are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExchangeError::ConnectionFailed(_) | ExchangeError::NetworkTimeout(_)
        )
    }

    /// HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ExchangeError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
