//! Application-wide error types using thiserror
//!
//! Startup and server errors are wrapped in AppError. Upstream and
//! aggregation failures have their own types (`ExchangeError`,
//! `AggregationError`) and reach clients through `server::ApiError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
