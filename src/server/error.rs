//! JSON error responses for the HTTP API.
//!
//! Body shape: `{ "error": <summary>, "details": <cause>[, "timestamp"] }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::adapters::errors::ExchangeError;
use crate::core::pipeline::AggregationError;

#[derive(Debug)]
pub enum ApiError {
    /// One or more funding feeds failed
    FundingUnavailable(AggregationError),
    /// Hyperliquid clearinghouse request failed
    PositionsUnavailable(ExchangeError),
    /// No `?user=` and no configured default
    MissingUser,
    /// `?user=` is not a 0x-prefixed 40-hex-digit address
    InvalidUser(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FundingUnavailable(_) | ApiError::PositionsUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MissingUser | ApiError::InvalidUser(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::FundingUnavailable(e) => ErrorBody {
                error: "Failed to fetch data",
                details: e.to_string(),
                timestamp: None,
            },
            ApiError::PositionsUnavailable(e) => ErrorBody {
                error: "Failed to fetch positions",
                details: e.to_string(),
                timestamp: Some(chrono::Utc::now().to_rfc3339()),
            },
            ApiError::MissingUser => ErrorBody {
                error: "Missing user address",
                details: "Pass ?user=0x... or set hyperliquid.positions_user".to_string(),
                timestamp: None,
            },
            ApiError::InvalidUser(user) => ErrorBody {
                error: "Invalid user address",
                details: format!("Expected 0x followed by 40 hex digits, got '{}'", user),
                timestamp: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
