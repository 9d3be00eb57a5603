//! GET /api/hlpositions: open positions of one Hyperliquid account.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::adapters::hyperliquid::config::is_valid_address;
use crate::core::positions::{to_positions, Position};

use super::error::ApiError;
use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PositionsQuery {
    pub user: Option<String>,
}

pub async fn positions_handler(
    State(state): State<AppState>,
    Query(query): Query<PositionsQuery>,
) -> Result<Json<Vec<Position>>, ApiError> {
    let user = query
        .user
        .filter(|u| !u.trim().is_empty())
        .or_else(|| state.positions.config().positions_user.clone())
        .ok_or(ApiError::MissingUser)?;

    if !is_valid_address(&user) {
        return Err(ApiError::InvalidUser(user));
    }

    let clearinghouse = state
        .positions
        .fetch_clearinghouse_state(&user)
        .await
        .map_err(|e| {
            tracing::error!(user = %user, error = %e, "Failed to fetch Hyperliquid positions");
            ApiError::PositionsUnavailable(e)
        })?;

    let positions = to_positions(clearinghouse);
    tracing::debug!(user = %user, count = positions.len(), "Fetched Hyperliquid positions");
    Ok(Json(positions))
}
