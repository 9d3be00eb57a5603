//! HTTP API server for funding-rate snapshots.
//!
//! Uses `axum` for routing with CORS support. Every `/api/funding` call
//! re-fetches all upstream feeds; nothing is cached between requests.

pub mod error;
pub mod positions;

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::hyperliquid::HyperliquidAdapter;
use crate::adapters::traits::{PrimaryVenue, SecondaryVenue};
use crate::core::metrics::{FeedSnapshot, UpstreamMetrics};
use crate::core::pipeline::{aggregate, PipelineOptions};
use crate::error::AppError;

pub use error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub primary: Arc<dyn PrimaryVenue>,
    pub secondary: Arc<dyn SecondaryVenue>,
    /// Account positions are Hyperliquid-specific
    pub positions: Arc<HyperliquidAdapter>,
    pub options: PipelineOptions,
    pub metrics: Arc<UpstreamMetrics>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/funding", get(funding_handler))
        .route("/api/hlpositions", get(positions::positions_handler))
        .route("/api/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Blocks until the server shuts down. Fails fast if the port cannot
/// be bound.
pub async fn start_server(state: AppState, port: u16) -> crate::error::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    serve(listener, state).await
}

/// Serve the router on an already-bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> crate::error::Result<()> {
    let app = router(state);
    info!(address = ?listener.local_addr().ok(), "Starting funding API server");
    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /health: server status
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": crate::core::types::current_time_ms(),
    }))
}

/// GET /api/funding: ranked cross-venue funding snapshot
async fn funding_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let page = aggregate(state.primary.as_ref(), state.secondary.as_ref(), &state.options)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Funding aggregation failed");
            ApiError::FundingUnavailable(e)
        })?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(page)))
}

/// GET /api/metrics: per-feed upstream counters
async fn metrics_handler(State(state): State<AppState>) -> Json<Vec<FeedSnapshot>> {
    Json(state.metrics.snapshot())
}
