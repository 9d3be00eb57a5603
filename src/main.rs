//! Funding Terminal - Entry Point
//!
//! 1. Loads configuration (YAML + env overrides)
//! 2. Builds the Backpack and Hyperliquid REST clients
//! 3. Serves the funding API until Ctrl+C

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};

use funding_terminal::adapters::{BackpackAdapter, HttpSettings, HttpTransport, HyperliquidAdapter};
use funding_terminal::config::{self, DEFAULT_CONFIG_PATH};
use funding_terminal::core::UpstreamMetrics;
use funding_terminal::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    config::init_logging();

    let config_path = std::env::var("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let cfg = config::load_app_config(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    info!(
        port = cfg.server.port,
        page_size = cfg.pipeline.page_size,
        unmatched_secondary = ?cfg.pipeline.unmatched_secondary,
        timeout_ms = cfg.upstream.timeout_ms,
        max_retries = cfg.upstream.max_retries,
        backpack = %cfg.backpack.base_url,
        hyperliquid = %cfg.hyperliquid.base_url,
        "Configuration loaded"
    );

    let metrics = Arc::new(UpstreamMetrics::new());
    let http = HttpTransport::new(HttpSettings::from(&cfg.upstream), Arc::clone(&metrics));

    let backpack = Arc::new(BackpackAdapter::new(cfg.backpack.clone(), http.clone()));
    let hyperliquid = Arc::new(HyperliquidAdapter::new(cfg.hyperliquid.clone(), http));

    let state = AppState {
        primary: backpack,
        secondary: hyperliquid.clone(),
        positions: hyperliquid,
        options: cfg.pipeline.options(),
        metrics,
    };

    let port = cfg.server.port;
    let mut server_handle = tokio::spawn(server::start_server(state, port));

    tokio::select! {
        result = &mut server_handle => {
            // The server only returns on failure (e.g. port already in use)
            let result = result.context("API server task panicked")?;
            result.context("API server exited with error")?;
            info!("[SHUTDOWN] API server stopped");
        }
        ctrl_c = signal::ctrl_c() => {
            match ctrl_c {
                Ok(()) => info!("[SHUTDOWN] Graceful shutdown initiated"),
                Err(err) => error!(error = %err, "Failed to listen for Ctrl+C signal"),
            }
            server_handle.abort();
        }
    }

    info!("[SHUTDOWN] Clean exit");
    Ok(())
}
