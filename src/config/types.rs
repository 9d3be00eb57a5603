//! Configuration types for the funding service
//!
//! Every section is optional in YAML; missing fields fall back to the
//! defaults below. Environment overrides are applied after parsing and
//! before validation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapters::backpack::BackpackConfig;
use crate::adapters::hyperliquid::config::is_valid_address;
use crate::adapters::hyperliquid::HyperliquidConfig;
use crate::core::{PipelineOptions, UnmatchedSecondary, DEFAULT_PAGE_SIZE};
use crate::error::AppError;

// ============================================================================
// Constants
// ============================================================================

/// Largest accepted `upstream.max_retries`
pub const MAX_RETRIES_LIMIT: u32 = 5;

/// Longest accepted venue funding interval
pub const MAX_FUNDING_INTERVAL_HOURS: u32 = 24;

// ============================================================================
// Configuration Structs
// ============================================================================

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server port
    pub port: u16,
}

/// Aggregation pipeline settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Instruments in `head`; the remainder go to `rest`
    pub page_size: usize,
    /// Policy for primary instruments the secondary venue does not list
    pub unmatched_secondary: UnmatchedSecondary,
}

/// Shared HTTP client settings for every upstream feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Per-request timeout
    pub timeout_ms: u64,
    /// Retries after the first attempt (transport errors only)
    pub max_retries: u32,
    /// Base backoff, doubled on each retry
    pub retry_backoff_ms: u64,
}

/// Root application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pipeline: PipelineConfig,
    pub upstream: UpstreamConfig,
    pub backpack: BackpackConfig,
    pub hyperliquid: HyperliquidConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            unmatched_secondary: UnmatchedSecondary::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            max_retries: 2,
            retry_backoff_ms: 250,
        }
    }
}

impl PipelineConfig {
    pub fn options(&self) -> PipelineOptions {
        PipelineOptions {
            page_size: self.page_size,
            unmatched: self.unmatched_secondary,
        }
    }
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        if self.pipeline.page_size == 0 {
            return Err(AppError::Config(
                "pipeline.page_size must be > 0".to_string(),
            ));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(AppError::Config(
                "upstream.timeout_ms must be > 0".to_string(),
            ));
        }

        if self.upstream.max_retries > MAX_RETRIES_LIMIT {
            return Err(AppError::Config(format!(
                "upstream.max_retries must be <= {}, got {}",
                MAX_RETRIES_LIMIT, self.upstream.max_retries
            )));
        }

        validate_interval("backpack", self.backpack.funding_interval_hours)?;
        validate_interval("hyperliquid", self.hyperliquid.funding_interval_hours)?;
        validate_url("backpack", &self.backpack.base_url)?;
        validate_url("hyperliquid", &self.hyperliquid.base_url)?;

        if let Some(user) = &self.hyperliquid.positions_user {
            if !is_valid_address(user) {
                return Err(AppError::Config(format!(
                    "hyperliquid.positions_user is not a 0x-prefixed 40-hex-digit address: {}",
                    user
                )));
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides on top of the parsed file.
    ///
    /// Recognized: `PORT`, `FUNDING_PAGE_SIZE`, `BACKPACK_BASE_URL`,
    /// `HYPERLIQUID_BASE_URL`, `HYPERLIQUID_POSITIONS_USER`.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Some(port) = env_parsed("PORT")? {
            self.server.port = port;
        }
        if let Some(page_size) = env_parsed("FUNDING_PAGE_SIZE")? {
            self.pipeline.page_size = page_size;
        }
        if let Some(url) = env_string("BACKPACK_BASE_URL") {
            self.backpack.base_url = url;
        }
        if let Some(url) = env_string("HYPERLIQUID_BASE_URL") {
            self.hyperliquid.base_url = url;
        }
        if let Some(user) = env_string("HYPERLIQUID_POSITIONS_USER") {
            self.hyperliquid.positions_user = Some(user);
        }
        Ok(())
    }
}

fn validate_interval(venue: &str, hours: u32) -> Result<(), AppError> {
    if hours == 0 || hours > MAX_FUNDING_INTERVAL_HOURS {
        return Err(AppError::Config(format!(
            "{}.funding_interval_hours must be 1-{}, got {}",
            venue, MAX_FUNDING_INTERVAL_HOURS, hours
        )));
    }
    Ok(())
}

fn validate_url(venue: &str, url: &str) -> Result<(), AppError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "{}.base_url must start with http:// or https://, got '{}'",
            venue, url
        )));
    }
    Ok(())
}

/// Non-empty, trimmed value of `key`
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parsed<T: FromStr>(key: &str) -> Result<Option<T>, AppError> {
    match env_string(key) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            AppError::Config(format!("Environment variable {} has invalid value '{}'", key, raw))
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
