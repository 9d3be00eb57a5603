//! Configuration module for service settings and YAML loading
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `ServerConfig`, `PipelineConfig`, `UpstreamConfig`)
//! - YAML loading with environment overrides (`load_app_config`)
//! - Logging initialization

pub mod logging;
mod loader;
mod types;

// Re-export types
pub use types::{
    AppConfig, PipelineConfig, ServerConfig, UpstreamConfig, MAX_FUNDING_INTERVAL_HOURS,
    MAX_RETRIES_LIMIT,
};

// Re-export loader functions
pub use loader::{load_app_config, load_config, load_config_from_str, DEFAULT_CONFIG_PATH};

pub use logging::init_logging;
