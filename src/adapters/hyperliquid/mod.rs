//! Hyperliquid exchange adapter module
//!
//! Provides REST-based funding/metadata snapshots and account positions
//! from Hyperliquid DEX.

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::HyperliquidAdapter;
pub use config::HyperliquidConfig;
