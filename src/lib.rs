//! Funding Terminal
//!
//! Cross-venue perpetual funding-rate comparison service:
//! - Exchange adapters (Backpack, Hyperliquid)
//! - Rate normalization to % per 8h
//! - Symbol join, arbitrage direction, open-interest ranking
//! - HTTP API for the dashboard

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod server;

pub use error::AppError;
