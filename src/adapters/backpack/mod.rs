//! Backpack exchange adapter module
//!
//! Provides REST-based mark price, funding and open interest data.

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::BackpackAdapter;
pub use config::BackpackConfig;
