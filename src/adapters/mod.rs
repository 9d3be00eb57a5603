//! Exchange adapters for the funding-rate venues
//!
//! This module provides the upstream REST clients and the traits the
//! aggregation pipeline consumes them through.

pub mod backpack;
pub mod errors;
pub mod http;
pub mod hyperliquid;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use backpack::{BackpackAdapter, BackpackConfig};
pub use errors::{ExchangeError, ExchangeResult};
pub use http::{HttpSettings, HttpTransport};
pub use hyperliquid::{HyperliquidAdapter, HyperliquidConfig};
pub use traits::{PrimaryVenue, SecondaryVenue};
pub use types::{AssetMeta, AssetMetrics, Feed, OpenInterestRecord, RawMarketQuote, ReferenceData};
