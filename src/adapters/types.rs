//! Provider-agnostic records produced by the adapters.
//!
//! Wire types live next to each client (`backpack::types`,
//! `hyperliquid::types`) and are converted into these before they
//! reach the pipeline.

use std::fmt;

use serde::Serialize;

use crate::core::types::Venue;

// =============================================================================
// Primary venue records
// =============================================================================

/// One live quote from the primary venue's mark-price feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarketQuote {
    /// Provider symbol (e.g. "BTC_USDC_PERP")
    pub symbol: String,
    /// Native funding rate as a fraction per funding interval
    pub funding_rate: Option<String>,
    pub mark_price: Option<String>,
    pub index_price: Option<String>,
    /// Next funding settlement (epoch ms)
    pub next_funding_time: Option<u64>,
}

/// Open interest for one instrument, as a contract quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenInterestRecord {
    pub symbol: String,
    pub open_interest: Option<String>,
}

// =============================================================================
// Secondary venue records (index-aligned parallel arrays)
// =============================================================================

/// Reference metadata for one secondary-venue asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMeta {
    pub name: String,
    pub is_delisted: bool,
}

/// Live metrics for one secondary-venue asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMetrics {
    /// Native funding rate as a fraction per funding interval
    pub funding: Option<String>,
    pub mark_price: Option<String>,
    pub open_interest: Option<String>,
}

/// Both halves of the secondary feed. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub metadata: Option<Vec<AssetMeta>>,
    pub metrics: Option<Vec<AssetMetrics>>,
}

// =============================================================================
// Feed identifiers
// =============================================================================

/// Every upstream endpoint this service calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feed {
    BackpackMarkPrices,
    BackpackOpenInterest,
    HyperliquidMetaAndAssetCtxs,
    HyperliquidClearinghouseState,
}

impl Feed {
    pub const ALL: [Feed; 4] = [
        Feed::BackpackMarkPrices,
        Feed::BackpackOpenInterest,
        Feed::HyperliquidMetaAndAssetCtxs,
        Feed::HyperliquidClearinghouseState,
    ];

    pub fn venue(&self) -> Venue {
        match self {
            Feed::BackpackMarkPrices | Feed::BackpackOpenInterest => Venue::Backpack,
            Feed::HyperliquidMetaAndAssetCtxs | Feed::HyperliquidClearinghouseState => {
                Venue::Hyperliquid
            }
        }
    }

    /// Upstream endpoint / request-type name
    pub fn name(&self) -> &'static str {
        match self {
            Feed::BackpackMarkPrices => "markPrices",
            Feed::BackpackOpenInterest => "openInterest",
            Feed::HyperliquidMetaAndAssetCtxs => "metaAndAssetCtxs",
            Feed::HyperliquidClearinghouseState => "clearinghouseState",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.venue(), self.name())
    }
}
