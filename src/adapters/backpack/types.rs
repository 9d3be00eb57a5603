//! Backpack Types
//!
//! REST response types for `GET /api/v1/markPrices` and
//! `GET /api/v1/openInterest`.
//!
//! Both return a JSON array of objects keyed by a suffixed market
//! symbol such as `BTC_USDC_PERP`.

use serde::Deserialize;

use crate::adapters::types::{OpenInterestRecord, RawMarketQuote};

/// One entry of the markPrices feed
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackpackMarkPrice {
    pub symbol: String,
    /// Fraction per funding interval, as a decimal string
    #[serde(default)]
    pub funding_rate: Option<String>,
    #[serde(default)]
    pub index_price: Option<String>,
    #[serde(default)]
    pub mark_price: Option<String>,
    /// Epoch milliseconds
    #[serde(default)]
    pub next_funding_timestamp: Option<u64>,
}

impl From<BackpackMarkPrice> for RawMarketQuote {
    fn from(m: BackpackMarkPrice) -> Self {
        RawMarketQuote {
            symbol: m.symbol,
            funding_rate: m.funding_rate,
            mark_price: m.mark_price,
            index_price: m.index_price,
            next_funding_time: m.next_funding_timestamp,
        }
    }
}

/// One entry of the openInterest feed (contract quantity)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackpackOpenInterest {
    pub symbol: String,
    #[serde(default)]
    pub open_interest: Option<String>,
}

impl From<BackpackOpenInterest> for OpenInterestRecord {
    fn from(o: BackpackOpenInterest) -> Self {
        OpenInterestRecord {
            symbol: o.symbol,
            open_interest: o.open_interest,
        }
    }
}
