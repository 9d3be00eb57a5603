//! Backpack Adapter Implementation
//!
//! REST adapter for Backpack perpetuals: mark prices with funding rates,
//! and open interest. Read-only public market data.

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::http::HttpTransport;
use crate::adapters::traits::PrimaryVenue;
use crate::adapters::types::{Feed, OpenInterestRecord, RawMarketQuote};
use crate::core::types::Venue;

use super::config::BackpackConfig;
use super::types::{BackpackMarkPrice, BackpackOpenInterest};

/// Backpack adapter implementing `PrimaryVenue`
#[derive(Debug, Clone)]
pub struct BackpackAdapter {
    config: BackpackConfig,
    http: HttpTransport,
}

impl BackpackAdapter {
    pub fn new(config: BackpackConfig, http: HttpTransport) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl PrimaryVenue for BackpackAdapter {
    fn venue(&self) -> Venue {
        Venue::Backpack
    }

    fn funding_interval_hours(&self) -> u32 {
        self.config.funding_interval_hours
    }

    async fn fetch_quotes(&self) -> ExchangeResult<Vec<RawMarketQuote>> {
        let prices: Vec<BackpackMarkPrice> = self
            .http
            .get_json(Feed::BackpackMarkPrices, &self.config.mark_prices_url())
            .await?;
        Ok(prices.into_iter().map(RawMarketQuote::from).collect())
    }

    async fn fetch_open_interest(&self) -> ExchangeResult<Vec<OpenInterestRecord>> {
        let records: Vec<BackpackOpenInterest> = self
            .http
            .get_json(Feed::BackpackOpenInterest, &self.config.open_interest_url())
            .await?;
        Ok(records.into_iter().map(OpenInterestRecord::from).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
