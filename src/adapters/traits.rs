//! Venue trait definitions
//!
//! The pipeline only talks to upstreams through these traits, so tests
//! can swap in canned venues without a network.

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::{OpenInterestRecord, RawMarketQuote, ReferenceData};
use crate::core::types::Venue;

/// The venue whose instrument list defines the ranked universe.
///
/// Quotes and open interest arrive from two separate endpoints keyed
/// by the same provider symbol.
#[async_trait]
pub trait PrimaryVenue: Send + Sync {
    fn venue(&self) -> Venue;

    /// Funding settlement cadence of the native rate, in hours
    fn funding_interval_hours(&self) -> u32;

    /// One request to the mark-price / funding feed
    async fn fetch_quotes(&self) -> ExchangeResult<Vec<RawMarketQuote>>;

    /// One request to the open-interest feed
    async fn fetch_open_interest(&self) -> ExchangeResult<Vec<OpenInterestRecord>>;
}

/// The venue compared against the primary one.
#[async_trait]
pub trait SecondaryVenue: Send + Sync {
    fn venue(&self) -> Venue;

    /// Funding settlement cadence of the native rate, in hours
    fn funding_interval_hours(&self) -> u32;

    /// One request returning index-aligned metadata and live metrics
    async fn fetch_reference_metadata(&self) -> ExchangeResult<ReferenceData>;
}
