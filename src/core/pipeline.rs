//! Aggregation pipeline: fetch → normalize → join → rank.
//!
//! One call is one unit of work. The three upstream feeds are fetched
//! concurrently and awaited together; if any of them fails the whole
//! aggregation fails and nothing partial is returned.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

use crate::adapters::errors::ExchangeError;
use crate::adapters::traits::{PrimaryVenue, SecondaryVenue};
use crate::adapters::types::Feed;
use crate::core::join::{join, JoinOptions, UnmatchedSecondary};
use crate::core::rank::{rank_and_page, DEFAULT_PAGE_SIZE};
use crate::core::symbol::{open_interest_map, secondary_rates};
use crate::core::types::RankedPage;

/// Tunables for one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub page_size: usize,
    pub unmatched: UnmatchedSecondary,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            unmatched: UnmatchedSecondary::default(),
        }
    }
}

/// One failed upstream feed
#[derive(Debug)]
pub struct FeedFailure {
    pub feed: Feed,
    pub error: ExchangeError,
}

impl fmt::Display for FeedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.feed, self.error)
    }
}

/// Every feed that failed during one aggregation cycle
#[derive(Error, Debug)]
#[error("Upstream failure ({})", format_failures(.failures))]
pub struct AggregationError {
    pub failures: Vec<FeedFailure>,
}

fn format_failures(failures: &[FeedFailure]) -> String {
    failures
        .iter()
        .map(FeedFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Run one full aggregation against the given venues.
pub async fn aggregate(
    primary: &dyn PrimaryVenue,
    secondary: &dyn SecondaryVenue,
    options: &PipelineOptions,
) -> Result<RankedPage, AggregationError> {
    let started = Instant::now();

    let (quotes, open_interest, reference) = tokio::join!(
        primary.fetch_quotes(),
        primary.fetch_open_interest(),
        secondary.fetch_reference_metadata(),
    );

    let mut failures = Vec::new();
    let quotes = collect(quotes, Feed::BackpackMarkPrices, &mut failures);
    let open_interest = collect(open_interest, Feed::BackpackOpenInterest, &mut failures);
    let reference = collect(reference, Feed::HyperliquidMetaAndAssetCtxs, &mut failures);

    let (Some(quotes), Some(open_interest), Some(reference)) = (quotes, open_interest, reference)
    else {
        for failure in &failures {
            tracing::warn!(
                feed = %failure.feed,
                status = ?failure.error.status_code(),
                error = %failure.error,
                "Upstream feed failed"
            );
        }
        return Err(AggregationError { failures });
    };

    let secondary_map = secondary_rates(&reference, secondary.funding_interval_hours());
    let oi_map = open_interest_map(&open_interest);
    let join_options = JoinOptions {
        primary: primary.venue(),
        secondary: secondary.venue(),
        primary_interval_hours: primary.funding_interval_hours(),
        unmatched: options.unmatched,
    };
    let joined = join(&quotes, &secondary_map, &oi_map, &join_options);
    let page = rank_and_page(joined, options.page_size);

    tracing::info!(
        quotes = quotes.len(),
        secondary_matches = secondary_map.len(),
        instruments = page.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Funding aggregation complete"
    );

    Ok(page)
}

fn collect<T>(
    result: Result<T, ExchangeError>,
    feed: Feed,
    failures: &mut Vec<FeedFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            failures.push(FeedFailure { feed, error });
            None
        }
    }
}
