//! Core module - Rate normalization, symbol join, ranking, pipeline
//!
//! This module uses **explicit re-exports** instead of glob exports (`pub use module::*`)
//! to provide better API visibility and prevent accidental public API changes.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use crate::core::{aggregate, PipelineOptions, RankedPage};
//! ```

pub mod join;
pub mod metrics;
pub mod pipeline;
pub mod positions;
pub mod rank;
pub mod rate;
pub mod symbol;
pub mod types;

// Explicit re-exports for rate module
pub use rate::{
    normalize_str, parse_decimal, to_normalized, NormalizedFundingRate, RateError, RATE_DP,
    REFERENCE_INTERVAL_HOURS,
};

// Explicit re-exports for symbol module
pub use symbol::{normalize, open_interest_map, secondary_rates, CanonicalSymbol, OpenInterestMap, SecondaryRates};

// Explicit re-exports for join / rank modules
pub use join::{join, JoinOptions, UnmatchedSecondary};
pub use rank::{rank_and_page, DEFAULT_PAGE_SIZE};

// Explicit re-exports for pipeline module
pub use pipeline::{aggregate, AggregationError, FeedFailure, PipelineOptions};

// Explicit re-exports for positions module
pub use positions::{to_positions, Position};

// Explicit re-exports for metrics module
pub use metrics::{FeedSnapshot, UpstreamMetrics};

// Explicit re-exports for types module
pub use types::{
    current_time_ms, to_fixed, to_plain, ArbStrategy, JoinedInstrument, PrimaryLeg, RankedPage,
    SecondaryLeg, Venue,
};
