//! Core data types for the funding-rate aggregation pipeline.
//!
//! Everything here is built fresh per request and serialized straight
//! into the `/api/funding` response.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::core::rate::NormalizedFundingRate;

// =============================================================================
// Venue
// =============================================================================

/// The two exchanges compared by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Venue {
    Backpack,
    Hyperliquid,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Backpack => "BACKPACK",
            Venue::Hyperliquid => "HYPERLIQUID",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Arbitrage strategy
// =============================================================================

/// Which venue to hold long and which short for the funding carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArbStrategy {
    pub long: Venue,
    pub short: Venue,
}

impl ArbStrategy {
    /// Short the venue charging the higher rate, long the other.
    /// Equal rates go long on the primary venue.
    pub fn from_rates(
        primary: Venue,
        primary_rate: &NormalizedFundingRate,
        secondary: Venue,
        secondary_rate: &NormalizedFundingRate,
    ) -> Self {
        if primary_rate > secondary_rate {
            ArbStrategy {
                long: secondary,
                short: primary,
            }
        } else {
            ArbStrategy {
                long: primary,
                short: secondary,
            }
        }
    }
}

// =============================================================================
// Joined instrument
// =============================================================================

/// Primary-venue side of a joined record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLeg {
    #[serde(serialize_with = "serialize_rate_fixed")]
    pub rate: NormalizedFundingRate,
    /// Native rate string exactly as the venue sent it
    pub original_rate: String,
    pub next_funding_time: Option<u64>,
    pub mark_price: String,
    pub index_price: Option<String>,
}

/// Secondary-venue side of a joined record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryLeg {
    #[serde(serialize_with = "serialize_rate_plain")]
    pub rate: NormalizedFundingRate,
    pub mark_price: String,
    pub open_interest: String,
}

impl SecondaryLeg {
    /// Placeholder for an instrument the secondary venue does not list
    pub fn unmatched() -> Self {
        Self {
            rate: NormalizedFundingRate::zero(),
            mark_price: "0".to_string(),
            open_interest: "0".to_string(),
        }
    }
}

/// One instrument after the cross-venue join.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedInstrument {
    pub symbol: String,
    /// Open-interest notional in quote currency, rounded to 2dp
    #[serde(serialize_with = "serialize_fixed_2")]
    pub open_interest: Decimal,
    pub primary: PrimaryLeg,
    pub secondary: SecondaryLeg,
    #[serde(serialize_with = "serialize_fixed_4")]
    pub funding_arb: Decimal,
    pub arb_strategy: ArbStrategy,
    /// 1-based; 0 until ranked
    pub rank: usize,
}

/// Ranked instruments split into the primary page and the overflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedPage {
    pub head: Vec<JoinedInstrument>,
    pub rest: Vec<JoinedInstrument>,
}

impl RankedPage {
    pub fn len(&self) -> usize {
        self.head.len() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.rest.is_empty()
    }

    /// `head ++ rest` in rank order
    pub fn iter(&self) -> impl Iterator<Item = &JoinedInstrument> {
        self.head.iter().chain(self.rest.iter())
    }
}

// =============================================================================
// Decimal formatting
// =============================================================================

/// Round half away from zero and pad to exactly `dp` decimals.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(dp);
    rounded.to_string()
}

/// Shortest decimal representation (`0.0080` → `0.008`, `0` → `0`).
pub fn to_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

fn serialize_fixed_2<S: Serializer>(value: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_fixed(*value, 2))
}

fn serialize_fixed_4<S: Serializer>(value: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_fixed(*value, 4))
}

fn serialize_rate_fixed<S: Serializer>(rate: &NormalizedFundingRate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&rate.to_fixed())
}

fn serialize_rate_plain<S: Serializer>(rate: &NormalizedFundingRate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&rate.to_plain())
}

/// Current time in milliseconds (epoch)
pub fn current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
