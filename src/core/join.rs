//! Cross-venue join and funding arbitrage calculation.
//!
//! The primary venue's quote list is the instrument universe: an
//! instrument only the secondary venue lists is never surfaced.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::adapters::types::RawMarketQuote;
use crate::core::rate::{normalize_str, parse_decimal};
use crate::core::symbol::{normalize, OpenInterestMap, SecondaryRates};
use crate::core::types::{ArbStrategy, JoinedInstrument, PrimaryLeg, SecondaryLeg, Venue};

/// What to do with a primary instrument the secondary venue does not list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedSecondary {
    /// Keep it, with a zero secondary rate
    #[default]
    #[serde(alias = "zero_fill")]
    Zero,
    /// Drop it before ranking
    Exclude,
}

/// Static inputs to `join`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOptions {
    pub primary: Venue,
    pub secondary: Venue,
    pub primary_interval_hours: u32,
    pub unmatched: UnmatchedSecondary,
}

/// Join primary quotes with the secondary rates and open interest.
///
/// Output order follows `quotes`. Quotes without a parseable funding
/// rate or mark price are skipped, as are quotes whose notional does
/// not fit in a `Decimal`.
pub fn join(
    quotes: &[RawMarketQuote],
    secondary: &SecondaryRates,
    open_interest: &OpenInterestMap,
    options: &JoinOptions,
) -> Vec<JoinedInstrument> {
    quotes
        .iter()
        .filter_map(|quote| join_one(quote, secondary, open_interest, options))
        .collect()
}

fn join_one(
    quote: &RawMarketQuote,
    secondary: &SecondaryRates,
    open_interest: &OpenInterestMap,
    options: &JoinOptions,
) -> Option<JoinedInstrument> {
    let symbol = normalize(&quote.symbol);

    let Some(original_rate) = quote.funding_rate.as_deref() else {
        tracing::debug!(symbol = %quote.symbol, "Quote has no funding rate, skipping");
        return None;
    };
    let primary_rate = match normalize_str(original_rate, options.primary_interval_hours) {
        Ok(rate) => rate,
        Err(e) => {
            tracing::warn!(symbol = %quote.symbol, error = %e, "Skipping quote: bad funding rate");
            return None;
        }
    };
    let Some(raw_mark) = quote.mark_price.as_deref() else {
        tracing::warn!(symbol = %quote.symbol, "Skipping quote: no mark price");
        return None;
    };
    let mark_price = match parse_decimal(raw_mark) {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!(symbol = %quote.symbol, error = %e, "Skipping quote: bad mark price");
            return None;
        }
    };

    let secondary_leg = match (secondary.get(&symbol), options.unmatched) {
        (Some(leg), _) => leg.clone(),
        (None, UnmatchedSecondary::Zero) => SecondaryLeg::unmatched(),
        (None, UnmatchedSecondary::Exclude) => return None,
    };

    let quantity = open_interest.get(&symbol).copied().unwrap_or(Decimal::ZERO);
    let Some(notional) = quantity.checked_mul(mark_price) else {
        tracing::warn!(
            symbol = %quote.symbol,
            quantity = %quantity,
            mark_price = %mark_price,
            "Skipping quote: open interest notional overflows"
        );
        return None;
    };
    let notional = notional.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let funding_arb = primary_rate.abs_diff(&secondary_leg.rate);
    let arb_strategy = ArbStrategy::from_rates(
        options.primary,
        &primary_rate,
        options.secondary,
        &secondary_leg.rate,
    );

    Some(JoinedInstrument {
        symbol,
        open_interest: notional,
        primary: PrimaryLeg {
            rate: primary_rate,
            original_rate: original_rate.to_string(),
            next_funding_time: quote.next_funding_time,
            mark_price: raw_mark.to_string(),
            index_price: quote.index_price.clone(),
        },
        secondary: secondary_leg,
        funding_arb,
        arb_strategy,
        rank: 0,
    })
}
