//! Symbol normalization and per-venue lookup maps.
//!
//! Every venue identifier maps to a canonical base ticker: the leading
//! underscore-delimited segment (`BTC_USDC_PERP` → `BTC`). Venues that
//! already use bare tickers pass through unchanged.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::adapters::types::{OpenInterestRecord, ReferenceData};
use crate::core::rate::{normalize_str, parse_decimal, NormalizedFundingRate};
use crate::core::types::{to_plain, SecondaryLeg};

/// Canonical base ticker shared across venues
pub type CanonicalSymbol = String;

/// canonical symbol → secondary-venue leg
pub type SecondaryRates = HashMap<CanonicalSymbol, SecondaryLeg>;

/// canonical symbol → open interest quantity
pub type OpenInterestMap = HashMap<CanonicalSymbol, Decimal>;

/// Map a venue symbol to its canonical base ticker. Idempotent.
pub fn normalize(provider_symbol: &str) -> CanonicalSymbol {
    provider_symbol
        .split('_')
        .next()
        .unwrap_or(provider_symbol)
        .to_string()
}

/// Build the open-interest lookup.
///
/// Entries with a missing or non-numeric quantity are left out, so
/// the join falls back to zero for them. Later duplicates win.
pub fn open_interest_map(records: &[OpenInterestRecord]) -> OpenInterestMap {
    let mut map = OpenInterestMap::with_capacity(records.len());
    for record in records {
        let Some(raw) = record.open_interest.as_deref() else {
            continue;
        };
        match parse_decimal(raw) {
            Ok(quantity) => {
                map.insert(normalize(&record.symbol), quantity);
            }
            Err(e) => {
                tracing::warn!(symbol = %record.symbol, error = %e, "Skipping open interest entry");
            }
        }
    }
    map
}

/// Pair the secondary venue's parallel arrays by index.
///
/// Returns an empty map when either array is missing or their lengths
/// differ. Indexes whose metadata is delisted are skipped, as are
/// entries whose funding value is missing or not a number.
pub fn secondary_rates(data: &ReferenceData, interval_hours: u32) -> SecondaryRates {
    let (Some(metadata), Some(metrics)) = (data.metadata.as_ref(), data.metrics.as_ref()) else {
        tracing::warn!(
            has_metadata = data.metadata.is_some(),
            has_metrics = data.metrics.is_some(),
            "Secondary feed incomplete, no instruments will match"
        );
        return SecondaryRates::new();
    };

    if metadata.len() != metrics.len() {
        tracing::warn!(
            metadata_len = metadata.len(),
            metrics_len = metrics.len(),
            "Secondary feed arrays misaligned, no instruments will match"
        );
        return SecondaryRates::new();
    }

    let mut map = SecondaryRates::with_capacity(metrics.len());
    for (meta, metric) in metadata.iter().zip(metrics.iter()) {
        if meta.is_delisted {
            continue;
        }
        let Some(funding) = metric.funding.as_deref() else {
            tracing::warn!(symbol = %meta.name, "Skipping secondary entry: no funding value");
            continue;
        };
        let rate: NormalizedFundingRate = match normalize_str(funding, interval_hours) {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!(symbol = %meta.name, error = %e, "Skipping secondary funding entry");
                continue;
            }
        };
        map.insert(
            normalize(&meta.name),
            SecondaryLeg {
                rate,
                mark_price: plain_or_zero(metric.mark_price.as_deref()),
                open_interest: plain_or_zero(metric.open_interest.as_deref()),
            },
        );
    }
    map
}

fn plain_or_zero(raw: Option<&str>) -> String {
    raw.and_then(|r| parse_decimal(r).ok())
        .map(to_plain)
        .unwrap_or_else(|| "0".to_string())
}
