//! Funding rate conversion.
//!
//! Native venue rates are fractions per funding interval. They are
//! rebased to a percentage per 8 hours so rates from venues with
//! different settlement cadences can be compared:
//!
//! `normalized = native × 100 × (8 / interval_hours)`, rounded to 4dp.
//!
//! All arithmetic is done on `rust_decimal::Decimal` parsed straight
//! from the venue's string; rates in the 1e-5..1e-6 range never pass
//! through `f64`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::core::types::{to_fixed, to_plain};

/// Reference funding interval every rate is rebased to
pub const REFERENCE_INTERVAL_HOURS: u32 = 8;

/// Decimal places kept after conversion
pub const RATE_DP: u32 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("Not a decimal number: {0:?}")]
    InvalidNumber(String),

    #[error("Funding interval must be at least one hour (got {0})")]
    InvalidInterval(u32),

    #[error("Rate {0} overflows when rebased to 8h")]
    Overflow(Decimal),
}

/// Signed percentage per 8 hours, rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedFundingRate(Decimal);

impl NormalizedFundingRate {
    /// Wrap an already-normalized percentage, rounding it to 4dp.
    pub fn new(percent_per_8h: Decimal) -> Self {
        Self(percent_per_8h.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `|self - other|`, exact since both sides are already 4dp
    pub fn abs_diff(&self, other: &Self) -> Decimal {
        (self.0 - other.0).abs()
    }

    /// Fixed 4-decimal string (`"0.0500"`)
    pub fn to_fixed(&self) -> String {
        to_fixed(self.0, RATE_DP)
    }

    /// Shortest decimal string (`"0.008"`)
    pub fn to_plain(&self) -> String {
        to_plain(self.0)
    }
}

impl fmt::Display for NormalizedFundingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

/// Parse a venue decimal string exactly.
///
/// Accepts plain (`"0.0000125"`) and scientific (`"1.25e-5"`) notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal, RateError> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| RateError::InvalidNumber(raw.to_string()))
}

/// Convert a native fractional rate at `interval_hours` cadence.
pub fn to_normalized(
    native: Decimal,
    interval_hours: u32,
) -> Result<NormalizedFundingRate, RateError> {
    if interval_hours == 0 {
        return Err(RateError::InvalidInterval(interval_hours));
    }
    let scaled = native
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|v| v.checked_mul(Decimal::from(REFERENCE_INTERVAL_HOURS)))
        .and_then(|v| v.checked_div(Decimal::from(interval_hours)))
        .ok_or(RateError::Overflow(native))?;
    Ok(NormalizedFundingRate::new(scaled))
}

/// `parse_decimal` + `to_normalized`
pub fn normalize_str(raw: &str, interval_hours: u32) -> Result<NormalizedFundingRate, RateError> {
    to_normalized(parse_decimal(raw)?, interval_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_eight_hour_rate_is_percent() {
        let rate = normalize_str("0.0005", 8).unwrap();
        assert_eq!(rate.value(), dec!(0.05));
        assert_eq!(rate.to_fixed(), "0.0500");
    }

    #[test]
    fn test_hourly_rate_is_rebased() {
        let rate = normalize_str("0.00001", 1).unwrap();
        assert_eq!(rate.value(), dec!(0.008));
        assert_eq!(rate.to_plain(), "0.008");
    }

    #[test]
    fn test_tiny_rates_keep_precision() {
        // 0.0000125 × 800 = 0.01 exactly; f64 gives 0.009999999999999998
        let rate = normalize_str("0.0000125", 1).unwrap();
        assert_eq!(rate.value(), dec!(0.01));
    }

    #[test]
    fn test_scientific_notation() {
        let rate = normalize_str("1.25e-5", 1).unwrap();
        assert_eq!(rate.value(), dec!(0.01));
    }

    #[test]
    fn test_rounds_to_four_places() {
        // 0.000001234 × 800 = 0.0009872 → 0.0010
        let rate = normalize_str("0.000001234", 1).unwrap();
        assert_eq!(rate.to_fixed(), "0.0010");
    }

    #[test]
    fn test_negative_rate() {
        let rate = normalize_str("-0.0000875", 1).unwrap();
        assert_eq!(rate.value(), dec!(-0.07));
    }

    #[test]
    fn test_other_intervals() {
        // 4h cadence doubles, 24h divides by three
        assert_eq!(normalize_str("0.0001", 4).unwrap().value(), dec!(0.02));
        assert_eq!(normalize_str("0.0003", 24).unwrap().value(), dec!(0.01));
    }

    #[test]
    fn test_rejects_garbage_and_zero_interval() {
        assert_eq!(
            normalize_str("abc", 8),
            Err(RateError::InvalidNumber("abc".into()))
        );
        assert_eq!(normalize_str("", 8), Err(RateError::InvalidNumber("".into())));
        assert_eq!(to_normalized(dec!(0.1), 0), Err(RateError::InvalidInterval(0)));
    }

    #[test]
    fn test_overflowing_rate_is_an_error() {
        assert_eq!(
            normalize_str("79228162514264337593543950335", 1),
            Err(RateError::Overflow(Decimal::MAX))
        );
        assert!(matches!(
            to_normalized(Decimal::MIN, 8),
            Err(RateError::Overflow(_))
        ));
        // large but representable
        assert!(normalize_str("1000000000000000000000", 1).is_ok());
    }

    #[test]
    fn test_abs_diff() {
        let a = NormalizedFundingRate::new(dec!(0.05));
        let b = NormalizedFundingRate::new(dec!(-0.008));
        assert_eq!(a.abs_diff(&b), dec!(0.058));
        assert_eq!(b.abs_diff(&a), dec!(0.058));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hourly_is_native_times_800(mantissa in -1_000_000i64..1_000_000, scale in 4u32..10) {
                let native = Decimal::new(mantissa, scale);
                let rate = to_normalized(native, 1).unwrap();
                let expected = (native * dec!(800))
                    .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
                prop_assert_eq!(rate.value(), expected);
            }

            #[test]
            fn eight_hour_is_native_times_100(mantissa in -1_000_000i64..1_000_000, scale in 4u32..10) {
                let native = Decimal::new(mantissa, scale);
                let rate = to_normalized(native, 8).unwrap();
                let expected = (native * dec!(100))
                    .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
                prop_assert_eq!(rate.value(), expected);
            }

            #[test]
            fn string_and_decimal_paths_agree(mantissa in -1_000_000i64..1_000_000, scale in 0u32..10) {
                let native = Decimal::new(mantissa, scale);
                prop_assert_eq!(
                    normalize_str(&native.to_string(), 1).unwrap(),
                    to_normalized(native, 1).unwrap()
                );
            }
        }
    }
}
