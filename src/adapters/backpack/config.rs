//! Backpack Configuration
//!
//! Public market-data endpoints only; no credentials required.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Mainnet REST base URL
pub const MAINNET_REST_URL: &str = "https://api.backpack.exchange";

/// Backpack settles perp funding every 8 hours
pub const DEFAULT_FUNDING_INTERVAL_HOURS: u32 = 8;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for Backpack exchange connection (public market data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackpackConfig {
    pub base_url: String,
    pub funding_interval_hours: u32,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_REST_URL.to_string(),
            funding_interval_hours: DEFAULT_FUNDING_INTERVAL_HOURS,
        }
    }
}

impl BackpackConfig {
    /// GET endpoint for mark prices + funding rates
    pub fn mark_prices_url(&self) -> String {
        format!("{}/api/v1/markPrices", self.base_url.trim_end_matches('/'))
    }

    /// GET endpoint for per-market open interest
    pub fn open_interest_url(&self) -> String {
        format!("{}/api/v1/openInterest", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = BackpackConfig::default();
        assert_eq!(config.funding_interval_hours, 8);
        assert_eq!(
            config.mark_prices_url(),
            "https://api.backpack.exchange/api/v1/markPrices"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = BackpackConfig {
            base_url: "http://localhost:1234/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.open_interest_url(),
            "http://localhost:1234/api/v1/openInterest"
        );
    }
}
