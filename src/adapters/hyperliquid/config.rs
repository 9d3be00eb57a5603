//! Hyperliquid Configuration
//!
//! Configuration for the Hyperliquid `/info` REST endpoint.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Mainnet REST base URL
pub const MAINNET_REST_URL: &str = "https://api.hyperliquid.xyz";

/// Hyperliquid settles perp funding every hour
pub const DEFAULT_FUNDING_INTERVAL_HOURS: u32 = 1;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for Hyperliquid exchange connection (public market data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperliquidConfig {
    pub base_url: String,
    pub funding_interval_hours: u32,
    /// Default account for `/api/hlpositions` when no `?user=` is given
    pub positions_user: Option<String>,
}

impl Default for HyperliquidConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_REST_URL.to_string(),
            funding_interval_hours: DEFAULT_FUNDING_INTERVAL_HOURS,
            positions_user: None,
        }
    }
}

impl HyperliquidConfig {
    /// POST endpoint shared by every `/info` request type
    pub fn info_url(&self) -> String {
        format!("{}/info", self.base_url.trim_end_matches('/'))
    }
}

/// `0x` followed by 40 hex digits
pub fn is_valid_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].chars().all(|c| c.is_ascii_hexdigit())
}
