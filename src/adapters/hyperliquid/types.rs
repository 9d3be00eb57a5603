//! Hyperliquid Types
//!
//! API response types for `POST /info`.
//!
//! Docs: https://hyperliquid.gitbook.io/hyperliquid-docs/for-developers/api/info-endpoint/perpetuals
//!
//! metaAndAssetCtxs format:
//!   [ { universe: [ { name, szDecimals, isDelisted? }, ... ] },
//!     [ { funding, markPx, openInterest, ... }, ... ] ]
//!   The two arrays are aligned by index.

use serde::Deserialize;

use crate::adapters::types::{AssetMeta, AssetMetrics, ReferenceData};

// =============================================================================
// metaAndAssetCtxs
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperliquidUniverseAsset {
    pub name: String,
    #[serde(default)]
    pub is_delisted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HyperliquidMeta {
    #[serde(default)]
    pub universe: Option<Vec<HyperliquidUniverseAsset>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperliquidAssetCtx {
    /// Hourly funding as a fraction
    #[serde(default)]
    pub funding: Option<String>,
    #[serde(default)]
    pub mark_px: Option<String>,
    #[serde(default)]
    pub open_interest: Option<String>,
}

/// Raw `[meta, assetCtxs]` tuple. Missing or null halves decode as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct HyperliquidMetaAndAssetCtxs(
    #[serde(default)] pub Option<HyperliquidMeta>,
    #[serde(default)] pub Option<Vec<HyperliquidAssetCtx>>,
);

impl From<HyperliquidMetaAndAssetCtxs> for ReferenceData {
    fn from(raw: HyperliquidMetaAndAssetCtxs) -> Self {
        let HyperliquidMetaAndAssetCtxs(meta, ctxs) = raw;
        ReferenceData {
            metadata: meta.and_then(|m| m.universe).map(|universe| {
                universe
                    .into_iter()
                    .map(|a| AssetMeta {
                        name: a.name,
                        is_delisted: a.is_delisted,
                    })
                    .collect()
            }),
            metrics: ctxs.map(|ctxs| {
                ctxs.into_iter()
                    .map(|c| AssetMetrics {
                        funding: c.funding,
                        mark_price: c.mark_px,
                        open_interest: c.open_interest,
                    })
                    .collect()
            }),
        }
    }
}

// =============================================================================
// clearinghouseState
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperliquidCumFunding {
    #[serde(default)]
    pub all_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperliquidPosition {
    pub coin: String,
    /// Signed size
    pub szi: String,
    #[serde(default)]
    pub entry_px: Option<String>,
    #[serde(default)]
    pub liquidation_px: Option<String>,
    #[serde(default)]
    pub unrealized_pnl: Option<String>,
    #[serde(default)]
    pub position_value: Option<String>,
    #[serde(default)]
    pub cum_funding: Option<HyperliquidCumFunding>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HyperliquidAssetPosition {
    #[serde(default)]
    pub position: Option<HyperliquidPosition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperliquidClearinghouseState {
    #[serde(default)]
    pub asset_positions: Option<Vec<HyperliquidAssetPosition>>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_and_asset_ctxs_parsing() {
        let json = r#"[
            {"universe": [
                {"name": "BTC", "szDecimals": 5, "maxLeverage": 40},
                {"name": "OLD", "szDecimals": 0, "maxLeverage": 3, "isDelisted": true}
            ]},
            [
                {"funding": "0.00001", "markPx": "60010.0", "openInterest": "1200.5", "oraclePx": "60000.0", "midPx": null},
                {"funding": "0.0", "markPx": "0.1", "openInterest": "0.0"}
            ]
        ]"#;

        let raw: HyperliquidMetaAndAssetCtxs = serde_json::from_str(json).unwrap();
        let data: ReferenceData = raw.into();
        let meta = data.metadata.unwrap();
        assert_eq!(meta.len(), 2);
        assert_eq!(meta[0].name, "BTC");
        assert!(!meta[0].is_delisted);
        assert!(meta[1].is_delisted);

        let metrics = data.metrics.unwrap();
        assert_eq!(metrics[0].funding.as_deref(), Some("0.00001"));
        assert_eq!(metrics[0].mark_price.as_deref(), Some("60010.0"));
    }

    #[test]
    fn test_missing_metrics_half_decodes_as_none() {
        let raw: HyperliquidMetaAndAssetCtxs =
            serde_json::from_str(r#"[{"universe": []}]"#).unwrap();
        let data: ReferenceData = raw.into();
        assert_eq!(data.metadata, Some(vec![]));
        assert!(data.metrics.is_none());
    }

    #[test]
    fn test_null_meta_decodes_as_none() {
        let raw: HyperliquidMetaAndAssetCtxs =
            serde_json::from_str(r#"[null, [{"funding": "0.0001"}]]"#).unwrap();
        let data: ReferenceData = raw.into();
        assert!(data.metadata.is_none());
        assert_eq!(data.metrics.map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_ctx_without_funding_decodes_as_none() {
        let raw: HyperliquidMetaAndAssetCtxs = serde_json::from_str(
            r#"[{"universe": [{"name": "BTC"}]}, [{"markPx": "60000.0"}]]"#,
        )
        .unwrap();
        let data: ReferenceData = raw.into();
        let metrics = data.metrics.unwrap();
        assert!(metrics[0].funding.is_none());
        assert_eq!(metrics[0].mark_price.as_deref(), Some("60000.0"));
    }

    #[test]
    fn test_object_instead_of_tuple_is_schema_error() {
        let result = serde_json::from_str::<HyperliquidMetaAndAssetCtxs>(r#"{"error": "bad"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_clearinghouse_state_parsing() {
        let json = r#"{
            "assetPositions": [
                {"type": "oneWay", "position": {
                    "coin": "ETH", "szi": "-2.0", "entryPx": "3000.0",
                    "liquidationPx": null, "unrealizedPnl": "-12.5",
                    "positionValue": "6012.5", "cumFunding": {"allTime": "1.25", "sinceOpen": "0.5"}
                }},
                {"type": "oneWay"}
            ],
            "withdrawable": "100.0"
        }"#;

        let state: HyperliquidClearinghouseState = serde_json::from_str(json).unwrap();
        let positions = state.asset_positions.unwrap();
        assert_eq!(positions.len(), 2);
        let eth = positions[0].position.as_ref().unwrap();
        assert_eq!(eth.coin, "ETH");
        assert!(eth.liquidation_px.is_none());
        assert!(positions[1].position.is_none());
    }
}
