//! Open positions of one Hyperliquid account, shaped for the dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::adapters::hyperliquid::types::{HyperliquidClearinghouseState, HyperliquidPosition};
use crate::core::rate::parse_decimal;
use crate::core::types::to_plain;

/// Decimal places kept on the derived mark price
const MARK_PRICE_DP: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    /// Signed size, negative when short
    pub net_quantity: String,
    pub entry_price: String,
    pub est_liquidation_price: String,
    pub pnl_unrealized: String,
    /// Not reported by the venue
    pub pnl_realized: String,
    pub cumulative_funding_payment: String,
    pub mark_price: String,
    pub net_exposure_notional: String,
    pub net_cost: String,
}

/// Map a clearinghouse snapshot to positions.
///
/// Entries without a position object are skipped. Missing numeric
/// fields become `"0"`.
pub fn to_positions(state: HyperliquidClearinghouseState) -> Vec<Position> {
    state
        .asset_positions
        .unwrap_or_default()
        .into_iter()
        .filter_map(|asset| asset.position)
        .map(to_position)
        .collect()
}

fn to_position(pos: HyperliquidPosition) -> Position {
    let size = number(Some(&pos.szi));
    let entry = number(pos.entry_px.as_deref());
    let value = number(pos.position_value.as_deref());

    // positionValue is unsigned, so divide by |size| to keep the mark positive
    let mark = if size.is_zero() {
        Decimal::ZERO
    } else {
        value
            .checked_div(size.abs())
            .map(|m| m.round_dp(MARK_PRICE_DP))
            .unwrap_or(Decimal::ZERO)
    };
    let cost = entry.checked_mul(size).unwrap_or(Decimal::ZERO);

    Position {
        symbol: pos.coin,
        net_quantity: plain(Some(&pos.szi)),
        entry_price: plain(pos.entry_px.as_deref()),
        est_liquidation_price: plain(pos.liquidation_px.as_deref()),
        pnl_unrealized: plain(pos.unrealized_pnl.as_deref()),
        pnl_realized: "0".to_string(),
        cumulative_funding_payment: plain(
            pos.cum_funding.as_ref().and_then(|c| c.all_time.as_deref()),
        ),
        mark_price: to_plain(mark),
        net_exposure_notional: plain(pos.position_value.as_deref()),
        net_cost: to_plain(cost),
    }
}

fn number(raw: Option<&str>) -> Decimal {
    raw.and_then(|r| parse_decimal(r).ok()).unwrap_or(Decimal::ZERO)
}

fn plain(raw: Option<&str>) -> String {
    to_plain(number(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(json: &str) -> HyperliquidClearinghouseState {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_long_and_short_positions() {
        let positions = to_positions(state(
            r#"{
                "assetPositions": [
                    {"type": "oneWay", "position": {
                        "coin": "BTC", "szi": "0.5", "entryPx": "60000.0",
                        "liquidationPx": "45000.5", "unrealizedPnl": "250.0",
                        "positionValue": "30125.0",
                        "cumFunding": {"allTime": "-12.5", "sinceOpen": "-1.0"}
                    }},
                    {"type": "oneWay", "position": {
                        "coin": "ETH", "szi": "-2", "entryPx": "3000",
                        "liquidationPx": null, "unrealizedPnl": "-20",
                        "positionValue": "6020"
                    }}
                ],
                "marginSummary": {"accountValue": "100000"}
            }"#,
        ));
        assert_eq!(positions.len(), 2);

        let btc = &positions[0];
        assert_eq!(btc.symbol, "BTC");
        assert_eq!(btc.net_quantity, "0.5");
        assert_eq!(btc.entry_price, "60000");
        assert_eq!(btc.est_liquidation_price, "45000.5");
        assert_eq!(btc.cumulative_funding_payment, "-12.5");
        assert_eq!(btc.mark_price, "60250");
        assert_eq!(btc.net_cost, "30000");
        assert_eq!(btc.pnl_realized, "0");

        let eth = &positions[1];
        assert_eq!(eth.net_quantity, "-2");
        assert_eq!(eth.mark_price, "3010");
        assert_eq!(eth.net_cost, "-6000");
        assert_eq!(eth.est_liquidation_price, "0");
        assert_eq!(eth.cumulative_funding_payment, "0");
    }

    #[test]
    fn test_zero_size_has_zero_mark() {
        let positions = to_positions(state(
            r#"{"assetPositions": [{"position": {"coin": "SOL", "szi": "0", "positionValue": "0"}}]}"#,
        ));
        assert_eq!(positions[0].mark_price, "0");
        assert_eq!(positions[0].net_cost, "0");
    }

    #[test]
    fn test_entries_without_position_are_skipped() {
        let positions = to_positions(state(
            r#"{"assetPositions": [{"type": "oneWay"}, {"position": {"coin": "DOGE", "szi": "100"}}]}"#,
        ));
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].symbol, "DOGE");
    }

    #[test]
    fn test_missing_asset_positions_is_empty() {
        assert!(to_positions(state("{}")).is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let positions = to_positions(state(
            r#"{"assetPositions": [{"position": {"coin": "BTC", "szi": "1"}}]}"#,
        ));
        let json = serde_json::to_value(&positions[0]).unwrap();
        assert_eq!(json["netQuantity"], "1");
        assert_eq!(json["cumulativeFundingPayment"], "0");
        assert_eq!(json["netExposureNotional"], "0");
    }
}
