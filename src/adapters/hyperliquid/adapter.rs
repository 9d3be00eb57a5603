//! Hyperliquid Adapter Implementation
//!
//! REST adapter for the Hyperliquid `/info` endpoint. Every query is a
//! single POST whose body carries a `type` discriminator.

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::http::HttpTransport;
use crate::adapters::traits::SecondaryVenue;
use crate::adapters::types::{Feed, ReferenceData};
use crate::core::types::Venue;

use super::config::HyperliquidConfig;
use super::types::{HyperliquidClearinghouseState, HyperliquidMetaAndAssetCtxs};

/// Hyperliquid adapter implementing `SecondaryVenue`
#[derive(Debug, Clone)]
pub struct HyperliquidAdapter {
    config: HyperliquidConfig,
    http: HttpTransport,
}

impl HyperliquidAdapter {
    pub fn new(config: HyperliquidConfig, http: HttpTransport) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &HyperliquidConfig {
        &self.config
    }

    /// Open perp positions and margin summary for one account
    pub async fn fetch_clearinghouse_state(
        &self,
        user: &str,
    ) -> ExchangeResult<HyperliquidClearinghouseState> {
        let body = serde_json::json!({
            "type": "clearinghouseState",
            "user": user,
        });
        self.http
            .post_json(Feed::HyperliquidClearinghouseState, &self.config.info_url(), &body)
            .await
    }
}

#[async_trait]
impl SecondaryVenue for HyperliquidAdapter {
    fn venue(&self) -> Venue {
        Venue::Hyperliquid
    }

    fn funding_interval_hours(&self) -> u32 {
        self.config.funding_interval_hours
    }

    async fn fetch_reference_metadata(&self) -> ExchangeResult<ReferenceData> {
        let body = serde_json::json!({ "type": "metaAndAssetCtxs" });
        let raw: HyperliquidMetaAndAssetCtxs = self
            .http
            .post_json(Feed::HyperliquidMetaAndAssetCtxs, &self.config.info_url(), &body)
            .await?;
        Ok(raw.into())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::Matcher;

    use super::*;
    use crate::adapters::errors::ExchangeError;
    use crate::adapters::http::HttpSettings;
    use crate::core::metrics::UpstreamMetrics;

    fn adapter_for(url: String) -> HyperliquidAdapter {
        let http = HttpTransport::new(HttpSettings::default(), Arc::new(UpstreamMetrics::new()));
        HyperliquidAdapter::new(
            HyperliquidConfig {
                base_url: url,
                ..Default::default()
            },
            http,
        )
    }

    #[tokio::test]
    async fn test_fetch_reference_metadata_sends_type_discriminator() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/info")
            .match_body(Matcher::Json(serde_json::json!({"type": "metaAndAssetCtxs"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"universe":[{"name":"BTC","szDecimals":5}]},[{"funding":"0.00001","markPx":"60000","openInterest":"10"}]]"#)
            .create_async()
            .await;

        let adapter = adapter_for(server.url());
        let data = adapter.fetch_reference_metadata().await.unwrap();
        assert_eq!(data.metadata.unwrap()[0].name, "BTC");
        assert_eq!(data.metrics.unwrap()[0].funding.as_deref(), Some("0.00001"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_reference_metadata_schema_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/info")
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let adapter = adapter_for(server.url());
        let err = adapter.fetch_reference_metadata().await.unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_clearinghouse_state_sends_user() {
        let user = "0x1e572678738674481dE656233E8456BBc4b3b0aB";
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/info")
            .match_body(Matcher::Json(serde_json::json!({
                "type": "clearinghouseState",
                "user": user,
            })))
            .with_status(200)
            .with_body(r#"{"assetPositions": []}"#)
            .create_async()
            .await;

        let adapter = adapter_for(server.url());
        let state = adapter.fetch_clearinghouse_state(user).await.unwrap();
        assert_eq!(state.asset_positions.map(|p| p.len()), Some(0));
        mock.assert_async().await;
    }

    #[test]
    fn test_adapter_venue() {
        let adapter = adapter_for("http://localhost".into());
        assert_eq!(adapter.venue(), Venue::Hyperliquid);
        assert_eq!(adapter.funding_interval_hours(), 1);
    }
}
