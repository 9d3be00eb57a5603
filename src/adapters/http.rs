//! Shared HTTP transport for all REST adapters.
//!
//! - One `reqwest::Client` reused across feeds
//! - Per-request timeout
//! - Bounded retry with exponential backoff on transport errors only
//! - Per-attempt latency/status recorded in `UpstreamMetrics`

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::types::Feed;
use crate::config::UpstreamConfig;
use crate::core::metrics::UpstreamMetrics;

/// Timeout / retry knobs for upstream requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self::from(&UpstreamConfig::default())
    }
}

impl From<&UpstreamConfig> for HttpSettings {
    fn from(cfg: &UpstreamConfig) -> Self {
        Self {
            timeout: Duration::from_millis(cfg.timeout_ms),
            max_retries: cfg.max_retries,
            retry_backoff: Duration::from_millis(cfg.retry_backoff_ms),
        }
    }
}

impl HttpSettings {
    /// Backoff before retry number `attempt + 1` (attempt is 0-based)
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(1u32 << attempt.min(16))
    }
}

/// Cloneable handle shared by the venue clients
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    settings: HttpSettings,
    metrics: Arc<UpstreamMetrics>,
}

impl HttpTransport {
    pub fn new(settings: HttpSettings, metrics: Arc<UpstreamMetrics>) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
            metrics,
        }
    }

    pub fn settings(&self) -> &HttpSettings {
        &self.settings
    }

    pub async fn get_json<T: DeserializeOwned>(&self, feed: Feed, url: &str) -> ExchangeResult<T> {
        self.send_json(feed, |client| client.get(url)).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        feed: Feed,
        url: &str,
        body: &serde_json::Value,
    ) -> ExchangeResult<T> {
        self.send_json(feed, |client| client.post(url).json(body)).await
    }

    /// Run one request with retry, decoding the body as `T`.
    async fn send_json<T, F>(&self, feed: Feed, build: F) -> ExchangeResult<T>
    where
        T: DeserializeOwned,
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            match self.attempt(feed, &build).await {
                Ok(body) => {
                    return serde_json::from_str::<T>(&body).map_err(|e| {
                        tracing::warn!(feed = %feed, error = %e, "Upstream payload failed schema check");
                        ExchangeError::InvalidResponse(format!("{}: {}", feed.name(), e))
                    });
                }
                Err(e) if e.is_retryable() && attempt < self.settings.max_retries => {
                    let delay = self.settings.backoff_for(attempt);
                    tracing::warn!(
                        feed = %feed,
                        attempt = attempt + 1,
                        error = %e,
                        retry_in_ms = delay.as_millis() as u64,
                        "Upstream request failed, retrying"
                    );
                    self.metrics.record_retry(feed);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// A single attempt; returns the raw body of a 2xx response.
    async fn attempt<F>(&self, feed: Feed, build: &F) -> ExchangeResult<String>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let started = Instant::now();
        let timeout_ms = self.settings.timeout.as_millis() as u64;

        let result: ExchangeResult<(u16, String)> = async {
            let response = build(&self.client)
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .timeout(self.settings.timeout)
                .send()
                .await
                .map_err(|e| map_transport_error(e, timeout_ms))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| map_transport_error(e, timeout_ms))?;

            if !status.is_success() {
                return Err(ExchangeError::http_status(status.as_u16(), &body));
            }
            Ok((status.as_u16(), body))
        }
        .await;

        let latency = started.elapsed();
        match result {
            Ok((status, body)) => {
                self.metrics.record_attempt(feed, latency, Some(status), true);
                tracing::debug!(
                    feed = %feed,
                    status = status,
                    latency_ms = latency.as_millis() as u64,
                    bytes = body.len(),
                    "Upstream request completed"
                );
                Ok(body)
            }
            Err(e) => {
                self.metrics
                    .record_attempt(feed, latency, e.status_code(), false);
                tracing::debug!(
                    feed = %feed,
                    latency_ms = latency.as_millis() as u64,
                    error = %e,
                    "Upstream request failed"
                );
                Err(e)
            }
        }
    }
}

fn map_transport_error(e: reqwest::Error, timeout_ms: u64) -> ExchangeError {
    if e.is_timeout() {
        ExchangeError::NetworkTimeout(timeout_ms)
    } else {
        ExchangeError::ConnectionFailed(e.to_string())
    }
}
