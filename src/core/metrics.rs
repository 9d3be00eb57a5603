//! Per-feed upstream metrics.
//!
//! Lock-free counters (AtomicU64) keyed by `Feed`. The map is built once
//! at startup and never resized, so recording needs no lock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::adapters::types::Feed;
use crate::core::types::Venue;

#[derive(Debug, Default)]
struct FeedCounters {
    requests: AtomicU64,
    failures: AtomicU64,
    retries: AtomicU64,
    last_latency_ms: AtomicU64,
    /// 0 = no HTTP status seen (transport error or no request yet)
    last_status: AtomicU64,
}

/// Point-in-time view of one feed's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub venue: Venue,
    pub feed: &'static str,
    pub requests: u64,
    pub failures: u64,
    pub retries: u64,
    pub last_latency_ms: u64,
    pub last_status: Option<u16>,
}

/// Shared counters for every upstream feed.
#[derive(Debug)]
pub struct UpstreamMetrics {
    feeds: HashMap<Feed, FeedCounters>,
}

impl Default for UpstreamMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl UpstreamMetrics {
    pub fn new() -> Self {
        Self {
            feeds: Feed::ALL
                .iter()
                .map(|feed| (*feed, FeedCounters::default()))
                .collect(),
        }
    }

    /// Record one completed attempt against `feed`.
    pub fn record_attempt(&self, feed: Feed, latency: Duration, status: Option<u16>, ok: bool) {
        if let Some(c) = self.feeds.get(&feed) {
            c.requests.fetch_add(1, Ordering::Relaxed);
            if !ok {
                c.failures.fetch_add(1, Ordering::Relaxed);
            }
            c.last_latency_ms
                .store(latency.as_millis() as u64, Ordering::Relaxed);
            c.last_status
                .store(status.map(u64::from).unwrap_or(0), Ordering::Relaxed);
        }
    }

    pub fn record_retry(&self, feed: Feed) {
        if let Some(c) = self.feeds.get(&feed) {
            c.retries.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Snapshot of all feeds, in `Feed::ALL` order
    pub fn snapshot(&self) -> Vec<FeedSnapshot> {
        Feed::ALL
            .iter()
            .filter_map(|feed| {
                self.feeds.get(feed).map(|c| {
                    let status = c.last_status.load(Ordering::Relaxed);
                    FeedSnapshot {
                        venue: feed.venue(),
                        feed: feed.name(),
                        requests: c.requests.load(Ordering::Relaxed),
                        failures: c.failures.load(Ordering::Relaxed),
                        retries: c.retries.load(Ordering::Relaxed),
                        last_latency_ms: c.last_latency_ms.load(Ordering::Relaxed),
                        last_status: u16::try_from(status).ok().filter(|s| *s != 0),
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zeroed() {
        let metrics = UpstreamMetrics::new();
        let snap = metrics.snapshot();
        assert_eq!(snap.len(), Feed::ALL.len());
        assert!(snap.iter().all(|s| s.requests == 0 && s.last_status.is_none()));
    }

    #[test]
    fn test_record_attempt_and_retry() {
        let metrics = UpstreamMetrics::new();
        metrics.record_attempt(Feed::BackpackMarkPrices, Duration::from_millis(42), Some(200), true);
        metrics.record_attempt(Feed::BackpackMarkPrices, Duration::from_millis(7), None, false);
        metrics.record_retry(Feed::BackpackMarkPrices);

        let snap = metrics.snapshot();
        let mark = snap.iter().find(|s| s.feed == "markPrices").unwrap();
        assert_eq!(mark.requests, 2);
        assert_eq!(mark.failures, 1);
        assert_eq!(mark.retries, 1);
        assert_eq!(mark.last_latency_ms, 7);
        assert_eq!(mark.last_status, None);

        let oi = snap.iter().find(|s| s.feed == "openInterest").unwrap();
        assert_eq!(oi.requests, 0);
    }
}
