//! # Lookup Metrics
//!
//! Process-local counters for registry activity. Counters, not a metrics
//! backend: exporters (Prometheus, logs, dashboards) read a snapshot and
//! publish it however the host service likes.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Atomic counters tracking registry client activity.
///
/// Relaxed ordering is sufficient: counters are independent and only ever
/// incremented.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    lookups: AtomicU64,
    cache_hits: AtomicU64,
    successes: AtomicU64,
    errors: AtomicU64,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lookup was requested (before validation or cache consult).
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// A lookup was answered from the cache.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// A lookup was answered by the registry.
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// A lookup failed (invalid identifier or exhausted retries).
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Counter values at a moment in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub lookups: u64,
    pub cache_hits: u64,
    pub successes: u64,
    pub errors: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = LookupMetrics::new();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_cache_hit();
        metrics.record_success();
        metrics.record_error();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.lookups, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.successes, 1);
        assert_eq!(snapshot.errors, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_lookup();

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["lookups"], 1);
        assert_eq!(json["cacheHits"], 0);
    }
}
