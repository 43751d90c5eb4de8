//! # GS1 Registry Client
//!
//! Authenticated GTIN lookups against the external GS1 registry, with
//! validation, caching, bounded retry, and metrics.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       lookup_gtin(gtin)                                 │
//! │                                                                         │
//! │  validate_gtin ──fail──► InvalidIdentifier (no network, no retry)      │
//! │       │ ok                                                              │
//! │       ▼                                                                 │
//! │  TTL cache ──hit──► ProductInfo (short-circuit)                        │
//! │       │ miss                                                            │
//! │       ▼                                                                 │
//! │  GET <base>/products/<gtin>                                            │
//! │    Authorization: Bearer <key> │ X-GS1-Version: 3.4 │ Accept: json     │
//! │       │                                                                 │
//! │       ├─ 2xx ──► parse JSON ──► cache ──► ProductInfo                  │
//! │       └─ error/non-2xx ──► retry (3 attempts, backoff ≥ 1s)            │
//! │                              └─ exhausted ──► LookupFailed             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent lookups for different GTINs proceed independently. Lookups
//! for the *same* GTIN are not deduplicated: each caller walks its own
//! cached-or-network path, so two simultaneous misses may both hit the
//! registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use nexus_core::gs1;

use crate::cache::TtlCache;
use crate::config::RegistryConfig;
use crate::error::{LookupError, RegistryError, RegistryResult};
use crate::metrics::{LookupMetrics, MetricsSnapshot};
use crate::retry::retry_with_backoff;

/// GS1 API version header value sent on every request.
const GS1_API_VERSION: &str = "3.4";

// =============================================================================
// Product Info
// =============================================================================

/// Descriptive product data returned by the registry.
///
/// Deliberately tolerant: registries fill attributes unevenly, so only the
/// GTIN itself is non-optional (and even that is defaulted when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[serde(default)]
    pub gtin: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub net_content: Option<String>,
    pub category: Option<String>,
}

// =============================================================================
// Registry Client
// =============================================================================

/// Async client for the GS1 product registry.
///
/// Cheap to share: wrap in `Arc` and clone the `Arc`; the HTTP connection
/// pool, cache, and metrics are all internal.
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
    cache: TtlCache<String, ProductInfo>,
    metrics: Arc<LookupMetrics>,
}

impl RegistryClient {
    /// Creates a client from the given configuration.
    ///
    /// ## Errors
    /// `InvalidConfig` when the base URL is empty or the HTTP client cannot
    /// be constructed.
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(RegistryError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;

        let cache = TtlCache::new(config.cache_ttl);

        Ok(RegistryClient {
            config,
            http,
            cache,
            metrics: Arc::new(LookupMetrics::new()),
        })
    }

    /// Current counter values.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Resolves a GTIN to product data.
    ///
    /// ## Errors
    /// - `InvalidIdentifier` for a GTIN failing format/checksum validation;
    ///   surfaced immediately with no network activity
    /// - `LookupFailed` once the retry budget is exhausted
    pub async fn lookup_gtin(&self, gtin: &str) -> RegistryResult<ProductInfo> {
        self.metrics.record_lookup();

        if !gs1::validate_gtin(gtin) {
            self.metrics.record_error();
            return Err(RegistryError::InvalidIdentifier(gtin.to_string()));
        }

        // Key was valid at insertion time, so a hit needs no re-validation
        if let Some(product) = self.cache.get(&gtin.to_string()).await {
            debug!(gtin, "registry cache hit");
            self.metrics.record_cache_hit();
            return Ok(product);
        }

        let result =
            retry_with_backoff(&self.config.retry, |attempt| self.fetch(gtin, attempt)).await;

        match result {
            Ok(product) => {
                self.cache.insert(gtin.to_string(), product.clone()).await;
                self.metrics.record_success();
                Ok(product)
            }
            Err(failure) => {
                self.metrics.record_error();
                Err(RegistryError::LookupFailed {
                    gtin: gtin.to_string(),
                    attempts: failure.attempts,
                    source: failure.last_error,
                })
            }
        }
    }

    /// One registry request; every failure here is treated as transient.
    async fn fetch(&self, gtin: &str, attempt: u32) -> Result<ProductInfo, LookupError> {
        let url = format!(
            "{}/products/{}",
            self.config.base_url.trim_end_matches('/'),
            gtin
        );
        debug!(gtin, attempt, %url, "querying GS1 registry");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("X-GS1-Version", GS1_API_VERSION)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<ProductInfo>().await.map_err(LookupError::Malformed)
    }

    /// Validates many GTINs concurrently.
    ///
    /// Each code is checked in its own task; a failing unit (including a
    /// panicked task) is recorded as `false` for that key without touching
    /// the others. The operation itself never fails, and the result key set
    /// equals the input set.
    pub async fn validate_gtin_bulk(&self, gtins: &[String]) -> HashMap<String, bool> {
        let handles: Vec<_> = gtins
            .iter()
            .map(|gtin| {
                let code = gtin.clone();
                (
                    gtin.clone(),
                    tokio::spawn(async move { gs1::validate_gtin(&code) }),
                )
            })
            .collect();

        let mut results = HashMap::with_capacity(handles.len());
        for (gtin, handle) in handles {
            let valid = self.join_validation(&gtin, handle).await;
            results.insert(gtin, valid);
        }

        debug!(
            total = results.len(),
            valid = results.values().filter(|v| **v).count(),
            "bulk GTIN validation complete"
        );
        results
    }

    /// Resolves one bulk unit, mapping a failed task to `false` and
    /// counting it in the error metric.
    async fn join_validation(&self, gtin: &str, handle: JoinHandle<bool>) -> bool {
        match handle.await {
            Ok(valid) => valid,
            Err(error) => {
                self.metrics.record_error();
                warn!(gtin = %gtin, %error, "bulk validation task failed; recording as invalid");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
