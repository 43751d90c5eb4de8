//! # Registry Client Configuration
//!
//! Explicit configuration structs with documented defaults, wired in through
//! the client constructor rather than ambient globals.

use std::time::Duration;

// =============================================================================
// Retry Configuration
// =============================================================================

/// Retry strategy for transient lookup failures.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts in total (first try included).
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

// =============================================================================
// Registry Configuration
// =============================================================================

/// Configuration for the GS1 registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry base URL; lookups go to `<base_url>/products/<gtin>`.
    pub base_url: String,
    /// API key sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
    /// How long a successful lookup stays cached.
    pub cache_ttl: Duration,
    /// Per-request HTTP timeout; retries each get their own budget.
    pub request_timeout: Duration,
    /// Retry strategy for transient failures.
    pub retry: RetryConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: String::new(),
            cache_ttl: Duration::from_secs(60 * 60),
            request_timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
