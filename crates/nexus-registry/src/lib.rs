//! # nexus-registry: GS1 Registry Lookup Client
//!
//! Resolves validated GTINs to descriptive product data from the external
//! GS1 registry, with the resilience a flaky third-party boundary needs.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     nexus-registry (THIS CRATE)                         │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐      │
//! │  │ RegistryClient│ │  TtlCache    │  │  retry_with_backoff      │      │
//! │  │ (client.rs)  │  │  (cache.rs)  │  │  (retry.rs)              │      │
//! │  │              │  │              │  │                          │      │
//! │  │ validate ──► │◄─│ 60 min TTL   │  │ 3 attempts, ≥1s delay,   │      │
//! │  │ cache ──►    │  │ per GTIN     │  │ ×2 backoff, capped       │      │
//! │  │ GET /products│  └──────────────┘  └──────────────────────────┘      │
//! │  └──────┬───────┘  ┌──────────────┐                                    │
//! │         │          │LookupMetrics │                                    │
//! │         │          │ (metrics.rs) │                                    │
//! │         ▼          └──────────────┘                                    │
//! │   GS1 registry (HTTPS, Bearer auth, X-GS1-Version: 3.4)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Check-digit math lives in `nexus_core::gs1`; this crate owns everything
//! that touches the network.
//!
//! ## Example
//! ```rust,no_run
//! use nexus_registry::{RegistryClient, RegistryConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RegistryClient::new(RegistryConfig {
//!     base_url: "https://registry.example.com/v1".to_string(),
//!     api_key: "secret".to_string(),
//!     ..RegistryConfig::default()
//! })?;
//!
//! let product = client.lookup_gtin("00012345678905").await?;
//! println!("{:?}", product.name);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod retry;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::{ProductInfo, RegistryClient};
pub use config::{RegistryConfig, RetryConfig};
pub use error::{LookupError, RegistryError, RegistryResult};
pub use metrics::MetricsSnapshot;
