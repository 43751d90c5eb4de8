//! # Registry Error Types
//!
//! Error types for GS1 registry lookups.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Registry Error Categories                           │
//! │                                                                         │
//! │  RegistryError                                                          │
//! │  ├── InvalidIdentifier  - checksum/format failure, surfaced             │
//! │  │                        immediately, never retried                    │
//! │  ├── LookupFailed       - retries exhausted, wraps the last             │
//! │  │                        LookupError                                   │
//! │  └── InvalidConfig      - client could not be constructed               │
//! │                                                                         │
//! │  LookupError (one attempt)                                              │
//! │  ├── Transport          - connection/timeout level failure              │
//! │  ├── Status             - registry answered with a non-2xx code         │
//! │  └── Malformed          - 2xx but the JSON body did not parse           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `LookupError` is treated as transient: callers seeing
//! `LookupFailed` may retry at their own layer once the client's budget is
//! spent. Only `InvalidIdentifier` is permanent.

use thiserror::Error;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by the registry client.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The supplied code failed GS1 format or check-digit validation.
    ///
    /// Raised before any network activity; there is nothing to retry.
    #[error("Invalid GS1 identifier: {0}")]
    InvalidIdentifier(String),

    /// The registry could not be reached or kept answering non-2xx after
    /// exhausting the retry budget. Wraps the last attempt's error.
    #[error("Lookup for GTIN {gtin} failed after {attempts} attempts: {source}")]
    LookupFailed {
        gtin: String,
        attempts: u32,
        #[source]
        source: LookupError,
    },

    /// The client configuration was unusable (bad URL, HTTP client build
    /// failure).
    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),
}

/// Failure of a single lookup attempt.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection, DNS, TLS, or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered, but not with success.
    #[error("registry returned HTTP {status}")]
    Status { status: u16 },

    /// A 2xx response whose body was not the expected JSON shape.
    #[error("malformed registry response: {0}")]
    Malformed(reqwest::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegistryError::InvalidIdentifier("123".to_string());
        assert_eq!(err.to_string(), "Invalid GS1 identifier: 123");

        let err = RegistryError::LookupFailed {
            gtin: "00012345678905".to_string(),
            attempts: 3,
            source: LookupError::Status { status: 503 },
        };
        assert_eq!(
            err.to_string(),
            "Lookup for GTIN 00012345678905 failed after 3 attempts: registry returned HTTP 503"
        );
    }

    #[test]
    fn test_lookup_failed_exposes_source() {
        use std::error::Error as _;

        let err = RegistryError::LookupFailed {
            gtin: "00012345678905".to_string(),
            attempts: 3,
            source: LookupError::Status { status: 500 },
        };
        assert!(err.source().is_some());
    }
}
