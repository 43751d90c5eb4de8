//! # TTL Cache
//!
//! A small time-to-live cache for registry responses: a map with an expiry
//! instant per entry, behind an async RwLock.
//!
//! ## Behaviour
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TtlCache Lifecycle                               │
//! │                                                                         │
//! │  insert(k, v) ──► entry stored with expires_at = now + ttl             │
//! │                                                                         │
//! │  get(k) ──► entry absent            ──► None                            │
//! │         ──► entry fresh             ──► Some(v.clone())                 │
//! │         ──► entry past expires_at   ──► removed lazily, None            │
//! │                                                                         │
//! │  purge_expired() ──► sweeps every stale entry (for periodic upkeep)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Uses `tokio::time::Instant` so expiry honours paused time in tests.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Map with per-entry time-to-live.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache whose entries live for `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value for `key` if present and not expired.
    ///
    /// An expired entry is dropped on access rather than waiting for a
    /// sweep, so a hit is always fresh.
    pub async fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.expires_at <= now {
                entries.remove(key);
            } else {
                // Re-inserted while we upgraded the lock
                return Some(entry.value.clone());
            }
        }
        None
    }

    /// Inserts or replaces the value for `key`, restarting its TTL.
    pub async fn insert(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    /// Removes every expired entry; returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Number of entries currently stored, expired ones included until
    /// they are purged or touched.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Checks whether the cache holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
