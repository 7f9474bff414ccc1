//! Freshness-gated cache for WSF responses.
//!
//! WSF publishes a "cache flush date" that advances whenever any terminal
//! data changes. Entries carry no TTL; instead the whole cache is dropped
//! the first time a strictly newer flush date is observed.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, FixedOffset};
use moka::future::Cache as MokaCache;
use serde_json::Value;
use tracing::debug;

/// Decoded response payload, shared between callers.
pub type CachedPayload = Arc<Value>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached endpoints.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 64 }
    }
}

/// Endpoint-name keyed cache, cleared wholesale when the flush date advances.
///
/// Starts with no recorded flush date, so the first observed date always
/// clears (the cache is empty at that point anyway).
pub struct FreshnessCache {
    /// Payloads keyed by endpoint name.
    entries: MokaCache<String, CachedPayload>,

    /// Most recent flush date seen, `None` until the first check.
    last_flush: Mutex<Option<DateTime<FixedOffset>>>,
}

impl FreshnessCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self {
            entries,
            last_flush: Mutex::new(None),
        }
    }

    /// Record an upstream flush date, clearing every entry if it is newer
    /// than the last one seen.
    ///
    /// Returns `true` if the cache was cleared.
    pub fn observe_flush_date(&self, flush_date: DateTime<FixedOffset>) -> bool {
        let mut last = self
            .last_flush
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if last.is_some_and(|last| flush_date <= last) {
            return false;
        }

        debug!(%flush_date, previous = ?*last, "flush date advanced, clearing cache");
        self.entries.invalidate_all();
        *last = Some(flush_date);
        true
    }

    /// The last flush date observed, if any.
    pub fn last_flush_date(&self) -> Option<DateTime<FixedOffset>> {
        *self
            .last_flush
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the cached payload for an endpoint.
    pub async fn get(&self, endpoint: &str) -> Option<CachedPayload> {
        self.entries.get(endpoint).await
    }

    /// Store the payload for an endpoint.
    pub async fn insert(&self, endpoint: impl Into<String>, payload: CachedPayload) {
        self.entries.insert(endpoint.into(), payload).await;
    }

    /// Drop every entry without touching the recorded flush date.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for FreshnessCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
