//! Response cache operations.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;
use crate::clock::{self, Clock, SystemClock};
use crate::storage::Storage;

/// How long a cached entry stays fresh.
///
/// Where the entry lives is up to the [`Storage`] handed to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub expiry: Duration,
}

impl CacheConfig {
    pub const DEFAULT_EXPIRY_MINUTES: u64 = 10;
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { expiry: Duration::from_secs(Self::DEFAULT_EXPIRY_MINUTES * 60) }
    }
}

/// A cached payload and the moment it was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CacheEntry {
    /// Capture time in seconds since the Unix epoch.
    pub timestamp: f64,
    /// The payload as it was saved.
    pub data: Value,
}

impl CacheEntry {
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        clock::from_epoch_seconds(self.timestamp)
    }

    /// Seconds elapsed between capture and `now`. Negative if the entry
    /// claims to come from the future.
    pub fn age(&self, now: DateTime<Utc>) -> f64 {
        clock::epoch_seconds(now) - self.timestamp
    }
}

/// Holds at most one payload, served back while it is fresh.
pub struct ResponseCache<S> {
    store: S,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl<S: Storage> ResponseCache<S> {
    pub fn new(store: S, config: CacheConfig) -> Self {
        Self { store, config, clock: Arc::new(SystemClock) }
    }

    /// Replace the time source used for capture times and freshness.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Current time according to the cache's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Record `data` with the current time, replacing any prior entry.
    pub fn save(&self, data: Value) -> Result<CacheEntry, Error> {
        let entry = CacheEntry { timestamp: clock::epoch_seconds(self.clock.now()), data };
        let bytes = serde_json::to_vec(&entry)?;
        self.store.write(&bytes)?;
        tracing::debug!(timestamp = entry.timestamp, "Saved cache entry");
        Ok(entry)
    }

    /// Return the stored entry if it exists, parses, and is still fresh.
    pub fn load(&self) -> Result<Option<CacheEntry>, Error> {
        let Some(bytes) = self.store.read()? else {
            return Ok(None);
        };

        let entry: CacheEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed cache document");
                return Ok(None);
            }
        };

        let age = entry.age(self.clock.now());
        if age > self.config.expiry.as_secs_f64() {
            tracing::debug!(
                age_secs = age,
                expiry_secs = self.config.expiry.as_secs(),
                "Cache entry expired"
            );
            return Ok(None);
        }

        Ok(Some(entry))
    }

    /// Whether anything has been stored, fresh or not.
    pub fn is_available(&self) -> bool {
        match self.store.read() {
            Ok(contents) => contents.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Cache storage unreadable");
                false
            }
        }
    }
}
