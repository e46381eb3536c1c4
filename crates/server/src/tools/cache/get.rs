//! cache_get tool implementation.
//!
//! Retrieves the cached response if it is still fresh.

use std::sync::Arc;

use nimbus_core::{CacheEntry, Error, ResponseCache, Storage};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::{blocking, json_result};

/// Output from the cache_get tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheGetOutput {
    /// The cached entry.
    pub entry: CacheEntry,
    /// Seconds since the entry was captured.
    pub age_secs: f64,
}

/// Implementation of the cache_get tool.
pub async fn get_impl<S: Storage + 'static>(cache: Arc<ResponseCache<S>>) -> Result<CallToolResult, McpError> {
    let output = blocking(move || {
        let entry = cache
            .load()?
            .ok_or_else(|| Error::CacheMiss("no fresh cached response".to_string()))?;

        let age_secs = entry.age(cache.now());
        Ok(CacheGetOutput { entry, age_secs })
    })
    .await?;

    json_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::output;
    use chrono::{DateTime, Duration};
    use nimbus_core::{CacheConfig, ManualClock, MemoryStore};
    use serde_json::json;

    fn make_cache() -> (Arc<ResponseCache<MemoryStore>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap()));
        let cache = ResponseCache::new(MemoryStore::new(), CacheConfig::default()).with_clock(clock.clone());
        (Arc::new(cache), clock)
    }

    #[tokio::test]
    async fn test_get_impl_missing() {
        let (cache, _) = make_cache();
        let result = get_impl(cache).await;
        assert_eq!(result.unwrap_err().code.0, -32001);
    }

    #[tokio::test]
    async fn test_get_impl_found() {
        let (cache, clock) = make_cache();
        cache.save(json!({ "name": "Paris" })).unwrap();
        clock.advance(Duration::seconds(90));

        let out: CacheGetOutput = output(&get_impl(cache).await.unwrap());
        assert_eq!(out.entry.data, json!({ "name": "Paris" }));
        assert_eq!(out.age_secs, 90.0);
    }

    #[tokio::test]
    async fn test_get_impl_expired() {
        let (cache, clock) = make_cache();
        cache.save(json!({ "name": "Paris" })).unwrap();
        clock.advance(Duration::minutes(11));

        assert!(get_impl(cache).await.is_err());
    }
}
