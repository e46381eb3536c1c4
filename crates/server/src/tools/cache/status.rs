//! cache_status tool implementation.

use std::sync::Arc;

use nimbus_core::{ResponseCache, Storage};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::{blocking, json_result};

/// Output from the cache_status tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatusOutput {
    /// Whether a response has ever been cached, fresh or not.
    pub available: bool,
}

/// Implementation of the cache_status tool.
pub async fn status_impl<S: Storage + 'static>(cache: Arc<ResponseCache<S>>) -> Result<CallToolResult, McpError> {
    let available = blocking(move || Ok(cache.is_available())).await?;
    json_result(&CacheStatusOutput { available })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::output;
    use nimbus_core::{CacheConfig, MemoryStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_status_impl() {
        let cache = Arc::new(ResponseCache::new(MemoryStore::new(), CacheConfig::default()));
        let out: CacheStatusOutput = output(&status_impl(cache.clone()).await.unwrap());
        assert!(!out.available);

        cache.save(json!({ "name": "Oslo" })).unwrap();
        let out: CacheStatusOutput = output(&status_impl(cache).await.unwrap());
        assert!(out.available);
    }
}
