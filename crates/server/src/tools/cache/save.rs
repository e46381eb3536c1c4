//! cache_save tool implementation.
//!
//! Stores a freshly fetched response, replacing whatever was cached.

use std::sync::Arc;

use nimbus_core::{ResponseCache, Storage};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::{blocking, json_result};

/// Parameters for the cache_save tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheSaveParams {
    /// The response payload to cache. Any JSON value.
    pub data: serde_json::Value,
}

/// Output from the cache_save tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheSaveOutput {
    /// Capture time in seconds since the Unix epoch.
    pub timestamp: f64,
}

/// Implementation of the cache_save tool.
pub async fn save_impl<S: Storage + 'static>(
    cache: Arc<ResponseCache<S>>, params: CacheSaveParams,
) -> Result<CallToolResult, McpError> {
    let entry = blocking(move || Ok(cache.save(params.data)?)).await?;
    tracing::info!(timestamp = entry.timestamp, "Cached response");

    json_result(&CacheSaveOutput { timestamp: entry.timestamp })
}
