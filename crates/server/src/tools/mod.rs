//! MCP tool implementations.
//!
//! This module contains all tools exposed by the nimbus server.

use nimbus_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

pub mod cache;
pub mod history;

/// Run store work on the blocking pool so file I/O never stalls the async workers.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, McpError>
where
    F: FnOnce() -> Result<T, McpError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| McpError::internal_error(format!("Task panicked: {e}"), None))?
}

/// Serialize a tool output as a pretty JSON text result.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output).map_err(Error::from)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
