//! history_list tool implementation.

use std::sync::Arc;

use nimbus_core::{SearchHistory, Storage};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::tools::json_result;

/// Output from the history_list tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryListOutput {
    /// Remembered search terms, most recent first.
    pub entries: Vec<String>,
}

/// Implementation of the history_list tool.
///
/// Reads the in-memory list only, so no blocking task is needed.
pub async fn list_impl<S: Storage>(history: Arc<Mutex<SearchHistory<S>>>) -> Result<CallToolResult, McpError> {
    let entries = history.lock().await.list().to_vec();
    json_result(&HistoryListOutput { entries })
}
