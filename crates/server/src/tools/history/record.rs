//! history_add and history_select tool implementations.
//!
//! Both record a search term. `history_add` leaves an already-known term in
//! place; `history_select` moves it to the front.

use std::sync::Arc;

use nimbus_core::{DuplicatePolicy, Error, SearchHistory, Storage, normalize_term};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::tools::{blocking, json_result};

/// Parameters for the history_add and history_select tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryTermParams {
    /// The search term, e.g. a city name. Trimmed and title-cased before use.
    pub term: String,
}

/// Output from the history_add and history_select tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryRecordOutput {
    /// History after the call, most recent first.
    pub entries: Vec<String>,
    /// Whether the call changed the history.
    pub changed: bool,
}

/// Implementation of the history_add tool.
pub async fn add_impl<S: Storage + 'static>(
    history: Arc<Mutex<SearchHistory<S>>>, params: HistoryTermParams,
) -> Result<CallToolResult, McpError> {
    record(history, params, DuplicatePolicy::Skip).await
}

/// Implementation of the history_select tool.
pub async fn select_impl<S: Storage + 'static>(
    history: Arc<Mutex<SearchHistory<S>>>, params: HistoryTermParams,
) -> Result<CallToolResult, McpError> {
    record(history, params, DuplicatePolicy::Promote).await
}

/// The history lock is held only inside the blocking task, for the insert
/// and its write.
async fn record<S: Storage + 'static>(
    history: Arc<Mutex<SearchHistory<S>>>, params: HistoryTermParams, policy: DuplicatePolicy,
) -> Result<CallToolResult, McpError> {
    if normalize_term(&params.term).is_none() {
        return Err(Error::InvalidInput("term cannot be empty".into()).into());
    }

    let output = blocking(move || {
        let mut history = history.blocking_lock();
        let changed = history.insert(&params.term, policy)?;
        tracing::info!(term = %params.term, ?policy, changed, "Recorded search term");
        Ok(HistoryRecordOutput { entries: history.list().to_vec(), changed })
    })
    .await?;

    json_result(&output)
}
