//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use nimbus_core::{FileStore, ResponseCache, SearchHistory};
use tokio::sync::Mutex;

use crate::tools::{
    cache::{self, CacheSaveParams},
    history::{self, HistoryTermParams},
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for nimbus.
#[derive(Clone)]
pub struct NimbusServer {
    tool_router: ToolRouter<Self>,
    history: Arc<Mutex<SearchHistory<FileStore>>>,
    cache: Arc<ResponseCache<FileStore>>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl NimbusServer {
    /// Create a new server handler around an opened history and cache.
    pub fn new(history: SearchHistory<FileStore>, cache: ResponseCache<FileStore>) -> Self {
        Self { tool_router: Self::tool_router(), history: Arc::new(Mutex::new(history)), cache: Arc::new(cache) }
    }

    /// Record a new search term. A term already in the history keeps its position.
    #[tool(description = "Record a searched term (e.g. a city). Known terms keep their position. Returns the history.")]
    async fn history_add(&self, params: Parameters<HistoryTermParams>) -> Result<CallToolResult, McpError> {
        history::add_impl(self.history.clone(), params.0).await
    }

    /// Record that a term was picked from the history, moving it to the front.
    #[tool(description = "Record a term picked from the history, moving it to the front. Returns the history.")]
    async fn history_select(&self, params: Parameters<HistoryTermParams>) -> Result<CallToolResult, McpError> {
        history::select_impl(self.history.clone(), params.0).await
    }

    #[tool(description = "List remembered search terms, most recent first.")]
    async fn history_list(&self) -> Result<CallToolResult, McpError> {
        history::list_impl(self.history.clone()).await
    }

    /// Replace the cached response with a freshly fetched one.
    #[tool(description = "Cache a fetched response payload, replacing the previous one.")]
    async fn cache_save(&self, params: Parameters<CacheSaveParams>) -> Result<CallToolResult, McpError> {
        cache::save_impl(self.cache.clone(), params.0).await
    }

    #[tool(description = "Return the cached response and its age in seconds, if it is still fresh.")]
    async fn cache_get(&self) -> Result<CallToolResult, McpError> {
        cache::get_impl(self.cache.clone()).await
    }

    #[tool(description = "Report whether any response has been cached, fresh or not.")]
    async fn cache_status(&self) -> Result<CallToolResult, McpError> {
        cache::status_impl(self.cache.clone()).await
    }
}

impl ServerHandler for NimbusServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "nimbus".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
