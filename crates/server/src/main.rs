//! nimbus server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::{Context, Result};
use nimbus_core::{AppConfig, ResponseCache, SearchHistory};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("loading configuration")?;

    let history = SearchHistory::open(config.history_store(), &config.history_config())
        .with_context(|| format!("opening search history at {}", config.history_path.display()))?;

    let cache = ResponseCache::new(config.cache_store(), config.cache_config());

    tracing::info!(
        history_path = %config.history_path.display(),
        history_entries = history.len(),
        cache_path = %config.cache_path.display(),
        cache_available = cache.is_available(),
        "Starting nimbus server on stdio transport"
    );

    let handler = handler::NimbusServer::new(history, cache);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
