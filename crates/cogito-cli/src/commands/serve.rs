//! Stdio MCP server command

use super::{ctrl_c_token, load_config};
use anyhow::Context;
use cogito_core::llm::LlmClient;
use cogito_core::mcp::McpServer;
use cogito_core::tools::ToolRegistry;
use std::path::Path;
use std::sync::Arc;

/// Run the server until stdin closes or Ctrl-C
pub async fn run(config_file: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_file, true)?;
    tracing::info!(
        provider = %config.provider,
        model = config.active_model(),
        failure_policy = ?config.failure_policy,
        "starting cogito"
    );

    let client = LlmClient::from_config(&config).context("failed to build LLM client")?;
    let registry = Arc::new(ToolRegistry::with_defaults(Arc::new(client)));
    let server = Arc::new(McpServer::new(registry, config.failure_policy));

    let shutdown = ctrl_c_token();
    server
        .serve_stdio(shutdown.clone())
        .await
        .context("MCP session failed")?;

    // The blocking stdin read cannot be interrupted and would hold up
    // runtime shutdown until the next line arrives.
    if shutdown.is_cancelled() {
        std::process::exit(0);
    }
    Ok(())
}
