//! `wicket serve` command.
//!
//! Starts the MCP server over stdio, exposing the query-tool catalog via
//! JSON-RPC 2.0. The loop exits cleanly when stdin closes.

use clap::Args;

use wicket_config::WicketConfig;
use wicket_tools::build_registry;
use wicket_transport_stdio::{McpHandler, McpServer, StdioTransport};

use crate::shared;

/// Start the MCP server over stdio.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Database path (defaults to the configured database.path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &WicketConfig) -> anyhow::Result<()> {
    let store = shared::open_store(&args.db, config)?;
    let registry =
        build_registry(store).map_err(|e| anyhow::anyhow!("registry error: {e}"))?;
    let handler = McpHandler::new(registry);

    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!("wicket MCP server ready on stdio");
    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;
    Ok(())
}
