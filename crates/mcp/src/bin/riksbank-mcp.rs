// Standalone MCP server binary

use anyhow::Result;
use riksbank_client::{RiksbankClient, SERIES_CATALOG};
use riksbank_mcp::server::McpServer;
use riksbank_mcp::tools::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Riksbank MCP Server starting...");

    let client = RiksbankClient::new()?;

    let mut registry = ToolRegistry::new();

    // Discovery tools
    registry.register(Arc::new(ListPolicyRoundsTool::new(client.clone())));
    registry.register(Arc::new(ListSeriesTool::new(client.clone())));

    // Generic data fetcher
    registry.register(Arc::new(PolicyDataTool::new(client.clone())));

    // One tool per catalog series
    for info in SERIES_CATALOG {
        registry.register(Arc::new(SeriesDataTool::new(client.clone(), info)));
    }

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
