//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tonewright_core::Config;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; the server speaks MCP over stdio
}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let server = ProjectServer::with_limit(max_input_bytes, config.default_tone());
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
