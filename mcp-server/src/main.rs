//! Lingopost MCP Server
//!
//! This MCP server lets an assistant use the blog on a user's behalf.
//! The API location comes from environment variables; the session is a
//! cookie kept for the life of the process. Tools cover:
//! - Logging in and out
//! - Reading the translated home feed and profiles
//! - Publishing posts and registering accounts

mod server;

use anyhow::{Context, Result};
use lingopost_client::{BlogApp, Config};
use rmcp::ServiceExt;
use server::LingopostServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lingopost_client=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Lingopost MCP server");

    let config = Config::from_env();
    let app = BlogApp::connect(config).context("Failed to build HTTP client")?;

    // Settle the session before the first tool call
    app.session.probe().await;

    let server = LingopostServer::new(app);

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
