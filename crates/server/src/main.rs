//! Repograph MCP Server
//!
//! Scans a repository at startup, then serves two boundaries at once:
//!
//! - MCP over stdio for the controlling agent (`highlight_architecture`)
//! - a WebSocket gateway for live graph viewers
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "repograph": {
//!       "command": "repograph-mcp",
//!       "args": ["/path/to/repo"]
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use repograph_graph::GraphStore;
use repograph_scanner::RepoScanner;
use repograph_server::feed::HighlightFeed;
use repograph_server::gateway;
use repograph_server::tools::RepoGraphService;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "repograph-mcp")]
#[command(about = "Live repository architecture graph for AI agents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the repository to scan
    path: PathBuf,

    /// Port for the viewer WebSocket gateway
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Bind address for the viewer WebSocket gateway
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    // A missing or empty scan root still starts the service; viewers then
    // receive an empty graph.
    let outcome = RepoScanner::new(&cli.path).scan();
    let store = Arc::new(GraphStore::new());
    store.initialize(outcome.nodes, outcome.edges)?;

    let feed = HighlightFeed::new(32);
    let app = gateway::router(store.clone(), feed.clone());
    let listener = tokio::net::TcpListener::bind((cli.bind.as_str(), cli.port)).await?;
    log::info!("Viewer gateway listening on {}", listener.local_addr()?);
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            log::error!("Viewer gateway error: {err}");
        }
    });

    log::info!("Starting Repograph MCP server");
    let service = RepoGraphService::new(store, feed);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Repograph MCP server stopped");
    Ok(())
}
