//! MCP controller interface for the live graph.
//!
//! One tool: the agent names files, the service resolves them to nodes,
//! replaces the highlight selection, and hands the change to the broadcast
//! feed. The command context processes one call to completion before the
//! next; it never waits on viewer delivery.

use crate::feed::HighlightFeed;
use repograph_graph::GraphStore;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use std::sync::Arc;

/// Repograph MCP service.
#[derive(Clone)]
pub struct RepoGraphService {
    store: Arc<GraphStore>,
    feed: HighlightFeed,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HighlightRequest {
    /// Filenames to resolve against the graph
    #[schemars(description = "List of filenames to highlight (e.g. ['AuthService.ts'])")]
    pub filenames: Vec<String>,

    /// Free-text note attached to this highlight; logged, never persisted
    #[schemars(description = "Optional note on why these files are highlighted")]
    pub label: Option<String>,
}

impl RepoGraphService {
    pub fn new(store: Arc<GraphStore>, feed: HighlightFeed) -> Self {
        Self {
            store,
            feed,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl RepoGraphService {
    /// Resolve filenames, replace the selection, notify viewers.
    #[tool(
        description = "Highlight files in the repository graph. Use this when explaining code structure."
    )]
    pub async fn highlight_architecture(
        &self,
        Parameters(request): Parameters<HighlightRequest>,
    ) -> Result<CallToolResult, McpError> {
        let matched = self.store.resolve_matches(&request.filenames);
        let count = self.store.replace_highlight(matched.clone());

        if let Some(label) = request.label.as_deref() {
            log::info!("Highlight ({count} files): {label}");
        }

        // matched ids all exist, so this equals the stored selection
        self.feed.publish(matched);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Highlighted {count} files."
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for RepoGraphService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Repograph serves a live architecture graph of the scanned repository. Use 'highlight_architecture' to light up the files you are talking about; every connected viewer follows along.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
