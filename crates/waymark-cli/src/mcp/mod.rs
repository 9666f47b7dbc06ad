//! MCP server implementation for Waymark
//!
//! Exposes the roadmap history and comparison engine as Model Context
//! Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use waymark_core::{CacheConfig, DeltaCache, RoadmapStore};

pub mod errors;
pub mod handlers;

pub use handlers::{CompareSaved, Id, ListRoadmaps, McpResult, SaveRoadmap};

/// MCP server for Waymark
#[derive(Clone)]
pub struct WaymarkMcpServer {
    store: Arc<Mutex<RoadmapStore>>,
    cache: Arc<Mutex<DeltaCache>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaymarkMcpServer {
    /// Create a new server with a default-sized comparison cache
    pub fn new(store: RoadmapStore) -> Self {
        Self::with_cache(store, DeltaCache::new(CacheConfig::default()))
    }

    pub fn with_cache(store: RoadmapStore, cache: DeltaCache) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            cache: Arc::new(Mutex::new(cache)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone(), self.cache.clone())
    }

    #[tool(
        name = "save_roadmap",
        description = "Save a roadmap document as a new named version. Provide a name (required), the roadmap (summary plus phases, each with name, description, duration, priority, optional dependencies and tasks), and optionally a description and created_by. Returns the saved roadmap with its ID for later comparisons."
    )]
    async fn save_roadmap(&self, params: Parameters<SaveRoadmap>) -> McpResult {
        self.handlers().save_roadmap(params).await
    }

    #[tool(
        name = "list_roadmaps",
        description = "List saved roadmaps, newest first. Use archived=false (default) for active roadmaps or archived=true for archived ones. Deleted roadmaps are never listed. Returns IDs, names, phase and task counts."
    )]
    async fn list_roadmaps(&self, params: Parameters<ListRoadmaps>) -> McpResult {
        self.handlers().list_roadmaps(params).await
    }

    #[tool(
        name = "show_roadmap",
        description = "Display a saved roadmap by ID, including its status, author, summary and every phase with its tasks. Works for archived and deleted roadmaps too."
    )]
    async fn show_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_roadmap(params).await
    }

    #[tool(
        name = "archive_roadmap",
        description = "Archive an active roadmap to hide it from the active list. Archived roadmaps can still be shown, compared and deleted, but cannot be made active again."
    )]
    async fn archive_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().archive_roadmap(params).await
    }

    #[tool(
        name = "delete_roadmap",
        description = "Delete an active or archived roadmap. Deletion is soft: the roadmap disappears from lists but its data is kept and it can still be shown and compared by ID."
    )]
    async fn delete_roadmap(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_roadmap(params).await
    }

    #[tool(
        name = "compare_roadmaps",
        description = "Compare two saved roadmaps by ID (older_id is the baseline, newer_id the revision). Reports added, removed and modified phases, task additions and removals, priority, duration, description and dependency changes, plus overall statistics. Set task_matching to 'multiset' to count repeated tasks individually. Returns a Markdown summary followed by the full delta as JSON."
    )]
    async fn compare_roadmaps(&self, params: Parameters<CompareSaved>) -> McpResult {
        self.handlers().compare_roadmaps(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaymarkMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waymark".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Waymark keeps a history of roadmap versions and explains what changed between two of them.

## Core Concepts
- **Roadmap**: a summary plus ordered phases. Each phase has a name, description, duration, priority (high/medium/low), optional dependencies and a list of tasks.
- **Saved roadmap**: a named version stored with an ID and a status (active, archived or deleted).
- **Delta**: the comparison of an older and a newer roadmap. Phases are matched by name; tasks by exact text.

## Workflow
1. Save each roadmap version with `save_roadmap`
2. Find IDs with `list_roadmaps`
3. Compare two versions with `compare_roadmaps`
4. Keep the list tidy with `archive_roadmap` and `delete_roadmap`

## Tool Categories
- **History**: save_roadmap, list_roadmaps, show_roadmap, archive_roadmap, delete_roadmap
- **Comparison**: compare_roadmaps"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaymarkMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waymark MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
