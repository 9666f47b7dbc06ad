//! Waymark CLI Application
//!
//! Command-line interface for saving roadmap versions and comparing them.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaymarkMcpServer};
use renderer::TerminalRenderer;
use waymark_core::{params::ListRoadmaps, StoreBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize roadmap store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waymark started");

    match command {
        Some(Commands::Roadmap { command }) => {
            Cli::new(store, renderer)
                .handle_roadmap_command(command)
                .await
        }
        Some(Commands::Compare(args)) => Cli::new(store, renderer).compare(&args).await,
        Some(Commands::Serve) => {
            info!("Starting Waymark MCP server");
            run_stdio_server(WaymarkMcpServer::new(store))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(store, renderer)
                .list_roadmaps(&ListRoadmaps { archived: false })
                .await
        }
    }
}
