use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompareArgs, RoadmapCommands};

/// Track roadmap versions and see what changed between them
///
/// Waymark saves named versions of roadmap documents in a local SQLite
/// database and compares any two versions phase by phase. It can also run as
/// an MCP (Model Context Protocol) server so AI assistants can save and
/// compare roadmaps.
#[derive(Parser)]
#[command(version, about, name = "waymark")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waymark/waymark.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waymark CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved roadmaps
    #[command(alias = "r")]
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommands,
    },
    /// Compare two roadmap versions
    #[command(alias = "diff")]
    Compare(CompareArgs),
    /// Start the MCP server
    Serve,
}
