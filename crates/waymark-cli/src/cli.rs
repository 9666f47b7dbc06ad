//! Command-line argument wrappers and command execution.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `waymark_core::params` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → RoadmapStore / diff engine
//! ```
//!
//! [`Cli`] executes the parsed commands and renders their Markdown output.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use waymark_core::{
    compare_roadmaps_with,
    display::{CreateResult, OperationStatus},
    params::{CompareSaved, Id, ListRoadmaps, SaveRoadmap},
    CompareOptions, Roadmap, RoadmapDelta, RoadmapStore, TaskMatching, WaymarkError,
};

use crate::renderer::TerminalRenderer;

/// Save a roadmap document as a new version
#[derive(Args)]
pub struct SaveRoadmapArgs {
    /// Path to the roadmap JSON document
    pub file: PathBuf,
    /// Name for this saved version
    #[arg(short, long)]
    pub name: String,
    /// Optional notes about this version
    #[arg(short, long)]
    pub description: Option<String>,
    /// Who is saving the roadmap
    #[arg(long)]
    pub created_by: Option<String>,
}

impl SaveRoadmapArgs {
    /// Reads the roadmap file and builds the core parameters.
    pub fn into_params(self) -> Result<SaveRoadmap> {
        Ok(SaveRoadmap {
            roadmap: read_roadmap(&self.file)?,
            name: self.name,
            description: self.description,
            created_by: self.created_by,
        })
    }
}

/// List saved roadmaps
///
/// Shows active roadmaps by default. Deleted roadmaps are never listed.
#[derive(Args)]
pub struct ListRoadmapsArgs {
    /// Show archived roadmaps instead of active ones
    #[arg(long)]
    pub archived: bool,
}

impl From<ListRoadmapsArgs> for ListRoadmaps {
    fn from(val: ListRoadmapsArgs) -> Self {
        ListRoadmaps {
            archived: val.archived,
        }
    }
}

/// Identifies a single saved roadmap
#[derive(Args)]
pub struct RoadmapIdArgs {
    /// ID of the saved roadmap
    pub id: u64,
}

impl From<RoadmapIdArgs> for Id {
    fn from(val: RoadmapIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RoadmapCommands {
    /// Save a roadmap JSON document as a new version
    #[command(alias = "s")]
    Save(SaveRoadmapArgs),
    /// List saved roadmaps
    #[command(aliases = ["l", "ls"])]
    List(ListRoadmapsArgs),
    /// Show a saved roadmap
    Show(RoadmapIdArgs),
    /// Archive an active roadmap
    #[command(alias = "a")]
    Archive(RoadmapIdArgs),
    /// Delete a roadmap (the record is kept but hidden)
    #[command(aliases = ["d", "rm"])]
    Delete(RoadmapIdArgs),
}

/// Compare two roadmap versions
///
/// OLDER and NEWER are saved roadmap IDs, or JSON file paths with --files.
#[derive(Args)]
pub struct CompareArgs {
    /// Baseline roadmap
    pub older: String,
    /// Roadmap compared against the baseline
    pub newer: String,
    /// Treat OLDER and NEWER as paths to roadmap JSON files
    #[arg(long)]
    pub files: bool,
    /// Count repeated tasks by multiplicity instead of presence
    #[arg(long)]
    pub multiset: bool,
    /// Reject roadmaps with duplicate or empty phase names
    #[arg(long)]
    pub strict: bool,
    /// Print the delta as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    fn task_matching(&self) -> TaskMatching {
        if self.multiset {
            TaskMatching::Multiset
        } else {
            TaskMatching::Presence
        }
    }
}

fn read_roadmap(path: &Path) -> Result<Roadmap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roadmap file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roadmap file {}", path.display()))
}

fn parse_id(value: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("'{value}' is not a roadmap ID (use --files for JSON paths)"))
}

fn compare_files(args: &CompareArgs) -> Result<RoadmapDelta> {
    let older = read_roadmap(Path::new(&args.older))?;
    let newer = read_roadmap(Path::new(&args.newer))?;

    if args.strict {
        older
            .validate()
            .with_context(|| format!("Invalid roadmap {}", args.older))?;
        newer
            .validate()
            .with_context(|| format!("Invalid roadmap {}", args.newer))?;
    }

    debug!("comparing files {} -> {}", args.older, args.newer);
    let options = CompareOptions {
        task_matching: args.task_matching(),
    };
    Ok(compare_roadmaps_with(&older, &newer, &options))
}

/// Executes CLI commands against a store and renders the results.
pub struct Cli {
    store: RoadmapStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: RoadmapStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_roadmap_command(&self, command: RoadmapCommands) -> Result<()> {
        match command {
            RoadmapCommands::Save(args) => {
                let params = args.into_params()?;
                let item = self
                    .store
                    .save_roadmap(&params)
                    .await
                    .context("Failed to save roadmap")?;
                self.renderer.render(&CreateResult::new(item).to_string())
            }
            RoadmapCommands::List(args) => self.list_roadmaps(&args.into()).await,
            RoadmapCommands::Show(args) => self.show_roadmap(&args.into()).await,
            RoadmapCommands::Archive(args) => {
                let Id { id } = args.into();
                if !self.store.archive_roadmap(id).await {
                    bail!("Roadmap {id} could not be archived (missing or not active)");
                }
                let status = OperationStatus::success(format!("Archived roadmap with ID {id}"));
                self.renderer.render(&status.to_string())
            }
            RoadmapCommands::Delete(args) => {
                let Id { id } = args.into();
                if !self.store.delete_roadmap(id).await {
                    bail!("Roadmap {id} could not be deleted (missing or already deleted)");
                }
                let status = OperationStatus::success(format!("Deleted roadmap with ID {id}"));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn list_roadmaps(&self, params: &ListRoadmaps) -> Result<()> {
        let summaries = self
            .store
            .list_roadmaps(params)
            .await
            .context("Failed to list roadmaps")?;

        let title = if params.archived {
            "Archived Roadmaps"
        } else {
            "Roadmaps"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"))
    }

    async fn show_roadmap(&self, params: &Id) -> Result<()> {
        let item = self
            .store
            .get_roadmap_by_id(params.id)
            .await
            .ok_or(WaymarkError::RoadmapNotFound { id: params.id })?;
        self.renderer.render(&item.to_string())
    }

    pub async fn compare(&self, args: &CompareArgs) -> Result<()> {
        let delta = if args.files {
            compare_files(args)?
        } else {
            self.compare_saved(args).await?
        };

        if args.json {
            let json = serde_json::to_string_pretty(&delta).context("Failed to encode delta")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&delta.to_string())
        }
    }

    async fn compare_saved(&self, args: &CompareArgs) -> Result<RoadmapDelta> {
        let older_id = parse_id(&args.older)?;
        let newer_id = parse_id(&args.newer)?;

        if args.strict {
            for id in [older_id, newer_id] {
                if let Some(item) = self.store.get_roadmap_by_id(id).await {
                    item.roadmap_data
                        .validate()
                        .with_context(|| format!("Invalid roadmap {id}"))?;
                }
            }
        }

        let params = CompareSaved {
            older_id,
            newer_id,
            task_matching: args.task_matching(),
        };
        self.store
            .compare_saved(&params)
            .await
            .context("Failed to compare roadmaps")?
            .with_context(|| format!("Roadmap {older_id} or {newer_id} not found"))
    }
}
