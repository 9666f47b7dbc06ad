//! Parameter structures for Waymark operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is only
//! compiled in with the `schema` feature, which the MCP server enables.
//!
//! Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! CLI argument structs convert with `From`, and MCP requests use
//! `#[serde(transparent)]` newtypes over these types.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{diff::TaskMatching, models::Roadmap};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_roadmap, archive_roadmap and delete_roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the saved roadmap to operate on
    pub id: u64,
}

/// Parameters for saving a roadmap version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SaveRoadmap {
    /// Name of the saved roadmap (required, non-empty)
    pub name: String,
    /// Optional notes about this version
    pub description: Option<String>,
    /// The roadmap document itself
    pub roadmap: Roadmap,
    /// Optional author of this version
    pub created_by: Option<String>,
}

/// Parameters for listing saved roadmaps.
///
/// Controls whether to show archived or active roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRoadmaps {
    /// Whether to show archived roadmaps instead of active ones
    #[serde(default)]
    pub archived: bool,
}

/// Parameters for comparing two saved roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompareSaved {
    /// ID of the baseline (older) roadmap
    pub older_id: u64,
    /// ID of the roadmap compared against the baseline
    pub newer_id: u64,
    /// How repeated tasks are matched: "presence" (default) or "multiset"
    #[serde(default)]
    pub task_matching: TaskMatching,
}
