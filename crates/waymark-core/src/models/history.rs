//! Saved roadmap record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Roadmap, RoadmapStatus};

/// A roadmap document persisted in the history store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapHistoryItem {
    /// Unique identifier of the saved roadmap
    pub id: u64,

    /// Display name given when the roadmap was saved
    pub name: String,

    /// Optional notes about this version
    pub description: Option<String>,

    /// The roadmap document itself
    pub roadmap_data: Roadmap,

    /// Timestamp when the roadmap was saved (UTC)
    pub created_at: Timestamp,

    /// Who saved the roadmap
    pub created_by: Option<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: RoadmapStatus,
}
