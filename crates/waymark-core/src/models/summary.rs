//! Roadmap summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{RoadmapHistoryItem, RoadmapStatus};

/// Summary information about a saved roadmap with phase and task counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    /// Saved roadmap ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// Optional notes about this version
    pub description: Option<String>,
    /// Lifecycle status
    pub status: RoadmapStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Who saved the roadmap
    pub created_by: Option<String>,
    /// Number of phases
    pub phase_count: usize,
    /// Number of tasks across all phases
    pub task_count: usize,
}

impl From<&RoadmapHistoryItem> for RoadmapSummary {
    fn from(item: &RoadmapHistoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            status: item.status,
            created_at: item.created_at,
            created_by: item.created_by.clone(),
            phase_count: item.roadmap_data.phases.len(),
            task_count: item.roadmap_data.task_count(),
        }
    }
}
