//! Lifecycle status of saved roadmaps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of saved roadmap statuses.
///
/// Records move `active → archived` and `active | archived → deleted`.
/// Deletion is soft: the record stays in the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapStatus {
    /// Roadmap is active and visible
    #[default]
    Active,

    /// Roadmap is archived and hidden from normal views
    Archived,

    /// Roadmap is soft-deleted
    Deleted,
}

impl FromStr for RoadmapStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(RoadmapStatus::Active),
            "archived" => Ok(RoadmapStatus::Archived),
            "deleted" => Ok(RoadmapStatus::Deleted),
            _ => Err(format!("Invalid roadmap status: {s}")),
        }
    }
}

impl RoadmapStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [RoadmapStatus; 3] = [
        RoadmapStatus::Active,
        RoadmapStatus::Archived,
        RoadmapStatus::Deleted,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapStatus::Active => "active",
            RoadmapStatus::Archived => "archived",
            RoadmapStatus::Deleted => "deleted",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `target`.
    pub fn can_transition_to(&self, target: RoadmapStatus) -> bool {
        matches!(
            (self, target),
            (RoadmapStatus::Active, RoadmapStatus::Archived)
                | (RoadmapStatus::Active, RoadmapStatus::Deleted)
                | (RoadmapStatus::Archived, RoadmapStatus::Deleted)
        )
    }

    /// Statuses a record must currently have to move to `target`.
    pub fn sources_for(target: RoadmapStatus) -> Vec<RoadmapStatus> {
        Self::ALL
            .into_iter()
            .filter(|status| status.can_transition_to(target))
            .collect()
    }
}
