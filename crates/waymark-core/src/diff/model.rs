//! Roadmap delta output types.
//!
//! Field names serialize in camelCase (`addedPhases`, `taskChanges`,
//! `priorityChanged`, ...) so rendering code can match on them directly.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Phase;

/// How task and dependency lists are matched between two phase versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum TaskMatching {
    /// Presence semantics: an entry is unchanged if the same text appears
    /// anywhere on the other side. Repeated entries are not counted.
    #[default]
    Presence,

    /// Multiplicity-aware matching: each occurrence pairs with at most one
    /// occurrence on the other side.
    Multiset,
}

/// Options for [`crate::diff::compare_roadmaps_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Matching mode for task and dependency lists
    pub task_matching: TaskMatching,
}

impl CompareOptions {
    /// Options using multiplicity-aware list matching.
    pub fn multiset() -> Self {
        Self {
            task_matching: TaskMatching::Multiset,
        }
    }
}

/// A pair of values observed in the older and newer roadmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfter<T> {
    pub before: T,
    pub after: T,
}

/// A text field whose value changed between versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub from: String,
    pub to: String,
}

/// Task-level delta of a phase present in both roadmaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskChanges {
    /// Tasks only in the newer phase
    pub added: Vec<String>,
    /// Tasks only in the older phase
    pub removed: Vec<String>,
    /// Tasks of the older phase still present in the newer one
    pub unchanged: Vec<String>,
}

/// Dependency-level delta of a phase present in both roadmaps.
///
/// When only one side declares dependencies both lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

/// Derived figures computed for every matched phase pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseChangeMetadata {
    pub task_count: BeforeAfter<usize>,
    /// `(added + removed) / tasks before * 100`, 0 when the older phase had no tasks
    pub task_change_percentage: f64,
    pub priority_level: BeforeAfter<i32>,
    /// Positive when the priority escalated
    pub priority_change: i32,
}

/// Changes detected on a phase present in both roadmaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseChange {
    pub name: String,
    pub task_changes: TaskChanges,
    pub priority_changed: Option<FieldChange>,
    pub duration_changed: Option<FieldChange>,
    pub description_changed: bool,
    pub dependencies_changed: Option<DependencyChanges>,
    pub metadata: PhaseChangeMetadata,
}

impl PhaseChange {
    /// Whether anything about the phase differs between the two versions.
    pub fn has_changes(&self) -> bool {
        !self.task_changes.added.is_empty()
            || !self.task_changes.removed.is_empty()
            || self.priority_changed.is_some()
            || self.duration_changed.is_some()
            || self.description_changed
            || self.dependencies_changed.is_some()
    }
}

/// Aggregate counts over a whole comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaStatistics {
    pub phase_count: BeforeAfter<usize>,
    pub task_count: BeforeAfter<usize>,
    /// Tasks of added phases plus tasks added to modified phases
    pub added_tasks_count: usize,
    /// Tasks of removed phases plus tasks removed from modified phases
    pub removed_tasks_count: usize,
    /// `(added + removed) / tasks before * 100`, 0 when the older roadmap had no tasks
    pub change_percentage: f64,
}

/// The structured set of differences between two roadmap versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDelta {
    /// Phases present only in the newer roadmap, in its order
    pub added_phases: Vec<Phase>,
    /// Phases present only in the older roadmap, in its order
    pub removed_phases: Vec<Phase>,
    /// Phases present in both with at least one detected change
    pub modified_phases: Vec<PhaseChange>,
    pub summary_changed: bool,
    pub statistics: DeltaStatistics,
}

impl RoadmapDelta {
    /// True when the two roadmaps compare equal phase-by-phase and share a summary.
    pub fn is_empty(&self) -> bool {
        self.added_phases.is_empty()
            && self.removed_phases.is_empty()
            && self.modified_phases.is_empty()
            && !self.summary_changed
    }
}
