//! Roadmap diff engine.
//!
//! Compares two versions of a [`Roadmap`](crate::models::Roadmap) and
//! produces a [`RoadmapDelta`]: added, removed and modified phases, whether
//! the summary changed, and aggregate task statistics.
//!
//! ## Entry point
//!
//! ```rust
//! use waymark_core::{diff::compare_roadmaps, models::{Phase, Roadmap}};
//!
//! let phase = |priority: &str, tasks: &[&str]| Phase {
//!     name: "P1".to_string(),
//!     description: "d".to_string(),
//!     duration: "1w".to_string(),
//!     priority: priority.to_string(),
//!     dependencies: None,
//!     tasks: tasks.iter().map(|t| t.to_string()).collect(),
//! };
//!
//! let older = Roadmap { summary: "S1".into(), phases: vec![phase("low", &["t1", "t2"])], generated_date: None };
//! let newer = Roadmap { summary: "S1".into(), phases: vec![phase("high", &["t1", "t3"])], generated_date: None };
//!
//! let delta = compare_roadmaps(&older, &newer);
//! assert_eq!(delta.modified_phases.len(), 1);
//! assert_eq!(delta.modified_phases[0].metadata.priority_change, 2);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: neither input is mutated; nothing is cached or logged.
//! - **Omission**: phases that match exactly on tasks, priority, duration,
//!   description and dependencies never appear in `modified_phases`.
//! - **Division guards**: percentages are 0 when the older side has no tasks.
//! - **Presence matching by default**: repeated identical tasks are not
//!   counted by multiplicity unless [`TaskMatching::Multiset`] is requested.

pub mod engine;
pub mod model;

#[cfg(test)]
mod tests;

pub use engine::{compare_phases, compare_roadmaps, compare_roadmaps_with};
pub use model::{
    BeforeAfter, CompareOptions, DeltaStatistics, DependencyChanges, FieldChange, PhaseChange,
    PhaseChangeMetadata, RoadmapDelta, TaskChanges, TaskMatching,
};
