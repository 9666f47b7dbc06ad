//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::RoadmapSummary;

/// Newtype wrapper for displaying collections of roadmap summaries.
///
/// Empty collections render as a single "No roadmaps found." line.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waymark_core::{
///     display::RoadmapSummaries,
///     models::{RoadmapStatus, RoadmapSummary},
/// };
///
/// let summary = RoadmapSummary {
///     id: 1,
///     name: "Q3 plan".to_string(),
///     description: None,
///     status: RoadmapStatus::Active,
///     created_at: Timestamp::now(),
///     created_by: None,
///     phase_count: 2,
///     task_count: 5,
/// };
///
/// let output = RoadmapSummaries(vec![summary]).to_string();
/// assert!(output.contains("## Q3 plan (ID: 1)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadmapSummaries(pub Vec<RoadmapSummary>);

impl RoadmapSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for RoadmapSummaries {
    type Output = RoadmapSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RoadmapSummaries {
    type Item = RoadmapSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RoadmapSummaries {
    type Item = &'a RoadmapSummary;
    type IntoIter = std::slice::Iter<'a, RoadmapSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RoadmapSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No roadmaps found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
