//! Roadmap document model: a summary plus an ordered list of phases.

use std::collections::HashSet;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::priority::priority_level;
use crate::error::{Result, WaymarkError};

/// A structured development plan consisting of ordered phases.
///
/// Phase order is meaningful for display only; comparisons match phases by
/// [`Phase::name`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Roadmap {
    /// Free-text description of the roadmap
    pub summary: String,

    /// Ordered phases of the roadmap
    pub phases: Vec<Phase>,

    /// When the roadmap was generated (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub generated_date: Option<Timestamp>,
}

/// A named stage of a roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Phase {
    /// Identity of the phase across roadmap versions
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Free-text duration label such as "4 weeks"
    pub duration: String,

    /// Priority label, normally one of high, medium or low
    pub priority: String,

    /// Names of the phases this phase depends on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    /// Task descriptions, matched across versions by exact text
    pub tasks: Vec<String>,
}

impl Roadmap {
    /// Total number of tasks across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.tasks.len()).sum()
    }

    /// Returns the first phase with the given name.
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.name == name)
    }

    /// Strict input check: every phase needs a non-empty, unique name.
    ///
    /// The comparison engine does not call this. Roadmaps with duplicate
    /// phase names still compare, with the first phase of a given name
    /// taking precedence.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::InvalidInput` naming the offending phase.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.phases.len());
        for (index, phase) in self.phases.iter().enumerate() {
            if phase.name.trim().is_empty() {
                return Err(WaymarkError::invalid_input("phases")
                    .with_reason(format!("phase at position {index} has an empty name")));
            }
            if !seen.insert(phase.name.as_str()) {
                return Err(WaymarkError::invalid_input("phases")
                    .with_reason(format!("duplicate phase name '{}'", phase.name)));
            }
        }
        Ok(())
    }
}

impl Phase {
    /// Numeric priority level of this phase (high=3, medium=2, low=1, else 0).
    pub fn priority_level(&self) -> i32 {
        priority_level(&self.priority)
    }
}
