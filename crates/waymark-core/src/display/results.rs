//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::RoadmapHistoryItem;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waymark_core::{
///     display::CreateResult,
///     models::{Roadmap, RoadmapHistoryItem, RoadmapStatus},
/// };
///
/// let item = RoadmapHistoryItem {
///     id: 7,
///     name: "Q3 plan".to_string(),
///     description: None,
///     roadmap_data: Roadmap::default(),
///     created_at: Timestamp::now(),
///     created_by: None,
///     status: RoadmapStatus::Active,
/// };
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.starts_with("Saved roadmap with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<RoadmapHistoryItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved roadmap with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
