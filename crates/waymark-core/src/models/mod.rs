//! Data models for roadmaps and saved roadmap history.
//!
//! This module contains the domain models of the Waymark system. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures separate from presentation.
//!
//! - [`Roadmap`] / [`Phase`]: the document being compared. Serialized with
//!   camelCase field names (`generatedDate`), which is the shape consumers
//!   exchange.
//! - [`RoadmapHistoryItem`]: a saved roadmap with its lifecycle
//!   [`RoadmapStatus`].
//! - [`RoadmapSummary`]: compact list view of a saved roadmap.
//!
//! # Examples
//!
//! ```rust
//! use waymark_core::models::Roadmap;
//!
//! let json = r#"{
//!     "summary": "Launch plan",
//!     "phases": [{
//!         "name": "Discovery",
//!         "description": "Interview users",
//!         "duration": "2 weeks",
//!         "priority": "high",
//!         "tasks": ["Schedule interviews", "Write report"]
//!     }]
//! }"#;
//!
//! let roadmap: Roadmap = serde_json::from_str(json).unwrap();
//! assert_eq!(roadmap.task_count(), 2);
//! assert_eq!(roadmap.phase("Discovery").unwrap().priority_level(), 3);
//! ```

pub mod history;
pub mod priority;
pub mod roadmap;
pub mod status;
pub mod summary;


pub use history::RoadmapHistoryItem;
pub use priority::priority_level;
pub use roadmap::{Phase, Roadmap};
pub use status::RoadmapStatus;
pub use summary::RoadmapSummary;
