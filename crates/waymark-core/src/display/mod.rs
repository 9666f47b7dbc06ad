//! Display formatting wrappers and Markdown output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results
//! plus the human-readable rendering of a [`RoadmapDelta`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Roadmap, Delta)│───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is Markdown so the CLI can render it with a terminal skin and
//! the MCP server can hand it to a client verbatim.
//!
//! - [`collections`]: [`RoadmapSummaries`]
//! - [`results`]: [`CreateResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`delta`]: Display for [`RoadmapDelta`]
//! - [`models`]: Display for roadmaps, phases and saved items
//!
//! # Examples
//!
//! ```rust
//! use waymark_core::{diff::compare_roadmaps, models::Roadmap};
//!
//! let roadmap = Roadmap::default();
//! let delta = compare_roadmaps(&roadmap, &roadmap);
//! assert_eq!(delta.to_string(), "No changes detected.\n");
//! ```
//!
//! [`RoadmapDelta`]: crate::diff::RoadmapDelta

pub mod collections;
pub mod datetime;
pub mod delta;
pub mod models;
pub mod results;
pub mod status;

pub use collections::RoadmapSummaries;
pub use datetime::LocalDateTime;
pub use results::CreateResult;
pub use status::OperationStatus;
