//! Core library for the Waymark roadmap comparison tool.
//!
//! Waymark keeps a history of named roadmap versions and explains how one
//! version differs from another.
//!
//! - [`diff`]: the pure comparison engine producing a [`RoadmapDelta`]
//! - [`store`]: the SQLite-backed [`RoadmapStore`] of saved versions
//! - [`cache`]: an expiring [`DeltaCache`] for repeated comparisons
//! - [`display`]: Markdown rendering of models and deltas
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waymark_core::{
//!     params::{CompareSaved, SaveRoadmap},
//!     models::Roadmap,
//!     StoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("waymark.db"))
//!     .build()
//!     .await?;
//!
//! let v1: Roadmap = serde_json::from_str(&std::fs::read_to_string("v1.json")?)?;
//! let v2: Roadmap = serde_json::from_str(&std::fs::read_to_string("v2.json")?)?;
//!
//! let older = store
//!     .save_roadmap(&SaveRoadmap { name: "v1".into(), roadmap: v1, ..Default::default() })
//!     .await?;
//! let newer = store
//!     .save_roadmap(&SaveRoadmap { name: "v2".into(), roadmap: v2, ..Default::default() })
//!     .await?;
//!
//! if let Some(delta) = store
//!     .compare_saved(&CompareSaved { older_id: older.id, newer_id: newer.id, ..Default::default() })
//!     .await?
//! {
//!     println!("{delta}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod db;
pub mod diff;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use cache::{CacheConfig, DeltaCache};
pub use db::Database;
pub use diff::{compare_roadmaps, compare_roadmaps_with, CompareOptions, RoadmapDelta, TaskMatching};
pub use display::{CreateResult, LocalDateTime, OperationStatus, RoadmapSummaries};
pub use error::{Result, WaymarkError};
pub use models::{Phase, Roadmap, RoadmapHistoryItem, RoadmapStatus, RoadmapSummary};
pub use params::{CompareSaved, Id, ListRoadmaps, SaveRoadmap};
pub use store::{RoadmapStore, StoreBuilder};
