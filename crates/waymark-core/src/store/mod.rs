//! High-level store API for saved roadmaps.
//!
//! [`RoadmapStore`] is the async facade over the SQLite [`Database`]. Each
//! operation opens a connection inside `tokio::task::spawn_blocking`, so
//! callers on an async runtime never block on disk I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (summaries,    │───▶│  (roadmap_ops)  │───▶│   (via db/)     │
//! │   comparisons)  │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Failure model
//!
//! Reads and status transitions soft-fail: a backend error is logged with
//! `log::warn!` and the caller sees an empty list, `None` or `false`. Saving
//! a roadmap propagates its error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use waymark_core::{
//!     models::Roadmap,
//!     params::{ListRoadmaps, SaveRoadmap},
//!     StoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("/tmp/waymark.db"))
//!     .build()
//!     .await?;
//!
//! let saved = store
//!     .save_roadmap(&SaveRoadmap {
//!         name: "Q3 plan".to_string(),
//!         roadmap: Roadmap::default(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! assert!(store.archive_roadmap(saved.id).await);
//!
//! // Archived roadmaps leave the active view but stay in the history
//! let active = store.list_roadmaps(&ListRoadmaps { archived: false }).await?;
//! assert!(active.is_empty());
//! assert_eq!(store.get_saved_roadmaps().await.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Database`]: crate::db::Database

use std::path::{Path, PathBuf};

pub mod builder;
pub mod handlers;
pub mod roadmap_ops;


pub use builder::StoreBuilder;

/// Persistent history of named roadmap versions.
#[derive(Debug, Clone)]
pub struct RoadmapStore {
    pub(crate) db_path: PathBuf,
}

impl RoadmapStore {
    /// Creates a store over an already initialized database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
