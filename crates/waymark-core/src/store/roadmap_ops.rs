//! Roadmap operations for the RoadmapStore.

use log::{debug, warn};
use tokio::task;

use super::RoadmapStore;
use crate::{
    db::Database,
    error::{Result, WaymarkError},
    models::{RoadmapHistoryItem, RoadmapStatus},
    params::SaveRoadmap,
};

impl RoadmapStore {
    /// Saves a new active roadmap version stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::InvalidInput` if `name` is blank, and
    /// `WaymarkError::Database` if the record cannot be written.
    pub async fn save_roadmap(&self, params: &SaveRoadmap) -> Result<RoadmapHistoryItem> {
        if params.name.trim().is_empty() {
            return Err(WaymarkError::invalid_input("name").with_reason("must not be empty"));
        }

        let db_path = self.db_path.clone();
        let params = params.clone();

        let item = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_roadmap(
                &params.name,
                params.description.as_deref(),
                &params.roadmap,
                params.created_by.as_deref(),
            )
        })
        .await
        .map_err(WaymarkError::join)??;

        debug!("saved roadmap {} as '{}'", item.id, item.name);
        Ok(item)
    }

    /// All saved roadmaps that are not deleted, newest first.
    ///
    /// Backend errors are logged and yield an empty list.
    pub async fn get_saved_roadmaps(&self) -> Vec<RoadmapHistoryItem> {
        self.try_list(vec![RoadmapStatus::Active, RoadmapStatus::Archived])
            .await
            .unwrap_or_else(|e| {
                warn!("failed to load saved roadmaps: {e}");
                Vec::new()
            })
    }

    /// A saved roadmap by ID, whatever its status.
    ///
    /// Backend errors are logged and yield `None`.
    pub async fn get_roadmap_by_id(&self, id: u64) -> Option<RoadmapHistoryItem> {
        self.try_get(id).await.unwrap_or_else(|e| {
            warn!("failed to load roadmap {id}: {e}");
            None
        })
    }

    /// Archives an active roadmap.
    ///
    /// Returns `false` when the roadmap is missing, not active, or the
    /// update failed.
    pub async fn archive_roadmap(&self, id: u64) -> bool {
        self.transition(id, RoadmapStatus::Archived).await
    }

    /// Soft-deletes an active or archived roadmap. The record is kept.
    ///
    /// Returns `false` when the roadmap is missing, already deleted, or the
    /// update failed.
    pub async fn delete_roadmap(&self, id: u64) -> bool {
        self.transition(id, RoadmapStatus::Deleted).await
    }

    pub(crate) async fn try_get(&self, id: u64) -> Result<Option<RoadmapHistoryItem>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_roadmap(id)
        })
        .await
        .map_err(WaymarkError::join)?
    }

    pub(crate) async fn try_list(
        &self,
        statuses: Vec<RoadmapStatus>,
    ) -> Result<Vec<RoadmapHistoryItem>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_roadmaps(&statuses)
        })
        .await
        .map_err(WaymarkError::join)?
    }

    async fn transition(&self, id: u64, target: RoadmapStatus) -> bool {
        let db_path = self.db_path.clone();

        let result = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.transition_status(id, target)
        })
        .await
        .map_err(WaymarkError::join)
        .and_then(|inner| inner);

        match result {
            Ok(changed) => {
                debug!(
                    "roadmap {id} -> {}: {}",
                    target.as_str(),
                    if changed { "updated" } else { "not eligible" }
                );
                changed
            }
            Err(e) => {
                warn!("failed to mark roadmap {id} as {}: {e}", target.as_str());
                false
            }
        }
    }
}
