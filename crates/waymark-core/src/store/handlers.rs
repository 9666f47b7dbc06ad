//! Store handlers that return display wrappers or derived results.

use super::RoadmapStore;
use crate::{
    diff::{compare_roadmaps_with, CompareOptions, RoadmapDelta},
    display::RoadmapSummaries,
    error::Result,
    models::{RoadmapStatus, RoadmapSummary},
    params::{CompareSaved, ListRoadmaps},
};

impl RoadmapStore {
    /// Handle listing saved roadmaps as summaries.
    ///
    /// Lists active roadmaps, or only archived ones when `params.archived`
    /// is set. Deleted roadmaps are never listed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use waymark_core::{params::ListRoadmaps, StoreBuilder};
    /// # async {
    /// let store = StoreBuilder::new().build().await?;
    /// let summaries = store.list_roadmaps(&ListRoadmaps { archived: false }).await?;
    /// println!("{summaries}");
    /// # Result::<(), waymark_core::WaymarkError>::Ok(())
    /// # };
    /// ```
    pub async fn list_roadmaps(&self, params: &ListRoadmaps) -> Result<RoadmapSummaries> {
        let status = if params.archived {
            RoadmapStatus::Archived
        } else {
            RoadmapStatus::Active
        };

        let items = self.try_list(vec![status]).await?;
        let summaries: Vec<RoadmapSummary> = items.iter().map(Into::into).collect();
        Ok(RoadmapSummaries(summaries))
    }

    /// Handle comparing two saved roadmaps.
    ///
    /// Returns `None` when either roadmap does not exist. Deleted roadmaps
    /// keep their data and can still be compared.
    pub async fn compare_saved(&self, params: &CompareSaved) -> Result<Option<RoadmapDelta>> {
        let Some(older) = self.try_get(params.older_id).await? else {
            return Ok(None);
        };
        let Some(newer) = self.try_get(params.newer_id).await? else {
            return Ok(None);
        };

        let options = CompareOptions {
            task_matching: params.task_matching,
        };
        Ok(Some(compare_roadmaps_with(
            &older.roadmap_data,
            &newer.roadmap_data,
            &options,
        )))
    }
}
