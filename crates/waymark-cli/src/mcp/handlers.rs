//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use waymark_core::{
    display::{CreateResult, OperationStatus},
    params as core, CompareOptions, DeltaCache, RoadmapStore,
};

use super::errors::{not_found, to_mcp_error};

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the wrapped core
/// type, and the schema is the core type's own, so the core params need no
/// MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type SaveRoadmap = McpParams<core::SaveRoadmap>;
pub type ListRoadmaps = McpParams<core::ListRoadmaps>;
pub type CompareSaved = McpParams<core::CompareSaved>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<Mutex<RoadmapStore>>,
    cache: Arc<Mutex<DeltaCache>>,
}

impl McpHandlers {
    pub fn new(store: Arc<Mutex<RoadmapStore>>, cache: Arc<Mutex<DeltaCache>>) -> Self {
        Self { store, cache }
    }

    pub async fn save_roadmap(&self, Parameters(params): Parameters<SaveRoadmap>) -> McpResult {
        debug!("save_roadmap: {}", params.as_ref().name);

        let item = self
            .store
            .lock()
            .await
            .save_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save roadmap", &e))?;

        let result = CreateResult::new(item);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_roadmaps(&self, Parameters(params): Parameters<ListRoadmaps>) -> McpResult {
        debug!("list_roadmaps: {:?}", params);

        let inner_params = params.as_ref();
        let summaries = self
            .store
            .lock()
            .await
            .list_roadmaps(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list roadmaps", &e))?;

        let title = match (summaries.is_empty(), inner_params.archived) {
            (true, true) => "No archived roadmaps found",
            (true, false) => "No active roadmaps found",
            (false, true) => "Archived Roadmaps",
            (false, false) => "Active Roadmaps",
        };

        let result = format!("# {title}\n\n{summaries}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_roadmap: {:?}", params);

        let id = params.as_ref().id;
        let item = self
            .store
            .lock()
            .await
            .get_roadmap_by_id(id)
            .await
            .ok_or_else(|| not_found(id))?;

        Ok(CallToolResult::success(vec![Content::text(
            item.to_string(),
        )]))
    }

    pub async fn archive_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("archive_roadmap: {:?}", params);

        let id = params.as_ref().id;
        let archived = self.store.lock().await.archive_roadmap(id).await;

        let result = if archived {
            OperationStatus::success(format!(
                "Archived roadmap with ID {id}. It no longer appears in the active list."
            ))
        } else {
            OperationStatus::failure(format!(
                "Roadmap with ID {id} was not archived. Only existing active roadmaps can be archived."
            ))
        };
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_roadmap(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_roadmap: {:?}", params);

        let id = params.as_ref().id;
        let deleted = self.store.lock().await.delete_roadmap(id).await;

        let result = if deleted {
            OperationStatus::success(format!(
                "Deleted roadmap with ID {id}. Its data is kept and can still be compared."
            ))
        } else {
            OperationStatus::failure(format!(
                "Roadmap with ID {id} was not deleted. It may not exist or is already deleted."
            ))
        };
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn compare_roadmaps(
        &self,
        Parameters(params): Parameters<CompareSaved>,
    ) -> McpResult {
        debug!("compare_roadmaps: {:?}", params);

        let inner_params = params.as_ref();
        let (older, newer) = {
            let store = self.store.lock().await;
            let older = store
                .get_roadmap_by_id(inner_params.older_id)
                .await
                .ok_or_else(|| not_found(inner_params.older_id))?;
            let newer = store
                .get_roadmap_by_id(inner_params.newer_id)
                .await
                .ok_or_else(|| not_found(inner_params.newer_id))?;
            (older, newer)
        };

        let options = CompareOptions {
            task_matching: inner_params.task_matching,
        };
        let delta = self
            .cache
            .lock()
            .await
            .get_or_compute(&older.roadmap_data, &newer.roadmap_data, &options)
            .map_err(|e| to_mcp_error("Failed to compare roadmaps", &e))?;

        let json = serde_json::to_string_pretty(&delta)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode delta: {e}"), None))?;

        let heading = format!("# {} → {}\n\n", older.name, newer.name);
        Ok(CallToolResult::success(vec![
            Content::text(format!("{heading}{delta}")),
            Content::text(json),
        ]))
    }
}
