//! Saved roadmap queries and status transitions.

use jiff::Timestamp;
use rusqlite::{params, params_from_iter, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WaymarkError},
    models::{Roadmap, RoadmapHistoryItem, RoadmapStatus},
};

const INSERT_ROADMAP_SQL: &str = "INSERT INTO roadmaps (name, description, roadmap_data, created_at, created_by, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const ROADMAP_COLUMNS: &str = "id, name, description, roadmap_data, created_at, created_by, status";

// julianday() parses the stored RFC 3339 text so ordering follows time, not
// string layout; id breaks ties between saves within the same millisecond.
const NEWEST_FIRST: &str = "ORDER BY julianday(created_at) DESC, id DESC";

/// Maps a `roadmaps` row selected with [`ROADMAP_COLUMNS`].
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<RoadmapHistoryItem> {
    let roadmap_json: String = row.get(3)?;
    let roadmap_data: Roadmap = serde_json::from_str(&roadmap_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let status_str: String = row.get(6)?;
    let status = status_str.parse::<RoadmapStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid roadmap status: {status_str}"),
            )),
        )
    })?;

    Ok(RoadmapHistoryItem {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        roadmap_data,
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
        created_by: row.get(5)?,
        status,
    })
}

/// `?first, ?first+1, ...` for `count` parameters.
fn placeholders(first: usize, count: usize) -> String {
    (first..first + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl super::Database {
    /// Saves a new active roadmap record stamped with the current time.
    pub fn insert_roadmap(
        &mut self,
        name: &str,
        description: Option<&str>,
        roadmap: &Roadmap,
        created_by: Option<&str>,
    ) -> Result<RoadmapHistoryItem> {
        let roadmap_json = serde_json::to_string(roadmap)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_ROADMAP_SQL,
            params![
                name,
                description,
                &roadmap_json,
                now.to_string(),
                created_by,
                RoadmapStatus::Active.as_str()
            ],
        )
        .db_context("Failed to insert roadmap")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(RoadmapHistoryItem {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            roadmap_data: roadmap.clone(),
            created_at: now,
            created_by: created_by.map(String::from),
            status: RoadmapStatus::Active,
        })
    }

    /// Retrieves a saved roadmap by its ID, whatever its status.
    pub fn get_roadmap(&self, id: u64) -> Result<Option<RoadmapHistoryItem>> {
        let query = format!("SELECT {ROADMAP_COLUMNS} FROM roadmaps WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], row_to_item)
            .optional()
            .db_context("Failed to query roadmap")
    }

    /// Lists saved roadmaps having one of `statuses`, newest first.
    pub fn list_roadmaps(&self, statuses: &[RoadmapStatus]) -> Result<Vec<RoadmapHistoryItem>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {ROADMAP_COLUMNS} FROM roadmaps WHERE status IN ({}) {NEWEST_FIRST}",
            placeholders(1, statuses.len())
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params_from_iter(statuses.iter().map(|s| s.as_str())), row_to_item)
            .db_context("Failed to query roadmaps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch roadmaps")?;

        Ok(items)
    }

    /// Moves a roadmap to `target` if its current status allows it.
    ///
    /// Returns `false` when the roadmap does not exist or the lifecycle
    /// forbids the transition from its current status.
    pub fn transition_status(&mut self, id: u64, target: RoadmapStatus) -> Result<bool> {
        let sources = RoadmapStatus::sources_for(target);
        if sources.is_empty() {
            return Err(WaymarkError::invalid_input("status")
                .with_reason(format!("no transition leads to '{}'", target.as_str())));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let query = format!(
            "UPDATE roadmaps SET status = ?1 WHERE id = ?2 AND status IN ({})",
            placeholders(3, sources.len())
        );

        let mut values: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(target.as_str()), Box::new(id as i64)];
        values.extend(
            sources
                .iter()
                .map(|s| Box::new(s.as_str()) as Box<dyn rusqlite::ToSql>),
        );

        let rows_affected = tx
            .execute(&query, params_from_iter(values.iter()))
            .db_context("Failed to update roadmap status")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows_affected > 0)
    }
}
