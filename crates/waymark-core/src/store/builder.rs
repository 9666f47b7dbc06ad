//! Builder for creating and configuring RoadmapStore instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::RoadmapStore;
use crate::{
    db::Database,
    error::{Result, WaymarkError},
};

/// Builder for creating and configuring RoadmapStore instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waymark/waymark.db` or `~/.local/share/waymark/waymark.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, creating parent directories and the schema.
    ///
    /// # Errors
    ///
    /// Returns `WaymarkError::XdgDirectory` if no default path can be placed,
    /// `WaymarkError::FileSystem` if the parent directory cannot be created,
    /// and `WaymarkError::Database` if the schema cannot be initialized.
    pub async fn build(self) -> Result<RoadmapStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WaymarkError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("opening roadmap store at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WaymarkError>(())
        })
        .await
        .map_err(WaymarkError::join)??;

        Ok(RoadmapStore::new(db_path))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waymark")
            .place_data_file("waymark.db")
            .map_err(|e| WaymarkError::XdgDirectory(e.to_string()))
    }
}
