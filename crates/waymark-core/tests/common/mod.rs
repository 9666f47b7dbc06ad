#![allow(dead_code)]

use tempfile::TempDir;
use waymark_core::{Phase, Roadmap, RoadmapStore, StoreBuilder};

/// Helper function to create a test store
pub async fn create_test_store() -> (TempDir, RoadmapStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Builds a phase with default description and duration.
pub fn phase(name: &str, priority: &str, tasks: &[&str]) -> Phase {
    Phase {
        name: name.to_string(),
        description: format!("{name} work"),
        duration: "2 weeks".to_string(),
        priority: priority.to_string(),
        dependencies: None,
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn roadmap(summary: &str, phases: Vec<Phase>) -> Roadmap {
    Roadmap {
        summary: summary.to_string(),
        phases,
        generated_date: None,
    }
}
