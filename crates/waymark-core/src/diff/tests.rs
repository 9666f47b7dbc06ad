//! Tests for the diff engine.

use super::*;
use crate::models::{Phase, Roadmap};

fn phase(name: &str, priority: &str, tasks: &[&str]) -> Phase {
    Phase {
        name: name.to_string(),
        description: "d".to_string(),
        duration: "1w".to_string(),
        priority: priority.to_string(),
        dependencies: None,
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

fn roadmap(summary: &str, phases: Vec<Phase>) -> Roadmap {
    Roadmap {
        summary: summary.to_string(),
        phases,
        generated_date: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_roadmap() -> Roadmap {
    let mut build = phase("Build", "medium", &["API", "UI", "Docs"]);
    build.dependencies = Some(strings(&["Design"]));
    roadmap(
        "Ship v1",
        vec![
            phase("Design", "high", &["Wireframes", "Review"]),
            build,
            phase("Launch", "low", &["Announce"]),
        ],
    )
}

#[test]
fn test_identical_roadmaps_produce_empty_delta() {
    let a = sample_roadmap();
    let delta = compare_roadmaps(&a, &a);

    assert!(delta.added_phases.is_empty());
    assert!(delta.removed_phases.is_empty());
    assert!(delta.modified_phases.is_empty());
    assert!(!delta.summary_changed);
    assert_eq!(delta.statistics.change_percentage, 0.0);
    assert!(delta.is_empty());
}

#[test]
fn test_task_counts_match_phase_sums() {
    let a = sample_roadmap();
    let mut b = sample_roadmap();
    b.phases.push(phase("Support", "low", &["Triage", "Fix"]));

    let delta = compare_roadmaps(&a, &b);
    assert_eq!(delta.statistics.task_count.before, 6);
    assert_eq!(delta.statistics.task_count.after, 8);
    assert_eq!(delta.statistics.phase_count.before, 3);
    assert_eq!(delta.statistics.phase_count.after, 4);
}

#[test]
fn test_empty_older_guards_division() {
    let a = roadmap("S", vec![]);
    let b = roadmap("S", vec![phase("P1", "high", &["t1", "t2"])]);

    let delta = compare_roadmaps(&a, &b);
    assert_eq!(delta.added_phases.len(), 1);
    assert_eq!(delta.statistics.phase_count, BeforeAfter { before: 0, after: 1 });
    assert_eq!(delta.statistics.added_tasks_count, 2);
    assert_eq!(delta.statistics.change_percentage, 0.0);
    assert!(delta.statistics.change_percentage.is_finite());
}

#[test]
fn test_priority_and_task_change_scenario() {
    let older = roadmap("S1", vec![phase("P1", "low", &["t1", "t2"])]);
    let newer = roadmap("S1", vec![phase("P1", "high", &["t1", "t3"])]);

    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(delta.modified_phases.len(), 1);
    assert!(!delta.summary_changed);

    let change = &delta.modified_phases[0];
    assert_eq!(change.name, "P1");
    assert_eq!(
        change.priority_changed,
        Some(FieldChange {
            from: "low".to_string(),
            to: "high".to_string(),
        })
    );
    assert_eq!(
        change.task_changes,
        TaskChanges {
            added: strings(&["t3"]),
            removed: strings(&["t2"]),
            unchanged: strings(&["t1"]),
        }
    );
    assert_eq!(change.metadata.priority_change, 2);
    assert_eq!(change.metadata.priority_level, BeforeAfter { before: 1, after: 3 });
    assert_eq!(change.metadata.task_change_percentage, 100.0);
    assert!(change.duration_changed.is_none());
    assert!(!change.description_changed);

    assert_eq!(delta.statistics.added_tasks_count, 1);
    assert_eq!(delta.statistics.removed_tasks_count, 1);
    assert_eq!(delta.statistics.change_percentage, 100.0);
}

#[test]
fn test_added_and_removed_phases_partition() {
    let older = roadmap(
        "S",
        vec![phase("Keep", "high", &["k"]), phase("Drop", "low", &["x", "y"])],
    );
    let newer = roadmap(
        "S",
        vec![phase("New", "medium", &["n1", "n2", "n3"]), phase("Keep", "high", &["k"])],
    );

    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(delta.added_phases.len(), 1);
    assert_eq!(delta.added_phases[0].name, "New");
    assert_eq!(delta.removed_phases.len(), 1);
    assert_eq!(delta.removed_phases[0].name, "Drop");
    assert!(delta.modified_phases.is_empty());

    assert_eq!(delta.statistics.added_tasks_count, 3);
    assert_eq!(delta.statistics.removed_tasks_count, 2);
    // (3 + 2) / 3 * 100
    assert!((delta.statistics.change_percentage - 500.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_added_phases_keep_newer_order() {
    let older = roadmap("S", vec![]);
    let newer = roadmap(
        "S",
        vec![phase("C", "low", &[]), phase("A", "low", &[]), phase("B", "low", &[])],
    );

    let delta = compare_roadmaps(&older, &newer);
    let names: Vec<&str> = delta.added_phases.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_unchanged_phase_is_omitted() {
    let older = roadmap(
        "S",
        vec![phase("Same", "high", &["a"]), phase("Moved", "low", &["b"])],
    );
    let newer = roadmap(
        "S",
        vec![phase("Moved", "low", &["b"]), phase("Same", "high", &["a"])],
    );

    let delta = compare_roadmaps(&older, &newer);
    assert!(delta.modified_phases.is_empty());
    assert!(delta.is_empty());
}

#[test]
fn test_summary_change_alone() {
    let older = roadmap("Before", vec![phase("P", "low", &["t"])]);
    let newer = roadmap("After", vec![phase("P", "low", &["t"])]);

    let delta = compare_roadmaps(&older, &newer);
    assert!(delta.summary_changed);
    assert!(delta.modified_phases.is_empty());
    assert!(!delta.is_empty());
}

#[test]
fn test_description_change_is_boolean_only() {
    let older = roadmap("S", vec![phase("P", "low", &["t"])]);
    let mut newer = older.clone();
    newer.phases[0].description = "rewritten".to_string();

    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(delta.modified_phases.len(), 1);
    let change = &delta.modified_phases[0];
    assert!(change.description_changed);
    assert!(change.priority_changed.is_none());
    assert_eq!(change.metadata.task_change_percentage, 0.0);
}

#[test]
fn test_duration_change_records_from_and_to() {
    let older = roadmap("S", vec![phase("P", "low", &["t"])]);
    let mut newer = older.clone();
    newer.phases[0].duration = "3 weeks".to_string();

    let delta = compare_roadmaps(&older, &newer);
    let change = &delta.modified_phases[0];
    assert_eq!(
        change.duration_changed,
        Some(FieldChange {
            from: "1w".to_string(),
            to: "3 weeks".to_string(),
        })
    );
}

#[test]
fn test_priority_compare_is_case_sensitive_but_level_is_not() {
    let older = roadmap("S", vec![phase("P", "high", &["t"])]);
    let newer = roadmap("S", vec![phase("P", "HIGH", &["t"])]);

    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(delta.modified_phases.len(), 1);
    let change = &delta.modified_phases[0];
    assert!(change.priority_changed.is_some());
    assert_eq!(change.metadata.priority_change, 0);
    assert_eq!(change.metadata.priority_level, BeforeAfter { before: 3, after: 3 });
}

#[test]
fn test_unknown_priority_scores_zero() {
    let older = roadmap("S", vec![phase("P", "critical", &["t"])]);
    let newer = roadmap("S", vec![phase("P", "Medium", &["t"])]);

    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(delta.modified_phases[0].metadata.priority_change, 2);
}

#[test]
fn test_dependencies_reordered_are_unchanged() {
    let mut a = phase("P", "low", &["t"]);
    a.dependencies = Some(strings(&["X", "Y"]));
    let mut b = a.clone();
    b.dependencies = Some(strings(&["Y", "X"]));

    let delta = compare_roadmaps(&roadmap("S", vec![a]), &roadmap("S", vec![b]));
    assert!(delta.modified_phases.is_empty());
}

#[test]
fn test_dependencies_added_and_removed() {
    let mut a = phase("P", "low", &["t"]);
    a.dependencies = Some(strings(&["X", "Y"]));
    let mut b = a.clone();
    b.dependencies = Some(strings(&["Y", "Z"]));

    let delta = compare_roadmaps(&roadmap("S", vec![a]), &roadmap("S", vec![b]));
    let deps = delta.modified_phases[0]
        .dependencies_changed
        .clone()
        .expect("dependencies should be reported as changed");
    assert_eq!(deps.added, strings(&["Z"]));
    assert_eq!(deps.removed, strings(&["X"]));
}

#[test]
fn test_dependencies_on_one_side_report_empty_detail() {
    let a = phase("P", "low", &["t"]);
    let mut b = a.clone();
    b.dependencies = Some(strings(&["X"]));

    let delta = compare_roadmaps(&roadmap("S", vec![a.clone()]), &roadmap("S", vec![b.clone()]));
    assert_eq!(
        delta.modified_phases[0].dependencies_changed,
        Some(DependencyChanges::default())
    );

    // And the other way around
    let delta = compare_roadmaps(&roadmap("S", vec![b]), &roadmap("S", vec![a]));
    assert_eq!(
        delta.modified_phases[0].dependencies_changed,
        Some(DependencyChanges::default())
    );
}

#[test]
fn test_empty_dependencies_differ_from_absent() {
    let a = phase("P", "low", &["t"]);
    let mut b = a.clone();
    b.dependencies = Some(Vec::new());

    let delta = compare_roadmaps(&roadmap("S", vec![a]), &roadmap("S", vec![b]));
    assert_eq!(delta.modified_phases.len(), 1);
}

#[test]
fn test_presence_matching_collapses_duplicates() {
    let older = roadmap("S", vec![phase("P", "low", &["Add tests", "Add tests"])]);
    let newer = roadmap("S", vec![phase("P", "low", &["Add tests"])]);

    let delta = compare_roadmaps(&older, &newer);
    // Same text on both sides: nothing removed under presence semantics.
    assert!(delta.modified_phases.is_empty());
    assert_eq!(delta.statistics.removed_tasks_count, 0);
}

#[test]
fn test_multiset_matching_counts_duplicates() {
    let older = roadmap("S", vec![phase("P", "low", &["Add tests", "Add tests", "Ship"])]);
    let newer = roadmap("S", vec![phase("P", "low", &["Ship", "Add tests", "Ship"])]);

    let delta = compare_roadmaps_with(&older, &newer, &CompareOptions::multiset());
    assert_eq!(delta.modified_phases.len(), 1);
    let changes = &delta.modified_phases[0].task_changes;
    assert_eq!(changes.removed, strings(&["Add tests"]));
    assert_eq!(changes.added, strings(&["Ship"]));
    assert_eq!(changes.unchanged, strings(&["Add tests", "Ship"]));
    assert_eq!(delta.statistics.added_tasks_count, 1);
    assert_eq!(delta.statistics.removed_tasks_count, 1);
}

#[test]
fn test_multiset_dependencies_with_same_sorted_lists_are_unchanged() {
    let mut a = phase("P", "low", &["t"]);
    a.dependencies = Some(strings(&["X", "X", "Y"]));
    let mut b = a.clone();
    b.dependencies = Some(strings(&["Y", "X", "X"]));

    let delta = compare_roadmaps_with(
        &roadmap("S", vec![a]),
        &roadmap("S", vec![b]),
        &CompareOptions::multiset(),
    );
    assert!(delta.modified_phases.is_empty());
}

#[test]
fn test_dependency_multiplicity_change() {
    let mut a = phase("P", "low", &["t"]);
    a.dependencies = Some(strings(&["X", "X"]));
    let mut b = a.clone();
    b.dependencies = Some(strings(&["X"]));
    let older = roadmap("S", vec![a]);
    let newer = roadmap("S", vec![b]);

    let delta = compare_roadmaps_with(&older, &newer, &CompareOptions::multiset());
    let deps = delta.modified_phases[0]
        .dependencies_changed
        .clone()
        .expect("dependencies should be reported as changed");
    assert_eq!(deps.removed, strings(&["X"]));
    assert!(deps.added.is_empty());

    // Presence matching still sees differing sorted lists but no detail
    let delta = compare_roadmaps(&older, &newer);
    assert_eq!(
        delta.modified_phases[0].dependencies_changed,
        Some(DependencyChanges::default())
    );
}

#[test]
fn test_duplicate_phase_names_use_first_match() {
    let older = roadmap(
        "S",
        vec![phase("P", "low", &["first"]), phase("P", "high", &["second"])],
    );
    let newer = roadmap("S", vec![phase("P", "low", &["first"])]);

    let delta = compare_roadmaps(&older, &newer);
    // The first "P" of the older roadmap is compared and matches exactly.
    assert!(delta.modified_phases.is_empty());
    assert!(delta.removed_phases.is_empty());
}

#[test]
fn test_compare_does_not_mutate_inputs() {
    let older = sample_roadmap();
    let newer = roadmap("Other", vec![phase("Design", "low", &["Wireframes"])]);
    let older_copy = older.clone();
    let newer_copy = newer.clone();

    let _ = compare_roadmaps(&older, &newer);
    assert_eq!(older, older_copy);
    assert_eq!(newer, newer_copy);
}

#[test]
fn test_compare_phases_always_computes_metadata() {
    let a = phase("P", "medium", &[]);
    let change = compare_phases(&a, &a, TaskMatching::Presence);
    assert!(!change.has_changes());
    assert_eq!(change.metadata.task_count, BeforeAfter { before: 0, after: 0 });
    assert_eq!(change.metadata.task_change_percentage, 0.0);
    assert_eq!(change.metadata.priority_level, BeforeAfter { before: 2, after: 2 });
}

#[test]
fn test_delta_serializes_with_camel_case_fields() {
    let older = roadmap("S1", vec![phase("P1", "low", &["t1", "t2"])]);
    let newer = roadmap("S2", vec![phase("P1", "high", &["t1", "t3"])]);

    let value = serde_json::to_value(compare_roadmaps(&older, &newer)).unwrap();
    assert_eq!(value["summaryChanged"], true);
    assert_eq!(value["modifiedPhases"][0]["priorityChanged"]["from"], "low");
    assert_eq!(value["modifiedPhases"][0]["taskChanges"]["added"][0], "t3");
    assert_eq!(value["modifiedPhases"][0]["metadata"]["priorityChange"], 2);
    assert_eq!(value["statistics"]["taskCount"]["before"], 2);
    assert!(value["modifiedPhases"][0]["durationChanged"].is_null());
}
