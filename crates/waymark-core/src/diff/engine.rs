//! Roadmap comparison engine.
//!
//! The entry points are [`compare_roadmaps`] and [`compare_roadmaps_with`].
//! Both are pure: they only read their arguments and allocate a fresh
//! [`RoadmapDelta`].

use std::collections::{HashMap, HashSet};

use crate::diff::model::{
    BeforeAfter, CompareOptions, DeltaStatistics, DependencyChanges, FieldChange, PhaseChange,
    PhaseChangeMetadata, RoadmapDelta, TaskChanges, TaskMatching,
};
use crate::models::{Phase, Roadmap};

/// Compare two roadmap versions using presence matching for tasks.
///
/// Phases are matched by name. If a roadmap repeats a phase name, the first
/// phase with that name is the one compared.
///
/// ```rust
/// use waymark_core::{diff::compare_roadmaps, models::Roadmap};
///
/// let roadmap = Roadmap::default();
/// let delta = compare_roadmaps(&roadmap, &roadmap);
/// assert!(delta.is_empty());
/// assert_eq!(delta.statistics.change_percentage, 0.0);
/// ```
pub fn compare_roadmaps(older: &Roadmap, newer: &Roadmap) -> RoadmapDelta {
    compare_roadmaps_with(older, newer, &CompareOptions::default())
}

/// Compare two roadmap versions with explicit options.
pub fn compare_roadmaps_with(
    older: &Roadmap,
    newer: &Roadmap,
    options: &CompareOptions,
) -> RoadmapDelta {
    let older_names = phase_names(older);
    let newer_names = phase_names(newer);

    let added_phases: Vec<Phase> = newer
        .phases
        .iter()
        .filter(|phase| !older_names.contains(phase.name.as_str()))
        .cloned()
        .collect();

    let removed_phases: Vec<Phase> = older
        .phases
        .iter()
        .filter(|phase| !newer_names.contains(phase.name.as_str()))
        .cloned()
        .collect();

    // Distinct names of the older roadmap, first occurrence wins.
    let mut visited = HashSet::with_capacity(older.phases.len());
    let modified_phases: Vec<PhaseChange> = older
        .phases
        .iter()
        .map(|phase| phase.name.as_str())
        .filter(|name| visited.insert(*name) && newer_names.contains(name))
        .filter_map(|name| {
            let before = older.phase(name)?;
            let after = newer.phase(name)?;
            Some(compare_phases(before, after, options.task_matching))
        })
        .filter(PhaseChange::has_changes)
        .collect();

    let task_count = BeforeAfter {
        before: older.task_count(),
        after: newer.task_count(),
    };

    let added_tasks_count = added_phases
        .iter()
        .map(|phase| phase.tasks.len())
        .sum::<usize>()
        + modified_phases
            .iter()
            .map(|change| change.task_changes.added.len())
            .sum::<usize>();

    let removed_tasks_count = removed_phases
        .iter()
        .map(|phase| phase.tasks.len())
        .sum::<usize>()
        + modified_phases
            .iter()
            .map(|change| change.task_changes.removed.len())
            .sum::<usize>();

    let statistics = DeltaStatistics {
        phase_count: BeforeAfter {
            before: older.phases.len(),
            after: newer.phases.len(),
        },
        task_count,
        added_tasks_count,
        removed_tasks_count,
        change_percentage: percentage(added_tasks_count + removed_tasks_count, task_count.before),
    };

    RoadmapDelta {
        added_phases,
        removed_phases,
        modified_phases,
        summary_changed: older.summary != newer.summary,
        statistics,
    }
}

/// Compare two versions of the same phase.
///
/// Metadata is always filled in, whether or not anything changed.
pub fn compare_phases(before: &Phase, after: &Phase, matching: TaskMatching) -> PhaseChange {
    let task_changes = list_delta(&before.tasks, &after.tasks, matching);

    let priority_changed = field_change(&before.priority, &after.priority);
    let duration_changed = field_change(&before.duration, &after.duration);
    let description_changed = before.description != after.description;

    let dependencies_changed = match (&before.dependencies, &after.dependencies) {
        (Some(old), Some(new)) => {
            if sorted(old) == sorted(new) {
                None
            } else {
                let delta = list_delta(old, new, matching);
                Some(DependencyChanges {
                    added: delta.added,
                    removed: delta.removed,
                })
            }
        }
        (None, None) => None,
        // Declared on one side only: reported as changed without detail.
        _ => Some(DependencyChanges::default()),
    };

    let level_before = before.priority_level();
    let level_after = after.priority_level();

    let metadata = PhaseChangeMetadata {
        task_count: BeforeAfter {
            before: before.tasks.len(),
            after: after.tasks.len(),
        },
        task_change_percentage: percentage(
            task_changes.added.len() + task_changes.removed.len(),
            before.tasks.len(),
        ),
        priority_level: BeforeAfter {
            before: level_before,
            after: level_after,
        },
        priority_change: level_after - level_before,
    };

    PhaseChange {
        name: before.name.clone(),
        task_changes,
        priority_changed,
        duration_changed,
        description_changed,
        dependencies_changed,
        metadata,
    }
}

fn phase_names(roadmap: &Roadmap) -> HashSet<&str> {
    roadmap
        .phases
        .iter()
        .map(|phase| phase.name.as_str())
        .collect()
}

fn field_change(from: &str, to: &str) -> Option<FieldChange> {
    (from != to).then(|| FieldChange {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn sorted(items: &[String]) -> Vec<&str> {
    let mut items: Vec<&str> = items.iter().map(String::as_str).collect();
    items.sort_unstable();
    items
}

/// Percentage of `part` relative to `whole`, 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Split two ordered lists into added, removed and unchanged entries.
///
/// `added` follows the order of `after`; `removed` and `unchanged` follow
/// the order of `before`.
fn list_delta(before: &[String], after: &[String], matching: TaskMatching) -> TaskChanges {
    match matching {
        TaskMatching::Presence => {
            let before_set: HashSet<&str> = before.iter().map(String::as_str).collect();
            let after_set: HashSet<&str> = after.iter().map(String::as_str).collect();

            let (unchanged, removed): (Vec<String>, Vec<String>) = before
                .iter()
                .cloned()
                .partition(|task| after_set.contains(task.as_str()));
            let added = after
                .iter()
                .filter(|task| !before_set.contains(task.as_str()))
                .cloned()
                .collect();

            TaskChanges {
                added,
                removed,
                unchanged,
            }
        }
        TaskMatching::Multiset => {
            let mut available = occurrences(after);
            let mut unchanged = Vec::new();
            let mut removed = Vec::new();
            for task in before {
                match available.get_mut(task.as_str()) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        unchanged.push(task.clone());
                    }
                    _ => removed.push(task.clone()),
                }
            }

            let mut available = occurrences(before);
            let mut added = Vec::new();
            for task in after {
                match available.get_mut(task.as_str()) {
                    Some(count) if *count > 0 => *count -= 1,
                    _ => added.push(task.clone()),
                }
            }

            TaskChanges {
                added,
                removed,
                unchanged,
            }
        }
    }
}

fn occurrences(items: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    counts
}
