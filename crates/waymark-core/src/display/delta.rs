//! Human-readable rendering of a [`RoadmapDelta`].
//!
//! The rendering is informational only; consumers that need the data should
//! serialize the delta as JSON instead.

use std::fmt;

use crate::diff::{PhaseChange, RoadmapDelta};

impl fmt::Display for RoadmapDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No changes detected.");
        }

        let stats = &self.statistics;
        writeln!(f, "# Roadmap Changes")?;
        writeln!(f)?;
        writeln!(f, "| | Before | After |")?;
        writeln!(f, "|---|---|---|")?;
        writeln!(
            f,
            "| Phases | {} | {} |",
            stats.phase_count.before, stats.phase_count.after
        )?;
        writeln!(
            f,
            "| Tasks | {} | {} |",
            stats.task_count.before, stats.task_count.after
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "**{} added, {} removed** ({:.1}% change)",
            stats.added_tasks_count, stats.removed_tasks_count, stats.change_percentage
        )?;
        writeln!(f)?;

        if self.summary_changed {
            writeln!(f, "- Summary changed")?;
            writeln!(f)?;
        }

        if !self.added_phases.is_empty() {
            writeln!(f, "## Added Phases")?;
            writeln!(f)?;
            for phase in &self.added_phases {
                writeln!(f, "- {} ({} tasks)", phase.name, phase.tasks.len())?;
            }
            writeln!(f)?;
        }

        if !self.removed_phases.is_empty() {
            writeln!(f, "## Removed Phases")?;
            writeln!(f)?;
            for phase in &self.removed_phases {
                writeln!(f, "- {} ({} tasks)", phase.name, phase.tasks.len())?;
            }
            writeln!(f)?;
        }

        if !self.modified_phases.is_empty() {
            writeln!(f, "## Modified Phases")?;
            writeln!(f)?;
            for change in &self.modified_phases {
                write!(f, "{change}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PhaseChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;

        if let Some(priority) = &self.priority_changed {
            let direction = match self.metadata.priority_change {
                n if n > 0 => " (escalated)",
                n if n < 0 => " (lowered)",
                _ => "",
            };
            writeln!(
                f,
                "- Priority: {} → {}{direction}",
                priority.from, priority.to
            )?;
        }
        if let Some(duration) = &self.duration_changed {
            writeln!(f, "- Duration: {} → {}", duration.from, duration.to)?;
        }
        if self.description_changed {
            writeln!(f, "- Description changed")?;
        }
        if let Some(deps) = &self.dependencies_changed {
            if deps.added.is_empty() && deps.removed.is_empty() {
                writeln!(f, "- Dependencies changed")?;
            } else {
                for dep in &deps.added {
                    writeln!(f, "- Dependency added: {dep}")?;
                }
                for dep in &deps.removed {
                    writeln!(f, "- Dependency removed: {dep}")?;
                }
            }
        }
        for task in &self.task_changes.added {
            writeln!(f, "- Task added: {task}")?;
        }
        for task in &self.task_changes.removed {
            writeln!(f, "- Task removed: {task}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        diff::compare_roadmaps,
        models::{Phase, Roadmap},
    };

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

    #[test]
    fn test_no_changes() {
        let a = roadmap("S", vec![phase("P1", "low", &["t1"])]);
        assert_eq!(compare_roadmaps(&a, &a).to_string(), "No changes detected.\n");
    }

    #[test]
    fn test_delta_summary_sections() {
        let older = roadmap(
            "S1",
            vec![phase("P1", "low", &["t1", "t2"]), phase("Old", "medium", &["x"])],
        );
        let newer = roadmap(
            "S2",
            vec![phase("P1", "high", &["t1", "t3"]), phase("New", "low", &["y", "z"])],
        );

        let output = compare_roadmaps(&older, &newer).to_string();

        assert!(output.contains("| Phases | 2 | 2 |"));
        assert!(output.contains("| Tasks | 3 | 4 |"));
        assert!(output.contains("**3 added, 2 removed** (166.7% change)"));
        assert!(output.contains("- Summary changed"));
        assert!(output.contains("## Added Phases\n\n- New (2 tasks)"));
        assert!(output.contains("## Removed Phases\n\n- Old (1 tasks)"));
        assert!(output.contains("### P1"));
        assert!(output.contains("- Priority: low → high (escalated)"));
        assert!(output.contains("- Task added: t3"));
        assert!(output.contains("- Task removed: t2"));
    }
}
