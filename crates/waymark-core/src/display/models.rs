//! Display implementations for domain models.
//!
//! Everything renders as Markdown: a heading, a metadata list, then content.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Phase, Roadmap, RoadmapHistoryItem, RoadmapStatus, RoadmapSummary};

impl fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Roadmap {
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.summary.is_empty() {
            writeln!(f, "{}", self.summary)?;
            writeln!(f)?;
        }

        if let Some(generated) = &self.generated_date {
            writeln!(f, "- Generated: {}", LocalDateTime(generated))?;
            writeln!(f)?;
        }

        if self.phases.is_empty() {
            writeln!(f, "No phases in this roadmap.")?;
        } else {
            for phase in &self.phases {
                write!(f, "{phase}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Roadmap")?;
        writeln!(f)?;
        self.fmt_body(f)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({}, {})", self.name, self.priority, self.duration)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        if let Some(dependencies) = &self.dependencies {
            if !dependencies.is_empty() {
                writeln!(f, "- Depends on: {}", dependencies.join(", "))?;
                writeln!(f)?;
            }
        }

        for task in &self.tasks {
            writeln!(f, "- [ ] {task}")?;
        }
        if !self.tasks.is_empty() {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for RoadmapHistoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        if let Some(author) = &self.created_by {
            writeln!(f, "- Created by: {author}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f)?;
        self.roadmap_data.fmt_body(f)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(
            f,
            "- **Contents**: {} phases, {} tasks",
            self.phase_count, self.task_count
        )?;
        if let Some(author) = &self.created_by {
            writeln!(f, "- **Created by**: {author}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
