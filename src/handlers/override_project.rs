//! Project override handler

use crate::Planner;
use crate::planning::ProjectPatch;
use crate::validation;
use anyhow::{Context, Result, bail};

impl Planner {
    /// Stores field overrides for a project.
    ///
    /// The project and, when given, the new owner must exist. Manual hours must
    /// be a finite, non-negative number.
    pub fn handle_override(&mut self, project_id: &str, patch: ProjectPatch) -> Result<String> {
        self.data
            .project(project_id)
            .with_context(|| validation::format_invalid_project_error(project_id, &self.data))?;

        if let Some(ref owner) = patch.assigned_to {
            self.data
                .member(owner)
                .with_context(|| validation::format_invalid_member_error(owner, &self.data))?;
        }

        if let Some(hours) = patch.manual_hours
            && (!hours.is_finite() || hours < 0.0)
        {
            bail!(
                "Invalid manual hours '{}'. Use a number of hours greater than or equal to 0",
                hours
            );
        }

        if patch.is_empty() {
            return Ok(format!("No changes for project {}", project_id));
        }

        self.overrides.set(project_id, patch)?;
        tracing::info!(project = project_id, "stored project override");
        Ok(format!("Project {} updated successfully", project_id))
    }
}
