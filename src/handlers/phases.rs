//! Production schedule handler

use crate::Planner;
use crate::formatting;
use crate::planning::{self, local_date_today};
use crate::validation;
use anyhow::{Context, Result};

impl Planner {
    /// Chains phase estimates for one project through the production pipeline.
    pub fn handle_phases(&self, project_id: &str, start_date: Option<&str>) -> Result<String> {
        let start = validation::parse_optional_date(start_date)?.unwrap_or_else(local_date_today);

        let seed = self
            .data
            .project(project_id)
            .with_context(|| validation::format_invalid_project_error(project_id, &self.data))?;
        let project = match self.overrides.get(project_id) {
            Some(patch) => seed.apply_patch(&patch),
            None => seed.clone(),
        };

        let phases = planning::estimate_phases(&project, &self.data.phases, &self.data.team, start);
        Ok(formatting::format_phases(&project, &phases))
    }
}
