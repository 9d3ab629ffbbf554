//! Annual load handler

use crate::Planner;
use crate::formatting;
use crate::planning::{self, local_date_today};
use crate::validation;
use anyhow::Result;

impl Planner {
    /// Reports per-person load, optionally sorted heaviest first.
    pub fn handle_load(&self, as_of: Option<&str>, sort: bool) -> Result<String> {
        let as_of = validation::parse_optional_date(as_of)?.unwrap_or_else(local_date_today);
        let projects = self.effective_projects();

        let mut loads = planning::calculate_annual_load_as_of(&projects, &self.data.team, as_of);
        if sort {
            planning::sort_by_load(&mut loads);
        }

        let unassigned = planning::unassigned_projects(&projects, &self.data.team);
        if !unassigned.is_empty() {
            tracing::warn!(count = unassigned.len(), "projects without a roster owner");
        }

        let mut out = formatting::format_loads(&loads);
        out.push_str(&formatting::format_unassigned(&unassigned));
        Ok(out)
    }
}
