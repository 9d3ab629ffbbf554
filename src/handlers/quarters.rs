//! Quarter and stakeholder view handlers

use crate::Planner;
use crate::formatting;
use crate::planning;
use anyhow::Result;

impl Planner {
    /// Groups projects by calendar quarter.
    pub fn handle_quarters(&self) -> Result<String> {
        let projects = self.effective_projects();
        let buckets = planning::bucket_by_quarter(&projects);
        Ok(formatting::format_quarters(&buckets, &self.data.team))
    }

    /// Sums demand per stakeholder under the studio cost model.
    pub fn handle_stakeholders(&self) -> Result<String> {
        let projects = self.effective_projects();
        let demand = planning::calculate_stakeholder_demand(&projects, &self.data.metrics);
        Ok(formatting::format_stakeholders(&demand))
    }
}
