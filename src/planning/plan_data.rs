use super::models::{Metrics, ProductionPhase, Project, TeamMember};
use crate::error::PlanError;
use crate::overrides::OverrideStore;
use serde::{Deserialize, Serialize};

/// Seed data for the studio: roster, projects, cost model and pipeline.
///
/// Every section is optional in the TOML file. A missing `[metrics]` table
/// falls back to [`Metrics::default`] and missing `[[phases]]` to
/// [`ProductionPhase::default_pipeline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanData {
    pub metrics: Metrics,
    pub team: Vec<TeamMember>,
    pub projects: Vec<Project>,
    pub phases: Vec<ProductionPhase>,
}

impl Default for PlanData {
    fn default() -> Self {
        Self {
            metrics: Metrics::default(),
            team: Vec::new(),
            projects: Vec::new(),
            phases: ProductionPhase::default_pipeline(),
        }
    }
}

impl PlanData {
    /// Create an empty plan with default metrics and pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a team member by id
    pub fn find_member(&self, id: &str) -> Option<&TeamMember> {
        self.team.iter().find(|m| m.id == id)
    }

    /// Find a project by id
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find a team member by id, or report the unknown id
    pub fn member(&self, id: &str) -> Result<&TeamMember, PlanError> {
        self.find_member(id)
            .ok_or_else(|| PlanError::unresolved("team member", id))
    }

    /// Find a project by id, or report the unknown id
    pub fn project(&self, id: &str) -> Result<&Project, PlanError> {
        self.find_project(id)
            .ok_or_else(|| PlanError::unresolved("project", id))
    }

    /// Projects with their stored overrides applied, in seed order
    pub fn effective_projects(&self, overrides: &dyn OverrideStore) -> Vec<Project> {
        self.projects
            .iter()
            .map(|p| match overrides.get(&p.id) {
                Some(patch) => p.apply_patch(&patch),
                None => p.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::MemoryOverrideStore;
    use crate::planning::models::ProjectPatch;

    fn plan() -> PlanData {
        PlanData {
            team: vec![TeamMember {
                id: "tm-1".to_string(),
                ..Default::default()
            }],
            projects: vec![Project {
                id: "atlas".to_string(),
                target_words: 10_000,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_reports_unknown_ids() {
        let data = plan();
        assert!(data.member("tm-1").is_ok());
        assert_eq!(
            data.member("tm-9").unwrap_err(),
            PlanError::UnresolvedReference {
                kind: "team member",
                id: "tm-9".to_string()
            }
        );
        assert!(data.project("atlas").is_ok());
        assert!(data.project("zine").is_err());
    }

    #[test]
    fn test_effective_projects_applies_overrides() {
        let data = plan();
        let mut store = MemoryOverrideStore::new();
        store
            .set(
                "atlas",
                ProjectPatch {
                    target_words: Some(12_000),
                    ..Default::default()
                },
            )
            .unwrap();

        let projects = data.effective_projects(&store);
        assert_eq!(projects[0].target_words, 12_000);
        assert_eq!(data.projects[0].target_words, 10_000);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let data: PlanData = toml::from_str("").unwrap();
        assert_eq!(data.metrics, Metrics::default());
        assert_eq!(data.phases.len(), 4);
        assert!(data.team.is_empty());
    }
}
