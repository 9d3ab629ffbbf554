use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Role a team member plays in the studio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Drafts manuscripts
    #[default]
    Writer,
    /// Edits and proofreads drafts
    Editor,
    /// Lays out pages for print and digital
    Designer,
    /// Coordinates schedules and clients
    Producer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "writer" => Ok(Role::Writer),
            "editor" => Ok(Role::Editor),
            "designer" => Ok(Role::Designer),
            "producer" => Ok(Role::Producer),
            _ => Err(format!(
                "Invalid role '{}'. Valid options are: writer, editor, designer, producer",
                s
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Writer => "writer",
            Role::Editor => "editor",
            Role::Designer => "designer",
            Role::Producer => "producer",
        };
        f.write_str(label)
    }
}

/// Kind of work being estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Drafting,
    Editing,
    Proofreading,
    Layout,
}

impl Activity {
    /// The role that normally performs this activity
    pub fn natural_role(self) -> Role {
        match self {
            Activity::Drafting => Role::Writer,
            Activity::Editing | Activity::Proofreading => Role::Editor,
            Activity::Layout => Role::Designer,
        }
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drafting" | "draft" => Ok(Activity::Drafting),
            "editing" | "edit" => Ok(Activity::Editing),
            "proofreading" | "proof" => Ok(Activity::Proofreading),
            "layout" => Ok(Activity::Layout),
            _ => Err(format!(
                "Invalid activity '{}'. Valid options are: drafting, editing, proofreading, layout",
                s
            )),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Activity::Drafting => "drafting",
            Activity::Editing => "editing",
            Activity::Proofreading => "proofreading",
            Activity::Layout => "layout",
        };
        f.write_str(label)
    }
}

/// A publishing project tracked by the studio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Unique identifier (e.g., "field-guide-2e")
    pub id: String,
    pub name: String,
    /// Target manuscript length in words
    pub target_words: u32,
    /// Hand-entered effort; replaces the computed estimate everywhere downstream
    pub manual_hours: Option<f64>,
    /// Team member id of the owner
    pub assigned_to: Option<String>,
    /// Internal status label
    pub status: String,
    /// Status label shown to the client
    pub client_status: String,
    /// Free-text launch window (e.g., "Q3 2026", "Spring 2027")
    pub launch_window: String,
    /// Locked deadline. Re-estimation never moves it.
    pub target_date: Option<NaiveDate>,
    /// Free-text date shown on the dashboard; takes precedence for bucketing
    pub display_date: Option<String>,
    pub budget_type: String,
    /// Name of a project that must ship first
    pub dependency: Option<String>,
    pub revenue_potential: String,
    pub stakeholder: Option<String>,
}

impl Project {
    /// Whether the project has a locked deadline
    pub fn is_locked(&self) -> bool {
        self.target_date.is_some()
    }

    /// Return a copy of this project with the patch applied.
    ///
    /// Fields absent from the patch keep their current value. The id is never
    /// changed.
    pub fn apply_patch(&self, patch: &ProjectPatch) -> Project {
        let mut project = self.clone();
        if let Some(ref name) = patch.name {
            project.name = name.clone();
        }
        if let Some(words) = patch.target_words {
            project.target_words = words;
        }
        if let Some(hours) = patch.manual_hours {
            project.manual_hours = Some(hours);
        }
        if let Some(ref owner) = patch.assigned_to {
            project.assigned_to = Some(owner.clone());
        }
        if let Some(ref status) = patch.status {
            project.status = status.clone();
        }
        if let Some(ref status) = patch.client_status {
            project.client_status = status.clone();
        }
        if let Some(ref window) = patch.launch_window {
            project.launch_window = window.clone();
        }
        if let Some(date) = patch.target_date {
            project.target_date = Some(date);
        }
        if let Some(ref date) = patch.display_date {
            project.display_date = Some(date.clone());
        }
        if let Some(ref budget) = patch.budget_type {
            project.budget_type = budget.clone();
        }
        if let Some(ref dependency) = patch.dependency {
            project.dependency = Some(dependency.clone());
        }
        if let Some(ref revenue) = patch.revenue_potential {
            project.revenue_potential = revenue.clone();
        }
        if let Some(ref stakeholder) = patch.stakeholder {
            project.stakeholder = Some(stakeholder.clone());
        }
        project
    }
}

/// Field-level overrides for a project. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub target_words: Option<u32>,
    pub manual_hours: Option<f64>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub client_status: Option<String>,
    pub launch_window: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub display_date: Option<String>,
    pub budget_type: Option<String>,
    pub dependency: Option<String>,
    pub revenue_potential: Option<String>,
    pub stakeholder: Option<String>,
}

impl ProjectPatch {
    /// Merge a newer patch on top of this one. Fields set in `newer` win.
    pub fn merge(&mut self, newer: ProjectPatch) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if newer.$field.is_some() {
                    self.$field = newer.$field;
                })*
            };
        }
        take!(
            name,
            target_words,
            manual_hours,
            assigned_to,
            status,
            client_status,
            launch_window,
            target_date,
            display_date,
            budget_type,
            dependency,
            revenue_potential,
            stakeholder
        );
    }

    /// Whether the patch carries no overrides at all
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }
}

/// A member of the studio team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Drafting speed in words per hour
    pub draft_speed: f64,
    /// Extra time reserved for unplanned work, in percent (15.0 = 15%)
    pub chaos_buffer: f64,
    /// Hours available per week
    pub weekly_capacity: f64,
    /// Cost per hour
    pub hourly_rate: f64,
}

/// Studio-wide cost model used by the project analysis.
///
/// `pm_overhead_percent` and `contingency_percent` are fractions (0.1 = 10%),
/// unlike the chaos buffer which is expressed in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Writing hours per 1,000 words
    pub writing_rate: f64,
    pub words_per_page: f64,
    pub layout_hours_per_page: f64,
    pub pm_overhead_percent: f64,
    pub contingency_percent: f64,
    pub blended_hourly_rate: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            writing_rate: 1.2,
            words_per_page: 250.0,
            layout_hours_per_page: 0.1,
            pm_overhead_percent: 0.1,
            contingency_percent: 0.1,
            blended_hourly_rate: 20.0,
        }
    }
}

/// One step of the studio's production pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPhase {
    pub name: String,
    pub activity: Activity,
    /// Hours per day the phase owner spends on it
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
}

fn default_daily_hours() -> f64 {
    6.0
}

impl ProductionPhase {
    pub fn new(name: &str, activity: Activity) -> Self {
        Self {
            name: name.to_string(),
            activity,
            daily_hours: default_daily_hours(),
        }
    }

    /// The pipeline used when the plan file defines none
    pub fn default_pipeline() -> Vec<ProductionPhase> {
        vec![
            ProductionPhase::new("First draft", Activity::Drafting),
            ProductionPhase::new("Developmental edit", Activity::Editing),
            ProductionPhase::new("Proofread", Activity::Proofreading),
            ProductionPhase::new("Layout", Activity::Layout),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("Writer".parse::<Role>(), Ok(Role::Writer));
        assert_eq!(" EDITOR ".parse::<Role>(), Ok(Role::Editor));
        assert!("intern".parse::<Role>().is_err());
    }

    #[test]
    fn test_activity_natural_role() {
        assert_eq!(Activity::Drafting.natural_role(), Role::Writer);
        assert_eq!(Activity::Proofreading.natural_role(), Role::Editor);
        assert_eq!(Activity::Layout.natural_role(), Role::Designer);
        assert_eq!("proof".parse::<Activity>(), Ok(Activity::Proofreading));
    }

    #[test]
    fn test_apply_patch_returns_new_record() {
        let project = Project {
            id: "atlas".to_string(),
            name: "Atlas".to_string(),
            target_words: 40_000,
            ..Default::default()
        };
        let patch = ProjectPatch {
            target_words: Some(55_000),
            manual_hours: Some(120.0),
            ..Default::default()
        };

        let patched = project.apply_patch(&patch);
        assert_eq!(patched.id, "atlas");
        assert_eq!(patched.name, "Atlas");
        assert_eq!(patched.target_words, 55_000);
        assert_eq!(patched.manual_hours, Some(120.0));
        assert_eq!(project.target_words, 40_000);
        assert_eq!(project.manual_hours, None);
    }

    #[test]
    fn test_patch_merge_newer_fields_win() {
        let mut stored = ProjectPatch {
            name: Some("Old".to_string()),
            target_words: Some(10),
            ..Default::default()
        };
        stored.merge(ProjectPatch {
            name: Some("New".to_string()),
            status: Some("editing".to_string()),
            ..Default::default()
        });

        assert_eq!(stored.name.as_deref(), Some("New"));
        assert_eq!(stored.target_words, Some(10));
        assert_eq!(stored.status.as_deref(), Some("editing"));
        assert!(!stored.is_empty());
        assert!(ProjectPatch::default().is_empty());
    }

    #[test]
    fn test_metrics_defaults() {
        let metrics = Metrics::default();
        assert_eq!(metrics.writing_rate, 1.2);
        assert_eq!(metrics.words_per_page, 250.0);
        assert_eq!(metrics.blended_hourly_rate, 20.0);
    }
}
