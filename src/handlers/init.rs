//! Plan file initialization

use crate::Planner;
use crate::planning::{Metrics, PlanData, ProductionPhase, Project, Role, TeamMember};
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Starter roster and projects written by `init`
pub fn sample_plan() -> PlanData {
    let member = |id: &str, name: &str, role: Role, speed: f64, buffer: f64, weekly: f64, rate: f64| {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role,
            draft_speed: speed,
            chaos_buffer: buffer,
            weekly_capacity: weekly,
            hourly_rate: rate,
        }
    };

    PlanData {
        metrics: Metrics::default(),
        team: vec![
            member("tm-writer", "Lead Writer", Role::Writer, 500.0, 20.0, 30.0, 35.0),
            member("tm-editor", "Managing Editor", Role::Editor, 1500.0, 10.0, 25.0, 40.0),
            member("tm-design", "Designer", Role::Designer, 4000.0, 15.0, 20.0, 45.0),
        ],
        projects: vec![
            Project {
                id: "field-guide".to_string(),
                name: "Field Guide, 2nd Edition".to_string(),
                target_words: 50_000,
                assigned_to: Some("tm-writer".to_string()),
                status: "drafting".to_string(),
                client_status: "In progress".to_string(),
                launch_window: "Q3 2026".to_string(),
                budget_type: "fixed".to_string(),
                revenue_potential: "high".to_string(),
                stakeholder: Some("Trade".to_string()),
                ..Default::default()
            },
            Project {
                id: "annual-report".to_string(),
                name: "Annual Report".to_string(),
                target_words: 12_000,
                manual_hours: Some(40.0),
                assigned_to: Some("tm-editor".to_string()),
                status: "planning".to_string(),
                client_status: "Scheduled".to_string(),
                launch_window: "Q4 2026".to_string(),
                target_date: NaiveDate::from_ymd_opt(2026, 12, 1),
                budget_type: "hourly".to_string(),
                revenue_potential: "medium".to_string(),
                stakeholder: Some("Client".to_string()),
                ..Default::default()
            },
            Project {
                id: "style-guide".to_string(),
                name: "House Style Guide".to_string(),
                target_words: 8_000,
                status: "backlog".to_string(),
                client_status: "Not started".to_string(),
                launch_window: "TBD".to_string(),
                budget_type: "internal".to_string(),
                dependency: Some("Annual Report".to_string()),
                revenue_potential: "low".to_string(),
                ..Default::default()
            },
        ],
        phases: ProductionPhase::default_pipeline(),
    }
}

impl Planner {
    /// Writes a starter plan to the plan file. Refuses to overwrite.
    pub fn handle_init(&mut self) -> Result<String> {
        if self.storage.path().exists() {
            bail!(
                "Plan file {} already exists; remove it first to start over",
                self.storage.path().display()
            );
        }
        let data = sample_plan();
        self.storage.save(&data)?;
        self.data = data;
        Ok(format!(
            "Created plan {} with {} team member(s) and {} project(s)",
            self.storage.path().display(),
            self.data.team.len(),
            self.data.projects.len()
        ))
    }
}
