//! Common fixtures for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use studio_plan::{Planner, Project, Role, TeamMember};
use tempfile::NamedTempFile;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a team member with the given speed, buffer and weekly capacity
pub fn create_member(id: &str, role: Role, speed: f64, buffer: f64, weekly: f64) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: format!("Member {}", id),
        role,
        draft_speed: speed,
        chaos_buffer: buffer,
        weekly_capacity: weekly,
        hourly_rate: 25.0,
    }
}

/// Create a project with minimal fields
pub fn create_project(id: &str, words: u32, assigned_to: Option<&str>) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        target_words: words,
        assigned_to: assigned_to.map(str::to_string),
        ..Default::default()
    }
}

/// Plan file used by planner tests
pub const SAMPLE_PLAN: &str = r#"
[metrics]
writing_rate = 1.2
words_per_page = 250.0
layout_hours_per_page = 0.1
pm_overhead_percent = 0.1
contingency_percent = 0.1
blended_hourly_rate = 20.0

[[team]]
id = "ana"
name = "Ana"
role = "writer"
draft_speed = 500.0
chaos_buffer = 20.0
weekly_capacity = 40.0
hourly_rate = 30.0

[[team]]
id = "ben"
name = "Ben"
role = "editor"
draft_speed = 2000.0
chaos_buffer = 0.0
weekly_capacity = 0.0
hourly_rate = 40.0

[[projects]]
id = "atlas"
name = "Atlas"
target_words = 50000
assigned_to = "ana"
launch_window = "Q3 2026"
stakeholder = "Trade"

[[projects]]
id = "brochure"
name = "Brochure"
target_words = 4000
manual_hours = 10.0
assigned_to = "ben"
target_date = "2026-11-20"
stakeholder = "Client"

[[projects]]
id = "memoir"
name = "Memoir"
target_words = 20000
assigned_to = "ghost"
launch_window = "Someday"
"#;

/// Write a plan to a temporary file and open a planner on it
pub fn get_test_planner(plan: &str) -> (Planner, NamedTempFile) {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(plan.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    let planner = Planner::open(temp_file.path(), None).unwrap();
    (planner, temp_file)
}
