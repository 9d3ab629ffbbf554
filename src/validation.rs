//! Validation helpers for command arguments
//!
//! Parses user-supplied text into engine types and builds error messages for
//! unknown project and team-member references.

use crate::planning::{Activity, PlanData, parse_date};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Parse and validate an activity name
///
/// # Arguments
/// * `activity_str` - Activity name (drafting, editing, proofreading, layout)
///
/// # Returns
/// Result containing the parsed Activity or an error listing the valid names
pub fn parse_activity(activity_str: &str) -> Result<Activity> {
    activity_str.parse::<Activity>().map_err(|e| anyhow!(e))
}

/// Parse an optional `YYYY-MM-DD` argument
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format, or `None`
///
/// # Returns
/// Result containing the parsed date (`None` when no argument was given) or error
pub fn parse_optional_date(date_str: Option<&str>) -> Result<Option<NaiveDate>> {
    match date_str {
        Some(s) => Ok(Some(parse_date("date", s).map_err(|_| {
            anyhow!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2026-03-15')",
                s
            )
        })?)),
        None => Ok(None),
    }
}

/// Format an error message for an unknown project with the available ids
///
/// # Arguments
/// * `project_id` - The project id that was not found
/// * `data` - Plan data to list existing projects from
///
/// # Returns
/// Error message naming the id and listing the available projects
pub fn format_invalid_project_error(project_id: &str, data: &PlanData) -> String {
    if data.projects.is_empty() {
        format!(
            "Project '{}' does not exist. The plan has no projects yet.",
            project_id
        )
    } else {
        let ids: Vec<&str> = data.projects.iter().map(|p| p.id.as_str()).collect();
        format!(
            "Project '{}' does not exist.\nAvailable projects: {}",
            project_id,
            ids.join(", ")
        )
    }
}

/// Format an error message for an unknown team member with the available ids
///
/// # Arguments
/// * `member_id` - The team member id that was not found
/// * `data` - Plan data to list existing team members from
pub fn format_invalid_member_error(member_id: &str, data: &PlanData) -> String {
    if data.team.is_empty() {
        format!(
            "Team member '{}' does not exist. The plan has no team members yet.",
            member_id
        )
    } else {
        let ids: Vec<&str> = data.team.iter().map(|m| m.id.as_str()).collect();
        format!(
            "Team member '{}' does not exist.\nAvailable team members: {}",
            member_id,
            ids.join(", ")
        )
    }
}
