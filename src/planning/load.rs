//! Per-person annual load aggregation

use super::estimator::{add_working_days_from, buffered_hours, whole_days};
use super::models::{Project, Role, TeamMember, local_date_today};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Working weeks per year used for annual capacity. Fixed for every member so
/// load percentages stay comparable.
pub const WORKING_WEEKS_PER_YEAR: f64 = 48.0;

/// Working days per week used to turn weekly capacity into daily hours
const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Owner label for projects without a resolvable assignee
pub const UNASSIGNED: &str = "Unassigned";

/// One project's contribution to a member's load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectLoad {
    pub project_id: String,
    pub name: String,
    pub hours: f64,
}

/// Committed hours against annual capacity for one team member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriterLoad {
    pub member_id: String,
    pub name: String,
    pub role: Role,
    pub total_hours: f64,
    /// Weekly capacity × 48
    pub annual_capacity: f64,
    /// Committed hours ÷ annual capacity × 100; 0 when capacity is 0
    pub percent: f64,
    /// Hourly rate × committed hours
    pub cost: f64,
    /// First weekday by which the committed hours are worked off
    pub clear_date: Option<NaiveDate>,
    pub projects: Vec<ProjectLoad>,
}

/// Effort a member would spend on a project.
///
/// `manual_hours` wins when set. Otherwise the member's draft speed and chaos
/// buffer are applied to the project's target words; an unusable speed yields
/// 0 hours.
pub fn project_effort(project: &Project, member: &TeamMember) -> f64 {
    if let Some(hours) = project.manual_hours {
        if hours.is_finite() && hours >= 0.0 {
            return hours;
        }
        tracing::warn!(project = %project.id, hours, "ignoring invalid manual hours");
    }

    match buffered_hours(project.target_words, member.draft_speed, member.chaos_buffer) {
        Ok(hours) => hours,
        Err(e) => {
            tracing::warn!(
                project = %project.id,
                member = %member.id,
                error = %e,
                "counting project as 0 hours"
            );
            0.0
        }
    }
}

/// Load percentage with zero or invalid capacity mapped to 0
pub fn load_percent(total_hours: f64, annual_capacity: f64) -> f64 {
    if annual_capacity.is_finite() && annual_capacity > 0.0 {
        total_hours / annual_capacity * 100.0
    } else {
        0.0
    }
}

/// Aggregate project effort per team member, as of today.
///
/// See [`calculate_annual_load_as_of`].
pub fn calculate_annual_load(projects: &[Project], roster: &[TeamMember]) -> Vec<WriterLoad> {
    calculate_annual_load_as_of(projects, roster, local_date_today())
}

/// Aggregate project effort per team member.
///
/// The result follows roster order. Projects assigned to ids missing from the
/// roster are not counted for anyone; see [`unassigned_projects`].
pub fn calculate_annual_load_as_of(
    projects: &[Project],
    roster: &[TeamMember],
    as_of: NaiveDate,
) -> Vec<WriterLoad> {
    roster
        .iter()
        .map(|member| member_load(projects, member, as_of))
        .collect()
}

fn member_load(projects: &[Project], member: &TeamMember, as_of: NaiveDate) -> WriterLoad {
    let contributions: Vec<ProjectLoad> = projects
        .iter()
        .filter(|p| p.assigned_to.as_deref() == Some(member.id.as_str()))
        .map(|p| ProjectLoad {
            project_id: p.id.clone(),
            name: p.name.clone(),
            hours: project_effort(p, member),
        })
        .collect();

    let total_hours: f64 = contributions.iter().map(|c| c.hours).sum();
    let annual_capacity = member.weekly_capacity.max(0.0) * WORKING_WEEKS_PER_YEAR;
    let percent = load_percent(total_hours, annual_capacity);
    let cost = if member.hourly_rate.is_finite() {
        member.hourly_rate * total_hours
    } else {
        0.0
    };

    WriterLoad {
        member_id: member.id.clone(),
        name: member.name.clone(),
        role: member.role,
        total_hours,
        annual_capacity,
        percent,
        cost,
        clear_date: clear_date(total_hours, member.weekly_capacity, as_of),
        projects: contributions,
    }
}

fn clear_date(total_hours: f64, weekly_capacity: f64, as_of: NaiveDate) -> Option<NaiveDate> {
    if !weekly_capacity.is_finite() || weekly_capacity <= 0.0 {
        return None;
    }
    let daily = weekly_capacity / WORKING_DAYS_PER_WEEK;
    let days = total_hours / daily;
    if !days.is_finite() || days > f64::from(u32::MAX) {
        return None;
    }
    match add_working_days_from(as_of, whole_days(days) as u32, true) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(total_hours, weekly_capacity, error = %e, "no clear date");
            None
        }
    }
}

/// Sort loads by percentage, heaviest first
pub fn sort_by_load(loads: &mut [WriterLoad]) {
    loads.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(Ordering::Equal));
}

/// Projects whose owner is missing or not on the roster
pub fn unassigned_projects<'a>(projects: &'a [Project], roster: &[TeamMember]) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| match p.assigned_to.as_deref() {
            Some(id) => !roster.iter().any(|m| m.id == id),
            None => true,
        })
        .collect()
}

/// Display name of a project's owner, or [`UNASSIGNED`]
pub fn owner_name<'a>(project: &Project, roster: &'a [TeamMember]) -> &'a str {
    project
        .assigned_to
        .as_deref()
        .and_then(|id| roster.iter().find(|m| m.id == id))
        .map(|m| m.name.as_str())
        .unwrap_or(UNASSIGNED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, weekly_capacity: f64) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: id.to_uppercase(),
            role: Role::Writer,
            draft_speed: 500.0,
            chaos_buffer: 0.0,
            weekly_capacity,
            hourly_rate: 30.0,
        }
    }

    #[test]
    fn test_load_percent_zero_capacity() {
        assert_eq!(load_percent(120.0, 0.0), 0.0);
        assert_eq!(load_percent(120.0, f64::NAN), 0.0);
        assert_eq!(load_percent(96.0, 1920.0), 5.0);
    }

    #[test]
    fn test_project_effort_prefers_manual_hours() {
        let project = Project {
            id: "p".to_string(),
            target_words: 50_000,
            manual_hours: Some(12.5),
            ..Default::default()
        };
        assert_eq!(project_effort(&project, &member("a", 40.0)), 12.5);
    }

    #[test]
    fn test_project_effort_zero_speed_is_zero() {
        let project = Project {
            id: "p".to_string(),
            target_words: 50_000,
            ..Default::default()
        };
        let mut m = member("a", 40.0);
        m.draft_speed = 0.0;
        assert_eq!(project_effort(&project, &m), 0.0);
    }

    #[test]
    fn test_clear_date_steps_working_days() {
        // 40h at 8h/day = 5 working days from Monday 2026-01-05
        let date = clear_date(40.0, 40.0, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 12));
        assert_eq!(clear_date(40.0, 0.0, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()), None);
    }

    #[test]
    fn test_clear_date_past_calendar_range_is_none() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(clear_date(2e9, 40.0, as_of), None);
        assert_eq!(clear_date(1e12, 40.0, as_of), None);
    }
}
