//! Chained estimates across the production pipeline

use super::estimator::{EstimatorResult, estimate};
use super::models::{Activity, ProductionPhase, Project, TeamMember};
use chrono::NaiveDate;
use serde::Serialize;

/// Generic drafting speed used when no member fits a phase
pub const DEFAULT_WORDS_PER_HOUR: f64 = 500.0;

/// Generic chaos buffer used when no member fits a phase
pub const DEFAULT_BUFFER_PERCENT: f64 = 15.0;

/// Estimate for one phase of a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseEstimate {
    pub phase: String,
    pub start_date: NaiveDate,
    /// `None` when the phase could not be estimated
    pub result: Option<EstimatorResult>,
}

impl PhaseEstimate {
    pub fn hours(&self) -> f64 {
        self.result.as_ref().map(|r| r.hours).unwrap_or(0.0)
    }

    pub fn end_date(&self) -> NaiveDate {
        self.result
            .as_ref()
            .map(|r| r.target_date)
            .unwrap_or(self.start_date)
    }
}

/// Pick the member who owns a phase.
///
/// Drafting goes to the project's assignee when they are on the roster. Other
/// activities go to the first roster member with the activity's natural role.
fn phase_owner<'a>(
    project: &Project,
    activity: Activity,
    roster: &'a [TeamMember],
) -> Option<&'a TeamMember> {
    if activity == Activity::Drafting
        && let Some(owner) = project
            .assigned_to
            .as_deref()
            .and_then(|id| roster.iter().find(|m| m.id == id))
    {
        return Some(owner);
    }
    roster.iter().find(|m| m.role == activity.natural_role())
}

/// Estimate every phase of a project in order.
///
/// Each phase starts on the previous phase's target date. A phase whose
/// estimate fails is kept with no result and does not advance the date.
pub fn estimate_phases(
    project: &Project,
    phases: &[ProductionPhase],
    roster: &[TeamMember],
    start: NaiveDate,
) -> Vec<PhaseEstimate> {
    let mut cursor = start;
    let mut estimates = Vec::with_capacity(phases.len());

    for phase in phases {
        let owner = phase_owner(project, phase.activity, roster);
        let result = match estimate(
            phase.activity,
            project.target_words,
            DEFAULT_WORDS_PER_HOUR,
            DEFAULT_BUFFER_PERCENT,
            phase.daily_hours,
            Some(cursor),
            owner,
        ) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(
                    project = %project.id,
                    phase = %phase.name,
                    error = %e,
                    "phase counted as 0 hours"
                );
                None
            }
        };

        let phase_estimate = PhaseEstimate {
            phase: phase.name.clone(),
            start_date: cursor,
            result,
        };
        cursor = phase_estimate.end_date();
        estimates.push(phase_estimate);
    }

    estimates
}
