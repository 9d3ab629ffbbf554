//! Grouping of projects by calendar quarter and by stakeholder

use super::analysis::project_total_hours;
use super::models::{Metrics, Project};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Stakeholder label for projects that name none
pub const UNSPECIFIED_STAKEHOLDER: &str = "Unspecified";

/// Bucket key for the quarter view.
///
/// Orders chronologically, with `Ongoing` after every dated quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QuarterLabel {
    Quarter { year: i32, quarter: u32 },
    Ongoing,
}

impl QuarterLabel {
    pub fn from_date(date: NaiveDate) -> Self {
        QuarterLabel::Quarter {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    /// Parse a free-text date or launch window.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM`, `Q3 2026`, `2026 Q3`, `2026-Q3`,
    /// `March 2026` and `Mar 2026`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(Self::from_date(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
            return Some(Self::from_date(date));
        }

        let mut year = None;
        let mut quarter = None;
        for token in text
            .split(|c: char| c.is_whitespace() || c == '-' || c == '/' || c == ',')
            .filter(|t| !t.is_empty())
        {
            if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
                year = token.parse::<i32>().ok();
            } else if let Some(q) = parse_quarter_token(token) {
                quarter = Some(q);
            } else if let Some(month) = parse_month_name(token) {
                quarter = Some((month - 1) / 3 + 1);
            } else {
                return None;
            }
        }

        match (year, quarter) {
            (Some(year), Some(quarter)) => Some(QuarterLabel::Quarter { year, quarter }),
            _ => None,
        }
    }
}

impl fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuarterLabel::Quarter { year, quarter } => write!(f, "Q{} {}", quarter, year),
            QuarterLabel::Ongoing => f.write_str("Ongoing"),
        }
    }
}

fn parse_quarter_token(token: &str) -> Option<u32> {
    let rest = token.strip_prefix('Q').or_else(|| token.strip_prefix('q'))?;
    match rest.parse::<u32>() {
        Ok(q) if (1..=4).contains(&q) => Some(q),
        _ => None,
    }
}

fn parse_month_name(token: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = token.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(&lower))
        .map(|i| i as u32 + 1)
}

/// The date text used to place a project on the timeline.
///
/// `display_date` first, then the locked `target_date`, then `launch_window`.
pub fn effective_display_date(project: &Project) -> Option<String> {
    if let Some(ref date) = project.display_date
        && !date.trim().is_empty()
    {
        return Some(date.clone());
    }
    if let Some(date) = project.target_date {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    if project.launch_window.trim().is_empty() {
        None
    } else {
        Some(project.launch_window.clone())
    }
}

/// Group projects by calendar quarter.
///
/// Every project lands in exactly one bucket; projects without a parseable
/// date go to [`QuarterLabel::Ongoing`]. Within a bucket, input order is kept.
pub fn bucket_by_quarter(projects: &[Project]) -> BTreeMap<QuarterLabel, Vec<Project>> {
    let mut buckets: BTreeMap<QuarterLabel, Vec<Project>> = BTreeMap::new();
    for project in projects {
        let label = effective_display_date(project)
            .as_deref()
            .and_then(QuarterLabel::parse)
            .unwrap_or_else(|| {
                tracing::debug!(project = %project.id, "no parseable date, bucketing as ongoing");
                QuarterLabel::Ongoing
            });
        buckets.entry(label).or_default().push(project.clone());
    }
    buckets
}

/// Aggregated demand from one stakeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeholderDemand {
    pub stakeholder: String,
    pub project_ids: Vec<String>,
    pub total_hours: f64,
    pub est_cost: f64,
}

impl StakeholderDemand {
    pub fn project_count(&self) -> usize {
        self.project_ids.len()
    }
}

/// Sum analysis hours and cost per stakeholder
pub fn calculate_stakeholder_demand(
    projects: &[Project],
    metrics: &Metrics,
) -> BTreeMap<String, StakeholderDemand> {
    let mut demand: BTreeMap<String, StakeholderDemand> = BTreeMap::new();
    for project in projects {
        let name = project
            .stakeholder
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNSPECIFIED_STAKEHOLDER)
            .to_string();
        let hours = project_total_hours(project, metrics);

        let entry = demand
            .entry(name.clone())
            .or_insert_with(|| StakeholderDemand {
                stakeholder: name,
                project_ids: Vec::new(),
                total_hours: 0.0,
                est_cost: 0.0,
            });
        entry.project_ids.push(project.id.clone());
        entry.total_hours += hours;
        entry.est_cost += hours * metrics.blended_hourly_rate;
    }
    demand
}
