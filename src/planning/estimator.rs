//! Single-task effort estimation and date stepping

use super::models::{Activity, TeamMember, local_date_today};
use crate::error::{PlanError, require_non_negative, require_positive};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Outcome of estimating one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorResult {
    pub activity: Activity,
    /// Buffered effort hours, unrounded
    pub hours: f64,
    /// Effort expressed in days of `daily_hours` each, unrounded
    pub days: f64,
    pub target_date: NaiveDate,
    /// Member the estimate was made for, if any
    pub team_member: Option<TeamMember>,
    /// Whether the member's own speed and buffer were used
    pub role_adjusted: bool,
    pub handoff_note: String,
}

impl EstimatorResult {
    /// Hours rounded for display
    pub fn display_hours(&self) -> f64 {
        self.hours.round()
    }

    /// Whole days used for date math
    pub fn whole_days(&self) -> i64 {
        whole_days(self.days)
    }

    pub fn target_date_iso(&self) -> String {
        self.target_date.format("%Y-%m-%d").to_string()
    }
}

/// Round a day count up, ignoring floating-point noise below one nanoday
pub(crate) fn whole_days(days: f64) -> i64 {
    (days - 1e-9).ceil().max(0.0) as i64
}

/// Raw effort inflated by the chaos buffer.
///
/// `draft_speed` must be finite and positive; `buffer_percent` must be finite
/// and non-negative.
pub fn buffered_hours(
    total_words: u32,
    draft_speed: f64,
    buffer_percent: f64,
) -> Result<f64, PlanError> {
    let speed = require_positive("draft_speed", draft_speed)?;
    let buffer = require_non_negative("buffer_percent", buffer_percent)?;
    let hours = f64::from(total_words) / speed * (1.0 + buffer / 100.0);
    if !hours.is_finite() {
        return Err(PlanError::invalid(
            "draft_speed",
            format!("{} words at {} words/hr is out of range", total_words, speed),
        ));
    }
    Ok(hours)
}

/// Estimate effort, duration and target date for one activity.
///
/// When `team_member` is given and their role is the natural role for
/// `activity`, the member's own draft speed and chaos buffer replace
/// `draft_speed` and `buffer_percent`. Otherwise the member is only attached
/// to the result for attribution.
///
/// The target date advances `start_date` (default: today) by whole calendar
/// days. Weekends are not skipped here; see [`add_working_days`] for that.
pub fn estimate(
    activity: Activity,
    total_words: u32,
    draft_speed: f64,
    buffer_percent: f64,
    daily_hours: f64,
    start_date: Option<NaiveDate>,
    team_member: Option<&TeamMember>,
) -> Result<EstimatorResult, PlanError> {
    let role_adjusted = team_member.is_some_and(|m| m.role == activity.natural_role());
    let (speed, buffer) = match team_member {
        Some(member) if role_adjusted => (member.draft_speed, member.chaos_buffer),
        _ => (draft_speed, buffer_percent),
    };

    let hours = buffered_hours(total_words, speed, buffer)?;
    let daily_hours = require_positive("daily_hours", daily_hours)?;
    let days = hours / daily_hours;
    if !days.is_finite() {
        return Err(PlanError::invalid(
            "daily_hours",
            format!("{} hours at {} hours/day is out of range", hours, daily_hours),
        ));
    }

    let start = start_date.unwrap_or_else(local_date_today);
    let target_date = offset_date(start, whole_days(days))
        .ok_or_else(|| PlanError::invalid("days", format!("{:.1} days is out of range", days)))?;

    let handoff_note = handoff_note(activity, team_member, role_adjusted, target_date);

    tracing::debug!(
        %activity,
        total_words,
        speed,
        buffer,
        hours,
        days,
        %target_date,
        "estimated activity"
    );

    Ok(EstimatorResult {
        activity,
        hours,
        days,
        target_date,
        team_member: team_member.cloned(),
        role_adjusted,
        handoff_note,
    })
}

fn handoff_note(
    activity: Activity,
    member: Option<&TeamMember>,
    role_adjusted: bool,
    target_date: NaiveDate,
) -> String {
    let date = target_date.format("%Y-%m-%d");
    match member {
        Some(m) if role_adjusted => format!(
            "{} by {} ({}) at {} words/hr with {}% buffer; hand off on {}",
            activity, m.name, m.role, m.draft_speed, m.chaos_buffer, date
        ),
        Some(m) => format!(
            "{} by {} ({}) using studio defaults; hand off on {}",
            activity, m.name, m.role, date
        ),
        None => format!("{} ready to hand off on {}", activity, date),
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        PlanError::invalid(field, format!("'{}' is not a YYYY-MM-DD date", value))
    })
}

/// Advance a `YYYY-MM-DD` date by `day_count` days.
///
/// See [`add_working_days_from`] for the stepping rules.
pub fn add_working_days(
    start_date: &str,
    day_count: u32,
    skip_weekends: bool,
) -> Result<NaiveDate, PlanError> {
    let start = parse_date("start_date", start_date)?;
    add_working_days_from(start, day_count, skip_weekends)
}

/// Advance `start` by `day_count` days.
///
/// With `skip_weekends`, Saturdays and Sundays are stepped over without
/// consuming the count, so any non-zero count lands on a weekday. A count of
/// zero returns `start` unchanged. Fails with `InvalidInput` when the result
/// falls outside the supported date range.
pub fn add_working_days_from(
    start: NaiveDate,
    day_count: u32,
    skip_weekends: bool,
) -> Result<NaiveDate, PlanError> {
    let out_of_range = || {
        PlanError::invalid(
            "day_count",
            format!("{} + {} day(s) is out of range", start, day_count),
        )
    };

    if !skip_weekends {
        return offset_date(start, i64::from(day_count)).ok_or_else(out_of_range);
    }
    if day_count == 0 {
        return Ok(start);
    }

    // A weekend start steps exactly like the Friday before it
    let mut date = start;
    while is_weekend(date) {
        date = date.pred_opt().ok_or_else(out_of_range)?;
    }

    // Every five working days from a weekday is one calendar week
    date = offset_date(date, i64::from(day_count / 5) * 7).ok_or_else(out_of_range)?;
    let mut remaining = day_count % 5;
    while remaining > 0 {
        date = date.succ_opt().ok_or_else(out_of_range)?;
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    Ok(date)
}

fn offset_date(start: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|offset| start.checked_add_signed(offset))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::models::Role;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_buffered_hours_formula() {
        let hours = buffered_hours(10_000, 500.0, 20.0).unwrap();
        assert!((hours - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_rejects_zero_speed() {
        let err = estimate(Activity::Drafting, 1000, 0.0, 10.0, 6.0, None, None).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "draft_speed", .. }));
    }

    #[test]
    fn test_estimate_rejects_zero_daily_hours() {
        let err = estimate(Activity::Drafting, 1000, 500.0, 10.0, 0.0, None, None).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "daily_hours", .. }));
    }

    #[test]
    fn test_estimate_uses_calendar_days() {
        // 6,000 words at 500/hr = 12h, 4h/day = 3 days; Friday + 3 = Monday
        let result = estimate(
            Activity::Editing,
            6_000,
            500.0,
            0.0,
            4.0,
            Some(ymd(2026, 1, 9)),
            None,
        )
        .unwrap();
        assert_eq!(result.days, 3.0);
        assert_eq!(result.target_date, ymd(2026, 1, 12));
    }

    #[test]
    fn test_estimate_rounds_partial_days_up() {
        let result = estimate(
            Activity::Drafting,
            1_000,
            400.0,
            0.0,
            2.0,
            Some(ymd(2026, 3, 2)),
            None,
        )
        .unwrap();
        assert_eq!(result.days, 1.25);
        assert_eq!(result.whole_days(), 2);
        assert_eq!(result.target_date, ymd(2026, 3, 4));
    }

    #[test]
    fn test_role_mismatch_keeps_arguments() {
        let designer = TeamMember {
            id: "tm-3".to_string(),
            name: "Rae".to_string(),
            role: Role::Designer,
            draft_speed: 50.0,
            chaos_buffer: 50.0,
            weekly_capacity: 30.0,
            hourly_rate: 40.0,
        };
        let result = estimate(
            Activity::Drafting,
            1_000,
            500.0,
            0.0,
            8.0,
            Some(ymd(2026, 1, 5)),
            Some(&designer),
        )
        .unwrap();
        assert!(!result.role_adjusted);
        assert_eq!(result.hours, 2.0);
        assert!(result.handoff_note.contains("studio defaults"));
    }

    #[test]
    fn test_add_working_days_skips_weekend() {
        let date = add_working_days("2026-01-05", 5, true).unwrap();
        assert_eq!(date, ymd(2026, 1, 12));
    }

    #[test]
    fn test_add_working_days_from_saturday() {
        // Saturday + 1 working day = Monday
        assert_eq!(add_working_days_from(ymd(2026, 1, 10), 1, true), Ok(ymd(2026, 1, 12)));
        assert_eq!(add_working_days_from(ymd(2026, 1, 10), 0, true), Ok(ymd(2026, 1, 10)));
        // Sunday + 5 working days = next Friday
        assert_eq!(add_working_days_from(ymd(2026, 1, 11), 5, true), Ok(ymd(2026, 1, 16)));
    }

    #[test]
    fn test_add_working_days_out_of_range() {
        let err = add_working_days("2026-01-05", 4_000_000_000, false).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "day_count", .. }));
        let err = add_working_days_from(ymd(2026, 1, 5), 200_000_000, true).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "day_count", .. }));
    }

    #[test]
    fn test_add_working_days_large_count_in_range() {
        // 1,000 working days = 200 weeks
        assert_eq!(
            add_working_days_from(ymd(2026, 1, 5), 1_000, true),
            Ok(ymd(2026, 1, 5) + Duration::days(1_400))
        );
    }

    #[test]
    fn test_estimate_huge_duration_is_invalid_input() {
        let err = estimate(
            Activity::Drafting,
            4_000_000_000,
            0.001,
            0.0,
            0.001,
            Some(ymd(2026, 1, 5)),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "days", .. }));
    }

    #[test]
    fn test_estimate_subnormal_speed_is_invalid_input() {
        let err = estimate(
            Activity::Drafting,
            1_000,
            f64::MIN_POSITIVE / 1e10,
            0.0,
            6.0,
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "draft_speed", .. }));
        let err = estimate(Activity::Editing, 1_000, 500.0, 0.0, 1e-308, None, None).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput { field: "daily_hours", .. }));
    }

    #[test]
    fn test_add_working_days_calendar_mode() {
        assert_eq!(add_working_days("2026-01-05", 5, false).unwrap(), ymd(2026, 1, 10));
    }

    #[test]
    fn test_add_working_days_rejects_bad_date() {
        assert!(add_working_days("next tuesday", 3, true).is_err());
        assert!(add_working_days("2026-02-30", 3, true).is_err());
    }
}
