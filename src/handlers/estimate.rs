//! Estimate and working-day handlers

use crate::Planner;
use crate::formatting;
use crate::planning::{self, add_working_days};
use crate::validation;
use anyhow::{Context, Result};

impl Planner {
    /// Estimates one ad hoc activity, optionally for a named team member.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_estimate(
        &self,
        activity: &str,
        total_words: u32,
        draft_speed: f64,
        buffer_percent: f64,
        daily_hours: f64,
        start_date: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<String> {
        let activity = validation::parse_activity(activity)?;
        let start = validation::parse_optional_date(start_date)?;

        let member = match member_id {
            Some(id) => Some(
                self.data
                    .member(id)
                    .with_context(|| validation::format_invalid_member_error(id, &self.data))?,
            ),
            None => None,
        };

        let result = planning::estimate(
            activity,
            total_words,
            draft_speed,
            buffer_percent,
            daily_hours,
            start,
            member,
        )?;
        Ok(formatting::format_estimate(&result))
    }

    /// Steps a date forward by working or calendar days.
    pub fn handle_working_days(&self, start_date: &str, days: u32, calendar: bool) -> Result<String> {
        let date = add_working_days(start_date, days, !calendar)?;
        let unit = if calendar { "calendar" } else { "working" };
        Ok(format!(
            "{} + {} {} day(s) = {} ({})",
            start_date.trim(),
            days,
            unit,
            date.format("%Y-%m-%d"),
            date.format("%A")
        ))
    }
}
