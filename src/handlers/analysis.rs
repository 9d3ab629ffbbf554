//! Cost analysis handlers

use crate::Planner;
use crate::formatting;
use crate::planning;
use anyhow::Result;

impl Planner {
    /// Applies the studio cost model to every project.
    pub fn handle_analysis(&self) -> Result<String> {
        let projects = self.effective_projects();
        let rows = planning::calculate_project_analysis(&projects, &self.data.metrics);
        Ok(formatting::format_analysis(&rows))
    }

    /// Compares in-house cost per word with a market rate.
    pub fn handle_defense(
        &self,
        hourly_rate: f64,
        words_per_hour: f64,
        market_per_word: f64,
    ) -> Result<String> {
        let result = planning::calculate_defense_analysis(hourly_rate, words_per_hour, market_per_word);
        Ok(formatting::format_defense(&result))
    }
}
