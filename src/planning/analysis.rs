//! Studio cost model and the in-house vs market comparison

use super::models::{Metrics, Project};
use serde::Serialize;

/// A project with its derived effort and cost figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayProject {
    #[serde(flatten)]
    pub project: Project,
    /// Writing hours before overhead; 0 when manual hours are set
    pub writing_hours: f64,
    /// Layout hours before overhead; 0 when manual hours are set
    pub layout_hours: f64,
    pub total: f64,
    pub est_cost: f64,
}

/// Base writing and layout hours for a word count
fn base_hours(target_words: u32, metrics: &Metrics) -> (f64, f64) {
    let words = f64::from(target_words);
    let writing = finite_or_zero(words / 1000.0 * metrics.writing_rate);
    let pages = if metrics.words_per_page > 0.0 {
        words / metrics.words_per_page
    } else {
        0.0
    };
    let layout = finite_or_zero(pages * metrics.layout_hours_per_page);
    (writing, layout)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Total hours for a project under the studio cost model.
///
/// `manual_hours` is taken as the final total. Otherwise writing and layout
/// hours are summed and inflated by PM overhead and contingency.
pub fn project_total_hours(project: &Project, metrics: &Metrics) -> f64 {
    if let Some(hours) = project.manual_hours {
        return finite_or_zero(hours).max(0.0);
    }
    let (writing, layout) = base_hours(project.target_words, metrics);
    let multiplier = (1.0 + metrics.pm_overhead_percent) * (1.0 + metrics.contingency_percent);
    finite_or_zero((writing + layout) * multiplier)
}

/// Apply the cost model to every project.
///
/// Returns new records in input order; the input slice is left untouched.
pub fn calculate_project_analysis(projects: &[Project], metrics: &Metrics) -> Vec<DisplayProject> {
    projects
        .iter()
        .map(|project| {
            let (writing_hours, layout_hours) = if project.manual_hours.is_some() {
                (0.0, 0.0)
            } else {
                base_hours(project.target_words, metrics)
            };
            let total = project_total_hours(project, metrics);
            DisplayProject {
                project: project.clone(),
                writing_hours,
                layout_hours,
                total,
                est_cost: finite_or_zero(total * metrics.blended_hourly_rate),
            }
        })
        .collect()
}

/// In-house cost per word compared to the market rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefenseAnalysisResult {
    pub hourly_rate: f64,
    pub words_per_hour: f64,
    pub market_per_word: f64,
    pub my_cost_per_word: f64,
    /// Negative when in-house work costs more than the market
    pub savings_percent: f64,
}

impl DefenseAnalysisResult {
    /// Money saved (or lost, if negative) on a job of `words` words
    pub fn savings_for(&self, words: u32) -> f64 {
        (self.market_per_word - self.my_cost_per_word) * f64::from(words)
    }
}

/// Compare the in-house cost per word against a market rate.
///
/// A non-positive `words_per_hour` gives a cost of 0 per word, and a
/// non-positive `market_per_word` gives 0% savings.
pub fn calculate_defense_analysis(
    hourly_rate: f64,
    words_per_hour: f64,
    market_per_word: f64,
) -> DefenseAnalysisResult {
    let my_cost_per_word = if words_per_hour > 0.0 {
        finite_or_zero(hourly_rate / words_per_hour)
    } else {
        0.0
    };
    let savings_percent = if market_per_word > 0.0 {
        finite_or_zero((1.0 - my_cost_per_word / market_per_word) * 100.0)
    } else {
        0.0
    };

    DefenseAnalysisResult {
        hourly_rate,
        words_per_hour,
        market_per_word,
        my_cost_per_word,
        savings_percent,
    }
}
