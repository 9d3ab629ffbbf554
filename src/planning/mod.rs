//! Estimation engine
//!
//! Pure, synchronous calculations over plain records. Nothing here reads
//! files or keeps state between calls; every result is rebuilt from its
//! inputs.
//! - `models`: projects, team members, metrics and pipeline records
//! - `estimator`: single-activity estimates and working-day date math
//! - `load`: per-person annual load aggregation
//! - `buckets`: quarter and stakeholder grouping
//! - `analysis`: studio cost model and the in-house vs market comparison
//! - `phases`: chained estimates across the production pipeline
//! - `plan_data`: container for the seed data

mod analysis;
mod buckets;
mod estimator;
mod load;
mod models;
mod phases;
mod plan_data;

pub use analysis::{
    DefenseAnalysisResult, DisplayProject, calculate_defense_analysis,
    calculate_project_analysis, project_total_hours,
};
pub use buckets::{
    QuarterLabel, StakeholderDemand, UNSPECIFIED_STAKEHOLDER, bucket_by_quarter,
    calculate_stakeholder_demand, effective_display_date,
};
pub use estimator::{
    EstimatorResult, add_working_days, add_working_days_from, buffered_hours, estimate, parse_date,
};
pub use load::{
    ProjectLoad, UNASSIGNED, WORKING_WEEKS_PER_YEAR, WriterLoad, calculate_annual_load,
    calculate_annual_load_as_of, load_percent, owner_name, project_effort, sort_by_load,
    unassigned_projects,
};
pub use models::{
    Activity, Metrics, ProductionPhase, Project, ProjectPatch, Role, TeamMember, local_date_today,
};
pub use phases::{DEFAULT_BUFFER_PERCENT, DEFAULT_WORDS_PER_HOUR, PhaseEstimate, estimate_phases};
pub use plan_data::PlanData;
