//! Studio Plan Library
//!
//! Estimation and capacity planning for a small publishing studio. Projects
//! carry word counts, deadlines and owners; team members carry speed, buffer,
//! capacity and rate. The engine turns those into effort hours, target dates,
//! per-person annual load, quarter and stakeholder views, and cost figures.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Command Layer**: [`Planner`] and its handlers - load data, apply overrides, render reports
//! - **Domain Layer**: `planning` module - pure estimation and aggregation functions
//! - **Persistence Layer**: `storage` and `overrides` modules - TOML plan file and field overrides
//!
//! # Example
//!
//! ```
//! use studio_plan::{Activity, estimate};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2026, 1, 5);
//! let result = estimate(Activity::Drafting, 10_000, 500.0, 20.0, 6.0, start, None).unwrap();
//! assert!((result.hours - 24.0).abs() < 1e-9);
//! assert_eq!(result.target_date_iso(), "2026-01-09");
//! ```

mod error;
pub mod formatting;
mod handlers;
pub mod overrides;
pub mod planning;
mod storage;
pub mod validation;

use anyhow::Result;
use std::path::Path;

pub use error::PlanError;
pub use overrides::{FileOverrideStore, MemoryOverrideStore, OverrideStore};
pub use planning::{
    Activity, DefenseAnalysisResult, DisplayProject, EstimatorResult, Metrics, PlanData,
    ProductionPhase, Project, ProjectPatch, QuarterLabel, Role, StakeholderDemand, TeamMember,
    WriterLoad, add_working_days, bucket_by_quarter, calculate_annual_load,
    calculate_defense_analysis, calculate_project_analysis, estimate,
};
pub use storage::Storage;

/// Entry point for the command-line reports.
///
/// Holds the seed plan, where it came from, and the override store applied on
/// top of it. Every report recomputes from the current data.
pub struct Planner {
    pub(crate) data: PlanData,
    pub(crate) storage: Storage,
    pub(crate) overrides: Box<dyn OverrideStore>,
}

impl Planner {
    /// Open a planner
    ///
    /// # Arguments
    /// * `plan_path` - Path to the plan file (TOML format); missing means empty
    /// * `overrides_path` - Path to the overrides file; `None` keeps overrides in memory
    ///
    /// # Example
    /// ```no_run
    /// # use studio_plan::Planner;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let planner = Planner::open("plan.toml", None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(plan_path: impl AsRef<Path>, overrides_path: Option<&Path>) -> Result<Self> {
        let storage = Storage::new(plan_path);
        let data = storage.load()?;
        let overrides: Box<dyn OverrideStore> = match overrides_path {
            Some(path) => Box::new(FileOverrideStore::open(path)?),
            None => Box::new(MemoryOverrideStore::new()),
        };
        Ok(Self {
            data,
            storage,
            overrides,
        })
    }

    /// Seed data as loaded, without overrides
    pub fn data(&self) -> &PlanData {
        &self.data
    }

    /// Projects with stored overrides applied
    pub fn effective_projects(&self) -> Vec<Project> {
        self.data.effective_projects(self.overrides.as_ref())
    }
}
