//! Command handlers for the planner
//!
//! Each handler loads what it needs from the [`Planner`](crate::Planner),
//! calls the estimation engine and renders the result as text.

pub mod analysis;
pub mod estimate;
pub mod init;
pub mod load;
pub mod override_project;
pub mod phases;
pub mod quarters;
