//! Studio Plan - Main Entry Point
//!
//! Command-line front end for the studio planning engine.
//! The actual implementation is in the `studio_plan` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use studio_plan::{Planner, ProjectPatch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Studio Plan - estimates, load and cost for a publishing studio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the plan file (TOML)
    plan: PathBuf,

    /// Path to the project overrides file (TOML); overrides stay in memory if omitted
    #[arg(long)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter plan file
    Init,
    /// Estimate one activity
    Estimate {
        /// drafting, editing, proofreading or layout
        activity: String,
        /// Words in scope
        words: u32,
        /// Words per hour
        #[arg(long, default_value_t = 500.0)]
        speed: f64,
        /// Chaos buffer in percent
        #[arg(long, default_value_t = 15.0)]
        buffer: f64,
        /// Hours worked per day
        #[arg(long, default_value_t = 6.0)]
        daily_hours: f64,
        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<String>,
        /// Team member id; their speed and buffer apply when their role fits
        #[arg(long)]
        member: Option<String>,
    },
    /// Step a date forward, skipping weekends unless --calendar is given
    WorkingDays {
        /// Start date (YYYY-MM-DD)
        start: String,
        days: u32,
        #[arg(long)]
        calendar: bool,
    },
    /// Per-person annual load
    Load {
        /// Date the clear-by projection starts from (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
        /// Sort heaviest load first
        #[arg(long)]
        sort: bool,
    },
    /// Projects grouped by quarter
    Quarters,
    /// Hours and cost per stakeholder
    Stakeholders,
    /// Hours and cost per project under the studio cost model
    Analysis,
    /// In-house cost per word against a market rate
    Defense {
        #[arg(long, default_value_t = 20.0)]
        hourly_rate: f64,
        #[arg(long, default_value_t = 250.0)]
        words_per_hour: f64,
        #[arg(long, default_value_t = 0.10)]
        market_per_word: f64,
    },
    /// Production schedule for one project
    Phases {
        project: String,
        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<String>,
    },
    /// Store field overrides for a project
    Override {
        project: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        words: Option<u32>,
        #[arg(long)]
        manual_hours: Option<f64>,
        /// Team member id
        #[arg(long)]
        assign: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        client_status: Option<String>,
        #[arg(long)]
        launch_window: Option<String>,
        /// Locked deadline (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<String>,
        #[arg(long)]
        display_date: Option<String>,
        #[arg(long)]
        budget_type: Option<String>,
        #[arg(long)]
        dependency: Option<String>,
        #[arg(long)]
        revenue: Option<String>,
        #[arg(long)]
        stakeholder: Option<String>,
    },
}

/// Initialize tracing on stderr so stdout carries only the report
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "studio_plan=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing();

    let mut planner = Planner::open(&args.plan, args.overrides.as_deref())?;

    let output = match args.command {
        Command::Init => planner.handle_init()?,
        Command::Estimate {
            activity,
            words,
            speed,
            buffer,
            daily_hours,
            start,
            member,
        } => planner.handle_estimate(
            &activity,
            words,
            speed,
            buffer,
            daily_hours,
            start.as_deref(),
            member.as_deref(),
        )?,
        Command::WorkingDays {
            start,
            days,
            calendar,
        } => planner.handle_working_days(&start, days, calendar)?,
        Command::Load { as_of, sort } => planner.handle_load(as_of.as_deref(), sort)?,
        Command::Quarters => planner.handle_quarters()?,
        Command::Stakeholders => planner.handle_stakeholders()?,
        Command::Analysis => planner.handle_analysis()?,
        Command::Defense {
            hourly_rate,
            words_per_hour,
            market_per_word,
        } => planner.handle_defense(hourly_rate, words_per_hour, market_per_word)?,
        Command::Phases { project, start } => planner.handle_phases(&project, start.as_deref())?,
        Command::Override {
            project,
            name,
            words,
            manual_hours,
            assign,
            status,
            client_status,
            launch_window,
            target_date,
            display_date,
            budget_type,
            dependency,
            revenue,
            stakeholder,
        } => {
            let target_date = studio_plan::validation::parse_optional_date(target_date.as_deref())?;
            let patch = ProjectPatch {
                name,
                target_words: words,
                manual_hours,
                assigned_to: assign,
                status,
                client_status,
                launch_window,
                target_date,
                display_date,
                budget_type,
                dependency,
                revenue_potential: revenue,
                stakeholder,
            };
            planner.handle_override(&project, patch)?
        }
    };

    println!("{}", output);
    Ok(())
}
