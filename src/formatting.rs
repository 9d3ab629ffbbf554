//! Text rendering of engine results for the command line

use crate::planning::{
    DefenseAnalysisResult, DisplayProject, EstimatorResult, PhaseEstimate, Project, QuarterLabel,
    StakeholderDemand, TeamMember, WriterLoad, owner_name,
};
use std::collections::BTreeMap;

/// Format a single estimate
pub fn format_estimate(result: &EstimatorResult) -> String {
    let mut out = format!(
        "{}: {} hours over {} day(s), target {}\n",
        result.activity,
        result.display_hours(),
        result.whole_days(),
        result.target_date_iso()
    );
    if let Some(ref member) = result.team_member {
        out.push_str(&format!(
            "  Member: {} ({}){}\n",
            member.name,
            member.role,
            if result.role_adjusted {
                ", role-adjusted"
            } else {
                ""
            }
        ));
    }
    out.push_str(&format!("  Note: {}\n", result.handoff_note));
    out
}

/// Format per-person load, one line per member plus contributing projects
///
/// # Arguments
/// * `loads` - Loads in display order
pub fn format_loads(loads: &[WriterLoad]) -> String {
    if loads.is_empty() {
        return "No team members found".to_string();
    }

    let mut out = format!("Load for {} team member(s):\n\n", loads.len());
    for load in loads {
        out.push_str(&format!(
            "- [{}] {} ({}): {:.0}h of {:.0}h ({:.1}%), cost {:.2}\n",
            load.member_id,
            load.name,
            load.role,
            load.total_hours,
            load.annual_capacity,
            load.percent,
            load.cost
        ));
        if let Some(date) = load.clear_date {
            out.push_str(&format!("  Clear by: {}\n", date));
        }
        for project in &load.projects {
            out.push_str(&format!(
                "  * {} ({}): {:.0}h\n",
                project.name, project.project_id, project.hours
            ));
        }
    }
    out
}

/// Format projects without a resolvable owner
pub fn format_unassigned(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return String::new();
    }
    let mut out = format!("\n{} project(s) not counted for anyone:\n", projects.len());
    for project in projects {
        let owner = project.assigned_to.as_deref().unwrap_or("none");
        out.push_str(&format!(
            "- [{}] {} (assigned to: {})\n",
            project.id, project.name, owner
        ));
    }
    out
}

/// Format the quarter view
pub fn format_quarters(
    buckets: &BTreeMap<QuarterLabel, Vec<Project>>,
    roster: &[TeamMember],
) -> String {
    if buckets.is_empty() {
        return "No projects found".to_string();
    }

    let mut out = String::new();
    for (label, projects) in buckets {
        out.push_str(&format!("{} ({} project(s))\n", label, projects.len()));
        for project in projects {
            out.push_str(&format!(
                "- [{}] {} (owner: {}",
                project.id,
                project.name,
                owner_name(project, roster)
            ));
            if project.is_locked() {
                out.push_str(", locked");
            }
            out.push_str(")\n");
        }
    }
    out
}

/// Format stakeholder demand
pub fn format_stakeholders(demand: &BTreeMap<String, StakeholderDemand>) -> String {
    if demand.is_empty() {
        return "No projects found".to_string();
    }

    let mut out = format!("Demand from {} stakeholder(s):\n\n", demand.len());
    for entry in demand.values() {
        out.push_str(&format!(
            "- {}: {} project(s), {:.1}h, cost {:.2}\n",
            entry.stakeholder,
            entry.project_count(),
            entry.total_hours,
            entry.est_cost
        ));
        out.push_str(&format!("  Projects: {}\n", entry.project_ids.join(", ")));
    }
    out
}

/// Format the cost analysis table
pub fn format_analysis(rows: &[DisplayProject]) -> String {
    if rows.is_empty() {
        return "No projects found".to_string();
    }

    let mut out = format!("Analysis of {} project(s):\n\n", rows.len());
    let mut total_hours = 0.0;
    let mut total_cost = 0.0;
    for row in rows {
        out.push_str(&format!(
            "- [{}] {}: {:.1}h, cost {:.2}",
            row.project.id, row.project.name, row.total, row.est_cost
        ));
        if row.project.manual_hours.is_some() {
            out.push_str(" (manual)");
        } else {
            out.push_str(&format!(
                " (writing {:.1}h, layout {:.1}h)",
                row.writing_hours, row.layout_hours
            ));
        }
        out.push('\n');
        total_hours += row.total;
        total_cost += row.est_cost;
    }
    out.push_str(&format!("\nTotal: {:.1}h, cost {:.2}\n", total_hours, total_cost));
    out
}

/// Job size used to show the comparison in money terms
const SAMPLE_JOB_WORDS: u32 = 10_000;

/// Format the in-house vs market comparison
pub fn format_defense(result: &DefenseAnalysisResult) -> String {
    let verdict = if result.savings_percent >= 0.0 {
        "cheaper"
    } else {
        "more expensive"
    };
    let job = result.savings_for(SAMPLE_JOB_WORDS);
    let outcome = if job >= 0.0 { "saves" } else { "costs an extra" };
    format!(
        "In-house cost: {:.4} per word ({:.2}/hr at {} words/hr)\nMarket rate: {:.4} per word\nIn-house is {:.1}% {} than market\nA {}-word job in-house {} {:.2}\n",
        result.my_cost_per_word,
        result.hourly_rate,
        result.words_per_hour,
        result.market_per_word,
        result.savings_percent.abs(),
        verdict,
        SAMPLE_JOB_WORDS,
        outcome,
        job.abs()
    )
}

/// Format a phase schedule
///
/// # Arguments
/// * `project` - Project the schedule belongs to, used for the header and deadline check
/// * `phases` - Phase estimates in pipeline order
pub fn format_phases(project: &Project, phases: &[PhaseEstimate]) -> String {
    let mut out = format!("Schedule for [{}] {}:\n\n", project.id, project.name);
    for phase in phases {
        match phase.result {
            Some(ref result) => {
                let owner = result
                    .team_member
                    .as_ref()
                    .map(|m| m.name.as_str())
                    .unwrap_or("studio defaults");
                out.push_str(&format!(
                    "- {}: {} -> {} ({}h, {})\n",
                    phase.phase,
                    phase.start_date,
                    result.target_date,
                    result.display_hours(),
                    owner
                ));
            }
            None => {
                out.push_str(&format!(
                    "- {}: could not be estimated, starts {}\n",
                    phase.phase, phase.start_date
                ));
            }
        }
    }
    if let Some(locked) = project.target_date
        && let Some(last) = phases.last()
        && last.end_date() > locked
    {
        out.push_str(&format!(
            "\nWarning: schedule ends {} after locked deadline {}\n",
            last.end_date(),
            locked
        ));
    }
    out
}
