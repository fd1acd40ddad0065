//! Execution summary reporting.

use crate::error::Result;
use crate::prettyprint::render::render;
use crate::result::{Counters, Plan, Summary};

/// Plan argument keys surfaced in reports, in output order.
const PLAN_ARGUMENTS: [&str; 3] = ["Version", "Planner", "Runtime"];

/// Builds the summary block for a completed statement.
///
/// Explained or profiled statements report the plan; everything else
/// reports non-zero update counters. Returns the empty string when there is
/// nothing to say. Numbers are plain decimals; string fields are wrapped in
/// double quotes verbatim.
pub fn collect(summary: &Summary) -> Result<String> {
    match &summary.plan {
        Some(plan) => plan_block(summary, plan),
        None => Ok(counter_line(&summary.counters)),
    }
}

fn plan_block(summary: &Summary, plan: &Plan) -> Result<String> {
    let mode = if plan.profile.is_some() {
        "PROFILE"
    } else {
        "EXPLAIN"
    };
    let mut lines = vec![
        format!("Plan: \"{mode}\""),
        format!("Statement: \"{}\"", summary.statement_type),
    ];
    for key in PLAN_ARGUMENTS {
        if let Some(value) = plan.arguments.get(key) {
            lines.push(format!("{key}: \"{}\"", render(value)?));
        }
    }
    lines.push(format!(
        "Time: {}",
        summary.result_available_after + summary.result_consumed_after
    ));
    if let Some(profile) = plan.profile {
        lines.push(format!("Rows: {}", profile.rows));
        lines.push(format!("DbHits: {}", profile.db_hits));
    }
    Ok(lines.join("\n"))
}

/// One `Verb count noun` group per non-zero counter, joined by `", "`, in
/// counter-declaration order. Nouns are already plural; counts of one still
/// read "1 labels", matching the query engine's own reporting.
fn counter_line(counters: &Counters) -> String {
    if !counters.contains_updates() {
        return String::new();
    }
    let categories: [(&str, u64, &str); 11] = [
        ("Added", counters.nodes_created, "nodes"),
        ("Deleted", counters.nodes_deleted, "nodes"),
        ("Created", counters.relationships_created, "relationships"),
        ("Deleted", counters.relationships_deleted, "relationships"),
        ("Set", counters.properties_set, "properties"),
        ("Added", counters.labels_added, "labels"),
        ("Removed", counters.labels_removed, "labels"),
        ("Added", counters.indexes_added, "indexes"),
        ("Removed", counters.indexes_removed, "indexes"),
        ("Added", counters.constraints_added, "constraints"),
        ("Removed", counters.constraints_removed, "constraints"),
    ];
    categories
        .iter()
        .filter(|(_, count, _)| *count != 0)
        .map(|(verb, count, noun)| format!("{verb} {count} {noun}"))
        .collect::<Vec<_>>()
        .join(", ")
}
