//! Summary-reporting scenarios: counters for plain statements, plan blocks
//! for explained and profiled ones.

use gloam_shell::prettyprint::{Format, LineBuffer, PrettyPrinter};
use gloam_shell::result::{
    Counters, ListResult, Plan, PlanProfile, Record, StatementType, Summary,
};
use gloam_shell::value::Value;

fn format_with(format: Format, records: Vec<Record>, summary: Summary) -> String {
    let printer = PrettyPrinter::new(format, -1, false);
    let mut result = ListResult::new(records, summary);
    let mut sink = LineBuffer::new();
    printer
        .format(&mut result, &mut sink)
        .expect("formatting succeeds");
    sink.into_string()
}

fn explained_summary() -> Summary {
    let mut plan = Plan::new("ProduceResults");
    plan.arguments.insert("Version".to_string(), Value::from("3.1"));
    plan.arguments.insert("Planner".to_string(), Value::from("COST"));
    plan.arguments
        .insert("Runtime".to_string(), Value::from("INTERPRETED"));
    Summary {
        statement_type: StatementType::ReadOnly,
        plan: Some(plan),
        result_available_after: 5,
        result_consumed_after: 7,
        ..Summary::default()
    }
}

fn profiled_summary() -> Summary {
    let mut summary = explained_summary();
    if let Some(plan) = summary.plan.as_mut() {
        plan.profile = Some(PlanProfile {
            rows: 20,
            db_hits: 1000,
        });
    }
    summary
}

#[test]
fn reports_counters_for_empty_records() {
    let summary = Summary {
        counters: Counters {
            nodes_created: 10,
            labels_added: 1,
            ..Counters::default()
        },
        ..Summary::default()
    };
    assert_eq!(
        format_with(Format::Verbose, Vec::new(), summary),
        "Added 10 nodes, Added 1 labels\n"
    );
}

#[test]
fn zero_counters_report_nothing_in_either_mode() {
    assert_eq!(
        format_with(Format::Plain, Vec::new(), Summary::default()),
        ""
    );
    assert_eq!(
        format_with(Format::Verbose, Vec::new(), Summary::default()),
        ""
    );
}

#[test]
fn counters_follow_record_lines() {
    let record = Record::new(vec!["n".to_string()], vec![Value::Int(1)]);
    let summary = Summary {
        counters: Counters {
            nodes_created: 1,
            ..Counters::default()
        },
        ..Summary::default()
    };
    assert_eq!(
        format_with(Format::Plain, vec![record], summary),
        "n\n1\nAdded 1 nodes\n"
    );
}

#[test]
fn profiled_plan_reports_rows_and_db_hits() {
    assert_eq!(
        format_with(Format::Plain, Vec::new(), profiled_summary()),
        "Plan: \"PROFILE\"\n\
         Statement: \"READ_ONLY\"\n\
         Version: \"3.1\"\n\
         Planner: \"COST\"\n\
         Runtime: \"INTERPRETED\"\n\
         Time: 12\n\
         Rows: 20\n\
         DbHits: 1000\n"
    );
}

#[test]
fn explained_plan_omits_profile_figures() {
    assert_eq!(
        format_with(Format::Plain, Vec::new(), explained_summary()),
        "Plan: \"EXPLAIN\"\n\
         Statement: \"READ_ONLY\"\n\
         Version: \"3.1\"\n\
         Planner: \"COST\"\n\
         Runtime: \"INTERPRETED\"\n\
         Time: 12\n"
    );
}

#[test]
fn plan_blocks_trail_records_after_a_suppressed_separator() {
    let record = Record::new(vec!["n".to_string()], vec![Value::from("row")]);
    let output = format_with(Format::Plain, vec![record], explained_summary());
    assert_eq!(
        output,
        "n\nrow\n\
         Plan: \"EXPLAIN\"\n\
         Statement: \"READ_ONLY\"\n\
         Version: \"3.1\"\n\
         Planner: \"COST\"\n\
         Runtime: \"INTERPRETED\"\n\
         Time: 12\n"
    );
}
