//! Record streams and execution summaries at the query-engine boundary.
//!
//! The shell consumes a completed query through [`QueryResult`]: a
//! forward-only, single-pass record stream whose [`Summary`] becomes
//! available once the stream is drained. [`ListResult`] implements the
//! trait over materialized data and doubles as the deserialization target
//! for captured result documents.

use std::collections::BTreeMap;
use std::fmt;
use std::vec;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};
use crate::value::Value;

/// One row of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Column names, positional; not required to be unique.
    pub keys: Vec<String>,
    /// Column values, one per key.
    pub values: Vec<Value>,
}

impl Record {
    /// Creates a record from parallel key/value sequences.
    pub fn new(keys: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }
}

/// Classification of the executed statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementType {
    /// Statement only read data.
    #[default]
    ReadOnly,
    /// Statement read and wrote data.
    ReadWrite,
    /// Statement only wrote data.
    WriteOnly,
    /// Statement changed the schema.
    SchemaWrite,
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatementType::ReadOnly => "READ_ONLY",
            StatementType::ReadWrite => "READ_WRITE",
            StatementType::WriteOnly => "WRITE_ONLY",
            StatementType::SchemaWrite => "SCHEMA_WRITE",
        };
        f.write_str(name)
    }
}

/// Update counts reported after a statement completes.
///
/// Field order here is the order counter lines appear in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    /// Nodes created.
    pub nodes_created: u64,
    /// Nodes deleted.
    pub nodes_deleted: u64,
    /// Relationships created.
    pub relationships_created: u64,
    /// Relationships deleted.
    pub relationships_deleted: u64,
    /// Properties set.
    pub properties_set: u64,
    /// Labels added to nodes.
    pub labels_added: u64,
    /// Labels removed from nodes.
    pub labels_removed: u64,
    /// Indexes added.
    pub indexes_added: u64,
    /// Indexes removed.
    pub indexes_removed: u64,
    /// Constraints added.
    pub constraints_added: u64,
    /// Constraints removed.
    pub constraints_removed: u64,
}

impl Counters {
    /// True when any category is non-zero.
    pub fn contains_updates(&self) -> bool {
        let Counters {
            nodes_created,
            nodes_deleted,
            relationships_created,
            relationships_deleted,
            properties_set,
            labels_added,
            labels_removed,
            indexes_added,
            indexes_removed,
            constraints_added,
            constraints_removed,
        } = *self;
        nodes_created != 0
            || nodes_deleted != 0
            || relationships_created != 0
            || relationships_deleted != 0
            || properties_set != 0
            || labels_added != 0
            || labels_removed != 0
            || indexes_added != 0
            || indexes_removed != 0
            || constraints_added != 0
            || constraints_removed != 0
    }
}

/// Figures recorded while running under PROFILE; absent for EXPLAIN-only
/// plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProfile {
    /// Rows actually produced.
    pub rows: u64,
    /// Storage hits incurred.
    pub db_hits: u64,
}

/// A node of the reported query plan tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Operator name.
    pub operator: String,
    /// Operator arguments. `Version`, `Planner`, and `Runtime` are surfaced
    /// in reports when present.
    #[serde(default)]
    pub arguments: BTreeMap<String, Value>,
    /// Planner row-count estimate.
    #[serde(default)]
    pub estimated_rows: f64,
    /// Profiled figures, when the statement ran under PROFILE.
    #[serde(default)]
    pub profile: Option<PlanProfile>,
    /// Input operators, ordered.
    #[serde(default)]
    pub children: Vec<Plan>,
}

impl Plan {
    /// Creates a leaf plan node for the given operator.
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            arguments: BTreeMap::new(),
            estimated_rows: 0.0,
            profile: None,
            children: Vec::new(),
        }
    }
}

/// Immutable execution metadata delivered after the record stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    /// Statement classification.
    pub statement_type: StatementType,
    /// Update counters.
    pub counters: Counters,
    /// Query plan; present for explained or profiled statements.
    pub plan: Option<Plan>,
    /// Milliseconds until the result was available.
    pub result_available_after: u64,
    /// Milliseconds until the result was fully consumed.
    pub result_consumed_after: u64,
}

impl Summary {
    /// True when the statement was explained or profiled.
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// True when the statement ran under PROFILE.
    pub fn has_profile(&self) -> bool {
        self.plan.as_ref().is_some_and(|plan| plan.profile.is_some())
    }
}

/// Boundary with the query-execution collaborator.
///
/// The stream is forward-only, non-restartable, and consumed exactly once.
/// The summary may only be retrieved after the stream is drained; retrieval
/// may itself block on cursor exhaustion in transport-backed
/// implementations, so the formatter finishes iterating first.
pub trait QueryResult {
    /// Advances the stream, returning `None` once exhausted.
    fn next_record(&mut self) -> Result<Option<Record>>;

    /// Returns the execution summary. Valid once per result, after the
    /// stream is exhausted.
    fn summary(&mut self) -> Result<Summary>;
}

/// In-memory [`QueryResult`] over fully materialized records.
#[derive(Debug)]
pub struct ListResult {
    records: vec::IntoIter<Record>,
    summary: Option<Summary>,
}

impl ListResult {
    /// Wraps materialized records and a summary.
    pub fn new(records: Vec<Record>, summary: Summary) -> Self {
        Self {
            records: records.into_iter(),
            summary: Some(summary),
        }
    }

    /// Decodes a captured [`ResultDocument`] from JSON.
    pub fn from_json(data: &str) -> Result<Self> {
        let document: ResultDocument = serde_json::from_str(data)?;
        Ok(document.into())
    }
}

impl QueryResult for ListResult {
    fn next_record(&mut self) -> Result<Option<Record>> {
        Ok(self.records.next())
    }

    fn summary(&mut self) -> Result<Summary> {
        self.summary
            .take()
            .ok_or_else(|| ShellError::Transport("summary already consumed".into()))
    }
}

/// Serialized capture of a completed query: the shape `shell render` reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultDocument {
    /// Records in server-returned order.
    pub records: Vec<Record>,
    /// Execution summary.
    pub summary: Summary,
}

impl From<ResultDocument> for ListResult {
    fn from(document: ResultDocument) -> Self {
        ListResult::new(document.records, document.summary)
    }
}
