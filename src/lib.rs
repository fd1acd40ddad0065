//! Result rendering core for the Gloam graph-database shell.
//!
//! Turns a completed query result (an ordered record stream plus an execution
//! summary) into deterministic, human-readable text whose value renderings
//! round-trip back into valid query-language literals. The crate owns no I/O:
//! output goes through a caller-supplied [`prettyprint::LineSink`], and results
//! arrive through the [`result::QueryResult`] boundary trait.

#![forbid(unsafe_code)]

/// Crate-wide error type and result alias.
pub mod error;

/// Graph entities (nodes, relationships, paths) as they appear in results.
pub mod graph;

/// Identifier escaping, value rendering, summary reporting, and the
/// composing pretty-printer.
pub mod prettyprint;

/// Record streams and execution summaries at the query-engine boundary.
pub mod result;

/// The typed value union carried by result records.
pub mod value;

pub use error::{Result, ShellError};
pub use graph::{Edge, Node, Path, PathSegment};
pub use prettyprint::{Format, LineBuffer, LineSink, PrettyPrinter};
pub use result::{ListResult, QueryResult, Record, Summary};
pub use value::Value;
