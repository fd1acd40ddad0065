//! Deterministic, copy-paste-safe rendering of query results.
//!
//! Three layers, each a pure function of its input: identifier escaping,
//! the recursive value renderer, and the execution summary reporter,
//! composed over a caller-supplied line sink by [`PrettyPrinter`].

/// Identifier escaping for map keys, node labels, and relationship types.
pub mod escape;

/// Record and summary composition over a line sink.
pub mod formatter;

/// Canonical textual rendering of result values.
pub mod render;

/// Execution summary reporting.
pub mod statistics;

pub use escape::escape;
pub use formatter::{Format, LineBuffer, LineSink, PrettyPrinter};
pub use render::render;
pub use statistics::collect;
