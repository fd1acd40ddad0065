//! Error type shared by the renderer, formatter, and shell front-end.

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors surfaced by the result-formatting pipeline.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Underlying I/O failure while reading a capture or producing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A captured result document could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The record stream failed mid-iteration; driver-shaped failures from
    /// the executing collaborator land here unchanged.
    #[error("result stream error: {0}")]
    Transport(String),
    /// A path's segments do not form a connected chain. Results come from
    /// the query engine, so this is a defect upstream, not user error.
    #[error("path segment {index} does not connect to the preceding node")]
    DisconnectedPath {
        /// Zero-based index of the offending segment.
        index: usize,
    },
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Serialization(err.to_string())
    }
}
