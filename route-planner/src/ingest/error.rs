//! Ingestion error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when reading network or request files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already-open stream failed
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// The input has no lines at all
    #[error("input is empty")]
    Empty,

    /// The first line doesn't start with a record count
    #[error("could not find the integer record count in the first line: {line:?}")]
    MissingCount { line: String },

    /// A request line isn't `Origin|Destination|SortBy`
    #[error("invalid request {line:?}: {reason}")]
    BadRequest { line: String, reason: String },

    /// A request contains an invalid value
    #[error(transparent)]
    Domain(#[from] DomainError),
}
