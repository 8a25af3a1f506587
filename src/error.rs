//! Error types.
//!
//! The engine works on in-memory, pre-validated data, so the taxonomy is
//! narrow: malformed instances are rejected at construction, bad search
//! configurations are rejected at run start, and record persistence can
//! fail on I/O.

use thiserror::Error;

/// A problem instance could not be built, parsed, or read.
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The duration matrix has no rows.
    #[error("instance must have at least one job")]
    NoJobs,

    /// The duration matrix has empty rows.
    #[error("instance must have at least one machine")]
    NoMachines,

    /// A job row does not have one duration per machine.
    #[error("job {job} has {found} durations, expected {expected}")]
    RaggedRow {
        job: usize,
        expected: usize,
        found: usize,
    },

    /// A duration is zero.
    #[error("duration of job {job} on machine {machine} must be positive")]
    ZeroDuration { job: usize, machine: usize },

    /// The summed durations exceed the representable time range.
    #[error("total work exceeds the representable time range")]
    WorkOverflow,

    /// The text representation is malformed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Reading or writing an instance file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InstanceError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// A search run could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The initial solution has no neighbors, e.g. a pairwise-exchange
    /// neighborhood over fewer than two jobs.
    #[error("initial solution has an empty neighborhood")]
    EmptyNeighborhood,
}

/// Run records could not be saved or loaded.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
