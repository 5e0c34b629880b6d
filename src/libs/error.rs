//! Error types for the tock repositories.

use thiserror::Error;

/// All errors that can arise from task and interval operations.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Lookup by id found no row.
    #[error("no task with id {0}")]
    TaskNotFound(i64),

    /// A second open interval was requested, or more than one open interval
    /// was found in the store.
    #[error("'{task}' is already in progress")]
    TooManyInProgress { task: String },

    /// A stop was requested for a task with no recorded intervals.
    #[error("'{task}' has nothing in progress")]
    NoTaskInProgress { task: String },

    /// The requested time does not come strictly after the matched
    /// interval's boundary; the write is rejected and nothing is mutated.
    #[error("requested time {requested} is not after {boundary}")]
    InconsistentInterval { boundary: i64, requested: i64 },

    /// The underlying store rejected an operation. Propagated unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
