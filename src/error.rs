//! Defines the error type of this crate.
use std::io;

use thiserror::Error;


/// A specialized `Result` type for `stageboost`.
pub type Result<T> = std::result::Result<T, StageError>;


/// Errors returned by the fitter and its collaborators.
#[derive(Debug, Error)]
pub enum StageError {
    /// The training sample or a parameter violates a precondition.
    /// Nothing is computed when this error is returned.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A cell of a CSV file is not a number.
    #[error("line {line}: `{value}` is not a number")]
    Parse {
        /// 1-indexed line number of the file.
        line: usize,
        /// The offending cell.
        value: String,
    },

    /// Failed to serialize snapshots.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `plotters` failed to draw a chart.
    #[error("plot error: {0}")]
    Plot(String),
}


impl StageError {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}
