//! Error types for recoding operations.

use thiserror::Error;

/// Structural errors raised by the recoders.
///
/// Unexpected survey codes are never errors; they become missing values.
/// These variants only cover input the recoders cannot work with at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecodeError {
    /// A named source column is absent from the table.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for RecodeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for recoding operations.
pub type Result<T> = std::result::Result<T, RecodeError>;
