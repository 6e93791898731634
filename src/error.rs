//! Errors raised by the load and summary stages.
//!
//! Filtering and grouping are total over their inputs, so the only runtime
//! failure after a successful load is asking for extremes of nothing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Highest/lowest was requested over zero groups.
    #[error("No rows to summarize: the current filters match no budget records")]
    EmptyInput,

    /// A loaded record is missing a field or carries a bad value.
    #[error("Row {row}, column '{column}': {message}")]
    Schema {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Failed to read budget file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl PipelineError {
    pub fn schema(row: usize, column: &str, message: impl Into<String>) -> Self {
        Self::Schema {
            row,
            column: column.to_string(),
            message: message.into(),
        }
    }
}
