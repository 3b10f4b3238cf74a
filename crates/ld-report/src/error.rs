//! Error types for ld-report

use thiserror::Error;

/// Report writing errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// Nothing to write (R001)
    #[error("[R001] Report has no rows")]
    NoRows,

    /// A row's columns differ from the header (R002)
    #[error("[R002] Row {row} has columns [{found}], expected [{expected}]")]
    InconsistentColumns {
        row: usize,
        expected: String,
        found: String,
    },

    /// Destination cannot be written (R003)
    #[error("[R003] Cannot write report to '{path}': {source}")]
    Unwritable {
        path: String,
        source: std::io::Error,
    },

    /// DuckDB failure while writing or sorting (R004)
    #[error("[R004] Report database error: {0}")]
    Db(String),
}

/// Result type alias for ReportError
pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    /// Whether the operator can fix this by choosing another destination
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ReportError::Unwritable { .. })
    }
}

impl From<duckdb::Error> for ReportError {
    fn from(err: duckdb::Error) -> Self {
        ReportError::Db(err.to_string())
    }
}
