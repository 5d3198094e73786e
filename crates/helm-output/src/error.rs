//! Error types for helm-output.

use thiserror::Error;

/// Failures of a recording sink.
///
/// CSV and trace files share the `Csv` variant; both go through the `csv`
/// writer.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state row write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("state database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
