//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where they
//! need to surface run-file parse or I/O failures.

use thiserror::Error;

/// The base error type for `helm-core` and configuration loading.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `helm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
