//! Linter error types.

use thiserror::Error;

/// Errors that can occur during linting.
///
/// Nothing in the core terminates the process; callers decide whether a
/// failure aborts the run or degrades to skipping the cache, check, or file.
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Check error.
    #[error("Check error: {0}")]
    Check(#[from] quillint_checks::CheckError),

    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] quillint_cache::CacheError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LintError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
