//! Check error types.

use quillint_text::CheckKind;
use thiserror::Error;

/// Errors that can occur when dispatching or compiling checks.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check's kind has no registered matching algorithm.
    ///
    /// This is a configuration error detected at load time; it must never
    /// surface as a silent no-op during matching.
    #[error("no matcher registered for kind '{kind}' (check '{name}'; registered: {registered:?})")]
    UnregisteredKind {
        kind: CheckKind,
        name: String,
        registered: Vec<CheckKind>,
    },

    /// A pattern failed to compile.
    #[error("invalid pattern in check '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },
}
