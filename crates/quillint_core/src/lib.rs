//! # quillint_core
//!
//! Core linting engine for Quillint.
//!
//! This crate provides:
//! - Configuration loading and resolution
//! - The line reader (code-block neutralization, size cutoff)
//! - The incremental recompute engine
//! - The ignore index and filter
//! - The parallel multi-file runner
//!
//! ## Example
//!
//! ```rust,ignore
//! use quillint_core::{ConfigDocument, Linter};
//!
//! let document = ConfigDocument::from_file(".quillint.json")?;
//! let linter = Linter::from_document(document)?;
//!
//! let (reports, failures) = linter.lint_files(&paths);
//! for report in reports {
//!     println!("{}: {} issues", report.path.display(), report.issues.len());
//! }
//! ```

mod config;
pub mod engine;
mod error;
mod ignore;
pub mod reader;
mod result;
mod runner;

pub use config::{ConfigDocument, LintConfig, OutputMode};
pub use error::LintError;
pub use ignore::{ContextualIgnore, IgnoreIndex, IgnoreSet, filter_issues};
pub use result::FileReport;
pub use runner::Linter;

pub use quillint_cache::{CacheLookup, CacheRecord, CacheStore, stable_hash};
pub use quillint_checks::{Check, CheckError, DispatchTable};
pub use quillint_text::{CheckKind, Issue, Line};
