//! Per-file lint results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use quillint_text::Issue;

/// The outcome of linting one file, after ignore filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// The file that was linted.
    pub path: PathBuf,

    /// Issues that survived the ignore filter.
    pub issues: Vec<Issue>,

    /// Whether the result was served from cache verbatim.
    #[serde(default)]
    pub from_cache: bool,
}

impl FileReport {
    /// Creates a freshly computed report.
    pub fn new(path: PathBuf, issues: Vec<Issue>) -> Self {
        Self {
            path,
            issues,
            from_cache: false,
        }
    }

    /// Creates a report served from cache.
    pub fn cached(path: PathBuf, issues: Vec<Issue>) -> Self {
        Self {
            path,
            issues,
            from_cache: true,
        }
    }

    /// Returns true when no issues survived filtering.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
