//! Linter configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use quillint_cache::stable_hash;
use quillint_checks::Check;

use crate::LintError;
use crate::ignore::IgnoreSet;

/// Resolved run configuration, excluding the check list.
///
/// The check list hashes on its own channel; everything here feeds
/// `config_hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Output mode.
    #[serde(default)]
    pub output: OutputMode,

    /// Whether to enable caching.
    #[serde(default = "default_cache")]
    pub cache: bool,

    /// Cache directory.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Whether `>`-quoted lines are neutralized like code blocks.
    #[serde(default)]
    pub skip_quoted: bool,
}

fn default_cache() -> bool {
    true
}

fn default_cache_dir() -> String {
    ".quillint-cache".to_string()
}

/// Output mode tag, recorded in each cache record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Grouped per-file listing with a summary.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
    /// One fully qualified line per issue.
    Verbose,
}

impl OutputMode {
    /// Returns the tag as it appears in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Text => "text",
            OutputMode::Json => "json",
            OutputMode::Verbose => "verbose",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LintConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            output: OutputMode::Text,
            cache: true,
            cache_dir: default_cache_dir(),
            skip_quoted: false,
        }
    }

    /// Computes the configuration's stable hash for cache invalidation.
    pub fn hash(&self) -> Result<u64, LintError> {
        Ok(stable_hash(self)?)
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A full configuration document: run settings, checks, and ignores.
///
/// The resolver that merges global and project documents is outside the
/// core; this type is the resolved result it hands over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Run settings.
    #[serde(flatten)]
    pub config: LintConfig,

    /// Configured checks.
    #[serde(default)]
    pub checks: Vec<Check>,

    /// Acknowledged issues to filter out.
    #[serde(flatten)]
    pub ignores: IgnoreSet,
}

impl ConfigDocument {
    /// Loads a configuration document from a file.
    ///
    /// Supports JSON with comments (`.quillint.jsonc`, `.quillint.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LintError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses a configuration document from a JSON(C) string.
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| LintError::config(format!("Invalid JSON: {}", e)))?
            .ok_or_else(|| LintError::config("Empty configuration document"))?;

        serde_json::from_value(value)
            .map_err(|e| LintError::config(format!("Invalid config: {}", e)))
    }
}
