//! Per-file lint cycle and the parallel multi-file driver.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use quillint_cache::{CacheLookup, CacheStore, stable_hash};
use quillint_checks::{Check, DispatchTable};
use quillint_text::Line;

use crate::config::{ConfigDocument, LintConfig};
use crate::engine;
use crate::error::LintError;
use crate::ignore::{IgnoreIndex, IgnoreSet, filter_issues};
use crate::reader;
use crate::result::FileReport;

/// The main linter orchestrator.
///
/// Holds the resolved configuration, the check list with its dispatch
/// table, the cache store, and the ignore index — all read-only for the
/// duration of a run. Each file's load/recompute/save cycle is
/// self-contained, so independent files are processed concurrently without
/// any shared in-memory mutable state; the on-disk store stays safe through
/// its atomic-rename discipline.
pub struct Linter {
    config: LintConfig,
    config_snapshot: serde_json::Value,
    config_hash: u64,
    checks: Vec<Check>,
    check_hash: u64,
    table: DispatchTable,
    store: CacheStore,
    index: IgnoreIndex,
}

impl Linter {
    /// Creates a linter from resolved parts, validating the check list
    /// against the built-in dispatch table.
    pub fn new(
        config: LintConfig,
        checks: Vec<Check>,
        ignores: IgnoreSet,
    ) -> Result<Self, LintError> {
        Self::with_table(config, checks, ignores, DispatchTable::builtin())
    }

    /// Creates a linter with an explicitly constructed dispatch table.
    pub fn with_table(
        config: LintConfig,
        checks: Vec<Check>,
        ignores: IgnoreSet,
        table: DispatchTable,
    ) -> Result<Self, LintError> {
        table.validate(&checks)?;

        let config_hash = config.hash()?;
        let config_snapshot = serde_json::to_value(&config)
            .map_err(|e| LintError::Internal(format!("Failed to snapshot config: {}", e)))?;
        let check_hash = stable_hash(&checks)?;

        let mut store = CacheStore::new(&config.cache_dir);
        if !config.cache {
            store.disable();
        }

        let index = IgnoreIndex::build(&ignores);

        Ok(Self {
            config,
            config_snapshot,
            config_hash,
            checks,
            check_hash,
            table,
            store,
            index,
        })
    }

    /// Creates a linter from a loaded configuration document.
    pub fn from_document(document: ConfigDocument) -> Result<Self, LintError> {
        Self::new(document.config, document.checks, document.ignores)
    }

    /// Disables caching for this linter.
    pub fn disable_cache(&mut self) {
        self.store.disable();
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lints one file from disk.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport, LintError> {
        debug!("Linting {}", path.display());

        let lines = reader::read_lines(path, self.config.skip_quoted)?;
        let file = path.to_string_lossy().to_string();

        self.lint_lines(path.to_path_buf(), &file, lines)
    }

    /// Runs the cache/recompute/filter cycle over prepared lines.
    pub fn lint_lines(
        &self,
        path: PathBuf,
        file: &str,
        lines: Vec<Line>,
    ) -> Result<FileReport, LintError> {
        let cached = match self.store.load(file) {
            Ok(CacheLookup::Hit(record)) => Some(*record),
            Ok(CacheLookup::Miss) => None,
            Ok(CacheLookup::Corrupted(reason)) => {
                warn!("Corrupted cache for {}: {}; recomputing", file, reason);
                None
            }
            Err(e) => {
                warn!("Cache load failed for {}: {}; recomputing", file, e);
                None
            }
        };

        let (record, from_cache) = engine::compute(
            file,
            lines,
            &self.config_snapshot,
            self.config_hash,
            &self.checks,
            self.check_hash,
            self.config.output.as_str(),
            &self.table,
            cached,
        )?;

        // A failed save degrades to "skip caching"; it never aborts the run.
        if !from_cache
            && let Err(e) = self.store.save(&record)
        {
            warn!("Failed to save cache for {}: {}", file, e);
        }

        let issues = filter_issues(record.results, &self.index);

        Ok(if from_cache {
            FileReport::cached(path, issues)
        } else {
            FileReport::new(path, issues)
        })
    }

    /// Lints files in parallel.
    ///
    /// One failing file never aborts the batch: failures are logged and
    /// collected alongside the successful reports.
    pub fn lint_files(&self, paths: &[PathBuf]) -> (Vec<FileReport>, Vec<(PathBuf, LintError)>) {
        let results: Vec<Result<FileReport, (PathBuf, LintError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(report) => successes.push(report),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        (successes, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quillint_checks::CheckParams;
    use std::fs;

    fn weasel_check() -> Check {
        Check {
            name: "weasel".to_string(),
            message: "Weasel word.".to_string(),
            params: CheckParams::Existence {
                specimens: vec!["very".to_string()],
            },
        }
    }

    fn linter_in(dir: &Path, checks: Vec<Check>, ignores: IgnoreSet) -> Linter {
        let config = LintConfig {
            cache_dir: dir.join("cache").to_string_lossy().to_string(),
            ..LintConfig::new()
        };
        Linter::new(config, checks, ignores).unwrap()
    }

    #[test]
    fn test_lint_file_reports_issues() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "This is very good.\nFine line.\n").unwrap();

        let linter = linter_in(dir.path(), vec![weasel_check()], IgnoreSet::default());
        let report = linter.lint_file(&file).unwrap();

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].specimen, "very");
        assert_eq!(report.issues[0].line_num, 1);
        assert!(!report.from_cache);
    }

    #[test]
    fn test_second_run_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "This is very good.\n").unwrap();

        let linter = linter_in(dir.path(), vec![weasel_check()], IgnoreSet::default());

        let first = linter.lint_file(&file).unwrap();
        let second = linter.lint_file(&file).unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.issues, second.issues);
    }

    #[test]
    fn test_ignored_issue_is_filtered_from_report() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "This is very good.\n").unwrap();

        let mut ignores = IgnoreSet::default();
        ignores.ignore.insert("very".to_string());

        let linter = linter_in(dir.path(), vec![weasel_check()], ignores);
        let report = linter.lint_file(&file).unwrap();

        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_file_is_collected_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("doc.md");
        fs::write(&present, "very\n").unwrap();
        let missing = dir.path().join("missing.md");

        let linter = linter_in(dir.path(), vec![weasel_check()], IgnoreSet::default());
        let (successes, failures) = linter.lint_files(&[present, missing.clone()]);

        assert_eq!(successes.len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
    }

    #[test]
    fn test_disabled_cache_recomputes_every_run() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "very\n").unwrap();

        let mut linter = linter_in(dir.path(), vec![weasel_check()], IgnoreSet::default());
        linter.disable_cache();

        let first = linter.lint_file(&file).unwrap();
        let second = linter.lint_file(&file).unwrap();

        assert!(!first.from_cache);
        assert!(!second.from_cache);
    }

    #[test]
    fn test_corrupted_record_recomputes_instead_of_failing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "very\n").unwrap();

        let linter = linter_in(dir.path(), vec![weasel_check()], IgnoreSet::default());
        linter.lint_file(&file).unwrap();

        // Clobber the record on disk.
        let record_path = linter
            .store
            .record_path(&file.to_string_lossy())
            .unwrap();
        fs::write(&record_path, "{ garbage").unwrap();

        let report = linter.lint_file(&file).unwrap();
        assert!(!report.from_cache);
        assert_eq!(report.issues.len(), 1);
    }
}
