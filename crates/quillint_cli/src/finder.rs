//! File discovery from CLI patterns.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use quillint_core::LintError;

/// Expands CLI patterns into a sorted, deduplicated file list.
///
/// A pattern naming an existing file is taken as-is; anything else is
/// treated as a glob and matched against a walk of `base_dir`.
pub fn discover_files(patterns: &[String], base_dir: &Path) -> Result<Vec<PathBuf>, LintError> {
    let mut files = Vec::new();

    let mut glob_builder = GlobSetBuilder::new();
    let mut has_globs = false;

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            let glob = Glob::new(pattern).map_err(|e| {
                LintError::config(format!("Invalid pattern '{}': {}", pattern, e))
            })?;
            glob_builder.add(glob);
            has_globs = true;
        }
    }

    if has_globs {
        let glob_set = glob_builder
            .build()
            .map_err(|e| LintError::config(format!("Failed to build globset: {}", e)))?;

        for entry in WalkDir::new(base_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            if path.is_file() && glob_set.is_match(relative) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();

    info!("Discovered {} files to lint", files.len());
    Ok(files)
}
