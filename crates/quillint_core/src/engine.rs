//! Incremental recompute engine.
//!
//! Decides which lines must be re-matched against the checks and merges
//! fresh results with reusable cached ones. A cached record is usable
//! verbatim only when all three hash channels (lines, config, checks)
//! match; when only the line snapshot changed, per-line results are reused
//! for texts that are unique within both snapshots and unchanged.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::warn;

use quillint_cache::{CacheRecord, stable_hash};
use quillint_checks::{Check, DispatchTable};
use quillint_text::{Issue, Line};

use crate::LintError;

/// Runs the match pass for one file, reusing prior work where correctness
/// allows, and produces the record to persist.
///
/// Returns the record plus whether it was taken from cache verbatim.
///
/// Cached issues are reused only for lines whose text is unique within both
/// the previous and the current snapshot. A text occurring more than once is
/// always re-matched: re-identifying cached issues by text alone would
/// misattribute an issue cached for one occurrence to a different line
/// sharing identical text. The persisted snapshot therefore excludes
/// duplicated texts outright.
#[allow(clippy::too_many_arguments)]
pub fn compute(
    file: &str,
    lines: Vec<Line>,
    config: &serde_json::Value,
    config_hash: u64,
    checks: &[Check],
    check_hash: u64,
    output: &str,
    table: &DispatchTable,
    cached: Option<CacheRecord>,
) -> Result<(CacheRecord, bool), LintError> {
    // An unregistered kind is a configuration error, caught before any
    // matching starts.
    table.validate(checks)?;

    let lines_hash = stable_hash(&lines)?;
    let file_hash = stable_hash(&file)?;

    if let Some(record) = cached.as_ref()
        && record.is_valid(lines_hash, config_hash, check_hash)
    {
        return Ok((record.clone(), true));
    }

    // Partial reuse exists only across line changes within an unchanged
    // config/check set.
    let reusable = cached.filter(|record| record.reusable_for(config_hash, check_hash));

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for line in &lines {
        *occurrences.entry(line.text.as_str()).or_insert(0) += 1;
    }

    // The stored snapshot holds unique texts only, so presence in this map
    // already implies uniqueness within the previous snapshot.
    let mut prev_line_by_text: HashMap<&str, usize> = HashMap::new();
    let mut prev_issues_by_line: HashMap<usize, Vec<Issue>> = HashMap::new();
    if let Some(record) = &reusable {
        for line in &record.lines {
            prev_line_by_text.insert(line.text.as_str(), line.line_num);
        }
        for issue in &record.results {
            prev_issues_by_line
                .entry(issue.line_num)
                .or_default()
                .push(issue.clone());
        }
    }

    let mut slots: Vec<Option<Vec<Issue>>> = vec![None; lines.len()];
    let mut changed: Vec<usize> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let unique_now = occurrences[line.text.as_str()] == 1;
        let prev_num = if unique_now {
            prev_line_by_text.get(line.text.as_str()).copied()
        } else {
            None
        };

        match prev_num {
            Some(prev_num) => {
                let issues = prev_issues_by_line
                    .get(&prev_num)
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|issue| issue.at_line(line.line_num))
                    .collect();
                slots[i] = Some(issues);
            }
            None => changed.push(i),
        }
    }

    // Each changed line reads only its own text and the shared read-only
    // check list; there is no ordering dependency between lines.
    let mut fresh: HashMap<usize, Vec<Issue>> = changed
        .par_iter()
        .map(|&i| (i, match_line(lines[i].clone(), checks, table).issues))
        .collect();

    let mut results = Vec::new();
    for (i, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(issues) => results.extend(issues),
            None => results.extend(fresh.remove(&i).unwrap_or_default()),
        }
    }

    let stored_lines: Vec<Line> = lines
        .iter()
        .filter(|line| occurrences[line.text.as_str()] == 1)
        .cloned()
        .collect();

    let record = CacheRecord {
        lines: stored_lines,
        lines_hash,
        file_hash,
        config: config.clone(),
        config_hash,
        check_hash,
        output: output.to_string(),
        results,
    };

    Ok((record, false))
}

/// Applies every check to one line.
///
/// A failing check is isolated at per-check granularity: it is logged and
/// the line proceeds with whatever issues were already found.
pub fn match_line(mut line: Line, checks: &[Check], table: &DispatchTable) -> Line {
    for check in checks {
        match table.dispatch(line.clone(), check) {
            Ok(updated) => line = updated,
            Err(e) => warn!(
                "check '{}' failed on {}:{}: {}",
                check.name, line.file, line.line_num, e
            ),
        }
    }
    line
}
