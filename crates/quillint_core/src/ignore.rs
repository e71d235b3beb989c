//! Ignore index and filter.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use quillint_text::Issue;

/// Acknowledged issues, supplied by the configuration resolver.
///
/// Constant for the duration of one run. An empty set is a no-op filter,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IgnoreSet {
    /// Global specimen strings to drop wherever they match.
    #[serde(default)]
    pub ignore: BTreeSet<String>,

    /// Context-specific ignores.
    #[serde(default)]
    pub ignore_issues: Vec<ContextualIgnore>,
}

impl IgnoreSet {
    /// Returns true when there is nothing to filter.
    pub fn is_empty(&self) -> bool {
        self.ignore.is_empty() && self.ignore_issues.is_empty()
    }
}

/// One ignore entry scoped by file, and optionally by line and check.
///
/// Omitting `line_num` widens the match to anywhere in the file; omitting
/// `check` widens it to any check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualIgnore {
    /// File the entry applies to (exact match).
    pub file: String,

    /// Line the entry applies to, if narrowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_num: Option<usize>,

    /// Specimen to drop (case-insensitive match).
    pub specimen: String,

    /// Check name the entry applies to, if narrowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
}

/// Prepared contextual entry: specimen lowercased once at build time.
#[derive(Debug, Clone)]
struct ContextualEntry {
    specimen: String,
    check: Option<String>,
}

impl ContextualEntry {
    fn matches(&self, issue: &Issue, specimen_lower: &str) -> bool {
        self.specimen == specimen_lower
            && self.check.as_deref().is_none_or(|check| check == issue.name)
    }
}

/// Contextual entries for one file, partitioned by line presence.
#[derive(Debug, Clone, Default)]
struct FileIgnores {
    by_line: HashMap<usize, Vec<ContextualEntry>>,
    file_wide: Vec<ContextualEntry>,
}

/// Fast lookup structure derived from an [`IgnoreSet`].
///
/// Rebuilt once per run in O(ignore-set size). Filtering is then O(issue
/// count) amortized: one set probe plus the entries indexed under the
/// issue's file and line, instead of a linear scan over all ignore entries
/// for every issue.
#[derive(Debug, Clone, Default)]
pub struct IgnoreIndex {
    simple: HashSet<String>,
    contextual: HashMap<String, FileIgnores>,
}

impl IgnoreIndex {
    /// Builds the index from a flat ignore set.
    pub fn build(set: &IgnoreSet) -> Self {
        let simple = set.ignore.iter().map(|s| s.to_lowercase()).collect();

        let mut contextual: HashMap<String, FileIgnores> = HashMap::new();
        for entry in &set.ignore_issues {
            let prepared = ContextualEntry {
                specimen: entry.specimen.to_lowercase(),
                check: entry.check.clone(),
            };
            let file = contextual.entry(entry.file.clone()).or_default();
            match entry.line_num {
                Some(line_num) => file.by_line.entry(line_num).or_default().push(prepared),
                None => file.file_wide.push(prepared),
            }
        }

        Self { simple, contextual }
    }

    /// Returns true when the issue has been acknowledged.
    pub fn is_ignored(&self, issue: &Issue) -> bool {
        let specimen = issue.specimen.to_lowercase();

        if self.simple.contains(&specimen) {
            return true;
        }

        let Some(file) = self.contextual.get(&issue.file) else {
            return false;
        };

        if let Some(entries) = file.by_line.get(&issue.line_num)
            && entries.iter().any(|e| e.matches(issue, &specimen))
        {
            return true;
        }

        file.file_wide.iter().any(|e| e.matches(issue, &specimen))
    }
}

/// Drops acknowledged issues, preserving the order of the rest.
pub fn filter_issues(issues: Vec<Issue>, index: &IgnoreIndex) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| !index.is_ignored(issue))
        .collect()
}
