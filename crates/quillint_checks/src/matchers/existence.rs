//! Literal existence matching, case-insensitive and exact-case.

use tracing::warn;

use quillint_text::{Issue, Line, find_specimen};

use crate::check::{Check, CheckParams};
use crate::pattern::{boundary_matches, boundary_pattern};

/// Flags every word-boundary occurrence of any specimen in the line.
///
/// `existence` matches case-insensitively, `case` exact-case; both share
/// this implementation and differ only in the compiled pattern.
pub(crate) fn apply(mut line: Line, check: &Check) -> Line {
    let (specimens, case_insensitive) = match &check.params {
        CheckParams::Existence { specimens } => (specimens, true),
        CheckParams::Case { specimens } => (specimens, false),
        _ => return line,
    };

    if specimens.is_empty() {
        return line;
    }

    let re = match boundary_pattern(specimens, case_insensitive) {
        Ok(re) => re,
        Err(e) => {
            warn!("check '{}': failed to build pattern: {}", check.name, e);
            return line;
        }
    };

    let mut found = Vec::new();
    for m in boundary_matches(&re, &line.text) {
        if let Some(col) = find_specimen(&line.text, m.as_str()) {
            found.push(Issue::new(
                &line.file,
                line.line_num,
                &check.name,
                check.kind(),
                m.as_str(),
                col,
                &check.message,
            ));
        }
    }

    for issue in found {
        line.push_issue(issue);
    }
    line
}
