//! Regular expression matching.

use regex::Regex;
use tracing::warn;

use quillint_text::{Issue, Line, find_specimen};

use crate::check::{Check, CheckParams};

/// Applies each configured expression to the line.
///
/// Compilation is fallible per expression: a malformed pattern logs a
/// warning and is skipped, so one bad expression never blocks the rest of
/// the check. When a pattern defines capture groups the first group is the
/// specimen; otherwise the full match is.
pub(crate) fn apply(mut line: Line, check: &Check) -> Line {
    let expressions = match &check.params {
        CheckParams::Regex { expressions } => expressions,
        _ => return line,
    };

    let mut found = Vec::new();
    for expr in expressions {
        let re = match Regex::new(&expr.pattern) {
            Ok(re) => re,
            Err(e) => {
                warn!(
                    "check '{}': skipping malformed expression '{}': {}",
                    check.name, expr.pattern, e
                );
                continue;
            }
        };

        let message = if expr.message.is_empty() {
            check.message.as_str()
        } else {
            expr.message.as_str()
        };

        for caps in re.captures_iter(&line.text) {
            let specimen = specimen_of(&re, &caps);
            if let Some(col) = find_specimen(&line.text, specimen) {
                found.push(Issue::new(
                    &line.file,
                    line.line_num,
                    &check.name,
                    check.kind(),
                    specimen,
                    col,
                    message,
                ));
            }
        }
    }

    for issue in found {
        line.push_issue(issue);
    }
    line
}

/// First capture group when the pattern defines one, else the full match.
fn specimen_of<'t>(re: &Regex, caps: &regex::Captures<'t>) -> &'t str {
    if re.captures_len() > 1 {
        if let Some(group) = caps.get(1) {
            return group.as_str();
        }
    }
    caps.get(0).map(|m| m.as_str()).unwrap_or_default()
}
