//! Word substitution matching.

use tracing::warn;

use quillint_text::{Issue, Line, find_specimen};

use crate::check::{Check, CheckParams, Recommendation};
use crate::pattern::{boundary_matches, boundary_pattern};

/// Flags word-boundary occurrences of each `avoid` term, suggesting the
/// paired `prefer` term in the message.
pub(crate) fn apply(mut line: Line, check: &Check) -> Line {
    let (recommendations, case_insensitive) = match &check.params {
        CheckParams::Recommender { recommendations } => (recommendations, true),
        CheckParams::CaseRecommender { recommendations } => (recommendations, false),
        _ => return line,
    };

    let mut found = Vec::new();
    for rec in recommendations {
        let avoid = std::slice::from_ref(&rec.avoid);
        let re = match boundary_pattern(avoid, case_insensitive) {
            Ok(re) => re,
            Err(e) => {
                warn!(
                    "check '{}': failed to build pattern for '{}': {}",
                    check.name, rec.avoid, e
                );
                continue;
            }
        };

        for m in boundary_matches(&re, &line.text) {
            if let Some(col) = find_specimen(&line.text, m.as_str()) {
                found.push(Issue::new(
                    &line.file,
                    line.line_num,
                    &check.name,
                    check.kind(),
                    m.as_str(),
                    col,
                    message_for(&check.message, rec),
                ));
            }
        }
    }

    for issue in found {
        line.push_issue(issue);
    }
    line
}

fn message_for(message: &str, rec: &Recommendation) -> String {
    if message.is_empty() {
        format!("Prefer: {}", rec.prefer)
    } else {
        format!("{} Prefer: {}", message, rec.prefer)
    }
}
