//! Consecutive word repetition detection.

use quillint_text::{Issue, Line, find_specimen};

use crate::check::{Check, CheckParams};

const DEFAULT_MESSAGE: &str = "Repeated word.";

/// Flags maximal runs of two or more adjacent identical word tokens.
///
/// Tokens are split on whitespace with non-word characters stripped, so
/// `"is, is"` and `"is is"` repeat the same token. Comparison is
/// case-sensitive. Runs with no word character (pure punctuation) are
/// ignored.
pub(crate) fn apply(mut line: Line, check: &Check) -> Line {
    if check.params != CheckParams::Repetition {
        return line;
    }

    let tokens: Vec<String> = line.text.split_whitespace().map(strip_token).collect();

    let message = if check.message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        check.message.as_str()
    };

    let mut found = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let mut j = i + 1;
        while j < tokens.len() && tokens[j] == tokens[i] {
            j += 1;
        }

        let run_len = j - i;
        if run_len >= 2 && !tokens[i].is_empty() {
            let specimen = vec![tokens[i].as_str(); run_len].join(" ");
            if let Some(col) = find_specimen(&line.text, &specimen) {
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

        i = j;
    }

    for issue in found {
        line.push_issue(issue);
    }
    line
}

/// Strips non-word characters, keeping alphanumerics and underscores.
fn strip_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
