//! Line types for input text.

use serde::{Deserialize, Serialize};

use crate::Issue;

/// One physical line of an input file.
///
/// Lines are created once per file read. Code-block and quoted-text regions
/// are already neutralized in `text` by the upstream reader (replaced with
/// equal-length blank runs, so column numbers stay valid). A line is mutated
/// only by appending issues during check application; once part of a
/// persisted cache record it is never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Display path of the file this line belongs to.
    pub file: String,

    /// Raw line content, with ignored regions blanked out.
    pub text: String,

    /// 1-based line number.
    pub line_num: usize,

    /// True once any issue has attached to this line.
    #[serde(default)]
    pub issue: bool,

    /// Issues found in this line, in check-application order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Line {
    /// Creates a new line with no issues.
    pub fn new(file: impl Into<String>, text: impl Into<String>, line_num: usize) -> Self {
        Self {
            file: file.into(),
            text: text.into(),
            line_num,
            issue: false,
            issues: Vec::new(),
        }
    }

    /// Appends an issue, marking the line as offending.
    pub fn push_issue(&mut self, issue: Issue) {
        self.issue = true;
        self.issues.push(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_new() {
        let line = Line::new("a.md", "Some text.", 1);

        assert_eq!(line.file, "a.md");
        assert_eq!(line.text, "Some text.");
        assert_eq!(line.line_num, 1);
        assert!(!line.issue);
        assert!(line.issues.is_empty());
    }

    #[test]
    fn test_push_issue_sets_flag() {
        let mut line = Line::new("a.md", "very bad", 2);
        line.push_issue(Issue::new("a.md", 2, "weasel", CheckKind::Existence, "very", 0, "Weasel word."));

        assert!(line.issue);
        assert_eq!(line.issues.len(), 1);
        assert_eq!(line.issues[0].specimen, "very");
    }

    #[test]
    fn test_push_issue_preserves_order() {
        let mut line = Line::new("a.md", "very bad stuff", 1);
        line.push_issue(Issue::new("a.md", 1, "first", CheckKind::Existence, "very", 0, "m1"));
        line.push_issue(Issue::new("a.md", 1, "second", CheckKind::Existence, "bad", 5, "m2"));

        let names: Vec<&str> = line.issues.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_line_deserializes_without_issue_fields() {
        let json = r#"{"file": "a.md", "text": "hello", "line_num": 7}"#;
        let line: Line = serde_json::from_str(json).unwrap();

        assert_eq!(line.line_num, 7);
        assert!(!line.issue);
        assert!(line.issues.is_empty());
    }
}
