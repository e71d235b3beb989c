//! Issue types for check results.

use serde::{Deserialize, Serialize};

use crate::CheckKind;

/// One reported defect: a check matched somewhere in a line.
///
/// An issue is only ever attached to the [`Line`](crate::Line) it was found
/// in — `line_num` names that line — and `col` is always resolvable within
/// that line's text; candidates whose specimen cannot be located are dropped
/// before construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Issue {
    /// Display path of the file the issue was found in.
    pub file: String,

    /// 1-based number of the line the issue was found in.
    pub line_num: usize,

    /// Name of the check that produced this issue.
    pub name: String,

    /// Kind of the check that produced this issue.
    pub kind: CheckKind,

    /// The exact offending substring.
    pub specimen: String,

    /// 0-based column of the specimen's first occurrence in the line.
    pub col: usize,

    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file: impl Into<String>,
        line_num: usize,
        name: impl Into<String>,
        kind: CheckKind,
        specimen: impl Into<String>,
        col: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line_num,
            name: name.into(),
            kind,
            specimen: specimen.into(),
            col,
            message: message.into(),
        }
    }

    /// Returns a copy reattributed to another line number.
    ///
    /// Used when a cached issue is reused for a line whose text is unchanged
    /// but whose position in the file shifted.
    pub fn at_line(mut self, line_num: usize) -> Self {
        self.line_num = line_num;
        self
    }
}
