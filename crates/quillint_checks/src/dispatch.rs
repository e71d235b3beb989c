//! Kind-to-matcher dispatch.

use std::collections::BTreeMap;

use quillint_text::{CheckKind, Line};

use crate::check::Check;
use crate::error::CheckError;
use crate::matchers;

/// A matching algorithm: returns the line unchanged or with issues appended.
pub type MatchFn = fn(Line, &Check) -> Line;

/// Immutable mapping from check kind to matching algorithm.
///
/// The table is constructed explicitly and handed to the engine; there is no
/// process-wide registry. [`DispatchTable::builtin`] registers the six
/// built-in kinds. Dispatching a kind that was never registered is a
/// configuration error carrying the offending kind and the registered set.
#[derive(Clone)]
pub struct DispatchTable {
    table: BTreeMap<CheckKind, MatchFn>,
}

impl DispatchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Creates a table with all built-in kinds registered.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.register(CheckKind::Existence, matchers::existence::apply);
        table.register(CheckKind::Case, matchers::existence::apply);
        table.register(CheckKind::Recommender, matchers::recommender::apply);
        table.register(CheckKind::CaseRecommender, matchers::recommender::apply);
        table.register(CheckKind::Repetition, matchers::repetition::apply);
        table.register(CheckKind::Regex, matchers::regex_check::apply);
        table
    }

    /// Registers a matcher for a kind, replacing any previous registration.
    pub fn register(&mut self, kind: CheckKind, matcher: MatchFn) {
        self.table.insert(kind, matcher);
    }

    /// Returns the registered kinds in stable order.
    pub fn registered(&self) -> Vec<CheckKind> {
        self.table.keys().copied().collect()
    }

    /// Applies `check` to `line` via the registered matcher.
    pub fn dispatch(&self, line: Line, check: &Check) -> Result<Line, CheckError> {
        let kind = check.kind();
        match self.table.get(&kind) {
            Some(matcher) => Ok(matcher(line, check)),
            None => Err(CheckError::UnregisteredKind {
                kind,
                name: check.name.clone(),
                registered: self.registered(),
            }),
        }
    }

    /// Verifies every check's kind is registered.
    ///
    /// Run at load time so an unregistered kind is reported as a
    /// configuration error before any matching starts.
    pub fn validate(&self, checks: &[Check]) -> Result<(), CheckError> {
        for check in checks {
            if !self.table.contains_key(&check.kind()) {
                return Err(CheckError::UnregisteredKind {
                    kind: check.kind(),
                    name: check.name.clone(),
                    registered: self.registered(),
                });
            }
        }
        Ok(())
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("registered", &self.registered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckParams;
    use pretty_assertions::assert_eq;

    fn repetition_check() -> Check {
        Check {
            name: "doubled-words".to_string(),
            message: String::new(),
            params: CheckParams::Repetition,
        }
    }

    #[test]
    fn test_builtin_registers_all_kinds() {
        let table = DispatchTable::builtin();
        assert_eq!(table.registered(), CheckKind::ALL.to_vec());
    }

    #[test]
    fn test_dispatch_applies_matcher() {
        let table = DispatchTable::builtin();
        let line = Line::new("a.md", "it is is fine", 1);

        let line = table.dispatch(line, &repetition_check()).unwrap();

        assert_eq!(line.issues.len(), 1);
        assert_eq!(line.issues[0].specimen, "is is");
    }

    #[test]
    fn test_dispatch_unregistered_kind_is_an_error() {
        let table = DispatchTable::new();
        let line = Line::new("a.md", "text", 1);

        let err = table.dispatch(line, &repetition_check()).unwrap_err();

        match err {
            CheckError::UnregisteredKind {
                kind, registered, ..
            } => {
                assert_eq!(kind, CheckKind::Repetition);
                assert!(registered.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_reports_offending_check() {
        let mut table = DispatchTable::new();
        table.register(CheckKind::Existence, matchers::existence::apply);

        let err = table.validate(&[repetition_check()]).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("repetition"));
        assert!(message.contains("doubled-words"));
    }

    #[test]
    fn test_validate_accepts_builtin_checks() {
        let table = DispatchTable::builtin();
        assert!(table.validate(&[repetition_check()]).is_ok());
    }
}
