//! Check kind tags.

use serde::{Deserialize, Serialize};

/// The tag selecting which matching algorithm a check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Case-insensitive literal existence.
    Existence,
    /// Exact-case literal existence.
    Case,
    /// Word substitution, case-insensitive.
    Recommender,
    /// Word substitution, exact-case.
    CaseRecommender,
    /// Consecutive identical word tokens.
    Repetition,
    /// Regular expression matching.
    Regex,
}

impl CheckKind {
    /// All kinds the engine knows about.
    pub const ALL: [CheckKind; 6] = [
        CheckKind::Existence,
        CheckKind::Case,
        CheckKind::Recommender,
        CheckKind::CaseRecommender,
        CheckKind::Repetition,
        CheckKind::Regex,
    ];

    /// Returns the tag as it appears in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Existence => "existence",
            CheckKind::Case => "case",
            CheckKind::Recommender => "recommender",
            CheckKind::CaseRecommender => "case-recommender",
            CheckKind::Repetition => "repetition",
            CheckKind::Regex => "regex",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in CheckKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let back: CheckKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_kind_display_matches_tag() {
        assert_eq!(CheckKind::CaseRecommender.to_string(), "case-recommender");
        assert_eq!(CheckKind::Existence.to_string(), "existence");
    }
}
