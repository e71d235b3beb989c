//! Check definitions.

use serde::{Deserialize, Serialize};

use quillint_text::CheckKind;

/// One configured rule, applied to every line of input.
///
/// The `kind` tag in the serialized form selects which parameters are
/// required; the config resolver validates per-kind shape before checks
/// reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Display name of the check.
    pub name: String,

    /// Message attached to issues this check produces.
    #[serde(default)]
    pub message: String,

    /// Kind tag plus per-kind parameters.
    #[serde(flatten)]
    pub params: CheckParams,
}

/// Per-kind parameters, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CheckParams {
    /// Case-insensitive literal strings to flag.
    Existence {
        specimens: Vec<String>,
    },
    /// Exact-case literal strings to flag.
    Case {
        specimens: Vec<String>,
    },
    /// Case-insensitive word substitutions.
    Recommender {
        recommendations: Vec<Recommendation>,
    },
    /// Exact-case word substitutions.
    CaseRecommender {
        recommendations: Vec<Recommendation>,
    },
    /// Consecutive identical word tokens. No parameters.
    Repetition,
    /// Regular expressions to match.
    Regex {
        expressions: Vec<PatternSpec>,
    },
}

/// One `{prefer, avoid}` substitution pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The wording to suggest.
    pub prefer: String,
    /// The wording to flag.
    pub avoid: String,
}

/// One `{pattern, message}` regular expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression source.
    pub pattern: String,
    /// Message for issues produced by this expression.
    #[serde(default)]
    pub message: String,
}

impl Check {
    /// Returns the kind tag of this check.
    pub fn kind(&self) -> CheckKind {
        match self.params {
            CheckParams::Existence { .. } => CheckKind::Existence,
            CheckParams::Case { .. } => CheckKind::Case,
            CheckParams::Recommender { .. } => CheckKind::Recommender,
            CheckParams::CaseRecommender { .. } => CheckKind::CaseRecommender,
            CheckParams::Repetition => CheckKind::Repetition,
            CheckParams::Regex { .. } => CheckKind::Regex,
        }
    }
}
