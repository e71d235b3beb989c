//! Cache record types.

use serde::{Deserialize, Serialize};

use quillint_text::{Issue, Line};

/// The persisted outcome of matching one file.
///
/// A record is created by the recompute engine after a successful match
/// pass, persisted by the store, and read back on the next invocation for
/// the same file. It is treated as absent whenever any of the three hash
/// channels mismatches the current inputs, or when it fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// The exact line snapshot used to produce `results`.
    pub lines: Vec<Line>,

    /// Stable hash over the full line snapshot.
    pub lines_hash: u64,

    /// Stable hash of the file identity; the record's storage key.
    pub file_hash: u64,

    /// Snapshot of the resolved configuration, for inspection.
    pub config: serde_json::Value,

    /// Stable hash of the resolved configuration, excluding checks.
    pub config_hash: u64,

    /// Stable hash of the resolved check list.
    pub check_hash: u64,

    /// Output-mode tag in effect when this record was cached.
    pub output: String,

    /// Flattened issue list.
    pub results: Vec<Issue>,
}

impl CacheRecord {
    /// Returns true when all three hash channels match the current inputs.
    ///
    /// Any single mismatch invalidates the whole record; there is no partial
    /// reuse across a config or check change.
    pub fn is_valid(&self, lines_hash: u64, config_hash: u64, check_hash: u64) -> bool {
        self.lines_hash == lines_hash
            && self.config_hash == config_hash
            && self.check_hash == check_hash
    }

    /// Returns true when only the line snapshot changed.
    ///
    /// This is the window where the engine may reuse per-line results
    /// instead of re-matching the whole file.
    pub fn reusable_for(&self, config_hash: u64, check_hash: u64) -> bool {
        self.config_hash == config_hash && self.check_hash == check_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quillint_text::CheckKind;
    use rstest::rstest;

    fn record() -> CacheRecord {
        CacheRecord {
            lines: vec![Line::new("a.md", "very good", 1)],
            lines_hash: 11,
            file_hash: 22,
            config: serde_json::json!({ "output": "text" }),
            config_hash: 33,
            check_hash: 44,
            output: "text".to_string(),
            results: vec![Issue::new(
                "a.md",
                1,
                "weasel",
                CheckKind::Existence,
                "very",
                0,
                "Weasel word.",
            )],
        }
    }

    #[test]
    fn test_record_valid_when_all_channels_match() {
        assert!(record().is_valid(11, 33, 44));
    }

    #[rstest]
    #[case::lines_changed(12, 33, 44)]
    #[case::config_changed(11, 34, 44)]
    #[case::checks_changed(11, 33, 45)]
    fn test_record_invalid_on_any_channel_mismatch(
        #[case] lines_hash: u64,
        #[case] config_hash: u64,
        #[case] check_hash: u64,
    ) {
        assert!(!record().is_valid(lines_hash, config_hash, check_hash));
    }

    #[test]
    fn test_reusable_only_within_unchanged_config_and_checks() {
        let record = record();

        assert!(record.reusable_for(33, 44));
        assert!(!record.reusable_for(34, 44));
        assert!(!record.reusable_for(33, 45));
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = record();

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: CacheRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
    }
}
