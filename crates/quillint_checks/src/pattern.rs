//! Word-boundary pattern construction.

use regex::Regex;

/// Characters that mark markdown/org link text and heading syntax.
///
/// A word-boundary match immediately preceded by one of these is not a prose
/// hit (link text, heading marker) and is skipped. The set is fixed; `_` is
/// also a word character, so `\b` already rejects it, but it stays listed so
/// the full set is visible in one place.
pub const LINK_MARKERS: [char; 4] = ['[', '#', '-', '_'];

/// Builds one combined alternation over `specimens`, anchored at word
/// boundaries. Specimens are matched literally.
pub fn boundary_pattern(specimens: &[String], case_insensitive: bool) -> Result<Regex, regex::Error> {
    let alternation: Vec<String> = specimens.iter().map(|s| regex::escape(s)).collect();
    let body = alternation.join("|");

    let source = if case_insensitive {
        format!(r"(?i)\b(?:{body})\b")
    } else {
        format!(r"\b(?:{body})\b")
    };

    Regex::new(&source)
}

/// Iterates matches of a boundary pattern, dropping any match immediately
/// preceded by a link-marker character.
///
/// The `regex` crate has no lookbehind, so the marker exclusion is applied
/// here instead of inside the pattern.
pub fn boundary_matches<'t>(
    re: &'t Regex,
    text: &'t str,
) -> impl Iterator<Item = regex::Match<'t>> + 't {
    re.find_iter(text)
        .filter(|m| !preceded_by_marker(text, m.start()))
}

fn preceded_by_marker(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| LINK_MARKERS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specimens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_boundary_blocks_partial_words() {
        let re = boundary_pattern(&specimens(&["the"]), true).unwrap();
        let hits: Vec<&str> = boundary_matches(&re, "The theory is solid.")
            .map(|m| m.as_str())
            .collect();

        // "The" matches; "theory" does not.
        assert_eq!(hits, vec!["The"]);
    }

    #[test]
    fn test_case_sensitive_pattern() {
        let re = boundary_pattern(&specimens(&["Github"]), false).unwrap();

        assert_eq!(boundary_matches(&re, "Github is here").count(), 1);
        assert_eq!(boundary_matches(&re, "github is here").count(), 0);
    }

    use rstest::rstest;

    #[rstest]
    #[case::link_text("[very](url)", 0)]
    #[case::heading_marker("#very", 0)]
    #[case::list_marker("-very", 0)]
    #[case::plain_prose("so very much", 1)]
    fn test_link_marker_exclusion(#[case] text: &str, #[case] expected: usize) {
        let re = boundary_pattern(&specimens(&["very"]), true).unwrap();

        assert_eq!(boundary_matches(&re, text).count(), expected);
    }

    #[test]
    fn test_underscore_prefix_never_matches() {
        // "_" is a word character, so the boundary itself rejects it.
        let re = boundary_pattern(&specimens(&["very"]), true).unwrap();
        assert_eq!(boundary_matches(&re, "_very").count(), 0);
    }

    #[test]
    fn test_specimens_with_regex_metacharacters() {
        let re = boundary_pattern(&specimens(&["e.g"]), true).unwrap();

        // The dot is escaped: "e.g" matches but "exg" does not.
        assert_eq!(boundary_matches(&re, "see e.g the docs").count(), 1);
        assert_eq!(boundary_matches(&re, "see exg the docs").count(), 0);
    }

    #[test]
    fn test_multiple_specimens_single_pass() {
        let re = boundary_pattern(&specimens(&["very", "fairly"]), true).unwrap();
        let hits: Vec<&str> = boundary_matches(&re, "very fairly very")
            .map(|m| m.as_str())
            .collect();

        assert_eq!(hits, vec!["very", "fairly", "very"]);
    }
}
