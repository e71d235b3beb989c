//! Column resolution for offending substrings.

/// Locates `specimen` inside `text`, returning the 0-based byte column of its
/// first occurrence.
///
/// Exact-case search runs first; if it fails, an ASCII case-insensitive
/// search is tried. ASCII folding keeps byte offsets aligned with the
/// original text, which full Unicode lowercasing does not guarantee.
/// Returns `None` when the specimen cannot be located at all — the caller
/// drops the issue in that case, since an issue with no location cannot be
/// displayed.
pub fn find_specimen(text: &str, specimen: &str) -> Option<usize> {
    if specimen.is_empty() {
        return None;
    }

    if let Some(col) = text.find(specimen) {
        return Some(col);
    }

    text.to_ascii_lowercase()
        .find(&specimen.to_ascii_lowercase())
}
