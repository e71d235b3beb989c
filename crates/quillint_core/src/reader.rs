//! Line reader with code-block neutralization.

use std::fs;
use std::path::Path;

use quillint_text::Line;

use crate::LintError;

/// Upstream size cutoff; larger files never reach the engine.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a file into lines, neutralizing regions checks must not see.
///
/// Fenced code blocks (``` or ~~~) and, when `skip_quoted` is set,
/// `>`-quoted lines are replaced with equal-length blank runs — never
/// shortened — so column numbers stay valid in the surviving text.
pub fn read_lines(path: &Path, skip_quoted: bool) -> Result<Vec<Line>, LintError> {
    let metadata = fs::metadata(path).map_err(|e| {
        LintError::file(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        ))
    })?;

    if !metadata.is_file() {
        return Err(LintError::file(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(LintError::file(format!(
            "File size exceeds limit of {} bytes: {}",
            MAX_FILE_SIZE,
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| LintError::file(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(neutralize(&path.to_string_lossy(), &content, skip_quoted))
}

/// Splits content into lines with ignored regions blanked out.
pub fn neutralize(file: &str, content: &str, skip_quoted: bool) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut in_fence = false;

    for (idx, raw) in content.lines().enumerate() {
        let trimmed = raw.trim_start();
        let is_fence = trimmed.starts_with("```") || trimmed.starts_with("~~~");

        let text = if is_fence {
            in_fence = !in_fence;
            blank_run(raw)
        } else if in_fence {
            blank_run(raw)
        } else if skip_quoted && trimmed.starts_with('>') {
            blank_run(raw)
        } else {
            raw.to_string()
        };

        lines.push(Line::new(file, text, idx + 1));
    }

    lines
}

/// A blank run with the same byte length as the original text.
fn blank_run(text: &str) -> String {
    " ".repeat(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_plain_lines_are_kept_verbatim() {
        let lines = neutralize("a.md", "First line.\nSecond line.", false);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "First line.");
        assert_eq!(lines[0].line_num, 1);
        assert_eq!(lines[1].line_num, 2);
    }

    #[test]
    fn test_fenced_code_is_blanked_with_equal_length() {
        let content = "Before.\n```rust\nlet x = very;\n```\nAfter.";
        let lines = neutralize("a.md", content, false);

        assert_eq!(lines[0].text, "Before.");
        assert_eq!(lines[1].text, " ".repeat("```rust".len()));
        assert_eq!(lines[2].text, " ".repeat("let x = very;".len()));
        assert_eq!(lines[4].text, "After.");
    }

    #[test]
    fn test_line_numbers_survive_blanking() {
        let content = "a\n```\ncode\n```\nb";
        let lines = neutralize("a.md", content, false);

        let nums: Vec<usize> = lines.iter().map(|l| l.line_num).collect();
        assert_eq!(nums, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_quoted_lines_follow_the_toggle() {
        let content = "> quoted very\nplain very";

        let kept = neutralize("a.md", content, false);
        assert_eq!(kept[0].text, "> quoted very");

        let blanked = neutralize("a.md", content, true);
        assert_eq!(blanked[0].text, " ".repeat("> quoted very".len()));
        assert_eq!(blanked[1].text, "plain very");
    }

    #[test]
    fn test_tilde_fence_is_recognized() {
        let content = "~~~\nhidden\n~~~";
        let lines = neutralize("a.md", content, false);

        assert_eq!(lines[1].text, " ".repeat("hidden".len()));
    }

    #[test]
    fn test_read_lines_rejects_missing_file() {
        let err = read_lines(Path::new("/nonexistent/file.md"), false).unwrap_err();
        assert!(matches!(err, LintError::File(_)));
    }

    #[test]
    fn test_read_lines_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Hello there.").unwrap();
        writeln!(file, "Second line.").unwrap();

        let lines = read_lines(file.path(), false).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Second line.");
        assert_eq!(lines[1].file, file.path().to_string_lossy());
    }
}
