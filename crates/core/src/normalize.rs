//! Text normalization for OCR transcripts.
//!
//! Splits a transcript into lines, trims them, strips a single leading
//! bullet glyph or single-digit list marker, and drops lines left empty.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a single-digit list marker such as `1.` or `3)`.
static NUMERIC_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9][.)]").unwrap());

/// Characters that end a transcript line. Besides `\n` and `\r` this covers
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// Unicode line and paragraph separators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Bullet glyphs recognized at the start of a line, tested in this order.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '–', '—', '*', '·'];

/// Normalizer for raw OCR transcripts.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new text normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a single line of text.
    ///
    /// - Trims leading/trailing whitespace (including `\r`)
    /// - Removes one leading bullet glyph, or else a `N.`/`N)` marker
    /// - Trims again after removing a prefix
    ///
    /// Only a single digit forms a numeric marker, so `"10. Ten"` is kept
    /// whole while `"3.14 is pi"` loses its `3.` and becomes `"14 is pi"`.
    ///
    /// A glyph and a numeric marker are never both removed in one pass:
    /// `"- 1. Step"` becomes `"1. Step"`.
    pub fn normalize_line(&self, line: &str) -> String {
        let stripped = line.trim();

        if let Some(rest) = BULLET_GLYPHS
            .iter()
            .find_map(|glyph| stripped.strip_prefix(*glyph))
        {
            return rest.trim().to_string();
        }

        if let Some(marker) = NUMERIC_PREFIX_REGEX.find(stripped) {
            return stripped[marker.end()..].trim().to_string();
        }

        stripped.to_string()
    }

    /// Normalize a whole transcript, returning its non-empty lines in order.
    ///
    /// A lone `\r` breaks a line just like `\n`; `\r\n` yields one break.
    pub fn normalize_transcript(&self, text: &str) -> Vec<String> {
        text.split(LINE_BREAKS)
            .map(|line| self.normalize_line(line))
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("  Hello  "), "Hello");
        assert_eq!(normalizer.normalize_line("\tHello\r"), "Hello");
        assert_eq!(normalizer.normalize_line("Hello world"), "Hello world");
    }

    #[test]
    fn test_strip_each_bullet_glyph() {
        let normalizer = TextNormalizer::new();

        for glyph in BULLET_GLYPHS {
            let line = format!("{glyph} Item");
            assert_eq!(normalizer.normalize_line(&line), "Item", "glyph {glyph:?}");
        }
        assert_eq!(normalizer.normalize_line("•Item"), "Item");
    }

    #[test]
    fn test_strip_only_one_glyph() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("- - Item"), "- Item");
        assert_eq!(normalizer.normalize_line("** bold"), "* bold");
    }

    #[test]
    fn test_strip_numeric_prefix() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("1. World"), "World");
        assert_eq!(normalizer.normalize_line("2) Second"), "Second");
        assert_eq!(normalizer.normalize_line("  9.Ninth"), "Ninth");
    }

    #[test]
    fn test_multi_digit_prefix_passes_through() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("10. Tenth"), "10. Tenth");
        assert_eq!(normalizer.normalize_line("1999 was a year"), "1999 was a year");
        assert_eq!(normalizer.normalize_line("3.14 is pi"), "14 is pi");
    }

    #[test]
    fn test_glyph_wins_over_numeric_prefix() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("- 1. Step one"), "1. Step one");
    }

    #[test]
    fn test_prefix_only_lines_become_empty() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_line("•"), "");
        assert_eq!(normalizer.normalize_line("1)"), "");
        assert_eq!(normalizer.normalize_line("   "), "");
    }

    #[test]
    fn test_normalized_lines_are_stable() {
        let normalizer = TextNormalizer::new();

        for raw in ["• Hello", "1. World", "  plain text ", "– Only line", "10. Tenth", "x"] {
            let once = normalizer.normalize_line(raw);
            assert_eq!(normalizer.normalize_line(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_normalize_transcript_drops_empty_lines() {
        let normalizer = TextNormalizer::new();

        let lines = normalizer.normalize_transcript("• Hello\n1. World\nWorld\n\n");
        assert_eq!(lines, vec!["Hello", "World", "World"]);

        let lines = normalizer.normalize_transcript("A\r\n\r\n  \n-\nB\r\n");
        assert_eq!(lines, vec!["A", "B"]);
    }

    #[test]
    fn test_normalize_transcript_splits_on_all_line_breaks() {
        let normalizer = TextNormalizer::new();

        assert_eq!(normalizer.normalize_transcript("Title\rBullet"), vec!["Title", "Bullet"]);
        assert_eq!(
            normalizer.normalize_transcript("Title\u{2028}Bullet\x0bMore"),
            vec!["Title", "Bullet", "More"]
        );
        assert_eq!(
            normalizer.normalize_transcript("a\x0cb\x1cc\x1dd\x1ee\u{85}f\u{2029}g"),
            vec!["a", "b", "c", "d", "e", "f", "g"]
        );
    }

    #[test]
    fn test_normalize_transcript_empty() {
        let normalizer = TextNormalizer::new();

        assert!(normalizer.normalize_transcript("").is_empty());
        assert!(normalizer.normalize_transcript("\n\n \x0c").is_empty());
    }

    #[test]
    fn test_normalize_transcript_never_yields_empty_strings() {
        let normalizer = TextNormalizer::new();
        let transcript = "•\n - \n1.\n2)  \n*\n·\nkeep\n—\n";

        let lines = normalizer.normalize_transcript(transcript);
        assert_eq!(lines, vec!["keep"]);
        assert!(lines.iter().all(|l| !l.is_empty()));
    }
}
