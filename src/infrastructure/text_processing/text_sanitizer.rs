use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A word broken across a line end by a hyphen, e.g. "retrie-\nval".
static BROKEN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").expect("static regex")
});

static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("static regex"));

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex"));

/// Cleans up raw PDF page text: NFKC-folds ligatures and full-width forms,
/// rejoins hyphenated line breaks, collapses spaces and tabs, and keeps at
/// most one blank line between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let unix = folded.replace("\r\n", "\n");
    let joined = BROKEN_WORD.replace_all(&unix, "$head$tail");
    let spaced = INLINE_WHITESPACE.replace_all(&joined, " ");

    let trimmed_lines = spaced
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_RUN
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}
