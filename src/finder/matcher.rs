//! Line-by-line substring search for needles in target text.

use regex::Regex;

use super::models::Match;

static LINE_BREAK_RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();

fn line_break_re() -> &'static Regex {
    LINE_BREAK_RE.get_or_init(|| Regex::new(r"\r\n|\r|\n").unwrap())
}

/// Split on `\r\n`, `\r`, or `\n`. A trailing break yields one trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    line_break_re().split(text)
}

/// Every (line, needle) pair where `needle` occurs in `line`, in line order then needle order.
/// Only the leftmost occurrence per line is reported. Empty needles never match.
pub fn find_matches<S: AsRef<str>>(text: &str, needles: &[S]) -> Vec<Match> {
    let mut matches = Vec::new();
    for (row_index, line) in split_lines(text).enumerate() {
        for needle in needles {
            let needle = needle.as_ref();
            if needle.is_empty() {
                continue;
            }
            if let Some(col) = line.find(needle) {
                matches.push(Match {
                    line: line.to_string(),
                    needle: needle.to_string(),
                    row: row_index + 1,
                    col,
                });
            }
        }
    }
    matches
}
