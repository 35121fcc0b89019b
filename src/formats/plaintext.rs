//! Plain-text format implementation using a capitalisation heuristic.
//!
//! Prose documents rarely mark their headings, but a heading is usually short, lacks terminal
//! punctuation, and is written in title case or at least starts with a capital. The rule here
//! checks exactly those three things.

use crate::formats::Format;
use regex::Regex;
use std::sync::LazyLock;

/// Lines longer than this are never headings.
pub const MAX_HEADING_CHARS: usize = 120;

/// Title given to body text that precedes the first heading.
pub const INTRODUCTION: &str = "Introduction";

static CAPITALIZED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][\w'\-]*$").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// Heading grammar for unmarked prose.
pub struct PlainTextFormat;

impl Format for PlainTextFormat {
    fn is_heading(&self, line: &str) -> bool {
        is_heading(line)
    }

    fn default_title(&self) -> &'static str {
        INTRODUCTION
    }
}

#[must_use]
/// Classifies a single line as a heading.
///
/// The line is trimmed first; blank input is never a heading. A heading is at most
/// [`MAX_HEADING_CHARS`] characters, does not end in `.`, `!` or `?`, and either starts with an
/// uppercase letter or has at least 40% capitalised words (an ASCII capital followed by word
/// characters, apostrophes or hyphens).
pub fn is_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.chars().count() > MAX_HEADING_CHARS {
        return false;
    }
    if line.ends_with(['.', '!', '?']) {
        return false;
    }

    let mut total = 0usize;
    let mut capitalized = 0usize;
    for word in line.split_whitespace() {
        total += 1;
        if CAPITALIZED_WORD.is_match(word) {
            capitalized += 1;
        }
    }

    // capitalized / max(1, total) >= 0.4, kept in integers
    let mostly_capitalized = capitalized * 5 >= total.max(1) * 2;
    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);

    mostly_capitalized || starts_upper
}

#[cfg(test)]
#[path = "../tests/plaintext.rs"]
mod tests;
