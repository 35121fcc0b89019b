//! Line-by-line segmentation of a document into sections.
//!
//! Blank lines are dropped before anything else looks at them, so they neither start sections
//! nor appear in bodies. Body paragraphs are re-joined with a single blank line, which means the
//! original spacing is normalised rather than preserved.

use crate::formats::plaintext::PlainTextFormat;
use crate::formats::Format;
use crate::section::Section;

/// Separator placed between body lines when a section is finalised.
pub const BODY_SEPARATOR: &str = "\n\n";

/// Section under construction during a parse pass.
struct PendingSection {
    title: String,
    lines: Vec<String>,
}

impl PendingSection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn finish(self) -> Section {
        Section::new(self.title, self.lines.join(BODY_SEPARATOR))
    }
}

#[must_use]
/// Splits plain text into sections using the plain-text heading heuristic.
pub fn parse(raw: &str) -> Vec<Section> {
    parse_with(&PlainTextFormat, raw)
}

#[must_use]
/// Splits text into sections, asking `format` which lines are headings.
///
/// Blank input yields no sections. Body text before the first heading lands in a section named
/// by [`Format::default_title`]; a document that opens with a heading gets no such section.
pub fn parse_with<F: Format + ?Sized>(format: &F, raw: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<PendingSection> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if format.is_heading(line) {
            if let Some(done) = current.take() {
                sections.push(done.finish());
            }
            current = Some(PendingSection::new(line));
        } else {
            current
                .get_or_insert_with(|| PendingSection::new(format.default_title()))
                .lines
                .push(line.to_string());
        }
    }

    if let Some(done) = current {
        sections.push(done.finish());
    }

    tracing::debug!(sections = sections.len(), "parsed document");
    sections
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
