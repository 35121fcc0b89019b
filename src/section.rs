//! Section representation for plain-text documents.
//!
//! A section is a heading line plus the body lines that follow it until the next heading. Once a
//! parse pass has produced sections they are never edited in place; a re-parse replaces the whole
//! list.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Titled run of body text produced by a single parse pass.
pub struct Section {
    /// Heading text, trimmed and never empty.
    pub title: String,
    /// Body lines in original order, joined by a blank line.
    pub body: String,
}

impl Section {
    #[must_use]
    /// Builds a section from a title and its already-joined body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A section addressable by a slug, as handed to the tab controller and the UI.
pub struct IdentifiedSection {
    /// Lowercase `[a-z0-9-]` identifier; not guaranteed unique across a document.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Body text.
    pub body: String,
}

impl IdentifiedSection {
    #[must_use]
    /// Attaches an identifier to a parsed section.
    pub fn new(id: impl Into<String>, section: Section) -> Self {
        Self {
            id: id.into(),
            title: section.title,
            body: section.body,
        }
    }
}
