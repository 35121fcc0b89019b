//! The loading pipeline: fetch, parse, assign ids.
//!
//! A document that parses to nothing is rejected here rather than handed to the UI as an empty
//! tab bar.

use crate::error::{Error, Result};
use crate::parser;
use crate::section::IdentifiedSection;
use crate::slug::assign_ids;
use crate::source::DocumentSource;

/// Turns already-fetched text into identified sections.
///
/// # Errors
///
/// Returns [`Error::EmptyParse`] when the text holds no sections.
pub fn sections_from_text(text: &str) -> Result<Vec<IdentifiedSection>> {
    let sections = parser::parse(text);
    if sections.is_empty() {
        tracing::warn!("document contained no sections");
        return Err(Error::EmptyParse);
    }
    Ok(assign_ids(sections))
}

/// Fetches a document and turns it into identified sections.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the source fails, or [`Error::EmptyParse`] if the
/// document holds no sections.
pub fn load(source: &dyn DocumentSource) -> Result<Vec<IdentifiedSection>> {
    let text = source.fetch_text()?;
    let sections = sections_from_text(&text)?;
    tracing::info!(label = %source.label(), sections = sections.len(), "loaded document");
    Ok(sections)
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
