//! Format trait and implementations for different heading grammars.
//!
//! This module defines the `Format` trait which abstracts over how a document marks its
//! headings. The parser only asks a format two questions: is this line a heading, and what should
//! content before the first heading be called.

pub mod plaintext;

/// Heading grammar used by the section parser.
pub trait Format {
    /// Decides whether a single trimmed line is a section heading.
    fn is_heading(&self, line: &str) -> bool;
    /// Title given to body text that appears before any heading.
    fn default_title(&self) -> &str;
}
