//! Identifier derivation for section titles.
//!
//! Slugs are lowercase ASCII with hyphens, safe in URLs and element ids. Two titles can map to
//! the same slug; nothing here deduplicates them. Consumers keyed by id see the last section with
//! a given slug, while [`crate::TabController::select_id`] picks the first.

use crate::section::{IdentifiedSection, Section};

/// Longest slug produced, in characters.
pub const MAX_SLUG_LEN: usize = 60;

#[must_use]
/// Derives an identifier from a title.
///
/// Lowercases, drops everything outside `[a-z0-9]`, whitespace and `-`, trims, turns each
/// whitespace run into a single `-`, then truncates to [`MAX_SLUG_LEN`]. If the cut leaves a
/// hyphen that replaced whitespace at the end, it is dropped; hyphens from the title are kept. The result may be empty; callers that need an id regardless should
/// use [`assign_ids`].
pub fn slug(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut out = String::with_capacity(kept.len());
    let mut joints = Vec::new();
    for word in kept.split_whitespace() {
        if !out.is_empty() {
            joints.push(out.len());
            out.push('-');
        }
        out.push_str(word);
    }

    if out.len() > MAX_SLUG_LEN {
        // Only ASCII survives the filter, so byte and char lengths agree.
        out.truncate(MAX_SLUG_LEN);
        // A hyphen standing in for whitespace must not end the slug
        if joints.contains(&(MAX_SLUG_LEN - 1)) {
            out.pop();
        }
    }
    out
}

#[must_use]
/// Gives every section an id, falling back to `section-N` (1-based) for unsluggable titles.
pub fn assign_ids(sections: Vec<Section>) -> Vec<IdentifiedSection> {
    sections
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let mut id = slug(&section.title);
            if id.is_empty() {
                id = format!("section-{}", i + 1);
            }
            IdentifiedSection::new(id, section)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
