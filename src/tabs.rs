//! Single-selection tab state machine.
//!
//! The controller owns the ordered sections and which one is active. Presentation code reads it
//! and forwards user intent through the `select_*` methods, but never reaches into the state
//! itself.
//!
//! ```text
//! Empty --initialize(non-empty)--> Ready(sections, 0)
//! Ready --initialize([])---------> Empty
//! Ready --select_id / select_index (valid)--> Ready(sections, k)
//! ```
//!
//! Invalid selections leave the state untouched. There is never a moment where zero or several
//! sections are active while `Ready`.

use crate::error::{Error, Result};
use crate::section::IdentifiedSection;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Either nothing is loaded, or a non-empty list with exactly one active entry.
pub enum TabState {
    /// No sections are loaded.
    #[default]
    Empty,
    /// Sections are loaded and `active` indexes into them.
    Ready {
        /// Sections in document order; never empty.
        sections: Vec<IdentifiedSection>,
        /// Index of the visible section, always `< sections.len()`.
        active: usize,
    },
}

#[derive(Serialize)]
/// Serialisable view of a loaded controller.
pub struct Snapshot<'a> {
    /// Id of the active section.
    pub active: &'a str,
    /// All sections in order.
    pub sections: &'a [IdentifiedSection],
}

#[derive(Debug, Default)]
/// Owner of the tab list and the active selection.
pub struct TabController {
    state: TabState,
}

impl TabController {
    #[must_use]
    /// Creates a controller with no sections loaded.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Creates a controller already initialised with `sections`.
    pub fn with_sections(sections: Vec<IdentifiedSection>) -> Self {
        let mut controller = Self::new();
        controller.initialize(sections);
        controller
    }

    /// Replaces all state; the first section becomes active, or the controller empties.
    pub fn initialize(&mut self, sections: Vec<IdentifiedSection>) {
        self.state = if sections.is_empty() {
            TabState::Empty
        } else {
            TabState::Ready {
                sections,
                active: 0,
            }
        };
        tracing::debug!(tabs = self.len(), "tab controller initialised");
    }

    /// Activates the first section whose id equals `id`.
    ///
    /// Returns `false` and changes nothing when no section matches or nothing is loaded.
    pub fn select_id(&mut self, id: &str) -> bool {
        let TabState::Ready { sections, active } = &mut self.state else {
            return false;
        };
        if let Some(index) = sections.iter().position(|s| s.id == id) {
            *active = index;
            tracing::trace!(id, index, "tab selected by id");
            true
        } else {
            tracing::debug!(id, "ignored selection of unknown tab id");
            false
        }
    }

    /// Activates the section at `index`.
    ///
    /// Returns `false` and changes nothing when the index is out of range or nothing is loaded.
    pub fn select_index(&mut self, index: usize) -> bool {
        let TabState::Ready { sections, active } = &mut self.state else {
            return false;
        };
        if index < sections.len() {
            *active = index;
            tracing::trace!(index, "tab selected by index");
            true
        } else {
            tracing::debug!(index, tabs = sections.len(), "ignored out-of-range tab index");
            false
        }
    }

    /// The currently visible section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActiveOnEmpty`] when no sections are loaded.
    pub fn active_section(&self) -> Result<&IdentifiedSection> {
        match &self.state {
            TabState::Ready { sections, active } => Ok(&sections[*active]),
            TabState::Empty => Err(Error::ActiveOnEmpty),
        }
    }

    #[must_use]
    /// Index of the active section, if any.
    pub fn active_index(&self) -> Option<usize> {
        match &self.state {
            TabState::Ready { active, .. } => Some(*active),
            TabState::Empty => None,
        }
    }

    #[must_use]
    /// Id of the active section, for highlighting.
    pub fn active_id(&self) -> Option<&str> {
        self.active_section().ok().map(|s| s.id.as_str())
    }

    #[must_use]
    /// All sections in document order; empty when nothing is loaded.
    pub fn sections(&self) -> &[IdentifiedSection] {
        match &self.state {
            TabState::Ready { sections, .. } => sections,
            TabState::Empty => &[],
        }
    }

    #[must_use]
    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.sections().len()
    }

    #[must_use]
    /// Whether the controller is in the `Empty` state.
    pub fn is_empty(&self) -> bool {
        matches!(self.state, TabState::Empty)
    }

    #[must_use]
    /// Read access to the raw state.
    pub fn state(&self) -> &TabState {
        &self.state
    }

    /// Borrowed `{active, sections}` view for serialisation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ActiveOnEmpty`] when no sections are loaded.
    pub fn snapshot(&self) -> Result<Snapshot<'_>> {
        let active = self.active_section()?;
        Ok(Snapshot {
            active: &active.id,
            sections: self.sections(),
        })
    }
}

#[cfg(test)]
#[path = "tests/tabs.rs"]
mod tests;
