//! The terminal shell's state, layered over the tab controller.
//!
//! A TUI needs a single source of truth that can be interrogated as the user navigates. Section
//! data and the active tab live in [`TabController`]; this module only adds what the shell needs
//! on top (body scroll, the command line, a status message) and translates key presses into
//! controller selections.

use crate::config::Config;
use crate::tabs::TabController;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Tab bar with the active section body.
    Tabs,
    /// Captures `:` command input.
    Command,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Whether the event loop should keep going after a key press.
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Shell state: the tab controller plus presentation-only extras.
pub struct AppState {
    /// Owner of sections and the active selection.
    pub tabs: TabController,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Vertical scroll offset of the body pane.
    pub scroll: u16,
    /// Accumulates command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Document name shown in the frame title.
    pub label: String,
    /// Lines moved per page scroll.
    pub scroll_step: u16,
    /// Whether the body pane wraps long lines.
    pub wrap: bool,
    /// Inner width of the body pane, or 0 before the first layout.
    pub body_width: u16,
}

impl AppState {
    #[must_use]
    /// Initialises shell state around a loaded controller.
    pub fn new(tabs: TabController, label: impl Into<String>, cfg: &Config) -> Self {
        Self {
            tabs,
            current_view: View::Tabs,
            scroll: 0,
            command_buffer: String::new(),
            message: None,
            label: label.into(),
            scroll_step: cfg.scroll_step,
            wrap: cfg.wrap,
            body_width: 0,
        }
    }

    /// Records the body pane's inner width so scrolling can account for wrapped lines.
    pub fn set_body_width(&mut self, width: u16) {
        self.body_width = width;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    #[must_use]
    /// Largest scroll offset that still leaves the last body row on screen.
    pub fn max_scroll(&self) -> u16 {
        let Ok(section) = self.tabs.active_section() else {
            return 0;
        };
        let width = usize::from(self.body_width);
        let rows: usize = if self.wrap && width > 0 {
            section.body.lines().map(|l| wrapped_rows(l, width)).sum()
        } else {
            section.body.lines().count()
        };
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Selects the tab at `index`, resetting scroll if the selection changed.
    pub fn select_index(&mut self, index: usize) -> bool {
        let before = self.tabs.active_index();
        let valid = self.tabs.select_index(index);
        self.after_select(before);
        valid
    }

    /// Selects the first tab whose id is `id`, resetting scroll if the selection changed.
    pub fn select_id(&mut self, id: &str) -> bool {
        let before = self.tabs.active_index();
        let found = self.tabs.select_id(id);
        self.after_select(before);
        found
    }

    fn after_select(&mut self, before: Option<usize>) {
        if self.tabs.active_index() != before {
            self.scroll = 0;
        }
        self.message = None;
    }

    /// Moves to the following tab, wrapping to the first.
    pub fn next_tab(&mut self) {
        if let Some(active) = self.tabs.active_index() {
            self.select_index((active + 1) % self.tabs.len());
        }
    }

    /// Moves to the preceding tab, wrapping to the last.
    pub fn prev_tab(&mut self) {
        if let Some(active) = self.tabs.active_index() {
            let len = self.tabs.len();
            self.select_index((active + len - 1) % len);
        }
    }

    /// Jumps to the first tab.
    pub fn first_tab(&mut self) {
        self.select_index(0);
    }

    /// Jumps to the last tab.
    pub fn last_tab(&mut self) {
        if let Some(last) = self.tabs.len().checked_sub(1) {
            self.select_index(last);
        }
    }

    /// Scrolls the body down by `lines`, stopping at the last row.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// Scrolls the body up by `lines`.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match self.current_view {
            View::Tabs => self.handle_tabs_key(key),
            View::Command => self.handle_command_key(key),
        }
    }

    fn handle_tabs_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.next_tab(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.prev_tab(),
            KeyCode::Home => self.first_tab(),
            KeyCode::End => self.last_tab(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(self.scroll_step),
            KeyCode::PageUp => self.scroll_up(self.scroll_step),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits are 1-based tab positions
                let position = c
                    .to_digit(10)
                    .and_then(|d| usize::try_from(d).ok())
                    .map_or(0, |d| d - 1);
                if !self.select_index(position) {
                    self.message = Some(format!("No tab {c}"));
                }
            }
            KeyCode::Char(':') => {
                self.current_view = View::Command;
                self.command_buffer.clear();
                self.message = None;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.command_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Esc => {
                self.current_view = View::Tabs;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = std::mem::take(&mut self.command_buffer);
                self.current_view = View::Tabs;
                return self.run_command(cmd.trim());
            }
            _ => {}
        }
        Flow::Continue
    }

    fn run_command(&mut self, cmd: &str) -> Flow {
        match cmd {
            "" => {}
            "q" | "q!" => return Flow::Quit,
            id => {
                if !self.select_id(id) {
                    self.message = Some(format!("No section with id '{id}'"));
                }
            }
        }
        Flow::Continue
    }
}

/// Rows a line occupies when word-wrapped greedily at `width` columns.
fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in line.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than the pane break across rows
        let extra = len.saturating_sub(1) / width;
        rows += extra;
        used = len - extra * width;
    }
    rows
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
