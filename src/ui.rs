//! The UI renders the application state into a tab bar and a single visible section.
//!
//! Drawing only reads from [`AppState`]; every selection change goes through the tab controller.
//! Only the active section's body is rendered, so the other panes are hidden by omission.

use crate::app_state::{AppState, View};
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

const HELP: &str = "←/→: Tab | 1-9: Jump | ↑/↓/PgUp/PgDn: Scroll | :id Select | q: Quit";

/// Renders the tab bar, the active section and the help or command line.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let footer = cfg.show_help || app.current_view == View::Command || app.message.is_some();
    let constraints = if footer {
        vec![
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Help
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Min(0)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    draw_tabs(f, app, cfg, chunks[0]);
    draw_body(f, app, cfg, chunks[1]);
    if footer {
        draw_footer(f, app, chunks[2]);
    }
}

fn draw_tabs(f: &mut Frame, app: &AppState, cfg: &Config, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .sections()
        .iter()
        .map(|s| Line::from(s.title.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.label.as_str()),
        )
        .select(app.tabs.active_index().unwrap_or(0))
        .divider(cfg.divider.as_str())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    f.render_widget(tabs, area);
}

fn draw_body(f: &mut Frame, app: &AppState, cfg: &Config, area: Rect) {
    let Ok(section) = app.tabs.active_section() else {
        let empty = Paragraph::new("No sections").block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let title = format!("{} [#{}]", section.title, section.id);
    let mut body = Paragraph::new(section.body.as_str())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));
    if cfg.wrap {
        body = body.wrap(Wrap { trim: false });
    }

    f.render_widget(body, area);
}

fn draw_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let text = if app.current_view == View::Command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        HELP.to_string()
    };

    let block = if app.current_view == View::Command {
        Block::default().borders(Borders::ALL).title("Command")
    } else {
        Block::default().borders(Borders::ALL)
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
