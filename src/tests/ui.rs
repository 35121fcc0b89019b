use super::draw;
use crate::app_state::AppState;
use crate::config::Config;
use crate::document::sections_from_text;
use crate::tabs::TabController;
use ratatui::{backend::TestBackend, Terminal};

const DOC: &str = "Urban Foxes\nFoxes adapt well.\n\nRaccoons\nRaccoons are nocturnal.";

fn render(app: &AppState, cfg: &Config) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
    terminal.draw(|f| draw(f, app, cfg)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn app() -> AppState {
    let tabs = TabController::with_sections(sections_from_text(DOC).unwrap());
    AppState::new(tabs, "wildlife.txt", &Config::default())
}

#[test]
fn test_all_tab_labels_and_only_active_body() {
    let screen = render(&app(), &Config::default());

    assert!(screen.contains("Urban Foxes"));
    assert!(screen.contains("Raccoons"));
    assert!(screen.contains("wildlife.txt"));
    assert!(screen.contains("Foxes adapt well."));
    assert!(!screen.contains("nocturnal"), "inactive body should be hidden");
}

#[test]
fn test_selection_changes_visible_body() {
    let mut app = app();
    app.select_id("raccoons");

    let screen = render(&app, &Config::default());

    assert!(screen.contains("Raccoons are nocturnal."));
    assert!(screen.contains("[#raccoons]"));
    assert!(!screen.contains("Foxes adapt well."));
}

#[test]
fn test_help_bar_follows_config() {
    let cfg = Config {
        show_help: false,
        ..Config::default()
    };

    assert!(render(&app(), &Config::default()).contains("q: Quit"));
    assert!(!render(&app(), &cfg).contains("q: Quit"));
}

#[test]
fn test_message_replaces_help() {
    let mut app = app();
    app.message = Some("No tab 9".to_string());

    let screen = render(&app, &Config::default());

    assert!(screen.contains("No tab 9"));
    assert!(!screen.contains("q: Quit"));
}

#[test]
fn test_empty_controller_renders_placeholder() {
    let app = AppState::new(TabController::new(), "empty.txt", &Config::default());

    assert!(render(&app, &Config::default()).contains("No sections"));
}
