//! plaintabs: a tabbed viewer for plain-text documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use plaintabs::app_state::{AppState, Flow};
use plaintabs::logging::{LogConfig, LogTarget};
use plaintabs::{config, document, logging, source, ui, TabController};
use ratatui::crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plaintabs")]
#[command(about = "Browse a plain-text document as tabs, one section at a time", long_about = None)]
struct Args {
    /// Document to open, or '-' for standard input
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Id of the section to show first
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Print sections as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> plaintabs::Result<()> {
    // The viewer owns the terminal, so it only logs to a file
    let target = match (&args.log_file, args.json) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Off,
    };
    logging::init(&LogConfig::from_verbosity(args.verbose, target))?;

    let cfg = config::Config::load();
    let source = source::from_arg(&args.path);
    let sections = document::load(source.as_ref())?;

    let mut tabs = TabController::with_sections(sections);
    if let Some(id) = &args.section {
        if !tabs.select_id(id) {
            tracing::warn!(id = id.as_str(), "requested section not found, showing the first");
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&tabs.snapshot()?)?;
        println!("{json}");
        return Ok(());
    }

    let app = AppState::new(tabs, source.label(), &cfg);
    run_tui(app, &cfg)
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> plaintabs::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> plaintabs::Result<()> {
    loop {
        // Body pane spans the full width inside its borders
        let size = terminal.size()?;
        app.set_body_width(size.width.saturating_sub(2));
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
