//! Logging via `tracing` and `tracing-subscriber`.
//!
//! The terminal UI owns the screen, so in interactive mode logs only go to a file when one is
//! given. Non-interactive runs log to stderr. `RUST_LOG` overrides the verbosity flag.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Drop all log output.
    Off,
    /// Write to standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Logging settings derived from the command line.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level emitted unless `RUST_LOG` says otherwise.
    pub level: Level,
    /// Destination for log lines.
    pub target: LogTarget,
}

impl LogConfig {
    /// Maps a `-v` count to a level: none is warn, then info, debug, trace.
    #[must_use]
    pub fn from_verbosity(verbosity: u8, target: LogTarget) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, target }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level).into())
            .from_env_lossy()
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.filter());
    let installed = match &config.target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::Logging(format!("cannot open {}: {e}", path.display())))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
