//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a plaintabs.toml, and if present we load settings from there.
//! This provides body wrapping, tab bar styling and scroll step preferences.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "plaintabs.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from plaintabs.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Wrap long body lines to the pane width.
    pub wrap: bool,
    #[facet(default = "|".to_string())]
    /// Separator drawn between tab labels.
    pub divider: String,
    #[facet(default = true)]
    /// Show the key help bar below the body.
    pub show_help: bool,
    #[facet(default = 10)]
    /// Lines scrolled by `PageUp`/`PageDown`.
    pub scroll_step: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap: true,
            divider: "|".to_string(),
            show_help: true,
            scroll_step: 10,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from plaintabs.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
