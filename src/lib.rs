//! plaintabs: split plain-text documents into titled sections and browse them as tabs.
//!
//! Headings are recognised from capitalisation and punctuation alone, so any prose file works
//! without markup. The parsed sections feed a single-selection tab controller which the terminal
//! UI observes and drives.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod logging;
pub mod parser;
pub mod section;
pub mod slug;
pub mod source;
pub mod tabs;
pub mod ui;

pub use error::{Error, Result};
pub use section::{IdentifiedSection, Section};
pub use tabs::{TabController, TabState};
