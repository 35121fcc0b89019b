//! Error type shared by the loading pipeline, the tab controller and the terminal shell.
//!
//! Only two failures are expected in normal use: the document could not be read, or it held no
//! content. Both are reported once at the top level. Selecting a tab that does not exist is not
//! an error at all, it is a silent no-op on [`crate::TabController`].

use thiserror::Error;

/// Failures surfaced by plaintabs.
#[derive(Error, Debug)]
pub enum Error {
    /// The document source could not produce any text.
    ///
    /// The reason is human-readable (not found, permission denied, transport failure) and is
    /// shown to the user verbatim.
    #[error("document unavailable: {reason}")]
    SourceUnavailable {
        /// Why the source failed.
        reason: String,
    },

    /// The document was read but contained no sections, e.g. it was entirely blank.
    #[error("no content sections parsed")]
    EmptyParse,

    /// The active section was requested while no sections are loaded.
    #[error("no active section: the tab controller holds no sections")]
    ActiveOnEmpty,

    /// Terminal I/O failed while running the interface.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sections could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
