//! Where document text comes from.
//!
//! A source either yields the whole document or fails with a readable reason. There are no
//! retries and no partial reads; the caller aborts on the first failure.

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// One-shot provider of a document's full text.
pub trait DocumentSource {
    /// Fetches the complete text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] when the text cannot be produced.
    fn fetch_text(&self) -> Result<String>;

    /// Short name for the document, shown in the UI.
    fn label(&self) -> String;
}

/// Reads a document from the filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    /// Creates a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    /// Path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn fetch_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path).map_err(|e| unavailable(&self.path, &e))?;
        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "read document");
        Ok(decode(bytes))
    }

    fn label(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Reads a document from standard input.
pub struct StdinSource;

impl DocumentSource for StdinSource {
    fn fetch_text(&self) -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| Error::SourceUnavailable {
                reason: format!("failed to read standard input: {e}"),
            })?;
        tracing::info!(bytes = bytes.len(), "read document from stdin");
        Ok(decode(bytes))
    }

    fn label(&self) -> String {
        "<stdin>".to_string()
    }
}

#[must_use]
/// Picks a source for a CLI path argument, treating `-` as standard input.
pub fn from_arg(path: &Path) -> Box<dyn DocumentSource> {
    if path.as_os_str() == "-" {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(path))
    }
}

/// Text is assumed to be UTF-8; stray invalid bytes become replacement characters.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("document is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn unavailable(path: &Path, err: &io::Error) -> Error {
    let reason = match err.kind() {
        io::ErrorKind::NotFound => format!("{} not found", path.display()),
        io::ErrorKind::PermissionDenied => format!("permission denied reading {}", path.display()),
        _ => format!("failed to read {}: {err}", path.display()),
    };
    Error::SourceUnavailable { reason }
}

#[cfg(test)]
#[path = "tests/source.rs"]
mod tests;
