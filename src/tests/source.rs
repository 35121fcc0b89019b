use super::{from_arg, DocumentSource, FileSource};
use crate::error::Error;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_file_source_reads_text() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Urban Foxes\nFoxes adapt well.").unwrap();

    let source = FileSource::new(file.path());

    assert_eq!(source.fetch_text().unwrap(), "Urban Foxes\nFoxes adapt well.");
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path().join("absent.txt"));

    match source.fetch_text() {
        Err(Error::SourceUnavailable { reason }) => {
            assert!(reason.contains("absent.txt"), "reason: {reason}");
            assert!(reason.contains("not found"), "reason: {reason}");
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Caf\xff Notes\nbody.").unwrap();

    let text = FileSource::new(file.path()).fetch_text().unwrap();

    assert_eq!(text, "Caf\u{fffd} Notes\nbody.");
}

#[test]
fn test_label_is_file_name() {
    let source = FileSource::new("/tmp/notes/wildlife.txt");
    assert_eq!(source.label(), "wildlife.txt");
}

#[test]
fn test_dash_means_stdin() {
    assert_eq!(from_arg("-".as_ref()).label(), "<stdin>");
    assert_eq!(from_arg("notes.txt".as_ref()).label(), "notes.txt");
}
