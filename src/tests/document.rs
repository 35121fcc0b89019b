use super::{load, sections_from_text};
use crate::error::{Error, Result};
use crate::source::{DocumentSource, FileSource};
use std::io::Write;
use tempfile::NamedTempFile;

struct FailingSource;

impl DocumentSource for FailingSource {
    fn fetch_text(&self) -> Result<String> {
        Err(Error::SourceUnavailable {
            reason: "connection reset".to_string(),
        })
    }

    fn label(&self) -> String {
        "failing".to_string()
    }
}

#[test]
fn test_load_assigns_ids_in_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Urban Foxes\nFoxes adapt well.\n\nRaccoons\nRaccoons are nocturnal."
    )
    .unwrap();

    let sections = load(&FileSource::new(file.path())).unwrap();

    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["urban-foxes", "raccoons"]);
    assert_eq!(sections[0].body, "Foxes adapt well.");
}

#[test]
fn test_source_failure_propagates() {
    let err = load(&FailingSource).unwrap_err();

    assert!(matches!(err, Error::SourceUnavailable { .. }));
    assert_eq!(err.to_string(), "document unavailable: connection reset");
}

#[test]
fn test_blank_document_is_empty_parse() {
    let err = sections_from_text("\n  \n\n").unwrap_err();

    assert!(matches!(err, Error::EmptyParse));
    assert_eq!(err.to_string(), "no content sections parsed");
}

#[test]
fn test_punctuation_lines_stay_in_introduction() {
    let sections = sections_from_text("???\n...\nÜber Alles\ntext.").unwrap();

    assert_eq!(sections[0].title, "Introduction");
    assert_eq!(sections[0].id, "introduction");
    assert_eq!(sections[1].title, "Über Alles");
    assert_eq!(sections[1].id, "ber-alles");
}

#[test]
fn test_fallback_id_uses_position() {
    let sections = sections_from_text("Overview\nfirst.\nΩμέγα\nsecond.").unwrap();

    assert_eq!(sections[1].title, "Ωμέγα");
    assert_eq!(sections[1].id, "section-2");
}
