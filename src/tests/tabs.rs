use super::{TabController, TabState};
use crate::error::Error;
use crate::section::{IdentifiedSection, Section};
use proptest::prelude::*;

fn sample() -> Vec<IdentifiedSection> {
    vec![
        IdentifiedSection::new("urban-foxes", Section::new("Urban Foxes", "Foxes adapt well.")),
        IdentifiedSection::new("raccoons", Section::new("Raccoons", "Raccoons are nocturnal.")),
        IdentifiedSection::new("badgers", Section::new("Badgers", "Badgers dig setts.")),
    ]
}

#[test]
fn test_initialize_empty_is_empty_state() {
    let mut tabs = TabController::new();
    tabs.initialize(vec![]);

    assert!(tabs.is_empty());
    assert_eq!(tabs.state(), &TabState::Empty);
    assert!(matches!(tabs.active_section(), Err(Error::ActiveOnEmpty)));
    assert_eq!(tabs.active_id(), None);
    assert!(tabs.sections().is_empty());
}

#[test]
fn test_initialize_activates_first() {
    let tabs = TabController::with_sections(sample());

    assert_eq!(tabs.active_index(), Some(0));
    assert_eq!(tabs.active_section().unwrap().title, "Urban Foxes");
    assert_eq!(tabs.len(), 3);
}

#[test]
fn test_reinitialize_replaces_state() {
    let mut tabs = TabController::with_sections(sample());
    tabs.select_index(2);

    tabs.initialize(sample().into_iter().take(1).collect());
    assert_eq!(tabs.active_index(), Some(0));
    assert_eq!(tabs.len(), 1);

    tabs.initialize(vec![]);
    assert!(tabs.is_empty());
}

#[test]
fn test_select_by_id() {
    let mut tabs = TabController::with_sections(sample());

    assert!(tabs.select_id("badgers"));
    assert_eq!(tabs.active_id(), Some("badgers"));

    // Selecting twice is the same as once
    assert!(tabs.select_id("badgers"));
    assert_eq!(tabs.active_index(), Some(2));
}

#[test]
fn test_unknown_id_is_noop() {
    let mut tabs = TabController::with_sections(sample());
    tabs.select_index(1);

    assert!(!tabs.select_id("wolves"));
    assert_eq!(tabs.active_index(), Some(1));
}

#[test]
fn test_duplicate_id_selects_first_match() {
    let mut sections = sample();
    sections.push(IdentifiedSection::new("raccoons", Section::new("RACCOONS", "again")));
    let mut tabs = TabController::with_sections(sections);

    tabs.select_id("raccoons");
    assert_eq!(tabs.active_index(), Some(1));
}

#[test]
fn test_out_of_range_index_is_noop() {
    let mut tabs = TabController::with_sections(sample());
    tabs.select_index(1);

    assert!(!tabs.select_index(3));
    assert!(!tabs.select_index(usize::MAX));
    assert_eq!(tabs.active_index(), Some(1));
}

#[test]
fn test_select_on_empty_is_noop() {
    let mut tabs = TabController::new();

    assert!(!tabs.select_index(0));
    assert!(!tabs.select_id("anything"));
    assert!(tabs.is_empty());
}

#[test]
fn test_snapshot_serialises_active_and_sections() {
    let mut tabs = TabController::with_sections(sample());
    tabs.select_id("raccoons");

    let json = serde_json::to_value(tabs.snapshot().unwrap()).unwrap();

    assert_eq!(json["active"], "raccoons");
    assert_eq!(json["sections"][0]["id"], "urban-foxes");
    assert_eq!(json["sections"][1]["title"], "Raccoons");
    assert_eq!(json["sections"][2]["body"], "Badgers dig setts.");
}

#[test]
fn test_snapshot_on_empty_errors() {
    let tabs = TabController::new();
    assert!(matches!(tabs.snapshot(), Err(Error::ActiveOnEmpty)));
}

proptest! {
    #[test]
    fn test_select_index_activates_exactly_that_section(n in 1usize..20, k in 0usize..40) {
        let sections: Vec<IdentifiedSection> = (0..n)
            .map(|i| IdentifiedSection::new(format!("s{i}"), Section::new(format!("S{i}"), "")))
            .collect();
        let mut tabs = TabController::with_sections(sections.clone());
        prop_assert_eq!(tabs.active_index(), Some(0));

        let valid = tabs.select_index(k);

        if k < n {
            prop_assert!(valid);
            prop_assert_eq!(tabs.active_section().unwrap(), &sections[k]);
        } else {
            prop_assert!(!valid);
            prop_assert_eq!(tabs.active_index(), Some(0));
        }
    }
}
