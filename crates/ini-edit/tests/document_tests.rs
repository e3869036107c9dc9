//! Tests for document-level accessors

use ini_edit::{Entry, Ini, IniOptions, Section};
use pretty_assertions::assert_eq;

#[test]
fn test_find_or_create_never_fails() {
    let mut doc = Ini::default();

    // Neither the section nor the key exists yet; both are synthesized.
    doc.get("NewSection").get("key").value = "1".to_string();

    assert!(doc.try_get("NewSection").is_some());
    assert_eq!(doc.get("NewSection").get_value("key").unwrap(), "1");
}

#[test]
fn test_try_get_does_not_create() {
    let doc = Ini::default();
    assert!(doc.try_get("Missing").is_none());
    assert!(!doc.contains_section("Missing"));
}

#[test]
fn test_case_insensitive_section_lookup() {
    let mut doc = Ini::parse_with("[General]\nfontsize=9\n", IniOptions::new().ignore_case())
        .unwrap();

    doc.get("general").set("fontsize", "11");

    // Both spellings resolve to the same section; no duplicate was created.
    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.get("General").get_value("fontsize").unwrap(), "11");
}

#[test]
fn test_set_replaces_contents_wholesale() {
    let mut doc = Ini::parse("[A]\n; old comment\nx=1\n").unwrap();

    let mut replacement = Section::new("unused title");
    replacement.set("y", "2");
    doc.set("A", replacement);

    let section = doc.try_get("A").unwrap();
    assert_eq!(section.title(), Some("A"));
    assert!(!section.contains_key("x"));
    assert_eq!(section.get_value("y").unwrap(), "2");
}

#[test]
fn test_set_appends_when_title_is_absent() {
    let mut doc = Ini::default();

    let mut section = Section::new("placeholder");
    section.set("key", "value");
    doc.set("User", section);

    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].title(), Some("User"));
}

#[test]
fn test_remove_deletes_all_matching_sections() {
    let mut doc = Ini::parse("[A]\nx=1\n[B]\n[A]\ny=2\n").unwrap();

    doc.remove("A");

    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].title(), Some("B"));
}

#[test]
fn test_push_section_allows_duplicates() {
    let mut doc = Ini::default();
    doc.push_section(Section::new("A"));
    doc.push_section(Section::new("A"));

    assert_eq!(doc.sections().len(), 2);
}

#[test]
fn test_global_section_is_always_present() {
    let mut doc = Ini::default();
    assert!(doc.global().is_global());

    doc.global_mut().set("key", "value");
    assert_eq!(doc.render(), "key=value\n");
}

#[test]
fn test_entries_can_be_edited_in_place() {
    let mut doc = Ini::parse("[User]\n; who\nName=John Doe\n").unwrap();

    doc.get("User").get("Name").value = "Olaf".to_string();

    // Editing the value keeps the entry's comment in place.
    assert_eq!(doc.render(), "[User]\n; who\nName=Olaf\n");
}

#[test]
fn test_set_and_clear_trivia() {
    let mut doc = Ini::parse("[User]\n; stale comment\nName=John Doe\n").unwrap();

    doc.get("User").set_and_clear_trivia("Name", "Olaf");

    assert_eq!(doc.render(), "[User]\nName=Olaf\n");
}

#[test]
fn test_section_remove_handles_duplicate_keys() {
    let mut doc = Ini::default();
    let section = doc.get("S");
    section.entries_mut().push(Entry::with_value("k", "1"));
    section.entries_mut().push(Entry::with_value("k", "2"));

    section.remove("k");
    assert!(section.is_empty());
}

#[test]
fn test_display_matches_render() {
    let doc = Ini::parse("[A]\nx=1\n").unwrap();
    assert_eq!(doc.to_string(), doc.render());
}
