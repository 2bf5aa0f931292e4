//! Resolution engine properties: singleton shortcut, tag precedence,
//! nearest-line tie-break, no-match policies, and idempotence.

mod common;

use common::fixtures::key;
use message_template_cache::domain::record::TemplateEntry;
use message_template_cache::domain::resolver::{Resolver, TemplateRequest};
use message_template_cache::domain::table::HarvestTable;

fn request(line: u32) -> TemplateRequest {
    TemplateRequest::new("src/app.rs", "greet", line)
}

fn table_of(entries: Vec<TemplateEntry>) -> HarvestTable {
    let mut table = HarvestTable::new();
    for entry in entries {
        table.insert(key("src/app.rs", "greet"), entry);
    }
    table
}

#[test]
fn test_single_entry_shortcut() {
    let table = table_of(vec![TemplateEntry::tagged("only", 10, "v1")]);
    let resolver = Resolver::new();

    // Every combination of tag and line resolves to the single entry.
    for line in [0, 1, 10, 500] {
        for tag in ["", "v1", "v2", "unrelated"] {
            let got = resolver.resolve(&table, &request(line).with_tag(tag));
            assert_eq!(got.map(|e| e.template.as_str()), Some("only"));
        }
    }
}

#[test]
fn test_tag_precedence_over_line() {
    let table = table_of(vec![
        TemplateEntry::new("T1", 5),
        TemplateEntry::tagged("T2", 5, "v2"),
    ]);
    let resolver = Resolver::new();

    for line in [0, 5, 1000] {
        let tagged = resolver.resolve(&table, &request(line).with_tag("v2"));
        assert_eq!(tagged.map(|e| e.template.as_str()), Some("T2"));

        let untagged = resolver.resolve(&table, &request(line));
        assert_eq!(untagged.map(|e| e.template.as_str()), Some("T1"));
    }
}

#[test]
fn test_nearest_line_wins() {
    let table = table_of(vec![
        TemplateEntry::new("near", 10),
        TemplateEntry::new("far", 20),
    ]);
    let resolver = Resolver::new();

    let got = resolver.resolve(&table, &request(11));
    assert_eq!(got.map(|e| e.template.as_str()), Some("near"));

    let got = resolver.resolve(&table, &request(19));
    assert_eq!(got.map(|e| e.template.as_str()), Some("far"));
}

#[test]
fn test_equidistant_resolves_to_first_declared() {
    let table = table_of(vec![
        TemplateEntry::new("first", 10),
        TemplateEntry::new("second", 20),
    ]);
    // Line 15: distance 5 to both; the first-declared entry wins the tie.
    let got = Resolver::new().resolve(&table, &request(15));
    assert_eq!(got.map(|e| e.template.as_str()), Some("first"));
}

#[test]
fn test_no_match_on_absent_tag() {
    let table = table_of(vec![
        TemplateEntry::tagged("A", 10, "a"),
        TemplateEntry::tagged("B", 20, "b"),
    ]);
    let got = Resolver::new().resolve(&table, &request(10).with_tag("c"));
    assert!(got.is_none(), "must not fall back to an unrelated tag");
}

#[test]
fn test_absent_key_is_ordinary_no_match() {
    let table = HarvestTable::new();
    let got = Resolver::new().resolve(&table, &request(1));
    assert!(got.is_none());
}

#[test]
fn test_resolution_is_idempotent_and_read_only() {
    let table = table_of(vec![
        TemplateEntry::new("T1", 5),
        TemplateEntry::tagged("T2", 9, "v2"),
    ]);
    let resolver = Resolver::new();
    let req = request(7).with_tag("v2");

    // Repeated multi-entry lookups keep answering; the table is never
    // replaced or cleared by resolution.
    let first = resolver.resolve(&table, &req).cloned();
    let second = resolver.resolve(&table, &req).cloned();
    assert_eq!(first, second);
    assert_eq!(first.map(|e| e.template), Some("T2".to_string()));
    assert_eq!(table.template_count(), 2);

    let untagged = resolver.resolve(&table, &request(7));
    assert_eq!(untagged.map(|e| e.template.as_str()), Some("T1"));
}
