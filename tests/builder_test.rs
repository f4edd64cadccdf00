//! Tests for TreeBuilder and tree invariants

use std::collections::HashSet;

use rstest::rstest;

use docnav::{DomainError, NavTree, TreeBuilder};

#[rstest]
fn given_sections_and_items_when_building_then_order_is_preserved() {
    let tree = TreeBuilder::new()
        .section("Getting Started")
        .item("Overview", "/docs")
        .item("Quickstart", "/docs/quickstart")
        .section("Reference")
        .item("Specs", "/docs/specs")
        .build()
        .unwrap();

    let sections = tree.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Getting Started");
    assert_eq!(sections[0].items[1].path, "/docs/quickstart");
    assert_eq!(sections[1].items[0].title, "Specs");
    assert_eq!(tree.page_count(), 3);
}

#[rstest]
fn given_duplicate_path_across_sections_when_building_then_reports_the_path() {
    let result = TreeBuilder::new()
        .section("A")
        .item("One", "/docs/dup")
        .section("B")
        .item("Two", "/docs/dup")
        .build();

    match result {
        Err(DomainError::DuplicatePath(path)) => assert_eq!(path, "/docs/dup"),
        other => panic!("expected DuplicatePath, got {:?}", other),
    }
}

#[rstest]
fn given_builtin_tree_then_every_path_appears_exactly_once() {
    let tree = NavTree::builtin();
    let mut seen = HashSet::new();
    for section in tree.sections() {
        for item in &section.items {
            assert!(
                seen.insert(item.path.clone()),
                "path {} appears twice",
                item.path
            );
        }
    }
    assert_eq!(seen.len(), tree.page_count());
}

#[rstest]
fn given_builtin_tree_then_no_section_is_empty() {
    for section in NavTree::builtin().sections() {
        assert!(!section.items.is_empty(), "section {} is empty", section.title);
    }
}
