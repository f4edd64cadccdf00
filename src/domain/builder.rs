//! Navigation tree construction with invariant validation

use itertools::Itertools;
use tracing::debug;

use crate::domain::entities::{NavItem, NavSection, NavTree};
use crate::domain::error::DomainError;

/// Builds a [`NavTree`] section by section, validating invariants at
/// `build()`:
///
/// - every page path is globally unique
/// - every section contains at least one item
/// - items belong to a previously declared section
#[derive(Debug, Default)]
pub struct TreeBuilder {
    sections: Vec<NavSection>,
    orphans: Vec<NavItem>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new section. Subsequent `item` calls attach to it.
    pub fn section(mut self, title: impl Into<String>) -> Self {
        self.sections.push(NavSection {
            title: title.into(),
            items: Vec::new(),
        });
        self
    }

    /// Append a page to the current section.
    pub fn item(mut self, title: impl Into<String>, path: impl Into<String>) -> Self {
        let item = NavItem::new(title, path);
        match self.sections.last_mut() {
            Some(section) => section.items.push(item),
            None => self.orphans.push(item),
        }
        self
    }

    /// Validate and finalize the tree.
    pub fn build(self) -> Result<NavTree, DomainError> {
        if let Some(orphan) = self.orphans.first() {
            return Err(DomainError::ItemOutsideSection(orphan.path.clone()));
        }

        if let Some(section) = self.sections.iter().find(|s| s.items.is_empty()) {
            return Err(DomainError::EmptySection(section.title.clone()));
        }

        if let Some(dup) = self
            .sections
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i.path.as_str())
            .duplicates()
            .next()
        {
            return Err(DomainError::DuplicatePath(dup.to_string()));
        }

        debug!(
            "built nav tree: {} sections, {} pages",
            self.sections.len(),
            self.sections.iter().map(|s| s.items.len()).sum::<usize>()
        );
        Ok(NavTree::from_sections(self.sections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_duplicate_path_when_building_then_fails() {
        let result = TreeBuilder::new()
            .section("A")
            .item("One", "/docs/x")
            .section("B")
            .item("Two", "/docs/x")
            .build();

        assert_eq!(result, Err(DomainError::DuplicatePath("/docs/x".into())));
    }

    #[test]
    fn given_empty_section_when_building_then_fails() {
        let result = TreeBuilder::new()
            .section("A")
            .item("One", "/docs/x")
            .section("Empty")
            .build();

        assert_eq!(result, Err(DomainError::EmptySection("Empty".into())));
    }

    #[test]
    fn given_item_before_section_when_building_then_fails() {
        let result = TreeBuilder::new().item("Stray", "/docs/stray").build();

        assert_eq!(
            result,
            Err(DomainError::ItemOutsideSection("/docs/stray".into()))
        );
    }

    #[test]
    fn given_no_sections_when_building_then_yields_empty_tree() {
        let tree = TreeBuilder::new().build().unwrap();
        assert!(tree.is_empty());
    }
}
