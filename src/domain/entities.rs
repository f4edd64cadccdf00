//! Domain entities: core data structures

use std::fmt;

use crate::domain::TreeBuilder;

/// A single documentation page in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Human-readable page title, shown in links and breadcrumbs
    pub title: String,
    /// Route path, globally unique across the whole tree
    pub path: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.path)
    }
}

/// An ordered group of pages shown under one collapsible heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    /// Pages in display order; a built section has at least one
    pub items: Vec<NavItem>,
}

/// The static, ordered section/item hierarchy describing all documentation
/// pages.
///
/// Constructed once via [`TreeBuilder`] and never mutated afterwards; all
/// derived structures (index, flat traversal) are pure functions of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    sections: Vec<NavSection>,
}

impl NavTree {
    /// Only the builder creates trees, so invariants hold by construction.
    pub(crate) fn from_sections(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// A tree with no sections. All lookups on it resolve to "no match".
    pub fn empty() -> Self {
        Self { sections: Vec::new() }
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of pages across all sections.
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// The compiled-in product documentation TOC.
    ///
    /// Used when no manifest is configured. The table is validated at
    /// construction like any other tree.
    pub fn builtin() -> Self {
        TreeBuilder::new()
            .section("Getting Started")
            .item("Overview", "/docs")
            .item("Quickstart", "/docs/quickstart")
            .item("What's in the Box", "/docs/unboxing")
            .section("Hardware Setup")
            .item("Assembly", "/docs/assembly")
            .item("Mounting", "/docs/mounting")
            .item("Power & Cabling", "/docs/power")
            .section("Firmware")
            .item("Flashing", "/docs/flashing")
            .item("Configuration", "/docs/firmware-config")
            .item("Updates", "/docs/updates")
            .section("Reference")
            .item("Specifications", "/docs/specs")
            .item("Troubleshooting", "/docs/troubleshooting")
            .item("Warranty", "/docs/warranty")
            .item("FAQ", "/docs/faq")
            .build()
            .expect("builtin nav tree is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_builtin_tree_when_constructed_then_invariants_hold() {
        let tree = NavTree::builtin();
        assert!(!tree.is_empty());
        assert!(tree.sections().iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn given_empty_tree_then_counts_are_zero() {
        let tree = NavTree::empty();
        assert_eq!(tree.section_count(), 0);
        assert_eq!(tree.page_count(), 0);
    }
}
