//! Path lookup index and active section resolution
//!
//! Built once from the immutable tree: O(n) scan, O(1) average lookup
//! afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::NavTree;

/// Breadcrumb title shown for paths that are not part of the tree.
pub const DEFAULT_FALLBACK_TITLE: &str = "Documentation";

/// Where a page lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub section: usize,
    pub item: usize,
    pub title: String,
}

/// Immutable path index over a [`NavTree`].
///
/// Because paths are unique, the first section containing a path is also the
/// only one, so active-section resolution reduces to a single map lookup.
#[derive(Debug)]
pub struct PageIndex {
    by_path: HashMap<String, PageLocation>,
    fallback_title: String,
}

impl PageIndex {
    pub fn new(tree: &NavTree) -> Self {
        Self::with_fallback(tree, DEFAULT_FALLBACK_TITLE)
    }

    pub fn with_fallback(tree: &NavTree, fallback_title: impl Into<String>) -> Self {
        let mut by_path = HashMap::new();
        for (section_idx, section) in tree.sections().iter().enumerate() {
            for (item_idx, item) in section.items.iter().enumerate() {
                by_path.insert(
                    item.path.clone(),
                    PageLocation {
                        section: section_idx,
                        item: item_idx,
                        title: item.title.clone(),
                    },
                );
            }
        }
        debug!("indexed {} pages", by_path.len());
        Self {
            by_path,
            fallback_title: fallback_title.into(),
        }
    }

    pub fn lookup(&self, path: &str) -> Option<&PageLocation> {
        self.by_path.get(path)
    }

    /// Breadcrumb title for a path. Unknown paths get the fallback title;
    /// this never fails.
    pub fn title_of(&self, path: &str) -> &str {
        self.lookup(path)
            .map(|loc| loc.title.as_str())
            .unwrap_or(&self.fallback_title)
    }

    /// Index of the section containing `path`, `None` when no section does.
    pub fn active_section(&self, path: &str) -> Option<usize> {
        self.lookup(path).map(|loc| loc.section)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
