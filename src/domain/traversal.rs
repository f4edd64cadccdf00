//! Linear previous/next traversal over the flattened page sequence
//!
//! Traversal is purely positional: section boundaries are invisible to it,
//! so the last page of one section precedes the first page of the next.

use std::collections::HashMap;

use crate::domain::entities::{NavItem, NavTree};

/// Flattened view of all pages in tree order.
#[derive(Debug)]
pub struct FlatNav {
    items: Vec<NavItem>,
    positions: HashMap<String, usize>,
}

impl FlatNav {
    pub fn new(tree: &NavTree) -> Self {
        let items: Vec<NavItem> = tree
            .sections()
            .iter()
            .flat_map(|s| s.items.iter().cloned())
            .collect();
        let positions = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.path.clone(), i))
            .collect();
        Self { items, positions }
    }

    /// The page before `path` in reading order, `None` at the start or for
    /// unknown paths.
    pub fn previous(&self, path: &str) -> Option<&NavItem> {
        let pos = *self.positions.get(path)?;
        pos.checked_sub(1).map(|i| &self.items[i])
    }

    /// The page after `path` in reading order, `None` at the end or for
    /// unknown paths.
    pub fn next(&self, path: &str) -> Option<&NavItem> {
        let pos = *self.positions.get(path)?;
        self.items.get(pos + 1)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
