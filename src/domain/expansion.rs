//! Expanded/collapsed section state for one navigation session
//!
//! Pure set operations over section indices. The state is created when the
//! navigation panel mounts and discarded when it unmounts; it is never
//! persisted.

use std::collections::BTreeSet;

use tracing::debug;

/// Set of sections currently shown expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: BTreeSet<usize>,
}

impl ExpansionState {
    /// Initial state for a freshly mounted panel.
    ///
    /// Opens the active section when the current path resolves to one,
    /// otherwise the first section of a non-empty tree, otherwise nothing.
    pub fn initialize(active: Option<usize>, section_count: usize) -> Self {
        let mut open = BTreeSet::new();
        match active {
            Some(idx) => {
                open.insert(idx);
            }
            None if section_count > 0 => {
                open.insert(0);
            }
            None => {}
        }
        Self { open }
    }

    /// React to a path change: the new active section joins the open set.
    ///
    /// Monotonic union, so sections the user opened by hand stay open.
    pub fn on_path_changed(&mut self, active: Option<usize>) {
        if let Some(idx) = active {
            if self.open.insert(idx) {
                debug!("expanded section {idx} for new active path");
            }
        }
    }

    /// Flip one section. Toggling twice restores the original state.
    pub fn toggle(&mut self, section: usize) {
        if !self.open.remove(&section) {
            self.open.insert(section);
        }
    }

    pub fn is_open(&self, section: usize) -> bool {
        self.open.contains(&section)
    }

    /// Expanded section indices in ascending order.
    pub fn open_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }
}
