//! Navigation session service
//!
//! One session per mounted navigation UI. Owns the tree, the structures
//! derived from it, the expansion state, and the overlay scroll lock, and
//! exposes the event surface the rendering layer drives: path changes,
//! section toggles, panel open/close.
//!
//! Events are handled synchronously in call order; a `visit` completes its
//! expansion-set union before any later `toggle` runs.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ExpansionState, FlatNav, NavItem, NavTree, PageIndex};
use crate::infrastructure::{ScrollLock, ScrollSurface};

/// Stateful navigation session over an immutable [`NavTree`].
pub struct NavigationSession {
    tree: NavTree,
    index: PageIndex,
    flat: FlatNav,
    expansion: ExpansionState,
    lock: ScrollLock,
    current: Option<String>,
}

impl NavigationSession {
    /// Session with no attached UI surface (CLI, tests).
    pub fn new(tree: NavTree) -> Self {
        Self::with_surface(tree, None)
    }

    /// Session whose overlay panel locks the given scroll surface.
    pub fn attached(tree: NavTree, surface: Arc<dyn ScrollSurface>) -> Self {
        Self::with_surface(tree, Some(surface))
    }

    /// Override the breadcrumb fallback title for unknown paths.
    pub fn with_fallback_title(mut self, fallback: impl Into<String>) -> Self {
        self.index = PageIndex::with_fallback(&self.tree, fallback);
        self
    }

    fn with_surface(tree: NavTree, surface: Option<Arc<dyn ScrollSurface>>) -> Self {
        let index = PageIndex::new(&tree);
        let flat = FlatNav::new(&tree);
        let lock = match surface {
            Some(s) => ScrollLock::new(s),
            None => ScrollLock::detached(),
        };
        Self {
            tree,
            index,
            flat,
            expansion: ExpansionState::default(),
            lock,
            current: None,
        }
    }

    /// Mount the panel at `path`: expansion state starts from the active
    /// section (or the first section when the path is unknown).
    pub fn initialize(&mut self, path: &str) {
        debug!("initialize session at {path}");
        self.expansion =
            ExpansionState::initialize(self.index.active_section(path), self.tree.section_count());
        self.current = Some(path.to_string());
    }

    /// Path-change event: keeps the new active section visible without
    /// collapsing anything the user opened.
    pub fn visit(&mut self, path: &str) {
        debug!("visit {path}");
        self.expansion.on_path_changed(self.index.active_section(path));
        self.current = Some(path.to_string());
    }

    /// User toggle on one section heading.
    pub fn toggle(&mut self, section: usize) {
        self.expansion.toggle(section);
    }

    pub fn is_open(&self, section: usize) -> bool {
        self.expansion.is_open(section)
    }

    /// Section containing the current page, if any.
    pub fn active_section(&self) -> Option<usize> {
        self.index.active_section(self.current.as_deref()?)
    }

    pub fn active_section_of(&self, path: &str) -> Option<usize> {
        self.index.active_section(path)
    }

    /// Breadcrumb title for the current page (fallback when unknown).
    pub fn breadcrumb(&self) -> &str {
        match &self.current {
            Some(path) => self.index.title_of(path),
            None => self.index.title_of(""),
        }
    }

    pub fn title_of(&self, path: &str) -> &str {
        self.index.title_of(path)
    }

    /// Previous page relative to the current one, across section boundaries.
    pub fn previous(&self) -> Option<&NavItem> {
        self.flat.previous(self.current.as_deref()?)
    }

    /// Next page relative to the current one, across section boundaries.
    pub fn next(&self) -> Option<&NavItem> {
        self.flat.next(self.current.as_deref()?)
    }

    /// Open the overlay panel; background scroll is suspended while open.
    pub fn open_panel(&mut self) {
        self.lock.acquire();
    }

    /// Close the overlay panel. Closing an already closed panel is a no-op.
    pub fn close_panel(&mut self) {
        self.lock.release();
    }

    pub fn panel_open(&self) -> bool {
        self.lock.held()
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn flat(&self) -> &FlatNav {
        &self.flat
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
