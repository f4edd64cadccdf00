//! docnav: documentation navigation engine
//!
//! Derives everything a docs UI needs from one immutable table of contents:
//! the active section for a page, the expanded/collapsed section set, linear
//! previous/next paging across section boundaries, and breadcrumb titles.
//! An overlay scroll lock models the one cross-cutting side effect.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::NavigationSession;
pub use config::Settings;
pub use domain::{
    DomainError, ExpansionState, FlatNav, NavItem, NavSection, NavTree, PageIndex, PageLocation,
    TreeBuilder,
};
pub use infrastructure::{DetachedSurface, ScrollGuard, ScrollLock, ScrollSurface};
