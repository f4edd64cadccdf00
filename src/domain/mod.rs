//! Domain layer: entities and navigation logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Query operations are total: malformed input yields "no match",
//! never an error.

pub mod builder;
pub mod entities;
pub mod error;
pub mod expansion;
pub mod index;
pub mod traversal;

pub use builder::TreeBuilder;
pub use entities::{NavItem, NavSection, NavTree};
pub use error::DomainError;
pub use expansion::ExpansionState;
pub use index::{PageIndex, PageLocation, DEFAULT_FALLBACK_TITLE};
pub use traversal::FlatNav;
