//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent navigation-tree invariant violations.
/// These are independent of infrastructure concerns and can only occur
/// at tree construction time; all query operations are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate page path in navigation tree: {0}")]
    DuplicatePath(String),

    #[error("section has no items: {0}")]
    EmptySection(String),

    #[error("item declared before any section: {0}")]
    ItemOutsideSection(String),
}
