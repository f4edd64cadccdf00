//! Infrastructure layer: manifest I/O and UI boundary implementations

pub mod error;
pub mod manifest;
pub mod scroll_lock;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use manifest::{load_manifest, parse_manifest};
pub use scroll_lock::{ScrollGuard, ScrollLock};
pub use traits::{DetachedSurface, ScrollSurface};
