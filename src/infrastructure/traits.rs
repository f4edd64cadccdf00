//! UI boundary traits for testability
//!
//! The navigation core never touches a rendering layer directly; side
//! effects go through these traits so services can be tested with
//! observable implementations.

use std::sync::atomic::{AtomicBool, Ordering};

/// The scrollable background behind an overlay panel.
///
/// `suspend_scroll` and `restore_scroll` must be idempotent from the
/// surface's point of view; the [`ScrollLock`](crate::infrastructure::ScrollLock)
/// guarantees they are called alternately, once per transition.
pub trait ScrollSurface: Send + Sync {
    /// Disable background scrolling.
    fn suspend_scroll(&self);

    /// Re-enable background scrolling.
    fn restore_scroll(&self);
}

/// Surface for sessions with no attached UI.
///
/// Tracks the applied state so callers and tests can observe whether the
/// scroll effect is currently in force.
#[derive(Debug, Default)]
pub struct DetachedSurface {
    suspended: AtomicBool,
}

impl DetachedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Relaxed)
    }
}

impl ScrollSurface for DetachedSurface {
    fn suspend_scroll(&self) {
        self.suspended.store(true, Ordering::Relaxed);
    }

    fn restore_scroll(&self) {
        self.suspended.store(false, Ordering::Relaxed);
    }
}
