//! Reference-counted scroll lock tied to overlay lifetime
//!
//! Disabling background scroll is a cross-cutting side effect: the overlay
//! may close normally or be torn down while open, and nested opens must not
//! re-apply or half-remove the effect. The lock counts holders and drives
//! the surface exactly once per 0↔1 transition.

use std::sync::Arc;

use tracing::debug;

use crate::infrastructure::traits::{DetachedSurface, ScrollSurface};

/// Scoped lock over a [`ScrollSurface`].
///
/// The surface is suspended when the first holder acquires and restored when
/// the last one releases. Unbalanced releases saturate at zero and are
/// no-ops, so the effect is never removed twice.
pub struct ScrollLock {
    surface: Arc<dyn ScrollSurface>,
    holders: usize,
}

impl ScrollLock {
    pub fn new(surface: Arc<dyn ScrollSurface>) -> Self {
        Self {
            surface,
            holders: 0,
        }
    }

    /// Lock over a [`DetachedSurface`], for sessions without an attached UI.
    pub fn detached() -> Self {
        Self::new(Arc::new(DetachedSurface::new()))
    }

    /// Mark the lock held; applies the effect on the 0→1 transition.
    pub fn acquire(&mut self) {
        if self.holders == 0 {
            debug!("suspending background scroll");
            self.surface.suspend_scroll();
        }
        self.holders += 1;
    }

    /// Drop one holder; removes the effect on the 1→0 transition.
    /// Releasing an unheld lock is a no-op.
    pub fn release(&mut self) {
        match self.holders {
            0 => {}
            1 => {
                debug!("restoring background scroll");
                self.surface.restore_scroll();
                self.holders = 0;
            }
            _ => self.holders -= 1,
        }
    }

    pub fn held(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Acquire and return a guard that releases when dropped.
    pub fn guard(&mut self) -> ScrollGuard<'_> {
        self.acquire();
        ScrollGuard { lock: self }
    }
}

impl Drop for ScrollLock {
    /// Teardown while held still restores the surface.
    fn drop(&mut self) {
        if self.holders > 0 {
            self.surface.restore_scroll();
        }
    }
}

/// RAII holder; releasing happens on every exit path.
pub struct ScrollGuard<'a> {
    lock: &'a mut ScrollLock,
}

impl Drop for ScrollGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_lock() -> (ScrollLock, Arc<DetachedSurface>) {
        let surface = Arc::new(DetachedSurface::new());
        (ScrollLock::new(surface.clone()), surface)
    }

    #[test]
    fn given_acquire_then_release_then_effect_is_applied_and_removed() {
        let (mut lock, surface) = observed_lock();
        lock.acquire();
        assert!(surface.is_suspended());
        lock.release();
        assert!(!surface.is_suspended());
    }

    #[test]
    fn given_nested_acquires_then_effect_is_removed_only_by_last_release() {
        let (mut lock, surface) = observed_lock();
        lock.acquire();
        lock.acquire();
        lock.release();
        assert!(surface.is_suspended(), "inner release must keep effect");
        lock.release();
        assert!(!surface.is_suspended());
    }

    #[test]
    fn given_unbalanced_release_then_it_is_a_noop() {
        let (mut lock, surface) = observed_lock();
        lock.release();
        assert!(!surface.is_suspended());
        assert!(!lock.held());

        lock.acquire();
        lock.release();
        lock.release();
        assert!(!surface.is_suspended());
    }

    #[test]
    fn given_lock_dropped_while_held_then_surface_is_restored() {
        let surface = Arc::new(DetachedSurface::new());
        {
            let mut lock = ScrollLock::new(surface.clone());
            lock.acquire();
            assert!(surface.is_suspended());
        }
        assert!(!surface.is_suspended());
    }

    #[test]
    fn given_guard_then_scope_exit_releases() {
        let (mut lock, surface) = observed_lock();
        {
            let _guard = lock.guard();
            assert!(surface.is_suspended());
        }
        assert!(!surface.is_suspended());
        assert!(!lock.held());
    }
}
