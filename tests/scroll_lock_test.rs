//! Tests for the reference-counted scroll lock

use std::sync::Arc;

use rstest::rstest;

use docnav::{DetachedSurface, ScrollLock};

fn observed_lock() -> (ScrollLock, Arc<DetachedSurface>) {
    let surface = Arc::new(DetachedSurface::new());
    (ScrollLock::new(surface.clone()), surface)
}

#[rstest]
fn given_balanced_sequence_then_effect_is_not_applied_at_the_end() {
    let (mut lock, surface) = observed_lock();

    lock.acquire();
    lock.acquire();
    lock.release();
    lock.acquire();
    lock.release();
    lock.release();

    assert!(!surface.is_suspended());
    assert_eq!(lock.holders(), 0);
}

#[rstest]
#[case(&[1, -1, -1])]
#[case(&[-1])]
#[case(&[1, 1, -1, -1, -1, -1])]
fn given_surplus_releases_then_effect_is_not_applied(#[case] ops: &[i8]) {
    // Release count >= acquire count, so the effect must end up removed
    let (mut lock, surface) = observed_lock();

    for op in ops {
        if *op > 0 {
            lock.acquire();
        } else {
            lock.release();
        }
    }

    assert!(!surface.is_suspended());
}

#[rstest]
fn given_reentrant_pairs_then_effect_is_applied_and_removed_exactly_once() {
    let (mut lock, surface) = observed_lock();

    lock.acquire();
    {
        let nested = lock.holders();
        lock.acquire();
        lock.release();
        assert_eq!(lock.holders(), nested);
        assert!(surface.is_suspended(), "nested pair must not remove effect");
    }
    lock.release();

    assert!(!surface.is_suspended());
}

#[rstest]
fn given_guard_dropped_on_early_exit_then_lock_is_released() {
    let (mut lock, surface) = observed_lock();

    let try_with_guard = |lock: &mut ScrollLock, fail: bool| -> Result<(), ()> {
        let _guard = lock.guard();
        if fail {
            return Err(());
        }
        Ok(())
    };

    assert!(try_with_guard(&mut lock, true).is_err());
    assert!(!surface.is_suspended());

    assert!(try_with_guard(&mut lock, false).is_ok());
    assert!(!surface.is_suspended());
}
