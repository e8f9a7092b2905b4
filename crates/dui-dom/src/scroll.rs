//! Reference-counted body scroll lock.
//!
//! Overlays suppress page scrolling while they are shown. Each holder
//! acquires once and releases once; the body's inline `overflow` is saved
//! on the first acquisition and restored on the last release, so nested
//! overlays keep the page locked until the outermost one goes away.
//!
//! # Invariants
//!
//! - `depth() > 0` iff the body carries `overflow: hidden` set by the lock.
//! - Releasing at depth zero is a no-op.

/// Overflow value applied while locked.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// Lock bookkeeping kept by the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    depth: u32,
    saved_overflow: Option<String>,
}

/// What the document must do to the body after a lock operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyOverflow {
    Unchanged,
    Lock,
    /// Restore the saved inline value; `None` removes the property.
    Restore(Option<String>),
}

impl ScrollLock {
    /// Number of active holders.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn acquire(&mut self, current_overflow: Option<&str>) -> BodyOverflow {
        self.depth += 1;
        if self.depth == 1 {
            self.saved_overflow = current_overflow.map(str::to_owned);
            BodyOverflow::Lock
        } else {
            BodyOverflow::Unchanged
        }
    }

    pub(crate) fn release(&mut self) -> BodyOverflow {
        match self.depth {
            0 => BodyOverflow::Unchanged,
            1 => {
                self.depth = 0;
                BodyOverflow::Restore(self.saved_overflow.take())
            }
            _ => {
                self.depth -= 1;
                BodyOverflow::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acquire_locks_and_saves() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.acquire(Some("auto")), BodyOverflow::Lock);
        assert!(lock.is_locked());
        assert_eq!(lock.release(), BodyOverflow::Restore(Some("auto".into())));
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_holders_restore_once() {
        let mut lock = ScrollLock::default();
        lock.acquire(None);
        assert_eq!(lock.acquire(Some(LOCKED_OVERFLOW)), BodyOverflow::Unchanged);
        assert_eq!(lock.depth(), 2);
        assert_eq!(lock.release(), BodyOverflow::Unchanged);
        assert_eq!(lock.release(), BodyOverflow::Restore(None));
    }

    #[test]
    fn release_when_unlocked_is_noop() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.release(), BodyOverflow::Unchanged);
        assert_eq!(lock.depth(), 0);
    }
}
