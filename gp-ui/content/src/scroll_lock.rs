use std::cell::Cell;
use std::rc::Rc;

/// App-wide page scroll lock.
///
/// Clones share one counter. The page is locked while any
/// [`ScrollLockGuard`] is alive.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        if holders == 1 {
            log::debug!("page scroll locked");
        }

        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// Releases its share of the lock when dropped.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            log::debug!("page scroll restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_held_until_every_guard_is_dropped() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());

        drop(second);
        assert!(!lock.is_locked());
    }
}
