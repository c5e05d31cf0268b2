use gp_ui_components::{ViewportTransition, ViewportWatcher};

use super::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Shared content-area state. Lives behind the area's shared cell so
/// registration tokens can update it when they are dropped.
#[derive(Debug)]
pub(crate) struct ContentState {
    sidebar_open: bool,
    registrations: usize,
    viewport: ViewportWatcher,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
}

impl ContentState {
    pub(crate) fn new(scroll_lock: ScrollLock, initial_width: f32) -> Self {
        Self {
            sidebar_open: false,
            registrations: 0,
            viewport: ViewportWatcher::new(initial_width),
            scroll_lock,
            lock_guard: None,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.sidebar_open
    }

    pub(crate) fn registrations(&self) -> usize {
        self.registrations
    }

    pub(crate) fn has_sidebar(&self) -> bool {
        self.registrations > 0
    }

    pub(crate) fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    pub(crate) fn holds_scroll_lock(&self) -> bool {
        self.lock_guard.is_some()
    }

    pub(crate) fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Open or close the drawer. Returns true when the flag changed.
    pub(crate) fn set_open(&mut self, open: bool) -> bool {
        if self.sidebar_open == open {
            return false;
        }

        self.sidebar_open = open;
        self.sync_scroll_lock();
        log::debug!("content sidebar open={open}");
        true
    }

    /// The page is locked only while the mobile drawer is on screen.
    /// Desktop renders the sidebar inline and never locks.
    fn sync_scroll_lock(&mut self) {
        let wants_lock = self.sidebar_open && self.is_mobile();
        match (&self.lock_guard, wants_lock) {
            (None, true) => {
                self.lock_guard = Some(self.scroll_lock.acquire());
            },
            (Some(_), false) => {
                self.lock_guard = None;
            },
            _ => {},
        }
    }

    pub(crate) fn toggle(&mut self) -> bool {
        let open = !self.sidebar_open;
        self.set_open(open);
        open
    }

    pub(crate) fn close(&mut self) -> bool {
        self.set_open(false)
    }

    pub(crate) fn register(&mut self) {
        self.registrations += 1;
    }

    /// Returns true when the last sidebar went away and closed the drawer.
    pub(crate) fn unregister(&mut self) -> bool {
        self.registrations = self.registrations.saturating_sub(1);
        if self.registrations == 0 {
            self.close()
        } else {
            false
        }
    }

    /// Crossing the breakpoint in either direction closes the drawer, so
    /// a flag set on desktop never pops a drawer open on mobile.
    pub(crate) fn apply_viewport_width(
        &mut self,
        width: f32,
    ) -> ViewportTransition {
        let transition = self.viewport.measure(width);
        if transition.changed() {
            self.close();
        }
        self.sync_scroll_lock();
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_closed_state_when_toggled_twice_then_lock_is_acquired_and_released()
     {
        let lock = ScrollLock::new();
        let mut state = ContentState::new(lock.clone(), 500.0);

        assert!(state.toggle());
        assert!(lock.is_locked());
        assert!(state.holds_scroll_lock());

        assert!(!state.toggle());
        assert!(!lock.is_locked());
        assert!(!state.holds_scroll_lock());
    }

    #[test]
    fn given_open_state_when_opened_again_then_lock_is_not_stacked() {
        let lock = ScrollLock::new();
        let mut state = ContentState::new(lock.clone(), 500.0);

        assert!(state.set_open(true));
        assert!(!state.set_open(true));

        assert_eq!(lock.holders(), 1);
    }

    #[test]
    fn given_two_registrations_when_one_removed_then_sidebar_remains() {
        let mut state = ContentState::new(ScrollLock::new(), 500.0);
        state.register();
        state.register();
        state.set_open(true);

        assert!(!state.unregister());
        assert!(state.has_sidebar());
        assert!(state.is_open());

        assert!(state.unregister());
        assert!(!state.has_sidebar());
        assert!(!state.is_open());
    }

    #[test]
    fn given_no_registrations_when_unregistered_then_count_stays_at_zero() {
        let mut state = ContentState::new(ScrollLock::new(), 500.0);

        state.unregister();

        assert_eq!(state.registrations(), 0);
    }

    #[test]
    fn given_open_mobile_drawer_when_grown_to_desktop_then_drawer_closes() {
        let lock = ScrollLock::new();
        let mut state = ContentState::new(lock.clone(), 500.0);
        state.set_open(true);

        let transition = state.apply_viewport_width(1024.0);

        assert!(transition.left_mobile());
        assert!(!state.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_open_drawer_when_resized_within_mobile_then_drawer_stays_open() {
        let mut state = ContentState::new(ScrollLock::new(), 500.0);
        state.set_open(true);

        state.apply_viewport_width(600.0);

        assert!(state.is_open());
    }

    #[test]
    fn given_desktop_state_when_toggled_then_page_scroll_stays_unlocked() {
        let lock = ScrollLock::new();
        let mut state = ContentState::new(lock.clone(), 1280.0);

        assert!(state.toggle());

        assert!(state.is_open());
        assert!(!state.holds_scroll_lock());
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_flag_set_on_desktop_when_shrunk_to_mobile_then_drawer_stays_closed()
     {
        let lock = ScrollLock::new();
        let mut state = ContentState::new(lock.clone(), 1280.0);
        state.set_open(true);

        let transition = state.apply_viewport_width(500.0);

        assert!(transition.entered_mobile());
        assert!(!state.is_open());
        assert!(!lock.is_locked());
    }
}
