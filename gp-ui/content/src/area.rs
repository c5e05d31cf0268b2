use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use gp_ui_components::{ViewportWatcher, escape_subscription};
use iced::{Subscription, Task};

use super::error::ContentError;
use super::event::{ContentEvent, ContentIntent};
use super::model::ContentViewModel;
use super::reducer;
use super::scroll_lock::ScrollLock;
use super::state::ContentState;

/// Provider for one content area: drawer open flag, sidebar registrations
/// and the scroll lock held while the mobile drawer is open.
///
/// Dropping the area while the drawer is open releases the lock.
#[derive(Debug)]
pub struct ContentArea {
    shared: Rc<ContentShared>,
}

/// State shared with registration tokens.
///
/// A token dropped while the state is borrowed parks its unregister in
/// `pending_unregisters`; the next access applies it.
#[derive(Debug)]
struct ContentShared {
    state: RefCell<ContentState>,
    pending_unregisters: Cell<usize>,
}

impl ContentShared {
    fn new(state: ContentState) -> Self {
        Self {
            state: RefCell::new(state),
            pending_unregisters: Cell::new(0),
        }
    }

    fn state(&self) -> Ref<'_, ContentState> {
        if self.pending_unregisters.get() > 0 {
            if let Ok(mut state) = self.state.try_borrow_mut() {
                self.drain_pending(&mut state);
            }
        }
        self.state.borrow()
    }

    fn state_mut(&self) -> RefMut<'_, ContentState> {
        let mut state = self.state.borrow_mut();
        self.drain_pending(&mut state);
        state
    }

    fn drain_pending(&self, state: &mut ContentState) {
        let pending = self.pending_unregisters.replace(0);
        for _ in 0..pending {
            unregister(state);
        }
    }

    fn unregister(&self) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => {
                self.drain_pending(&mut state);
                unregister(&mut state);
            },
            Err(_) => {
                let pending = self.pending_unregisters.get() + 1;
                self.pending_unregisters.set(pending);
                log::debug!(
                    "content sidebar unregister deferred: pending={pending}"
                );
            },
        }
    }
}

fn unregister(state: &mut ContentState) {
    let closed = state.unregister();
    log::debug!(
        "content sidebar unregistered: count={} closed={closed}",
        state.registrations()
    );
}

impl ContentArea {
    /// Mount with a private scroll lock.
    pub fn new(initial_width: f32) -> Self {
        Self::with_scroll_lock(ScrollLock::new(), initial_width)
    }

    /// Mount sharing the app-wide scroll lock.
    pub fn with_scroll_lock(scroll_lock: ScrollLock, initial_width: f32) -> Self {
        Self {
            shared: Rc::new(ContentShared::new(ContentState::new(
                scroll_lock,
                initial_width,
            ))),
        }
    }

    /// Consumer accessor; fails when no area is in scope.
    pub fn context(
        area: Option<&ContentArea>,
    ) -> Result<ContentContext, ContentError> {
        area.map(ContentArea::handle)
            .ok_or(ContentError::OutsideProvider)
    }

    pub fn handle(&self) -> ContentContext {
        let state = self.shared.state();
        ContentContext {
            has_sidebar: state.has_sidebar(),
            sidebar_open: state.is_open(),
        }
    }

    /// Announce a mounted content sidebar. Keep the token for as long as
    /// the sidebar is shown; dropping it unregisters exactly once.
    pub fn register_sidebar(&self) -> SidebarRegistration {
        let registrations = {
            let mut state = self.shared.state_mut();
            state.register();
            state.registrations()
        };
        log::debug!("content sidebar registered: count={registrations}");

        SidebarRegistration {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn has_sidebar(&self) -> bool {
        self.shared.state().has_sidebar()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.shared.state().is_open()
    }

    pub fn is_mobile(&self) -> bool {
        self.shared.state().is_mobile()
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        self.shared.state().scroll_lock().clone()
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(&mut self, event: ContentIntent) -> Task<ContentEvent> {
        reducer::reduce(&mut self.shared.state_mut(), event)
    }

    pub fn vm(&self) -> ContentViewModel {
        let state = self.shared.state();
        ContentViewModel {
            sidebar_open: state.is_open(),
            has_sidebar: state.has_sidebar(),
            is_mobile: state.is_mobile(),
            scroll_locked: state.scroll_lock().is_locked(),
        }
    }

    /// Resize events always; Escape only while the drawer is open.
    pub fn subscription(&self) -> Subscription<ContentIntent> {
        let open = self.is_sidebar_open();

        Subscription::batch([
            ViewportWatcher::subscription().map(ContentIntent::Window),
            escape_subscription(open).map(ContentIntent::Keyboard),
        ])
    }

    #[cfg(test)]
    pub(crate) fn holds_scroll_lock(&self) -> bool {
        self.shared.state().holds_scroll_lock()
    }
}

/// Snapshot handed to children of a content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentContext {
    pub has_sidebar: bool,
    pub sidebar_open: bool,
}

impl ContentContext {
    pub fn toggle(&self) -> ContentIntent {
        ContentIntent::Toggle
    }

    pub fn close(&self) -> ContentIntent {
        ContentIntent::Close
    }
}

/// Token returned by [`ContentArea::register_sidebar`].
#[derive(Debug)]
#[must_use = "the sidebar unregisters as soon as the token is dropped"]
pub struct SidebarRegistration {
    shared: Weak<ContentShared>,
}

impl Drop for SidebarRegistration {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.unregister();
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use super::*;

    fn resize(area: &mut ContentArea, width: f32) {
        let _task = area.reduce(ContentIntent::Window(window::Event::Resized(
            Size::new(width, 800.0),
        )));
    }

    #[test]
    fn given_no_area_when_context_requested_then_error_is_reported() {
        let err =
            ContentArea::context(None).expect_err("missing area must fail");

        assert_eq!(err, ContentError::OutsideProvider);
        assert_eq!(
            err.to_string(),
            "useContentContext must be used within ContentProvider"
        );
    }

    #[test]
    fn given_area_when_context_requested_then_snapshot_is_returned() {
        let area = ContentArea::new(500.0);
        let _registration = area.register_sidebar();

        let ctx = ContentArea::context(Some(&area)).expect("area in scope");

        assert!(ctx.has_sidebar);
        assert!(!ctx.sidebar_open);
    }

    #[test]
    fn given_n_registrations_when_all_dropped_then_has_sidebar_is_false() {
        let area = ContentArea::new(500.0);
        let registrations: Vec<_> =
            (0..4).map(|_| area.register_sidebar()).collect();
        assert!(area.has_sidebar());

        drop(registrations);

        assert!(!area.has_sidebar());
    }

    #[test]
    fn given_n_registrations_when_all_but_one_dropped_then_has_sidebar_is_true()
     {
        let area = ContentArea::new(500.0);
        let mut registrations: Vec<_> =
            (0..4).map(|_| area.register_sidebar()).collect();
        let last = registrations.pop();

        drop(registrations);
        assert!(area.has_sidebar());

        drop(last);
        assert!(!area.has_sidebar());
    }

    #[test]
    fn given_open_drawer_when_escape_backdrop_or_close_then_lock_is_restored() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let _registration = area.register_sidebar();

        for intent in [
            ContentIntent::EscapePressed,
            ContentIntent::BackdropPressed,
            ContentIntent::ClosePressed,
        ] {
            let _task = area.reduce(ContentIntent::TriggerPressed);
            assert!(area.is_sidebar_open());
            assert!(lock.is_locked());

            let _task = area.reduce(intent);

            assert!(!area.is_sidebar_open());
            assert!(!lock.is_locked());
            assert!(!area.holds_scroll_lock());
        }
    }

    #[test]
    fn given_closed_drawer_when_escape_pressed_then_state_is_unchanged() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);

        let _task = area.reduce(ContentIntent::EscapePressed);

        assert!(!area.is_sidebar_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_open_drawer_when_area_dropped_then_lock_is_released() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let registration = area.register_sidebar();
        let _task = area.reduce(ContentIntent::Toggle);
        assert!(lock.is_locked());

        drop(area);
        assert!(!lock.is_locked());

        // Outliving the area is harmless.
        drop(registration);
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_open_drawer_when_last_sidebar_unmounts_then_drawer_closes() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let registration = area.register_sidebar();
        let _task = area.reduce(ContentIntent::Toggle);

        drop(registration);

        assert!(!area.is_sidebar_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_open_mobile_drawer_when_resized_to_desktop_then_drawer_closes() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let _registration = area.register_sidebar();
        let _task = area.reduce(ContentIntent::Toggle);

        resize(&mut area, 1024.0);

        assert!(!area.is_mobile());
        assert!(!area.is_sidebar_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_registered_sidebar_on_mobile_then_vm_shows_trigger() {
        let mut area = ContentArea::new(1024.0);
        let _registration = area.register_sidebar();
        assert!(!area.vm().shows_trigger());

        resize(&mut area, 500.0);

        assert!(area.vm().shows_trigger());
    }

    #[test]
    fn given_two_areas_sharing_a_lock_when_one_closes_then_page_stays_locked() {
        let lock = ScrollLock::new();
        let mut first = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let mut second = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let _task = first.reduce(ContentIntent::Toggle);
        let _task = second.reduce(ContentIntent::Toggle);

        let _task = first.reduce(ContentIntent::Close);
        assert!(lock.is_locked());
        assert!(second.vm().scroll_locked);

        let _task = second.reduce(ContentIntent::Close);
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_desktop_area_when_toggled_then_page_scroll_stays_unlocked() {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 1280.0);
        let _registration = area.register_sidebar();

        let _task = area.reduce(ContentIntent::Toggle);

        let vm = area.vm();
        assert!(!vm.is_mobile);
        assert_eq!(vm.drawer_width(), 0.0);
        assert!(!vm.scroll_locked);
        assert!(!lock.is_locked());
    }

    #[test]
    fn given_state_borrowed_when_registration_dropped_then_unregister_is_applied_later()
     {
        let lock = ScrollLock::new();
        let mut area = ContentArea::with_scroll_lock(lock.clone(), 500.0);
        let registration = area.register_sidebar();
        let _task = area.reduce(ContentIntent::Toggle);

        {
            let _borrowed = area.shared.state.borrow();
            drop(registration);
            assert_eq!(area.shared.pending_unregisters.get(), 1);
        }

        assert!(!area.has_sidebar());
        assert!(!area.is_sidebar_open());
        assert!(!lock.is_locked());
        assert_eq!(area.shared.pending_unregisters.get(), 0);
    }
}
