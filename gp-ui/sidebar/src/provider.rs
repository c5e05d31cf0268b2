use gp_ui_components::{ViewportWatcher, escape_subscription};
use iced::{Subscription, Task};

use super::error::SidebarError;
use super::event::{SearchIntent, SidebarEvent, SidebarIntent};
use super::model::{
    CollapsedMode, SidebarConfig, SidebarVariant, SidebarViewModel,
};
use super::reducer::{self, SidebarCtx};
use super::search::SidebarSearch;
use super::state::SidebarState;

/// Owner of the navigation sidebar state for one subtree.
///
/// Not `Clone`: dropping the provider cancels its pending search focus.
#[derive(Debug)]
pub struct SidebarProvider {
    state: SidebarState,
    search: SidebarSearch,
}

impl SidebarProvider {
    /// Mount the provider. `initial_width` is measured synchronously so the
    /// first frame already uses the right layout.
    pub fn new(config: SidebarConfig, initial_width: f32) -> Self {
        let state = SidebarState::new(config, initial_width);
        log::debug!(
            "sidebar mounted: variant={:?} mobile={} collapsed={}",
            state.variant(),
            state.is_mobile(),
            state.is_collapsed()
        );

        Self {
            state,
            search: SidebarSearch::default(),
        }
    }

    pub fn with_search(mut self, search: SidebarSearch) -> Self {
        self.search = search;
        self
    }

    /// Consumer accessor. Fails when no provider is in scope.
    pub fn context(
        provider: Option<&SidebarProvider>,
    ) -> Result<SidebarContext, SidebarError> {
        provider
            .map(SidebarProvider::handle)
            .ok_or(SidebarError::OutsideProvider)
    }

    pub fn handle(&self) -> SidebarContext {
        SidebarContext {
            is_open: self.state.is_open(),
            is_mobile: self.state.is_mobile(),
            is_collapsed: self.state.is_collapsed(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, &mut self.search, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            is_open: self.state.is_open(),
            is_mobile: self.state.is_mobile(),
            is_collapsed: self.state.is_collapsed(),
            variant: self.state.variant(),
        }
    }

    pub fn search(&self) -> &SidebarSearch {
        &self.search
    }

    pub fn collapsed_mode(&self) -> CollapsedMode {
        self.state.collapsed_mode()
    }

    /// Apply the owner's controlled value, or release control with `None`.
    pub fn sync_collapsed(&mut self, controlled: Option<bool>) {
        self.state.sync_collapsed(controlled);
    }

    /// Cancel work that must not outlive the mounted panel.
    pub fn unmount(&mut self) {
        self.search.unmount();
    }

    /// Resize events (responsive only), Escape while the drawer is open
    /// and search focus ticks while one is pending.
    pub fn subscription(&self) -> Subscription<SidebarIntent> {
        let mut subscriptions = Vec::with_capacity(3);

        if self.state.variant() == SidebarVariant::Responsive {
            subscriptions
                .push(ViewportWatcher::subscription().map(SidebarIntent::Window));
        }

        let drawer_open = self.state.is_mobile() && self.state.is_mobile_open();
        subscriptions
            .push(escape_subscription(drawer_open).map(SidebarIntent::Keyboard));

        subscriptions.push(
            self.search
                .subscription()
                .map(|at| SidebarIntent::Search(SearchIntent::FocusTick(at))),
        );

        Subscription::batch(subscriptions)
    }
}

impl Drop for SidebarProvider {
    fn drop(&mut self) {
        self.search.unmount();
    }
}

/// Snapshot handed to children of a provider.
///
/// Actions are expressed as intents the child emits back to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarContext {
    pub is_open: bool,
    pub is_mobile: bool,
    pub is_collapsed: bool,
}

impl SidebarContext {
    pub fn toggle(&self) -> SidebarIntent {
        SidebarIntent::Toggle
    }

    pub fn set_open(&self, open: bool) -> SidebarIntent {
        SidebarIntent::SetOpen(open)
    }

    pub fn toggle_collapsed(&self) -> SidebarIntent {
        SidebarIntent::ToggleCollapsed
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::Size;
    use iced::window;

    use super::*;
    use crate::search::SEARCH_FOCUS_DELAY;

    fn resize(provider: &mut SidebarProvider, width: f32) {
        let _task = provider.reduce(
            SidebarIntent::Window(window::Event::Resized(Size::new(
                width, 800.0,
            ))),
            &SidebarCtx::default(),
        );
    }

    #[test]
    fn given_no_provider_when_context_requested_then_error_is_reported() {
        let err = SidebarProvider::context(None)
            .expect_err("missing provider must fail");

        assert_eq!(err, SidebarError::OutsideProvider);
        assert_eq!(
            err.to_string(),
            "use_sidebar must be used within a SidebarProvider"
        );
    }

    #[test]
    fn given_provider_when_context_requested_then_snapshot_matches_vm() {
        let provider = SidebarProvider::new(SidebarConfig::default(), 1280.0);

        let ctx = SidebarProvider::context(Some(&provider))
            .expect("provider in scope");

        assert!(ctx.is_open);
        assert!(!ctx.is_mobile);
        assert!(!ctx.is_collapsed);
        assert_eq!(ctx.is_open, provider.vm().is_open);
    }

    #[test]
    fn given_desktop_collapsed_when_resized_and_opened_then_collapsed_is_restored()
     {
        let mut provider =
            SidebarProvider::new(SidebarConfig::default(), 1280.0);
        let ctx = SidebarCtx::default();

        let _task = provider.reduce(SidebarIntent::Toggle, &ctx);
        assert!(!provider.vm().is_open);

        resize(&mut provider, 500.0);
        let vm = provider.vm();
        assert!(vm.is_mobile);
        assert!(!vm.is_open);

        let _task = provider.reduce(SidebarIntent::SetOpen(true), &ctx);
        assert!(provider.vm().is_open);

        resize(&mut provider, 1024.0);
        let vm = provider.vm();
        assert!(!vm.is_mobile);
        assert!(!vm.is_open);
        assert!(vm.is_collapsed);
    }

    #[test]
    fn given_open_drawer_when_item_pressed_then_drawer_closes() {
        let mut provider = SidebarProvider::new(SidebarConfig::default(), 500.0);
        let ctx = SidebarCtx::default();
        let _task = provider.reduce(SidebarIntent::Toggle, &ctx);
        assert!(provider.vm().is_open);

        let _task = provider.reduce(
            SidebarIntent::ItemPressed {
                id: String::from("home"),
                href: None,
            },
            &ctx,
        );

        assert!(!provider.vm().is_open);
    }

    #[test]
    fn given_desktop_when_item_pressed_then_collapsed_state_is_untouched() {
        let mut provider =
            SidebarProvider::new(SidebarConfig::default(), 1280.0);

        let _task = provider.reduce(
            SidebarIntent::ItemPressed {
                id: String::from("docs"),
                href: Some(String::from("/docs")),
            },
            &SidebarCtx::default(),
        );

        assert!(provider.vm().is_open);
        assert!(!provider.vm().is_collapsed);
    }

    #[test]
    fn given_open_drawer_when_backdrop_or_close_pressed_then_drawer_closes() {
        let mut provider = SidebarProvider::new(SidebarConfig::default(), 500.0);
        let ctx = SidebarCtx::default();

        for intent in [SidebarIntent::BackdropPressed, SidebarIntent::ClosePressed]
        {
            let _task = provider.reduce(SidebarIntent::SetOpen(true), &ctx);
            assert!(provider.vm().is_open);
            let _task = provider.reduce(intent, &ctx);
            assert!(!provider.vm().is_open);
        }
    }

    #[test]
    fn given_desktop_when_backdrop_pressed_then_panel_stays_expanded() {
        let mut provider =
            SidebarProvider::new(SidebarConfig::default(), 1280.0);

        let _task = provider
            .reduce(SidebarIntent::BackdropPressed, &SidebarCtx::default());

        assert!(provider.vm().is_open);
    }

    #[test]
    fn given_open_drawer_when_escape_pressed_then_drawer_closes() {
        let mut provider = SidebarProvider::new(SidebarConfig::default(), 500.0);
        let ctx = SidebarCtx::default();
        let _task = provider.reduce(SidebarIntent::SetOpen(true), &ctx);

        let _task = provider.reduce(SidebarIntent::EscapePressed, &ctx);

        assert!(!provider.vm().is_open);
    }

    #[test]
    fn given_desktop_when_escape_pressed_then_panel_stays_expanded() {
        let mut provider =
            SidebarProvider::new(SidebarConfig::default(), 1280.0);

        let _task =
            provider.reduce(SidebarIntent::EscapePressed, &SidebarCtx::default());

        assert!(provider.vm().is_open);
        assert!(!provider.vm().is_collapsed);
    }

    #[test]
    fn given_collapsed_search_when_pressed_then_panel_expands_and_focus_is_scheduled()
     {
        let mut provider = SidebarProvider::new(
            SidebarConfig {
                default_collapsed: true,
                ..SidebarConfig::default()
            },
            1280.0,
        );
        let start = Instant::now();
        let ctx = SidebarCtx { now: start };

        let _task = provider.reduce(
            SidebarIntent::Search(SearchIntent::CollapsedPressed),
            &ctx,
        );
        assert!(provider.vm().is_open);
        assert!(provider.search().has_pending_focus());

        let _task = provider.reduce(
            SidebarIntent::Search(SearchIntent::FocusTick(
                start + Duration::from_millis(10),
            )),
            &ctx,
        );
        assert!(provider.search().has_pending_focus());

        let _task = provider.reduce(
            SidebarIntent::Search(SearchIntent::FocusTick(
                start + SEARCH_FOCUS_DELAY,
            )),
            &ctx,
        );
        assert!(!provider.search().has_pending_focus());
    }

    #[test]
    fn given_pending_focus_when_unmounted_then_request_is_dropped() {
        let mut provider = SidebarProvider::new(
            SidebarConfig {
                default_collapsed: true,
                ..SidebarConfig::default()
            },
            1280.0,
        );
        let _task = provider.reduce(
            SidebarIntent::Search(SearchIntent::CollapsedPressed),
            &SidebarCtx::default(),
        );

        provider.unmount();

        assert!(!provider.search().has_pending_focus());
    }

    #[test]
    fn given_search_text_when_changed_then_value_is_stored() {
        let mut provider =
            SidebarProvider::new(SidebarConfig::default(), 1280.0);

        let _task = provider.reduce(
            SidebarIntent::Search(SearchIntent::Changed(String::from(" q "))),
            &SidebarCtx::default(),
        );

        assert_eq!(provider.search().value(), " q ");
        assert_eq!(provider.search().submission().as_deref(), Some("q"));
    }

    #[test]
    fn given_controlled_provider_when_owner_syncs_then_value_follows_owner() {
        let mut provider = SidebarProvider::new(
            SidebarConfig {
                collapsed: Some(true),
                ..SidebarConfig::default()
            },
            1280.0,
        );
        assert!(provider.vm().is_collapsed);

        let _task =
            provider.reduce(SidebarIntent::Toggle, &SidebarCtx::default());
        assert!(provider.vm().is_collapsed);

        provider.sync_collapsed(Some(false));
        assert!(provider.vm().is_open);
    }
}
