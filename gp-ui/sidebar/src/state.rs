use gp_ui_components::{ViewportTransition, ViewportWatcher};

use super::model::{CollapsedMode, SidebarConfig, SidebarVariant};

/// Primitive sidebar state. Derived flags are recomputed on every read.
#[derive(Debug, Clone)]
pub(crate) struct SidebarState {
    variant: SidebarVariant,
    viewport: ViewportWatcher,
    collapsed: CollapsedMode,
    mobile_open: bool,
}

impl SidebarState {
    /// Build the state and take the first viewport measurement.
    pub(crate) fn new(config: SidebarConfig, initial_width: f32) -> Self {
        Self {
            variant: config.variant,
            viewport: ViewportWatcher::new(initial_width),
            collapsed: CollapsedMode::from_config(&config),
            mobile_open: false,
        }
    }

    pub(crate) fn variant(&self) -> SidebarVariant {
        self.variant
    }

    pub(crate) fn is_mobile(&self) -> bool {
        match self.variant {
            SidebarVariant::Inline => false,
            SidebarVariant::Responsive => self.viewport.is_mobile(),
        }
    }

    /// Collapsed as exposed to consumers: suppressed while mobile.
    pub(crate) fn is_collapsed(&self) -> bool {
        !self.is_mobile() && self.collapsed.value()
    }

    /// Underlying desktop flag, preserved across mobile excursions.
    pub(crate) fn desktop_collapsed(&self) -> bool {
        self.collapsed.value()
    }

    pub(crate) fn collapsed_mode(&self) -> CollapsedMode {
        self.collapsed
    }

    pub(crate) fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub(crate) fn is_open(&self) -> bool {
        if self.is_mobile() {
            self.mobile_open
        } else {
            !self.collapsed.value()
        }
    }

    /// Flip the drawer on mobile, the collapsed flag otherwise.
    ///
    /// Returns the requested collapsed value when one should be reported.
    pub(crate) fn toggle(&mut self) -> Option<bool> {
        if self.is_mobile() {
            self.mobile_open = !self.mobile_open;
            None
        } else {
            Some(self.request_collapsed(!self.collapsed.value()))
        }
    }

    /// Open and collapsed are complementary on desktop.
    pub(crate) fn set_open(&mut self, open: bool) -> Option<bool> {
        if self.is_mobile() {
            self.mobile_open = open;
            None
        } else {
            Some(self.request_collapsed(!open))
        }
    }

    /// Desktop-only toggle. Silently ignored while mobile.
    pub(crate) fn toggle_collapsed(&mut self) -> Option<bool> {
        if self.is_mobile() {
            log::debug!("toggle_collapsed ignored while mobile");
            return None;
        }
        Some(self.request_collapsed(!self.collapsed.value()))
    }

    pub(crate) fn close_mobile(&mut self) -> bool {
        let was_open = self.mobile_open;
        self.mobile_open = false;
        was_open
    }

    pub(crate) fn sync_collapsed(&mut self, controlled: Option<bool>) {
        self.collapsed.sync(controlled);
    }

    /// Measure a new width. Crossing the breakpoint in either direction
    /// leaves the drawer closed; the collapsed flag is never touched.
    pub(crate) fn apply_viewport_width(
        &mut self,
        width: f32,
    ) -> Option<ViewportTransition> {
        if self.variant == SidebarVariant::Inline {
            return None;
        }

        let transition = self.viewport.measure(width);
        if transition.changed() {
            self.mobile_open = false;
        }
        Some(transition)
    }

    fn request_collapsed(&mut self, next: bool) -> bool {
        self.collapsed.request(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f32 = 1024.0;
    const MOBILE: f32 = 500.0;

    fn responsive(default_collapsed: bool, width: f32) -> SidebarState {
        SidebarState::new(
            SidebarConfig {
                default_collapsed,
                ..SidebarConfig::default()
            },
            width,
        )
    }

    #[test]
    fn given_wide_viewport_when_mounted_then_desktop_expanded() {
        let state = responsive(false, DESKTOP);

        assert!(state.is_open());
        assert!(!state.is_mobile());
        assert!(!state.is_collapsed());
    }

    #[test]
    fn given_narrow_viewport_when_mounted_then_mobile_closed() {
        let state = responsive(false, MOBILE);

        assert!(state.is_mobile());
        assert!(!state.is_open());
    }

    #[test]
    fn given_desktop_when_toggled_then_collapsed_and_open_stay_complementary()
    {
        let mut state = responsive(false, DESKTOP);
        let ops: [fn(&mut SidebarState) -> Option<bool>; 5] = [
            SidebarState::toggle,
            |s| s.set_open(true),
            |s| s.set_open(false),
            SidebarState::toggle,
            SidebarState::toggle_collapsed,
        ];

        for op in ops {
            let reported = op(&mut state);
            assert_eq!(reported, Some(state.is_collapsed()));
            assert_eq!(state.is_open(), !state.is_collapsed());
        }
    }

    #[test]
    fn given_mobile_when_toggled_then_open_tracks_drawer_and_collapsed_reads_false()
     {
        let mut state = responsive(true, MOBILE);

        assert_eq!(state.toggle(), None);
        assert!(state.is_open());
        assert_eq!(state.is_open(), state.is_mobile_open());
        assert!(!state.is_collapsed());
        assert!(state.desktop_collapsed());

        assert_eq!(state.set_open(false), None);
        assert!(!state.is_open());
        assert_eq!(state.is_open(), state.is_mobile_open());
    }

    #[test]
    fn given_open_drawer_when_leaving_mobile_then_drawer_is_closed() {
        let mut state = responsive(false, MOBILE);
        state.set_open(true);
        assert!(state.is_mobile_open());

        let transition = state
            .apply_viewport_width(DESKTOP)
            .expect("responsive sidebar measures");

        assert!(transition.left_mobile());
        assert!(!state.is_mobile_open());
    }

    #[test]
    fn given_expanded_desktop_when_mobile_round_trip_then_collapsed_is_unchanged()
     {
        let mut state = responsive(false, DESKTOP);

        state.apply_viewport_width(MOBILE);
        state.toggle();
        state.apply_viewport_width(DESKTOP);

        assert!(!state.is_collapsed());
        assert!(state.is_open());
    }

    #[test]
    fn given_collapsed_desktop_when_shrunk_opened_and_grown_then_collapsed_is_restored()
     {
        let mut state = responsive(false, DESKTOP);
        state.toggle();
        assert!(!state.is_open());

        state.apply_viewport_width(MOBILE);
        assert!(state.is_mobile());
        assert!(!state.is_open());

        state.set_open(true);
        assert!(state.is_open());

        state.apply_viewport_width(DESKTOP);
        assert!(!state.is_mobile());
        assert!(state.is_collapsed());
        assert!(!state.is_open());
    }

    #[test]
    fn given_mobile_when_toggle_collapsed_then_nothing_changes() {
        let mut state = responsive(false, MOBILE);

        assert_eq!(state.toggle_collapsed(), None);
        assert!(!state.desktop_collapsed());
        assert!(!state.is_mobile_open());
    }

    #[test]
    fn given_inline_variant_when_viewport_is_narrow_then_never_mobile() {
        let mut state = SidebarState::new(
            SidebarConfig {
                variant: SidebarVariant::Inline,
                ..SidebarConfig::default()
            },
            MOBILE,
        );

        assert!(!state.is_mobile());
        assert_eq!(state.apply_viewport_width(320.0), None);
        assert_eq!(state.toggle(), Some(true));
        assert!(state.is_collapsed());
    }

    #[test]
    fn given_controlled_value_when_toggled_then_owner_value_still_wins() {
        let mut state = SidebarState::new(
            SidebarConfig {
                collapsed: Some(false),
                ..SidebarConfig::default()
            },
            DESKTOP,
        );

        assert_eq!(state.toggle(), Some(true));
        assert!(!state.is_collapsed());
        assert!(state.collapsed_mode().is_controlled());

        state.sync_collapsed(Some(true));
        assert!(state.is_collapsed());
        assert!(!state.is_open());
    }
}
