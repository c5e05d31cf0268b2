use iced::{Subscription, window};

/// Widths strictly below this value are treated as mobile.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Classify a logical window width.
pub fn is_mobile_width(width: f32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Outcome of a single viewport measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTransition {
    pub was_mobile: bool,
    pub is_mobile: bool,
}

impl ViewportTransition {
    /// Return true when the viewport just grew past the breakpoint.
    pub fn left_mobile(&self) -> bool {
        self.was_mobile && !self.is_mobile
    }

    /// Return true when the viewport just shrank below the breakpoint.
    pub fn entered_mobile(&self) -> bool {
        !self.was_mobile && self.is_mobile
    }

    pub fn changed(&self) -> bool {
        self.was_mobile != self.is_mobile
    }
}

/// Tracks whether the window is currently below [`MOBILE_BREAKPOINT`].
///
/// The first measurement happens at construction so the initial layout is
/// already correct. Every `Resized` event is evaluated, no throttling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportWatcher {
    width: f32,
    is_mobile: bool,
}

impl ViewportWatcher {
    pub fn new(initial_width: f32) -> Self {
        Self {
            width: initial_width,
            is_mobile: is_mobile_width(initial_width),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Record a new width and report the transition it caused.
    pub fn measure(&mut self, width: f32) -> ViewportTransition {
        let transition = ViewportTransition {
            was_mobile: self.is_mobile,
            is_mobile: is_mobile_width(width),
        };

        self.width = width;
        self.is_mobile = transition.is_mobile;

        if transition.changed() {
            log::debug!(
                "viewport width {width} crossed breakpoint: mobile={}",
                transition.is_mobile
            );
        }

        transition
    }

    /// Feed a window event; only `Resized` is measured.
    pub fn handle_window_event(
        &mut self,
        event: &window::Event,
    ) -> Option<ViewportTransition> {
        resized_width(event).map(|width| self.measure(width))
    }

    /// Window events for the lifetime of the subscribing widget.
    pub fn subscription() -> Subscription<window::Event> {
        window::events().map(|(_id, event)| event)
    }
}

/// Extract the new width from a `Resized` window event.
pub fn resized_width(event: &window::Event) -> Option<f32> {
    match event {
        window::Event::Resized(size) => Some(size.width),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1024.0));
    }

    #[test]
    fn given_initial_narrow_width_when_constructed_then_watcher_is_mobile() {
        let watcher = ViewportWatcher::new(500.0);
        assert!(watcher.is_mobile());
        assert_eq!(watcher.width(), 500.0);
    }

    #[test]
    fn given_desktop_watcher_when_shrunk_then_entered_mobile_is_reported() {
        let mut watcher = ViewportWatcher::new(1280.0);

        let transition = watcher.measure(500.0);

        assert!(transition.entered_mobile());
        assert!(!transition.left_mobile());
        assert!(watcher.is_mobile());
    }

    #[test]
    fn given_mobile_watcher_when_grown_then_left_mobile_is_reported() {
        let mut watcher = ViewportWatcher::new(500.0);

        let transition = watcher.measure(1024.0);

        assert!(transition.left_mobile());
        assert!(!watcher.is_mobile());
    }

    #[test]
    fn given_resize_within_same_mode_when_measured_then_no_change() {
        let mut watcher = ViewportWatcher::new(900.0);

        let transition = watcher.measure(1200.0);

        assert!(!transition.changed());
        assert_eq!(watcher.width(), 1200.0);
    }

    #[test]
    fn given_non_resize_window_event_when_handled_then_it_is_ignored() {
        let mut watcher = ViewportWatcher::new(900.0);

        assert_eq!(
            watcher.handle_window_event(&window::Event::Focused),
            None
        );
        let transition = watcher
            .handle_window_event(&window::Event::Resized(Size::new(
                320.0, 640.0,
            )))
            .expect("resize should be measured");
        assert!(transition.entered_mobile());
    }
}
