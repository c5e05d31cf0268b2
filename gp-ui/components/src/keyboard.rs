use iced::Subscription;
use iced::keyboard::{self, Key, key};

/// Return true for an Escape key press.
pub fn is_escape(event: &keyboard::Event) -> bool {
    matches!(
        event,
        keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        }
    )
}

/// Keyboard events, attached only while `enabled`.
pub fn escape_subscription(enabled: bool) -> Subscription<keyboard::Event> {
    if enabled {
        keyboard::listen()
    } else {
        Subscription::none()
    }
}
