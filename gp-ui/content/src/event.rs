use iced::{keyboard, window};

/// Intent events handled by the content area.
#[derive(Debug, Clone)]
pub enum ContentIntent {
    Toggle,
    Close,
    TriggerPressed,
    BackdropPressed,
    ClosePressed,
    EscapePressed,
    Window(window::Event),
    Keyboard(keyboard::Event),
}

/// Effect events produced by the content reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEffect {
    SidebarOpenChanged(bool),
}

/// Content event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub enum ContentEvent {
    Intent(ContentIntent),
    Effect(ContentEffect),
}
