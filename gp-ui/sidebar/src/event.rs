use std::time::Instant;

use iced::{keyboard, window};

/// Intents reduced by the search field.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    Changed(String),
    Submitted,
    /// Icon button shown while collapsed.
    CollapsedPressed,
    FocusTick(Instant),
}

/// Intent events handled by the sidebar provider.
#[derive(Debug, Clone)]
pub enum SidebarIntent {
    Toggle,
    SetOpen(bool),
    ToggleCollapsed,
    ItemPressed { id: String, href: Option<String> },
    UserPressed,
    BackdropPressed,
    ClosePressed,
    EscapePressed,
    Window(window::Event),
    Keyboard(keyboard::Event),
    Search(SearchIntent),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEffect {
    /// Requested desktop collapsed value, reported in both modes.
    CollapsedChanged(bool),
    ItemActivated { id: String },
    Navigate { href: String },
    UserActivated,
    SearchSubmitted(String),
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub enum SidebarEvent {
    /// Intent event reduced by the sidebar provider.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
