/// Width of the mobile drawer in logical pixels.
pub const CONTENT_DRAWER_WIDTH: f32 = 256.0;

/// Static sidebar width on desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentSidebarWidth {
    Narrow,
    #[default]
    Medium,
    Wide,
}

impl ContentSidebarWidth {
    pub fn px(self) -> f32 {
        match self {
            ContentSidebarWidth::Narrow => 200.0,
            ContentSidebarWidth::Medium => 256.0,
            ContentSidebarWidth::Wide => 320.0,
        }
    }
}

/// Side of the pane the sidebar sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSidebarConfig {
    pub width: ContentSidebarWidth,
    pub position: ContentPosition,
}

impl ContentSidebarConfig {
    pub fn width(mut self, width: ContentSidebarWidth) -> Self {
        self.width = width;
        self
    }

    pub fn position(mut self, position: ContentPosition) -> Self {
        self.position = position;
        self
    }
}

/// Max width of a centered content pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentPaneMaxWidth {
    Narrow,
    #[default]
    Medium,
    Wide,
}

impl ContentPaneMaxWidth {
    pub fn px(self) -> f32 {
        match self {
            ContentPaneMaxWidth::Narrow => 512.0,
            ContentPaneMaxWidth::Medium => 768.0,
            ContentPaneMaxWidth::Wide => 1024.0,
        }
    }
}

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentViewModel {
    pub sidebar_open: bool,
    pub has_sidebar: bool,
    pub is_mobile: bool,
    pub scroll_locked: bool,
}

impl ContentViewModel {
    pub fn shows_backdrop(&self) -> bool {
        self.is_mobile && self.sidebar_open
    }

    /// Tabs show the drawer trigger only when a sidebar is registered and
    /// the viewport is mobile.
    pub fn shows_trigger(&self) -> bool {
        self.has_sidebar && self.is_mobile
    }

    pub fn drawer_width(&self) -> f32 {
        if self.shows_backdrop() {
            CONTENT_DRAWER_WIDTH
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm(has_sidebar: bool, is_mobile: bool, open: bool) -> ContentViewModel {
        ContentViewModel {
            sidebar_open: open,
            has_sidebar,
            is_mobile,
            scroll_locked: open,
        }
    }

    #[test]
    fn widths_match_named_sizes() {
        assert_eq!(ContentSidebarWidth::Narrow.px(), 200.0);
        assert_eq!(ContentSidebarWidth::default().px(), 256.0);
        assert_eq!(ContentSidebarWidth::Wide.px(), 320.0);
        assert_eq!(ContentPaneMaxWidth::Narrow.px(), 512.0);
        assert_eq!(ContentPaneMaxWidth::default().px(), 768.0);
        assert_eq!(ContentPaneMaxWidth::Wide.px(), 1024.0);
    }

    #[test]
    fn trigger_requires_sidebar_and_mobile() {
        assert!(vm(true, true, false).shows_trigger());
        assert!(!vm(true, false, false).shows_trigger());
        assert!(!vm(false, true, false).shows_trigger());
    }

    #[test]
    fn closed_drawer_has_no_width() {
        assert_eq!(vm(true, true, false).drawer_width(), 0.0);
        assert_eq!(vm(true, true, true).drawer_width(), CONTENT_DRAWER_WIDTH);
        assert!(!vm(true, false, true).shows_backdrop());
    }
}
