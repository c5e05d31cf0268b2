/// Width of the desktop panel while collapsed to icons.
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 53.0;
/// Width of the desktop panel while expanded.
pub const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;
/// Width of the mobile drawer.
pub const SIDEBAR_MOBILE_WIDTH: f32 = 256.0;
/// Length of the collapse/expand transition.
pub const COLLAPSE_DURATION_MS: u64 = 200;

/// Whether the sidebar follows the viewport or stays in desktop mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVariant {
    #[default]
    Responsive,
    /// Standalone sidebar that never switches to the mobile drawer.
    Inline,
}

/// Provider configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarConfig {
    pub default_collapsed: bool,
    /// Controlled value. When set it always wins over internal state.
    pub collapsed: Option<bool>,
    pub variant: SidebarVariant,
}

/// Authority over the desktop collapsed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsedMode {
    /// The owner supplies the value and receives change requests.
    Controlled { value: bool, internal: bool },
    /// The store owns the value.
    Uncontrolled(bool),
}

impl CollapsedMode {
    pub fn from_config(config: &SidebarConfig) -> Self {
        match config.collapsed {
            Some(value) => CollapsedMode::Controlled {
                value,
                internal: config.default_collapsed,
            },
            None => CollapsedMode::Uncontrolled(config.default_collapsed),
        }
    }

    /// Effective collapsed value.
    pub fn value(&self) -> bool {
        match self {
            CollapsedMode::Controlled { value, .. } => *value,
            CollapsedMode::Uncontrolled(value) => *value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, CollapsedMode::Controlled { .. })
    }

    /// Record a requested value. A controlled value only changes when the
    /// owner syncs it back.
    pub(crate) fn request(&mut self, next: bool) {
        match self {
            CollapsedMode::Controlled { internal, .. } => *internal = next,
            CollapsedMode::Uncontrolled(value) => *value = next,
        }
    }

    /// Adopt or release an externally controlled value.
    pub(crate) fn sync(&mut self, controlled: Option<bool>) {
        let internal = match *self {
            CollapsedMode::Controlled { internal, .. } => internal,
            CollapsedMode::Uncontrolled(value) => value,
        };
        *self = match controlled {
            Some(value) => CollapsedMode::Controlled { value, internal },
            None => CollapsedMode::Uncontrolled(internal),
        };
    }
}

/// Leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: String,
    pub label: String,
    pub icon: Option<&'static [u8]>,
    pub href: Option<String>,
    pub is_active: bool,
    pub badge: Option<String>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            href: None,
            is_active: false,
            badge: None,
        }
    }

    pub fn icon(mut self, icon: &'static [u8]) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn badge(mut self, badge: impl ToString) -> Self {
        self.badge = Some(badge.to_string());
        self
    }
}

/// Labelled bucket of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarGroup {
    pub label: Option<String>,
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(label: Option<&str>, items: Vec<SidebarItem>) -> Self {
        Self {
            label: label.map(str::to_string),
            items,
        }
    }
}

/// Navigation data supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItems {
    Flat(Vec<SidebarItem>),
    Grouped(Vec<SidebarGroup>),
}

impl Default for SidebarItems {
    fn default() -> Self {
        SidebarItems::Flat(Vec::new())
    }
}

impl SidebarItems {
    /// Flat lists become one unlabeled group; empty input yields no groups.
    pub fn groups(&self) -> Vec<SidebarGroup> {
        match self {
            SidebarItems::Flat(items) if items.is_empty() => Vec::new(),
            SidebarItems::Flat(items) => vec![SidebarGroup {
                label: None,
                items: items.clone(),
            }],
            SidebarItems::Grouped(groups) => groups.clone(),
        }
    }
}

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarViewModel {
    pub is_open: bool,
    pub is_mobile: bool,
    pub is_collapsed: bool,
    pub variant: SidebarVariant,
}

impl SidebarViewModel {
    /// Width of the static desktop panel.
    pub fn panel_width(&self) -> f32 {
        if self.is_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        }
    }

    /// Visible drawer width; the drawer stays mounted at zero width.
    pub fn drawer_width(&self) -> f32 {
        if self.is_mobile && self.is_open {
            SIDEBAR_MOBILE_WIDTH
        } else {
            0.0
        }
    }

    pub fn shows_backdrop(&self) -> bool {
        self.is_mobile && self.is_open
    }

    pub fn shows_close_button(&self) -> bool {
        self.is_mobile
    }

    pub fn shows_collapse_toggle(&self) -> bool {
        !self.is_mobile
    }

    /// Opacity for labels that fade out instead of unmounting.
    pub fn label_alpha(&self) -> f32 {
        if self.is_collapsed { 0.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_items_normalize_to_one_unlabeled_group() {
        let items = SidebarItems::Flat(vec![
            SidebarItem::new("home", "Home"),
            SidebarItem::new("docs", "Docs"),
        ]);

        let groups = items.groups();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, None);
        assert_eq!(groups[0].items.len(), 2);
        assert!(SidebarItems::default().groups().is_empty());
    }

    #[test]
    fn given_controlled_mode_when_requested_then_value_waits_for_owner() {
        let mut mode = CollapsedMode::from_config(&SidebarConfig {
            collapsed: Some(false),
            ..SidebarConfig::default()
        });

        mode.request(true);
        assert!(!mode.value());

        mode.sync(Some(true));
        assert!(mode.value());
    }

    #[test]
    fn given_controlled_mode_when_released_then_internal_value_is_kept() {
        let mut mode = CollapsedMode::from_config(&SidebarConfig {
            collapsed: Some(false),
            ..SidebarConfig::default()
        });
        mode.request(true);

        mode.sync(None);

        assert_eq!(mode, CollapsedMode::Uncontrolled(true));
    }

    #[test]
    fn collapsed_view_model_uses_narrow_width_and_hides_labels() {
        let vm = SidebarViewModel {
            is_open: false,
            is_mobile: false,
            is_collapsed: true,
            variant: SidebarVariant::Responsive,
        };

        assert_eq!(vm.panel_width(), SIDEBAR_COLLAPSED_WIDTH);
        assert_eq!(vm.label_alpha(), 0.0);
        assert!(vm.shows_collapse_toggle());
        assert!(!vm.shows_backdrop());
        assert_eq!(vm.drawer_width(), 0.0);
    }
}
