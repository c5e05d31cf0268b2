//! Presentational building blocks for gp-ui applications.
//!
//! Two kinds of items live here:
//! - shared primitives used by the stateful crates: [`ViewportWatcher`] for
//!   the mobile breakpoint and [`escape_subscription`] for Escape handling;
//! - stateless components rendered from builders, each taking
//!   [`gp_ui_theme::ThemeProps`] at `view` time.
//!
//! Components never own application state. Anything that changes between
//! frames (an open menu, copy feedback) is a small state struct the
//! host stores and passes back in.
//!
//! See `examples/gallery.rs` for a runnable overview.

mod alert;
mod badge;
mod button;
mod card;
mod color_mode;
mod dropdown;
mod format;
mod input;
mod keyboard;
mod layout;
mod modal;
mod skeleton;
mod stat_card;
mod stat_grid;
mod style;
mod tab_bar;
mod text_area;
mod tooltip;
mod viewport;

pub use alert::{Alert, AlertVariant};
pub use badge::{BadgeSize, BadgeVariant, badge};
pub use button::{Button, ButtonSize, ButtonVariant, IconPosition};
pub use card::Card;
pub use color_mode::{ColorModeLabels, color_mode_toggle};
pub use dropdown::{Dropdown, DropdownAlign, DropdownEntry, DropdownState};
pub use format::{
    ValueFormat, format_bytes, format_currency, format_number, format_value,
    is_numeric,
};
pub use input::{Input, InputSize, InputVariant, LabelPosition};
pub use keyboard::{escape_subscription, is_escape};
pub use layout::{
    Banner, BannerLink, Layout, LayoutMaxWidth, LayoutMenuItem, LayoutUser,
    MenuItemVariant, UserMenu,
};
pub use modal::{AlertModal, ConfirmModal, Modal, ModalSize};
pub use skeleton::{
    Skeleton, skeleton_list_item, skeleton_opacity, skeleton_stat_card,
    skeleton_text,
};
pub use stat_card::{
    StatCard, StatCardColor, StatCardVariant, Trend, TrendDirection,
};
pub use stat_grid::{
    COPY_FEEDBACK_DURATION, CopyFeedback, CopyRequest, StatGrid, StatItem,
    StatStatus,
};
pub use style::svg_icon;
pub use tab_bar::{TabItem, tab_bar};
pub use text_area::TextArea;
pub use tooltip::{TooltipPosition, tooltip};
pub use viewport::{
    MOBILE_BREAKPOINT, ViewportTransition, ViewportWatcher, is_mobile_width,
    resized_width,
};
