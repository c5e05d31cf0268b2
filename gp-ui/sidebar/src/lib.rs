//! Collapsible navigation sidebar.
//!
//! [`SidebarProvider`] owns the open, collapsed, and mobile flags for one
//! subtree and reduces [`SidebarIntent`]s into [`SidebarEffect`]s. On
//! desktop the sidebar is a static column that collapses to icons; below
//! [`gp_ui_components::MOBILE_BREAKPOINT`] it becomes an overlay drawer with
//! a backdrop. The [`SidebarVariant::Inline`] variant never measures the
//! viewport and always renders as desktop.
//!
//! Rendering lives in [`view`]:
//! - [`view::layout`] composes the panel with page content;
//! - [`view::search`] and [`view::user`] build optional header and footer
//!   slots.

mod error;
mod event;
mod model;
mod provider;
mod reducer;
mod search;
mod state;
mod user;
pub mod view;

pub use error::SidebarError;
pub use event::{SearchIntent, SidebarEffect, SidebarEvent, SidebarIntent};
pub use model::{
    COLLAPSE_DURATION_MS, CollapsedMode, SIDEBAR_COLLAPSED_WIDTH,
    SIDEBAR_EXPANDED_WIDTH, SIDEBAR_MOBILE_WIDTH, SidebarConfig, SidebarGroup,
    SidebarItem, SidebarItems, SidebarVariant, SidebarViewModel,
};
pub use provider::{SidebarContext, SidebarProvider};
pub use reducer::SidebarCtx;
pub use search::{SEARCH_FOCUS_DELAY, SidebarSearch};
pub use user::{SidebarUser, initials};
