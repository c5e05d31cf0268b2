//! Content area layouts with an optional secondary sidebar.
//!
//! [`ContentArea`] is a lighter cousin of the navigation sidebar provider:
//! it only tracks whether the in-page drawer is open and how many content
//! sidebars are mounted. Each mounted sidebar holds a
//! [`SidebarRegistration`]; dropping it unregisters. While the mobile
//! drawer is open the area holds a [`ScrollLockGuard`] on the shared
//! [`ScrollLock`], so closing the drawer or dropping the area always
//! restores scrolling. Desktop never locks.
//!
//! Views live in [`view`]: [`view::body`] places the sidebar beside or over
//! a [`view::ContentPane`], and [`view::tabs`] adds the mobile trigger when
//! a sidebar is registered.

mod area;
mod error;
mod event;
mod model;
mod reducer;
mod scroll_lock;
mod state;
pub mod view;

pub use area::{ContentArea, ContentContext, SidebarRegistration};
pub use error::ContentError;
pub use event::{ContentEffect, ContentEvent, ContentIntent};
pub use model::{
    CONTENT_DRAWER_WIDTH, ContentPaneMaxWidth, ContentPosition,
    ContentSidebarConfig, ContentSidebarWidth, ContentViewModel,
};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
