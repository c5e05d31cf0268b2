//! SVG icon assets shared by gp-ui crates.
//!
//! Icons are stroke based and tinted through `svg::Style::color`.

pub const CHEVRON_LEFT: &[u8] = include_bytes!("../assets/svg/chevron-left.svg");
pub const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../assets/svg/chevron-right.svg");
pub const CLOSE: &[u8] = include_bytes!("../assets/svg/close.svg");
pub const MENU: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub const SEARCH: &[u8] = include_bytes!("../assets/svg/search.svg");
pub const LOADER: &[u8] = include_bytes!("../assets/svg/loader.svg");
pub const TRENDING_UP: &[u8] = include_bytes!("../assets/svg/trending-up.svg");
pub const TRENDING_DOWN: &[u8] =
    include_bytes!("../assets/svg/trending-down.svg");
pub const COPY: &[u8] = include_bytes!("../assets/svg/copy.svg");
pub const CHECK: &[u8] = include_bytes!("../assets/svg/check.svg");
pub const INFO: &[u8] = include_bytes!("../assets/svg/info.svg");
pub const ALERT_TRIANGLE: &[u8] =
    include_bytes!("../assets/svg/alert-triangle.svg");
pub const X_CIRCLE: &[u8] = include_bytes!("../assets/svg/x-circle.svg");
pub const CHECK_CIRCLE: &[u8] = include_bytes!("../assets/svg/check-circle.svg");
pub const ARROW_LEFT: &[u8] = include_bytes!("../assets/svg/arrow-left.svg");
pub const LOG_OUT: &[u8] = include_bytes!("../assets/svg/log-out.svg");
pub const EXTERNAL_LINK: &[u8] =
    include_bytes!("../assets/svg/external-link.svg");
pub const MOON: &[u8] = include_bytes!("../assets/svg/moon.svg");
pub const SUN: &[u8] = include_bytes!("../assets/svg/sun.svg");
