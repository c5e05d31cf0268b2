//! Theme layer shared by every gp-ui crate.
//!
//! - [`AppTheme`] resolves a light or dark [`ColorPalette`] into `iced`
//!   colors and converts into an [`iced::Theme`];
//! - [`ThemeProps`] is threaded from the host through every component view;
//! - [`ColorModePreference`] persists the light/dark choice under a
//!   configurable key.

pub mod icons;

mod error;
mod palette;
mod preferences;
mod theme;

pub use error::ThemeError;
pub use palette::{ColorPalette, IcedColorPalette, parse_hex_color};
pub use preferences::{
    ColorModePreference, DEFAULT_COLOR_MODE_KEY, Preferences,
    PreferencesConfig, PreferencesLoad, PreferencesLoadStatus,
    load_preferences, save_preferences,
};
pub use theme::{AppTheme, ColorMode, StyleOverrides, ThemeManager, ThemeProps};
