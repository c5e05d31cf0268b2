use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::palette::{ColorPalette, IcedColorPalette};

/// Light or dark presentation of the design system.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    fn palette(self) -> ColorPalette {
        match self {
            ColorMode::Light => ColorPalette::light(),
            ColorMode::Dark => ColorPalette::dark(),
        }
    }
}

/// Optional overrides for component styling.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border_radius: Option<f32>,
}

/// Resolved design-system theme shared by every component.
#[derive(Debug, Clone)]
pub struct AppTheme {
    id: String,
    mode: ColorMode,
    raw_palette: ColorPalette,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::for_mode(ColorMode::Light)
    }
}

impl AppTheme {
    /// Build the built-in theme for a color mode.
    pub fn for_mode(mode: ColorMode) -> Self {
        let raw_palette = mode.palette();
        let iced_palette = match IcedColorPalette::try_from(&raw_palette) {
            Ok(palette) => palette,
            Err(err) => {
                // Built-in palettes are covered by tests; keep rendering.
                log::error!("built-in palette rejected: {err}");
                fallback_palette()
            },
        };

        Self {
            id: match mode {
                ColorMode::Light => String::from("gp-light"),
                ColorMode::Dark => String::from("gp-dark"),
            },
            mode,
            raw_palette,
            iced_palette,
        }
    }

    /// Build a theme from a custom hex palette.
    pub fn from_palette(
        id: String,
        mode: ColorMode,
        raw_palette: ColorPalette,
    ) -> Result<Self, ThemeError> {
        let iced_palette = IcedColorPalette::try_from(&raw_palette)?;
        Ok(Self {
            id,
            mode,
            raw_palette,
            iced_palette,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn raw_palette(&self) -> &ColorPalette {
        &self.raw_palette
    }

    pub fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for iced::Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.destructive,
            warning: palette.warning,
        };

        iced::Theme::custom(value.id.clone(), palette)
    }
}

/// Theme props passed from the host down to every component.
#[derive(Debug, Clone, Copy)]
pub struct ThemeProps<'a> {
    pub theme: &'a AppTheme,
    pub overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Shortcut for the resolved palette.
    pub fn palette(&self) -> &'a IcedColorPalette {
        self.theme.iced_palette()
    }
}

/// Holds the active theme and switches between color modes.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            current: AppTheme::for_mode(mode),
        }
    }

    pub fn current(&self) -> &AppTheme {
        &self.current
    }

    pub fn iced_theme(&self) -> iced::Theme {
        iced::Theme::from(&self.current)
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        if self.current.mode() != mode {
            self.current = AppTheme::for_mode(mode);
        }
    }

    /// Replace the current theme with a custom palette.
    pub fn set_custom_palette(
        &mut self,
        mode: ColorMode,
        palette: ColorPalette,
    ) -> Result<(), ThemeError> {
        self.current =
            AppTheme::from_palette(String::from("custom"), mode, palette)?;
        Ok(())
    }
}

fn fallback_palette() -> IcedColorPalette {
    IcedColorPalette {
        background: Color::WHITE,
        surface: Color::WHITE,
        surface_muted: Color::from_rgb8(0xF3, 0xF4, 0xF6),
        border: Color::from_rgb8(0xE5, 0xE7, 0xEB),
        foreground: Color::BLACK,
        muted_foreground: Color::from_rgb8(0x56, 0x64, 0x7A),
        subtle_foreground: Color::from_rgb8(0x85, 0x92, 0xA6),
        accent: Color::from_rgb8(0xF9, 0x73, 0x16),
        accent_strong: Color::from_rgb8(0xEA, 0x58, 0x0C),
        accent_soft: Color::from_rgb8(0xFF, 0xF7, 0xED),
        header: Color::BLACK,
        header_foreground: Color::WHITE,
        success: Color::from_rgb8(0x04, 0x78, 0x57),
        warning: Color::from_rgb8(0xD9, 0x77, 0x06),
        danger: Color::from_rgb8(0xBE, 0x12, 0x3C),
        info: Color::from_rgb8(0x25, 0x63, 0xEB),
        destructive: Color::from_rgb8(0xDC, 0x26, 0x26),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mode_switch_when_applied_then_theme_palette_follows_mode() {
        let mut manager = ThemeManager::new(ColorMode::Light);
        let light_background = manager.current().iced_palette().background;

        manager.set_mode(ColorMode::Dark);

        assert_eq!(manager.current().mode(), ColorMode::Dark);
        assert_ne!(manager.current().iced_palette().background, light_background);
    }

    #[test]
    fn given_invalid_custom_palette_when_applied_then_current_theme_is_kept() {
        let mut manager = ThemeManager::new(ColorMode::Light);
        let palette = ColorPalette {
            accent: String::from("orange"),
            ..ColorPalette::light()
        };

        assert!(manager.set_custom_palette(ColorMode::Light, palette).is_err());
        assert_eq!(manager.current().id(), "gp-light");
    }

    #[test]
    fn toggled_color_mode_round_trips() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
        assert!(ColorMode::Dark.is_dark());
    }
}
