use iced::Color;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Hex-encoded brand palette, the serializable form of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub background: String,
    pub surface: String,
    pub surface_muted: String,
    pub border: String,
    pub foreground: String,
    pub muted_foreground: String,
    pub subtle_foreground: String,
    pub accent: String,
    pub accent_strong: String,
    pub accent_soft: String,
    pub header: String,
    pub header_foreground: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub destructive: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorPalette {
    /// Palette tuned for light backgrounds.
    pub fn light() -> Self {
        Self {
            background: String::from("#F9FAFB"),
            surface: String::from("#FFFFFF"),
            surface_muted: String::from("#F3F4F6"),
            border: String::from("#E5E7EB"),
            foreground: String::from("#101B2D"),
            muted_foreground: String::from("#56647A"),
            subtle_foreground: String::from("#8592A6"),
            accent: String::from("#F97316"),
            accent_strong: String::from("#EA580C"),
            accent_soft: String::from("#FFF7ED"),
            header: String::from("#101B2D"),
            header_foreground: String::from("#FFFFFF"),
            success: String::from("#047857"),
            warning: String::from("#D97706"),
            danger: String::from("#BE123C"),
            info: String::from("#2563EB"),
            destructive: String::from("#DC2626"),
        }
    }

    /// Palette tuned for the dark color mode.
    pub fn dark() -> Self {
        Self {
            background: String::from("#0A1220"),
            surface: String::from("#101B2D"),
            surface_muted: String::from("#1B283D"),
            border: String::from("#2A3850"),
            foreground: String::from("#E8ECF2"),
            muted_foreground: String::from("#A3AEBF"),
            subtle_foreground: String::from("#6F7D93"),
            accent: String::from("#F97316"),
            accent_strong: String::from("#FB923C"),
            accent_soft: String::from("#2B1D14"),
            header: String::from("#060B14"),
            header_foreground: String::from("#FFFFFF"),
            success: String::from("#34D399"),
            warning: String::from("#FBBF24"),
            danger: String::from("#FB7185"),
            info: String::from("#60A5FA"),
            destructive: String::from("#EF4444"),
        }
    }
}

/// Resolved palette used by `iced` styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcedColorPalette {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    pub foreground: Color,
    pub muted_foreground: Color,
    pub subtle_foreground: Color,
    pub accent: Color,
    pub accent_strong: Color,
    pub accent_soft: Color,
    pub header: Color,
    pub header_foreground: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub destructive: Color,
}

impl IcedColorPalette {
    /// Semi-transparent black used behind drawers and modals.
    pub fn backdrop(&self) -> Color {
        Color {
            a: 0.5,
            ..Color::BLACK
        }
    }
}

impl TryFrom<&ColorPalette> for IcedColorPalette {
    type Error = ThemeError;

    fn try_from(p: &ColorPalette) -> Result<Self, Self::Error> {
        Ok(Self {
            background: entry("background", &p.background)?,
            surface: entry("surface", &p.surface)?,
            surface_muted: entry("surface_muted", &p.surface_muted)?,
            border: entry("border", &p.border)?,
            foreground: entry("foreground", &p.foreground)?,
            muted_foreground: entry("muted_foreground", &p.muted_foreground)?,
            subtle_foreground: entry(
                "subtle_foreground",
                &p.subtle_foreground,
            )?,
            accent: entry("accent", &p.accent)?,
            accent_strong: entry("accent_strong", &p.accent_strong)?,
            accent_soft: entry("accent_soft", &p.accent_soft)?,
            header: entry("header", &p.header)?,
            header_foreground: entry(
                "header_foreground",
                &p.header_foreground,
            )?,
            success: entry("success", &p.success)?,
            warning: entry("warning", &p.warning)?,
            danger: entry("danger", &p.danger)?,
            info: entry("info", &p.info)?,
            destructive: entry("destructive", &p.destructive)?,
        })
    }
}

fn entry(name: &'static str, value: &str) -> Result<Color, ThemeError> {
    parse_hex_color(value).ok_or_else(|| ThemeError::InvalidColor {
        entry: name,
        value: value.to_string(),
    })
}

/// Parse `#rrggbb` or `0xrrggbb` into an opaque color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let digits = if value.starts_with("0x") && value.len() == 8 {
        &value[2..]
    } else if value.starts_with('#') && value.len() == 7 {
        &value[1..]
    } else {
        return None;
    };

    let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;

    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_accepts_hash_and_0x_prefixes() {
        assert_eq!(
            parse_hex_color("#FF8000"),
            Some(Color::from_rgb8(0xFF, 0x80, 0x00))
        );
        assert_eq!(
            parse_hex_color("0x0a0b0c"),
            Some(Color::from_rgb8(0x0A, 0x0B, 0x0C))
        );
    }

    #[test]
    fn parse_hex_color_rejects_malformed_values() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("FF8000"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#ÿÿÿ"), None);
    }

    #[test]
    fn built_in_palettes_resolve() {
        assert!(IcedColorPalette::try_from(&ColorPalette::light()).is_ok());
        assert!(IcedColorPalette::try_from(&ColorPalette::dark()).is_ok());
    }

    #[test]
    fn invalid_entry_is_reported_by_name() {
        let palette = ColorPalette {
            border: String::from("grey"),
            ..ColorPalette::light()
        };

        let err = IcedColorPalette::try_from(&palette)
            .expect_err("palette with invalid border should fail");
        match err {
            ThemeError::InvalidColor { entry, value } => {
                assert_eq!(entry, "border");
                assert_eq!(value, "grey");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
