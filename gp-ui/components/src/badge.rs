use iced::widget::{container, text};
use iced::{Color, Element, Padding};

use gp_ui_theme::{IcedColorPalette, ThemeProps};

use crate::style::{rounded, with_alpha};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn color(self, palette: &IcedColorPalette) -> Color {
        match self {
            BadgeVariant::Success => palette.success,
            BadgeVariant::Warning => palette.warning,
            BadgeVariant::Error => palette.danger,
            BadgeVariant::Info => palette.info,
            BadgeVariant::Neutral => palette.muted_foreground,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

/// Small pill label.
pub fn badge<'a, Message: 'a>(
    label: impl Into<String>,
    variant: BadgeVariant,
    size: BadgeSize,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let color = variant.color(theme.palette());
    let (text_size, padding) = match size {
        BadgeSize::Sm => (11.0, Padding::from([1.0, 6.0])),
        BadgeSize::Md => (12.0, Padding::from([2.0, 8.0])),
    };

    container(text(label.into()).size(text_size).color(color))
        .padding(padding)
        .style(move |_| container::Style {
            background: Some(with_alpha(color, 0.12).into()),
            border: rounded(with_alpha(color, 0.3), 1.0, 999.0),
            ..Default::default()
        })
        .into()
}
