use iced::widget::{column, container, row, text};
use iced::{Color, Element, Font, Length, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::format::is_numeric;
use crate::style::{RADIUS, rounded, svg_icon, with_alpha};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatCardVariant {
    #[default]
    Default,
    Compact,
    Inline,
    Centered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatCardColor {
    #[default]
    Default,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub value: String,
    pub label: Option<String>,
}

/// Single metric with a label and optional trend.
#[derive(Debug, Clone)]
pub struct StatCard {
    label: String,
    value: String,
    icon: Option<&'static [u8]>,
    trend: Option<Trend>,
    variant: StatCardVariant,
    color: StatCardColor,
}

#[derive(Debug, Clone, Copy)]
struct StatCardColors {
    label: Color,
    value: Color,
    background: Color,
    icon: Color,
}

impl StatCardColors {
    fn resolve(color: StatCardColor, palette: &IcedColorPalette) -> Self {
        match color {
            StatCardColor::Default => Self {
                label: palette.muted_foreground,
                value: palette.foreground,
                background: palette.surface_muted,
                icon: palette.subtle_foreground,
            },
            StatCardColor::Accent => Self {
                label: palette.accent_strong,
                value: palette.accent_strong,
                background: with_alpha(palette.surface, 0.8),
                icon: palette.accent,
            },
        }
    }
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            icon: None,
            trend: None,
            variant: StatCardVariant::default(),
            color: StatCardColor::default(),
        }
    }

    pub fn icon(mut self, icon: &'static [u8]) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn variant(mut self, variant: StatCardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: StatCardColor) -> Self {
        self.color = color;
        self
    }

    /// Numeric values render in a monospace font.
    pub fn is_numeric(&self) -> bool {
        is_numeric(&self.value)
    }

    pub fn view<'a, Message: 'a>(
        self,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message> {
        let palette = *theme.palette();
        let colors = StatCardColors::resolve(self.color, &palette);
        let value_font = if self.is_numeric() {
            Font::MONOSPACE
        } else {
            Font::DEFAULT
        };
        let label = text(self.label.clone()).size(12).color(colors.label);

        let content: Element<'a, Message> = match self.variant {
            StatCardVariant::Inline => column![
                label,
                text(self.value.clone())
                    .size(12)
                    .font(value_font)
                    .color(colors.value)
            ]
            .spacing(2)
            .align_x(alignment::Horizontal::Left)
            .into(),
            StatCardVariant::Centered => column![
                label,
                text(self.value.clone())
                    .size(14)
                    .font(value_font)
                    .color(colors.value)
            ]
            .spacing(4)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
            StatCardVariant::Default | StatCardVariant::Compact => {
                let mut headline =
                    row![].spacing(8).align_y(alignment::Vertical::Center);
                if let Some(icon) = self.icon {
                    headline = headline.push(svg_icon(icon, 16.0, colors.icon));
                }
                headline = headline.push(
                    text(self.value.clone())
                        .size(18)
                        .font(value_font)
                        .color(colors.value),
                );
                if let Some(trend) = &self.trend {
                    headline = headline.push(trend_view(trend, &palette));
                }

                let spacing = if self.variant == StatCardVariant::Compact {
                    2
                } else {
                    4
                };
                column![headline, label].spacing(spacing).into()
            },
        };

        container(content)
            .padding(12)
            .style(move |_| container::Style {
                background: Some(colors.background.into()),
                border: rounded(Color::TRANSPARENT, 0.0, RADIUS),
                ..Default::default()
            })
            .into()
    }
}

fn trend_view<'a, Message: 'a>(
    trend: &Trend,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let (icon, color) = match trend.direction {
        TrendDirection::Up => (icons::TRENDING_UP, palette.success),
        TrendDirection::Down => (icons::TRENDING_DOWN, palette.danger),
    };

    let mut content = row![
        svg_icon(icon, 14.0, color),
        text(trend.value.clone()).size(12).color(color)
    ]
    .spacing(4)
    .align_y(alignment::Vertical::Center);
    if let Some(label) = &trend.label {
        content = content
            .push(text(label.clone()).size(12).color(palette.subtle_foreground));
    }

    content.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_are_detected_for_monospace_rendering() {
        assert!(StatCard::new("Users", 1204).is_numeric());
        assert!(StatCard::new("Ratio", "0.75").is_numeric());
        assert!(!StatCard::new("Status", "Healthy").is_numeric());
    }
}
