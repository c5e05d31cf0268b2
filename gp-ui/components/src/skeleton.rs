use std::f32::consts::TAU;
use std::time::Duration;

use iced::widget::{Column, Space, column, container, row};
use iced::{Color, Element, Length, alignment};

use gp_ui_theme::ThemeProps;

use crate::style::{divider, rounded, with_alpha};

const PULSE_PERIOD: Duration = Duration::from_millis(1500);
const MIN_OPACITY: f32 = 0.5;

/// Opacity of a loading placeholder `elapsed` into its pulse.
///
/// Starts fully opaque and dips to half opacity midway through the period.
pub fn skeleton_opacity(elapsed: Duration) -> f32 {
    let phase = (elapsed.as_secs_f32() / PULSE_PERIOD.as_secs_f32()).fract();
    let swing = (1.0 - MIN_OPACITY) / 2.0;
    MIN_OPACITY + swing + swing * (phase * TAU).cos()
}

/// Grey placeholder block shown while content loads.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    width: Length,
    height: f32,
    radius: f32,
    opacity: f32,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            width: Length::Fill,
            height: 12.0,
            radius: 4.0,
            opacity: 1.0,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Feed [`skeleton_opacity`] from a host animation tick to pulse.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn view<'a, Message: 'a>(
        self,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message> {
        let fill = with_alpha(theme.palette().border, self.opacity);
        block(self.width, self.height, self.radius, fill)
    }
}

/// `lines` text bars; the last of several is shortened.
pub fn skeleton_text<'a, Message: 'a>(
    lines: usize,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let bar = Skeleton::new().height(12.0).opacity(opacity);
    let mut text = Column::new().spacing(8).width(Length::Fill);

    for index in 0..lines {
        text = text.push(if is_short_line(index, lines) {
            Element::from(
                row![
                    bar.width(Length::FillPortion(3)).view(theme),
                    Space::new().width(Length::FillPortion(1)),
                ]
                .width(Length::Fill),
            )
        } else {
            bar.view(theme)
        });
    }

    text.into()
}

/// Placeholder in the shape of a compact stat card.
pub fn skeleton_stat_card<'a, Message: 'a>(
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let background = theme.palette().surface_muted;
    let bar = Skeleton::new().opacity(opacity);

    let content = row![
        bar.width(16.0).height(16.0).view(theme),
        column![
            bar.width(48.0).height(20.0).view(theme),
            bar.width(64.0).height(12.0).view(theme),
        ]
        .spacing(4)
        .width(Length::Fill),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .padding([8, 12])
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: rounded(background, 0.0, 4.0),
            ..Default::default()
        })
        .into()
}

/// Placeholder in the shape of a list row with a trailing icon.
pub fn skeleton_list_item<'a, Message: 'a>(
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let bar = Skeleton::new().opacity(opacity);
    let border = theme.palette().border;

    let content = row![
        column![
            bar.width(128.0).height(16.0).view(theme),
            bar.width(64.0).height(12.0).view(theme),
        ]
        .spacing(6)
        .width(Length::Fill),
        bar.width(16.0).height(16.0).view(theme),
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);

    column![
        container(content).width(Length::Fill).padding([10, 16]),
        divider(border),
    ]
    .into()
}

fn is_short_line(index: usize, lines: usize) -> bool {
    lines > 1 && index + 1 == lines
}

fn block<'a, Message: 'a>(
    width: Length,
    height: f32,
    radius: f32,
    fill: Color,
) -> Element<'a, Message> {
    container(Space::new())
        .width(width)
        .height(Length::Fixed(height))
        .style(move |_| container::Style {
            background: Some(fill.into()),
            border: rounded(fill, 0.0, radius),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_of_several_lines_is_short() {
        assert!(!is_short_line(0, 1));
        assert!(!is_short_line(0, 3));
        assert!(!is_short_line(1, 3));
        assert!(is_short_line(2, 3));
    }

    #[test]
    fn pulse_starts_opaque_and_dips_halfway() {
        assert!((skeleton_opacity(Duration::ZERO) - 1.0).abs() < 1e-4);

        let half = PULSE_PERIOD / 2;
        assert!((skeleton_opacity(half) - MIN_OPACITY).abs() < 1e-4);

        let again = PULSE_PERIOD * 2;
        assert!((skeleton_opacity(again) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn opacity_is_clamped() {
        let skeleton = Skeleton::new().opacity(1.4);
        assert_eq!(skeleton.opacity, 1.0);
    }
}
