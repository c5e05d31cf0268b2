use gp_ui_theme::ThemeProps;
use iced::widget::{Column, Row, Space, column, container, row, text, tooltip};
use iced::{Border, Color, Element, Font, Length, alignment};

use crate::data::{ProportionData, ResolvedSegment};

const DEFAULT_HEIGHT: f32 = 8.0;
const EMPTY_HEIGHT: f32 = 20.0;
const LEGEND_COLUMNS: usize = 5;

/// Horizontal segmented bar with a breakdown tooltip and optional legend.
pub struct ProportionChart<'a> {
    data: &'a ProportionData,
    format_value: Box<dyn Fn(f64) -> String + 'a>,
    height: f32,
    show_legend: bool,
}

impl<'a> ProportionChart<'a> {
    pub fn new(
        data: &'a ProportionData,
        format_value: impl Fn(f64) -> String + 'a,
    ) -> Self {
        Self {
            data,
            format_value: Box::new(format_value),
            height: DEFAULT_HEIGHT,
            show_legend: false,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    pub fn summary(&self) -> String {
        self.data.summary(&self.format_value)
    }

    /// Render the chart. The element owns its text, so it may outlive the
    /// borrowed data.
    pub fn view<'b, Message: 'b>(
        self,
        theme: ThemeProps<'b>,
    ) -> Element<'b, Message> {
        if self.data.is_empty() {
            return empty_bar(self.height.max(EMPTY_HEIGHT), theme);
        }

        let palette = *theme.palette();
        let height = self.height;

        let bar = Row::with_children(
            self.data
                .segments()
                .iter()
                .map(|segment| segment_bar(segment, height)),
        )
        .width(Length::Fill);

        let bar = container(bar).width(Length::Fill).clip(true).style(|_| {
            container::Style {
                border: Border {
                    radius: iced::border::Radius::new(4.0),
                    ..Border::default()
                },
                ..Default::default()
            }
        });

        let bubble_background = palette.header;
        let bubble_foreground = palette.header_foreground;
        let bubble = container(self.breakdown(bubble_foreground))
            .padding([8, 10])
            .style(move |_| container::Style {
                background: Some(bubble_background.into()),
                border: Border {
                    radius: iced::border::Radius::new(6.0),
                    ..Border::default()
                },
                ..Default::default()
            });

        let mut chart = Column::new().width(Length::Fill).spacing(12).push(
            tooltip(bar, bubble, tooltip::Position::Bottom).gap(6),
        );

        if self.show_legend {
            chart = chart.push(self.legend(theme));
        }

        chart.into()
    }

    fn breakdown<'b, Message: 'b>(
        &self,
        foreground: Color,
    ) -> Element<'b, Message> {
        let muted = Color {
            a: 0.6,
            ..foreground
        };
        let mut rows = Column::new().spacing(4);

        for segment in self.data.segments() {
            rows = rows.push(
                row![
                    swatch(segment.color, 8.0),
                    text(segment.label.clone())
                        .size(12)
                        .color(foreground)
                        .width(Length::Fixed(96.0)),
                    container(
                        text((self.format_value)(segment.value))
                            .size(12)
                            .font(Font::MONOSPACE)
                            .color(foreground),
                    )
                    .width(Length::Fixed(72.0))
                    .align_x(alignment::Horizontal::Right),
                    container(
                        text(segment.percent_label()).size(12).color(muted),
                    )
                    .width(Length::Fixed(40.0))
                    .align_x(alignment::Horizontal::Right),
                ]
                .spacing(8)
                .align_y(alignment::Vertical::Center),
            );
        }

        let divider = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(move |_| container::Style {
                background: Some(muted.into()),
                ..Default::default()
            });

        column![
            rows,
            divider,
            row![
                text("Total").size(12).color(foreground),
                Space::new().width(Length::Fill),
                text((self.format_value)(self.data.total()))
                    .size(12)
                    .font(Font::MONOSPACE)
                    .color(foreground),
            ],
        ]
        .spacing(4)
        .width(Length::Shrink)
        .into()
    }

    fn legend<'b, Message: 'b>(
        &self,
        theme: ThemeProps<'b>,
    ) -> Element<'b, Message> {
        let palette = theme.palette();
        let mut grid = Column::new().spacing(12);

        for chunk in self.data.segments().chunks(LEGEND_COLUMNS) {
            let mut line = Row::new().spacing(12);
            for segment in chunk {
                line = line.push(
                    row![
                        swatch(segment.color, 12.0),
                        column![
                            text(segment.label.clone())
                                .size(12)
                                .color(palette.muted_foreground),
                            text((self.format_value)(segment.value))
                                .size(14)
                                .color(palette.foreground),
                        ],
                    ]
                    .spacing(8)
                    .align_y(alignment::Vertical::Center)
                    .width(Length::FillPortion(1)),
                );
            }
            // Keep columns aligned on a short last line.
            for _ in chunk.len()..LEGEND_COLUMNS {
                line = line.push(Space::new().width(Length::FillPortion(1)));
            }
            grid = grid.push(line);
        }

        grid.into()
    }
}

fn empty_bar<'a, Message: 'a>(
    height: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = *theme.palette();
    container(text("No data").size(12).color(palette.subtle_foreground))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.surface_muted.into()),
            border: Border {
                radius: iced::border::Radius::new(4.0),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

fn segment_bar<'a, Message: 'a>(
    segment: &ResolvedSegment,
    height: f32,
) -> Element<'a, Message> {
    let color = segment.color;
    container(Space::new())
        .width(Length::FillPortion(portion(segment)))
        .height(Length::Fixed(height))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

fn swatch<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: Border {
                radius: iced::border::Radius::new(2.0),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// Relative bar width; tiny shares still get a visible sliver.
fn portion(segment: &ResolvedSegment) -> u16 {
    (segment.percentage * 100.0).round().clamp(1.0, 10_000.0) as u16
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::data::{ColorConfig, ProportionSegment, validate};

    #[test]
    fn portions_follow_percentages_with_a_minimum_of_one() {
        let colors: HashMap<String, ColorConfig> = ["big", "tiny"]
            .into_iter()
            .map(|key| (key.to_string(), ColorConfig::new(Color::BLACK, key)))
            .collect();
        let data = validate(
            &[
                ProportionSegment::new("big", 999_999.0),
                ProportionSegment::new("tiny", 0.01),
            ],
            &colors,
        )
        .expect("valid data");

        let portions: Vec<u16> = data.segments().iter().map(portion).collect();

        assert_eq!(portions[0], 10_000);
        assert_eq!(portions[1], 1);
    }

    #[test]
    fn chart_summary_uses_the_value_formatter() {
        let colors: HashMap<String, ColorConfig> = HashMap::from([(
            String::from("a"),
            ColorConfig::new(Color::BLACK, "A"),
        )]);
        let data = validate(&[ProportionSegment::new("a", 1500.0)], &colors)
            .expect("valid data");

        let chart = ProportionChart::new(&data, |ms| {
            format!("{:.1}s", ms / 1000.0)
        });

        assert_eq!(
            chart.summary(),
            "Proportion chart showing 1 categories totaling 1.5s"
        );
    }
}
