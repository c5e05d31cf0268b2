use iced::widget::{container, svg};
use iced::{Border, Color, Element, Length, alignment};

pub(crate) const RADIUS: f32 = 6.0;

pub(crate) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(crate) fn rounded(color: Color, width: f32, radius: f32) -> Border {
    Border {
        width,
        color,
        radius: iced::border::Radius::new(radius),
    }
}

/// Square svg icon tinted with a single color.
pub fn svg_icon<'a, Message: 'a>(
    icon: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, Message> {
    let icon_svg = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) });

    container(icon_svg)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// One pixel separator line.
pub(crate) fn divider<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(iced::widget::Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
