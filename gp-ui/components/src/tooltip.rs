use iced::widget::{container, text, tooltip as iced_tooltip};
use iced::Element;

use gp_ui_theme::ThemeProps;

use crate::style::{RADIUS, rounded};

pub use iced::widget::tooltip::Position as TooltipPosition;

/// Dark label shown next to `content` on hover.
pub fn tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: TooltipPosition,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = *theme.palette();
    let bubble = container(
        text(label.into()).size(12).color(palette.header_foreground),
    )
    .padding([4, 8])
    .style(move |_| container::Style {
        background: Some(palette.header.into()),
        border: rounded(palette.header, 0.0, RADIUS),
        ..Default::default()
    });

    iced_tooltip(content, bubble, position).gap(6).into()
}
