use iced::widget::{Row, button, column, container, text};
use iced::{Color, Element, Length};

use gp_ui_theme::ThemeProps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Horizontal tabs with an underline on the active entry.
pub fn tab_bar<'a, Message: Clone + 'a>(
    items: &'a [TabItem],
    active_id: &str,
    on_change: impl Fn(String) -> Message + 'a,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let palette = *theme.palette();
    let mut tabs = Row::new().spacing(4);

    for item in items {
        let is_active = item.id == active_id;
        let (label_color, underline) = if is_active {
            (palette.accent_strong, palette.accent)
        } else {
            (palette.muted_foreground, Color::TRANSPARENT)
        };

        let indicator = container(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(2.0))
            .style(move |_| container::Style {
                background: Some(underline.into()),
                ..Default::default()
            });
        let content = column![
            container(text(item.label.clone()).size(14).color(label_color))
                .padding([12, 12]),
            indicator
        ]
        .width(Length::Shrink);

        tabs = tabs.push(
            button(content)
                .on_press(on_change(item.id.clone()))
                .padding(0)
                .style(move |_, status| button::Style {
                    background: None,
                    text_color: match status {
                        button::Status::Hovered => palette.foreground,
                        _ => label_color,
                    },
                    ..Default::default()
                }),
        );
    }

    tabs.into()
}
