use iced::widget::{Column, button, container};
use iced::{Element, Length};

use gp_ui_theme::ThemeProps;

use crate::style::{RADIUS, divider, rounded};

/// Bordered surface with optional header and footer sections.
pub struct Card<'a, Message> {
    body: Element<'a, Message>,
    header: Option<Element<'a, Message>>,
    footer: Option<Element<'a, Message>>,
    on_press: Option<Message>,
    padding: f32,
}

impl<'a, Message: Clone + 'a> Card<'a, Message> {
    pub fn new(body: impl Into<Element<'a, Message>>) -> Self {
        Self {
            body: body.into(),
            header: None,
            footer: None,
            on_press: None,
            padding: 16.0,
        }
    }

    pub fn header(mut self, header: impl Into<Element<'a, Message>>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Element<'a, Message>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Make the whole card pressable.
    pub fn interactive(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn view(self, theme: ThemeProps<'a>) -> Element<'a, Message> {
        let palette = *theme.palette();
        let radius = theme
            .overrides
            .and_then(|overrides| overrides.border_radius)
            .unwrap_or(RADIUS + 2.0);
        let background = theme
            .overrides
            .and_then(|overrides| overrides.background)
            .unwrap_or(palette.surface);

        let mut sections = Column::new().width(Length::Fill);
        if let Some(header) = self.header {
            sections = sections
                .push(container(header).padding(self.padding))
                .push(divider(palette.border));
        }
        sections = sections.push(container(self.body).padding(self.padding));
        if let Some(footer) = self.footer {
            sections = sections
                .push(divider(palette.border))
                .push(container(footer).padding(self.padding));
        }

        let card = container(sections)
            .width(Length::Fill)
            .clip(true)
            .style(move |_| container::Style {
                background: Some(background.into()),
                border: rounded(palette.border, 1.0, radius),
                ..Default::default()
            });

        match self.on_press {
            Some(message) => button(card)
                .on_press(message)
                .padding(0)
                .width(Length::Fill)
                .style(move |_, status| button::Style {
                    background: None,
                    border: match status {
                        button::Status::Hovered => {
                            rounded(palette.accent, 1.0, radius)
                        },
                        _ => rounded(iced::Color::TRANSPARENT, 1.0, radius),
                    },
                    ..Default::default()
                })
                .into(),
            None => card.into(),
        }
    }
}
