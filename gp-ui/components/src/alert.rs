use iced::widget::{Space, button, column, container, row, text};
use iced::{Color, Element, Length, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::style::{RADIUS, rounded, svg_icon, with_alpha};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl AlertVariant {
    fn icon(self) -> &'static [u8] {
        match self {
            AlertVariant::Info => icons::INFO,
            AlertVariant::Warning => icons::ALERT_TRIANGLE,
            AlertVariant::Error => icons::X_CIRCLE,
            AlertVariant::Success => icons::CHECK_CIRCLE,
        }
    }

    fn color(self, palette: &IcedColorPalette) -> Color {
        match self {
            AlertVariant::Info => palette.info,
            AlertVariant::Warning => palette.warning,
            AlertVariant::Error => palette.danger,
            AlertVariant::Success => palette.success,
        }
    }
}

/// Inline status message with an optional title and dismiss control.
pub struct Alert<Message> {
    message: String,
    title: Option<String>,
    variant: AlertVariant,
    dismissible: bool,
    on_dismiss: Option<Message>,
}

impl<Message: Clone> Alert<Message> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            variant: AlertVariant::default(),
            dismissible: false,
            on_dismiss: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn on_dismiss(mut self, message: Message) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// The dismiss button needs both the flag and a message to emit.
    pub fn shows_dismiss(&self) -> bool {
        self.dismissible && self.on_dismiss.is_some()
    }

    pub fn view<'a>(self, theme: ThemeProps<'a>) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let palette = *theme.palette();
        let color = self.variant.color(&palette);
        let shows_dismiss = self.shows_dismiss();

        let mut body = column![].spacing(2).width(Length::Fill);
        if let Some(title) = self.title {
            body = body.push(text(title).size(14).color(palette.foreground));
        }
        body = body.push(
            text(self.message)
                .size(14)
                .color(palette.muted_foreground),
        );

        let mut content = row![
            svg_icon::<Message>(self.variant.icon(), 18.0, color),
            body
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Top);

        if shows_dismiss {
            if let Some(message) = self.on_dismiss {
                let dismiss = button(svg_icon::<Message>(
                    icons::CLOSE,
                    16.0,
                    palette.muted_foreground,
                ))
                .on_press(message)
                .padding(2)
                .style(|_, _| button::Style {
                    background: None,
                    ..Default::default()
                });
                content = content
                    .push(Space::new().width(Length::Shrink))
                    .push(dismiss);
            }
        }

        container(content)
            .padding(12)
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(with_alpha(color, 0.08).into()),
                border: rounded(with_alpha(color, 0.35), 1.0, RADIUS),
                ..Default::default()
            })
            .into()
    }
}
