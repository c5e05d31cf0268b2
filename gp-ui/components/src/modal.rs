use iced::widget::{
    Column, Space, button, center, container, mouse_area, opaque, row, stack,
    text,
};
use iced::{Element, Length, alignment};

use gp_ui_theme::{ThemeProps, icons};

use crate::button::{Button, ButtonVariant};
use crate::style::{rounded, svg_icon};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn max_width(self) -> Option<f32> {
        match self {
            ModalSize::Sm => Some(384.0),
            ModalSize::Md => Some(448.0),
            ModalSize::Lg => Some(512.0),
            ModalSize::Xl => Some(576.0),
            ModalSize::Full => None,
        }
    }
}

/// Dialog drawn over `base` with a dimmed backdrop.
pub struct Modal<'a, Message> {
    title: Option<String>,
    description: Option<String>,
    body: Option<Element<'a, Message>>,
    footer: Option<Element<'a, Message>>,
    size: ModalSize,
    show_close: bool,
    dismiss_on_overlay_click: bool,
    on_close: Option<Message>,
}

impl<'a, Message: Clone + 'a> Default for Modal<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            body: None,
            footer: None,
            size: ModalSize::default(),
            show_close: true,
            dismiss_on_overlay_click: true,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<Element<'a, Message>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Element<'a, Message>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = show_close;
        self
    }

    /// Backdrop clicks and Escape close the dialog only when enabled.
    pub fn dismiss_on_overlay_click(mut self, dismiss: bool) -> Self {
        self.dismiss_on_overlay_click = dismiss;
        self
    }

    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Message a host should emit for an Escape press, if any.
    pub fn escape_message(&self) -> Option<Message> {
        if self.dismiss_on_overlay_click {
            self.on_close.clone()
        } else {
            None
        }
    }

    pub fn view(
        self,
        base: impl Into<Element<'a, Message>>,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message> {
        let palette = *theme.palette();
        let overlay_message = self.escape_message();

        let mut header = row![].spacing(8).align_y(alignment::Vertical::Top);
        let mut titles = Column::new().spacing(6).width(Length::Fill);
        if let Some(title) = self.title {
            titles = titles.push(text(title).size(18).color(palette.foreground));
        }
        if let Some(description) = self.description {
            titles = titles.push(
                text(description)
                    .size(14)
                    .color(palette.muted_foreground),
            );
        }
        header = header.push(titles);
        if self.show_close {
            if let Some(message) = self.on_close.clone() {
                header = header.push(
                    button(svg_icon(icons::CLOSE, 16.0, palette.muted_foreground))
                        .on_press(message)
                        .padding(2)
                        .style(|_, _| button::Style {
                            background: None,
                            ..Default::default()
                        }),
                );
            }
        }

        let mut content = Column::new().spacing(16).push(header);
        if let Some(body) = self.body {
            content = content.push(body);
        }
        if let Some(footer) = self.footer {
            content = content.push(footer);
        }

        let padding = if self.size == ModalSize::Full { 0 } else { 24 };
        let mut dialog = container(content)
            .padding(padding)
            .clip(true)
            .style(move |_| container::Style {
                background: Some(palette.surface.into()),
                border: rounded(palette.border, 1.0, 8.0),
                ..Default::default()
            });
        dialog = match self.size.max_width() {
            Some(max_width) => dialog.width(Length::Fill).max_width(max_width),
            None => dialog.width(Length::Fill).height(Length::Fill),
        };

        let backdrop_color = palette.backdrop();
        let backdrop = center(opaque(dialog))
            .padding(32)
            .style(move |_| container::Style {
                background: Some(backdrop_color.into()),
                ..Default::default()
            });

        let mut overlay = mouse_area(backdrop);
        if let Some(message) = overlay_message {
            overlay = overlay.on_press(message);
        }

        stack![base.into(), opaque(overlay)].into()
    }
}

/// Confirm/cancel dialog built on [`Modal`].
pub struct ConfirmModal<Message> {
    title: String,
    description: String,
    confirm_text: String,
    cancel_text: String,
    confirm_variant: ButtonVariant,
    size: ModalSize,
    dismiss_on_overlay_click: bool,
    loading: bool,
    on_confirm: Message,
    on_cancel: Message,
}

impl<Message: Clone> ConfirmModal<Message> {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        on_confirm: Message,
        on_cancel: Message,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            confirm_text: String::from("Confirm"),
            cancel_text: String::from("Cancel"),
            confirm_variant: ButtonVariant::Primary,
            size: ModalSize::default(),
            dismiss_on_overlay_click: true,
            loading: false,
            on_confirm,
            on_cancel,
        }
    }

    pub fn confirm_text(mut self, label: impl Into<String>) -> Self {
        self.confirm_text = label.into();
        self
    }

    pub fn cancel_text(mut self, label: impl Into<String>) -> Self {
        self.cancel_text = label.into();
        self
    }

    pub fn confirm_variant(mut self, variant: ButtonVariant) -> Self {
        self.confirm_variant = variant;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn dismiss_on_overlay_click(mut self, dismiss: bool) -> Self {
        self.dismiss_on_overlay_click = dismiss;
        self
    }

    /// While loading the dialog cannot be dismissed or cancelled.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn is_dismissable(&self) -> bool {
        self.dismiss_on_overlay_click && !self.loading
    }

    pub fn view<'a>(
        self,
        base: impl Into<Element<'a, Message>>,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let dismissable = self.is_dismissable();
        let footer = row![
            Space::new().width(Length::Fill),
            Button::new(self.cancel_text)
                .variant(ButtonVariant::Secondary)
                .disabled(self.loading)
                .on_press(self.on_cancel.clone())
                .view(theme),
            Button::new(self.confirm_text)
                .variant(self.confirm_variant)
                .loading(self.loading)
                .on_press(self.on_confirm)
                .view(theme)
        ]
        .spacing(8);

        Modal::new()
            .title(self.title)
            .description(self.description)
            .footer(footer)
            .size(self.size)
            .dismiss_on_overlay_click(dismissable)
            .on_close(self.on_cancel)
            .view(base, theme)
    }
}

/// Single-action dialog: title, description and one acknowledge button.
pub struct AlertModal<Message> {
    title: String,
    description: String,
    ok_text: String,
    size: ModalSize,
    show_close: bool,
    dismiss_on_overlay_click: bool,
    on_ok: Message,
    on_close: Option<Message>,
}

impl<Message: Clone> AlertModal<Message> {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        on_ok: Message,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ok_text: String::from("OK"),
            size: ModalSize::default(),
            show_close: true,
            dismiss_on_overlay_click: true,
            on_ok,
            on_close: None,
        }
    }

    pub fn ok_text(mut self, label: impl Into<String>) -> Self {
        self.ok_text = label.into();
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = show_close;
        self
    }

    pub fn dismiss_on_overlay_click(mut self, dismiss: bool) -> Self {
        self.dismiss_on_overlay_click = dismiss;
        self
    }

    /// Message for the close button, backdrop and Escape. Defaults to the
    /// acknowledge message.
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    pub fn close_message(&self) -> Message {
        self.on_close.clone().unwrap_or_else(|| self.on_ok.clone())
    }

    pub fn escape_message(&self) -> Option<Message> {
        self.dismiss_on_overlay_click.then(|| self.close_message())
    }

    pub fn view<'a>(
        self,
        base: impl Into<Element<'a, Message>>,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let close = self.close_message();
        let footer = row![
            Space::new().width(Length::Fill),
            Button::new(self.ok_text)
                .variant(ButtonVariant::Primary)
                .on_press(self.on_ok)
                .view(theme)
        ];

        Modal::new()
            .title(self.title)
            .description(self.description)
            .footer(footer)
            .size(self.size)
            .show_close(self.show_close)
            .dismiss_on_overlay_click(self.dismiss_on_overlay_click)
            .on_close(close)
            .view(base, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Confirm,
        Cancel,
        Acknowledge,
    }

    #[test]
    fn given_loading_confirm_when_checked_then_it_cannot_be_dismissed() {
        let modal = ConfirmModal::new(
            "Delete",
            "This cannot be undone.",
            Message::Confirm,
            Message::Cancel,
        )
        .loading(true);

        assert!(!modal.is_dismissable());
    }

    #[test]
    fn given_overlay_dismiss_disabled_when_escape_pressed_then_no_message() {
        let modal = Modal::<Message>::new()
            .on_close(Message::Cancel)
            .dismiss_on_overlay_click(false);
        assert_eq!(modal.escape_message(), None);

        let modal = Modal::<Message>::new().on_close(Message::Cancel);
        assert_eq!(modal.escape_message(), Some(Message::Cancel));
    }

    #[test]
    fn full_size_has_no_max_width() {
        assert_eq!(ModalSize::Full.max_width(), None);
        assert_eq!(ModalSize::Md.max_width(), Some(448.0));
    }

    #[test]
    fn given_alert_without_close_handler_when_dismissed_then_ok_is_sent() {
        let alert =
            AlertModal::new("Saved", "Changes stored.", Message::Acknowledge);
        assert_eq!(alert.close_message(), Message::Acknowledge);

        let alert = alert.on_close(Message::Cancel);
        assert_eq!(alert.close_message(), Message::Cancel);
        assert_eq!(alert.escape_message(), Some(Message::Cancel));

        let alert = alert.dismiss_on_overlay_click(false);
        assert_eq!(alert.escape_message(), None);
    }
}
