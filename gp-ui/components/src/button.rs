use iced::widget::{Space, button, row, text};
use iced::{Color, Element, Length, Padding, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::style::{RADIUS, rounded, svg_icon, with_alpha};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding(self) -> Padding {
        match self {
            ButtonSize::Sm => Padding::from([6.0, 12.0]),
            ButtonSize::Md => Padding::from([8.0, 16.0]),
            ButtonSize::Lg => Padding::from([10.0, 24.0]),
        }
    }

    pub fn text_size(self) -> f32 {
        match self {
            ButtonSize::Sm => 13.0,
            ButtonSize::Md => 14.0,
            ButtonSize::Lg => 16.0,
        }
    }

    fn icon_size(self) -> f32 {
        match self {
            ButtonSize::Sm => 14.0,
            ButtonSize::Md => 16.0,
            ButtonSize::Lg => 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Text button with variant/size presets and a loading state.
pub struct Button<Message> {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    disabled: bool,
    full_width: bool,
    icon: Option<&'static [u8]>,
    icon_position: IconPosition,
    on_press: Option<Message>,
}

impl<Message: Clone> Button<Message> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
            full_width: false,
            icon: None,
            icon_position: IconPosition::default(),
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Show a spinner in place of the icon and ignore presses.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn icon(mut self, icon: &'static [u8], position: IconPosition) -> Self {
        self.icon = Some(icon);
        self.icon_position = position;
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Return whether a press would be delivered.
    pub fn is_interactive(&self) -> bool {
        self.on_press.is_some() && !self.loading && !self.disabled
    }

    pub fn view<'a>(self, theme: ThemeProps<'a>) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let palette = *theme.palette();
        let colors = ButtonColors::resolve(self.variant, &palette);
        let interactive = self.is_interactive();
        let icon_size = self.size.icon_size();

        let icon = if self.loading {
            Some(icons::LOADER)
        } else {
            self.icon
        };
        let icon_element = icon.map(|bytes| {
            svg_icon::<Message>(bytes, icon_size, colors.foreground)
        });

        let label = text(self.label)
            .size(self.size.text_size())
            .color(colors.foreground);

        let mut content = row![].spacing(8).align_y(alignment::Vertical::Center);
        match (icon_element, self.icon_position) {
            (Some(icon), IconPosition::Left) => {
                content = content.push(icon).push(label);
            },
            (Some(icon), IconPosition::Right) => {
                content = content.push(label).push(icon);
            },
            (None, _) => {
                content = content.push(label);
            },
        }
        if self.full_width {
            content = row![
                Space::new().width(Length::Fill),
                content,
                Space::new().width(Length::Fill)
            ];
        }

        let mut widget = button(content)
            .padding(self.size.padding())
            .style(move |_, status| colors.style(status));
        if self.full_width {
            widget = widget.width(Length::Fill);
        }
        if interactive {
            if let Some(message) = self.on_press {
                widget = widget.on_press(message);
            }
        }

        widget.into()
    }
}

#[derive(Debug, Clone, Copy)]
struct ButtonColors {
    background: Color,
    hover: Color,
    foreground: Color,
    border: Color,
}

impl ButtonColors {
    fn resolve(variant: ButtonVariant, palette: &IcedColorPalette) -> Self {
        match variant {
            ButtonVariant::Primary => Self {
                background: palette.accent,
                hover: palette.accent_strong,
                foreground: Color::WHITE,
                border: Color::TRANSPARENT,
            },
            ButtonVariant::Secondary => Self {
                background: palette.surface,
                hover: palette.surface_muted,
                foreground: palette.foreground,
                border: palette.border,
            },
            ButtonVariant::Ghost => Self {
                background: Color::TRANSPARENT,
                hover: palette.surface_muted,
                foreground: palette.muted_foreground,
                border: Color::TRANSPARENT,
            },
            ButtonVariant::Destructive => Self {
                background: palette.destructive,
                hover: palette.danger,
                foreground: Color::WHITE,
                border: Color::TRANSPARENT,
            },
        }
    }

    fn style(self, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => self.hover,
            button::Status::Disabled => with_alpha(self.background, 0.5),
            button::Status::Active => self.background,
        };

        button::Style {
            background: Some(background.into()),
            text_color: self.foreground,
            border: rounded(self.border, 1.0, RADIUS),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Save,
    }

    #[test]
    fn given_loading_button_when_checked_then_it_is_not_interactive() {
        let button = Button::new("Save").on_press(Message::Save).loading(true);
        assert!(!button.is_interactive());
    }

    #[test]
    fn given_button_without_handler_when_checked_then_it_is_not_interactive() {
        let button = Button::<Message>::new("Save");
        assert!(!button.is_interactive());
    }

    #[test]
    fn given_enabled_button_with_handler_when_checked_then_it_is_interactive()
    {
        let button = Button::new("Save").on_press(Message::Save);
        assert!(button.is_interactive());
        assert!(!button.disabled(true).is_interactive());
    }

    #[test]
    fn larger_sizes_use_larger_text() {
        assert!(ButtonSize::Sm.text_size() < ButtonSize::Md.text_size());
        assert!(ButtonSize::Md.text_size() < ButtonSize::Lg.text_size());
    }
}
