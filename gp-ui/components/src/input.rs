use iced::widget::{Column, column, row, text, text_input};
use iced::{Color, Element, Length, Padding, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    #[default]
    Default,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Where the label sits relative to the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPosition {
    #[default]
    Above,
    Before,
    After,
}

type InputAction<'a, Message> = dyn Fn(String) -> Message + 'a;

/// Labelled text field with helper text and validation styling.
pub struct Input<'a, Message> {
    value: &'a str,
    placeholder: String,
    label: Option<String>,
    label_position: LabelPosition,
    helper_text: Option<String>,
    variant: InputVariant,
    size: InputSize,
    required: bool,
    secure: bool,
    id: Option<iced::widget::Id>,
    on_input: Option<Box<InputAction<'a, Message>>>,
    on_submit: Option<Message>,
}

impl<'a, Message: Clone + 'a> Input<'a, Message> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: String::new(),
            label: None,
            label_position: LabelPosition::default(),
            helper_text: None,
            variant: InputVariant::default(),
            size: InputSize::default(),
            required: false,
            secure: false,
            id: None,
            on_input: None,
            on_submit: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    pub fn helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn id(mut self, id: iced::widget::Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Without a handler the field renders disabled.
    pub fn on_input(mut self, on_input: impl Fn(String) -> Message + 'a) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Label text including the required marker.
    pub fn label_text(&self) -> Option<String> {
        self.label
            .as_deref()
            .map(|label| required_label(label, self.required))
    }

    pub fn view(self, theme: ThemeProps<'a>) -> Element<'a, Message> {
        let palette = *theme.palette();
        let accent = variant_color(self.variant, &palette);
        let label_text = self.label_text();
        let (padding, text_size) = match self.size {
            InputSize::Sm => (Padding::from([6.0, 12.0]), 13.0),
            InputSize::Md => (Padding::from([8.0, 12.0]), 14.0),
            InputSize::Lg => (Padding::from([10.0, 16.0]), 16.0),
        };

        let mut field = text_input(&self.placeholder, self.value)
            .padding(padding)
            .size(text_size)
            .secure(self.secure)
            .style(move |base, status| {
                let mut style = text_input::default(base, status);
                style.background = palette.surface.into();
                style.value = palette.foreground;
                style.placeholder = palette.subtle_foreground;
                style.selection = palette.accent_soft;
                style.border.radius = iced::border::Radius::new(6.0);
                style.border.color = match status {
                    text_input::Status::Focused { .. } => accent,
                    _ if accent != palette.accent => accent,
                    _ => palette.border,
                };
                style
            });
        if let Some(id) = self.id {
            field = field.id(id);
        }
        if let Some(on_input) = self.on_input {
            field = field.on_input(on_input);
        }
        if let Some(message) = self.on_submit {
            field = field.on_submit(message);
        }

        let helper = self.helper_text.map(|helper| {
            let color = match self.variant {
                InputVariant::Default => palette.muted_foreground,
                _ => accent,
            };
            text(helper).size(12).color(color)
        });

        let body: Element<'a, Message> = match label_text {
            None => field.into(),
            Some(label) => {
                let label = text(label).size(14).color(palette.foreground);
                match self.label_position {
                    LabelPosition::Above => column![label, field].spacing(4).into(),
                    LabelPosition::Before => row![label, field]
                        .spacing(8)
                        .align_y(alignment::Vertical::Center)
                        .into(),
                    LabelPosition::After => row![field, label]
                        .spacing(8)
                        .align_y(alignment::Vertical::Center)
                        .into(),
                }
            },
        };

        let mut wrapper = Column::new().spacing(4).width(Length::Fill).push(body);
        if let Some(helper) = helper {
            wrapper = wrapper.push(helper);
        }
        wrapper.into()
    }
}

pub(crate) fn required_label(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

pub(crate) fn variant_color(
    variant: InputVariant,
    palette: &IcedColorPalette,
) -> Color {
    match variant {
        InputVariant::Default => palette.accent,
        InputVariant::Error => palette.danger,
        InputVariant::Success => palette.success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Message {}

    #[test]
    fn required_label_gets_marker() {
        let input = Input::<Message>::new("").label("Email").required(true);
        assert_eq!(input.label_text().as_deref(), Some("Email *"));

        let input = Input::<Message>::new("").label("Email");
        assert_eq!(input.label_text().as_deref(), Some("Email"));
        assert_eq!(Input::<Message>::new("").label_text(), None);
    }
}
