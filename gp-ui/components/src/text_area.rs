use iced::widget::{Column, text, text_editor};
use iced::{Element, Length, Padding};

use gp_ui_theme::ThemeProps;

use crate::input::{InputSize, InputVariant, required_label, variant_color};

type EditAction<'a, Message> = dyn Fn(text_editor::Action) -> Message + 'a;

/// Multi-line text entry with a label above and helper text below.
///
/// The host owns the [`text_editor::Content`] and applies actions to it.
pub struct TextArea<'a, Message> {
    content: &'a text_editor::Content,
    placeholder: String,
    label: Option<String>,
    helper_text: Option<String>,
    variant: InputVariant,
    size: InputSize,
    required: bool,
    auto_resize: bool,
    on_action: Option<Box<EditAction<'a, Message>>>,
}

impl<'a, Message: Clone + 'a> TextArea<'a, Message> {
    pub fn new(content: &'a text_editor::Content) -> Self {
        Self {
            content,
            placeholder: String::new(),
            label: None,
            helper_text: None,
            variant: InputVariant::default(),
            size: InputSize::default(),
            required: false,
            auto_resize: false,
            on_action: None,
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

    /// Grow with the content instead of scrolling inside a fixed box.
    pub fn auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    /// Without a handler the editor renders disabled.
    pub fn on_action(
        mut self,
        on_action: impl Fn(text_editor::Action) -> Message + 'a,
    ) -> Self {
        self.on_action = Some(Box::new(on_action));
        self
    }

    pub fn label_text(&self) -> Option<String> {
        self.label
            .as_deref()
            .map(|label| required_label(label, self.required))
    }

    pub fn view(self, theme: ThemeProps<'a>) -> Element<'a, Message> {
        let palette = *theme.palette();
        let accent = variant_color(self.variant, &palette);
        let label_text = self.label_text();
        let min_height = min_height(self.size);
        let height = editor_height(self.size, self.auto_resize);
        let (padding, text_size) = match self.size {
            InputSize::Sm => (Padding::from([6.0, 12.0]), 13.0),
            InputSize::Md => (Padding::from([8.0, 12.0]), 14.0),
            InputSize::Lg => (Padding::from([10.0, 16.0]), 16.0),
        };

        let mut editor = text_editor(self.content)
            .placeholder(self.placeholder)
            .padding(padding)
            .size(text_size)
            .min_height(min_height)
            .height(height)
            .style(move |base, status| {
                let mut style = text_editor::default(base, status);
                style.background = palette.surface.into();
                style.value = palette.foreground;
                style.placeholder = palette.subtle_foreground;
                style.selection = palette.accent_soft;
                style.border.radius = iced::border::Radius::new(6.0);
                style.border.color = match status {
                    text_editor::Status::Focused { .. } => accent,
                    _ if accent != palette.accent => accent,
                    _ => palette.border,
                };
                style
            });
        if let Some(on_action) = self.on_action {
            editor = editor.on_action(on_action);
        }

        let mut wrapper = Column::new().spacing(4).width(Length::Fill);
        if let Some(label) = label_text {
            wrapper = wrapper.push(text(label).size(14).color(palette.foreground));
        }
        wrapper = wrapper.push(editor);
        if let Some(helper) = self.helper_text {
            let color = match self.variant {
                InputVariant::Default => palette.muted_foreground,
                _ => accent,
            };
            wrapper = wrapper.push(text(helper).size(12).color(color));
        }
        wrapper.into()
    }
}

fn min_height(size: InputSize) -> f32 {
    match size {
        InputSize::Sm => 64.0,
        InputSize::Md => 96.0,
        InputSize::Lg => 128.0,
    }
}

/// Fixed boxes scroll inside; auto-resized ones grow from the minimum.
fn editor_height(size: InputSize, auto_resize: bool) -> Length {
    if auto_resize {
        Length::Shrink
    } else {
        Length::Fixed(min_height(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_height_follows_size() {
        assert_eq!(editor_height(InputSize::Sm, false), Length::Fixed(64.0));
        assert_eq!(editor_height(InputSize::Md, false), Length::Fixed(96.0));
        assert_eq!(editor_height(InputSize::Lg, false), Length::Fixed(128.0));
    }

    #[test]
    fn auto_resize_grows_from_the_minimum() {
        assert_eq!(editor_height(InputSize::Md, true), Length::Shrink);
        assert_eq!(min_height(InputSize::Md), 96.0);
    }
}
