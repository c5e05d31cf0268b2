use iced::Element;

use gp_ui_theme::{ColorMode, ThemeProps, icons};

use crate::button::{Button, ButtonSize, ButtonVariant, IconPosition};

/// Labels shown next to the toggle icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorModeLabels {
    pub light: String,
    pub dark: String,
}

impl Default for ColorModeLabels {
    fn default() -> Self {
        Self {
            light: String::from("Light"),
            dark: String::from("Dark"),
        }
    }
}

impl ColorModeLabels {
    /// The label names the mode a press switches to.
    pub fn target(&self, current: ColorMode) -> &str {
        match current {
            ColorMode::Dark => &self.light,
            ColorMode::Light => &self.dark,
        }
    }
}

/// Ghost button switching between light and dark mode.
pub fn color_mode_toggle<'a, Message: Clone + 'a>(
    mode: ColorMode,
    labels: Option<&ColorModeLabels>,
    on_toggle: Message,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    let icon = if mode.is_dark() {
        icons::SUN
    } else {
        icons::MOON
    };
    let label = labels
        .map(|labels| labels.target(mode).to_string())
        .unwrap_or_default();

    Button::new(label)
        .variant(ButtonVariant::Ghost)
        .size(ButtonSize::Sm)
        .icon(icon, IconPosition::Left)
        .on_press(on_toggle)
        .view(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_target_mode() {
        let labels = ColorModeLabels::default();
        assert_eq!(labels.target(ColorMode::Light), "Dark");
        assert_eq!(labels.target(ColorMode::Dark), "Light");
    }
}
