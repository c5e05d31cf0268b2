use gp_ui_theme::ThemeProps;
use iced::widget::{Space, container, opaque, scrollable, stack};
use iced::{Element, Length, alignment};

use crate::model::{ContentPaneMaxWidth, ContentViewModel};

const MOBILE_PADDING: f32 = 16.0;
const DESKTOP_PADDING: f32 = 24.0;

/// Main content container, centered under a max width unless
/// `full_width` is set.
pub struct ContentPane<'a, Message> {
    content: Element<'a, Message>,
    max_width: ContentPaneMaxWidth,
    full_width: bool,
    padding: bool,
}

impl<'a, Message: 'a> ContentPane<'a, Message> {
    pub fn new(content: impl Into<Element<'a, Message>>) -> Self {
        Self {
            content: content.into(),
            max_width: ContentPaneMaxWidth::default(),
            full_width: false,
            padding: true,
        }
    }

    pub fn max_width(mut self, max_width: ContentPaneMaxWidth) -> Self {
        self.max_width = max_width;
        self
    }

    /// Drop the max-width constraint for dashboards and canvases.
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn padding_px(&self, is_mobile: bool) -> f32 {
        match (self.padding, is_mobile) {
            (false, _) => 0.0,
            (true, true) => MOBILE_PADDING,
            (true, false) => DESKTOP_PADDING,
        }
    }

    /// Render the pane. While the page scroll is locked a shield covers the
    /// scrollable, which keeps its offset for when the lock is released.
    pub fn view(
        self,
        vm: ContentViewModel,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message> {
        let background = theme.palette().background;
        let padding = self.padding_px(vm.is_mobile);

        let inner: Element<'a, Message> = if self.full_width {
            self.content
        } else {
            container(
                container(self.content)
                    .width(Length::Fill)
                    .max_width(self.max_width.px()),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
        };

        let padded = container(inner).width(Length::Fill).padding(padding);
        let body = stack![
            scrollable(padded).width(Length::Fill).height(Length::Fill),
            scroll_shield(shield_length(vm.scroll_locked)),
        ];

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(move |_| container::Style {
                background: Some(background.into()),
                ..Default::default()
            })
            .into()
    }
}

/// Top layer of the pane. A filled opaque layer swallows clicks and makes
/// the scrollable underneath see a levitating cursor, so wheel input stops.
fn scroll_shield<'a, Message: 'a>(length: Length) -> Element<'a, Message> {
    match length {
        Length::Shrink => Space::new().into(),
        length => opaque(Space::new().width(length).height(length)),
    }
}

fn shield_length(scroll_locked: bool) -> Length {
    if scroll_locked {
        Length::Fill
    } else {
        Length::Shrink
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::text;

    use super::*;

    #[test]
    fn padding_follows_viewport_and_can_be_disabled() {
        let pane: ContentPane<'_, ()> = ContentPane::new(text("body"));
        assert_eq!(pane.padding_px(true), MOBILE_PADDING);
        assert_eq!(pane.padding_px(false), DESKTOP_PADDING);

        let pane = pane.padding(false);
        assert_eq!(pane.padding_px(false), 0.0);
    }

    #[test]
    fn shield_covers_the_pane_only_while_scroll_is_locked() {
        assert_eq!(shield_length(true), Length::Fill);
        assert_eq!(shield_length(false), Length::Shrink);
    }
}
