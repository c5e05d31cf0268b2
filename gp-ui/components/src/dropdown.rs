use iced::widget::{
    Column, Space, button, container, mouse_area, opaque, row, stack, text,
};
use iced::{Color, Element, Length, Padding, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::layout::MenuItemVariant;
use crate::style::{divider, rounded, svg_icon, with_alpha};

const MENU_MIN_WIDTH: f32 = 128.0;
const INDICATOR_SIZE: f32 = 14.0;

/// Open/closed state of one dropdown menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Which edge of the host region the menu hangs from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownAlign {
    #[default]
    Start,
    End,
}

/// One row of a dropdown menu.
#[derive(Debug, Clone)]
pub enum DropdownEntry<Message> {
    /// Plain action. Without a message the row renders disabled.
    Item {
        label: String,
        icon: Option<&'static [u8]>,
        shortcut: Option<String>,
        variant: MenuItemVariant,
        on_select: Option<Message>,
    },
    Checkbox {
        label: String,
        checked: bool,
        on_toggle: Message,
    },
    Radio {
        label: String,
        selected: bool,
        on_select: Message,
    },
    Label(String),
    Separator,
}

impl<Message> DropdownEntry<Message> {
    pub fn item(label: impl Into<String>, on_select: Message) -> Self {
        DropdownEntry::Item {
            label: label.into(),
            icon: None,
            shortcut: None,
            variant: MenuItemVariant::Default,
            on_select: Some(on_select),
        }
    }

    pub fn danger(label: impl Into<String>, on_select: Message) -> Self {
        DropdownEntry::Item {
            label: label.into(),
            icon: None,
            shortcut: None,
            variant: MenuItemVariant::Danger,
            on_select: Some(on_select),
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        DropdownEntry::Item {
            label: label.into(),
            icon: None,
            shortcut: None,
            variant: MenuItemVariant::Default,
            on_select: None,
        }
    }

    /// Message emitted when the row is pressed.
    pub fn message(&self) -> Option<&Message> {
        match self {
            DropdownEntry::Item { on_select, .. } => on_select.as_ref(),
            DropdownEntry::Checkbox { on_toggle, .. } => Some(on_toggle),
            DropdownEntry::Radio { on_select, .. } => Some(on_select),
            DropdownEntry::Label(_) | DropdownEntry::Separator => None,
        }
    }
}

/// Menu drawn over a host region while its [`DropdownState`] is open.
///
/// The trigger is part of the host region and toggles the state through a
/// host message. A click anywhere outside the panel emits `on_dismiss`.
pub struct Dropdown<Message> {
    state: DropdownState,
    entries: Vec<DropdownEntry<Message>>,
    align: DropdownAlign,
    offset: Padding,
    min_width: f32,
    on_dismiss: Message,
}

impl<Message: Clone> Dropdown<Message> {
    pub fn new(state: DropdownState, on_dismiss: Message) -> Self {
        Self {
            state,
            entries: Vec::new(),
            align: DropdownAlign::default(),
            offset: Padding::from([40, 0]),
            min_width: MENU_MIN_WIDTH,
            on_dismiss,
        }
    }

    pub fn entries(mut self, entries: Vec<DropdownEntry<Message>>) -> Self {
        self.entries = entries;
        self
    }

    pub fn push(mut self, entry: DropdownEntry<Message>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn align(mut self, align: DropdownAlign) -> Self {
        self.align = align;
        self
    }

    /// Distance from the host region's edges to the panel.
    pub fn offset(mut self, offset: impl Into<Padding>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Open menus with nothing to show stay hidden.
    pub fn is_visible(&self) -> bool {
        self.state.is_open() && !self.entries.is_empty()
    }

    /// Message a host should emit for an Escape press, if any.
    pub fn escape_message(&self) -> Option<Message> {
        self.is_visible().then(|| self.on_dismiss.clone())
    }

    pub fn view<'a>(
        self,
        base: impl Into<Element<'a, Message>>,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let base = base.into();
        if !self.is_visible() {
            return base;
        }

        let palette = *theme.palette();
        let mut menu = Column::new().width(Length::Fixed(self.min_width));
        for entry in self.entries {
            menu = menu.push(entry_view(entry, &palette));
        }

        let panel = container(menu)
            .padding(4)
            .style(move |_| container::Style {
                background: Some(palette.surface.into()),
                border: rounded(palette.border, 1.0, 6.0),
                ..Default::default()
            });
        let horizontal = match self.align {
            DropdownAlign::Start => alignment::Horizontal::Left,
            DropdownAlign::End => alignment::Horizontal::Right,
        };
        let anchored = container(opaque(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(self.offset)
            .align_x(horizontal);

        let catcher = mouse_area(anchored).on_press(self.on_dismiss);

        stack![base, catcher].into()
    }
}

fn entry_view<'a, Message: Clone + 'a>(
    entry: DropdownEntry<Message>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let palette = *palette;
    match entry {
        DropdownEntry::Item {
            label,
            icon,
            shortcut,
            variant,
            on_select,
        } => {
            let color = match variant {
                MenuItemVariant::Default => palette.foreground,
                MenuItemVariant::Danger => palette.destructive,
            };
            let color = if on_select.is_some() {
                color
            } else {
                with_alpha(color, 0.5)
            };
            let mut content =
                row![].spacing(8).align_y(alignment::Vertical::Center);
            if let Some(icon) = icon {
                content = content.push(svg_icon(icon, 16.0, color));
            }
            content = content
                .push(text(label).size(14).color(color))
                .push(Space::new().width(Length::Fill));
            if let Some(shortcut) = shortcut {
                content = content.push(
                    text(shortcut).size(12).color(palette.subtle_foreground),
                );
            }
            entry_button(content.into(), on_select, &palette)
        },
        DropdownEntry::Checkbox {
            label,
            checked,
            on_toggle,
        } => {
            let indicator = if checked {
                svg_icon(icons::CHECK, INDICATOR_SIZE, palette.foreground)
            } else {
                indicator_slot()
            };
            let content = row![
                indicator,
                text(label).size(14).color(palette.foreground)
            ]
            .spacing(8)
            .align_y(alignment::Vertical::Center);
            entry_button(content.into(), Some(on_toggle), &palette)
        },
        DropdownEntry::Radio {
            label,
            selected,
            on_select,
        } => {
            let indicator = if selected {
                radio_dot(palette.foreground)
            } else {
                indicator_slot()
            };
            let content = row![
                indicator,
                text(label).size(14).color(palette.foreground)
            ]
            .spacing(8)
            .align_y(alignment::Vertical::Center);
            entry_button(content.into(), Some(on_select), &palette)
        },
        DropdownEntry::Label(label) => {
            container(text(label).size(14).color(palette.foreground))
                .padding([6, 8])
                .into()
        },
        DropdownEntry::Separator => {
            container(divider(palette.border)).padding([4, 0]).into()
        },
    }
}

fn entry_button<'a, Message: Clone + 'a>(
    content: Element<'a, Message>,
    message: Option<Message>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let hover = palette.surface_muted;
    let mut entry = button(content)
        .width(Length::Fill)
        .padding([6, 8])
        .style(move |_, status| button::Style {
            background: match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(hover.into())
                },
                _ => None,
            },
            border: rounded(Color::TRANSPARENT, 0.0, 4.0),
            ..Default::default()
        });
    if let Some(message) = message {
        entry = entry.on_press(message);
    }
    entry.into()
}

fn indicator_slot<'a, Message: 'a>() -> Element<'a, Message> {
    Space::new()
        .width(Length::Fixed(INDICATOR_SIZE))
        .height(Length::Fixed(INDICATOR_SIZE))
        .into()
}

fn radio_dot<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    let dot = container(Space::new())
        .width(Length::Fixed(8.0))
        .height(Length::Fixed(8.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: rounded(color, 0.0, 4.0),
            ..Default::default()
        });

    container(dot)
        .width(Length::Fixed(INDICATOR_SIZE))
        .height(Length::Fixed(INDICATOR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Dismiss,
        Profile,
        ShowGrid,
    }

    fn open() -> DropdownState {
        let mut state = DropdownState::default();
        state.toggle();
        state
    }

    #[test]
    fn given_open_menu_when_toggled_again_then_it_closes() {
        let mut state = open();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());

        let mut state = open();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn given_open_menu_without_entries_when_checked_then_it_is_hidden() {
        let dropdown = Dropdown::new(open(), Message::Dismiss);
        assert!(!dropdown.is_visible());
        assert_eq!(dropdown.escape_message(), None);

        let dropdown = dropdown
            .push(DropdownEntry::item("Profile", Message::Profile));
        assert!(dropdown.is_visible());
        assert_eq!(dropdown.escape_message(), Some(Message::Dismiss));
    }

    #[test]
    fn given_closed_menu_when_escape_pressed_then_no_message() {
        let dropdown = Dropdown::new(DropdownState::default(), Message::Dismiss)
            .push(DropdownEntry::item("Profile", Message::Profile));

        assert_eq!(dropdown.escape_message(), None);
    }

    #[test]
    fn only_actionable_entries_carry_a_message() {
        let checkbox = DropdownEntry::Checkbox {
            label: String::from("Show grid"),
            checked: true,
            on_toggle: Message::ShowGrid,
        };

        assert_eq!(checkbox.message(), Some(&Message::ShowGrid));
        assert_eq!(
            DropdownEntry::<Message>::disabled("Archived").message(),
            None
        );
        assert_eq!(DropdownEntry::<Message>::Separator.message(), None);
        assert_eq!(
            DropdownEntry::<Message>::Label(String::from("View")).message(),
            None
        );
    }
}
