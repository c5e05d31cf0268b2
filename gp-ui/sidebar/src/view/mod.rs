mod nav;
mod search;
mod user;

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};
use iced::widget::{
    Column, Space, Stack, button, container, mouse_area, opaque, row,
    scrollable,
};
use iced::{Border, Element, Length, alignment};

use crate::event::SidebarIntent;
use crate::model::{SidebarItems, SidebarViewModel};
pub use nav::crossfade;
pub use search::search;
pub use user::user;

const TOGGLE_HEIGHT: f32 = 40.0;
const NAV_TOP_PADDING: f32 = 24.0;
const ICON_SIZE: f32 = 16.0;
const CLOSE_ICON_SIZE: f32 = 20.0;

/// Props for the sidebar view aggregator.
#[derive(Debug, Clone, Copy)]
pub struct SidebarViewProps<'a> {
    pub vm: SidebarViewModel,
    pub items: &'a SidebarItems,
    pub theme: ThemeProps<'a>,
}

/// Optional header and footer rendered around the navigation.
pub struct SidebarSlots<'a, Message> {
    pub header: Option<Element<'a, Message>>,
    pub footer: Option<Element<'a, Message>>,
}

impl<Message> Default for SidebarSlots<'_, Message> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
        }
    }
}

/// Render the page layout: a static column next to `content` on desktop,
/// an overlay drawer over `content` on mobile.
pub fn layout<'a, Message: Clone + 'a>(
    props: SidebarViewProps<'a>,
    slots: SidebarSlots<'a, Message>,
    content: impl Into<Element<'a, Message>>,
    on_intent: fn(SidebarIntent) -> Message,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();
    let vm = props.vm;
    let body = panel(props, slots, on_intent);

    if !vm.is_mobile {
        let column = container(body)
            .width(Length::Fixed(vm.panel_width()))
            .height(Length::Fill)
            .clip(true)
            .style(move |_| panel_style(&palette));

        return row![column, content.into()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let mut layers: Vec<Element<'a, Message>> = vec![content.into()];
    if vm.shows_backdrop() {
        let backdrop_color = palette.backdrop();
        let backdrop = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(backdrop_color.into()),
                ..Default::default()
            });
        layers.push(opaque(
            mouse_area(backdrop)
                .on_press(on_intent(SidebarIntent::BackdropPressed)),
        ));
    }

    // Always mounted; a closed drawer is clipped to zero width.
    let drawer = container(body)
        .width(Length::Fixed(vm.drawer_width()))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| panel_style(&palette));
    layers.push(opaque(drawer));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the panel content without positioning.
pub fn panel<'a, Message: 'a>(
    props: SidebarViewProps<'a>,
    slots: SidebarSlots<'a, Message>,
    on_intent: fn(SidebarIntent) -> Message,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();
    let vm = props.vm;
    let mut content = Column::new().width(Length::Fill).height(Length::Fill);

    if vm.shows_close_button() {
        let close = icon_button(
            icons::CLOSE,
            CLOSE_ICON_SIZE,
            &palette,
            SidebarIntent::ClosePressed,
        )
        .map(on_intent);
        content = content.push(
            row![Space::new().width(Length::Fill), close].padding([8, 8]),
        );
    }

    if let Some(header) = slots.header {
        content = content.push(header).push(divider(&palette));
    }

    let groups = props.items.groups();
    let top_padding = if vm.is_collapsed { 0.0 } else { NAV_TOP_PADDING };
    let nav = Element::from(
        nav::groups(groups, vm, props.theme).padding(iced::Padding {
            top: top_padding,
            bottom: 16.0,
            ..iced::Padding::ZERO
        }),
    )
    .map(on_intent);
    content =
        content.push(scrollable(nav).width(Length::Fill).height(Length::Fill));

    if let Some(footer) = slots.footer {
        content = content.push(divider(&palette)).push(footer);
    }

    if vm.shows_collapse_toggle() {
        let icon = if vm.is_collapsed {
            icons::CHEVRON_RIGHT
        } else {
            icons::CHEVRON_LEFT
        };
        let toggle = container(icon_button(
            icon,
            ICON_SIZE,
            &palette,
            SidebarIntent::Toggle,
        ))
        .width(Length::Fill)
        .height(Length::Fixed(TOGGLE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);
        content = content
            .push(divider(&palette))
            .push(Element::from(toggle).map(on_intent));
    }

    content.into()
}

fn panel_style(palette: &IcedColorPalette) -> container::Style {
    container::Style {
        background: Some(palette.surface.into()),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}

fn divider<'a, Message: 'a>(palette: &IcedColorPalette) -> Element<'a, Message> {
    let color = palette.border;
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

fn icon_button<'a>(
    icon: &'static [u8],
    size: f32,
    palette: &IcedColorPalette,
    on_press: SidebarIntent,
) -> Element<'a, SidebarIntent> {
    let base = palette.subtle_foreground;
    let hover = palette.foreground;
    let hover_background = palette.surface_muted;

    let icon_svg = iced::widget::svg::Svg::new(
        iced::widget::svg::Handle::from_memory(icon),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .style(move |_, status| iced::widget::svg::Style {
        color: Some(if status == iced::widget::svg::Status::Hovered {
            hover
        } else {
            base
        }),
    });

    button(icon_svg)
        .on_press(on_press)
        .padding(4)
        .style(move |_, status| button::Style {
            background: match status {
                button::Status::Hovered => Some(hover_background.into()),
                _ => None,
            },
            border: Border {
                radius: iced::border::Radius::new(4.0),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
