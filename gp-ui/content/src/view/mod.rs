mod pane;

use gp_ui_components::{TabItem, svg_icon, tab_bar};
use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};
use iced::widget::{
    Column, Row, Space, Stack, button, column, container, mouse_area, opaque,
    row,
};
use iced::{Border, Element, Length, alignment};

use crate::event::ContentIntent;
use crate::model::{ContentPosition, ContentSidebarConfig, ContentViewModel};
pub use pane::ContentPane;

const TRIGGER_ICON_SIZE: f32 = 20.0;
const DRAWER_TOP_PADDING: f32 = 48.0;

/// Props for the content view aggregator.
#[derive(Debug, Clone, Copy)]
pub struct ContentViewProps<'a> {
    pub vm: ContentViewModel,
    pub config: ContentSidebarConfig,
    pub theme: ThemeProps<'a>,
}

/// Sidebar next to the pane on desktop; on mobile the sidebar moves into a
/// drawer over the pane.
pub fn body<'a, Message: Clone + 'a>(
    props: ContentViewProps<'a>,
    sidebar: impl Into<Element<'a, Message>>,
    pane: impl Into<Element<'a, Message>>,
    on_intent: fn(ContentIntent) -> Message,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();
    let vm = props.vm;
    let position = props.config.position;

    if !vm.is_mobile {
        let aside = container(sidebar)
            .width(Length::Fixed(props.config.width.px()))
            .height(Length::Fill)
            .clip(true)
            .style(move |_| aside_style(&palette));
        let children: [Element<'a, Message>; 2] = match position {
            ContentPosition::Left => [aside.into(), pane.into()],
            ContentPosition::Right => [pane.into(), aside.into()],
        };

        return Row::with_children(children)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let mut layers: Vec<Element<'a, Message>> = vec![pane.into()];
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
                .on_press(on_intent(ContentIntent::BackdropPressed)),
        ));
    }

    layers.push(drawer(props, sidebar.into(), on_intent));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn drawer<'a, Message: 'a>(
    props: ContentViewProps<'a>,
    sidebar: Element<'a, Message>,
    on_intent: fn(ContentIntent) -> Message,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();
    let vm = props.vm;

    let close = Element::from(icon_button(
        icons::CLOSE,
        &palette,
        ContentIntent::ClosePressed,
    ))
    .map(on_intent);
    let close_row = match props.config.position {
        ContentPosition::Left => row![Space::new().width(Length::Fill), close],
        ContentPosition::Right => row![close, Space::new().width(Length::Fill)],
    };

    let panel = column![
        container(close_row)
            .height(Length::Fixed(DRAWER_TOP_PADDING))
            .padding(12),
        container(sidebar).width(Length::Fill).height(Length::Fill),
    ];

    // Stays mounted; a closed drawer is clipped to zero width.
    let aside = opaque(
        container(panel)
            .width(Length::Fixed(vm.drawer_width()))
            .height(Length::Fill)
            .clip(true)
            .style(move |_| aside_style(&palette)),
    );

    let align = match props.config.position {
        ContentPosition::Left => alignment::Horizontal::Left,
        ContentPosition::Right => alignment::Horizontal::Right,
    };

    container(aside)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align)
        .into()
}

/// Tab bar for the content area. Shows the drawer trigger when a sidebar
/// is registered and the viewport is mobile.
pub fn tabs<'a, Message: Clone + 'a>(
    props: ContentViewProps<'a>,
    items: &'a [TabItem],
    active_id: &str,
    on_change: impl Fn(String) -> Message + 'a,
    on_intent: fn(ContentIntent) -> Message,
) -> Element<'a, Message> {
    let palette = *props.theme.palette();
    let mut bar = Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    if props.vm.shows_trigger() {
        bar = bar.push(trigger(props.theme, on_intent));
    }
    bar = bar.push(tab_bar(items, active_id, on_change, props.theme));

    let background = palette.accent_soft;
    let border = palette.border;
    let header = container(bar)
        .width(Length::Fill)
        .padding([0, 16])
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    Column::new()
        .push(header)
        .push(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(1.0))
                .style(move |_| container::Style {
                    background: Some(border.into()),
                    ..Default::default()
                }),
        )
        .into()
}

/// Button toggling the mobile drawer, for custom headers.
pub fn trigger<'a, Message: 'a>(
    theme: ThemeProps<'a>,
    on_intent: fn(ContentIntent) -> Message,
) -> Element<'a, Message> {
    Element::from(icon_button(
        icons::MENU,
        theme.palette(),
        ContentIntent::TriggerPressed,
    ))
    .map(on_intent)
}

fn icon_button<'a>(
    icon: &'static [u8],
    palette: &IcedColorPalette,
    on_press: ContentIntent,
) -> iced::widget::Button<'a, ContentIntent> {
    let hover_background = palette.surface;
    button(svg_icon(icon, TRIGGER_ICON_SIZE, palette.muted_foreground))
        .on_press(on_press)
        .padding(6)
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
}

fn aside_style(palette: &IcedColorPalette) -> container::Style {
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
