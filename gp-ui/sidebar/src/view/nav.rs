use gp_ui_components::{TooltipPosition, svg_icon, tooltip};
use gp_ui_theme::ThemeProps;
use iced::widget::{Column, button, container, row, text};
use iced::{Border, Color, Element, Length, alignment};

use crate::event::SidebarIntent;
use crate::model::{SidebarGroup, SidebarItem, SidebarViewModel};

const ITEM_HEIGHT: f32 = 36.0;
const ITEM_ICON_SIZE: f32 = 18.0;
const ITEM_TEXT_SIZE: f32 = 14.0;
const GROUP_LABEL_SIZE: f32 = 11.0;
const GROUP_SPACING: f32 = 16.0;

pub(super) fn groups<'a>(
    groups: Vec<SidebarGroup>,
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Column<'a, SidebarIntent> {
    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(GROUP_SPACING)
        .padding([0, 8]);

    for group in groups {
        column = column.push(group_view(group, vm, theme));
    }

    column
}

fn group_view<'a>(
    group: SidebarGroup,
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = theme.palette();
    let mut column = Column::new().width(Length::Fill).spacing(2);

    if let Some(label) = group.label {
        let color = fade(palette.subtle_foreground, vm.label_alpha());
        let label = text(label.to_uppercase())
            .size(GROUP_LABEL_SIZE)
            .color(color)
            .wrapping(text::Wrapping::None);
        // Collapsed groups keep their label slot at zero height.
        let height = if vm.is_collapsed {
            Length::Fixed(0.0)
        } else {
            Length::Shrink
        };
        column = column
            .push(container(label).height(height).padding([0, 8]).clip(true));
    }

    for item in group.items {
        column = column.push(item_view(item, vm, theme));
    }

    column.into()
}

fn item_view<'a>(
    item: SidebarItem,
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = *theme.palette();
    let alpha = vm.label_alpha();
    let is_active = item.is_active;

    let foreground = if is_active {
        palette.foreground
    } else {
        palette.muted_foreground
    };

    let mut content = row![]
        .spacing(12)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = item.icon {
        content = content.push(svg_icon(icon, ITEM_ICON_SIZE, foreground));
    }

    content = content.push(
        text(item.label.clone())
            .size(ITEM_TEXT_SIZE)
            .color(fade(foreground, alpha))
            .wrapping(text::Wrapping::None)
            .width(Length::Fill),
    );

    if let Some(badge) = item.badge {
        let badge_background = fade(palette.accent, alpha);
        let badge_foreground = fade(Color::WHITE, alpha);
        content = content.push(
            container(text(badge).size(11).color(badge_foreground))
                .padding([1, 6])
                .style(move |_| container::Style {
                    background: Some(badge_background.into()),
                    border: Border {
                        radius: iced::border::Radius::new(999.0),
                        ..Border::default()
                    },
                    ..Default::default()
                }),
        );
    }

    let active_background = palette.surface_muted;
    let hover_background = palette.surface_muted;
    let pressed = SidebarIntent::ItemPressed {
        id: item.id,
        href: item.href,
    };

    let entry = button(container(content).clip(true))
        .on_press(pressed)
        .width(Length::Fill)
        .height(Length::Fixed(ITEM_HEIGHT))
        .padding([0, 8])
        .style(move |_, status| {
            let background = match (is_active, status) {
                (true, _) => Some(active_background.into()),
                (false, button::Status::Hovered)
                | (false, button::Status::Pressed) => {
                    Some(hover_background.into())
                },
                _ => None,
            };
            button::Style {
                background,
                border: Border {
                    radius: iced::border::Radius::new(6.0),
                    ..Border::default()
                },
                ..Default::default()
            }
        });

    if vm.is_collapsed {
        tooltip(entry, item.label, TooltipPosition::Right, theme)
    } else {
        entry.into()
    }
}

/// Show `expanded` while the sidebar is open and `collapsed` otherwise.
pub fn crossfade<'a, Message: 'a>(
    vm: SidebarViewModel,
    expanded: impl Into<Element<'a, Message>>,
    collapsed: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    if vm.is_collapsed {
        collapsed.into()
    } else {
        expanded.into()
    }
}

pub(super) fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

