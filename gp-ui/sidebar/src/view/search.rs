use gp_ui_components::svg_icon;
use gp_ui_theme::{ThemeProps, icons};
use iced::widget::{button, container, row, text_input};
use iced::{Border, Element, Length, alignment};

use super::nav::crossfade;
use crate::event::{SearchIntent, SidebarIntent};
use crate::model::SidebarViewModel;
use crate::search::SidebarSearch;

const SEARCH_ICON_SIZE: f32 = 16.0;

/// Search field for the sidebar header. Collapsed panels show an icon
/// button that expands the sidebar and focuses the input.
pub fn search<'a>(
    search: &'a SidebarSearch,
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = *theme.palette();

    let field = text_input(search.placeholder(), search.value())
        .id(search.input_id())
        .on_input(|value| SidebarIntent::Search(SearchIntent::Changed(value)))
        .on_submit(SidebarIntent::Search(SearchIntent::Submitted))
        .size(14)
        .padding([6, 10])
        .style(move |_, status| {
            let border_color = match status {
                text_input::Status::Focused { .. } => palette.accent,
                _ => palette.border,
            };
            text_input::Style {
                background: palette.background.into(),
                border: Border {
                    width: 1.0,
                    color: border_color,
                    radius: iced::border::Radius::new(6.0),
                },
                icon: palette.subtle_foreground,
                placeholder: palette.subtle_foreground,
                value: palette.foreground,
                selection: palette.accent_soft,
            }
        });

    let expanded = row![
        svg_icon(icons::SEARCH, SEARCH_ICON_SIZE, palette.subtle_foreground),
        field,
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let hover_background = palette.surface_muted;
    let collapsed = button(svg_icon(
        icons::SEARCH,
        SEARCH_ICON_SIZE,
        palette.subtle_foreground,
    ))
    .on_press(SidebarIntent::Search(SearchIntent::CollapsedPressed))
    .padding(10)
    .style(move |_, status| button::Style {
        background: match status {
            button::Status::Hovered => Some(hover_background.into()),
            _ => None,
        },
        border: Border {
            radius: iced::border::Radius::new(6.0),
            ..Border::default()
        },
        ..Default::default()
    });

    container(crossfade(vm, expanded, collapsed))
        .width(Length::Fill)
        .padding([12, 8])
        .align_x(alignment::Horizontal::Center)
        .into()
}
