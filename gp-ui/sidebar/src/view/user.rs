use gp_ui_theme::ThemeProps;
use iced::widget::{Column, button, container, row, text};
use iced::{Border, Color, Element, Length, alignment};

use super::nav::fade;
use crate::event::SidebarIntent;
use crate::model::SidebarViewModel;
use crate::user::SidebarUser;

const AVATAR_SIZE: f32 = 32.0;

/// Avatar with name and email. Text fades out while collapsed.
pub fn user<'a>(
    user: &'a SidebarUser,
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = *theme.palette();
    let alpha = vm.label_alpha();

    let avatar_background = palette.accent;
    let avatar = container(text(user.initials()).size(13).color(Color::WHITE))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(avatar_background.into()),
            border: Border {
                radius: iced::border::Radius::new(AVATAR_SIZE / 2.0),
                ..Border::default()
            },
            ..Default::default()
        });

    let mut details = Column::new().spacing(2).width(Length::Fill).push(
        text(user.name.as_str())
            .size(14)
            .color(fade(palette.foreground, alpha))
            .wrapping(text::Wrapping::None),
    );
    if let Some(email) = &user.email {
        details = details.push(
            text(email.as_str())
                .size(12)
                .color(fade(palette.subtle_foreground, alpha))
                .wrapping(text::Wrapping::None),
        );
    }

    let content = container(
        row![avatar, details]
            .spacing(12)
            .align_y(alignment::Vertical::Center),
    )
    .clip(true);

    let hover_background = palette.surface_muted;
    let mut entry = button(content)
        .width(Length::Fill)
        .padding([12, 10])
        .style(move |_, status| button::Style {
            background: match status {
                button::Status::Hovered => Some(hover_background.into()),
                _ => None,
            },
            ..Default::default()
        });
    if user.pressable {
        entry = entry.on_press(SidebarIntent::UserPressed);
    }

    entry.into()
}
