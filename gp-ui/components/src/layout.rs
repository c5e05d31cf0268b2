use iced::widget::{
    Column, Space, Stack, button, column, container, mouse_area, row, text,
};
use iced::{Element, Length, Padding, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::style::{divider, rounded, svg_icon};

const HEADER_HEIGHT: f32 = 48.0;
const MENU_MIN_WIDTH: f32 = 160.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub link: Option<BannerLink>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuItemVariant {
    #[default]
    Default,
    Danger,
}

#[derive(Debug, Clone)]
pub struct LayoutMenuItem<Message> {
    pub label: String,
    pub icon: Option<&'static [u8]>,
    pub on_select: Message,
    pub variant: MenuItemVariant,
}

/// Open/closed state of the header user menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserMenu {
    open: bool,
}

impl UserMenu {
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMaxWidth {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Xl2,
}

impl LayoutMaxWidth {
    pub fn pixels(self) -> f32 {
        match self {
            LayoutMaxWidth::Sm => 384.0,
            LayoutMaxWidth::Md => 448.0,
            LayoutMaxWidth::Lg => 512.0,
            LayoutMaxWidth::Xl => 576.0,
            LayoutMaxWidth::Xl2 => 672.0,
        }
    }
}

type LinkAction<'a, Message> = dyn Fn(String) -> Message + 'a;

/// Page chrome: optional banner, header bar with title and user menu,
/// optional search strip, then the page body.
pub struct Layout<'a, Message> {
    title: String,
    show_back_button: bool,
    is_home_page: bool,
    on_navigate_home: Option<Message>,
    banner: Option<&'a Banner>,
    on_open_link: Option<Box<LinkAction<'a, Message>>>,
    user: Option<&'a LayoutUser>,
    menu_items: Vec<LayoutMenuItem<Message>>,
    on_logout: Option<Message>,
    menu: UserMenu,
    on_toggle_menu: Option<Message>,
    header_right: Option<Element<'a, Message>>,
    search_bar: Option<Element<'a, Message>>,
    max_width: LayoutMaxWidth,
}

impl<'a, Message: Clone + 'a> Layout<'a, Message> {
    pub fn new() -> Self {
        Self {
            title: String::from("Breadcrumb"),
            show_back_button: false,
            is_home_page: false,
            on_navigate_home: None,
            banner: None,
            on_open_link: None,
            user: None,
            menu_items: Vec::new(),
            on_logout: None,
            menu: UserMenu::default(),
            on_toggle_menu: None,
            header_right: None,
            search_bar: None,
            max_width: LayoutMaxWidth::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn show_back_button(mut self, show: bool) -> Self {
        self.show_back_button = show;
        self
    }

    pub fn home_page(mut self, is_home_page: bool) -> Self {
        self.is_home_page = is_home_page;
        self
    }

    pub fn on_navigate_home(mut self, message: Message) -> Self {
        self.on_navigate_home = Some(message);
        self
    }

    pub fn banner(mut self, banner: &'a Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    pub fn on_open_link(
        mut self,
        on_open_link: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_open_link = Some(Box::new(on_open_link));
        self
    }

    pub fn user(mut self, user: &'a LayoutUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn menu_items(mut self, items: Vec<LayoutMenuItem<Message>>) -> Self {
        self.menu_items = items;
        self
    }

    pub fn on_logout(mut self, message: Message) -> Self {
        self.on_logout = Some(message);
        self
    }

    pub fn menu(mut self, menu: UserMenu, on_toggle: Message) -> Self {
        self.menu = menu;
        self.on_toggle_menu = Some(on_toggle);
        self
    }

    pub fn header_right(
        mut self,
        element: impl Into<Element<'a, Message>>,
    ) -> Self {
        self.header_right = Some(element.into());
        self
    }

    pub fn search_bar(mut self, element: impl Into<Element<'a, Message>>) -> Self {
        self.search_bar = Some(element.into());
        self
    }

    pub fn max_width(mut self, max_width: LayoutMaxWidth) -> Self {
        self.max_width = max_width;
        self
    }

    /// The menu button only appears for a signed-in user with something
    /// to show.
    pub fn has_menu(&self) -> bool {
        self.user.is_some()
            && (!self.menu_items.is_empty() || self.on_logout.is_some())
    }

    pub fn view(
        self,
        body: impl Into<Element<'a, Message>>,
        theme: ThemeProps<'a>,
    ) -> Element<'a, Message> {
        let palette = *theme.palette();
        let has_menu = self.has_menu();
        let mut page = Column::new().width(Length::Fill).height(Length::Fill);

        if let Some(banner) = self.banner {
            page = page.push(banner_view(
                banner,
                self.on_open_link.as_deref(),
                &palette,
            ));
        }

        let mut left = row![].spacing(4).align_y(alignment::Vertical::Center);
        if self.show_back_button {
            if let Some(message) = self.on_navigate_home.clone() {
                left = left.push(icon_button(
                    icons::ARROW_LEFT,
                    palette.header_foreground,
                    message,
                ));
            }
        }
        let title = text(self.title.clone())
            .size(14)
            .color(palette.header_foreground);
        let title_message = if self.is_home_page {
            None
        } else {
            self.on_navigate_home.clone()
        };
        left = left.push(match title_message {
            Some(message) => Element::from(
                button(title).on_press(message).padding(0).style(|_, _| {
                    button::Style {
                        background: None,
                        ..Default::default()
                    }
                }),
            ),
            None => title.into(),
        });

        let mut right = row![].spacing(8).align_y(alignment::Vertical::Center);
        if let Some(element) = self.header_right {
            right = right.push(element);
        }
        if has_menu {
            if let Some(message) = self.on_toggle_menu.clone() {
                right = right.push(icon_button(
                    icons::MENU,
                    palette.header_foreground,
                    message,
                ));
            }
        }

        let header = container(
            row![left, Space::new().width(Length::Fill), right]
                .align_y(alignment::Vertical::Center),
        )
        .height(Length::Fixed(HEADER_HEIGHT))
        .width(Length::Fill)
        .padding([0, 16])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.header.into()),
            ..Default::default()
        });
        page = page.push(header);

        let mut content = Column::new().width(Length::Fill).height(Length::Fill);
        if let Some(search_bar) = self.search_bar {
            content = content.push(
                container(
                    container(search_bar).max_width(self.max_width.pixels()),
                )
                .width(Length::Fill)
                .padding([12, 16])
                .align_x(alignment::Horizontal::Center)
                .style(move |_| container::Style {
                    background: Some(palette.surface.into()),
                    ..Default::default()
                }),
            );
            content = content.push(divider(palette.border));
        }
        content = content.push(body);

        let page = if has_menu && self.menu.is_open() {
            let dropdown = user_menu_view(
                self.user,
                self.menu_items,
                self.on_logout,
                self.on_toggle_menu,
                &palette,
            );
            page.push(Stack::with_children(vec![content.into(), dropdown]))
        } else {
            page.push(content)
        };

        page.into()
    }
}

impl<'a, Message: Clone + 'a> Default for Layout<'a, Message> {
    fn default() -> Self {
        Self::new()
    }
}

fn banner_view<'a, Message: Clone + 'a>(
    banner: &'a Banner,
    on_open_link: Option<&LinkAction<'a, Message>>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let mut content = row![
        text(banner.message.clone())
            .size(12)
            .color(iced::Color::WHITE)
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    if let (Some(link), Some(on_open_link)) = (&banner.link, on_open_link) {
        let label = row![
            text(link.text.clone()).size(12).color(iced::Color::WHITE),
            svg_icon(icons::EXTERNAL_LINK, 12.0, iced::Color::WHITE)
        ]
        .spacing(4)
        .align_y(alignment::Vertical::Center);
        content = content.push(
            button(label)
                .on_press(on_open_link(link.url.clone()))
                .padding(0)
                .style(|_, _| button::Style {
                    background: None,
                    ..Default::default()
                }),
        );
    }

    let background = palette.accent;
    container(content)
        .width(Length::Fill)
        .padding([6, 16])
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn user_menu_view<'a, Message: Clone + 'a>(
    user: Option<&'a LayoutUser>,
    items: Vec<LayoutMenuItem<Message>>,
    on_logout: Option<Message>,
    on_dismiss: Option<Message>,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let palette = *palette;
    let mut menu = Column::new().width(Length::Fixed(MENU_MIN_WIDTH));

    if let Some(user) = user {
        let mut info = column![].spacing(2);
        if let Some(name) = &user.name {
            info = info.push(text(name.clone()).size(14).color(palette.foreground));
        }
        if let Some(email) = &user.email {
            info = info
                .push(text(email.clone()).size(12).color(palette.muted_foreground));
        }
        menu = menu
            .push(container(info).padding([8, 12]))
            .push(divider(palette.border));
    }

    let has_items = !items.is_empty();
    for item in items {
        let color = match item.variant {
            MenuItemVariant::Default => palette.foreground,
            MenuItemVariant::Danger => palette.destructive,
        };
        menu = menu.push(menu_entry(
            item.icon,
            item.label,
            color,
            item.on_select,
            &palette,
        ));
    }

    if let Some(message) = on_logout {
        if has_items {
            menu = menu.push(divider(palette.border));
        }
        menu = menu.push(menu_entry(
            Some(icons::LOG_OUT),
            String::from("Sign out"),
            palette.foreground,
            message,
            &palette,
        ));
    }

    let panel = container(menu)
        .padding(Padding::from([4, 0]))
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: rounded(palette.border, 1.0, 6.0),
            ..Default::default()
        });
    let anchored = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([8, 16])
        .align_x(alignment::Horizontal::Right);

    let mut catcher = mouse_area(anchored);
    if let Some(message) = on_dismiss {
        catcher = catcher.on_press(message);
    }

    catcher.into()
}

fn menu_entry<'a, Message: Clone + 'a>(
    icon: Option<&'static [u8]>,
    label: String,
    color: iced::Color,
    message: Message,
    palette: &IcedColorPalette,
) -> Element<'a, Message> {
    let hover = palette.surface_muted;
    let mut content = row![].spacing(8).align_y(alignment::Vertical::Center);
    if let Some(icon) = icon {
        content = content.push(svg_icon(icon, 16.0, color));
    }
    content = content.push(text(label).size(14).color(color));

    button(content)
        .on_press(message)
        .width(Length::Fill)
        .padding([8, 12])
        .style(move |_, status| button::Style {
            background: match status {
                button::Status::Hovered => Some(hover.into()),
                _ => None,
            },
            ..Default::default()
        })
        .into()
}

fn icon_button<'a, Message: Clone + 'a>(
    icon: &'static [u8],
    color: iced::Color,
    message: Message,
) -> Element<'a, Message> {
    button(svg_icon(icon, 20.0, color))
        .on_press(message)
        .padding(4)
        .style(|_, _| button::Style {
            background: None,
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Message {
        Logout,
    }

    #[test]
    fn given_no_user_when_checked_then_menu_is_hidden() {
        let layout = Layout::<Message>::new().on_logout(Message::Logout);
        assert!(!layout.has_menu());
    }

    #[test]
    fn given_user_without_actions_when_checked_then_menu_is_hidden() {
        let user = LayoutUser::default();
        let layout = Layout::<Message>::new().user(&user);
        assert!(!layout.has_menu());
        assert!(layout.on_logout(Message::Logout).has_menu());
    }

    #[test]
    fn given_open_menu_when_toggled_twice_then_state_round_trips() {
        let mut menu = UserMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
