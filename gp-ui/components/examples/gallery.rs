use std::time::Instant;

use env_logger::Env;
use gp_ui_components::{
    Alert, AlertModal, AlertVariant, BadgeSize, BadgeVariant, Button,
    ButtonVariant, ConfirmModal, CopyFeedback, CopyRequest, Dropdown,
    DropdownAlign, DropdownEntry, DropdownState, Input, InputVariant, Layout,
    LayoutMenuItem, LayoutUser, MenuItemVariant, StatCard, StatCardVariant,
    StatGrid, StatItem, StatStatus, TabItem, TextArea, TooltipPosition, Trend,
    TrendDirection, UserMenu, ValueFormat, badge, color_mode_toggle,
    escape_subscription, is_escape, skeleton_text, tab_bar, tooltip,
};
use gp_ui_theme::{
    ColorModePreference, PreferencesConfig, ThemeManager, ThemeProps,
};
use iced::widget::{Space, column, row, scrollable, text, text_editor};
use iced::{Element, Length, Subscription, Task, keyboard};

#[derive(Debug, Clone)]
enum Message {
    TabChanged(String),
    EmailChanged(String),
    Copy(CopyRequest),
    CopyTick(Instant),
    ToggleColorMode,
    ToggleMenu,
    OpenConfirm,
    Confirm,
    Cancel,
    ToggleOptions,
    CloseOptions,
    ToggleGrid,
    ShowAlert,
    CloseAlert,
    NotesEdited(text_editor::Action),
    Keyboard(keyboard::Event),
    Noop,
}

struct Gallery {
    themes: ThemeManager,
    preference: ColorModePreference,
    tabs: Vec<TabItem>,
    active_tab: String,
    email: String,
    stats: Vec<StatItem>,
    feedback: CopyFeedback,
    menu: UserMenu,
    user: LayoutUser,
    confirming: bool,
    options: DropdownState,
    show_grid: bool,
    alerting: bool,
    notes: text_editor::Content,
}

impl Gallery {
    fn new() -> Self {
        let preference = ColorModePreference::load(PreferencesConfig::default());
        Self {
            themes: ThemeManager::new(preference.mode()),
            preference,
            tabs: vec![
                TabItem::new("overview", "Overview"),
                TabItem::new("usage", "Usage"),
            ],
            active_tab: String::from("overview"),
            email: String::new(),
            stats: vec![
                StatItem::new("Status", "Active").status(StatStatus::Success),
                StatItem::new("User ID", "usr_123").copyable(true),
                StatItem::new("Storage", 1_288_490_189)
                    .format(ValueFormat::Bytes),
                StatItem::new("Balance", 1234.5).format(ValueFormat::Currency),
                StatItem::new("Created", "2024-01-15").format(ValueFormat::Date),
            ],
            feedback: CopyFeedback::default(),
            menu: UserMenu::default(),
            user: LayoutUser {
                name: Some(String::from("Ada Lovelace")),
                email: Some(String::from("ada@example.com")),
            },
            confirming: false,
            options: DropdownState::default(),
            show_grid: true,
            alerting: false,
            notes: text_editor::Content::new(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabChanged(id) => self.active_tab = id,
            Message::EmailChanged(value) => self.email = value,
            Message::Copy(request) => return self.feedback.copy(request),
            Message::CopyTick(now) => {
                self.feedback.tick(now);
            },
            Message::ToggleColorMode => {
                match self.preference.toggle() {
                    Ok(mode) => log::info!("color mode switched to {mode:?}"),
                    Err(err) => log::warn!("color mode not persisted: {err}"),
                }
                self.themes.set_mode(self.preference.mode());
            },
            Message::ToggleMenu => self.menu.toggle(),
            Message::OpenConfirm => {
                self.menu.close();
                self.confirming = true;
            },
            Message::Confirm | Message::Cancel => self.confirming = false,
            Message::ToggleOptions => self.options.toggle(),
            Message::CloseOptions => self.options.close(),
            Message::ToggleGrid => {
                self.show_grid = !self.show_grid;
                self.options.close();
            },
            Message::ShowAlert => {
                self.options.close();
                self.alerting = true;
            },
            Message::CloseAlert => self.alerting = false,
            Message::NotesEdited(action) => self.notes.perform(action),
            Message::Keyboard(event) => {
                if is_escape(&event) {
                    self.confirming = false;
                    self.alerting = false;
                    self.options.close();
                }
            },
            Message::Noop => {},
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let theme = ThemeProps::new(self.themes.current());

        let buttons = row![
            Button::new("Primary").on_press(Message::Noop).view(theme),
            Button::new("Secondary")
                .variant(ButtonVariant::Secondary)
                .on_press(Message::Noop)
                .view(theme),
            Button::new("Saving")
                .loading(true)
                .on_press(Message::Noop)
                .view(theme),
            tooltip(
                Button::new("Delete")
                    .variant(ButtonVariant::Destructive)
                    .on_press(Message::OpenConfirm)
                    .view(theme),
                "Asks for confirmation",
                TooltipPosition::Bottom,
                theme,
            ),
            Button::new("Options")
                .variant(ButtonVariant::Secondary)
                .on_press(Message::ToggleOptions)
                .view(theme),
        ]
        .spacing(8);

        let badges = row![
            badge("Live", BadgeVariant::Success, BadgeSize::Md, theme),
            badge("Beta", BadgeVariant::Info, BadgeSize::Sm, theme),
        ]
        .spacing(8);

        let cards = row![
            StatCard::new("Requests", 1204)
                .trend(Trend {
                    direction: TrendDirection::Up,
                    value: String::from("12%"),
                    label: Some(String::from("vs last week")),
                })
                .view(theme),
            StatCard::new("Region", "eu-west-1")
                .variant(StatCardVariant::Centered)
                .view(theme),
        ]
        .spacing(12);

        let email_variant = if self.email.is_empty() || self.email.contains('@')
        {
            InputVariant::Default
        } else {
            InputVariant::Error
        };

        let grid = if self.show_grid {
            StatGrid::new(&self.stats)
                .feedback(&self.feedback)
                .on_copy(Message::Copy)
                .as_card(true)
                .view(theme)
        } else {
            skeleton_text(3, 1.0, theme)
        };

        let body = column![
            tab_bar(&self.tabs, &self.active_tab, Message::TabChanged, theme),
            Alert::new("Changes are saved automatically.")
                .title("Heads up")
                .variant(AlertVariant::Info)
                .view(theme),
            buttons,
            badges,
            cards,
            Input::new(&self.email)
                .label("Email")
                .required(true)
                .helper_text("We never share it.")
                .variant(email_variant)
                .on_input(Message::EmailChanged)
                .view(theme),
            TextArea::new(&self.notes)
                .label("Notes")
                .placeholder("Anything worth remembering...")
                .on_action(Message::NotesEdited)
                .view(theme),
            grid,
            Space::new().height(Length::Fixed(24.0)),
            text(format!("Active tab: {}", self.active_tab)).size(12),
        ]
        .spacing(16)
        .padding(24);

        let page = Layout::new()
            .title("Gallery")
            .user(&self.user)
            .menu_items(vec![LayoutMenuItem {
                label: String::from("Delete account"),
                icon: None,
                on_select: Message::OpenConfirm,
                variant: MenuItemVariant::Danger,
            }])
            .on_logout(Message::Noop)
            .menu(self.menu, Message::ToggleMenu)
            .header_right(color_mode_toggle(
                self.themes.current().mode(),
                None,
                Message::ToggleColorMode,
                theme,
            ))
            .view(scrollable(body), theme);

        let page = Dropdown::new(self.options, Message::CloseOptions)
            .entries(vec![
                DropdownEntry::Label(String::from("View")),
                DropdownEntry::Checkbox {
                    label: String::from("Show stats"),
                    checked: self.show_grid,
                    on_toggle: Message::ToggleGrid,
                },
                DropdownEntry::Separator,
                DropdownEntry::item("Show alert", Message::ShowAlert),
                DropdownEntry::disabled("Export"),
            ])
            .align(DropdownAlign::Start)
            .offset([220, 24])
            .view(page, theme);

        if self.alerting {
            return AlertModal::new(
                "Saved",
                "Your changes have been stored.",
                Message::CloseAlert,
            )
            .view(page, theme);
        }

        if self.confirming {
            ConfirmModal::new(
                "Delete account",
                "This permanently removes your data.",
                Message::Confirm,
                Message::Cancel,
            )
            .confirm_text("Delete")
            .confirm_variant(ButtonVariant::Destructive)
            .view(page, theme)
        } else {
            page
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.feedback.subscription().map(Message::CopyTick),
            escape_subscription(
                self.confirming || self.alerting || self.options.is_open(),
            )
            .map(Message::Keyboard),
        ])
    }

    fn theme(&self) -> iced::Theme {
        self.themes.iced_theme()
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("gp-ui gallery")
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .run()
}
