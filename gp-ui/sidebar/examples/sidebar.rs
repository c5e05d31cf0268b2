use env_logger::Env;
use gp_ui_components::{Button, ButtonVariant};
use gp_ui_theme::{ColorMode, ThemeManager, ThemeProps, icons};
use gp_ui_sidebar::view::{self, SidebarSlots, SidebarViewProps};
use gp_ui_sidebar::{
    SidebarConfig, SidebarCtx, SidebarEffect, SidebarEvent, SidebarGroup,
    SidebarIntent, SidebarItem, SidebarItems, SidebarProvider, SidebarSearch,
    SidebarUser,
};
use iced::widget::{column, container, text};
use iced::{Element, Length, Subscription, Task};

const INITIAL_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone)]
enum Message {
    Sidebar(SidebarEvent),
}

fn sidebar_intent(intent: SidebarIntent) -> Message {
    Message::Sidebar(SidebarEvent::Intent(intent))
}

fn sidebar_event(event: SidebarEvent) -> Message {
    Message::Sidebar(event)
}

struct Demo {
    themes: ThemeManager,
    sidebar: SidebarProvider,
    active: String,
    items: SidebarItems,
    user: SidebarUser,
    last_effect: Option<String>,
}

impl Demo {
    fn new() -> Self {
        let sidebar =
            SidebarProvider::new(SidebarConfig::default(), INITIAL_WIDTH)
                .with_search(SidebarSearch::new("Search pages..."));

        let active = String::from("dashboard");
        Self {
            themes: ThemeManager::new(ColorMode::Light),
            sidebar,
            items: nav_items(&active),
            active,
            user: SidebarUser::new("Ada Lovelace")
                .email("ada@example.com")
                .pressable(true),
            last_effect: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(SidebarEvent::Intent(intent)) => self
                .sidebar
                .reduce(intent, &SidebarCtx::default())
                .map(sidebar_event),
            Message::Sidebar(SidebarEvent::Effect(effect)) => {
                log::info!("sidebar effect: {effect:?}");
                if let SidebarEffect::ItemActivated { id } = &effect {
                    self.active = id.clone();
                    self.items = nav_items(&self.active);
                }
                self.last_effect = Some(format!("{effect:?}"));
                Task::none()
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let theme = ThemeProps::new(self.themes.current());
        let vm = self.sidebar.vm();
        let props = SidebarViewProps {
            vm,
            items: &self.items,
            theme,
        };

        let slots = SidebarSlots {
            header: Some(
                view::search(self.sidebar.search(), vm, theme)
                    .map(sidebar_intent),
            ),
            footer: Some(view::user(&self.user, vm, theme).map(sidebar_intent)),
        };

        let context = self.sidebar.handle();
        let menu_label = if context.is_mobile {
            "Open menu"
        } else {
            "Collapse"
        };
        let content = container(
            column![
                Button::new(menu_label)
                    .variant(ButtonVariant::Secondary)
                    .on_press(sidebar_intent(context.toggle()))
                    .view(theme),
                text(format!("Active: {}", self.active)).size(20),
                text(
                    self.last_effect
                        .clone()
                        .unwrap_or_else(|| String::from("No effects yet")),
                )
                .size(13),
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill);

        view::layout(props, slots, content, sidebar_intent)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.sidebar.subscription().map(sidebar_intent)
    }

    fn theme(&self) -> iced::Theme {
        self.themes.iced_theme()
    }
}

fn nav_items(active: &str) -> SidebarItems {
    let item = |id: &str, label: &str, icon: &'static [u8]| {
        SidebarItem::new(id, label).icon(icon).active(active == id)
    };

    SidebarItems::Grouped(vec![
        SidebarGroup::new(
            None,
            vec![
                item("dashboard", "Dashboard", icons::TRENDING_UP),
                item("alerts", "Alerts", icons::ALERT_TRIANGLE).badge(3),
            ],
        ),
        SidebarGroup::new(
            Some("Account"),
            vec![
                item("docs", "Docs", icons::EXTERNAL_LINK)
                    .href("https://example.com/docs"),
                item("logout", "Sign out", icons::LOG_OUT),
            ],
        ),
    ])
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(Demo::new, Demo::update, Demo::view)
        .title("gp-ui sidebar")
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .run()
}
