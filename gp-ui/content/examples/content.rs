use env_logger::Env;
use gp_ui_components::{Card, TabItem};
use gp_ui_content::view::{self, ContentPane, ContentViewProps};
use gp_ui_content::{
    ContentArea, ContentEvent, ContentIntent, ContentPaneMaxWidth,
    ContentPosition, ContentSidebarConfig, ContentSidebarWidth,
    SidebarRegistration,
};
use gp_ui_theme::{ColorMode, ThemeManager, ThemeProps};
use iced::widget::{Column, button, column, text};
use iced::{Element, Length, Subscription, Task};

const INITIAL_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone)]
enum Message {
    Content(ContentEvent),
    TabChanged(String),
    SectionPressed(usize),
    ToggleSidebar,
}

fn content_intent(intent: ContentIntent) -> Message {
    Message::Content(ContentEvent::Intent(intent))
}

fn content_event(event: ContentEvent) -> Message {
    Message::Content(event)
}

struct Demo {
    themes: ThemeManager,
    area: ContentArea,
    registration: Option<SidebarRegistration>,
    tabs: Vec<TabItem>,
    active_tab: String,
    section: usize,
}

impl Demo {
    fn new() -> Self {
        let area = ContentArea::new(INITIAL_WIDTH);
        let registration = Some(area.register_sidebar());

        Self {
            themes: ThemeManager::new(ColorMode::Light),
            area,
            registration,
            tabs: vec![
                TabItem::new("overview", "Overview"),
                TabItem::new("settings", "Settings"),
            ],
            active_tab: String::from("overview"),
            section: 0,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Content(ContentEvent::Intent(intent)) => {
                self.area.reduce(intent).map(content_event)
            },
            Message::Content(ContentEvent::Effect(effect)) => {
                log::info!("content effect: {effect:?}");
                Task::none()
            },
            Message::TabChanged(id) => {
                self.active_tab = id;
                Task::none()
            },
            Message::SectionPressed(index) => {
                self.section = index;
                self.area.reduce(ContentIntent::Close).map(content_event)
            },
            Message::ToggleSidebar => {
                self.registration = match self.registration.take() {
                    Some(_) => None,
                    None => Some(self.area.register_sidebar()),
                };
                Task::none()
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let theme = ThemeProps::new(self.themes.current());
        let props = ContentViewProps {
            vm: self.area.vm(),
            config: ContentSidebarConfig::default()
                .width(ContentSidebarWidth::Narrow)
                .position(ContentPosition::Left),
            theme,
        };

        let sections = ["General", "Billing", "Members"]
            .into_iter()
            .enumerate()
            .fold(
                Column::new().spacing(4).padding(12),
                |column, (index, label)| {
                    column.push(
                        button(text(label))
                            .width(Length::Fill)
                            .on_press(Message::SectionPressed(index)),
                    )
                },
            );

        let card = Card::new(
            column![
                text(format!("Tab: {}", self.active_tab)).size(18),
                text(format!("Section: {}", self.section)),
                button(text("Toggle content sidebar"))
                    .on_press(Message::ToggleSidebar),
            ]
            .spacing(12),
        )
        .view(theme);

        let pane = ContentPane::new(card)
        .max_width(ContentPaneMaxWidth::Medium)
        .view(props.vm, theme);

        let body: Element<'_, Message> = if self.area.has_sidebar() {
            view::body(props, sections, pane, content_intent)
        } else {
            pane
        };

        column![
            view::tabs(
                props,
                &self.tabs,
                &self.active_tab,
                Message::TabChanged,
                content_intent,
            ),
            body,
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.area.subscription().map(content_intent)
    }

    fn theme(&self) -> iced::Theme {
        self.themes.iced_theme()
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(Demo::new, Demo::update, Demo::view)
        .title("gp-ui content")
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .run()
}
