use env_logger::Env;
use gp_ui_chart::{
    ChartColors, ColorConfig, ProportionChart, ProportionData,
    ProportionSegment, validate,
};
use gp_ui_components::{Alert, AlertVariant, Card, format_number};
use gp_ui_theme::{ColorMode, ThemeManager, ThemeProps, parse_hex_color};
use iced::widget::{column, text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
enum Message {}

struct Demo {
    themes: ThemeManager,
    tasks: Result<ProportionData, String>,
    broken: Result<ProportionData, String>,
}

impl Demo {
    fn new() -> Self {
        let colors = colors();
        let tasks = validate(
            &[
                ProportionSegment::new("completed", 65.0),
                ProportionSegment::new("in-progress", 25.0),
                ProportionSegment::new("blocked", 0.0),
                ProportionSegment::new("pending", 10.0),
            ],
            &colors,
        )
        .map_err(|err| err.to_string());
        let broken = validate(
            &[
                ProportionSegment::new("completed", 30.0),
                ProportionSegment::new("archived", 70.0),
            ],
            &colors,
        )
        .map_err(|err| err.to_string());

        if let Ok(data) = &tasks {
            log::info!("{}", data.summary(|value| format_number(value, 0)));
        }

        Self {
            themes: ThemeManager::new(ColorMode::Light),
            tasks,
            broken,
        }
    }

    fn update(&mut self, message: Message) {
        match message {}
    }

    fn view(&self) -> Element<'_, Message> {
        let theme = ThemeProps::new(self.themes.current());

        let empty = ProportionData::default();
        column![
            Card::new(chart(&self.tasks, theme)).header(text("Tasks")).view(theme),
            Card::new(chart(&self.broken, theme)).header(text("Broken")).view(theme),
            Card::new(
                ProportionChart::new(&empty, |value| value.to_string())
                    .view(theme)
            )
            .header(text("Empty"))
            .view(theme),
        ]
        .spacing(16)
        .padding(24)
        .width(Length::Fill)
        .into()
    }

    fn theme(&self) -> iced::Theme {
        self.themes.iced_theme()
    }
}

fn chart<'a>(
    data: &Result<ProportionData, String>,
    theme: ThemeProps<'a>,
) -> Element<'a, Message> {
    match data {
        Ok(data) => ProportionChart::new(data, |value| {
            format!("{} items", format_number(value, 0))
        })
        .height(12.0)
        .show_legend(true)
        .view(theme),
        Err(message) => Alert::new(message.clone())
            .variant(AlertVariant::Error)
            .title("Chart unavailable")
            .view(theme),
    }
}

fn colors() -> ChartColors {
    [
        ("completed", "#22c55e", "Completed"),
        ("in-progress", "#3b82f6", "In Progress"),
        ("pending", "#9ca3af", "Pending"),
    ]
    .into_iter()
    .map(|(key, hex, label)| {
        let color = parse_hex_color(hex).unwrap_or(Color::BLACK);
        (key.to_string(), ColorConfig::new(color, label))
    })
    .collect()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(Demo::new, Demo::update, Demo::view)
        .title("gp-ui proportion chart")
        .theme(Demo::theme)
        .run()
}
