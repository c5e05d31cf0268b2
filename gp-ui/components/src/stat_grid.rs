use std::time::{Duration, Instant};

use iced::widget::{Column, button, container, row, text};
use iced::{Color, Element, Font, Length, Subscription, Task, alignment};

use gp_ui_theme::{IcedColorPalette, ThemeProps, icons};

use crate::card::Card;
use crate::format::{ValueFormat, format_value, is_numeric};
use crate::style::{divider, svg_icon};

/// How long the copied check stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);
const COPY_FEEDBACK_TICK_MS: u64 = 250;
const LABEL_COLUMN_WIDTH: f32 = 140.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatStatus {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
}

impl StatStatus {
    fn color(self, palette: &IcedColorPalette) -> Color {
        match self {
            StatStatus::Default => palette.foreground,
            StatStatus::Success => palette.success,
            StatStatus::Warning => palette.warning,
            StatStatus::Error => palette.danger,
            StatStatus::Info => palette.info,
        }
    }
}

/// One label/value row. Labels identify rows and must be unique per grid.
#[derive(Debug, Clone, PartialEq)]
pub struct StatItem {
    label: String,
    value: String,
    icon: Option<&'static [u8]>,
    status: StatStatus,
    format: Option<ValueFormat>,
    copyable: bool,
    copy_value: Option<String>,
    pressable: bool,
}

impl StatItem {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            icon: None,
            status: StatStatus::default(),
            format: None,
            copyable: false,
            copy_value: None,
            pressable: false,
        }
    }

    pub fn icon(mut self, icon: &'static [u8]) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn status(mut self, status: StatStatus) -> Self {
        self.status = status;
        self
    }

    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn copyable(mut self, copyable: bool) -> Self {
        self.copyable = copyable;
        self
    }

    /// Copy this text instead of the raw value.
    pub fn copy_value(mut self, value: impl Into<String>) -> Self {
        self.copy_value = Some(value.into());
        self
    }

    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn formatted_value(&self) -> String {
        format_value(&self.value, self.format)
    }

    pub fn value_to_copy(&self) -> &str {
        self.copy_value.as_deref().unwrap_or(&self.value)
    }

    pub fn is_copyable(&self) -> bool {
        self.copyable
    }
}

/// Request emitted when a copy button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub label: String,
    pub value: String,
}

/// Tracks which row was copied last and clears it after a delay.
///
/// Dropping the feedback (or the grid that owns it) also drops its timer
/// subscription.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    copied: Option<(String, Instant)>,
}

impl CopyFeedback {
    /// Write the value to the clipboard and show the copied check.
    pub fn copy<Message>(&mut self, request: CopyRequest) -> Task<Message>
    where
        Message: Send + 'static,
    {
        self.record(request.label, Instant::now());
        iced::clipboard::write(request.value)
    }

    pub fn is_copied(&self, label: &str) -> bool {
        self.copied
            .as_ref()
            .map(|(copied, _)| copied == label)
            .unwrap_or(false)
    }

    /// Clear the feedback once it expired. Returns true when cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .copied
            .as_ref()
            .map(|(_, at)| now.duration_since(*at) >= COPY_FEEDBACK_DURATION)
            .unwrap_or(false);
        if expired {
            self.copied = None;
        }
        expired
    }

    /// Timer ticks while a copied check is visible.
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.copied.is_some() {
            iced::time::every(Duration::from_millis(COPY_FEEDBACK_TICK_MS))
        } else {
            Subscription::none()
        }
    }

    fn record(&mut self, label: String, at: Instant) {
        self.copied = Some((label, at));
    }
}

type CopyAction<'a, Message> = dyn Fn(CopyRequest) -> Message + 'a;
type PressAction<'a, Message> = dyn Fn(String) -> Message + 'a;

/// Two-column key/value grid.
pub struct StatGrid<'a, Message> {
    items: &'a [StatItem],
    feedback: Option<&'a CopyFeedback>,
    on_copy: Option<Box<CopyAction<'a, Message>>>,
    on_press: Option<Box<PressAction<'a, Message>>>,
    as_card: bool,
}

impl<'a, Message: Clone + 'a> StatGrid<'a, Message> {
    pub fn new(items: &'a [StatItem]) -> Self {
        Self {
            items,
            feedback: None,
            on_copy: None,
            on_press: None,
            as_card: false,
        }
    }

    pub fn feedback(mut self, feedback: &'a CopyFeedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn on_copy(
        mut self,
        on_copy: impl Fn(CopyRequest) -> Message + 'a,
    ) -> Self {
        self.on_copy = Some(Box::new(on_copy));
        self
    }

    /// Emit the row label when a pressable value is clicked.
    pub fn on_press(mut self, on_press: impl Fn(String) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    pub fn as_card(mut self, as_card: bool) -> Self {
        self.as_card = as_card;
        self
    }

    pub fn view(self, theme: ThemeProps<'a>) -> Element<'a, Message> {
        let palette = *theme.palette();
        let mut rows = Column::new().width(Length::Fill);

        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                rows = rows.push(divider(palette.border));
            }
            rows = rows.push(self.row(item, &palette));
        }

        if self.as_card {
            Card::new(rows).padding(8.0).view(theme)
        } else {
            rows.into()
        }
    }

    fn row(
        &self,
        item: &'a StatItem,
        palette: &IcedColorPalette,
    ) -> Element<'a, Message> {
        let formatted = item.formatted_value();
        let font = if is_numeric(&formatted) {
            Font::MONOSPACE
        } else {
            Font::DEFAULT
        };
        let value_color = item.status.color(palette);

        let label = container(
            text(item.label.clone())
                .size(12)
                .color(palette.muted_foreground),
        )
        .width(Length::Fixed(LABEL_COLUMN_WIDTH))
        .padding([8, 0]);

        let mut value_row =
            row![].spacing(6).align_y(alignment::Vertical::Center);
        if let Some(icon) = item.icon {
            let icon_color = match item.status {
                StatStatus::Default => palette.subtle_foreground,
                status => status.color(palette),
            };
            value_row = value_row.push(svg_icon(icon, 14.0, icon_color));
        }

        let value_text = text(formatted).size(14).font(font).color(value_color);
        match (&self.on_press, item.pressable) {
            (Some(on_press), true) => {
                value_row = value_row.push(
                    button(value_text)
                        .on_press(on_press(item.label.clone()))
                        .padding(0)
                        .style(|_, _| button::Style {
                            background: None,
                            ..Default::default()
                        }),
                );
            },
            _ => value_row = value_row.push(value_text),
        }

        if let (Some(on_copy), true) = (&self.on_copy, item.copyable) {
            let copied = self
                .feedback
                .map(|feedback| feedback.is_copied(&item.label))
                .unwrap_or(false);
            let (icon, color) = if copied {
                (icons::CHECK, palette.success)
            } else {
                (icons::COPY, palette.subtle_foreground)
            };
            let request = CopyRequest {
                label: item.label.clone(),
                value: item.value_to_copy().to_string(),
            };
            value_row = value_row.push(
                button(svg_icon(icon, 14.0, color))
                    .on_press(on_copy(request))
                    .padding(4)
                    .style(|_, _| button::Style {
                        background: None,
                        ..Default::default()
                    }),
            );
        }

        row![label, container(value_row).padding([8, 0]).width(Length::Fill)]
            .spacing(12)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}
