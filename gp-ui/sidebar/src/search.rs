use std::time::{Duration, Instant};

use iced::Subscription;
use iced::widget::Id;

use super::model::COLLAPSE_DURATION_MS;

const FOCUS_TICK_MS: u64 = 25;

/// Delay between expanding the panel and focusing the search input.
pub const SEARCH_FOCUS_DELAY: Duration =
    Duration::from_millis(COLLAPSE_DURATION_MS + 50);

/// Search field state, including a delayed focus request.
#[derive(Debug, Clone)]
pub struct SidebarSearch {
    placeholder: String,
    value: String,
    input_id: Id,
    focus_due: Option<Instant>,
}

impl Default for SidebarSearch {
    fn default() -> Self {
        Self::new("Search...")
    }
}

impl SidebarSearch {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            input_id: Id::unique(),
            focus_due: None,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input_id(&self) -> Id {
        self.input_id.clone()
    }

    pub fn has_pending_focus(&self) -> bool {
        self.focus_due.is_some()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Trimmed value to submit, if any.
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Schedule focus after the expand transition. A newer request
    /// replaces the pending deadline.
    pub(crate) fn schedule_focus(&mut self, now: Instant) {
        self.focus_due = Some(now + SEARCH_FOCUS_DELAY);
    }

    /// Consume the pending request once it is due.
    pub(crate) fn take_due_focus(&mut self, now: Instant) -> bool {
        match self.focus_due {
            Some(due) if now >= due => {
                self.focus_due = None;
                true
            },
            _ => false,
        }
    }

    /// Drop any pending focus; the input is about to go away.
    pub fn unmount(&mut self) {
        if self.focus_due.take().is_some() {
            log::debug!("pending sidebar search focus cancelled");
        }
    }

    /// Ticks only while a focus request is pending.
    pub(crate) fn subscription(&self) -> Subscription<Instant> {
        if self.focus_due.is_some() {
            iced::time::every(Duration::from_millis(FOCUS_TICK_MS))
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_is_trimmed_and_blank_is_ignored() {
        let mut search = SidebarSearch::default();
        search.set_value(String::from("   "));
        assert_eq!(search.submission(), None);

        search.set_value(String::from("  invoices  "));
        assert_eq!(search.submission().as_deref(), Some("invoices"));
    }

    #[test]
    fn given_pending_focus_when_delay_not_elapsed_then_focus_waits() {
        let mut search = SidebarSearch::default();
        let start = Instant::now();
        search.schedule_focus(start);

        assert!(!search.take_due_focus(start + Duration::from_millis(100)));
        assert!(search.take_due_focus(start + SEARCH_FOCUS_DELAY));
        assert!(!search.has_pending_focus());
    }

    #[test]
    fn given_pending_focus_when_unmounted_then_focus_never_fires() {
        let mut search = SidebarSearch::default();
        let start = Instant::now();
        search.schedule_focus(start);

        search.unmount();

        assert!(!search.take_due_focus(start + Duration::from_secs(1)));
    }

    #[test]
    fn given_second_request_when_first_due_then_only_latest_deadline_counts() {
        let mut search = SidebarSearch::default();
        let start = Instant::now();
        search.schedule_focus(start);
        search.schedule_focus(start + Duration::from_millis(200));

        assert!(!search.take_due_focus(start + SEARCH_FOCUS_DELAY));
        assert!(search.take_due_focus(
            start + Duration::from_millis(200) + SEARCH_FOCUS_DELAY
        ));
    }
}
