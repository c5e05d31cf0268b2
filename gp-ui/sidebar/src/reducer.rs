use std::time::Instant;

use gp_ui_components::{is_escape, resized_width};
use iced::Task;

use super::event::{SearchIntent, SidebarEffect, SidebarEvent, SidebarIntent};
use super::search::SidebarSearch;
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub struct SidebarCtx {
    pub now: Instant,
}

impl Default for SidebarCtx {
    fn default() -> Self {
        Self {
            now: Instant::now(),
        }
    }
}

/// Follow-up requested by a single reduction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Followup {
    Idle,
    Effect(SidebarEffect),
    FocusSearch,
}

impl Followup {
    #[cfg(test)]
    pub(crate) fn effect(self) -> Option<SidebarEffect> {
        match self {
            Followup::Effect(effect) => Some(effect),
            Followup::Idle | Followup::FocusSearch => None,
        }
    }
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    search: &mut SidebarSearch,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    match apply(state, search, event, ctx) {
        Followup::Idle => Task::none(),
        Followup::Effect(effect) => Task::done(SidebarEvent::Effect(effect)),
        Followup::FocusSearch => {
            iced::widget::operation::focus(search.input_id())
        },
    }
}

/// Update state and pick the follow-up without building a task.
pub(crate) fn apply(
    state: &mut SidebarState,
    search: &mut SidebarSearch,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Followup {
    match event {
        SidebarIntent::Toggle => collapsed_changed(state.toggle()),
        SidebarIntent::SetOpen(open) => collapsed_changed(state.set_open(open)),
        SidebarIntent::ToggleCollapsed => {
            collapsed_changed(state.toggle_collapsed())
        },
        SidebarIntent::ItemPressed { id, href } => {
            if state.is_mobile() {
                state.close_mobile();
            }
            Followup::Effect(item_effect(id, href))
        },
        SidebarIntent::UserPressed => {
            Followup::Effect(SidebarEffect::UserActivated)
        },
        SidebarIntent::BackdropPressed | SidebarIntent::ClosePressed => {
            if state.is_mobile() {
                state.close_mobile();
            }
            Followup::Idle
        },
        SidebarIntent::Window(event) => {
            if let Some(width) = resized_width(&event) {
                state.apply_viewport_width(width);
            }
            Followup::Idle
        },
        SidebarIntent::EscapePressed => {
            if state.is_mobile() && state.close_mobile() {
                log::debug!("sidebar drawer closed by escape");
            }
            Followup::Idle
        },
        SidebarIntent::Keyboard(event) => {
            if is_escape(&event) {
                apply(state, search, SidebarIntent::EscapePressed, ctx)
            } else {
                Followup::Idle
            }
        },
        SidebarIntent::Search(intent) => {
            apply_search(state, search, intent, ctx)
        },
    }
}

fn apply_search(
    state: &mut SidebarState,
    search: &mut SidebarSearch,
    intent: SearchIntent,
    ctx: &SidebarCtx,
) -> Followup {
    match intent {
        SearchIntent::Changed(value) => {
            search.set_value(value);
            Followup::Idle
        },
        SearchIntent::Submitted => match search.submission() {
            Some(query) => {
                Followup::Effect(SidebarEffect::SearchSubmitted(query))
            },
            None => Followup::Idle,
        },
        SearchIntent::CollapsedPressed => {
            let reported = state.set_open(true);
            search.schedule_focus(ctx.now);
            collapsed_changed(reported)
        },
        SearchIntent::FocusTick(now) => {
            if search.take_due_focus(now) {
                Followup::FocusSearch
            } else {
                Followup::Idle
            }
        },
    }
}

/// Links navigate; items without a target are reported by id.
fn item_effect(id: String, href: Option<String>) -> SidebarEffect {
    match href {
        Some(href) => SidebarEffect::Navigate { href },
        None => SidebarEffect::ItemActivated { id },
    }
}

fn collapsed_changed(reported: Option<bool>) -> Followup {
    match reported {
        Some(collapsed) => {
            Followup::Effect(SidebarEffect::CollapsedChanged(collapsed))
        },
        None => Followup::Idle,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::SidebarConfig;
    use crate::search::SEARCH_FOCUS_DELAY;

    fn mounted(
        config: SidebarConfig,
        width: f32,
    ) -> (SidebarState, SidebarSearch) {
        (SidebarState::new(config, width), SidebarSearch::default())
    }

    fn item(id: &str, href: Option<&str>) -> SidebarIntent {
        SidebarIntent::ItemPressed {
            id: id.to_string(),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn given_controlled_desktop_when_toggled_then_owner_is_asked_to_collapse() {
        let (mut state, mut search) = mounted(
            SidebarConfig {
                collapsed: Some(false),
                ..SidebarConfig::default()
            },
            1280.0,
        );
        let ctx = SidebarCtx::default();

        let followup =
            apply(&mut state, &mut search, SidebarIntent::Toggle, &ctx);

        assert_eq!(
            followup.effect(),
            Some(SidebarEffect::CollapsedChanged(true))
        );
        // The owner has not answered yet.
        assert!(state.is_open());
    }

    #[test]
    fn given_uncontrolled_desktop_when_set_open_then_change_is_reported() {
        let (mut state, mut search) =
            mounted(SidebarConfig::default(), 1280.0);

        let followup = apply(
            &mut state,
            &mut search,
            SidebarIntent::SetOpen(false),
            &SidebarCtx::default(),
        );

        assert_eq!(
            followup,
            Followup::Effect(SidebarEffect::CollapsedChanged(true))
        );
        assert!(state.is_collapsed());
    }

    #[test]
    fn given_mobile_when_toggled_then_nothing_is_reported() {
        let (mut state, mut search) = mounted(SidebarConfig::default(), 500.0);

        let followup = apply(
            &mut state,
            &mut search,
            SidebarIntent::Toggle,
            &SidebarCtx::default(),
        );

        assert_eq!(followup, Followup::Idle);
        assert!(state.is_mobile_open());
    }

    #[test]
    fn given_item_with_href_when_pressed_then_navigate_wins() {
        let (mut state, mut search) =
            mounted(SidebarConfig::default(), 1280.0);
        let ctx = SidebarCtx::default();

        let linked =
            apply(&mut state, &mut search, item("docs", Some("/docs")), &ctx);
        let plain = apply(&mut state, &mut search, item("home", None), &ctx);

        assert_eq!(
            linked.effect(),
            Some(SidebarEffect::Navigate {
                href: String::from("/docs"),
            })
        );
        assert_eq!(
            plain.effect(),
            Some(SidebarEffect::ItemActivated {
                id: String::from("home"),
            })
        );
    }

    #[test]
    fn given_blank_search_when_submitted_then_nothing_is_reported() {
        let (mut state, mut search) =
            mounted(SidebarConfig::default(), 1280.0);
        let ctx = SidebarCtx::default();
        let submit = || SidebarIntent::Search(SearchIntent::Submitted);

        assert_eq!(
            apply(&mut state, &mut search, submit(), &ctx),
            Followup::Idle
        );

        search.set_value(String::from(" reports "));
        assert_eq!(
            apply(&mut state, &mut search, submit(), &ctx).effect(),
            Some(SidebarEffect::SearchSubmitted(String::from("reports")))
        );
    }

    #[test]
    fn given_collapsed_search_when_pressed_then_focus_follows_after_delay() {
        let (mut state, mut search) = mounted(
            SidebarConfig {
                default_collapsed: true,
                ..SidebarConfig::default()
            },
            1280.0,
        );
        let start = Instant::now();
        let ctx = SidebarCtx { now: start };

        let pressed = apply(
            &mut state,
            &mut search,
            SidebarIntent::Search(SearchIntent::CollapsedPressed),
            &ctx,
        );
        assert_eq!(
            pressed.effect(),
            Some(SidebarEffect::CollapsedChanged(false))
        );

        let early = SidebarIntent::Search(SearchIntent::FocusTick(
            start + Duration::from_millis(10),
        ));
        assert_eq!(
            apply(&mut state, &mut search, early, &ctx),
            Followup::Idle
        );

        let due = SidebarIntent::Search(SearchIntent::FocusTick(
            start + SEARCH_FOCUS_DELAY,
        ));
        assert_eq!(
            apply(&mut state, &mut search, due, &ctx),
            Followup::FocusSearch
        );
    }
}
