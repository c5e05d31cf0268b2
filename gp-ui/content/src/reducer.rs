use gp_ui_components::{is_escape, resized_width};
use iced::Task;

use super::event::{ContentEffect, ContentEvent, ContentIntent};
use super::state::ContentState;

/// Reduce a content intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ContentState,
    event: ContentIntent,
) -> Task<ContentEvent> {
    let was_open = state.is_open();

    match event {
        ContentIntent::Toggle | ContentIntent::TriggerPressed => {
            state.toggle();
        },
        ContentIntent::Close
        | ContentIntent::BackdropPressed
        | ContentIntent::ClosePressed => {
            state.close();
        },
        ContentIntent::Window(event) => {
            if let Some(width) = resized_width(&event) {
                state.apply_viewport_width(width);
            }
        },
        ContentIntent::EscapePressed => {
            if state.close() {
                log::debug!("content drawer closed by escape");
            }
        },
        ContentIntent::Keyboard(event) => {
            if is_escape(&event) {
                return reduce(state, ContentIntent::EscapePressed);
            }
        },
    }

    open_changed(was_open, state.is_open())
}

fn open_changed(was_open: bool, is_open: bool) -> Task<ContentEvent> {
    if was_open == is_open {
        Task::none()
    } else {
        Task::done(ContentEvent::Effect(ContentEffect::SidebarOpenChanged(
            is_open,
        )))
    }
}
