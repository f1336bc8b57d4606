//! Event Routing
//!
//! Applies one `InputEvent` to the app state. Navigation goes through the
//! three state-machine operations; a transition is armed only when the
//! index actually changed, so boundary no-ops never replay the animation.

use ratatui::layout::{Rect, Size};

use crate::app::{AppState, InputEvent, NavigationState};
use crate::services::nav_bar::{NavBarAction, hit_test, nav_bar_layout};
use crate::view::screen_layout;

pub fn update(state: &mut AppState, event: InputEvent, terminal_size: Size) {
    match event {
        InputEvent::NextSlide => navigate(state, NavigationState::advance),
        InputEvent::PrevSlide => navigate(state, NavigationState::retreat),
        InputEvent::JumpTo(target) => {
            // Digit keys can name slides a shorter deck does not have; those
            // presses fall through as if unbound.
            if target < state.deck.len() {
                navigate(state, move |nav| nav.jump_to(target));
            }
        }
        InputEvent::FirstSlide => navigate(state, |nav| nav.jump_to(0)),
        InputEvent::LastSlide => {
            let last = state.deck.len() - 1;
            navigate(state, move |nav| nav.jump_to(last));
        }
        InputEvent::MouseClick(column, row) => handle_mouse_click(state, column, row, terminal_size),
        InputEvent::Resized(_, _) => {
            // Layout is derived from the frame size on the next draw.
        }
        InputEvent::Quit => {
            // Handled by the event loop.
        }
    }
}

fn handle_mouse_click(state: &mut AppState, column: u16, row: u16, terminal_size: Size) {
    let screen = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let (_, bar_area, _) = screen_layout(screen, state.show_hints);
    let layout = nav_bar_layout(bar_area, state.deck.len(), state.nav.current());
    match hit_test(&layout, column, row) {
        Some(NavBarAction::Previous) => navigate(state, NavigationState::retreat),
        Some(NavBarAction::Next) => navigate(state, NavigationState::advance),
        Some(NavBarAction::Dot(index)) => navigate(state, move |nav| nav.jump_to(index)),
        None => {}
    }
}

fn navigate(state: &mut AppState, op: impl FnOnce(&mut NavigationState)) {
    let before = state.nav.current();
    op(&mut state.nav);
    if state.nav.current() != before {
        state.begin_transition();
    }
}
