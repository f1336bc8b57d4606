mod app;
mod constants;
mod deck;
mod event;
mod event_loop;
mod terminal;
mod view;

mod services;

pub use app::{AppState, Direction, InputEvent, NavigationState, PresenterOptions};
pub use deck::{Deck, Feature, Slide, SlideKind, spaceguard_deck};
pub use event::map_crossterm_event_to_input_event;
pub use event_loop::run_tui;
pub use terminal::TerminalGuard;
pub use view::view;
