mod events;
mod navigation;

pub use events::InputEvent;
pub use navigation::{Direction, NavigationState};

use std::time::Duration;

use crate::constants::{DEFAULT_TICK_RATE, TITLE_STAR_COUNT};
use crate::deck::{Deck, Slide};
use crate::services::starfield::Starfield;
use crate::services::transition::Transition;

/// Presenter behavior knobs, resolved by the CLI from config file, env, and
/// flags before the TUI starts.
#[derive(Debug, Clone)]
pub struct PresenterOptions {
    /// 0-based index of the slide to open on. Validated by the caller.
    pub start_index: usize,
    /// Pins every transition at its final frame and stops the twinkle.
    pub reduced_motion: bool,
    pub tick_rate: Duration,
    pub show_hints: bool,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            start_index: 0,
            reduced_motion: false,
            tick_rate: DEFAULT_TICK_RATE,
            show_hints: true,
        }
    }
}

pub struct AppState {
    // ========== Deck & Navigation ==========
    pub deck: Deck,
    pub nav: NavigationState,

    // ========== Animation State ==========
    pub transition: Transition,
    pub starfield: Starfield,
    pub tick_frame: usize,
    pub reduced_motion: bool,

    // ========== Chrome ==========
    pub show_hints: bool,
}

impl AppState {
    pub fn new(deck: Deck, options: &PresenterOptions) -> Self {
        let mut nav = NavigationState::new(deck.len());
        if options.start_index < deck.len() {
            nav.jump_to(options.start_index);
        }
        Self {
            deck,
            nav,
            // The first slide appears without an entry animation.
            transition: Transition::settled(Direction::Forward),
            starfield: Starfield::new(TITLE_STAR_COUNT),
            tick_frame: 0,
            reduced_motion: options.reduced_motion,
            show_hints: options.show_hints,
        }
    }

    /// The slide under the cursor. The navigation invariant keeps the index
    /// in bounds for the lifetime of the session.
    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides()[self.nav.current()]
    }

    /// Arm the entry animation for the slide we just navigated to.
    pub fn begin_transition(&mut self) {
        self.transition = if self.reduced_motion {
            Transition::settled(self.nav.last_direction())
        } else {
            Transition::start(self.nav.last_direction())
        };
    }

    pub fn on_tick(&mut self) {
        self.tick_frame = self.tick_frame.wrapping_add(1);
    }
}
