//! Slide Transition Engine
//!
//! Fire-and-forget interpolation between two slides. A transition records
//! the navigation direction and a start instant; everything else is a pure
//! function of elapsed time, so the curves are testable without a clock.
//! Navigation correctness never depends on anything in this module.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;

use crate::app::Direction;
use crate::constants::{REVEAL_FADE, SLIDE_TRANSITION};

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    direction: Direction,
    started: Instant,
    animate: bool,
}

impl Transition {
    /// A transition that plays from the beginning.
    pub fn start(direction: Direction) -> Self {
        Self {
            direction,
            started: Instant::now(),
            animate: true,
        }
    }

    /// A transition that is already at its final frame (initial slide,
    /// reduced motion).
    pub fn settled(direction: Direction) -> Self {
        Self {
            direction,
            started: Instant::now(),
            animate: false,
        }
    }

    /// Time since the slide was entered. Drives the staggered reveals.
    pub fn elapsed(&self) -> Duration {
        if self.animate {
            self.started.elapsed()
        } else {
            // Settled transitions behave as if they finished long ago.
            Duration::MAX
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.animate {
            progress_at(self.started.elapsed())
        } else {
            1.0
        }
    }

    /// Horizontal entry offset for the slide content at the current frame.
    pub fn offset(&self, width: u16) -> i32 {
        entry_offset(self.progress(), self.direction, width)
    }
}

/// Eased progress for a given elapsed time, clamped to `[0, 1]`.
pub fn progress_at(elapsed: Duration) -> f32 {
    let t = elapsed.as_secs_f32() / SLIDE_TRANSITION.as_secs_f32();
    ease_out(t.clamp(0.0, 1.0))
}

/// Cubic ease-out: fast entry, soft landing.
pub fn ease_out(t: f32) -> f32 {
    let inverted = 1.0 - t;
    1.0 - inverted * inverted * inverted
}

/// Where the slide content sits relative to its resting position: positive
/// means shifted toward the right edge. Forward navigation enters from the
/// right, backward from the left.
pub fn entry_offset(progress: f32, direction: Direction, width: u16) -> i32 {
    let remaining = ((1.0 - progress.clamp(0.0, 1.0)) * f32::from(width)) as i32;
    match direction {
        Direction::Forward => remaining,
        Direction::Backward => -remaining,
    }
}

/// Shift a rect horizontally inside its own bounds, clipping the side the
/// content is still sliding in from.
pub fn shifted(area: Rect, dx: i32) -> Rect {
    if dx >= 0 {
        let dx = u16::try_from(dx).unwrap_or(u16::MAX).min(area.width);
        Rect {
            x: area.x + dx,
            width: area.width - dx,
            ..area
        }
    } else {
        let dx = u16::try_from(-dx).unwrap_or(u16::MAX).min(area.width);
        Rect {
            width: area.width - dx,
            ..area
        }
    }
}

/// Visibility of a staggered element at a point in its entrance timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    /// Rendered dim for one short window, standing in for the opacity fade.
    Entering,
    Shown,
}

pub fn reveal_at(elapsed: Duration, delay: Duration) -> Reveal {
    if elapsed < delay {
        Reveal::Hidden
    } else if elapsed < delay.saturating_add(REVEAL_FADE) {
        Reveal::Entering
    } else {
        Reveal::Shown
    }
}

/// Entrance delay for the `index`-th staggered element of a slide body.
pub fn stagger_delay(base: Duration, step: Duration, index: usize) -> Duration {
    base.saturating_add(step.saturating_mul(index as u32))
}

/// Apply a reveal state to a rendered line. Hidden elements keep their slot
/// as a blank line so the layout never jumps while items appear.
pub fn apply_reveal(line: Line<'_>, reveal: Reveal) -> Line<'_> {
    match reveal {
        Reveal::Hidden => Line::default(),
        Reveal::Entering => line.patch_style(Modifier::DIM),
        Reveal::Shown => line,
    }
}
