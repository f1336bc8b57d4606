//! Slide Navigation State
//!
//! The only mutable state in the presenter: a bounded index into the deck
//! plus the direction of the last move. All mutation goes through the three
//! operations below; boundary moves are silent no-ops, never errors.

/// Orientation of the last navigation move. Only consumed by the transition
/// animation; navigation correctness never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    current: usize,
    last_direction: Direction,
    slide_count: usize,
}

impl NavigationState {
    /// Starts at the first slide. `slide_count` is the fixed deck length and
    /// must be non-zero (decks are non-empty by construction).
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "navigation requires at least one slide");
        Self {
            current: 0,
            last_direction: Direction::Forward,
            slide_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current == self.slide_count - 1
    }

    /// Saturating step forward. No-op on the last slide.
    pub fn advance(&mut self) {
        if !self.at_last() {
            self.last_direction = Direction::Forward;
            self.current += 1;
        }
    }

    /// Saturating step backward. No-op on the first slide.
    pub fn retreat(&mut self) {
        if !self.at_first() {
            self.last_direction = Direction::Backward;
            self.current -= 1;
        }
    }

    /// Jump to an explicit index. Callers derive `target` from deck geometry
    /// (progress dots, digit keys), so out-of-range values are a programming
    /// error; they are ignored rather than clamped so a bad caller can never
    /// land on a slide it did not name.
    pub fn jump_to(&mut self, target: usize) {
        if target >= self.slide_count {
            log::warn!(
                "ignoring jump to slide {} in a {}-slide deck",
                target,
                self.slide_count
            );
            return;
        }
        if target > self.current {
            self.last_direction = Direction::Forward;
        } else if target < self.current {
            self.last_direction = Direction::Backward;
        }
        self.current = target;
    }
}
