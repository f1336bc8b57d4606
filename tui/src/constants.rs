use std::time::Duration;

// ========== Animation Timing ==========
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(33);
pub const SLIDE_TRANSITION: Duration = Duration::from_millis(250);
/// How long a revealed element renders dim before reaching full brightness.
pub const REVEAL_FADE: Duration = Duration::from_millis(120);
pub const TITLE_ENTRANCE_DELAY: Duration = Duration::from_millis(200);
pub const ITEM_REVEAL_BASE: Duration = Duration::from_millis(300);
pub const PROBLEM_ITEM_STAGGER: Duration = Duration::from_millis(100);
pub const SOLUTION_ITEM_STAGGER: Duration = Duration::from_millis(150);

// ========== Starfield ==========
pub const TITLE_STAR_COUNT: usize = 100;
pub const BODY_STAR_COUNT: usize = 50;

// ========== Navigation Bar ==========
pub const PREV_LABEL: &str = "← Previous";
pub const NEXT_LABEL: &str = "Next →";
/// The current slide's dot widens into a bar, the rest stay single dots.
pub const ACTIVE_DOT: &str = "━━━━";
pub const INACTIVE_DOT: &str = "○";
pub const CONTROL_GAP: u16 = 3;
pub const DOT_GAP: u16 = 1;

// ========== Slide Layout ==========
/// Body slides keep their text inside a centered column this wide at most.
pub const CONTENT_MAX_WIDTH: u16 = 90;
