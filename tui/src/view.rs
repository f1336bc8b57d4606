use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::AppState;
use crate::constants::{BODY_STAR_COUNT, TITLE_STAR_COUNT};
use crate::deck::SlideKind;
use crate::services::hint_footer::render_hint_footer;
use crate::services::nav_bar::render_nav_bar;
use crate::services::problem_slide::render_problem_slide;
use crate::services::solution_slide::render_solution_slide;
use crate::services::starfield::render_starfield;
use crate::services::title_slide::render_title_slide;
use crate::services::transition::shifted;

/// Layout: [slide area][nav bar][hint footer]. Shared with mouse dispatch so
/// clicks and pixels agree on where the controls are.
pub fn screen_layout(area: Rect, show_hints: bool) -> (Rect, Rect, Rect) {
    let hint_height = u16::from(show_hints);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(hint_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn view(f: &mut Frame, state: &AppState) {
    let (slide_area, bar_area, hint_area) = screen_layout(f.area(), state.show_hints);

    // Starfield first, so slide text always paints over it. The content
    // slides in from the direction of travel; the stars behind it stay put.
    let slide = state.current_slide();
    let density = match &slide.kind {
        SlideKind::Title { .. } => TITLE_STAR_COUNT,
        SlideKind::Problem { .. } | SlideKind::Solution { .. } => BODY_STAR_COUNT,
    };
    render_starfield(
        f.buffer_mut(),
        slide_area,
        state.starfield.layer(density),
        state.tick_frame,
        !state.reduced_motion,
    );

    let content_area = shifted(slide_area, state.transition.offset(slide_area.width));
    match &slide.kind {
        SlideKind::Title { .. } => render_title_slide(f, state, content_area),
        SlideKind::Problem { .. } => render_problem_slide(f, state, content_area),
        SlideKind::Solution { .. } => render_solution_slide(f, state, content_area),
    }

    render_nav_bar(f, state, bar_area);
    if state.show_hints {
        render_hint_footer(f, state, hint_area);
    }
}
