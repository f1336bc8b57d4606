//! Navigation Bar
//!
//! Previous/Next controls and one progress dot per slide, centered at the
//! bottom of the screen. The same layout function feeds rendering and mouse
//! hit-testing, so a dot click always resolves to an index that exists.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::constants::{ACTIVE_DOT, CONTROL_GAP, DOT_GAP, INACTIVE_DOT, NEXT_LABEL, PREV_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarLayout {
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarAction {
    Previous,
    Next,
    Dot(usize),
}

fn label_width(label: &str) -> u16 {
    label.chars().count() as u16
}

fn dot_width(index: usize, current: usize) -> u16 {
    if index == current {
        label_width(ACTIVE_DOT)
    } else {
        label_width(INACTIVE_DOT)
    }
}

/// Control rects for a bar drawn in the middle row of `area`.
pub fn nav_bar_layout(area: Rect, slide_count: usize, current: usize) -> NavBarLayout {
    let row = area.y + area.height / 2;
    let prev_w = label_width(PREV_LABEL);
    let next_w = label_width(NEXT_LABEL);
    let dots_w: u16 = (0..slide_count).map(|i| dot_width(i, current)).sum::<u16>()
        + DOT_GAP * slide_count.saturating_sub(1) as u16;
    let total = prev_w + CONTROL_GAP + dots_w + CONTROL_GAP + next_w;
    let start_x = area.x + area.width.saturating_sub(total) / 2;

    let prev = Rect::new(start_x, row, prev_w, 1);
    let mut x = start_x + prev_w + CONTROL_GAP;
    let mut dots = Vec::with_capacity(slide_count);
    for i in 0..slide_count {
        let w = dot_width(i, current);
        dots.push(Rect::new(x, row, w, 1));
        x += w + DOT_GAP;
    }
    // Drop the trailing dot gap before placing Next.
    let next_x = x - DOT_GAP + CONTROL_GAP;
    let next = Rect::new(next_x, row, next_w, 1);

    NavBarLayout { prev, next, dots }
}

pub fn hit_test(layout: &NavBarLayout, column: u16, row: u16) -> Option<NavBarAction> {
    let position = Position::new(column, row);
    if layout.prev.contains(position) {
        return Some(NavBarAction::Previous);
    }
    if layout.next.contains(position) {
        return Some(NavBarAction::Next);
    }
    layout
        .dots
        .iter()
        .position(|dot| dot.contains(position))
        .map(NavBarAction::Dot)
}

pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let layout = nav_bar_layout(area, state.deck.len(), state.nav.current());

    let prev_style = if state.nav.at_first() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Gray)
    };
    let next_style = if state.nav.at_last() {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Gray)
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(PREV_LABEL, prev_style))),
        layout.prev,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(NEXT_LABEL, next_style))),
        layout.next,
    );

    for (index, dot) in layout.dots.iter().enumerate() {
        let (glyph, style) = if index == state.nav.current() {
            (ACTIVE_DOT, Style::default().fg(Color::LightBlue))
        } else {
            (INACTIVE_DOT, Style::default().fg(Color::DarkGray))
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(glyph, style))), *dot);
    }
}
