//! Solution Slide Template
//!
//! Green section banner, slide heading, then the feature pairs in authored
//! order laid out as a two-column card grid, each card on its own stagger
//! delay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::constants::{ITEM_REVEAL_BASE, SOLUTION_ITEM_STAGGER};
use crate::deck::{Feature, SlideKind};
use crate::services::problem_slide::centered_column;
use crate::services::transition::{Reveal, reveal_at, stagger_delay};

const CARD_HEIGHT: u16 = 5;
const CARD_GAP: u16 = 2;
const HEADER_HEIGHT: u16 = 5;

/// Rect of the `index`-th feature card inside the grid area.
pub fn card_rect(grid: Rect, index: usize) -> Rect {
    let card_width = grid.width.saturating_sub(CARD_GAP) / 2;
    let column = (index % 2) as u16;
    let row = (index / 2) as u16;
    Rect {
        x: grid.x + column * (card_width + CARD_GAP),
        y: grid.y + row * (CARD_HEIGHT + 1),
        width: card_width,
        height: CARD_HEIGHT,
    }
}

fn render_card(f: &mut Frame, feature: &Feature, reveal: Reveal, area: Rect) {
    if reveal == Reveal::Hidden || area.width < 4 {
        return;
    }
    let dim = reveal == Reveal::Entering;
    let border_style = if dim {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Blue)
    };
    let name_style = if dim {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    };
    let body_style = if dim {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Gray)
    };

    // Cards sit on top of the starfield, so blank out their footprint first.
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let card = Paragraph::new(vec![
        Line::styled(feature.name, name_style),
        Line::styled(feature.description, body_style),
    ])
    .wrap(Wrap { trim: false })
    .block(block);
    f.render_widget(card, area);
}

pub fn render_solution_slide(f: &mut Frame, state: &AppState, area: Rect) {
    let SlideKind::Solution { heading, features } = &state.current_slide().kind else {
        return;
    };

    let column = centered_column(area);
    let elapsed = state.transition.elapsed();

    let header = vec![
        Line::styled(
            "OUR SOLUTION",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            *heading,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    f.render_widget(
        Paragraph::new(header),
        Rect {
            height: HEADER_HEIGHT.min(column.height),
            ..column
        },
    );

    let grid = Rect {
        y: column.y + HEADER_HEIGHT.min(column.height),
        height: column.height.saturating_sub(HEADER_HEIGHT),
        ..column
    };
    for (index, feature) in features.iter().enumerate() {
        let rect = card_rect(grid, index);
        if rect.bottom() > grid.bottom() {
            // Cards that do not fit the current terminal height are dropped
            // instead of overflowing the nav bar.
            continue;
        }
        let reveal = reveal_at(
            elapsed,
            stagger_delay(ITEM_REVEAL_BASE, SOLUTION_ITEM_STAGGER, index),
        );
        render_card(f, feature, reveal, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_fill_two_columns_in_authored_order() {
        let grid = Rect::new(10, 10, 80, 20);
        let first = card_rect(grid, 0);
        let second = card_rect(grid, 1);
        let third = card_rect(grid, 2);
        assert_eq!(first.y, second.y);
        assert!(second.x > first.x);
        assert_eq!(third.x, first.x);
        assert!(third.y > first.y);
    }

    #[test]
    fn cards_do_not_overlap() {
        let grid = Rect::new(0, 0, 80, 20);
        let first = card_rect(grid, 0);
        let second = card_rect(grid, 1);
        assert!(first.right() < second.x);
    }

    #[test]
    fn cards_stay_inside_the_grid_width() {
        let grid = Rect::new(5, 0, 61, 20);
        for index in 0..4 {
            assert!(card_rect(grid, index).right() <= grid.right());
        }
    }
}
