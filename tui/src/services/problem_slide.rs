//! Problem Slide Template
//!
//! Red section banner, slide heading, then the warning bullets in authored
//! order, each sliding in on its own stagger delay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::constants::{CONTENT_MAX_WIDTH, ITEM_REVEAL_BASE, PROBLEM_ITEM_STAGGER};
use crate::deck::SlideKind;
use crate::services::transition::{apply_reveal, reveal_at, stagger_delay};

/// A horizontally centered column capped at the content width, with one row
/// of top padding.
pub fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(CONTENT_MAX_WIDTH).saturating_sub(4);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + 1.min(area.height);
    Rect {
        x,
        y,
        width,
        height: area.height.saturating_sub(y - area.y),
    }
}

/// Wrap one bullet into display lines, glyph on the first line, hanging
/// indent on the rest.
pub fn bullet_lines(point: &str, width: usize) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(2).max(10);
    textwrap::wrap(point, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, piece)| {
            let prefix = if i == 0 {
                Span::styled("⚠ ", Style::default().fg(Color::LightRed))
            } else {
                Span::raw("  ")
            };
            Line::from(vec![
                prefix,
                Span::styled(piece.into_owned(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect()
}

pub fn render_problem_slide(f: &mut Frame, state: &AppState, area: Rect) {
    let SlideKind::Problem { heading, points } = &state.current_slide().kind else {
        return;
    };

    let column = centered_column(area);
    let elapsed = state.transition.elapsed();

    let mut lines: Vec<Line> = vec![
        Line::styled(
            "THE PROBLEM",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            *heading,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::default(),
    ];

    for (index, point) in points.iter().enumerate() {
        let reveal = reveal_at(
            elapsed,
            stagger_delay(ITEM_REVEAL_BASE, PROBLEM_ITEM_STAGGER, index),
        );
        for line in bullet_lines(point, column.width as usize) {
            lines.push(apply_reveal(line, reveal));
        }
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), column);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_carry_the_warning_glyph_on_the_first_line_only() {
        let lines = bullet_lines(
            "Astronauts manually inspect oxygen tanks, fire extinguishers, and safety equipment",
            30,
        );
        assert!(lines.len() > 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "⚠ ");
        for line in &lines[1..] {
            assert_eq!(line.spans[0].content.as_ref(), "  ");
        }
    }

    #[test]
    fn wrapped_bullet_text_reassembles_in_order() {
        let point = "Human error risks increase with poor lighting and difficult angles";
        let lines = bullet_lines(point, 24);
        let rebuilt: Vec<String> = lines
            .iter()
            .map(|l| l.spans[1].content.as_ref().to_string())
            .collect();
        assert_eq!(rebuilt.join(" "), point);
    }

    #[test]
    fn column_fits_inside_the_slide_area() {
        let area = Rect::new(0, 0, 200, 40);
        let column = centered_column(area);
        assert!(column.width <= CONTENT_MAX_WIDTH);
        assert!(column.right() <= area.right());
        assert!(column.x >= area.x);
    }

    #[test]
    fn column_survives_a_tiny_terminal() {
        let area = Rect::new(0, 0, 8, 2);
        let column = centered_column(area);
        assert!(column.width <= area.width);
        assert!(column.height <= area.height);
    }
}
