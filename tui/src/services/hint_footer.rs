use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;

/// One-line footer: key hints on the left, slide position on the right.
pub fn render_hint_footer(f: &mut Frame, state: &AppState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let left_text = "←/→ navigate . 1-9 jump . click the dots . q quit";
    let right_text = format!("slide {}/{}", state.nav.current() + 1, state.deck.len());

    let total_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.chars().count();
    let spacing = total_width.saturating_sub(left_len + right_len);

    let spans = vec![
        Span::styled(left_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(spacing)),
        Span::styled(right_text, Style::default().fg(Color::Gray)),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
