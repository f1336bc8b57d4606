//! Title Slide Template
//!
//! Centered heading block over the dense starfield: spaced-out heading with
//! a three-band color sweep, subheading, attribution lines, and the tagline.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::constants::TITLE_ENTRANCE_DELAY;
use crate::deck::SlideKind;
use crate::services::transition::{Reveal, apply_reveal, reveal_at};

/// Widen a heading with letter spacing, the terminal stand-in for display
/// typography.
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut first = true;
    for c in text.chars() {
        if !first {
            out.push(' ');
        }
        out.push(c);
        first = false;
    }
    out
}

/// Sweep the heading through three color bands, left to right.
fn gradient_spans(text: &str) -> Vec<Span<'static>> {
    const BANDS: [Color; 3] = [Color::LightBlue, Color::LightMagenta, Color::LightRed];
    let chars: Vec<char> = text.chars().collect();
    let band_len = chars.len().div_ceil(BANDS.len()).max(1);
    chars
        .chunks(band_len)
        .zip(BANDS)
        .map(|(chunk, color)| {
            Span::styled(
                chunk.iter().collect::<String>(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

pub fn render_title_slide(f: &mut Frame, state: &AppState, area: Rect) {
    let SlideKind::Title {
        heading,
        subheading,
        team,
        event,
        tagline,
    } = &state.current_slide().kind
    else {
        return;
    };

    let reveal = reveal_at(state.transition.elapsed(), TITLE_ENTRANCE_DELAY);
    if reveal == Reveal::Hidden {
        return;
    }

    let lines: Vec<Line> = [
        Line::from(gradient_spans(&spaced(heading))),
        Line::default(),
        Line::styled(*subheading, Style::default().fg(Color::Gray)),
        Line::default(),
        Line::default(),
        Line::styled(
            *team,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(*event, Style::default().fg(Color::DarkGray)),
        Line::default(),
        Line::styled(
            *tagline,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::ITALIC),
        ),
    ]
    .into_iter()
    .map(|line| apply_reveal(line, reveal))
    .collect();

    let content_height = lines.len() as u16;
    let top_pad = area.height.saturating_sub(content_height) / 2;
    let content = Rect {
        y: area.y + top_pad,
        height: content_height.min(area.height.saturating_sub(top_pad)),
        ..area
    };

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_widens_every_character() {
        assert_eq!(spaced("AI"), "A I");
        assert_eq!(spaced("SPACEGUARD AI"), "S P A C E G U A R D   A I");
    }

    #[test]
    fn gradient_covers_the_whole_heading_in_order() {
        let spans = gradient_spans("SPACEGUARD AI");
        let rebuilt: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, "SPACEGUARD AI");
        assert!(spans.len() <= 3);
    }

    #[test]
    fn gradient_bands_run_blue_to_red() {
        let spans = gradient_spans("SPACEGUARD AI");
        assert_eq!(spans.first().and_then(|s| s.style.fg), Some(Color::LightBlue));
        assert_eq!(spans.last().and_then(|s| s.style.fg), Some(Color::LightRed));
    }
}
