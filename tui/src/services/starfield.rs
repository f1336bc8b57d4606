//! Starfield Backdrop
//!
//! Decorative twinkling stars behind the slide content. Positions and
//! twinkle phases are random per session; generation is isolated behind a
//! seedable RNG so tests stay deterministic. Stars only ever land on blank
//! cells, so slide text always wins.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Fractional position in `[0, 1)`, mapped onto the slide area at draw
    /// time so stars survive terminal resizes.
    pub x: f32,
    pub y: f32,
    /// 0 = faint, 1 = medium, 2 = bright.
    pub magnitude: u8,
    /// Tick offset so the field does not blink in lockstep.
    pub phase: u8,
    /// Twinkle half-cycle length in ticks.
    pub period: u8,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize) -> Self {
        Self::with_rng(&mut rand::rng(), count)
    }

    pub fn from_seed(seed: u64, count: usize) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed), count)
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                magnitude: rng.random_range(0..3),
                phase: rng.random_range(0..64),
                period: rng.random_range(30..90),
            })
            .collect();
        Self { stars }
    }

    /// The `count` first stars; body slides use a sparser layer of the same
    /// field so stars keep their places across slide kinds.
    pub fn layer(&self, count: usize) -> &[Star] {
        &self.stars[..count.min(self.stars.len())]
    }
}

fn glyph_for(star: &Star) -> &'static str {
    match star.magnitude {
        0 => "·",
        1 => "✦",
        _ => "*",
    }
}

fn is_bright(star: &Star, frame: usize) -> bool {
    let period = usize::from(star.period).max(1);
    ((frame + usize::from(star.phase)) / period) % 2 == 0
}

/// Paint stars into the blank cells of `area`. Call after the slide content
/// has been rendered.
pub fn render_starfield(buf: &mut Buffer, area: Rect, stars: &[Star], frame: usize, twinkle: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for star in stars {
        let col = area.x + (star.x * f32::from(area.width - 1)) as u16;
        let row = area.y + (star.y * f32::from(area.height - 1)) as u16;
        let Some(cell) = buf.cell_mut(Position::new(col, row)) else {
            continue;
        };
        if cell.symbol() != " " {
            continue;
        }
        let bright = !twinkle || is_bright(star, frame);
        let color = match (star.magnitude, bright) {
            (_, false) => Color::DarkGray,
            (0, true) => Color::DarkGray,
            (1, true) => Color::Gray,
            (_, true) => Color::White,
        };
        cell.set_symbol(glyph_for(star));
        cell.set_fg(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fields_are_deterministic() {
        let a = Starfield::from_seed(7, 100);
        let b = Starfield::from_seed(7, 100);
        assert_eq!(a.layer(100), b.layer(100));
    }

    #[test]
    fn different_seeds_differ() {
        let a = Starfield::from_seed(1, 100);
        let b = Starfield::from_seed(2, 100);
        assert_ne!(a.layer(100), b.layer(100));
    }

    #[test]
    fn stars_are_generated_in_unit_bounds() {
        let field = Starfield::from_seed(42, 200);
        for star in field.layer(200) {
            assert!((0.0..1.0).contains(&star.x));
            assert!((0.0..1.0).contains(&star.y));
            assert!(star.magnitude < 3);
        }
    }

    #[test]
    fn layer_honors_the_requested_density() {
        let field = Starfield::from_seed(3, 100);
        assert_eq!(field.layer(50).len(), 50);
        assert_eq!(field.layer(500).len(), 100);
    }

    #[test]
    fn stars_never_overwrite_text() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "SPACEGUARD", ratatui::style::Style::default());
        let field = Starfield::from_seed(9, 40);
        render_starfield(&mut buf, area, field.layer(40), 0, true);
        let rendered: String = (0..10)
            .filter_map(|x| buf.cell(Position::new(x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(rendered, "SPACEGUARD");
    }

    #[test]
    fn stars_land_in_blank_cells() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let field = Starfield::from_seed(11, 60);
        render_starfield(&mut buf, area, field.layer(60), 5, false);
        let painted = area
            .positions()
            .filter(|p| buf.cell(*p).map(|c| c.symbol() != " ").unwrap_or(false))
            .count();
        assert!(painted > 0);
    }
}
