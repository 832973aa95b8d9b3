// File: crates/dotplan-core/src/anchor.rs
// Summary: Text anchoring: draw origins for cell-centered, on-line, right-justified,
// letter-spaced and rotated title text.

use crate::canvas::{TextMeasure, TextStyle};
use crate::types::{Point, PT_PER_MM};

/// Ascent as a fraction of the font size, used for centering glyphs inside a cell.
pub const CELL_ASCENT: f32 = 0.8;
/// Descent as a fraction of the font size.
pub const CELL_DESCENT: f32 = 0.2;
/// Downward nudge applied to cell-centered text so digits sit optically centered.
pub const TEXT_VERTICAL_ADJUST: f32 = 0.5 * PT_PER_MM;

/// Line text height ratio for the calendar spreads (cap-height approximation).
pub const CAP_HEIGHT: f32 = 0.8;
/// Line text height ratio for the tracker pages (full em box).
pub const EM_BOX: f32 = 1.0;

/// How much of the font size counts as the text's height when centering on a rule.
/// The two layouts were tuned separately; both ratios are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalFit {
    CapHeight,
    EmBox,
}

impl VerticalFit {
    pub const fn ratio(self) -> f32 {
        match self {
            VerticalFit::CapHeight => CAP_HEIGHT,
            VerticalFit::EmBox => EM_BOX,
        }
    }
}

/// Placement of a single string against a target point. Letter spacing across cells is
/// not a variant: it yields one origin per glyph, and [`letter_spaced`] builds it from
/// `CenteredInCell` one spacing apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    /// Centered in the spacing-sized cell whose bottom-left dot is the target.
    CenteredInCell,
    /// Starts at the target x, centered in the band above the rule at target y.
    OnLine(VerticalFit),
    /// Ends exactly at the target x, vertically as `OnLine`.
    RightJustified(VerticalFit),
}

/// Baseline y for text centered in the band `[line_y, line_y + spacing]`.
pub fn line_baseline(line_y: f32, spacing: f32, size: f32, fit: VerticalFit) -> f32 {
    line_y + (spacing - size * fit.ratio()) / 2.0
}

/// Draw origin for `text` placed against `target` with the given alignment.
pub fn place<M: TextMeasure + ?Sized>(
    text: &str,
    measure: &M,
    style: &TextStyle,
    target: Point,
    mode: Alignment,
    spacing: f32,
) -> Point {
    match mode {
        Alignment::CenteredInCell => {
            let width = measure.text_width(text, style.font, style.size);
            let ascent = style.size * CELL_ASCENT;
            let descent = style.size * CELL_DESCENT;
            let height = ascent + descent;
            Point::new(
                target.x + (spacing - width) / 2.0,
                target.y + (spacing - height) / 2.0 + descent - TEXT_VERTICAL_ADJUST,
            )
        }
        Alignment::OnLine(fit) => Point::new(target.x, line_baseline(target.y, spacing, style.size, fit)),
        Alignment::RightJustified(fit) => {
            let width = measure.text_width(text, style.font, style.size);
            Point::new(target.x - width, line_baseline(target.y, spacing, style.size, fit))
        }
    }
}

/// One glyph per cell, starting at the cell anchored at `start` and advancing one
/// spacing per character. Returns each character with its draw origin.
pub fn letter_spaced<M: TextMeasure + ?Sized>(
    text: &str,
    measure: &M,
    style: &TextStyle,
    start: Point,
    spacing: f32,
) -> Vec<(String, Point)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let glyph = ch.to_string();
            let cell = start.offset(spacing * i as f32, 0.0);
            let origin = place(&glyph, measure, style, cell, Alignment::CenteredInCell, spacing);
            (glyph, origin)
        })
        .collect()
}

/// X of the first cell so that `chars` letter-spaced cells are centered over `span`
/// starting at `left`.
pub fn letter_spaced_start(left: f32, span: f32, chars: usize, spacing: f32) -> f32 {
    left + (span - chars as f32 * spacing) / 2.0
}

/// Origin of a title drawn in a frame rotated about the page center; half the font
/// size stands in for the ascent/descent split.
pub fn rotated_title_origin<M: TextMeasure + ?Sized>(text: &str, measure: &M, style: &TextStyle) -> Point {
    let width = measure.text_width(text, style.font, style.size);
    Point::new(-width / 2.0, -style.size / 2.0)
}
