// File: crates/dotplan-core/tests/anchor.rs
// Purpose: Text anchoring math: cell centering, on-line baselines, right justification, letter spacing.

use dotplan_core::anchor::{self, line_baseline, CAP_HEIGHT, EM_BOX};
use dotplan_core::{mm, Alignment, DotGrid, FontRole, PageGeometry, Point, RecordingCanvas, TextMeasure, TextStyle, VerticalFit};
use skia_safe::Color;

/// Every string measures the same fixed width.
struct FixedWidth(f32);

impl TextMeasure for FixedWidth {
    fn text_width(&self, _text: &str, _font: FontRole, _size: f32) -> f32 {
        self.0
    }
}

fn style(size: f32) -> TextStyle {
    TextStyle::new(FontRole::Text, size, Color::BLACK)
}

#[test]
fn right_justified_text_ends_at_target() {
    let spacing = mm(5.0);
    let origin = anchor::place(
        "Previously unfinished",
        &FixedWidth(mm(40.0)),
        &style(10.0),
        Point::new(mm(100.0), mm(50.0)),
        Alignment::RightJustified(VerticalFit::EmBox),
        spacing,
    );
    assert!((origin.x - mm(60.0)).abs() < 1e-3);
    assert!((origin.y - line_baseline(mm(50.0), spacing, 10.0, VerticalFit::EmBox)).abs() < 1e-4);
}

#[test]
fn centered_in_cell_stays_inside_the_cell() {
    let spacing = mm(5.0);
    let measure = RecordingCanvas::new();
    for (text, size) in [("1", 9.0), ("28", 9.0), ("M", 11.0), ("30", 6.0)] {
        let target = Point::new(mm(13.0), mm(100.0));
        let width = measure.text_width(text, FontRole::Text, size);
        assert!(width < spacing);
        let origin = anchor::place(text, &measure, &style(size), target, Alignment::CenteredInCell, spacing);
        assert!(origin.x > target.x && origin.x < target.x + spacing, "{text}: x {} not inside cell", origin.x);
        // Centered horizontally: equal slack on both sides.
        let right_slack = target.x + spacing - (origin.x + width);
        assert!((right_slack - (origin.x - target.x)).abs() < 1e-3);
    }
}

#[test]
fn on_line_baselines_use_their_own_ratio() {
    let spacing = mm(5.0);
    let y = 200.0;
    let cap = line_baseline(y, spacing, 11.0, VerticalFit::CapHeight);
    let em = line_baseline(y, spacing, 11.0, VerticalFit::EmBox);
    assert!((cap - (y + (spacing - 11.0 * CAP_HEIGHT) / 2.0)).abs() < 1e-4);
    assert!((em - (y + (spacing - 11.0 * EM_BOX) / 2.0)).abs() < 1e-4);
    // A taller assumed glyph box sits lower in the band.
    assert!(em < cap);

    let origin = anchor::place(
        "TIMELINE",
        &FixedWidth(50.0),
        &style(11.0),
        Point::new(30.0, y),
        Alignment::OnLine(VerticalFit::CapHeight),
        spacing,
    );
    assert_eq!(origin, Point::new(30.0, cap));
}

#[test]
fn letter_spacing_advances_one_cell_per_character() {
    let geometry = PageGeometry::a5_journal();
    let grid = DotGrid::new(&geometry, false);
    let spacing = geometry.spacing();
    let measure = RecordingCanvas::new();
    let letter = style(11.0);

    let start_col = 4;
    let start = Point::new(grid.column(start_col).unwrap(), grid.row(-2).unwrap());
    let glyphs = anchor::letter_spaced("NOV", &measure, &letter, start, spacing);
    assert_eq!(glyphs.len(), 3);
    assert_eq!(glyphs.iter().map(|(g, _)| g.as_str()).collect::<Vec<_>>(), ["N", "O", "V"]);

    // Last character is anchored at column i + n - 1.
    let last_cell = Point::new(grid.column(start_col + 2).unwrap(), start.y);
    let want = anchor::place("V", &measure, &letter, last_cell, Alignment::CenteredInCell, spacing);
    let got = glyphs[2].1;
    assert!((got.x - want.x).abs() < 1e-2 && (got.y - want.y).abs() < 1e-4);

    for pair in glyphs.windows(2) {
        assert!(((pair[1].1.x - pair[0].1.x) - spacing).abs() < 1e-3);
    }
}

#[test]
fn letter_spaced_block_is_centered_over_its_span() {
    let spacing = mm(5.0);
    let start = anchor::letter_spaced_start(100.0, mm(35.0), 3, spacing);
    assert!((start - (100.0 + 2.0 * spacing)).abs() < 1e-3);
}

#[test]
fn rotated_title_is_centered_on_the_pivot() {
    let origin = anchor::rotated_title_origin("BOOKS", &FixedWidth(200.0), &style(80.0));
    assert_eq!(origin, Point::new(-100.0, -40.0));
}
