// File: crates/dotplan-core/src/canvas.rs
// Summary: Renderer-agnostic canvas contract plus a recording implementation for tests and dry runs.

use skia_safe as skia;

use crate::style::FontRole;
use crate::types::Point;

/// Line paint, passed with every line so no color or width state leaks between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontRole,
    pub size: f32,
    pub color: skia::Color,
}

impl TextStyle {
    pub const fn new(font: FontRole, size: f32, color: skia::Color) -> Self {
        Self { font, size, color }
    }
}

/// String advance widths for a font role and size.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: FontRole, size: f32) -> f32;
}

/// Page surface in y-up page coordinates (points, origin bottom-left).
/// Pages are appended in order; `finish_page` commits the current one.
pub trait Canvas: TextMeasure {
    fn draw_circle(&mut self, center: Point, radius: f32, color: skia::Color);
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
    /// `origin` is the left end of the text baseline.
    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle);
    fn save_transform_state(&mut self);
    fn restore_transform_state(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Counter-clockwise rotation in degrees.
    fn rotate(&mut self, degrees: f32);
    fn finish_page(&mut self);
}

/// One primitive issued against a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Circle { center: Point, radius: f32, color: skia::Color },
    Line { from: Point, to: Point, stroke: Stroke },
    Text { origin: Point, text: String, style: TextStyle },
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate { degrees: f32 },
}

/// Canvas that keeps every op, grouped by page. Text width is a fixed advance per
/// character (`advance_em * size`), which keeps layout assertions deterministic.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    advance_em: f32,
    pages: Vec<Vec<DrawOp>>,
    current: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::with_advance(0.5)
    }

    pub fn with_advance(advance_em: f32) -> Self {
        Self { advance_em, pages: Vec::new(), current: Vec::new() }
    }

    /// Finished pages.
    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// Ops on the page currently being drawn.
    pub fn current(&self) -> &[DrawOp] {
        &self.current
    }

    pub fn texts(ops: &[DrawOp]) -> Vec<(&str, Point, &TextStyle)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { origin, text, style } => Some((text.as_str(), *origin, style)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(ops: &[DrawOp]) -> Vec<(Point, Point, &Stroke)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, stroke } => Some((*from, *to, stroke)),
                _ => None,
            })
            .collect()
    }

    pub fn circle_count(ops: &[DrawOp]) -> usize {
        ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for RecordingCanvas {
    fn text_width(&self, text: &str, _font: FontRole, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_em
    }
}

impl Canvas for RecordingCanvas {
    fn draw_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        self.current.push(DrawOp::Circle { center, radius, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.current.push(DrawOp::Line { from, to, stroke: *stroke });
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        self.current.push(DrawOp::Text { origin, text: text.to_string(), style: *style });
    }

    fn save_transform_state(&mut self) {
        self.current.push(DrawOp::Save);
    }

    fn restore_transform_state(&mut self) {
        self.current.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current.push(DrawOp::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f32) {
        self.current.push(DrawOp::Rotate { degrees });
    }

    fn finish_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }
}
