// File: crates/dotplan-core/src/layout.rs
// Summary: Region layout primitives shared by every page archetype: dot grids, rules,
// anchored text, letter-spaced headers, bullet and legend lists, stacked regions.

use crate::anchor::{self, Alignment, VerticalFit};
use crate::canvas::{Canvas, Stroke, TextStyle};
use crate::geometry::PageGeometry;
use crate::grid::DotGrid;
use crate::style::{FontRole, StyleConfig};
use crate::types::{Point, PT_PER_MM};

/// Geometry and style for one document; every page is drawn from these two alone.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Layout {
    pub geometry: PageGeometry,
    pub style: StyleConfig,
}

impl Layout {
    pub fn new(geometry: PageGeometry, style: StyleConfig) -> Self {
        Self { geometry, style }
    }

    /// Style derived from the geometry's defaults.
    pub fn from_geometry(geometry: PageGeometry) -> Self {
        Self { style: StyleConfig::for_geometry(&geometry), geometry }
    }
}

/// Marker drawn in front of bullet list items.
pub const BULLET: &str = "• ";
/// Gap between a bullet and its item text, in points.
pub const BULLET_GAP: f32 = 2.0;
/// Indent of legend entries under their heading rule (5 mm).
pub const LEGEND_INDENT: f32 = 5.0 * PT_PER_MM;

/// Owned copies of literal list entries.
pub fn labels(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

/// A heading block positioned `offset` below the previous region (the first region's
/// offset is measured from the stack's start line), with optional bullet items.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub heading: String,
    pub offset: f32,
    pub items: Vec<String>,
}

impl Region {
    pub fn new(heading: impl Into<String>, offset: f32) -> Self {
        Self { heading: heading.into(), offset, items: Vec::new() }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}

/// Baseline rule y of each region, stacked downwards from `start_y`.
pub fn stack_regions(start_y: f32, regions: &[Region]) -> Vec<f32> {
    let mut y = start_y;
    regions
        .iter()
        .map(|r| {
            y -= r.offset;
            y
        })
        .collect()
}

/// Issues draw calls for one page. Holds the canvas for the duration of the page only.
pub struct PagePainter<'a> {
    canvas: &'a mut dyn Canvas,
    layout: &'a Layout,
}

impl<'a> PagePainter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, layout: &'a Layout) -> Self {
        Self { canvas, layout }
    }

    pub fn geometry(&self) -> &PageGeometry { &self.layout.geometry }
    pub fn style(&self) -> &StyleConfig { &self.layout.style }
    pub fn spacing(&self) -> f32 { self.layout.geometry.spacing() }
    pub fn canvas(&mut self) -> &mut dyn Canvas { &mut *self.canvas }

    /// Print the dot lattice and return it for further anchoring.
    pub fn dot_grid(&mut self, mirror_margins: bool) -> DotGrid {
        let grid = DotGrid::new(&self.layout.geometry, mirror_margins);
        let radius = self.layout.geometry.dot_radius();
        let color = self.layout.style.theme.dots;
        for dot in grid.dots() {
            self.canvas.draw_circle(dot, radius, color);
        }
        grid
    }

    pub fn ink_stroke(&self) -> Stroke {
        Stroke::new(self.layout.style.theme.ink, self.layout.style.line_width)
    }

    pub fn separator_stroke(&self) -> Stroke {
        Stroke::new(self.layout.style.theme.muted, self.layout.style.separator_width)
    }

    pub fn text_style(&self, font: FontRole, size: f32) -> TextStyle {
        TextStyle::new(font, size, self.layout.style.theme.ink)
    }

    /// Ink rule from `(x1, y1)` to `(x2, y2)`.
    pub fn rule(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let stroke = self.ink_stroke();
        self.canvas.draw_line(Point::new(x1, y1), Point::new(x2, y2), &stroke);
    }

    pub fn hrule(&mut self, x1: f32, x2: f32, y: f32) {
        self.rule(x1, y, x2, y);
    }

    pub fn vrule(&mut self, x: f32, y_bottom: f32, y_top: f32) {
        self.rule(x, y_bottom, x, y_top);
    }

    pub fn line_with(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.canvas.draw_line(from, to, stroke);
    }

    /// Place and draw `text`; returns the draw origin.
    pub fn text(&mut self, text: &str, target: Point, mode: Alignment, style: &TextStyle) -> Point {
        let origin = anchor::place(text, &*self.canvas, style, target, mode, self.spacing());
        self.canvas.draw_text(origin, text, style);
        origin
    }

    pub fn text_in_cell(&mut self, text: &str, cell: Point, style: &TextStyle) -> Point {
        self.text(text, cell, Alignment::CenteredInCell, style)
    }

    pub fn text_on_line(&mut self, text: &str, target: Point, fit: VerticalFit, style: &TextStyle) -> Point {
        self.text(text, target, Alignment::OnLine(fit), style)
    }

    pub fn text_right(&mut self, text: &str, target: Point, fit: VerticalFit, style: &TextStyle) -> Point {
        self.text(text, target, Alignment::RightJustified(fit), style)
    }

    /// One character per cell from the cell at `start`.
    pub fn text_across(&mut self, text: &str, start: Point, style: &TextStyle) {
        let glyphs = anchor::letter_spaced(text, &*self.canvas, style, start, self.spacing());
        for (glyph, origin) in glyphs {
            self.canvas.draw_text(origin, &glyph, style);
        }
    }

    /// Day number centered in its cell, weekend days in the alert color.
    pub fn day_number(&mut self, day: u32, cell: Point, weekend: bool) {
        let sizes = self.layout.style.sizes;
        let theme = self.layout.style.theme;
        let color = if weekend { theme.alert } else { theme.ink };
        let style = TextStyle::new(FontRole::Text, sizes.day, color);
        self.text_in_cell(&day.to_string(), cell, &style);
    }

    /// Bullet marker followed by `text`, both centered on the rule at `target.y`.
    pub fn bullet_line(&mut self, text: &str, target: Point, font: FontRole) {
        let sizes = self.layout.style.sizes;
        let bullet_style = self.text_style(font, sizes.bullet);
        let item_style = self.text_style(font, sizes.list);
        let bullet_width = self.canvas.text_width(BULLET, font, sizes.bullet);
        self.text_on_line(BULLET, target, VerticalFit::CapHeight, &bullet_style);
        self.text_on_line(
            text,
            target.offset(bullet_width + BULLET_GAP, 0.0),
            VerticalFit::CapHeight,
            &item_style,
        );
    }

    /// Vertical list stepping down one spacing per entry from `start`. Blank entries
    /// only consume their row. Returns the y below the last entry.
    pub fn list_down(&mut self, entries: &[String], start: Point, fit: VerticalFit, style: &TextStyle) -> f32 {
        let mut y = start.y;
        for entry in entries {
            if !entry.is_empty() {
                self.text_on_line(entry, Point::new(start.x, y), fit, style);
            }
            y -= self.spacing();
        }
        y
    }

    /// Vertical list stepping up one spacing per entry; `right_justified` ends each
    /// entry at `start.x`. Blank entries only consume their row.
    pub fn list_up(
        &mut self,
        entries: &[String],
        start: Point,
        fit: VerticalFit,
        style: &TextStyle,
        right_justified: bool,
    ) -> f32 {
        let mut y = start.y;
        for entry in entries {
            if !entry.is_empty() {
                let target = Point::new(start.x, y);
                if right_justified {
                    self.text_right(entry, target, fit, style);
                } else {
                    self.text_on_line(entry, target, fit, style);
                }
            }
            y += self.spacing();
        }
        y
    }

    /// Large label drawn 90° counter-clockwise about the page center.
    pub fn rotated_title(&mut self, title: &str, style: &TextStyle) {
        let (cx, cy) = self.layout.geometry.center();
        self.canvas.save_transform_state();
        self.canvas.translate(cx, cy);
        self.canvas.rotate(90.0);
        let origin = anchor::rotated_title_origin(title, &*self.canvas, style);
        self.canvas.draw_text(origin, title, style);
        self.canvas.restore_transform_state();
    }
}
