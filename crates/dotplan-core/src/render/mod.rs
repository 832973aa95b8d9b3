// File: crates/dotplan-core/src/render/mod.rs
// Summary: Skia backends for the canvas contract: PDF documents and raster page snapshots.
// Skia is y-down; every page starts with a flip so layouts draw in y-up page points.

mod fonts;
mod pdf;
mod raster;

pub use fonts::FontBook;
pub use pdf::PdfCanvas;
pub use raster::{render_page_to_png, render_page_to_png_bytes};

use skia_safe as skia;

use crate::canvas::{Stroke, TextStyle};
use crate::types::Point;

fn flip_page(canvas: &skia::Canvas, page_height: f32) {
    canvas.translate((0.0, page_height));
    canvas.scale((1.0, -1.0));
}

fn paint_circle(canvas: &skia::Canvas, center: Point, radius: f32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    canvas.draw_circle((center.x, center.y), radius, &paint);
}

fn paint_line(canvas: &skia::Canvas, from: Point, to: Point, stroke: &Stroke) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
}

/// Glyphs need a local un-flip or they would print upside down.
fn paint_text(canvas: &skia::Canvas, fonts: &FontBook, origin: Point, text: &str, style: &TextStyle) {
    let font = fonts.font(style.font, style.size);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(style.color);
    canvas.save();
    canvas.translate((origin.x, origin.y));
    canvas.scale((1.0, -1.0));
    canvas.draw_str(text, (0.0, 0.0), &font, &paint);
    canvas.restore();
}
