// File: crates/dotplan-core/src/render/raster.rs
// Summary: Single-page raster rendering to PNG via a Skia CPU surface (previews and golden snapshots).

use anyhow::{Context, Result};
use skia_safe as skia;

use super::{flip_page, paint_circle, paint_line, paint_text, FontBook};
use crate::canvas::{Canvas, Stroke, TextMeasure, TextStyle};
use crate::layout::Layout;
use crate::pages::Page;
use crate::style::FontRole;
use crate::types::Point;

struct RasterCanvas<'a> {
    canvas: &'a skia::Canvas,
    fonts: &'a FontBook,
}

impl TextMeasure for RasterCanvas<'_> {
    fn text_width(&self, text: &str, font: FontRole, size: f32) -> f32 {
        self.fonts.text_width(text, font, size)
    }
}

impl Canvas for RasterCanvas<'_> {
    fn draw_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        paint_circle(self.canvas, center, radius, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        paint_line(self.canvas, from, to, stroke);
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        paint_text(self.canvas, self.fonts, origin, text, style);
    }

    fn save_transform_state(&mut self) {
        self.canvas.save();
    }

    fn restore_transform_state(&mut self) {
        self.canvas.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.canvas.rotate(degrees, None);
    }

    // Single page surface.
    fn finish_page(&mut self) {}
}

/// Render one page on white at `scale` pixels per point and encode it as PNG.
pub fn render_page_to_png_bytes(page: &Page, layout: &Layout, fonts: &FontBook, scale: f32) -> Result<Vec<u8>> {
    let scale = scale.max(0.1);
    let width = (layout.geometry.width() * scale).ceil() as i32;
    let height = (layout.geometry.height() * scale).ceil() as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(skia::Color::WHITE);
        canvas.scale((scale, scale));
        flip_page(canvas, layout.geometry.height());
        let mut target = RasterCanvas { canvas, fonts };
        page.draw(&mut target, layout)
            .with_context(|| format!("laying out {} page", page.kind()))?;
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render one page to a PNG at `output_png_path`.
pub fn render_page_to_png(
    page: &Page,
    layout: &Layout,
    fonts: &FontBook,
    scale: f32,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_page_to_png_bytes(page, layout, fonts, scale)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
