// File: crates/dotplan-core/src/render/pdf.rs
// Summary: Multi-page PDF canvas on Skia's PDF backend. Pages open lazily on the first
// draw call and are committed by `finish_page`.

use skia_safe as skia;
use skia::document::state::OnPage;

use super::{flip_page, paint_circle, paint_line, paint_text, FontBook};
use crate::canvas::{Canvas, Stroke, TextMeasure, TextStyle};
use crate::geometry::PageGeometry;
use crate::style::FontRole;
use crate::types::Point;

enum PageState<'a> {
    Idle(skia::Document<'a>),
    Drawing(skia::Document<'a, OnPage>),
}

pub struct PdfCanvas<'a> {
    doc: Option<PageState<'a>>,
    size: (f32, f32),
    fonts: &'a FontBook,
    finished: usize,
}

impl<'a> PdfCanvas<'a> {
    pub fn new(out: &'a mut Vec<u8>, geometry: &PageGeometry, fonts: &'a FontBook) -> Self {
        let doc = skia::pdf::new_document(out, None);
        Self {
            doc: Some(PageState::Idle(doc)),
            size: (geometry.width(), geometry.height()),
            fonts,
            finished: 0,
        }
    }

    /// Pages committed so far.
    pub fn page_count(&self) -> usize {
        self.finished
    }

    /// Flush the trailing page (if any drawing is pending) and write the PDF trailer.
    pub fn close(mut self) {
        match self.doc.take() {
            Some(PageState::Drawing(doc)) => doc.end_page().close(),
            Some(PageState::Idle(doc)) => doc.close(),
            None => {}
        }
    }

    fn page<'s>(doc: &'s mut Option<PageState<'a>>, size: (f32, f32)) -> Option<&'s skia::Canvas> {
        if matches!(doc, Some(PageState::Idle(_))) {
            if let Some(PageState::Idle(open)) = doc.take() {
                let mut drawing = open.begin_page(size, None);
                flip_page(drawing.canvas(), size.1);
                *doc = Some(PageState::Drawing(drawing));
            }
        }
        match doc {
            Some(PageState::Drawing(drawing)) => Some(drawing.canvas()),
            _ => None,
        }
    }
}

impl TextMeasure for PdfCanvas<'_> {
    fn text_width(&self, text: &str, font: FontRole, size: f32) -> f32 {
        self.fonts.text_width(text, font, size)
    }
}

impl Canvas for PdfCanvas<'_> {
    fn draw_circle(&mut self, center: Point, radius: f32, color: skia::Color) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            paint_circle(canvas, center, radius, color);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            paint_line(canvas, from, to, stroke);
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        let fonts = self.fonts;
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            paint_text(canvas, fonts, origin, text, style);
        }
    }

    fn save_transform_state(&mut self) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            canvas.save();
        }
    }

    fn restore_transform_state(&mut self) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            canvas.restore();
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            canvas.translate((dx, dy));
        }
    }

    fn rotate(&mut self, degrees: f32) {
        if let Some(canvas) = Self::page(&mut self.doc, self.size) {
            canvas.rotate(degrees, None);
        }
    }

    /// Commit the current page; an untouched page is still emitted blank.
    fn finish_page(&mut self) {
        let next = match self.doc.take() {
            Some(PageState::Drawing(doc)) => Some(PageState::Idle(doc.end_page())),
            Some(PageState::Idle(doc)) => Some(PageState::Idle(doc.begin_page(self.size, None).end_page())),
            None => None,
        };
        self.doc = next;
        self.finished += 1;
    }
}
