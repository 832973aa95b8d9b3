// File: crates/dotplan-core/src/pages/title.rs
// Summary: Cover-style pages: rotated title, stacked year digits, blank dot grid.

use crate::anchor::CELL_ASCENT;
use crate::error::LayoutResult;
use crate::layout::PagePainter;
use crate::style::FontRole;
use crate::types::Point;

/// Full dot grid with one large label rotated 90° about the page center.
#[derive(Clone, Debug, PartialEq)]
pub struct TitlePage {
    pub title: String,
}

impl TitlePage {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        p.dot_grid(false);
        let style = p.text_style(FontRole::Text, p.style().sizes.title);
        p.rotated_title(&self.title, &style);
        Ok(())
    }
}

/// Year split into two digit pairs ("20" over "25"), centered as one block.
#[derive(Clone, Debug, PartialEq)]
pub struct YearCoverPage {
    pub year: i32,
}

impl YearCoverPage {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// The two halves drawn top and bottom.
    pub fn digit_pairs(&self) -> (String, String) {
        let digits = self.year.to_string();
        let split = digits.char_indices().nth(2).map(|(i, _)| i).unwrap_or(digits.len());
        let (top, bottom) = digits.split_at(split);
        (top.to_string(), bottom.to_string())
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        p.dot_grid(false);
        let sizes = p.style().sizes;
        let style = p.text_style(FontRole::Text, sizes.year);
        let (width, height) = (p.geometry().width(), p.geometry().height());

        let ascent = sizes.year * CELL_ASCENT;
        let block = ascent + sizes.year_gap + ascent;
        let y_start = (height - block) / 2.0 + sizes.year_gap;

        let (top, bottom) = self.digit_pairs();
        let top_w = p.canvas().text_width(&top, style.font, style.size);
        let bottom_w = p.canvas().text_width(&bottom, style.font, style.size);
        let top_origin = Point::new(width / 2.0 - top_w / 2.0, y_start + ascent + sizes.year_gap);
        let bottom_origin = Point::new(width / 2.0 - bottom_w / 2.0, y_start);
        p.canvas().draw_text(top_origin, &top, &style);
        p.canvas().draw_text(bottom_origin, &bottom, &style);
        Ok(())
    }
}

/// Dots only; closes every spread.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DotGridPage {
    pub mirror_margins: bool,
}

impl DotGridPage {
    pub fn new(mirror_margins: bool) -> Self {
        Self { mirror_margins }
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        p.dot_grid(self.mirror_margins);
        Ok(())
    }
}
