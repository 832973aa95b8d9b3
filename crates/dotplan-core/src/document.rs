// File: crates/dotplan-core/src/document.rs
// Summary: Ordered page sequence and its rendering pipeline (any canvas, PDF file/bytes).

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::LayoutResult;
use crate::layout::Layout;
use crate::pages::Page;
use crate::render::{FontBook, PdfCanvas};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub name: String,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), pages: Vec::new() }
    }

    pub fn push(&mut self, page: impl Into<Page>) {
        self.pages.push(page.into());
    }

    pub fn with(mut self, page: impl Into<Page>) -> Self {
        self.push(page);
        self
    }

    pub fn extend(&mut self, other: Document) {
        self.pages.extend(other.pages);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Draw every page in order, finishing each before the next begins. The first
    /// failing page aborts the document.
    pub fn render(&self, canvas: &mut dyn Canvas, layout: &Layout) -> LayoutResult<()> {
        for page in &self.pages {
            page.draw(canvas, layout)?;
            canvas.finish_page();
        }
        Ok(())
    }

    /// Render to an in-memory PDF.
    pub fn render_to_pdf_bytes(&self, layout: &Layout, fonts: &FontBook) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut canvas = PdfCanvas::new(&mut out, &layout.geometry, fonts);
            self.render(&mut canvas, layout)
                .with_context(|| format!("laying out document '{}'", self.name))?;
            debug!("'{}': {} pages committed", self.name, canvas.page_count());
            canvas.close();
        }
        Ok(out)
    }

    /// Render to a PDF at `output_pdf_path`, creating parent directories as needed.
    pub fn render_to_pdf(&self, layout: &Layout, fonts: &FontBook, output_pdf_path: impl AsRef<Path>) -> Result<()> {
        let path = output_pdf_path.as_ref();
        let bytes = self.render_to_pdf_bytes(layout, fonts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {} ({} pages, {} bytes)", path.display(), self.pages.len(), bytes.len());
        Ok(())
    }
}
