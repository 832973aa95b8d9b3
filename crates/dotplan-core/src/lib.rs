// File: crates/dotplan-core/src/lib.rs
// Summary: Core library entry point; exports the dot-grid geometry engine, page layouts
// and the Skia PDF/PNG rendering pipeline.

pub mod anchor;
pub mod calendar;
pub mod canvas;
pub mod document;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod pages;
pub mod render;
pub mod spreads;
pub mod style;
pub mod theme;
pub mod types;

pub use anchor::{Alignment, VerticalFit};
pub use calendar::MonthCalendar;
pub use canvas::{Canvas, DrawOp, RecordingCanvas, Stroke, TextMeasure, TextStyle};
pub use document::Document;
pub use error::{LayoutError, LayoutResult};
pub use geometry::PageGeometry;
pub use grid::DotGrid;
pub use layout::{Layout, Region};
pub use pages::Page;
pub use render::{FontBook, PdfCanvas};
pub use style::{FontRole, StyleConfig};
pub use theme::Theme;
pub use types::{mm, Cell, Point};
