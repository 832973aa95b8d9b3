// File: crates/dotplan-core/src/style.rs
// Summary: Style configuration: font faces per role, font sizes, theme and stroke widths.

use std::path::PathBuf;

use crate::geometry::PageGeometry;
use crate::theme::Theme;

/// Font roles used by the layouts; backends map each to a concrete typeface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Text,
    Bold,
    Light,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Text, FontRole::Bold, FontRole::Light];
}

/// A registered face: a font file (relative to the font directory) plus the family
/// name to fall back to when the file is unavailable.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    pub family: String,
    pub file: Option<PathBuf>,
}

impl FontFace {
    pub fn new(family: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self { family: family.into(), file: Some(file.into()) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub year: f32,
    /// Vertical gap between the two digit pairs of the year cover.
    pub year_gap: f32,
    pub heading: f32,
    pub letter: f32,
    pub day: f32,
    pub list: f32,
    pub bullet: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 80.0,
            year: 180.0,
            year_gap: 20.0,
            heading: 11.0,
            letter: 11.0,
            day: 9.0,
            list: 10.0,
            bullet: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub text_face: FontFace,
    pub bold_face: FontFace,
    pub light_face: FontFace,
    pub sizes: FontSizes,
    pub theme: Theme,
    /// Ruling stroke width in points.
    pub line_width: f32,
    /// Week separator stroke width in points.
    pub separator_width: f32,
}

impl StyleConfig {
    /// Merienda faces with strokes derived from the geometry's dot radius.
    pub fn for_geometry(geometry: &PageGeometry) -> Self {
        Self {
            text_face: FontFace::new("Merienda", "Merienda-Medium.ttf"),
            bold_face: FontFace::new("Merienda", "Merienda-Black.ttf"),
            light_face: FontFace::new("Merienda", "Merienda-Light.ttf"),
            sizes: FontSizes::default(),
            theme: Theme::default(),
            line_width: geometry.line_width(),
            separator_width: geometry.dot_radius() * 1.2,
        }
    }

    pub fn face(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Text => &self.text_face,
            FontRole::Bold => &self.bold_face,
            FontRole::Light => &self.light_face,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::for_geometry(&PageGeometry::default())
    }
}
