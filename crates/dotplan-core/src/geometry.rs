// File: crates/dotplan-core/src/geometry.rs
// Summary: Validated page geometry (size, dot spacing, mirrorable margins).

use crate::error::{LayoutError, LayoutResult};
use crate::types::{mm, A5_HEIGHT, A5_WIDTH};

/// Page size, dot spacing and margins, all in points.
///
/// Contract (checked by [`PageGeometry::new`]):
/// - `spacing > 0`, margins and dot radius `>= 0`;
/// - `left_margin + right_margin + spacing <= width`;
/// - `3 * spacing <= height` (one spacing of margin top and bottom plus one row step).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    width: f32,
    height: f32,
    spacing: f32,
    left_margin: f32,
    right_margin: f32,
    dot_radius: f32,
}

impl PageGeometry {
    pub fn new(
        width: f32,
        height: f32,
        spacing: f32,
        left_margin: f32,
        right_margin: f32,
        dot_radius: f32,
    ) -> LayoutResult<Self> {
        let all = [width, height, spacing, left_margin, right_margin, dot_radius];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(LayoutError::InvalidGeometry("non-finite dimension".into()));
        }
        if spacing <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!("spacing must be positive, got {spacing}")));
        }
        if left_margin < 0.0 || right_margin < 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "margins must be non-negative, got left={left_margin} right={right_margin}"
            )));
        }
        if dot_radius < 0.0 {
            return Err(LayoutError::InvalidGeometry(format!("dot radius must be non-negative, got {dot_radius}")));
        }
        if left_margin + right_margin + spacing > width {
            return Err(LayoutError::InvalidGeometry(format!(
                "margins {left_margin}+{right_margin} plus spacing {spacing} exceed page width {width}"
            )));
        }
        if 3.0 * spacing > height {
            return Err(LayoutError::InvalidGeometry(format!(
                "spacing {spacing} leaves no rows on page height {height}"
            )));
        }
        Ok(Self { width, height, spacing, left_margin, right_margin, dot_radius })
    }

    /// A5 journal: 5 mm dots, 13 mm binding margin, 5 mm outer margin, 0.25 mm dots.
    pub fn a5_journal() -> Self {
        Self {
            width: A5_WIDTH,
            height: A5_HEIGHT,
            spacing: mm(5.0),
            left_margin: mm(13.0),
            right_margin: mm(5.0),
            dot_radius: mm(0.25),
        }
    }

    pub const fn width(&self) -> f32 { self.width }
    pub const fn height(&self) -> f32 { self.height }
    pub const fn spacing(&self) -> f32 { self.spacing }
    pub const fn left_margin(&self) -> f32 { self.left_margin }
    pub const fn right_margin(&self) -> f32 { self.right_margin }
    pub const fn dot_radius(&self) -> f32 { self.dot_radius }

    /// Ruling stroke width; twice the dot radius so lines match the dots.
    pub fn line_width(&self) -> f32 {
        self.dot_radius * 2.0
    }

    /// (near, far) margins; mirrored pages swap which side carries the binding margin.
    pub fn margins(&self, mirror_margins: bool) -> (f32, f32) {
        if mirror_margins {
            (self.right_margin, self.left_margin)
        } else {
            (self.left_margin, self.right_margin)
        }
    }

    /// Page center, used as the pivot of rotated titles.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a5_journal()
    }
}
