// File: crates/dotplan-core/src/types.rs
// Summary: Shared types and constants (units, page sizes, points, cells).

/// PDF points per millimetre (1 inch = 72 pt = 25.4 mm).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to points.
#[inline]
pub fn mm(v: f32) -> f32 {
    v * PT_PER_MM
}

/// A5 page width in points (148 mm).
pub const A5_WIDTH: f32 = 148.0 * PT_PER_MM;
/// A5 page height in points (210 mm).
pub const A5_HEIGHT: f32 = 210.0 * PT_PER_MM;

/// Absolute page position in points, origin at the bottom-left corner (y grows upwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// One grid intersection addressed by signed indices; negative values count from the end
/// (-1 = last column / top row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: isize,
    pub row: isize,
}

impl Cell {
    pub const fn new(col: isize, row: isize) -> Self {
        Self { col, row }
    }

    /// The cell `n` rows further down the page.
    pub const fn down(self, n: isize) -> Self {
        Self { col: self.col, row: self.row - n }
    }
}
