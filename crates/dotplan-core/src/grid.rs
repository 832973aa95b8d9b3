// File: crates/dotplan-core/src/grid.rs
// Summary: Dot grid layout: column/row sequences with signed, bounds-checked indexing.

use crate::error::{Axis, LayoutError, LayoutResult};
use crate::geometry::PageGeometry;
use crate::types::{Cell, Point};

/// Slack for the inclusive end comparison. Millimetre spans that divide exactly
/// must not lose their last dot to float rounding; this is far below one dot radius.
const END_TOLERANCE: f32 = 1e-3;

/// Inclusive arithmetic sequence `start, start + step, ...` while `<= end`.
/// A span that `step` does not divide simply drops the remainder.
pub fn step_sequence(start: f32, end: f32, step: f32) -> Vec<f32> {
    if step <= 0.0 || end + END_TOLERANCE < start {
        return Vec::new();
    }
    let count = ((end - start + END_TOLERANCE) / step).floor() as usize + 1;
    (0..count).map(|i| start + step * i as f32).collect()
}

/// Resolve a signed index against a sequence length (-1 = last).
fn resolve(axis: Axis, index: isize, len: usize) -> LayoutResult<usize> {
    let resolved = if index < 0 { len as isize + index } else { index };
    if resolved < 0 || resolved >= len as isize {
        return Err(LayoutError::IndexOutOfRange { axis, index, len });
    }
    Ok(resolved as usize)
}

fn nearest(axis: Axis, values: &[f32], v: f32, spacing: f32) -> LayoutResult<usize> {
    let first = values.first().copied().unwrap_or_default();
    let index = ((v - first) / spacing).round() as isize;
    if index < 0 || index >= values.len() as isize {
        return Err(LayoutError::IndexOutOfRange { axis, index, len: values.len() });
    }
    Ok(index as usize)
}

/// Dot coordinates of one page. Columns run from the near margin to the far one,
/// rows from the bottom of the page upwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DotGrid {
    columns: Vec<f32>,
    rows: Vec<f32>,
    spacing: f32,
    mirrored: bool,
}

impl DotGrid {
    pub fn new(geometry: &PageGeometry, mirror_margins: bool) -> Self {
        let (near, far) = geometry.margins(mirror_margins);
        let spacing = geometry.spacing();
        let columns = step_sequence(near, geometry.width() - far, spacing);
        let rows = step_sequence(spacing, geometry.height() - spacing, spacing);
        Self { columns, rows, spacing, mirrored: mirror_margins }
    }

    pub fn columns(&self) -> &[f32] { &self.columns }
    pub fn rows(&self) -> &[f32] { &self.rows }
    pub fn spacing(&self) -> f32 { self.spacing }
    pub fn is_mirrored(&self) -> bool { self.mirrored }
    pub fn column_count(&self) -> usize { self.columns.len() }
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// X of column `index`; negative indices count from the far margin.
    pub fn column(&self, index: isize) -> LayoutResult<f32> {
        let i = resolve(Axis::Column, index, self.columns.len())?;
        Ok(self.columns[i])
    }

    /// Y of row `index`; negative indices count down from the top row.
    pub fn row(&self, index: isize) -> LayoutResult<f32> {
        let i = resolve(Axis::Row, index, self.rows.len())?;
        Ok(self.rows[i])
    }

    /// Bottom-left corner of a cell, i.e. the dot it is anchored at.
    pub fn cell_origin(&self, cell: Cell) -> LayoutResult<Point> {
        Ok(Point::new(self.column(cell.col)?, self.row(cell.row)?))
    }

    /// Index of the column nearest `x`; more than half a spacing off the grid is out of range.
    pub fn column_near(&self, x: f32) -> LayoutResult<usize> {
        nearest(Axis::Column, &self.columns, x, self.spacing)
    }

    /// Index of the row nearest `y`; more than half a spacing off the grid is out of range.
    pub fn row_near(&self, y: f32) -> LayoutResult<usize> {
        nearest(Axis::Row, &self.rows, y, self.spacing)
    }

    /// The cell `cols` to the right of and `rows` below `cell`, in absolute indices.
    /// Stepping off the grid is an error rather than a wrap to the other end.
    pub fn offset_cell(&self, cell: Cell, cols: usize, rows: usize) -> LayoutResult<Cell> {
        let (ncols, nrows) = (self.columns.len(), self.rows.len());
        let col = resolve(Axis::Column, cell.col, ncols)? + cols;
        if col >= ncols {
            return Err(LayoutError::IndexOutOfRange { axis: Axis::Column, index: col as isize, len: ncols });
        }
        let row = resolve(Axis::Row, cell.row, nrows)? as isize - rows as isize;
        if row < 0 {
            return Err(LayoutError::IndexOutOfRange { axis: Axis::Row, index: row, len: nrows });
        }
        Ok(Cell::new(col as isize, row))
    }

    /// Every intersection, column-major (the order the dots are printed in).
    pub fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.columns
            .iter()
            .flat_map(move |&x| self.rows.iter().map(move |&y| Point::new(x, y)))
    }
}
