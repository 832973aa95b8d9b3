// File: crates/dotplan-core/src/pages/tasks.rs
// Summary: Monthly task list page: stacked heading regions with bullet items.

use crate::anchor::VerticalFit;
use crate::error::LayoutResult;
use crate::layout::{stack_regions, PagePainter, Region};
use crate::style::FontRole;
use crate::types::{mm, Cell, Point};

/// Bullets hang this far left of the half-cell indent, in points.
const BULLET_PULLBACK: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TaskListPage {
    pub regions: Vec<Region>,
    pub mirror_margins: bool,
}

impl TaskListPage {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions, mirror_margins: true }
    }

    /// Recurring monthly chores followed by open administrative/home/other sections.
    pub fn monthly() -> Self {
        Self::new(vec![
            Region::new("MONTHLY TASKS", 0.0).with_items([
                "Prepare monthly spread",
                "Update family budget sheet",
                "Change cat's fountain filter",
                "Book canteen for next month",
                "Change cat's fountain filter x2",
            ]),
            Region::new("ADMINISTRATIVE", mm(35.0)),
            Region::new("HOME", mm(60.0)),
            Region::new("OTHER", mm(55.0)),
        ])
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        let grid = p.dot_grid(self.mirror_margins);
        let spacing = p.spacing();
        let left = grid.column(0)?;
        let heading = p.text_style(FontRole::Text, p.style().sizes.heading);
        let bullet_x = left + spacing / 2.0 - BULLET_PULLBACK;

        let mut rows = Vec::with_capacity(self.regions.len());
        for (region, y) in self.regions.iter().zip(stack_regions(grid.row(-2)?, &self.regions)) {
            let row = grid.row_near(y)? as isize;
            grid.offset_cell(Cell::new(0, row), 0, region.items.len())?;
            rows.push(row);
        }

        for (region, row) in self.regions.iter().zip(rows) {
            let heading_at = grid.cell_origin(Cell::new(0, row))?;
            p.text_on_line(&region.heading, heading_at, VerticalFit::CapHeight, &heading);
            for (i, item) in region.items.iter().enumerate() {
                if !item.is_empty() {
                    let y = grid.cell_origin(grid.offset_cell(Cell::new(0, row), 0, i + 1)?)?.y;
                    p.bullet_line(item, Point::new(bullet_x, y), FontRole::Light);
                }
            }
        }
        Ok(())
    }
}

impl Default for TaskListPage {
    fn default() -> Self {
        Self::monthly()
    }
}
