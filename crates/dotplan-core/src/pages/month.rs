// File: crates/dotplan-core/src/pages/month.rs
// Summary: Month spread layout page: day-per-row timeline, month header, task box,
// legend and the month's week grid.

use chrono::Weekday;

use crate::anchor::{letter_spaced_start, VerticalFit};
use crate::calendar::{is_weekend, month_abbrev, MonthCalendar};
use crate::error::LayoutResult;
use crate::layout::{labels, PagePainter, LEGEND_INDENT};
use crate::pages::calendar::{month_grid, MonthGridStyle, LEGEND_LABEL};
use crate::style::FontRole;
use crate::types::{mm, Cell, Point};

// Horizontal extents, mm.
const TIMELINE_SPAN: f32 = 85.0;
const COLUMN_GAP: f32 = 5.0;
const SIDE_SPAN: f32 = 35.0;
// Vertical drops from the header rule, mm.
const TIMELINE_DEPTH: f32 = 155.0;
const NEXT_MONTH_DROP: f32 = 10.0;
const TASKS_DROP: f32 = 40.0;
const TASKS_TICK: f32 = 5.0;
const LEGEND_DROP: f32 = 15.0;

pub const TIMELINE_LABEL: &str = "TIMELINE";
pub const NEXT_MONTH_LABEL: &str = "NEXT MONTH";
pub const TASKS_LABEL: &str = "MONTHLY TASKS";

#[derive(Clone, Debug, PartialEq)]
pub struct MonthLayoutPage {
    pub year: i32,
    pub month: u32,
    pub first_weekday: Weekday,
    /// Habit and category keys; empty strings leave a blank row.
    pub legend: Vec<String>,
}

impl MonthLayoutPage {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month, first_weekday: Weekday::Mon, legend: default_legend() }
    }

    pub fn with_legend<I, S>(mut self, legend: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend = legend.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        let calendar = MonthCalendar::new(self.year, self.month, self.first_weekday)?;
        let grid = p.dot_grid(false);
        let spacing = p.spacing();
        let sizes = p.style().sizes;
        let heading = p.text_style(FontRole::Text, sizes.heading);

        let start_x = grid.column(0)?;
        let split_x = start_x + mm(TIMELINE_SPAN);
        let side_x = split_x + mm(COLUMN_GAP);
        let end_x = side_x + mm(SIDE_SPAN);

        // Every row below the header is resolved before drawing; a page too short for
        // the timeline fails without issuing rules off the grid.
        let top = Cell::new(0, grid.row_count() as isize - 2);
        let top_y = grid.row(top.row)?;
        grid.offset_cell(top, 0, calendar.days_in_month() as usize)?;
        let timeline_bottom = grid.row(grid.row_near(top_y - mm(TIMELINE_DEPTH))? as isize)?;
        let next_y = grid.row(grid.row_near(timeline_bottom - mm(NEXT_MONTH_DROP))? as isize)?;
        let tasks_y = grid.row(grid.row_near(top_y - mm(TASKS_DROP))? as isize)?;
        let legend_row = grid.row_near(tasks_y - mm(LEGEND_DROP))? as isize;
        grid.offset_cell(Cell::new(0, legend_row), 0, self.legend.len())?;
        let legend_y = grid.row(legend_row)?;
        let side = Cell::new(grid.column_near(side_x)? as isize, top.row);
        let mini_grid = grid.offset_cell(side, 0, 1)?;
        grid.offset_cell(mini_grid, 6, calendar.week_count().saturating_sub(1))?;

        // Header rules and the timeline divider.
        p.hrule(start_x, split_x, top_y);
        p.hrule(side_x, end_x, top_y);
        p.vrule(split_x, timeline_bottom, top_y);
        p.text_on_line(TIMELINE_LABEL, Point::new(start_x, top_y), VerticalFit::CapHeight, &heading);

        let abbrev = month_abbrev(self.month)?;
        let letters_x = letter_spaced_start(side_x, mm(SIDE_SPAN), abbrev.chars().count(), spacing);
        let bold = p.text_style(FontRole::Bold, sizes.letter);
        p.text_across(&abbrev, Point::new(letters_x, top_y), &bold);

        p.hrule(start_x, end_x, next_y);
        p.text_on_line(NEXT_MONTH_LABEL, Point::new(start_x, next_y), VerticalFit::CapHeight, &heading);

        p.hrule(side_x, side_x + mm(SIDE_SPAN), tasks_y);
        p.text_on_line(TASKS_LABEL, Point::new(side_x, tasks_y), VerticalFit::CapHeight, &heading);
        p.vrule(side_x, tasks_y - mm(TASKS_TICK), tasks_y);

        p.hrule(side_x, side_x + mm(SIDE_SPAN), legend_y);
        p.text_on_line(LEGEND_LABEL, Point::new(side_x, legend_y), VerticalFit::CapHeight, &heading);
        let entries = p.text_style(FontRole::Text, sizes.list);
        let legend_start = Point::new(side_x + LEGEND_INDENT, legend_y - spacing);
        p.list_down(&self.legend, legend_start, VerticalFit::CapHeight, &entries);

        // One day per row down the timeline; a muted rule closes each week.
        let week_end = calendar.weekday_at(6);
        let separator = p.separator_stroke();
        for (day, weekday) in calendar.days() {
            let cell = grid.cell_origin(grid.offset_cell(top, 0, day as usize)?)?;
            p.day_number(day, cell, is_weekend(weekday));
            if weekday == week_end {
                let from = cell.offset(2.0 * spacing, 0.0);
                let to = Point::new(split_x - mm(COLUMN_GAP), cell.y);
                p.line_with(from, to, &separator);
            }
        }

        let plain = MonthGridStyle { weekend_alert: false, separator: None };
        month_grid(p, &grid, &calendar, mini_grid, plain)?;
        Ok(())
    }
}

fn default_legend() -> Vec<String> {
    labels(&[
        "Call Grandma",
        "Call Dad",
        "Call Mom",
        "Sports",
        "PhD",
        "Music",
        "Dancing",
        "Therapy",
        "Date Night",
        "",
        "Important",
        "Birthdays",
        "Other",
        "Trips",
        "Schulferien",
        "Holidays",
    ])
}
