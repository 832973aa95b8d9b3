// File: crates/dotplan-core/src/pages/calendar.rs
// Summary: Year-spread calendar page (stacked month blocks plus MISC/LEGEND section)
// and the shared month day-grid renderer.

use chrono::Weekday;

use crate::anchor::{letter_spaced_start, VerticalFit};
use crate::calendar::{is_weekend, month_abbrev, MonthCalendar};
use crate::error::LayoutResult;
use crate::grid::DotGrid;
use crate::layout::{labels, PagePainter, LEGEND_INDENT};
use crate::style::FontRole;
use crate::types::{mm, Cell, Point};

/// Header rule segment holding the month abbreviation (mm); seven 5 mm cells.
const HEADER_SPAN: f32 = 35.0;
/// Gap between the header segment and the rest of the rule (mm).
const HEADER_GAP: f32 = 5.0;
/// Distance between consecutive month header rules (mm).
const MONTH_STEP: f32 = 55.0;

pub const MISC_LABEL: &str = "MISC";
pub const LEGEND_LABEL: &str = "LEGEND";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthGridStyle {
    /// Draw weekend day numbers in the theme's alert color.
    pub weekend_alert: bool,
    /// Length of the muted rule under each week that reaches the table's last column.
    pub separator: Option<f32>,
}

/// Draw a month as week rows, one cell per day, with the first week in the row of
/// `first_week` and weekday columns starting at its column. Padding cells issue no
/// draw call. Fails before drawing if the table does not fit the grid; returns the
/// number of week rows used.
pub fn month_grid(
    p: &mut PagePainter<'_>,
    grid: &DotGrid,
    calendar: &MonthCalendar,
    first_week: Cell,
    style: MonthGridStyle,
) -> LayoutResult<usize> {
    let weeks = calendar.week_count();
    grid.offset_cell(first_week, 6, weeks.saturating_sub(1))?;

    for (day, weekday) in calendar.days() {
        let (week, col) = calendar.position(day)?;
        let cell = grid.cell_origin(grid.offset_cell(first_week, col, week)?)?;
        p.day_number(day, cell, style.weekend_alert && is_weekend(weekday));
    }

    if let Some(extent) = style.separator {
        let separator = p.separator_stroke();
        for (week, days) in calendar.weeks().iter().enumerate() {
            if days[6] != 0 {
                let start = grid.cell_origin(grid.offset_cell(first_week, 0, week)?)?;
                p.line_with(start, start.offset(extent, 0.0), &separator);
            }
        }
    }
    Ok(weeks)
}

/// Several months stacked down the page, closed by a MISC rule, or on facing pages a
/// LEGEND rule with its entries.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarPage {
    pub year: i32,
    pub months: Vec<u32>,
    pub mirror: bool,
    pub first_weekday: Weekday,
    pub legend: Vec<String>,
}

impl CalendarPage {
    pub fn new(year: i32, months: impl Into<Vec<u32>>, mirror: bool) -> Self {
        Self {
            year,
            months: months.into(),
            mirror,
            first_weekday: Weekday::Mon,
            legend: default_legend(),
        }
    }

    pub fn with_legend<I, S>(mut self, legend: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend = legend.into_iter().map(Into::into).collect();
        self
    }

    pub fn starting_on(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        let grid = p.dot_grid(!self.mirror);
        let spacing = p.spacing();
        let sizes = p.style().sizes;
        let left = grid.column(0)?;
        let last_x = grid.column(-1)?;

        // Resolve every block against the grid first so an overfull page draws nothing.
        let top = grid.row(-2)?;
        let mut blocks = Vec::with_capacity(self.months.len());
        for (k, &month) in self.months.iter().enumerate() {
            let calendar = MonthCalendar::new(self.year, month, self.first_weekday)?;
            let header = grid.row_near(top - mm(MONTH_STEP) * k as f32)? as isize;
            let first_week = grid.offset_cell(Cell::new(0, header), 0, 1)?;
            grid.offset_cell(first_week, 6, calendar.week_count().saturating_sub(1))?;
            blocks.push((calendar, header, first_week));
        }
        let footer = grid.row_near(top - mm(MONTH_STEP) * self.months.len() as f32)? as isize;
        if self.mirror {
            grid.offset_cell(Cell::new(0, footer), 0, self.legend.len())?;
        }

        let letter_style = p.text_style(FontRole::Text, sizes.letter);
        let grid_style = MonthGridStyle { weekend_alert: true, separator: Some(7.0 * spacing) };

        for (calendar, header, first_week) in &blocks {
            let y = grid.row(*header)?;
            p.hrule(left, left + mm(HEADER_SPAN), y);
            p.hrule(left + mm(HEADER_SPAN + HEADER_GAP), last_x, y);

            let abbrev = month_abbrev(calendar.month())?;
            let start_x = letter_spaced_start(left, mm(HEADER_SPAN), abbrev.chars().count(), spacing);
            p.text_across(&abbrev, Point::new(start_x, y), &letter_style);

            month_grid(p, &grid, calendar, *first_week, grid_style)?;
        }

        let y = grid.row(footer)?;
        p.hrule(left, last_x, y);
        let heading = p.text_style(FontRole::Text, sizes.heading);
        if self.mirror {
            p.text_on_line(LEGEND_LABEL, Point::new(left, y), VerticalFit::CapHeight, &heading);
            let entries = p.text_style(FontRole::Text, sizes.list);
            let start = Point::new(left + LEGEND_INDENT, y - spacing);
            p.list_down(&self.legend, start, VerticalFit::CapHeight, &entries);
        } else {
            p.text_on_line(MISC_LABEL, Point::new(left, y), VerticalFit::CapHeight, &heading);
        }
        Ok(())
    }
}

fn default_legend() -> Vec<String> {
    labels(&["Important", "Birthdays", "Other", "Trips", "Schulferien", "NRW Feiertage"])
}
