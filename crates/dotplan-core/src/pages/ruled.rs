// File: crates/dotplan-core/src/pages/ruled.rs
// Summary: Ledger page for the book/movie tracker: full-width rules on every row, three
// vertical columns, optional heading and the rating/tracking legend on facing pages.

use crate::anchor::VerticalFit;
use crate::error::LayoutResult;
use crate::layout::PagePainter;
use crate::style::FontRole;
use crate::types::{mm, Point};

/// Facing pages stop their rules this far above the page bottom to leave room for the legend.
const LEGEND_FLOOR: f32 = 40.0;
/// Vertical rules run this far below the lowest rule.
const VERTICAL_OVERHANG: f32 = 5.0;
/// Legend columns, measured left from the last dot column (mm).
const RATINGS_INSET: f32 = 30.0;
const TRACKING_INSET: f32 = 45.0;

/// Rating and tracking keys printed at the foot of facing tracker pages. Both lists are
/// given top-to-bottom as they read on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerLegend {
    pub ratings: Vec<String>,
    pub tracking: Vec<String>,
}

impl TrackerLegend {
    pub fn new<I, J, S, T>(ratings: I, tracking: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            ratings: ratings.into_iter().map(Into::into).collect(),
            tracking: tracking.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for TrackerLegend {
    fn default() -> Self {
        Self::new(
            ["Great", "Good", "OK", "Meh", "Didn't finish"],
            ["New", "Repeat", "Previously unfinished"],
        )
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RuledPage {
    /// Empty for no heading.
    pub heading: String,
    /// Facing (even) page of a spread.
    pub mirror: bool,
    pub legend: Option<TrackerLegend>,
}

impl RuledPage {
    pub fn new(heading: impl Into<String>, mirror: bool) -> Self {
        Self { heading: heading.into(), mirror, legend: None }
    }

    pub fn with_legend(mut self, legend: TrackerLegend) -> Self {
        self.legend = Some(legend);
        self
    }

    pub(crate) fn draw(&self, p: &mut PagePainter<'_>) -> LayoutResult<()> {
        let grid = p.dot_grid(!self.mirror);
        let has_heading = !self.heading.is_empty();
        let rows = grid.rows().to_vec();
        let top = rows.len().saturating_sub(1);

        let (first_x, last_x) = (grid.column(0)?, grid.column(-1)?);
        let bottom_limit = if self.mirror { mm(LEGEND_FLOOR) } else { grid.row(0)? };

        for (i, &y) in rows.iter().enumerate() {
            if self.mirror && (i == 0 || y < bottom_limit) {
                continue;
            }
            if has_heading && i == top {
                p.hrule(grid.column(1)?, grid.column(-3)?, y);
            } else {
                p.hrule(first_x, last_x, y);
            }
        }

        let bottom = bottom_limit - mm(VERTICAL_OVERHANG);
        let top_y = grid.row(if has_heading { -2 } else { -1 })?;
        for col in [1, -3, -2] {
            p.vrule(grid.column(col)?, bottom, top_y);
        }

        if has_heading {
            let style = p.text_style(FontRole::Text, p.style().sizes.heading);
            let target = Point::new(grid.column(1)?, grid.row(-2)?);
            p.text_on_line(&self.heading, target, VerticalFit::EmBox, &style);
        }

        if let Some(legend) = &self.legend {
            let style = p.text_style(FontRole::Text, p.style().sizes.list);
            let ratings: Vec<String> = legend.ratings.iter().rev().cloned().collect();
            let tracking: Vec<String> = legend.tracking.iter().rev().cloned().collect();
            let ratings_at = Point::new(last_x - mm(RATINGS_INSET), grid.row(0)?);
            p.list_up(&ratings, ratings_at, VerticalFit::EmBox, &style, false);
            let tracking_at = Point::new(last_x - mm(TRACKING_INSET), grid.row(1)?);
            p.list_up(&tracking, tracking_at, VerticalFit::EmBox, &style, true);
        }
        Ok(())
    }
}
