// File: crates/dotplan-core/src/pages/mod.rs
// Summary: Page archetypes as one tagged variant; each draws itself from (layout, content).

mod calendar;
mod month;
mod ruled;
mod tasks;
mod title;

pub use calendar::{month_grid, CalendarPage, MonthGridStyle};
pub use month::MonthLayoutPage;
pub use ruled::{RuledPage, TrackerLegend};
pub use tasks::TaskListPage;
pub use title::{DotGridPage, TitlePage, YearCoverPage};

use log::debug;

use crate::canvas::Canvas;
use crate::error::LayoutResult;
use crate::layout::{Layout, PagePainter};

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Title(TitlePage),
    YearCover(YearCoverPage),
    DotGrid(DotGridPage),
    Ruled(RuledPage),
    Calendar(CalendarPage),
    TaskList(TaskListPage),
    MonthLayout(MonthLayoutPage),
}

impl Page {
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Title(_) => "title",
            Page::YearCover(_) => "year-cover",
            Page::DotGrid(_) => "dot-grid",
            Page::Ruled(_) => "ruled",
            Page::Calendar(_) => "calendar",
            Page::TaskList(_) => "task-list",
            Page::MonthLayout(_) => "month-layout",
        }
    }

    /// Issue every draw call of this page. Does not finish the page.
    pub fn draw(&self, canvas: &mut dyn Canvas, layout: &Layout) -> LayoutResult<()> {
        debug!("drawing {} page", self.kind());
        let mut painter = PagePainter::new(canvas, layout);
        match self {
            Page::Title(p) => p.draw(&mut painter),
            Page::YearCover(p) => p.draw(&mut painter),
            Page::DotGrid(p) => p.draw(&mut painter),
            Page::Ruled(p) => p.draw(&mut painter),
            Page::Calendar(p) => p.draw(&mut painter),
            Page::TaskList(p) => p.draw(&mut painter),
            Page::MonthLayout(p) => p.draw(&mut painter),
        }
    }
}

impl From<TitlePage> for Page {
    fn from(p: TitlePage) -> Self { Page::Title(p) }
}
impl From<YearCoverPage> for Page {
    fn from(p: YearCoverPage) -> Self { Page::YearCover(p) }
}
impl From<DotGridPage> for Page {
    fn from(p: DotGridPage) -> Self { Page::DotGrid(p) }
}
impl From<RuledPage> for Page {
    fn from(p: RuledPage) -> Self { Page::Ruled(p) }
}
impl From<CalendarPage> for Page {
    fn from(p: CalendarPage) -> Self { Page::Calendar(p) }
}
impl From<TaskListPage> for Page {
    fn from(p: TaskListPage) -> Self { Page::TaskList(p) }
}
impl From<MonthLayoutPage> for Page {
    fn from(p: MonthLayoutPage) -> Self { Page::MonthLayout(p) }
}
