// File: crates/dotplan-core/src/spreads.rs
// Summary: Ready-made page sequences: book/movie tracker, month spread, year spread.

use crate::calendar::month_name;
use crate::document::Document;
use crate::error::LayoutResult;
use crate::pages::{CalendarPage, DotGridPage, MonthLayoutPage, RuledPage, TaskListPage, TitlePage, TrackerLegend, YearCoverPage};

/// A titled section of facing ledger pages. `None` leaves a page without a heading.
fn tracker_section(doc: &mut Document, title: &str, pages: &[(Option<&str>, bool)]) {
    doc.push(TitlePage::new(title));
    for &(heading, mirror) in pages {
        let mut page = RuledPage::new(heading.unwrap_or_default(), mirror);
        if mirror {
            page = page.with_legend(TrackerLegend::default());
        }
        doc.push(page);
    }
    doc.push(DotGridPage::new(false));
}

/// BOOKS and MOVIES sections of the media tracker for the journal `year`.
pub fn books_and_movies(year: i32) -> Document {
    let mut doc = Document::new(format!("{year}_books"));
    tracker_section(
        &mut doc,
        "BOOKS",
        &[
            (Some("FANTASY & SCI_FI"), false),
            (None, true),
            (Some("MODERN PROSE & NON-FICTION"), false),
            (Some("FOREIGN LANGUAGES"), true),
        ],
    );
    tracker_section(
        &mut doc,
        "MOVIES",
        &[
            (Some("LIGHT FILMS"), false),
            (None, true),
            (Some("SERIOUS FILMS"), false),
            (None, true),
            (Some("LIGHT SERIES"), false),
            (None, true),
            (Some("SERIOUS SERIES"), false),
            (None, true),
            (Some("GAMES"), false),
            (None, true),
        ],
    );
    doc
}

/// Month cover, task list, layout page and a facing blank page.
pub fn month_spread(year: i32, month: u32) -> LayoutResult<Document> {
    let title = month_name(month)?;
    Ok(Document::new(format!("{year}_{month}"))
        .with(TitlePage::new(title))
        .with(TaskListPage::monthly())
        .with(MonthLayoutPage::new(year, month))
        .with(DotGridPage::new(true)))
}

/// Year cover, one calendar page per quarter (alternating facing pages), blank page.
pub fn year_spread(year: i32) -> Document {
    let mut doc = Document::new(format!("{year}_full")).with(YearCoverPage::new(year));
    for (quarter, months) in [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]].into_iter().enumerate() {
        doc.push(CalendarPage::new(year, months, quarter % 2 == 1));
    }
    doc.with(DotGridPage::new(true))
}

/// The full planner: year spread, every month spread, then the media tracker.
pub fn full_year(year: i32) -> LayoutResult<Document> {
    let mut doc = year_spread(year);
    doc.name = format!("{year}_planner");
    for month in 1..=12 {
        doc.extend(month_spread(year, month)?);
    }
    doc.extend(books_and_movies(year));
    Ok(doc)
}
