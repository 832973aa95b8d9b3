// File: crates/dotplan-core/tests/calendar.rs
// Purpose: Month week tables, weekday helpers and the shared month grid renderer.

use chrono::Weekday;
use dotplan_core::calendar::{is_weekend, month_abbrev, month_name};
use dotplan_core::error::Axis;
use dotplan_core::layout::PagePainter;
use dotplan_core::pages::{month_grid, MonthGridStyle};
use dotplan_core::{Cell, DotGrid, Layout, LayoutError, MonthCalendar, RecordingCanvas};

#[test]
fn saturday_start_30_day_month_has_five_weeks() {
    // November 2025 starts on a Saturday.
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    assert_eq!(cal.days_in_month(), 30);
    assert_eq!(cal.week_count(), 5);
    assert_eq!(cal.week(0).unwrap(), [0, 0, 0, 0, 0, 1, 2]);
    assert_eq!(cal.week(-1).unwrap(), [24, 25, 26, 27, 28, 29, 30]);
    assert_eq!(cal.weeks()[0].iter().filter(|&&d| d != 0).count(), 2);
    assert_eq!(cal.position(1).unwrap(), (0, 5));
    assert_eq!(cal.position(3).unwrap(), (1, 0));
}

#[test]
fn week_index_beyond_the_month_is_an_error() {
    // February 2021: Monday 1st, 28 days, exactly four weeks.
    let feb = MonthCalendar::monday_first(2021, 2).unwrap();
    assert_eq!(feb.week_count(), 4);
    assert_eq!(
        feb.week(5),
        Err(LayoutError::IndexOutOfRange { axis: Axis::Week, index: 5, len: 4 })
    );
    assert!(feb.week(-5).is_err());
}

#[test]
fn sunday_first_tables_shift_columns() {
    let cal = MonthCalendar::new(2025, 11, Weekday::Sun).unwrap();
    assert_eq!(cal.week(0).unwrap(), [0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(cal.weekday_at(0), Weekday::Sun);
    assert_eq!(cal.week_count(), 6);
}

#[test]
fn days_carry_their_weekday() {
    let cal = MonthCalendar::monday_first(2024, 2).unwrap();
    let days: Vec<_> = cal.days().collect();
    assert_eq!(days.len(), 29);
    for (day, weekday) in days {
        assert_eq!(cal.weekday(day).unwrap(), weekday);
    }
    assert!(is_weekend(Weekday::Sat) && is_weekend(Weekday::Sun));
    assert!(!is_weekend(Weekday::Fri));
}

#[test]
fn invalid_months_are_rejected() {
    assert_eq!(MonthCalendar::monday_first(2025, 13), Err(LayoutError::InvalidMonth(13)));
    assert_eq!(MonthCalendar::monday_first(2025, 0), Err(LayoutError::InvalidMonth(0)));
    assert_eq!(month_name(0), Err(LayoutError::InvalidMonth(0)));
    assert!(MonthCalendar::monday_first(2025, 11).unwrap().weekday(31).is_err());
}

#[test]
fn month_names_are_upper_case() {
    assert_eq!(month_name(11).unwrap(), "NOVEMBER");
    assert_eq!(month_abbrev(11).unwrap(), "NOV");
    assert_eq!(month_abbrev(5).unwrap(), "MAY");
}

#[test]
fn month_grid_skips_padding_and_colors_weekends() {
    let layout = Layout::default();
    let theme = layout.style.theme;
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    let grid = DotGrid::new(&layout.geometry, false);
    let mut canvas = RecordingCanvas::new();
    let weeks = {
        let mut p = PagePainter::new(&mut canvas, &layout);
        let style = MonthGridStyle { weekend_alert: true, separator: Some(100.0) };
        month_grid(&mut p, &grid, &cal, Cell::new(0, -3), style).unwrap()
    };
    assert_eq!(weeks, 5);

    let ops = canvas.current();
    let texts = RecordingCanvas::texts(ops);
    // One draw per real day; padding cells issue nothing.
    assert_eq!(texts.len(), 30);
    for (text, _, style) in &texts {
        let day: u32 = text.parse().unwrap();
        let weekend = is_weekend(cal.weekday(day).unwrap());
        let want = if weekend { theme.alert } else { theme.ink };
        assert_eq!(style.color, want, "day {day}");
    }

    // Every week of November 2025 reaches Sunday, so each gets a separator.
    let lines = RecordingCanvas::lines(ops);
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|(from, to, stroke)| {
        stroke.color == theme.muted && (to.x - from.x - 100.0).abs() < 1e-3
    }));
}

#[test]
fn plain_month_grid_draws_no_color_and_no_rules() {
    let layout = Layout::default();
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    let grid = DotGrid::new(&layout.geometry, false);
    let mut canvas = RecordingCanvas::new();
    {
        let mut p = PagePainter::new(&mut canvas, &layout);
        let style = MonthGridStyle { weekend_alert: false, separator: None };
        month_grid(&mut p, &grid, &cal, Cell::new(2, 10), style).unwrap();
    }
    let ops = canvas.current();
    assert!(RecordingCanvas::lines(ops).is_empty());
    assert!(RecordingCanvas::texts(ops).iter().all(|(_, _, s)| s.color == layout.style.theme.ink));
}

#[test]
fn month_grid_places_days_on_grid_cells() {
    let layout = Layout::default();
    let grid = DotGrid::new(&layout.geometry, false);
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    let mut canvas = RecordingCanvas::new();
    {
        let mut p = PagePainter::new(&mut canvas, &layout);
        let style = MonthGridStyle { weekend_alert: false, separator: None };
        month_grid(&mut p, &grid, &cal, Cell::new(1, -3), style).unwrap();
    }
    let spacing = layout.geometry.spacing();
    let texts = RecordingCanvas::texts(canvas.current());
    // The 3rd is a Monday in the second week: column 1, one row below the first week.
    let third = texts.iter().find(|(t, _, _)| *t == "3").unwrap().1;
    let cell = grid.cell_origin(Cell::new(1, -4)).unwrap();
    assert!(third.x > cell.x && third.x < cell.x + spacing);
    assert!(third.y > cell.y && third.y < cell.y + spacing);
}

#[test]
fn month_grid_that_runs_off_the_grid_draws_nothing() {
    let layout = Layout::default();
    let grid = DotGrid::new(&layout.geometry, false);
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    let mut canvas = RecordingCanvas::new();
    let result = {
        let mut p = PagePainter::new(&mut canvas, &layout);
        let style = MonthGridStyle { weekend_alert: true, separator: Some(100.0) };
        month_grid(&mut p, &grid, &cal, Cell::new(0, 2), style)
    };
    assert!(matches!(result, Err(LayoutError::IndexOutOfRange { axis: Axis::Row, .. })));
    assert!(canvas.current().is_empty());
}

#[test]
fn position_rejects_days_outside_the_month() {
    let cal = MonthCalendar::monday_first(2025, 11).unwrap();
    assert_eq!(cal.position(30).unwrap(), (4, 6));
    assert!(matches!(cal.position(31), Err(LayoutError::InvalidDate { .. })));
    assert!(matches!(cal.position(0), Err(LayoutError::InvalidDate { .. })));
}
