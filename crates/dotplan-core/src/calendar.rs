// File: crates/dotplan-core/src/calendar.rs
// Summary: Month week tables (7-column grids with 0 padding) and weekday helpers built on chrono.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::error::{Axis, LayoutError, LayoutResult};

/// Saturday and Sunday (weekday index >= 5, Monday = 0).
pub fn is_weekend(weekday: Weekday) -> bool {
    weekday.num_days_from_monday() >= 5
}

fn month_of(month: u32) -> LayoutResult<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(LayoutError::InvalidMonth(month))
}

/// Full English month name in upper case, e.g. "NOVEMBER".
pub fn month_name(month: u32) -> LayoutResult<String> {
    Ok(month_of(month)?.name().to_uppercase())
}

/// Three-letter upper-case abbreviation, e.g. "NOV".
pub fn month_abbrev(month: u32) -> LayoutResult<String> {
    Ok(month_of(month)?.name().chars().take(3).collect::<String>().to_uppercase())
}

/// Day numbers of one month laid out in weeks; 0 marks cells outside the month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthCalendar {
    year: i32,
    month: u32,
    first_weekday: Weekday,
    days_in_month: u32,
    weeks: Vec<[u32; 7]>,
}

impl MonthCalendar {
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> LayoutResult<Self> {
        month_of(month)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(LayoutError::InvalidDate { year, month, day: 1 })?;
        let days_in_month = first.iter_days().take_while(|d| d.month() == month).count() as u32;

        let lead = column_offset(first.weekday(), first_weekday);
        let mut weeks = Vec::with_capacity(6);
        let mut week = [0u32; 7];
        let mut col = lead;
        for day in 1..=days_in_month {
            week[col] = day;
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [0; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        Ok(Self { year, month, first_weekday, days_in_month, weeks })
    }

    /// Week table starting on Monday.
    pub fn monday_first(year: i32, month: u32) -> LayoutResult<Self> {
        Self::new(year, month, Weekday::Mon)
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }
    pub fn first_weekday(&self) -> Weekday { self.first_weekday }
    pub fn days_in_month(&self) -> u32 { self.days_in_month }
    pub fn weeks(&self) -> &[[u32; 7]] { &self.weeks }
    pub fn week_count(&self) -> usize { self.weeks.len() }

    /// Week `index`; negative indices count from the last week.
    pub fn week(&self, index: isize) -> LayoutResult<[u32; 7]> {
        let len = self.weeks.len();
        let resolved = if index < 0 { len as isize + index } else { index };
        if resolved < 0 || resolved >= len as isize {
            return Err(LayoutError::IndexOutOfRange { axis: Axis::Week, index, len });
        }
        Ok(self.weeks[resolved as usize])
    }

    pub fn weekday(&self, day: u32) -> LayoutResult<Weekday> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .map(|d| d.weekday())
            .ok_or(LayoutError::InvalidDate { year: self.year, month: self.month, day })
    }

    /// (week row, weekday column) of `day` within the table.
    pub fn position(&self, day: u32) -> LayoutResult<(usize, usize)> {
        if day == 0 || day > self.days_in_month {
            return Err(LayoutError::InvalidDate { year: self.year, month: self.month, day });
        }
        let slot = self.lead() + day as usize - 1;
        Ok((slot / 7, slot % 7))
    }

    /// Every day of the month with its weekday, in order.
    pub fn days(&self) -> impl Iterator<Item = (u32, Weekday)> + '_ {
        let lead = self.lead();
        (1..=self.days_in_month).map(move |day| {
            let col = (lead + day as usize - 1) % 7;
            (day, self.weekday_at(col))
        })
    }

    /// Padding cells before the 1st.
    fn lead(&self) -> usize {
        self.weeks.first().map(|w| w.iter().take_while(|&&d| d == 0).count()).unwrap_or(0)
    }

    /// Weekday shown in table column `col`.
    pub fn weekday_at(&self, col: usize) -> Weekday {
        let mut wd = self.first_weekday;
        for _ in 0..col % 7 {
            wd = wd.succ();
        }
        wd
    }
}

/// Column of `weekday` in a table whose first column is `first`.
fn column_offset(weekday: Weekday, first: Weekday) -> usize {
    ((weekday.num_days_from_monday() + 7 - first.num_days_from_monday()) % 7) as usize
}
