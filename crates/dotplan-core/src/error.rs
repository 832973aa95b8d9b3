// File: crates/dotplan-core/src/error.rs
// Summary: Layout error taxonomy (configuration, bounds, calendar input).

use std::fmt;

use thiserror::Error;

/// Which grid sequence an index was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
    Week,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
            Axis::Week => f.write_str("week"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("{axis} index {index} out of range for {len} entries")]
    IndexOutOfRange { axis: Axis, index: isize, len: usize },

    #[error("invalid month {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
