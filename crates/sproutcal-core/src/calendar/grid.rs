//! Month and week grids.
//!
//! Both grids are Monday-first. The month grid is always 6 rows of 7 cells so
//! the renderer never has to cope with a variable row count.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cells in a month grid (6 weeks x 7 days).
pub const MONTH_GRID_CELLS: usize = 42;

/// Days in a week window.
pub const WEEK_DAYS: usize = 7;

/// One cell of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    // Monday = 0 ... Sunday = 6, so Sunday wraps back six days
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Seven consecutive dates starting on the Monday of `reference`'s week.
pub fn week_window(reference: NaiveDate) -> [NaiveDate; WEEK_DAYS] {
    let monday = week_start(reference);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first);
    (next - first).num_days() as u32
}

/// The 42-cell month grid for the month containing `reference`.
///
/// Leading cells come from the previous month, trailing cells from the next
/// one; year boundaries roll over naturally.
pub fn month_grid(reference: NaiveDate) -> [CalendarDay; MONTH_GRID_CELLS] {
    let first = first_of_month(reference);
    let grid_start = week_start(first);
    std::array::from_fn(|i| {
        let date = grid_start + Duration::days(i as i64);
        CalendarDay {
            date,
            is_current_month: date.year() == first.year() && date.month() == first.month(),
        }
    })
}

/// The month grid split into its six week rows.
pub fn month_weeks(reference: NaiveDate) -> Vec<[CalendarDay; WEEK_DAYS]> {
    month_grid(reference)
        .chunks_exact(WEEK_DAYS)
        .map(|row| std::array::from_fn(|i| row[i]))
        .collect()
}
