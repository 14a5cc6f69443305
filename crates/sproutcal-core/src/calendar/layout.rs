//! Renderer-ready month, week and day layouts.
//!
//! These compose the grid, phase lookup, single-day partition and span
//! projection into plain structs. Nothing here is cached; every call
//! recomputes from the inputs.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::event::{CalendarEvent, Phase, TypeFilter};
use super::grid::{self, CalendarDay, WEEK_DAYS};
use super::partition::single_day_events;
use super::phase::{phase_for, PhaseKind};
use super::span::{spans_for_week, SpanningEvent};

/// One grid cell with everything drawn inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell<'a> {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub phase: Option<PhaseKind>,
    pub events: Vec<&'a CalendarEvent>,
}

/// A Monday-to-Sunday row plus the multi-day bars drawn across it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekRow<'a> {
    pub days: Vec<DayCell<'a>>,
    pub spans: Vec<SpanningEvent<'a>>,
}

/// Six week rows for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout<'a> {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow<'a>>,
}

impl<'a> MonthLayout<'a> {
    /// All cells in grid order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell<'a>> + '_ {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Lay out a single day.
pub fn day_layout<'a>(
    date: NaiveDate,
    events: &'a [CalendarEvent],
    phases: &[Phase],
    filter: &TypeFilter,
) -> DayCell<'a> {
    day_cell(CalendarDay { date, is_current_month: true }, events, phases, filter)
}

/// Lay out the week containing `reference`.
///
/// Days outside the reference date's month are flagged as such, matching the
/// shading of the month view.
pub fn week_layout<'a>(
    reference: NaiveDate,
    events: &'a [CalendarEvent],
    phases: &[Phase],
    filter: &TypeFilter,
) -> WeekRow<'a> {
    let dates = grid::week_window(reference);
    let days: [CalendarDay; WEEK_DAYS] = std::array::from_fn(|i| CalendarDay {
        date: dates[i],
        is_current_month: dates[i].year() == reference.year()
            && dates[i].month() == reference.month(),
    });
    week_row(&days, events, phases, filter)
}

/// Lay out the month containing `reference`.
pub fn month_layout<'a>(
    reference: NaiveDate,
    events: &'a [CalendarEvent],
    phases: &[Phase],
    filter: &TypeFilter,
) -> MonthLayout<'a> {
    let weeks = grid::month_weeks(reference)
        .iter()
        .map(|days| week_row(days, events, phases, filter))
        .collect();

    MonthLayout {
        year: reference.year(),
        month: reference.month(),
        weeks,
    }
}

fn week_row<'a>(
    days: &[CalendarDay; WEEK_DAYS],
    events: &'a [CalendarEvent],
    phases: &[Phase],
    filter: &TypeFilter,
) -> WeekRow<'a> {
    let dates: [NaiveDate; WEEK_DAYS] = std::array::from_fn(|i| days[i].date);
    WeekRow {
        days: days
            .iter()
            .map(|day| day_cell(*day, events, phases, filter))
            .collect(),
        spans: spans_for_week(&dates, events, filter),
    }
}

fn day_cell<'a>(
    day: CalendarDay,
    events: &'a [CalendarEvent],
    phases: &[Phase],
    filter: &TypeFilter,
) -> DayCell<'a> {
    DayCell {
        day,
        phase: phase_for(day.date, phases),
        events: single_day_events(day.date, events, filter),
    }
}
