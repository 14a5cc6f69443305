//! Multi-day span projection.
//!
//! For one week window, turns every overlapping multi-day event into a bar
//! described by its first and last column. Bars are ordered for stacking but
//! not packed into lanes: two bars covering the same columns are both
//! returned and the renderer draws them in list order.

use chrono::NaiveDate;
use serde::Serialize;

use super::day;
use super::event::{CalendarEvent, TypeFilter};
use super::grid::WEEK_DAYS;

/// A multi-day event clipped to one week window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningEvent<'a> {
    pub event: &'a CalendarEvent,
    /// First covered column (0 = Monday)
    pub start_col: usize,
    /// Last covered column, inclusive
    pub end_col: usize,
    pub span_days: usize,
    pub continues_from_prev_week: bool,
    pub continues_to_next_week: bool,
}

/// Project multi-day events onto `week`.
///
/// Output is sorted by `start_col` ascending, then `span_days` descending.
/// The sort is stable, so events with equal keys keep their input order.
pub fn spans_for_week<'a>(
    week: &[NaiveDate; WEEK_DAYS],
    events: &'a [CalendarEvent],
    filter: &TypeFilter,
) -> Vec<SpanningEvent<'a>> {
    let week_start = day::start_of_day(week[0]);
    let week_end = day::end_of_day(week[WEEK_DAYS - 1]);

    let mut spans: Vec<SpanningEvent<'a>> = Vec::new();
    for event in events.iter().filter(|e| filter.allows(e.kind)) {
        if event.is_single_day() {
            continue;
        }

        let start = event.normalized_start();
        let end = event.normalized_end();
        if day::end_of_day(end.date()) < week_start || start > week_end {
            continue;
        }

        let mut covered = week
            .iter()
            .enumerate()
            .filter(|(_, date)| {
                let d = day::start_of_day(**date);
                d >= start && d <= end
            })
            .map(|(col, _)| col);

        let Some(start_col) = covered.next() else {
            continue;
        };
        let end_col = covered.last().unwrap_or(start_col);

        spans.push(SpanningEvent {
            event,
            start_col,
            end_col,
            span_days: end_col - start_col + 1,
            continues_from_prev_week: start < week_start,
            continues_to_next_week: end > week_end,
        });
    }

    spans.sort_by(|a, b| {
        a.start_col
            .cmp(&b.start_col)
            .then_with(|| b.span_days.cmp(&a.span_days))
    });

    tracing::debug!(
        week_start = %week[0],
        candidates = events.len(),
        spans = spans.len(),
        "projected multi-day spans"
    );

    spans
}
