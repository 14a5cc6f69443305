//! Property tests for the calendar layout engine.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use sproutcal_core::calendar::{days_in_month, day};
use sproutcal_core::{
    month_grid, single_day_events, spans_for_week, week_window, CalendarEvent, EventType,
    TypeFilter,
};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..1500).prop_map(|offset| base() + Duration::days(offset))
}

fn type_strategy() -> impl Strategy<Value = EventType> {
    prop::sample::select(EventType::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = CalendarEvent> {
    (date_strategy(), 0i64..20, 0u32..24, 0u32..24, type_strategy()).prop_map(
        |(start, len, start_hour, end_hour, kind)| {
            let end = start + Duration::days(len);
            let start_at = start.and_hms_opt(start_hour, 0, 0).unwrap();
            let mut end_at = end.and_hms_opt(end_hour, 0, 0).unwrap();
            if end_at < start_at {
                end_at = start_at;
            }
            CalendarEvent::new(format!("{start}-{len}"), kind, start_at, end_at, "generated")
        },
    )
}

fn events_strategy() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec(event_strategy(), 0..25)
}

fn filter_strategy() -> impl Strategy<Value = TypeFilter> {
    prop::collection::vec(type_strategy(), 0..3).prop_map(TypeFilter::only)
}

proptest! {
    #[test]
    fn month_grid_has_42_cells_and_whole_month(reference in date_strategy()) {
        let grid = month_grid(reference);
        prop_assert_eq!(grid.len(), 42);
        prop_assert_eq!(grid[0].date.weekday(), Weekday::Mon);

        let current = grid.iter().filter(|d| d.is_current_month).count() as u32;
        prop_assert_eq!(current, days_in_month(reference));

        for pair in grid.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn week_window_is_seven_consecutive_days_from_monday(reference in date_strategy()) {
        let week = week_window(reference);
        prop_assert_eq!(week[0].weekday(), Weekday::Mon);
        prop_assert!(week.contains(&reference));
        for (i, d) in week.iter().enumerate() {
            prop_assert_eq!(*d, week[0] + Duration::days(i as i64));
        }
    }

    #[test]
    fn single_day_membership(date in date_strategy(), events in events_strategy()) {
        let found = single_day_events(date, &events, &TypeFilter::all());
        let target = day::start_of_day(date);
        for event in &events {
            let expected = event.normalized_start() == target && event.normalized_end() == target;
            let included = found.iter().any(|e| std::ptr::eq(*e, event));
            prop_assert_eq!(included, expected);
        }
    }

    #[test]
    fn spans_cover_exactly_the_overlapping_multi_day_events(
        reference in date_strategy(),
        events in events_strategy(),
        filter in filter_strategy(),
    ) {
        let week = week_window(reference);
        let spans = spans_for_week(&week, &events, &filter);

        for event in &events {
            let overlaps = event.normalized_start() <= day::start_of_day(week[6])
                && event.normalized_end() >= day::start_of_day(week[0]);
            let expected = filter.allows(event.kind) && event.is_multi_day() && overlaps;
            let included = spans.iter().any(|s| std::ptr::eq(s.event, event));
            prop_assert_eq!(included, expected);
        }

        for span in &spans {
            prop_assert!(span.start_col <= span.end_col && span.end_col < 7);
            prop_assert_eq!(span.span_days, span.end_col - span.start_col + 1);
            prop_assert_eq!(
                span.continues_from_prev_week,
                span.event.start_date.date() < week[0]
            );
            prop_assert_eq!(
                span.continues_to_next_week,
                span.event.end_date.date() > week[6]
            );
        }

        for pair in spans.windows(2) {
            let ordered = pair[0].start_col < pair[1].start_col
                || (pair[0].start_col == pair[1].start_col && pair[0].span_days >= pair[1].span_days);
            prop_assert!(ordered);
        }
    }

    #[test]
    fn spans_are_idempotent(reference in date_strategy(), events in events_strategy()) {
        let week = week_window(reference);
        let first = spans_for_week(&week, &events, &TypeFilter::all());
        let second = spans_for_week(&week, &events, &TypeFilter::all());
        prop_assert_eq!(first, second);
    }
}
