//! Single-day events per date.
//!
//! Multi-day events are left to [`super::span`]; the two sets never overlap.

use chrono::NaiveDate;

use super::day;
use super::event::{CalendarEvent, TypeFilter};

/// Single-day events that fall on `date`, in input order.
pub fn single_day_events<'a>(
    date: NaiveDate,
    events: &'a [CalendarEvent],
    filter: &TypeFilter,
) -> Vec<&'a CalendarEvent> {
    let target = day::start_of_day(date);
    events
        .iter()
        .filter(|event| filter.allows(event.kind))
        .filter(|event| event.is_single_day() && event.normalized_start() == target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::event::EventType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_events() -> Vec<CalendarEvent> {
        vec![
            CalendarEvent::all_day("b", EventType::Exam, date(2024, 6, 5), date(2024, 6, 5), "Exam"),
            CalendarEvent::all_day("a", EventType::Training, date(2024, 6, 1), date(2024, 6, 4), "Course"),
            CalendarEvent::new(
                "c",
                EventType::Meeting,
                date(2024, 6, 5).and_hms_opt(14, 0, 0).unwrap(),
                date(2024, 6, 5).and_hms_opt(15, 0, 0).unwrap(),
                "Staff meeting",
            ),
        ]
    }

    #[test]
    fn test_matches_single_day_events_on_date() {
        let events = sample_events();
        let found = single_day_events(date(2024, 6, 5), &events, &TypeFilter::all());
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_excludes_multi_day_events() {
        let events = sample_events();
        assert!(single_day_events(date(2024, 6, 2), &events, &TypeFilter::all()).is_empty());
        assert!(single_day_events(date(2024, 6, 1), &events, &TypeFilter::all()).is_empty());
    }

    #[test]
    fn test_type_filter_applies() {
        let events = sample_events();
        let filter = TypeFilter::only([EventType::Meeting]);
        let found = single_day_events(date(2024, 6, 5), &events, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c");
    }
}
