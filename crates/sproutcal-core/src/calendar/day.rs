//! Day normalization.
//!
//! Every comparison in the layout engine happens on normalized instants so
//! that the time-of-day carried by an event never shifts it across a cell.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 23:59:59.999, the last instant compared as part of a day.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("23:59:59.999 is a valid time"),
};

/// 12:00:00.
pub const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => panic!("12:00:00 is a valid time"),
};

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last representable instant of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(END_OF_DAY)
}

/// Noon of `date`. Queries are pinned here so they sit well inside the day.
pub fn noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NOON)
}

/// Truncate an instant to the start of its day.
pub fn normalize(instant: NaiveDateTime) -> NaiveDateTime {
    start_of_day(instant.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_bracket_the_whole_day() {
        let d = date(2024, 6, 3);
        assert_eq!(start_of_day(d).to_string(), "2024-06-03 00:00:00");
        assert_eq!(end_of_day(d).to_string(), "2024-06-03 23:59:59.999");
        assert!(start_of_day(d) < noon(d) && noon(d) < end_of_day(d));
    }

    #[test]
    fn day_constants_hold_expected_times() {
        assert_eq!(END_OF_DAY.to_string(), "23:59:59.999");
        assert_eq!(NOON.to_string(), "12:00:00");
        assert_eq!(noon(date(2024, 6, 3)).to_string(), "2024-06-03 12:00:00");
    }

    #[test]
    fn normalize_drops_time_of_day() {
        let late = date(2024, 6, 3).and_hms_opt(22, 15, 0).unwrap();
        assert_eq!(normalize(late), start_of_day(date(2024, 6, 3)));
    }
}
