//! Calendar records: events, training phases and the type filter.
//!
//! Records arrive as loosely shaped JSON. They are parsed into these strongly
//! typed structs once, at the fixture boundary, so the layout functions only
//! ever see well-formed values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::day;
use crate::error::ValidationError;

/// Fixed set of event categories shown on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Training,
    Exam,
    Workshop,
    Holiday,
    Meeting,
    Delivery,
    Maintenance,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Training,
        EventType::Exam,
        EventType::Workshop,
        EventType::Holiday,
        EventType::Meeting,
        EventType::Delivery,
        EventType::Maintenance,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Training => "training",
            EventType::Exam => "exam",
            EventType::Workshop => "workshop",
            EventType::Holiday => "holiday",
            EventType::Meeting => "meeting",
            EventType::Delivery => "delivery",
            EventType::Maintenance => "maintenance",
            EventType::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                let known: Vec<&str> = EventType::ALL.iter().map(EventType::as_str).collect();
                format!("unknown event type '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// A dated entry on the calendar. `start <= end` is checked by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(with = "flexible_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "flexible_datetime")]
    pub end_date: NaiveDateTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        kind: EventType,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            start_date,
            end_date,
            title: title.into(),
            description: None,
            location: None,
        }
    }

    /// Build an all-day event from plain dates.
    pub fn all_day(
        id: impl Into<String>,
        kind: EventType,
        start: NaiveDate,
        end: NaiveDate,
        title: impl Into<String>,
    ) -> Self {
        Self::new(id, kind, day::start_of_day(start), day::start_of_day(end), title)
    }

    /// Start truncated to midnight.
    pub fn normalized_start(&self) -> NaiveDateTime {
        day::normalize(self.start_date)
    }

    /// End truncated to midnight.
    pub fn normalized_end(&self) -> NaiveDateTime {
        day::normalize(self.end_date)
    }

    /// True when start and end fall on the same calendar day.
    pub fn is_single_day(&self) -> bool {
        self.normalized_start() == self.normalized_end()
    }

    /// True when the event crosses at least one midnight.
    pub fn is_multi_day(&self) -> bool {
        !self.is_single_day()
    }
}

/// A training cycle: a work interval followed by a cooldown interval.
///
/// The ordering `start <= end <= cooldown_start <= cooldown_end` is assumed,
/// not enforced. See [`Phase::is_ordered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "flexible_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "flexible_datetime")]
    pub end_date: NaiveDateTime,
    #[serde(with = "flexible_datetime")]
    pub cooldown_start: NaiveDateTime,
    #[serde(with = "flexible_datetime")]
    pub cooldown_end: NaiveDateTime,
}

impl Phase {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        cooldown_start: NaiveDate,
        cooldown_end: NaiveDate,
    ) -> Self {
        Self {
            name: None,
            start_date: day::start_of_day(start),
            end_date: day::start_of_day(end),
            cooldown_start: day::start_of_day(cooldown_start),
            cooldown_end: day::start_of_day(cooldown_end),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.start_date <= self.end_date
            && self.end_date <= self.cooldown_start
            && self.cooldown_start <= self.cooldown_end
    }
}

/// Allow-list of event types. An empty list lets every event through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EventType>")]
pub struct TypeFilter(Vec<EventType>);

impl TypeFilter {
    /// Filter that allows every type.
    pub fn all() -> Self {
        Self(Vec::new())
    }

    pub fn only(types: impl IntoIterator<Item = EventType>) -> Self {
        let mut types: Vec<EventType> = types.into_iter().collect();
        types.sort();
        types.dedup();
        Self(types)
    }

    pub fn allows(&self, kind: EventType) -> bool {
        self.0.is_empty() || self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn types(&self) -> &[EventType] {
        &self.0
    }
}

impl From<Vec<EventType>> for TypeFilter {
    fn from(types: Vec<EventType>) -> Self {
        Self::only(types)
    }
}

/// Parse the date formats found in calendar fixtures.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS[.fff]]`, and RFC 3339
/// with an offset, in which case the wall-clock time is kept as written.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day::start_of_day(date));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .map_err(|_| ValidationError::InvalidDate {
            value: value.to_string(),
        })
}

mod flexible_datetime {
    use super::*;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}

fn id_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_type_parses_case_insensitively() {
        assert_eq!("Workshop".parse::<EventType>().unwrap(), EventType::Workshop);
        assert_eq!(" exam ".parse::<EventType>().unwrap(), EventType::Exam);
        assert!("party".parse::<EventType>().is_err());
    }

    #[test]
    fn test_single_day_ignores_time_of_day() {
        let morning = date(2024, 6, 5).and_hms_opt(8, 0, 0).unwrap();
        let evening = date(2024, 6, 5).and_hms_opt(19, 30, 0).unwrap();
        let event = CalendarEvent::new("a", EventType::Meeting, morning, evening, "Staff sync");
        assert!(event.is_single_day());

        let overnight = date(2024, 6, 6).and_hms_opt(1, 0, 0).unwrap();
        let event = CalendarEvent::new("b", EventType::Meeting, evening, overnight, "Night shift");
        assert!(event.is_multi_day());
    }

    #[test]
    fn test_empty_filter_allows_everything() {
        let filter = TypeFilter::all();
        assert!(EventType::ALL.iter().all(|t| filter.allows(*t)));

        let filter = TypeFilter::only([EventType::Exam, EventType::Exam]);
        assert_eq!(filter.types(), &[EventType::Exam]);
        assert!(filter.allows(EventType::Exam));
        assert!(!filter.allows(EventType::Training));
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert_eq!(
            parse_datetime("2024-06-01").unwrap(),
            date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2024-06-01T09:30").unwrap(),
            date(2024, 6, 1).and_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2024-06-01T23:30:00+02:00").unwrap(),
            date(2024, 6, 1).and_hms_opt(23, 30, 0).unwrap()
        );
        assert!(matches!(
            parse_datetime("06/01/2024"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{
            "id": 7,
            "type": "training",
            "startDate": "2024-06-01",
            "endDate": "2024-06-04T17:00:00",
            "title": "Propagation course"
        }"#;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "7");
        assert_eq!(event.kind, EventType::Training);
        assert!(event.is_multi_day());

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "training");
        assert_eq!(value["endDate"], "2024-06-04T17:00:00");
        assert!(value.get("location").is_none());
    }

    #[test]
    fn test_phase_ordering_check() {
        let ordered = Phase::new(date(2024, 6, 1), date(2024, 6, 20), date(2024, 6, 21), date(2024, 6, 25));
        assert!(ordered.is_ordered());

        let overlapping = Phase::new(date(2024, 6, 1), date(2024, 6, 20), date(2024, 6, 10), date(2024, 6, 25));
        assert!(!overlapping.is_ordered());
    }

    #[test]
    fn test_phase_name_is_optional_in_json() {
        let unnamed = Phase::new(date(2024, 6, 1), date(2024, 6, 20), date(2024, 6, 21), date(2024, 6, 25));
        let value = serde_json::to_value(&unnamed).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["cooldownStart"], "2024-06-21T00:00:00");

        let named = unnamed.clone().with_name("Cohort 3");
        let value = serde_json::to_value(&named).unwrap();
        assert_eq!(value["name"], "Cohort 3");

        let back: Phase = serde_json::from_value(value).unwrap();
        assert_eq!(back, named);
        assert_ne!(back, unnamed);
    }
}
