//! JSON fixture loading.
//!
//! This is the only place calendar data is validated. Once a
//! [`CalendarFixture`] exists, the layout functions can trust it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarEvent, Phase};
use crate::error::{Result, ValidationError};

/// Events and training cycles read from a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarFixture {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl CalendarFixture {
    /// Parse and validate a fixture from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, an event ends before it
    /// starts, or two events share an id.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let fixture: CalendarFixture = serde_json::from_str(json)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read, parse and validate a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let fixture = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            events = fixture.events.len(),
            phases = fixture.phases.len(),
            "loaded calendar fixture"
        );
        Ok(fixture)
    }

    /// Check record invariants.
    ///
    /// Out-of-order phases are logged and kept; the lookup treats them with
    /// first-match-wins like any other phase.
    ///
    /// # Errors
    ///
    /// Returns the first invalid event found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for event in &self.events {
            if event.start_date > event.end_date {
                return Err(ValidationError::InvalidEventRange {
                    id: event.id.clone(),
                    start: event.start_date,
                    end: event.end_date,
                });
            }
            if !seen.insert(event.id.as_str()) {
                return Err(ValidationError::DuplicateEventId(event.id.clone()));
            }
        }

        for (index, phase) in self.phases.iter().enumerate() {
            if !phase.is_ordered() {
                tracing::warn!(
                    index,
                    name = phase.name.as_deref().unwrap_or(""),
                    "phase dates are out of order; keeping it as-is"
                );
            }
        }

        Ok(())
    }
}
