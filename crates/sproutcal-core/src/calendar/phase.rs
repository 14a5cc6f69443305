//! Training cycle shading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day;
use super::event::Phase;

/// Which half of a cycle a day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Work,
    Cooldown,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Work => "work",
            PhaseKind::Cooldown => "cooldown",
        }
    }
}

/// Classify `date` against `phases`.
///
/// Phases are checked in order and the first one whose work or cooldown
/// interval contains the date decides. Overlapping phases are not reconciled.
pub fn phase_for(date: NaiveDate, phases: &[Phase]) -> Option<PhaseKind> {
    let query = day::noon(date);
    phases.iter().find_map(|phase| {
        let work_start = day::start_of_day(phase.start_date.date());
        let work_end = day::end_of_day(phase.end_date.date());
        if query >= work_start && query <= work_end {
            return Some(PhaseKind::Work);
        }

        let cooldown_start = day::start_of_day(phase.cooldown_start.date());
        let cooldown_end = day::end_of_day(phase.cooldown_end.date());
        if query >= cooldown_start && query <= cooldown_end {
            return Some(PhaseKind::Cooldown);
        }

        None
    })
}
