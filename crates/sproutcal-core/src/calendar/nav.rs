//! Stepping a reference date between calendar pages.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which grid the calendar is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl ViewMode {
    /// Move `reference` by `delta` pages (negative goes back).
    ///
    /// Month steps clamp the day to the target month, so Jan 31 + 1 month is
    /// Feb 28/29. Returns `None` when the result leaves chrono's date range.
    pub fn step(&self, reference: NaiveDate, delta: i32) -> Option<NaiveDate> {
        let forward = delta >= 0;
        match self {
            ViewMode::Month => {
                let months = Months::new(delta.unsigned_abs());
                if forward {
                    reference.checked_add_months(months)
                } else {
                    reference.checked_sub_months(months)
                }
            }
            ViewMode::Week => {
                let days = Days::new(u64::from(delta.unsigned_abs()) * 7);
                if forward {
                    reference.checked_add_days(days)
                } else {
                    reference.checked_sub_days(days)
                }
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Month => f.write_str("month"),
            ViewMode::Week => f.write_str("week"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            other => Err(format!("unknown view mode '{other}' (expected month or week)")),
        }
    }
}
