//! # SproutCal Core Library
//!
//! Calendar layout engine for the academy and nursery calendar screens. Given
//! a read-only list of events and training cycles, it builds the month and
//! week grids and works out what a renderer needs to draw in each cell.
//!
//! ## Architecture
//!
//! - **Calendar**: pure, stateless functions. The current navigation date and
//!   the active type filter are always passed in; nothing is cached.
//! - **Fixture**: the JSON loading boundary where records are validated.
//! - **Storage**: TOML configuration for the CLI.
//!
//! ## Key Components
//!
//! - [`month_grid`] / [`week_window`]: Monday-first date grids
//! - [`phase_for`]: work/cooldown shading
//! - [`single_day_events`]: events drawn inside a cell
//! - [`spans_for_week`]: multi-day bars across a week row
//! - [`month_layout`]: all of the above composed per month

pub mod calendar;
pub mod error;
pub mod fixture;
pub mod storage;

pub use calendar::{
    day_layout, month_grid, month_layout, phase_for, single_day_events, spans_for_week,
    week_layout, week_window, CalendarDay, CalendarEvent, DayCell, EventType, MonthLayout, Phase,
    PhaseKind, SpanningEvent, TypeFilter, ViewMode, WeekRow,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use fixture::CalendarFixture;
pub use storage::Config;
