//! Calendar layout engine.
//!
//! This module provides:
//! - Monday-first month (42 cells) and week (7 days) grids
//! - Work/cooldown shading from training cycles
//! - Single-day event lookup per date
//! - Multi-day span projection per week window
//! - Composed month/week/day layouts for a renderer

pub mod day;
mod event;
mod grid;
mod layout;
mod nav;
mod partition;
mod phase;
mod span;

pub use event::{parse_datetime, CalendarEvent, EventType, Phase, TypeFilter};
pub use grid::{
    days_in_month, first_of_month, month_grid, month_weeks, week_start, week_window, CalendarDay,
    MONTH_GRID_CELLS, WEEK_DAYS,
};
pub use layout::{day_layout, month_layout, week_layout, DayCell, MonthLayout, WeekRow};
pub use nav::ViewMode;
pub use partition::single_day_events;
pub use phase::{phase_for, PhaseKind};
pub use span::{spans_for_week, SpanningEvent};
