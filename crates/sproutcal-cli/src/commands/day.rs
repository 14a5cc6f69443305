use clap::Args;
use serde::Serialize;
use sproutcal_core::{day_layout, spans_for_week, week_window, CalendarEvent, DayCell};

use super::SourceArgs;

#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Serialize)]
struct DayReport<'a> {
    #[serde(flatten)]
    cell: DayCell<'a>,
    /// Multi-day events running through this day
    ongoing: Vec<&'a CalendarEvent>,
}

pub fn run(args: DayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = args.source.resolve()?;
    let events = &ctx.fixture.events;

    let cell = day_layout(ctx.date, events, &ctx.fixture.phases, &ctx.filter);
    let week = week_window(ctx.date);
    let col = week.iter().position(|d| *d == ctx.date).unwrap_or(0);
    let ongoing: Vec<&CalendarEvent> = spans_for_week(&week, events, &ctx.filter)
        .into_iter()
        .filter(|span| col >= span.start_col && col <= span.end_col)
        .map(|span| span.event)
        .collect();

    if ctx.json {
        let report = DayReport { cell, ongoing };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let phase = cell.phase.map(|p| p.as_str()).unwrap_or("none");
    println!("{} ({})", ctx.date.format("%A %Y-%m-%d"), phase);
    if cell.events.is_empty() && ongoing.is_empty() {
        println!("  no events");
    }
    for event in &ongoing {
        println!(
            "  ongoing {} .. {}: {} [{}]",
            event.start_date.date(),
            event.end_date.date(),
            event.title,
            event.kind
        );
    }
    for event in &cell.events {
        println!(
            "  {} - {}: {} [{}]",
            event.start_date.format("%H:%M"),
            event.end_date.format("%H:%M"),
            event.title,
            event.kind
        );
    }
    Ok(())
}
