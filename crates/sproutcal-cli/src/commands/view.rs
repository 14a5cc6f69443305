use chrono::{Datelike, NaiveDate};
use clap::Args;
use sproutcal_core::{month_layout, week_layout, DayCell, PhaseKind, ViewMode, WeekRow};

use super::SourceArgs;

const CELL_WIDTH: usize = 5;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Pages to move from the reference date (negative goes back)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,
}

/// Render a month or week. `None` uses the configured default mode.
pub fn run(mode: Option<ViewMode>, args: ViewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = args.source.resolve()?;
    let mode = mode.unwrap_or(ctx.config.view.default_mode);
    let reference = mode.step(ctx.date, args.offset).ok_or_else(|| {
        format!(
            "offset {} moves {} outside the supported date range",
            args.offset, ctx.date
        )
    })?;
    tracing::debug!(%mode, %reference, "rendering view");

    match mode {
        ViewMode::Month => {
            let layout = month_layout(reference, &ctx.fixture.events, &ctx.fixture.phases, &ctx.filter);
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
                return Ok(());
            }
            println!("{}", reference.format("%B %Y"));
            println!("{}", header_line());
            for row in &layout.weeks {
                print_week_row(row);
            }
        }
        ViewMode::Week => {
            let row = week_layout(reference, &ctx.fixture.events, &ctx.fixture.phases, &ctx.filter);
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&row)?);
                return Ok(());
            }
            if let (Some(first), Some(last)) = (row.days.first(), row.days.last()) {
                println!("Week {} .. {}", first.day.date, last.day.date);
            }
            println!("{}", header_line());
            print_week_row(&row);
        }
    }
    Ok(())
}

fn header_line() -> String {
    WEEKDAYS
        .iter()
        .map(|d| format!("{d:>width$} ", width = CELL_WIDTH - 1))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Day number with a suffix: `w` work, `c` cooldown. Other-month days are dotted.
pub fn day_label(cell: &DayCell<'_>) -> String {
    let marker = match cell.phase {
        Some(PhaseKind::Work) => 'w',
        Some(PhaseKind::Cooldown) => 'c',
        None => ' ',
    };
    let prefix = if cell.day.is_current_month { ' ' } else { '.' };
    format!("{prefix}{:>2}{marker}", cell.day.date.day())
}

fn print_week_row(row: &WeekRow<'_>) {
    let days: Vec<String> = row.days.iter().map(|cell| format!("{} ", day_label(cell))).collect();
    println!("{}", days.concat().trim_end());

    for span in &row.spans {
        let mut bar = String::new();
        for col in 0..row.days.len() {
            let covered = col >= span.start_col && col <= span.end_col;
            let segment = if !covered {
                " ".repeat(CELL_WIDTH)
            } else if col == span.start_col && span.continues_from_prev_week {
                format!("<{}", "=".repeat(CELL_WIDTH - 1))
            } else if col == span.end_col && span.continues_to_next_week {
                format!("{}>", "=".repeat(CELL_WIDTH - 1))
            } else {
                "=".repeat(CELL_WIDTH)
            };
            bar.push_str(&segment);
        }
        println!("{bar} {} [{}]", span.event.title, span.event.kind);
    }

    for cell in &row.days {
        for event in &cell.events {
            println!(
                "  {} {}: {} [{}]",
                weekday_name(cell.day.date),
                cell.day.date.format("%m-%d"),
                event.title,
                event.kind
            );
        }
    }
}

fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}
