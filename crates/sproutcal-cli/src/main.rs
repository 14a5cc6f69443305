use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sproutcal-cli", version, about = "SproutCal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with multi-day bars
    Month(commands::view::ViewArgs),
    /// Show one Monday-to-Sunday week
    Week(commands::view::ViewArgs),
    /// Show the configured default view
    Show(commands::view::ViewArgs),
    /// Show events and cycle phase for a single day
    Day(commands::day::DayArgs),
    /// Print the cycle phase of a date
    Phase(commands::phase::PhaseArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Month(args) => commands::view::run(Some(sproutcal_core::ViewMode::Month), args),
        Commands::Week(args) => commands::view::run(Some(sproutcal_core::ViewMode::Week), args),
        Commands::Show(args) => commands::view::run(None, args),
        Commands::Day(args) => commands::day::run(args),
        Commands::Phase(args) => commands::phase::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
