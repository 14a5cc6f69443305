pub mod config;
pub mod day;
pub mod phase;
pub mod view;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use sproutcal_core::{CalendarFixture, Config, EventType, TypeFilter};

/// Where calendar data comes from and how it is printed.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Fixture JSON file, defaults to `fixture_path` from config
    #[arg(long)]
    pub fixture: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Data options plus the event type filter, for commands that list events.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[command(flatten)]
    pub data: DataArgs,
    /// Only show these event types (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<EventType>,
}

/// Everything a command needs, resolved against the config.
pub struct Context {
    pub config: Config,
    pub date: NaiveDate,
    pub fixture: CalendarFixture,
    pub filter: TypeFilter,
    pub json: bool,
}

impl DataArgs {
    /// Resolve with the configured type filter.
    pub fn resolve(self) -> Result<Context, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let filter = config.view.type_filter.clone();
        self.resolve_with(config, filter)
    }

    fn resolve_with(self, config: Config, filter: TypeFilter) -> Result<Context, Box<dyn std::error::Error>> {
        let path = match self.fixture {
            Some(path) => path,
            None => config
                .fixture()
                .map(PathBuf::from)
                .ok_or("no fixture given; pass --fixture or run `config set fixture_path <file>`")?,
        };
        let fixture = CalendarFixture::load(&path)?;

        Ok(Context {
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            json: self.json || config.output.json,
            fixture,
            filter,
            config,
        })
    }
}

impl SourceArgs {
    /// Resolve, letting `--type` override the configured filter.
    pub fn resolve(self) -> Result<Context, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let filter = if self.types.is_empty() {
            config.view.type_filter.clone()
        } else {
            TypeFilter::only(self.types)
        };
        self.data.resolve_with(config, filter)
    }
}
