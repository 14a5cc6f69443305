use clap::Subcommand;
use sproutcal_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value (e.g. "view.default_mode", "fixture_path")
    Get { key: String },
    /// Change one value and save; lists take "exam,training" or JSON
    Set { key: String, value: String },
    /// Print the whole config as TOML
    List,
    /// Print the config file location
    Path,
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            // echo the normalized value, e.g. a sorted type filter
            let stored = config.get(&key).unwrap_or(value);
            tracing::debug!(%key, %stored, "config updated");
            println!("{key} = {stored}");
        }
        ConfigAction::List => {
            print!("{}", Config::load()?.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Reset => {
            let path = Config::path()?;
            Config::default().save_to(&path)?;
            println!("reset {}", path.display());
        }
    }
    Ok(())
}
