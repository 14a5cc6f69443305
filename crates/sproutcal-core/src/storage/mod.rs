//! Where SproutCal keeps its state on disk.
//!
//! Only the config file lives here for now. Calendar data is always read
//! from a fixture the user points at.

mod config;

pub use config::{Config, OutputConfig, ViewConfig};

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;

/// Names an explicit config file, bypassing the profile directory.
pub const CONFIG_ENV: &str = "SPROUTCAL_CONFIG";
/// Selects a profile; anything but `production` gets its own directory.
pub const PROFILE_ENV: &str = "SPROUTCAL_ENV";

const APP_DIR: &str = "sproutcal";
const CONFIG_FILE: &str = "config.toml";

/// State directory for the active profile, created on demand.
///
/// Lives under the platform config directory, falling back to
/// `~/.config` and then the working directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    let profile = std::env::var(PROFILE_ENV).ok();
    let dir = base.join(profile_dir(profile.as_deref()));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// The config file in use: `$SPROUTCAL_CONFIG`, else `config.toml` in [`data_dir`].
///
/// # Errors
/// Returns an error if the profile directory cannot be created.
pub fn config_file() -> Result<PathBuf> {
    match explicit_file(std::env::var_os(CONFIG_ENV)) {
        Some(path) => Ok(path),
        None => Ok(data_dir()?.join(CONFIG_FILE)),
    }
}

fn explicit_file(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn profile_dir(profile: Option<&str>) -> String {
    match profile.map(str::trim) {
        None | Some("" | "production") => APP_DIR.to_string(),
        Some(name) => format!("{APP_DIR}-{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_selects_directory() {
        assert_eq!(profile_dir(None), "sproutcal");
        assert_eq!(profile_dir(Some("production")), "sproutcal");
        assert_eq!(profile_dir(Some(" ")), "sproutcal");
        assert_eq!(profile_dir(Some("dev")), "sproutcal-dev");
        assert_eq!(profile_dir(Some("staging")), "sproutcal-staging");
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(explicit_file(None), None);
        assert_eq!(explicit_file(Some(OsString::new())), None);
        assert_eq!(
            explicit_file(Some(OsString::from("/tmp/cal.toml"))),
            Some(PathBuf::from("/tmp/cal.toml"))
        );
    }
}
