mod config;

pub use config::{Config, DisplayConfig, ReportConfig, StorageConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default habit file name inside the data directory.
pub const HABITS_FILE: &str = "habits.json";

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns `~/.config/habit-tracker[-dev]/`, creating it if needed.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Data directory location based on HABIT_TRACKER_ENV, without touching disk.
///
/// Set HABIT_TRACKER_ENV=dev to use a development data directory.
pub fn data_dir_path() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABIT_TRACKER_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("habit-tracker-dev")
    } else {
        base_dir.join("habit-tracker")
    }
}
