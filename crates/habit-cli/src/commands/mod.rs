pub mod config;
pub mod habits;
pub mod menu;

use std::path::PathBuf;

use habit_core::error::Result;
use habit_core::Config;

/// Habit file from `--file`, else from configuration.
pub fn habits_path(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(Config::load()?.habits_path()?),
    }
}
