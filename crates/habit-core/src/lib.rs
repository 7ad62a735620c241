//! # Habit Tracker Core Library
//!
//! This library provides the core logic for the habit tracker: named habits,
//! their completion dates, and consecutive-day streaks, persisted to a JSON
//! file between runs. The `habits` CLI is a thin layer over it.
//!
//! ## Key Components
//!
//! - [`Habit`]: One habit, its sorted completion history and streak
//! - [`HabitTracker`]: Name-keyed habit collection with save/load and merge
//! - [`Config`]: Application configuration management
//! - [`PersistenceError`]: The only error the tracker itself produces

pub mod error;
pub mod habit;
pub mod storage;
pub mod tracker;

pub use error::{ConfigError, CoreError, PersistenceError, ValidationError};
pub use habit::{parse_date, today, Habit, DATE_FORMAT};
pub use storage::Config;
pub use tracker::HabitTracker;
