//! Habit collection with JSON persistence and merging.
//!
//! The tracker is tolerant: unknown names are ignored and a missing file is
//! an empty tracker. Only storage faults produce a [`PersistenceError`].

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::ops::Add;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::PersistenceError;
use crate::habit::{today, Habit};

/// All habits of one session or file, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HabitTracker {
    habits: BTreeMap<String, Habit>,
}

impl HabitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker populated from `path`.
    ///
    /// # Errors
    /// See [`HabitTracker::load`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let mut tracker = Self::new();
        tracker.load(path)?;
        Ok(tracker)
    }

    /// Add a habit with an empty history.
    ///
    /// An existing habit with the same name is replaced and its history is
    /// discarded. The replaced habit is returned so callers can tell.
    pub fn add_habit(&mut self, name: &str, description: &str) -> Option<Habit> {
        self.habits.insert(name.to_string(), Habit::new(name, description))
    }

    /// Remove a habit. Unknown names are ignored.
    pub fn remove_habit(&mut self, name: &str) -> Option<Habit> {
        self.habits.remove(name)
    }

    /// Record a completion for `name`, on `date` or today if `None`.
    ///
    /// Returns `false` if no habit has that name; nothing is changed then.
    pub fn mark_done(&mut self, name: &str, date: Option<NaiveDate>) -> bool {
        match self.habits.get_mut(name) {
            Some(habit) => {
                habit.mark_done(date.unwrap_or_else(today));
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.get(name)
    }

    /// All habits, ordered by name.
    pub fn list_habits(&self) -> Vec<&Habit> {
        self.habits.values().collect()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Current streak of every habit, measured against the local date.
    pub fn report(&self) -> BTreeMap<String, u32> {
        self.report_as_of(today())
    }

    pub fn report_as_of(&self, today: NaiveDate) -> BTreeMap<String, u32> {
        self.habits
            .iter()
            .map(|(name, habit)| (name.clone(), habit.streak_as_of(today)))
            .collect()
    }

    /// Write every habit to `path` as a JSON object keyed by name.
    ///
    /// # Errors
    /// Returns [`PersistenceError::WriteFailed`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(&self.habits).map_err(PersistenceError::SerializeFailed)?;
        std::fs::write(path, content).map_err(|source| PersistenceError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), habits = self.habits.len(), "saved habits");
        Ok(())
    }

    /// Replace all habits with the contents of `path`.
    ///
    /// A missing file leaves the tracker empty.
    ///
    /// # Errors
    /// Returns [`PersistenceError::ParseFailed`] if the file is not a valid
    /// habit document and [`PersistenceError::ReadFailed`] for any other read
    /// failure. The tracker is unchanged on error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no habit file yet, starting empty");
                self.habits.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(PersistenceError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let records: BTreeMap<String, Habit> =
            serde_json::from_str(&content).map_err(|source| PersistenceError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })?;

        self.habits = records
            .into_iter()
            .map(|(key, mut habit)| {
                if habit.name != key {
                    tracing::warn!(key = %key, name = %habit.name, "habit name does not match its key, using key");
                    habit.name = key.clone();
                }
                (key, habit)
            })
            .collect();
        tracing::debug!(path = %path.display(), habits = self.habits.len(), "loaded habits");
        Ok(())
    }

    /// Combine two trackers into a new one.
    ///
    /// Habits present in both have their histories unioned and keep this
    /// tracker's description. Neither input is modified.
    pub fn merge(&self, other: &HabitTracker) -> HabitTracker {
        let mut merged = self.clone();
        for (name, habit) in &other.habits {
            merged
                .habits
                .entry(name.clone())
                .and_modify(|existing| existing.absorb(habit))
                .or_insert_with(|| habit.clone());
        }
        merged
    }
}

impl Add<&HabitTracker> for &HabitTracker {
    type Output = HabitTracker;

    fn add(self, other: &HabitTracker) -> HabitTracker {
        self.merge(other)
    }
}

impl Add for HabitTracker {
    type Output = HabitTracker;

    fn add(self, other: HabitTracker) -> HabitTracker {
        self.merge(&other)
    }
}
