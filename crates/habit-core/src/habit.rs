//! A single tracked habit and its completion history.
//!
//! History is a set of calendar dates kept in ascending order. The streak is
//! computed against a "today" that is either the local wall-clock date or an
//! injected one, so callers that need determinism use [`Habit::streak_as_of`].

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Date format used for display, parsing and the persisted file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
/// Returns [`ValidationError::InvalidDate`] if `input` is not a real
/// calendar date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        ValidationError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A named habit with its completion history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Habit name, unique within a tracker
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Completion dates, ascending and deduplicated
    #[serde(default)]
    history: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Create a habit with an empty history.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            history: BTreeSet::new(),
        }
    }

    /// Record a completion on `date`. Returns `false` if it was already recorded.
    pub fn mark_done(&mut self, date: NaiveDate) -> bool {
        self.history.insert(date)
    }

    /// Completion dates in ascending order.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &NaiveDate> + ExactSizeIterator {
        self.history.iter()
    }

    /// Number of recorded completions.
    pub fn entries(&self) -> usize {
        self.history.len()
    }

    /// Most recent completion, if any.
    pub fn last_done(&self) -> Option<NaiveDate> {
        self.history.last().copied()
    }

    /// Current streak measured against the local date.
    pub fn streak(&self) -> u32 {
        self.streak_as_of(today())
    }

    /// Consecutive-day streak ending at the most recent completion.
    ///
    /// The most recent completion must be `today` or the day before (a
    /// future date also qualifies); otherwise the streak is broken and 0 is
    /// returned. Walking backwards, each date must be exactly one day before
    /// the previous one.
    pub fn streak_as_of(&self, today: NaiveDate) -> u32 {
        let mut dates = self.history.iter().rev();

        let Some(mut previous) = dates.next().copied() else {
            return 0;
        };
        if (today - previous).num_days() > 1 {
            return 0;
        }

        let mut streak = 1;
        for &date in dates {
            if (previous - date).num_days() != 1 {
                break;
            }
            streak += 1;
            previous = date;
        }
        streak
    }

    /// Fold another habit's completions into this one.
    ///
    /// Name and description are left as they are.
    pub fn absorb(&mut self, other: &Habit) {
        self.history.extend(other.history.iter().copied());
    }

    /// One-line streak summary, e.g. `read — Streak: 3 days`.
    pub fn summary(&self) -> String {
        self.summary_as_of(today())
    }

    pub fn summary_as_of(&self, today: NaiveDate) -> String {
        format!("{} — Streak: {} days", self.name, self.streak_as_of(today))
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} days done)",
            self.name,
            self.description,
            self.history.len()
        )
    }
}
