//! One-shot habit commands: each loads the habit file, applies a change and saves.

use std::path::{Path, PathBuf};

use habit_core::{parse_date, Config, HabitTracker};
use serde::Serialize;

use super::habits_path;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// JSON view of a habit for `list --json`.
#[derive(Serialize)]
struct HabitView<'a> {
    name: &'a str,
    description: &'a str,
    entries: usize,
    streak: u32,
    last_done: Option<String>,
}

pub fn add(file: Option<PathBuf>, name: &str, description: &str, replace: bool) -> CmdResult {
    let path = habits_path(file)?;
    let mut tracker = HabitTracker::open(&path)?;

    if tracker.get(name).is_some() && !replace {
        return Err(format!("habit '{name}' already exists (use --replace to start it over)").into());
    }
    if tracker.add_habit(name, description).is_some() {
        tracing::info!(habit = name, "replaced existing habit");
    }
    tracker.save(&path)?;
    println!("Habit added: {name}");
    Ok(())
}

pub fn remove(file: Option<PathBuf>, name: &str) -> CmdResult {
    let path = habits_path(file)?;
    let mut tracker = HabitTracker::open(&path)?;

    match tracker.remove_habit(name) {
        Some(_) => {
            tracker.save(&path)?;
            println!("Habit removed: {name}");
        }
        None => println!("No habit named '{name}'."),
    }
    Ok(())
}

pub fn done(file: Option<PathBuf>, name: &str, date: Option<&str>) -> CmdResult {
    let date = date.filter(|d| !d.trim().is_empty()).map(parse_date).transpose()?;

    let path = habits_path(file)?;
    let mut tracker = HabitTracker::open(&path)?;

    if tracker.mark_done(name, date) {
        tracker.save(&path)?;
        println!("Marked done: {name}");
    } else {
        println!("No habit named '{name}'.");
    }
    Ok(())
}

pub fn list(file: Option<PathBuf>, json: bool) -> CmdResult {
    let config = Config::load_or_default();
    let tracker = HabitTracker::open(habits_path(file)?)?;
    let habits = tracker.list_habits();

    if json {
        let views: Vec<HabitView> = habits
            .iter()
            .map(|h| HabitView {
                name: &h.name,
                description: &h.description,
                entries: h.entries(),
                streak: h.streak(),
                last_done: h.last_done().map(|d| d.to_string()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if habits.is_empty() {
        println!("No habits found.");
    }
    for habit in habits {
        println!("{habit}");
        if config.display.show_streak_in_list {
            println!("  {}", habit.summary());
        }
    }
    Ok(())
}

pub fn report(file: Option<PathBuf>, json: bool) -> CmdResult {
    let config = Config::load_or_default();
    let tracker = HabitTracker::open(habits_path(file)?)?;
    let report = tracker.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, config.report.hide_inactive);
    Ok(())
}

/// Print `name: N day streak` lines.
fn print_report(report: &std::collections::BTreeMap<String, u32>, hide_inactive: bool) {
    for (name, streak) in report {
        if hide_inactive && *streak == 0 {
            continue;
        }
        println!("{name}: {streak} day streak");
    }
}

pub fn merge(file: Option<PathBuf>, other: &Path) -> CmdResult {
    let path = habits_path(file)?;
    let tracker = HabitTracker::open(&path)?;
    if !other.exists() {
        return Err(format!("no habit file at {}", other.display()).into());
    }
    let incoming = HabitTracker::open(other)?;

    let merged = &tracker + &incoming;
    merged.save(&path)?;
    tracing::debug!(
        before = tracker.len(),
        incoming = incoming.len(),
        after = merged.len(),
        "merged habit files"
    );
    println!(
        "Merged {} habit(s) from {}; {} habit(s) total.",
        incoming.len(),
        other.display(),
        merged.len()
    );
    Ok(())
}
