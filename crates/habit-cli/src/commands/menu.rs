//! Interactive numbered menu.
//!
//! Loads the habit file on start, keeps changes in memory and only writes
//! them back on "Save & Exit".

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use habit_core::{parse_date, Config, HabitTracker};

use super::habits_path;

const MENU: &str = "\nHabit Tracker Menu
1. Add new habit
2. Remove habit
3. Mark habit done
4. List all habits
5. Show streak report
6. Save & Exit";

pub fn run(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = habits_path(file)?;
    let config = Config::load_or_default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&path, &config, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Prompt and read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the menu loop until "Save & Exit" or end of input.
///
/// End of input leaves without saving.
pub fn session<R: BufRead, W: Write>(
    path: &Path,
    config: &Config,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    let mut tracker = match HabitTracker::open(path) {
        Ok(tracker) => {
            writeln!(out, "Habits loaded successfully.")?;
            tracker
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load habits");
            writeln!(out, "Warning: Failed to load habits. Starting fresh.")?;
            HabitTracker::new()
        }
    };

    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "Choose an option (1-6): ")? else {
            return Ok(());
        };
        let Ok(choice) = choice.trim().parse::<u32>() else {
            writeln!(out, "Invalid input. Enter a number from 1 to 6.")?;
            continue;
        };

        match choice {
            1 => {
                let Some(name) = prompt(&mut input, &mut out, "Enter habit name: ")? else {
                    return Ok(());
                };
                let Some(desc) = prompt(&mut input, &mut out, "Enter description: ")? else {
                    return Ok(());
                };
                tracker.add_habit(&name, &desc);
            }
            2 => {
                let Some(name) = prompt(&mut input, &mut out, "Enter habit name to remove: ")?
                else {
                    return Ok(());
                };
                tracker.remove_habit(&name);
            }
            3 => {
                let Some(name) = prompt(&mut input, &mut out, "Enter habit name to mark done: ")?
                else {
                    return Ok(());
                };
                let Some(date) = prompt(
                    &mut input,
                    &mut out,
                    "Enter date (YYYY-MM-DD) or leave blank for today: ",
                )?
                else {
                    return Ok(());
                };
                if date.trim().is_empty() {
                    tracker.mark_done(&name, None);
                } else {
                    match parse_date(&date) {
                        Ok(date) => {
                            tracker.mark_done(&name, Some(date));
                        }
                        Err(_) => writeln!(out, "Invalid date format.")?,
                    }
                }
            }
            4 => {
                let habits = tracker.list_habits();
                if habits.is_empty() {
                    writeln!(out, "No habits found.")?;
                }
                for habit in habits {
                    writeln!(out, "{habit}")?;
                }
            }
            5 => {
                for (name, streak) in tracker.report() {
                    if config.report.hide_inactive && streak == 0 {
                        continue;
                    }
                    writeln!(out, "{name}: {streak} day streak")?;
                }
            }
            6 => {
                match tracker.save(path) {
                    Ok(()) => writeln!(out, "Habits saved. Exiting.")?,
                    Err(e) => {
                        tracing::error!(error = %e, "could not save habits");
                        writeln!(out, "Failed to save habits.")?;
                    }
                }
                return Ok(());
            }
            _ => writeln!(out, "Choose between 1 and 6.")?,
        }
    }
}
