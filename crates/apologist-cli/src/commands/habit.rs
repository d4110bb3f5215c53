//! Habit commands for CLI.
//!
//! Habits are read from a JSON array file; `add` and `toggle` write the
//! file back. Every query recomputes from the file contents.

use apologist_core::habit::{self, Habit, Regularity, SortState, SortingOption};
use apologist_core::stats::{CellState, DisplayMode, HabitAnalytics, HistoryGrid};
use apologist_core::{sort_habits, Config};
use chrono::{Local, Utc};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit title
        title: String,
        /// Regularity label, e.g. "Everyday" or "3 Times a Week"
        #[arg(long, default_value = "Everyday")]
        regularity: String,
    },
    /// List habits with their strength and streak
    List {
        /// Sort key (defaults to the configured one)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Sort ascending (applies to the configured key when --sort is absent)
        #[arg(long)]
        ascending: bool,
    },
    /// Show the full overview of a habit
    Show {
        /// Habit ID or title
        habit: String,
    },
    /// Current and longest streak
    Streak {
        /// Habit ID or title
        habit: String,
    },
    /// Strength percentage and its change over a window
    Strength {
        /// Habit ID or title
        habit: String,
        /// Window size in days (defaults to the configured month window)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Completion history grid
    History {
        /// Habit ID or title
        habit: String,
        /// Span of the grid (defaults to the configured one)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Print as text instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// Mark a day done, or undo it
    Toggle {
        /// Habit ID or title
        habit: String,
        /// Days before today (0 = today)
        #[arg(long, default_value = "0")]
        days_ago: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Date,
    Name,
}

impl From<SortArg> for SortingOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortingOption::ByDate,
            SortArg::Name => SortingOption::ByName,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    SixMonths,
    OneYear,
}

impl From<ModeArg> for DisplayMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SixMonths => DisplayMode::SixMonths,
            ModeArg::OneYear => DisplayMode::OneYear,
        }
    }
}

#[derive(Serialize)]
struct HabitRow<'a> {
    id: Uuid,
    title: &'a str,
    regularity: Regularity,
    strength: u32,
    current_streak: u32,
    completed_today: bool,
}

#[derive(Serialize)]
struct StreakReport {
    current_streak: u32,
    longest_streak: u32,
}

#[derive(Serialize)]
struct StrengthReport {
    strength: u32,
    window_days: u32,
    strength_gained: i32,
    completions: u32,
}

pub fn run(file: &Path, action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut habits = load_habits(file)?;
    let config = Config::load_or_default();
    let now = Local::now();

    match action {
        HabitAction::Add { title, regularity } => {
            let regularity = Regularity::from_label(&regularity);
            if regularity == Regularity::Unrecognized {
                tracing::warn!("unrecognized regularity; strength will assume every day");
            }
            let habit = Habit::new(title, regularity, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&habit)?);
            habits.push(habit);
            save_habits(file, &habits)?;
        }
        HabitAction::List { sort, ascending } => {
            sort_habits(&mut habits, list_sort_state(config.sort_state(), sort, ascending));

            let rows: Vec<HabitRow> = habits
                .iter()
                .map(|h| {
                    let analytics = HabitAnalytics::at(h, &now);
                    HabitRow {
                        id: h.id,
                        title: &h.title,
                        regularity: h.regularity,
                        strength: analytics.strength_percentage(),
                        current_streak: analytics.current_streak(),
                        completed_today: h.is_completed(0, &now),
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Show { habit } => {
            let habit = habit::find(&habits, &habit)?;
            let overview = HabitAnalytics::at(habit, &now).overview(config.windows());
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        HabitAction::Streak { habit } => {
            let analytics = HabitAnalytics::at(habit::find(&habits, &habit)?, &now);
            let report = StreakReport {
                current_streak: analytics.current_streak(),
                longest_streak: analytics.longest_streak(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        HabitAction::Strength { habit, days } => {
            let analytics = HabitAnalytics::at(habit::find(&habits, &habit)?, &now);
            let window_days = days.unwrap_or(config.analytics.month_window_days);
            let report = StrengthReport {
                strength: analytics.strength_percentage(),
                window_days,
                strength_gained: analytics.strength_gained_within_last_days(window_days),
                completions: analytics.completions_within_last_days(window_days),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        HabitAction::History { habit, mode, text } => {
            let mode = mode.map(DisplayMode::from).unwrap_or(config.history.display_mode);
            let grid = HabitAnalytics::at(habit::find(&habits, &habit)?, &now).history(mode);
            if text {
                print!("{}", render_grid(&grid));
            } else {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            }
        }
        HabitAction::Toggle { habit, days_ago } => {
            let index = habit::position(&habits, &habit)?;
            let target = &mut habits[index];
            let completed = target.toggle_completion(days_ago, &now);
            println!(
                "{}: {}",
                target.title,
                if completed { "completed" } else { "not completed" }
            );
            save_habits(file, &habits)?;
        }
    }
    Ok(())
}

/// An explicit key replaces the configured one; `--ascending` alone only
/// flips the configured direction.
fn list_sort_state(configured: SortState, sort: Option<SortArg>, ascending: bool) -> SortState {
    match sort {
        Some(option) => SortState::new(option.into(), ascending),
        None if ascending => SortState::new(configured.option, true),
        None => configured,
    }
}

fn load_habits(path: &Path) -> Result<Vec<Habit>, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "habit file missing; starting empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn save_habits(path: &Path, habits: &[Habit]) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, serde_json::to_string_pretty(habits)?)?;
    Ok(())
}

/// One line per weekday, one character per week.
fn render_grid(grid: &HistoryGrid) -> String {
    const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    let mut out = String::new();
    for (row, name) in WEEKDAYS.iter().enumerate() {
        out.push_str(name);
        out.push(' ');
        for column in &grid.columns {
            out.push(match column[row].state {
                CellState::Completed => '#',
                CellState::Missed => '.',
                CellState::Future => ' ',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use apologist_core::CompletionDays;
    use chrono::NaiveDate;

    #[test]
    fn test_list_sort_state_applies_ascending_to_configured_key() {
        let configured = SortState::new(SortingOption::ByName, false);

        let state = list_sort_state(configured, None, true);
        assert_eq!(state.option, SortingOption::ByName);
        assert!(state.ascending);

        assert_eq!(list_sort_state(configured, None, false), configured);

        let state = list_sort_state(configured, Some(SortArg::Date), false);
        assert_eq!(state.option, SortingOption::ByDate);
        assert!(!state.ascending);
    }

    #[test]
    fn test_render_grid_marks_completed_days() {
        // Wednesday; completed Monday and today.
        let today = NaiveDate::from_ymd_opt(2024, 7, 17).unwrap();
        let days = CompletionDays::from_days(
            vec![today, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()],
            today,
        );
        let grid = HistoryGrid::build(&days, DisplayMode::SixMonths);
        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Mon "));
        assert!(lines[0].ends_with('#'));
        assert!(lines[1].ends_with('.'));
        assert!(lines[2].ends_with('#'));
        assert!(lines[6].ends_with(' '));
    }
}
