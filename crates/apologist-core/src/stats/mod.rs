//! Habit analytics engine.
//!
//! Turns a habit's creation date, regularity and raw completion timestamps
//! into streaks, a strength score and windowed deltas of that score. Every
//! function here is pure: inputs are borrowed read-only and results are
//! recomputed on each call.
//!
//! - [`CompletionDays`]: completion timestamps collapsed to unique days up to
//!   today, most recent first
//! - [`streak`]: current and longest consecutive-day runs
//! - [`strength`]: capped strength percentage and its windowed deltas
//! - [`HabitAnalytics`]: all of the above bound to one habit snapshot

mod analytics;
mod days;
mod history;
mod overview;
pub mod streak;
pub mod strength;

pub use analytics::HabitAnalytics;
pub use days::{calendar_day, CompletionDays};
pub use history::{CellState, DisplayMode, HistoryCell, HistoryGrid, ROWS};
pub use overview::{HabitOverview, OverviewWindows};
pub use strength::{MAX_STRENGTH, NEW_HABIT_STRENGTH};
