//! # Apologist Core Library
//!
//! This library provides the habit model and the analytics behind the
//! Apologist habit tracker. The CLI binary and any GUI front-end are thin
//! layers over the same core.
//!
//! ## Architecture
//!
//! - **Habit**: an immutable value snapshot of a tracked habit (creation date,
//!   regularity, raw completion timestamps) plus toggling helpers
//! - **Stats**: the pure analytics engine computing streaks, strength and
//!   windowed deltas on demand
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Habit`]: Habit snapshot
//! - [`Regularity`]: Closed set of weekly targets
//! - [`HabitAnalytics`]: Streak and strength queries for one habit
//! - [`Config`]: Application configuration management

pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, ValidationError};
pub use habit::{sort_habits, Habit, Regularity, SortState, SortingOption};
pub use stats::{
    CellState, CompletionDays, DisplayMode, HabitAnalytics, HabitOverview, HistoryCell,
    HistoryGrid, OverviewWindows,
};
pub use storage::Config;
