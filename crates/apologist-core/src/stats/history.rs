//! Week-aligned completion history grid.
//!
//! The grid has one row per weekday (Monday at the top, Sunday at the
//! bottom) and one column per week, oldest on the left. The rightmost column
//! is the current week, so cells after today are marked [`CellState::Future`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::days::CompletionDays;

/// Rows per column (days per week).
pub const ROWS: u32 = 7;

/// How much history the grid spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    SixMonths,
    OneYear,
}

impl DisplayMode {
    /// Number of week columns.
    pub fn columns(&self) -> u32 {
        match self {
            DisplayMode::SixMonths => 365 / 2 / ROWS,
            DisplayMode::OneYear => 365 / ROWS,
        }
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Day is after today
    Future,
    Completed,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryCell {
    pub date: NaiveDate,
    pub state: CellState,
}

/// Completion history laid out as weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryGrid {
    pub mode: DisplayMode,
    /// `columns[week][weekday]`, oldest week first.
    pub columns: Vec<Vec<HistoryCell>>,
}

impl HistoryGrid {
    pub fn build(days: &CompletionDays, mode: DisplayMode) -> Self {
        let today = days.today();
        let shift = days_until_sunday(today);
        let column_count = mode.columns();
        let cell_count = column_count * ROWS;

        let columns = (0..column_count)
            .map(|column| {
                (0..ROWS)
                    .map(|row| {
                        let index = column * ROWS + row;
                        let days_ago = i64::from(cell_count - 1 - index) - shift;
                        let date = today - Duration::days(days_ago);
                        let state = if days_ago < 0 {
                            CellState::Future
                        } else if days.contains(date) {
                            CellState::Completed
                        } else {
                            CellState::Missed
                        };
                        HistoryCell { date, state }
                    })
                    .collect()
            })
            .collect();

        Self { mode, columns }
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&HistoryCell> {
        self.columns.get(column)?.get(row)
    }

    pub fn cells(&self) -> impl Iterator<Item = &HistoryCell> {
        self.columns.iter().flatten()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|cell| cell.state == state).count()
    }
}

/// Days from `day` to the Sunday closing its Monday-based week.
fn days_until_sunday(day: NaiveDate) -> i64 {
    i64::from(7 - day.weekday().number_from_monday())
}
