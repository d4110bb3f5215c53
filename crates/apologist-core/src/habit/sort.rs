//! Habit list ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Habit;

/// Key a habit list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortingOption {
    /// Creation date
    #[default]
    ByDate,
    /// Title, ignoring case
    ByName,
}

/// Active ordering of the habit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub option: SortingOption,
    pub ascending: bool,
}

impl SortState {
    pub fn new(option: SortingOption, ascending: bool) -> Self {
        Self { option, ascending }
    }

    /// Apply a menu selection.
    ///
    /// Re-selecting the active option flips the direction; picking the other
    /// option switches to it in descending order.
    pub fn select(&mut self, option: SortingOption) {
        if self.option == option {
            self.ascending = !self.ascending;
        } else {
            self.option = option;
            self.ascending = false;
        }
    }
}

/// Sort habits in place. Stable, so equal keys keep their input order.
pub fn sort_habits(habits: &mut [Habit], state: SortState) {
    habits.sort_by(|a, b| {
        let ordering = compare(a, b, state.option);
        if state.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Habit, b: &Habit, option: SortingOption) -> Ordering {
    match option {
        SortingOption::ByDate => a.creation_date.cmp(&b.creation_date),
        SortingOption::ByName => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
