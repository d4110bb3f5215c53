//! Habit value snapshot.
//!
//! A [`Habit`] is the read-only view the analytics engine consumes: when it
//! was created, how often it should be done, and the raw completion
//! timestamps. Completion timestamps are kept exactly as recorded; duplicates
//! for the same calendar day and future-dated entries are tolerated here and
//! filtered by every derived computation.

mod completion;
mod regularity;
mod sort;

pub use regularity::Regularity;
pub use sort::{sort_habits, SortState, SortingOption};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub title: String,
    /// Fixed when the habit is created.
    pub creation_date: DateTime<Utc>,
    #[serde(default = "unrecognized_regularity")]
    pub regularity: Regularity,
    /// Unordered; may hold several timestamps on the same day.
    #[serde(default)]
    pub completed_dates: Vec<DateTime<Utc>>,
}

fn unrecognized_regularity() -> Regularity {
    Regularity::Unrecognized
}

impl Habit {
    /// Create a habit with no completions.
    ///
    /// # Errors
    /// Returns an error if the title is blank.
    pub fn new(
        title: impl Into<String>,
        regularity: Regularity,
        creation_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            creation_date,
            regularity,
            completed_dates: Vec::new(),
        })
    }

    /// Builder-style helper for seeding completions.
    pub fn with_completed_dates(mut self, dates: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        self.completed_dates.extend(dates);
        self
    }
}

/// Find a habit by id, or by title ignoring case.
///
/// # Errors
/// Returns [`ValidationError::UnknownHabit`] when nothing matches and
/// [`ValidationError::AmbiguousHabit`] when several titles match.
pub fn find<'a>(habits: &'a [Habit], query: &str) -> Result<&'a Habit, ValidationError> {
    if let Ok(id) = Uuid::parse_str(query) {
        if let Some(habit) = habits.iter().find(|h| h.id == id) {
            return Ok(habit);
        }
    }

    let needle = query.trim().to_lowercase();
    let matches: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.title.to_lowercase() == needle)
        .collect();

    match matches.as_slice() {
        [habit] => Ok(habit),
        [] => Err(ValidationError::UnknownHabit(query.to_string())),
        _ => Err(ValidationError::AmbiguousHabit {
            query: query.to_string(),
            count: matches.len(),
        }),
    }
}

/// Index of the habit `find` would return.
///
/// # Errors
/// Same as [`find`].
pub fn position(habits: &[Habit], query: &str) -> Result<usize, ValidationError> {
    let habit = find(habits, query)?;
    Ok(habits
        .iter()
        .position(|h| h.id == habit.id)
        .unwrap_or_default())
}
