//! Habit strength score.
//!
//! Strength compares unique completed days with a linear baseline:
//!
//! ```text
//! expected = days_since_creation * weekly_target / 7
//! strength = min(trunc(actual / expected * 100), 100)
//! ```
//!
//! A habit whose creation day is today or later has no baseline yet and
//! scores [`NEW_HABIT_STRENGTH`].

use chrono::NaiveDate;

use super::days::CompletionDays;
use crate::habit::Regularity;

/// Score reported while a habit is less than one day old.
pub const NEW_HABIT_STRENGTH: u32 = 50;

/// Upper bound of the score.
pub const MAX_STRENGTH: u32 = 100;

/// Strength percentage in `0..=100`.
pub fn strength_percentage(
    creation_day: NaiveDate,
    regularity: Regularity,
    days: &CompletionDays,
) -> u32 {
    let total_days = (days.today() - creation_day).num_days();
    if total_days <= 0 {
        return NEW_HABIT_STRENGTH;
    }

    // actual / (total * target / 7) * 100, kept in integers so the
    // truncation is exact.
    let actual = days.len() as u128;
    let expected_times_seven = total_days as u128 * u128::from(regularity.weekly_target());
    let percentage = actual * 700 / expected_times_seven;

    percentage.min(u128::from(MAX_STRENGTH)) as u32
}

/// Score now minus the score with the last `days_ago` days removed.
///
/// Both scores share the same baseline (the full age of the habit), so only
/// the completion count differs. The result is returned signed and is never
/// clamped.
pub fn strength_gained_within_last_days(
    creation_day: NaiveDate,
    regularity: Regularity,
    days: &CompletionDays,
    days_ago: u32,
) -> i32 {
    let full = strength_percentage(creation_day, regularity, days);
    let prior = strength_percentage(creation_day, regularity, &days.before_last_days(days_ago));
    full as i32 - prior as i32
}

/// Unique completed days no more than `days_ago` days before today.
pub fn completions_within_last_days(days: &CompletionDays, days_ago: u32) -> u32 {
    days.within_last_days(days_ago).len() as u32
}
