//! Per-habit analytics over an immutable snapshot.

use chrono::{DateTime, NaiveDate, TimeZone};

use super::days::{calendar_day, CompletionDays};
use super::history::{DisplayMode, HistoryGrid};
use super::overview::{HabitOverview, OverviewWindows};
use super::{streak, strength};
use crate::habit::{Habit, Regularity};

/// Snapshot of the habit fields the analytics read, fixed at one evaluation
/// instant.
///
/// Nothing is cached between snapshots: build a new one after every change
/// to the habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitAnalytics {
    creation_day: NaiveDate,
    regularity: Regularity,
    days: CompletionDays,
}

impl HabitAnalytics {
    /// Evaluate `habit` as of `now`, using `now`'s time zone for calendar days.
    pub fn at<Tz: TimeZone>(habit: &Habit, now: &DateTime<Tz>) -> Self {
        Self {
            creation_day: calendar_day(&habit.creation_date, &now.timezone()),
            regularity: habit.regularity,
            days: CompletionDays::normalize(&habit.completed_dates, now),
        }
    }

    pub fn from_parts(
        creation_day: NaiveDate,
        regularity: Regularity,
        days: CompletionDays,
    ) -> Self {
        Self {
            creation_day,
            regularity,
            days,
        }
    }

    pub fn creation_day(&self) -> NaiveDate {
        self.creation_day
    }

    pub fn regularity(&self) -> Regularity {
        self.regularity
    }

    pub fn days(&self) -> &CompletionDays {
        &self.days
    }

    pub fn current_streak(&self) -> u32 {
        streak::current_streak(&self.days)
    }

    pub fn longest_streak(&self) -> u32 {
        streak::longest_streak(&self.days)
    }

    pub fn strength_percentage(&self) -> u32 {
        strength::strength_percentage(self.creation_day, self.regularity, &self.days)
    }

    pub fn strength_gained_within_last_days(&self, days_ago: u32) -> i32 {
        strength::strength_gained_within_last_days(
            self.creation_day,
            self.regularity,
            &self.days,
            days_ago,
        )
    }

    pub fn completions_within_last_days(&self, days_ago: u32) -> u32 {
        strength::completions_within_last_days(&self.days, days_ago)
    }

    /// Unique completed days up to today.
    pub fn total_completions(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn overview(&self, windows: OverviewWindows) -> HabitOverview {
        HabitOverview::from_analytics(self, windows)
    }

    pub fn history(&self, mode: DisplayMode) -> HistoryGrid {
        HistoryGrid::build(&self.days, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn utc_datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_snapshot_from_habit() {
        let now = utc_datetime(2024, 4, 30, 18, 0);
        let habit = Habit::new("Pray", Regularity::Everyday, utc_datetime(2024, 4, 1, 7, 0))
            .unwrap()
            .with_completed_dates((0..30).map(|n| now - Duration::days(n)));

        let analytics = HabitAnalytics::at(&habit, &now);
        assert_eq!(analytics.creation_day(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(analytics.current_streak(), 30);
        assert_eq!(analytics.longest_streak(), 30);
        assert_eq!(analytics.total_completions(), 30);
        assert_eq!(analytics.strength_percentage(), 100);
    }

    #[test]
    fn test_creation_day_uses_evaluation_time_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        // 20:00 UTC on the 1st is already the 2nd in UTC+9.
        let habit =
            Habit::new("Walk", Regularity::Everyday, utc_datetime(2024, 4, 1, 20, 0)).unwrap();
        let now = tokyo.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap();

        let analytics = HabitAnalytics::at(&habit, &now);
        assert_eq!(analytics.creation_day(), NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert_eq!(analytics.strength_percentage(), 50);
    }

    #[test]
    fn test_snapshot_is_detached_from_habit() {
        let now = utc_datetime(2024, 4, 30, 18, 0);
        let mut habit =
            Habit::new("Fast", Regularity::OnceAWeek, utc_datetime(2024, 4, 1, 7, 0)).unwrap();
        let before = HabitAnalytics::at(&habit, &now);

        habit.toggle_completion(0, &now);
        assert_eq!(before.current_streak(), 0);
        assert_eq!(HabitAnalytics::at(&habit, &now).current_streak(), 1);
    }
}
