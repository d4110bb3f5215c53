//! Completion timestamps collapsed to calendar days.
//!
//! Every analytic works on [`CompletionDays`]: unique days, most recent
//! first, never later than the evaluation day. Timestamps are mapped to days
//! in the time zone of the evaluation instant.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeSet;

/// Calendar day of `ts` as seen from `tz`.
pub fn calendar_day<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    ts.with_timezone(tz).date_naive()
}

/// Normalized set of completed days relative to an evaluation day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionDays {
    today: NaiveDate,
    /// Unique, strictly descending, all `<= today`.
    days: Vec<NaiveDate>,
}

impl CompletionDays {
    /// Normalize raw completion timestamps against `now`.
    pub fn normalize<Tz: TimeZone>(dates: &[DateTime<Utc>], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let normalized = Self::from_days(dates.iter().map(|ts| calendar_day(ts, &tz)), today);

        let future = dates
            .iter()
            .filter(|ts| calendar_day(ts, &tz) > today)
            .count();
        if future > 0 {
            tracing::debug!(
                %today,
                future,
                "ignoring completions dated after the evaluation day"
            );
        }

        normalized
    }

    /// Build from calendar days directly. Duplicates and days after `today`
    /// are dropped.
    pub fn from_days(days: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Self {
        let unique: BTreeSet<NaiveDate> = days.into_iter().filter(|day| *day <= today).collect();
        Self {
            today,
            days: unique.into_iter().rev().collect(),
        }
    }

    /// The evaluation day.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Completed days, most recent first.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        // Descending order, so compare reversed.
        self.days.binary_search_by(|entry| day.cmp(entry)).is_ok()
    }

    /// Whole days between `day` and today; negative for future days.
    pub fn days_ago(&self, day: NaiveDate) -> i64 {
        (self.today - day).num_days()
    }

    /// Days no more than `days_ago` days before today (today included).
    pub fn within_last_days(&self, days_ago: u32) -> Self {
        self.retain(|age| age <= i64::from(days_ago))
    }

    /// Days strictly more than `days_ago` days before today.
    pub fn before_last_days(&self, days_ago: u32) -> Self {
        self.retain(|age| age > i64::from(days_ago))
    }

    fn retain(&self, keep: impl Fn(i64) -> bool) -> Self {
        Self {
            today: self.today,
            days: self
                .days
                .iter()
                .copied()
                .filter(|day| keep(self.days_ago(*day)))
                .collect(),
        }
    }
}
