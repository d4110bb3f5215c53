//! Marking days done and undone.
//!
//! These mutate the snapshot in place. Analytics never call them; callers
//! recompute analytics after every toggle.

use chrono::{DateTime, Days, Duration, NaiveDate, TimeZone, Utc};

use super::Habit;
use crate::stats::calendar_day;

impl Habit {
    /// Whether any completion timestamp falls on `day` in `tz`.
    pub fn is_completed_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> bool {
        self.completed_dates
            .iter()
            .any(|ts| calendar_day(ts, tz) == day)
    }

    /// Whether the day `days_ago` days before `now` is completed.
    pub fn is_completed<Tz: TimeZone>(&self, days_ago: u32, now: &DateTime<Tz>) -> bool {
        let day = days_before(now, days_ago);
        self.is_completed_on(calendar_day(&day, &now.timezone()), &now.timezone())
    }

    /// Record a completion unless its day is already completed.
    pub fn add_completed_date<Tz: TimeZone>(&mut self, date: DateTime<Utc>, tz: &Tz) {
        if !self.is_completed_on(calendar_day(&date, tz), tz) {
            self.completed_dates.push(date);
        }
    }

    /// Remove every completion recorded on `day`.
    pub fn remove_completed_date<Tz: TimeZone>(&mut self, day: NaiveDate, tz: &Tz) {
        self.completed_dates.retain(|ts| calendar_day(ts, tz) != day);
    }

    /// Flip the completion state of the day `days_ago` days before `now`.
    ///
    /// Returns `true` if the day is completed afterwards.
    pub fn toggle_completion<Tz: TimeZone>(&mut self, days_ago: u32, now: &DateTime<Tz>) -> bool {
        let tz = now.timezone();
        let date = days_before(now, days_ago);
        let day = calendar_day(&date, &tz);

        if self.is_completed_on(day, &tz) {
            self.remove_completed_date(day, &tz);
            false
        } else {
            self.add_completed_date(date, &tz);
            true
        }
    }
}

/// `now` moved back by whole calendar days, as a UTC instant.
fn days_before<Tz: TimeZone>(now: &DateTime<Tz>, days_ago: u32) -> DateTime<Utc> {
    let now_utc = now.with_timezone(&Utc);
    now.clone()
        .checked_sub_days(Days::new(u64::from(days_ago)))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now_utc - Duration::days(i64::from(days_ago)))
}
