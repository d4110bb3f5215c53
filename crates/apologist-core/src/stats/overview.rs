//! Summary shown on a habit's detail screen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::analytics::HabitAnalytics;
use crate::habit::Regularity;

/// Trailing windows the overview reports deltas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewWindows {
    pub month_days: u32,
    pub year_days: u32,
}

impl Default for OverviewWindows {
    fn default() -> Self {
        Self {
            month_days: 30,
            year_days: 365,
        }
    }
}

/// Strength, completion and streak figures for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitOverview {
    pub created: NaiveDate,
    pub evaluated: NaiveDate,
    pub regularity: Regularity,
    pub windows: OverviewWindows,
    /// Strength percentage (0-100)
    pub strength: u32,
    pub strength_gained_month: i32,
    pub strength_gained_year: i32,
    /// Unique completed days, all time
    pub completions: u32,
    pub completions_month: u32,
    pub completions_year: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl HabitOverview {
    pub fn from_analytics(analytics: &HabitAnalytics, windows: OverviewWindows) -> Self {
        let overview = Self {
            created: analytics.creation_day(),
            evaluated: analytics.days().today(),
            regularity: analytics.regularity(),
            windows,
            strength: analytics.strength_percentage(),
            strength_gained_month: analytics.strength_gained_within_last_days(windows.month_days),
            strength_gained_year: analytics.strength_gained_within_last_days(windows.year_days),
            completions: analytics.total_completions(),
            completions_month: analytics.completions_within_last_days(windows.month_days),
            completions_year: analytics.completions_within_last_days(windows.year_days),
            current_streak: analytics.current_streak(),
            longest_streak: analytics.longest_streak(),
        };

        tracing::debug!(
            created = %overview.created,
            strength = overview.strength,
            current_streak = overview.current_streak,
            longest_streak = overview.longest_streak,
            "computed habit overview"
        );

        overview
    }
}
