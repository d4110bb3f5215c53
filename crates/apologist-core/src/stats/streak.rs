//! Consecutive-day runs.
//!
//! Two completed days belong to the same run when they are at most one day
//! apart. Days are already unique, so in practice the gap is exactly one.

use chrono::NaiveDate;

use super::days::CompletionDays;

/// Length of the run that ends today, or 0 if today is not completed.
pub fn current_streak(days: &CompletionDays) -> u32 {
    let Some(first) = days.most_recent() else {
        return 0;
    };
    if first != days.today() {
        return 0;
    }

    let mut streak = 1;
    let mut previous = first;
    for &day in &days.days()[1..] {
        if !is_consecutive(previous, day) {
            break;
        }
        streak += 1;
        previous = day;
    }
    streak
}

/// Length of the longest run anywhere in the history.
pub fn longest_streak(days: &CompletionDays) -> u32 {
    let Some(first) = days.most_recent() else {
        return 0;
    };

    let mut run = 1;
    let mut longest = 0;
    let mut previous = first;
    for &day in &days.days()[1..] {
        if is_consecutive(previous, day) {
            run += 1;
        } else {
            longest = longest.max(run);
            // The breaking day opens the next run.
            run = 1;
        }
        previous = day;
    }
    longest.max(run)
}

fn is_consecutive(later: NaiveDate, earlier: NaiveDate) -> bool {
    (later - earlier).num_days() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()
    }

    fn days_ago(offsets: &[i64]) -> CompletionDays {
        CompletionDays::from_days(
            offsets.iter().map(|n| today() - Duration::days(*n)),
            today(),
        )
    }

    #[test]
    fn test_empty_history() {
        let days = days_ago(&[]);
        assert_eq!(current_streak(&days), 0);
        assert_eq!(longest_streak(&days), 0);
    }

    #[test]
    fn test_single_day_today() {
        let days = days_ago(&[0]);
        assert_eq!(current_streak(&days), 1);
        assert_eq!(longest_streak(&days), 1);
    }

    #[test]
    fn test_single_day_in_past() {
        let days = days_ago(&[4]);
        assert_eq!(current_streak(&days), 0);
        assert_eq!(longest_streak(&days), 1);
    }

    #[test]
    fn test_current_streak_stops_at_first_gap() {
        let days = days_ago(&[0, 1, 3, 4]);
        assert_eq!(current_streak(&days), 2);
        assert_eq!(longest_streak(&days), 2);
    }

    #[test]
    fn test_no_completion_today_breaks_current_streak() {
        let days = days_ago(&[5, 4, 3]);
        assert_eq!(current_streak(&days), 0);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn test_yesterday_only_is_not_current() {
        let days = days_ago(&[1, 2, 3]);
        assert_eq!(current_streak(&days), 0);
    }

    #[test]
    fn test_longest_run_in_the_middle() {
        let days = days_ago(&[0, 3, 4, 5, 6, 10, 11]);
        assert_eq!(current_streak(&days), 1);
        assert_eq!(longest_streak(&days), 4);
    }

    #[test]
    fn test_longest_run_at_the_oldest_end() {
        let days = days_ago(&[0, 1, 9, 10, 11]);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn test_thirty_consecutive_days() {
        let offsets: Vec<i64> = (0..30).collect();
        let days = days_ago(&offsets);
        assert_eq!(current_streak(&days), 30);
        assert_eq!(longest_streak(&days), 30);
    }

    #[test]
    fn test_runs_span_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let days = CompletionDays::from_days(
            vec![
                today,
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            ],
            today,
        );
        assert_eq!(current_streak(&days), 3);
    }
}
