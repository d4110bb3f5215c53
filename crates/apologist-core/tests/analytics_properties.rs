//! Property tests for the analytics engine.

use apologist_core::stats::{streak, strength};
use apologist_core::{CompletionDays, Habit, HabitAnalytics, Regularity};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 0, 0).unwrap()
}

fn regularity() -> impl Strategy<Value = Regularity> {
    prop_oneof![
        Just(Regularity::Everyday),
        Just(Regularity::SixTimesAWeek),
        Just(Regularity::FiveTimesAWeek),
        Just(Regularity::FourTimesAWeek),
        Just(Regularity::ThreeTimesAWeek),
        Just(Regularity::TwiceAWeek),
        Just(Regularity::OnceAWeek),
        Just(Regularity::Unrecognized),
    ]
}

fn completion_days(offsets: &[i64]) -> CompletionDays {
    CompletionDays::from_days(offsets.iter().map(|n| today() - Duration::days(*n)), today())
}

proptest! {
    #[test]
    fn longest_streak_is_at_least_current(offsets in prop::collection::vec(-5i64..90, 0..80)) {
        let days = completion_days(&offsets);
        prop_assert!(streak::longest_streak(&days) >= streak::current_streak(&days));
    }

    #[test]
    fn no_current_streak_without_today(offsets in prop::collection::vec(1i64..90, 0..80)) {
        let days = completion_days(&offsets);
        prop_assert_eq!(streak::current_streak(&days), 0);
    }

    #[test]
    fn strength_stays_in_bounds(
        offsets in prop::collection::vec(-5i64..400, 0..200),
        created in -10i64..400,
        regularity in regularity(),
    ) {
        let days = completion_days(&offsets);
        let creation_day = today() - Duration::days(created);
        let score = strength::strength_percentage(creation_day, regularity, &days);
        prop_assert!(score <= 100);
    }

    // The gain is returned signed and unclamped. Dropping recent days can only
    // lower the completion count against the same baseline, so it never goes
    // negative and never exceeds the current score.
    #[test]
    fn strength_gain_is_bounded_by_current_score(
        offsets in prop::collection::vec(-5i64..500, 0..200),
        created in -3i64..450,
        regularity in regularity(),
        window in prop_oneof![0u32..400, Just(u32::MAX)],
    ) {
        let days = completion_days(&offsets);
        let creation_day = today() - Duration::days(created);
        let score = strength::strength_percentage(creation_day, regularity, &days);
        let gain =
            strength::strength_gained_within_last_days(creation_day, regularity, &days, window);
        prop_assert!(gain >= 0, "gain {} below zero", gain);
        prop_assert!(gain <= score as i32, "gain {} above score {}", gain, score);
    }

    #[test]
    fn habit_created_today_scores_fifty(
        offsets in prop::collection::vec(-5i64..60, 0..60),
        regularity in regularity(),
    ) {
        let days = completion_days(&offsets);
        prop_assert_eq!(strength::strength_percentage(today(), regularity, &days), 50);
    }

    #[test]
    fn duplicate_days_change_nothing(
        offsets in prop::collection::vec(-3i64..120, 1..60),
        hours in 0i64..24,
        regularity in regularity(),
        window in 0u32..120,
    ) {
        let created = now() - Duration::days(150);
        let base = Habit::new("Walk", regularity, created)
            .unwrap()
            .with_completed_dates(offsets.iter().map(|n| now() - Duration::days(*n)));
        // Same day, different time.
        let start_of_day = |n: i64| {
            Utc.from_utc_datetime(&(today() - Duration::days(n)).and_hms_opt(0, 0, 0).unwrap())
        };
        let doubled = base.clone().with_completed_dates(
            offsets.iter().map(|n| start_of_day(*n) + Duration::hours(hours)),
        );

        let a = HabitAnalytics::at(&base, &now());
        let b = HabitAnalytics::at(&doubled, &now());
        prop_assert_eq!(a.current_streak(), b.current_streak());
        prop_assert_eq!(a.longest_streak(), b.longest_streak());
        prop_assert_eq!(a.strength_percentage(), b.strength_percentage());
        prop_assert_eq!(
            a.strength_gained_within_last_days(window),
            b.strength_gained_within_last_days(window)
        );
        prop_assert_eq!(
            a.completions_within_last_days(window),
            b.completions_within_last_days(window)
        );
    }

    #[test]
    fn window_split_is_a_partition(
        offsets in prop::collection::vec(-5i64..200, 0..100),
        window in 0u32..200,
    ) {
        let days = completion_days(&offsets);
        let recent = days.within_last_days(window);
        let older = days.before_last_days(window);
        prop_assert_eq!(recent.len() + older.len(), days.len());
        prop_assert_eq!(
            strength::completions_within_last_days(&days, window) as usize,
            recent.len()
        );
    }
}
