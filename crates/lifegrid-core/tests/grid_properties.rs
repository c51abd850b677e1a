//! Property tests for the grid arithmetic.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use lifegrid_core::grid::{
    absolute_week_index, block_index, classify_week, day_percentage, life_percentage, lived_weeks,
    seconds_until_midnight, week_date_range, WeekClass, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_YEAR,
};
use proptest::prelude::*;

fn any_birth() -> impl Strategy<Value = NaiveDate> {
    // 1930..2026, day-resolution.
    (0i64..35_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(1930, 1, 1).unwrap() + Duration::days(days)
    })
}

fn any_instant() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..4_000_000_000).prop_map(|secs| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::seconds(secs)
    })
}

proptest! {
    #[test]
    fn lived_weeks_is_monotone_in_now(birth in any_birth(), now in any_instant(), step in 0i64..1_000_000) {
        let later = now + Duration::seconds(step);
        prop_assert!(lived_weeks(birth, now) <= lived_weeks(birth, later));
    }

    #[test]
    fn life_percentage_stays_in_range(birth in any_birth(), now in any_instant()) {
        let pct = life_percentage(birth, now);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn classification_has_exactly_one_current(lived in 0u32..TOTAL_WEEKS) {
        let mut current = 0u32;
        let mut lived_count = 0u32;
        for absolute in 0..TOTAL_WEEKS {
            match classify_week(absolute, lived) {
                WeekClass::Current => current += 1,
                WeekClass::Lived => lived_count += 1,
                WeekClass::Future => {}
            }
        }
        prop_assert_eq!(current, 1);
        prop_assert_eq!(lived_count, lived);
    }

    #[test]
    fn absolute_index_covers_the_grid(year in 0u32..TOTAL_YEARS, week in 1u32..=WEEKS_PER_YEAR) {
        let absolute = absolute_week_index(year, week);
        prop_assert!(absolute < TOTAL_WEEKS);
        // The mapping is invertible.
        prop_assert_eq!(absolute / WEEKS_PER_YEAR, year);
        prop_assert_eq!(absolute % WEEKS_PER_YEAR + 1, week);
    }

    #[test]
    fn week_range_spans_seven_days(birth in any_birth(), year in 0u32..TOTAL_YEARS, week in 1u32..=WEEKS_PER_YEAR) {
        let (start, end) = week_date_range(birth, year, week);
        prop_assert_eq!(end - start, Duration::days(6));
        prop_assert!(start >= birth);
    }

    #[test]
    fn block_index_is_monotone_over_the_day(minute in 0u32..1439, step in 0u32..120) {
        let later = (minute + step).min(1439);
        let t = |m: u32| NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap();
        prop_assert!(block_index(t(minute)) <= block_index(t(later)));
        prop_assert!(block_index(t(minute)) < 144);
    }

    #[test]
    fn midnight_countdown_and_percentage_agree(secs in 0u32..86_400) {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
        let left = seconds_until_midnight(time);
        prop_assert_eq!(left + secs, 86_400);
        let pct = day_percentage(time);
        prop_assert!((0.0..100.0).contains(&pct));
    }
}
