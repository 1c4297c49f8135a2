use chrono::{Datelike, Duration, NaiveDate, Weekday};
use leavedesk_core::services::working_days::{
    count_working_days, exceeds_study_leave_limit, is_weekend, resolve_end_date,
    STUDY_LEAVE_LIMIT, WEEKEND_DAY_INDICES,
};
use std::num::NonZeroU32;

const FIXED_ENTITLEMENTS: [u32; 3] = [14, 21, 51];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every day from 2023-12-01 through 2025-03-31, covering a leap day and
/// several year boundaries.
fn sample_dates() -> impl Iterator<Item = NaiveDate> {
    let first = date(2023, 12, 1);
    let last = date(2025, 3, 31);
    first.iter_days().take_while(move |d| *d <= last)
}

fn brute_force_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut cursor = start;
    while cursor <= end {
        if !matches!(cursor.weekday(), Weekday::Thu | Weekday::Fri) {
            count += 1;
        }
        cursor += Duration::days(1);
    }
    count
}

#[test]
fn weekend_policy_is_thursday_and_friday() {
    assert_eq!(WEEKEND_DAY_INDICES, [4, 5]);
    for day in sample_dates() {
        let expected = matches!(day.weekday(), Weekday::Thu | Weekday::Fri);
        assert_eq!(is_weekend(day), expected, "{}", day);
    }
}

#[test]
fn weekend_depends_only_on_day_of_week() {
    for day in sample_dates() {
        assert_eq!(is_weekend(day), is_weekend(day + Duration::days(7)), "{}", day);
        assert_eq!(is_weekend(day), is_weekend(day - Duration::days(364)), "{}", day);
    }
}

#[test]
fn inverted_ranges_count_zero() {
    for start in sample_dates() {
        for back in 1..10 {
            assert_eq!(count_working_days(start, start - Duration::days(back)), 0);
        }
    }
}

#[test]
fn single_day_counts_one_unless_rest_day() {
    for day in sample_dates() {
        let expected = if is_weekend(day) { 0 } else { 1 };
        assert_eq!(count_working_days(day, day), expected, "{}", day);
    }
}

#[test]
fn any_seven_consecutive_days_hold_five_working_days() {
    for start in sample_dates() {
        assert_eq!(count_working_days(start, start + Duration::days(6)), 5, "{}", start);
    }
}

#[test]
fn counter_matches_brute_force() {
    let start = date(2024, 2, 20);
    for len in 0..90 {
        let end = start + Duration::days(len);
        assert_eq!(count_working_days(start, end), brute_force_count(start, end));
    }
}

#[test]
fn resolver_round_trips_and_is_minimal() {
    for start in sample_dates() {
        for required in FIXED_ENTITLEMENTS {
            let end = resolve_end_date(start, NonZeroU32::new(required).unwrap());
            assert!(end >= start);
            assert_eq!(count_working_days(start, end), required, "{} +{}", start, required);
            assert!(
                count_working_days(start, end - Duration::days(1)) < required,
                "{} +{} is not minimal",
                start,
                required
            );
        }
    }
}

#[test]
fn resolver_accepts_rest_day_start() {
    // 2025-01-02 is Thursday, 2025-01-03 Friday.
    for start in [date(2025, 1, 2), date(2025, 1, 3)] {
        assert!(is_weekend(start));
        let end = resolve_end_date(start, NonZeroU32::new(14).unwrap());
        assert_eq!(end, date(2025, 1, 21));
        assert_eq!(count_working_days(start, end), 14);
    }
}

#[test]
fn study_limit_boundary() {
    for start in sample_dates().filter(|d| !is_weekend(*d)) {
        let at_limit = resolve_end_date(start, NonZeroU32::new(STUDY_LEAVE_LIMIT).unwrap());
        let over_limit = resolve_end_date(start, NonZeroU32::new(STUDY_LEAVE_LIMIT + 1).unwrap());
        assert!(!exceeds_study_leave_limit(start, at_limit), "{}", start);
        assert!(exceeds_study_leave_limit(start, over_limit), "{}", start);
    }
}

#[test]
fn saturday_to_wednesday_is_five_working_days() {
    let saturday = date(2025, 1, 4);
    let wednesday = date(2025, 1, 8);
    assert_eq!(saturday.weekday(), Weekday::Sat);
    assert_eq!(wednesday.weekday(), Weekday::Wed);
    assert_eq!(count_working_days(saturday, wednesday), 5);
}

#[test]
fn single_thursday_counts_zero() {
    let thursday = date(2025, 1, 2);
    assert_eq!(thursday.weekday(), Weekday::Thu);
    assert_eq!(count_working_days(thursday, thursday), 0);
}

#[test]
fn fourteen_days_from_sunday_end_seventeen_days_later() {
    let sunday = date(2025, 1, 5);
    assert_eq!(sunday.weekday(), Weekday::Sun);
    let end = resolve_end_date(sunday, NonZeroU32::new(14).unwrap());
    assert_eq!(end, sunday + Duration::days(17));
    assert_eq!(brute_force_count(sunday, end), 14);
}

#[test]
fn repeated_calls_agree() {
    let start = date(2024, 2, 25);
    let end = date(2024, 3, 17);
    let required = NonZeroU32::new(21).unwrap();

    assert_eq!(is_weekend(start), is_weekend(start));
    assert_eq!(count_working_days(start, end), count_working_days(start, end));
    assert_eq!(resolve_end_date(start, required), resolve_end_date(start, required));
    assert_eq!(
        exceeds_study_leave_limit(start, end),
        exceeds_study_leave_limit(start, end)
    );
}
