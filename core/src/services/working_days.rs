//! Working-day arithmetic for leave spans.
//!
//! The institution works Saturday through Wednesday. Thursday and Friday are
//! the weekly rest days and never count towards a leave span. The rest days
//! are a fixed regional convention, not derived from locale or configuration.

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate};

/// Weekday indices, counted from Sunday = 0, that are not working days
/// (Thursday and Friday).
pub const WEEKEND_DAY_INDICES: [u32; 2] = [4, 5];

/// Study leave spanning more working days than this must be filed through
/// the administrative office instead of this system.
pub const STUDY_LEAVE_LIMIT: u32 = 15;

/// Returns true when `date` falls on a weekly rest day.
pub fn is_weekend(date: NaiveDate) -> bool {
    WEEKEND_DAY_INDICES.contains(&date.weekday().num_days_from_sunday())
}

/// Counts working days between `start` and `end`, both inclusive.
///
/// An inverted span (`start > end`) yields 0. Callers rely on that zero to
/// report "end date must be on or after start date", so it is not an error.
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    let mut count = 0;
    let mut cursor = start;
    loop {
        if !is_weekend(cursor) {
            count += 1;
        }
        if cursor >= end {
            break;
        }
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    count
}

/// Finds the earliest end date such that the inclusive span starting at
/// `start` holds exactly `required` working days.
///
/// `start` may itself be a rest day; it simply does not count. At the very
/// end of the representable calendar the cursor stops at the last date.
pub fn resolve_end_date(start: NaiveDate, required: NonZeroU32) -> NaiveDate {
    let required = required.get();
    let mut count = 0;
    let mut cursor = start;
    loop {
        if !is_weekend(cursor) {
            count += 1;
        }
        if count >= required {
            return cursor;
        }
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => return cursor,
        };
    }
}

/// Returns true when a study leave span is too long for self-service
/// submission. Only meaningful for study leave.
pub fn exceeds_study_leave_limit(start: NaiveDate, end: NaiveDate) -> bool {
    count_working_days(start, end) > STUDY_LEAVE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn thursday_and_friday_are_rest_days() {
        // 2025-01-02 is Thursday
        let thursday = date(2025, 1, 2);
        assert_eq!(thursday.weekday(), Weekday::Thu);
        assert!(is_weekend(thursday));
        assert!(is_weekend(date(2025, 1, 3)));
    }

    #[test]
    fn saturday_through_wednesday_are_working_days() {
        let saturday = date(2025, 1, 4);
        for offset in 0..5 {
            let day = saturday + Duration::days(offset);
            assert!(!is_weekend(day), "{} should be a working day", day);
        }
    }

    #[test]
    fn single_working_day_counts_once() {
        let sunday = date(2025, 1, 5);
        assert_eq!(count_working_days(sunday, sunday), 1);
    }

    #[test]
    fn single_rest_day_counts_zero() {
        let friday = date(2025, 1, 3);
        assert_eq!(count_working_days(friday, friday), 0);
    }

    #[test]
    fn inverted_span_counts_zero() {
        assert_eq!(count_working_days(date(2025, 1, 10), date(2025, 1, 5)), 0);
    }

    #[test]
    fn full_week_holds_five_working_days() {
        let start = date(2025, 1, 1);
        for offset in 0..7 {
            let from = start + Duration::days(offset);
            assert_eq!(count_working_days(from, from + Duration::days(6)), 5);
        }
    }

    #[test]
    fn resolver_skips_rest_days_at_start() {
        // Thursday start: the first working day is the following Saturday.
        assert_eq!(resolve_end_date(date(2025, 1, 2), days(1)), date(2025, 1, 4));
    }

    #[test]
    fn resolver_on_working_start_with_one_day_is_start() {
        let sunday = date(2025, 1, 5);
        assert_eq!(resolve_end_date(sunday, days(1)), sunday);
    }

    #[test]
    fn resolver_saturates_at_calendar_end() {
        assert_eq!(resolve_end_date(NaiveDate::MAX, days(10)), NaiveDate::MAX);
    }

    #[test]
    fn counter_stops_at_calendar_end() {
        let start = NaiveDate::MAX - Duration::days(6);
        assert_eq!(count_working_days(start, NaiveDate::MAX), 5);
    }

    #[test]
    fn study_limit_is_strictly_greater_than_fifteen() {
        // Sunday 2025-01-05: 15 working days end on 2025-01-25, 16 on 2025-01-26.
        let start = date(2025, 1, 5);
        assert!(!exceeds_study_leave_limit(start, date(2025, 1, 25)));
        assert!(exceeds_study_leave_limit(start, date(2025, 1, 26)));
    }
}
