//! Due-date expression resolution
//!
//! A due-date spec is resolved against a caller-supplied reference date,
//! never against the wall clock. All arithmetic stays in the reference's
//! calendar frame.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use super::ScheduleError;

/// Weekday names, indexed 0=Sunday through 6=Saturday.
const DAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Date literal formats accepted as-is.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Resolve a free-form due-date expression against a reference date.
///
/// Tried in order: absolute date literal, "today"/"tomorrow", weekday name,
/// numeric day-of-month. A weekday equal to the reference's own weekday
/// resolves one week out, never to the reference itself. A day-of-month
/// smaller than the reference's day lands in the following month.
pub fn resolve(spec: &str, reference: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    if let Some(date) = parse_absolute(spec) {
        return Ok(date);
    }

    let lower = spec.trim().to_lowercase();

    match lower.as_str() {
        "today" => return Ok(reference),
        "tomorrow" => return Ok(reference + Duration::days(1)),
        _ => {}
    }

    if let Some(target) = weekday_index(&lower) {
        return Ok(next_weekday(reference, target));
    }

    if !lower.is_empty() && lower.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(day) = lower.parse::<u32>() {
            if (1..=31).contains(&day) {
                return Ok(day_of_month(reference, day));
            }
        }
    }

    Err(ScheduleError::InvalidDateSpec(spec.to_string()))
}

/// Parse a complete date or datetime literal. Time-of-day is discarded.
fn parse_absolute(spec: &str) -> Option<NaiveDate> {
    let spec = spec.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(spec, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(spec, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Index of a weekday name in the 0=Sunday frame, if `name` is one.
pub(crate) fn weekday_index(name: &str) -> Option<u32> {
    DAYS.iter().position(|&d| d == name).map(|i| i as u32)
}

/// Next occurrence of `target` strictly after `reference`.
fn next_weekday(reference: NaiveDate, target: u32) -> NaiveDate {
    let ref_day = reference.weekday().num_days_from_sunday();
    let offset = if target > ref_day {
        target - ref_day
    } else {
        (7 - ref_day) + target
    };
    reference + Duration::days(i64::from(offset))
}

/// Resolve a bare day-of-month. Days already past this month roll into the
/// next; out-of-range days overflow further (31 in June becomes July 1).
fn day_of_month(reference: NaiveDate, day: u32) -> NaiveDate {
    let mut year = reference.year();
    let mut month = reference.month();

    if day < reference.day() {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    date_with_overflow(year, month, day)
}

/// Build a date from parts, letting an out-of-range day spill into the
/// following month. `month` must be 1-12.
pub(crate) fn date_with_overflow(year: i32, month: u32, day: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month is 1-12");
    first + Duration::days(i64::from(day) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Thursday
    fn reference() -> NaiveDate {
        date(2017, 6, 15)
    }

    #[test]
    fn test_absolute_literal() {
        assert_eq!(resolve("2018-01-02", reference()).unwrap(), date(2018, 1, 2));
        assert_eq!(resolve("7/4/2017", reference()).unwrap(), date(2017, 7, 4));
        assert_eq!(
            resolve("2017-12-24T18:30:00", reference()).unwrap(),
            date(2017, 12, 24)
        );
    }

    #[test]
    fn test_today_and_tomorrow() {
        assert_eq!(resolve("today", reference()).unwrap(), reference());
        assert_eq!(resolve("Tomorrow", reference()).unwrap(), date(2017, 6, 16));
    }

    #[test]
    fn test_weekday_later_this_week() {
        assert_eq!(resolve("friday", reference()).unwrap(), date(2017, 6, 16));
        assert_eq!(resolve("saturday", reference()).unwrap(), date(2017, 6, 17));
    }

    #[test]
    fn test_weekday_wraps_to_next_week() {
        // Tuesday < Thursday, so next week's Tuesday
        assert_eq!(resolve("tuesday", reference()).unwrap(), date(2017, 6, 20));
        assert_eq!(resolve("sunday", reference()).unwrap(), date(2017, 6, 18));
    }

    #[test]
    fn test_same_weekday_is_next_week() {
        // Reference is itself a Thursday
        assert_eq!(resolve("thursday", reference()).unwrap(), date(2017, 6, 22));
        assert_eq!(
            resolve("thursday", reference()).unwrap(),
            reference() + Duration::days(7)
        );
    }

    #[test]
    fn test_weekday_case_insensitive() {
        assert_eq!(resolve("FRIDAY", reference()).unwrap(), date(2017, 6, 16));
        assert_eq!(resolve("Monday", reference()).unwrap(), date(2017, 6, 19));
    }

    #[test]
    fn test_day_of_month_ahead_stays_in_month() {
        assert_eq!(resolve("20", reference()).unwrap(), date(2017, 6, 20));
        assert_eq!(resolve("15", reference()).unwrap(), date(2017, 6, 15));
    }

    #[test]
    fn test_day_of_month_past_moves_to_next_month() {
        assert_eq!(resolve("3", reference()).unwrap(), date(2017, 7, 3));
        assert_eq!(resolve("14", reference()).unwrap(), date(2017, 7, 14));
    }

    #[test]
    fn test_day_of_month_wraps_year() {
        let december = date(2017, 12, 20);
        assert_eq!(resolve("5", december).unwrap(), date(2018, 1, 5));
    }

    #[test]
    fn test_day_of_month_overflow() {
        // June has 30 days; 31 spills into July
        assert_eq!(resolve("31", reference()).unwrap(), date(2017, 7, 1));
    }

    #[test]
    fn test_invalid_specs() {
        for spec in ["not-a-date", "", "0", "32", "someday", "2017-13-01"] {
            let err = resolve(spec, reference()).unwrap_err();
            assert_eq!(err, ScheduleError::InvalidDateSpec(spec.to_string()));
        }
    }

    #[test]
    fn test_error_message() {
        let err = resolve("not-a-date", reference()).unwrap_err();
        assert_eq!(err.to_string(), "not-a-date is not a valid date.");
    }

    #[test]
    fn test_date_with_overflow() {
        assert_eq!(date_with_overflow(2017, 6, 31), date(2017, 7, 1));
        assert_eq!(date_with_overflow(2017, 2, 30), date(2017, 3, 2));
        assert_eq!(date_with_overflow(2016, 2, 30), date(2016, 3, 1));
    }
}
