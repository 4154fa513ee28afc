//! Recurrence expression resolution
//!
//! A recurrence spec is either a quantity plus unit ("2 weeks") or a
//! comma-separated weekday set ("monday,thursday"). A leading numeric token
//! always selects the quantity grammar; weekday names never start with a
//! digit, so the dispatch is lossless.

use chrono::{Datelike, Duration, NaiveDate};

use super::{date_spec, ScheduleError};

/// Resolve a recurrence expression to the next occurrence after `reference`.
///
/// For weekday sets the result is the earliest upcoming occurrence among
/// the named weekdays, not a union schedule.
pub fn resolve(spec: &str, reference: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let mut tokens = spec.split_whitespace();

    let first = match tokens.next() {
        Some(t) => t,
        None => return Err(invalid(spec)),
    };

    if let Ok(n) = first.parse::<u32>() {
        let unit = tokens.next().ok_or_else(|| invalid(spec))?;
        if tokens.next().is_some() {
            return Err(invalid(spec));
        }

        return match unit {
            "day" | "days" => Ok(reference + Duration::days(i64::from(n))),
            "week" | "weeks" => Ok(reference + Duration::days(7 * i64::from(n))),
            "month" | "months" => Ok(add_months(reference, n)),
            "year" | "years" => Ok(add_years(reference, n)),
            _ => Err(invalid(spec)),
        };
    }

    weekday_set(spec, reference)
}

fn invalid(spec: &str) -> ScheduleError {
    ScheduleError::InvalidRecurrenceSpec(spec.to_string())
}

/// Resolve each weekday name independently and keep the soonest date.
fn weekday_set(spec: &str, reference: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    let mut soonest: Option<NaiveDate> = None;

    for name in spec.split(',') {
        let name = name.trim().to_lowercase();
        if date_spec::weekday_index(&name).is_none() {
            return Err(invalid(spec));
        }

        let date = date_spec::resolve(&name, reference).map_err(|_| invalid(spec))?;
        soonest = Some(soonest.map_or(date, |d| d.min(date)));
    }

    soonest.ok_or_else(|| invalid(spec))
}

/// Advance by whole months, holding the day-of-month and letting month-end
/// overflow (Jan 31 + 1 month is Mar 3).
fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + n as i32;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    date_spec::date_with_overflow(year, month, date.day())
}

/// Advance by whole years; Feb 29 overflows to Mar 1 off leap years.
fn add_years(date: NaiveDate, n: u32) -> NaiveDate {
    date_spec::date_with_overflow(date.year() + n as i32, date.month(), date.day())
}
