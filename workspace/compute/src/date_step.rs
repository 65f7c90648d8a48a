//! Calendar stepping by whole months and years.
//!
//! The day of month is kept when the target month has it and clamped to the
//! target month's last day otherwise, so Jan 31 + 1 month is Feb 28 (or 29)
//! and never spills into March. Results past the last date chrono can
//! represent saturate to `NaiveDate::MAX`.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the date `months` calendar months after `date`.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based_month = i64::from(date.month0()) + i64::from(months);
    let year = i64::from(date.year()) + zero_based_month / 12;
    let month = (zero_based_month % 12) as u32 + 1;

    let Ok(year) = i32::try_from(year) else {
        return NaiveDate::MAX;
    };
    let day = date.day().min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// Returns the date `years` years after `date`; Feb 29 lands on Feb 28 in common years.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    match years.checked_mul(12) {
        Some(months) => add_months(date, months),
        None => NaiveDate::MAX,
    }
}
