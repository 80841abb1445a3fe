//! Ledger dates and reference-year detection.

use chrono::{Datelike, Duration, NaiveDate};

use crate::patterns::HEADER_DATE_RANGE;

/// Month number for a three-letter ledger month name.
pub fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Build a date, rolling an out-of-range day into the neighbouring month.
///
/// `Feb 30` becomes `Mar 2` (or `Mar 1` in a leap year) and day `0` is the last
/// day of the previous month. Returns `None` only for an invalid month or a year
/// outside the calendar range.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Detect the ledger year from a `DD-MM-YYYY - DD-MM-YYYY` header line.
///
/// The year of the later date wins.
pub fn detect_year(text: &str) -> Option<i32> {
    text.lines().map(str::trim).find_map(|line| {
        let caps = HEADER_DATE_RANGE.captures(line)?;
        let date_at = |d: usize| -> (i32, Option<NaiveDate>) {
            let day: u32 = caps[d].parse().unwrap_or(0);
            let month: u32 = caps[d + 1].parse().unwrap_or(0);
            let year: i32 = caps[d + 2].parse().unwrap_or(0);
            (year, NaiveDate::from_ymd_opt(year, month, day))
        };

        let (from_year, from) = date_at(1);
        let (to_year, to) = date_at(4);
        let year = match (from, to) {
            (Some(from), Some(to)) => from.max(to).year(),
            _ => from_year.max(to_year),
        };
        Some(year)
    })
}
