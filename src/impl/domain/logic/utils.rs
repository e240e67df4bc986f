use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::DateOutOfRange;

/// (year, month) of the month after the given one.
pub(crate) fn following_month(year: i32, month: u32) -> Result<(i32, u32), ServerError> {
    if month >= 12 {
        let next_year = year
            .checked_add(1)
            .ok_or_else(|| DateOutOfRange::new(year, month))?;
        Ok((next_year, 1))
    } else {
        Ok((year, month + 1))
    }
}

/// Brings an arbitrary (year, month) pair back into calendar range, rolling
/// months below 1 or above 12 into neighbouring years (month 13 of 2024 is
/// January 2025, month 0 of 2025 is December 2024).
pub(crate) fn normalize_month(year: i32, month: i64) -> Result<(i32, u32), ServerError> {
    let total = i64::from(year) * 12 + (month - 1);
    let normalized_year = i32::try_from(total.div_euclid(12))
        .map_err(|_| DateOutOfRange::new(year, month.clamp(0, u32::MAX as i64) as u32))?;
    Ok((normalized_year, (total.rem_euclid(12) + 1) as u32))
}

/// Returns the last day of the given month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, ServerError> {
    let (next_year, next_month) = following_month(year, month)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or_else(|| DateOutOfRange::new(year, month))
}

/// Returns `day` in the given month, clamped into the month's valid days.
pub(crate) fn clamped_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ServerError> {
    let last = last_day_of_month(year, month)?;
    let day = day.clamp(1, last.day());
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateOutOfRange::new(year, month))
}
