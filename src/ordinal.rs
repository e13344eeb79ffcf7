use tracing::debug;

use crate::CalendarError;
use crate::consts::{ESFAND, JALALI_DAYS_BEFORE_MONTH, JALALI_MONTH_DAYS, MAX_DAY, MAX_DAY_OF_YEAR, MIN_DAY};

/// Resolves a zero-based day-of-year into a zero-based month and a day of month.
///
/// The walk never looks at leap status: index 365 lands on Esfand 30 and
/// whether that day exists is the caller's concern.
///
/// # Errors
/// Returns `CalendarError::DayOfYearOutOfRange` outside `0..=365`.
pub fn date_from_day_of_year(day_of_year: i32) -> Result<(i32, i32), CalendarError> {
    if !(0..=MAX_DAY_OF_YEAR).contains(&day_of_year) {
        debug!(day_of_year, "day-of-year outside 0..=365");
        return Err(CalendarError::DayOfYearOutOfRange(day_of_year));
    }
    Ok(month_day_of(day_of_year))
}

/// Zero-based day-of-year of a zero-based month and a day of month.
///
/// # Errors
/// Returns `CalendarError::MonthOutOfRange` outside `0..=11` and
/// `CalendarError::DayOfMonthOutOfRange` outside `1..=31`.
pub fn day_of_year_from_date(month: i32, day: i32) -> Result<i32, CalendarError> {
    if !(0..=ESFAND).contains(&month) {
        debug!(month, "month outside 0..=11");
        return Err(CalendarError::MonthOutOfRange(month));
    }
    if !(MIN_DAY..=MAX_DAY).contains(&day) {
        debug!(day, "day of month outside 1..=31");
        return Err(CalendarError::DayOfMonthOutOfRange(day));
    }
    Ok(day_of_year_of(month, day))
}

/// Unchecked walk over the month table; `day_of_year` must be in `0..=365`.
pub(crate) fn month_day_of(day_of_year: i32) -> (i32, i32) {
    let mut remaining = day_of_year + 1;
    let mut month = 0;
    while month < ESFAND && remaining > JALALI_MONTH_DAYS[month as usize] {
        remaining -= JALALI_MONTH_DAYS[month as usize];
        month += 1;
    }
    (month, remaining)
}

/// Unchecked prefix lookup; `month` must be in `0..=11`.
pub(crate) const fn day_of_year_of(month: i32, day: i32) -> i32 {
    JALALI_DAYS_BEFORE_MONTH[month as usize] + day - 1
}
