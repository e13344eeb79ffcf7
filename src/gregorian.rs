use crate::consts::{MAX_GREGORIAN_YEAR, MAX_JALALI_YEAR, MIN_DAY, MONTHS_IN_YEAR};
use crate::{gregorian_days_in_month, jalali_days_in_month};

/// Julian Day Number of a proleptic Gregorian date (Meeus).
///
/// # Example
///
/// ```
/// use jalali_date::julian_day_number;
///
/// assert_eq!(2451545, julian_day_number(2000, 1, 1));
/// ```
pub const fn julian_day_number(year: i32, month: i32, day: i32) -> i64 {
    // March-based year: a is 1 for January and February
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Proleptic Gregorian `(year, month, day)` of a Julian Day Number.
///
/// # Example
///
/// ```
/// use jalali_date::gregorian_from_julian_day_number;
///
/// assert_eq!((2000, 1, 1), gregorian_from_julian_day_number(2451545));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub const fn gregorian_from_julian_day_number(jdn: i64) -> (i64, i32, i32) {
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year, month as i32, day as i32)
}

/// Whether `(year, month, day)` names a Jalali date, with `month` in `1..=12`.
pub const fn is_valid_jalali(year: i32, month: i32, day: i32) -> bool {
    if year < 1 || year > MAX_JALALI_YEAR {
        return false;
    }
    if month < 1 || month > MONTHS_IN_YEAR {
        return false;
    }
    day >= MIN_DAY && day <= jalali_days_in_month(year, month - 1)
}

/// Whether `(year, month, day)` names a Gregorian date, with `month` in `1..=12`.
pub const fn is_valid_gregorian(year: i32, month: i32, day: i32) -> bool {
    if year < 1 || year > MAX_GREGORIAN_YEAR {
        return false;
    }
    if month < 1 || month > MONTHS_IN_YEAR {
        return false;
    }
    day >= MIN_DAY && day <= gregorian_days_in_month(year, month)
}
