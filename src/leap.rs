use crate::consts::{
    CENTURY_CYCLE, EARLY_YEARS_LIMIT, ESFAND, FEBRUARY, GREGORIAN_CYCLE, GREGORIAN_MONTH_DAYS,
    JALALI_MONTH_DAYS, LEAP_RESIDUES, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS, NORMAL_YEAR_DAYS,
    SUBCYCLE_LEAPS, SUBCYCLE_YEARS,
};

/// Jalali leap year test.
///
/// Loosely based on the 2820-year grand cycle: inside every 33-year
/// sub-cycle the years at residues 1, 5, 9, 13, 17, 22, 26 and 30 are leap.
/// Years up to 5 fall back to the plain four-year rule since the residue
/// set cannot resolve them.
pub const fn is_jalali_leap(year: i32) -> bool {
    if year <= EARLY_YEARS_LIMIT {
        return year.rem_euclid(LEAP_YEAR_CYCLE) == 0;
    }

    let residue = year.rem_euclid(SUBCYCLE_YEARS);
    let mut i = 0;
    while i < LEAP_RESIDUES.len() {
        if LEAP_RESIDUES[i] == residue {
            return true;
        }
        i += 1;
    }
    false
}

/// Proleptic Gregorian leap year test.
pub const fn is_gregorian_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a Jalali year.
pub const fn jalali_days_in_year(year: i32) -> i32 {
    if is_jalali_leap(year) { LEAP_YEAR_DAYS } else { NORMAL_YEAR_DAYS }
}

/// Days from the first day of AP 0 to the first day of `year`, negative
/// for earlier years.
///
/// Counts leap years in closed form under the same rule as
/// [`is_jalali_leap`], so the cost does not depend on `year`.
pub(crate) fn jalali_days_before_year(year: i64) -> i64 {
    i64::from(NORMAL_YEAR_DAYS) * year + leap_years_before(year)
}

/// Leap years in `0..year`, or minus the leap years in `year..0`.
fn leap_years_before(year: i64) -> i64 {
    let four_year = |y: i64| (y + i64::from(LEAP_YEAR_CYCLE) - 1).div_euclid(i64::from(LEAP_YEAR_CYCLE));

    let first_residue_year = i64::from(EARLY_YEARS_LIMIT) + 1;
    if year <= first_residue_year {
        return four_year(year);
    }
    four_year(first_residue_year) + residue_hits_before(year) - residue_hits_before(first_residue_year)
}

/// Years in `0..year` whose `mod 33` residue is in the leap set.
fn residue_hits_before(year: i64) -> i64 {
    let residue = year.rem_euclid(i64::from(SUBCYCLE_YEARS));
    let partial: i64 = LEAP_RESIDUES
        .iter()
        .map(|&leap| i64::from(i64::from(leap) < residue))
        .sum();
    year.div_euclid(i64::from(SUBCYCLE_YEARS)) * i64::from(SUBCYCLE_LEAPS) + partial
}

/// Number of days in a zero-based Jalali month of `year`.
///
/// `month` must already be in `0..=11`.
pub const fn jalali_days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 0 && month <= ESFAND);

    let days = JALALI_MONTH_DAYS[month as usize];
    if month == ESFAND && is_jalali_leap(year) { days + 1 } else { days }
}

/// Number of days in a one-based Gregorian month of `year`.
///
/// `month` must already be in `1..=12`.
pub const fn gregorian_days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 1 && month <= 12);

    if month == FEBRUARY && is_gregorian_leap(year) {
        GREGORIAN_MONTH_DAYS[month as usize] + 1
    } else {
        GREGORIAN_MONTH_DAYS[month as usize]
    }
}
