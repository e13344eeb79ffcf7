//! Position of a Jalali year inside the 2820-year grand leap cycle.

use serde::{Deserialize, Serialize};

use crate::consts::{GRAND_CYCLE_BASE, GRAND_CYCLE_LEAPS, GRAND_CYCLE_YEARS};
use crate::is_jalali_leap;

/// Leap-cycle facts about a single Jalali year, relative to the grand cycle
/// that began in AP 475.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearCycleInfo {
    pub year: i32,
    pub is_leap: bool,
    /// Years of the current grand cycle already elapsed before `year`.
    pub position: i32,
    /// Years of the current grand cycle left after `year`.
    pub remaining: i32,
    /// Leap years counted into the current grand cycle, `0..683`.
    pub leaps_passed: i32,
    pub leaps_remaining: i32,
    /// Leap years between AP 475 and `year`, both inclusive, negative when
    /// `year` precedes the base.
    pub absolute_leaps: i32,
}

impl YearCycleInfo {
    /// Computes the cycle facts for `year`.
    ///
    /// This walks every year between the base and `year`, so the cost grows
    /// linearly with the distance from AP 475.
    pub fn for_year(year: i32) -> Self {
        let step = if year >= GRAND_CYCLE_BASE { 1 } else { -1 };

        let mut count = 0;
        let mut y = GRAND_CYCLE_BASE;
        loop {
            if is_jalali_leap(y) {
                count += 1;
            }
            if y == year {
                break;
            }
            y += step;
        }

        let absolute_leaps = count * step;
        let leaps_passed = absolute_leaps.rem_euclid(GRAND_CYCLE_LEAPS);
        let position = (year - GRAND_CYCLE_BASE).rem_euclid(GRAND_CYCLE_YEARS);

        Self {
            year,
            is_leap: is_jalali_leap(year),
            position,
            remaining: GRAND_CYCLE_YEARS - position - 1,
            leaps_passed,
            leaps_remaining: GRAND_CYCLE_LEAPS - leaps_passed,
            absolute_leaps,
        }
    }
}

impl From<i32> for YearCycleInfo {
    fn from(year: i32) -> Self {
        Self::for_year(year)
    }
}
