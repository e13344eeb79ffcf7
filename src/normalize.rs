//! Repair of out-of-range civil dates by carrying between fields.

use crate::consts::{
    HOURS_PER_DAY, MAX_NORMALIZED_YEAR, MIN_NORMALIZED_YEAR, MINUTES_PER_HOUR, MONTHS_IN_YEAR, SECONDS_PER_MINUTE,
};
use crate::{CivilDate, ZoneLookup, epoch_day_of, ordinal};
use tracing::debug;

/// Carries whole multiples of `factor` from `low` into `high`.
///
/// Afterwards `low` is in `0..factor`. Negative values borrow from `high`
/// (floor division), so `(0, -1)` with factor 60 becomes `(-1, 59)`. A
/// carry that would push `high` past the `i32` range saturates it.
///
/// ```
/// use jalali_date::recluster;
///
/// let (mut minute, mut second) = (10, -61);
/// recluster(&mut minute, &mut second, 60);
/// assert_eq!((8, 59), (minute, second));
/// ```
pub fn recluster(high: &mut i32, low: &mut i32, factor: i32) {
    debug_assert!(factor > 0);

    let (mut wide_high, mut wide_low) = (i64::from(*high), i64::from(*low));
    carry(&mut wide_high, &mut wide_low, factor);
    *high = saturate(wide_high);
    *low = saturate(wide_low);
}

fn carry(high: &mut i64, low: &mut i64, factor: i32) {
    let factor = i64::from(factor);
    *high += low.div_euclid(factor);
    *low = low.rem_euclid(factor);
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Brings every field of `date` back into range and recomputes the derived ones.
///
/// Seconds, minutes and hours carry upward into days, months carry into
/// years, then the leftover days are counted forward or backward from the
/// first of the month. `day_of_year`, `weekday` and the zone metadata of the
/// input are ignored and rebuilt; the zone is looked up again in `zone`.
///
/// Any combination of integers is accepted. Carries are done in `i64`, and a
/// result before [`MIN_NORMALIZED_YEAR`] or after [`MAX_NORMALIZED_YEAR`]
/// saturates to the first or last second of that range.
#[tracing::instrument(level = "trace", skip(zone))]
pub fn normalize<'z, Z: ZoneLookup + ?Sized>(date: CivilDate<'_>, zone: &'z Z) -> CivilDate<'z> {
    let [mut year, mut month, mut day, mut hour, mut minute, mut second] =
        [date.year, date.month, date.day, date.hour, date.minute, date.second].map(i64::from);

    carry(&mut minute, &mut second, SECONDS_PER_MINUTE);
    carry(&mut hour, &mut minute, MINUTES_PER_HOUR);
    carry(&mut day, &mut hour, HOURS_PER_DAY);
    // month has to be a valid index before month lengths can be queried
    carry(&mut year, &mut month, MONTHS_IN_YEAR);

    let month_start = epoch_day_of(year, ordinal::day_of_year_of(saturate(month), 1));
    let day_offset = month_start + day - 1;

    let first = epoch_day_of(i64::from(MIN_NORMALIZED_YEAR), 0);
    let last = epoch_day_of(i64::from(MAX_NORMALIZED_YEAR) + 1, 0) - 1;
    let (day_offset, hour, minute, second) = if day_offset < first {
        debug!(day_offset, "normalized date before supported range, saturating");
        (first, 0, 0, 0)
    } else if day_offset > last {
        debug!(day_offset, "normalized date after supported range, saturating");
        (last, HOURS_PER_DAY - 1, MINUTES_PER_HOUR - 1, SECONDS_PER_MINUTE - 1)
    } else {
        (day_offset, saturate(hour), saturate(minute), saturate(second))
    };

    CivilDate {
        hour,
        minute,
        second,
        ..CivilDate::from_epoch_day(day_offset, zone)
    }
}
