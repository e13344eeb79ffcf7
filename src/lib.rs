//! Jalali (Persian solar) calendar arithmetic.
//!
//! Converts between signed Unix-epoch day offsets, Jalali civil dates and
//! Gregorian Julian Day Numbers, and repairs out-of-range civil dates.
//!
//! ```
//! use jalali_date::{CivilDate, Utc};
//!
//! let date = CivilDate::from_epoch_day(0, &Utc);
//! assert_eq!((1348, 10, 11), (date.year, date.month + 1, date.day));
//! assert_eq!(0, date.epoch_day());
//! ```

mod consts;
mod cycle;
mod gregorian;
mod instant;
mod leap;
mod normalize;
mod ordinal;
mod prelude;
mod zone;

pub use consts::*;
pub use cycle::YearCycleInfo;
pub use gregorian::{gregorian_from_julian_day_number, is_valid_gregorian, is_valid_jalali, julian_day_number};
pub use instant::AbsoluteInstant;
pub use leap::{gregorian_days_in_month, is_gregorian_leap, is_jalali_leap, jalali_days_in_month, jalali_days_in_year};
pub use normalize::{normalize, recluster};
pub use ordinal::{date_from_day_of_year, day_of_year_from_date};
pub use zone::{FixedZone, LocalZone, Utc, ZoneInfo, ZoneLookup};

use crate::leap::jalali_days_before_year;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, trace};

/// A Jalali civil date and time of day.
///
/// `month` is zero-based (0 is Farvardin) and `weekday` counts from
/// Saturday as 0. Once normalized every field is in range and `day_of_year`
/// and `weekday` agree with `(year, month, day)`; before that the
/// month/day/time fields may hold any integer, which is what
/// [`normalize`] accepts.
///
/// `zone` borrows from the [`ZoneLookup`] that produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(
    fmt = "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
    "year",
    "month + 1",
    "day",
    "hour",
    "minute",
    "second"
)]
pub struct CivilDate<'z> {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub day_of_year: i32,
    pub weekday: i32,
    pub is_dst: bool,
    /// Seconds east of UTC
    pub utc_offset: i32,
    #[serde(borrow)]
    pub zone: Option<&'z str>,
}

/// Error type for calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Day-of-year outside `0..=365`.
    #[error("Day-of-year {0} is out of range (must be 0-{max})", max = MAX_DAY_OF_YEAR)]
    DayOfYearOutOfRange(i32),

    /// Zero-based month outside `0..=11`.
    #[error("Month {0} is out of range (must be 0-{max})", max = ESFAND)]
    MonthOutOfRange(i32),

    /// Day of month outside `1..=31`.
    #[error("Day of month {0} is out of range (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    DayOfMonthOutOfRange(i32),

    /// A one-based `(year, month, day)` that is not a Jalali date.
    #[error("Invalid Jalali date {year}/{month:02}/{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// A one-based `(year, month, day)` that is not a Gregorian date.
    #[error("Invalid Gregorian date {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: i32, day: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid Jalali date {year}/{month:02}/{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: i32, minute: i32, second: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Zone metadata at `timestamp`, or UTC with no name when the lookup fails.
fn zone_at<Z: ZoneLookup + ?Sized>(zone: &Z, timestamp: i64) -> ZoneInfo<'_> {
    zone.lookup(timestamp).unwrap_or_else(|| {
        debug!(timestamp, "zone lookup failed, assuming UTC");
        ZoneInfo::default()
    })
}

/// Days between the Unix epoch and the given Jalali `(year, day_of_year)`.
pub(crate) fn epoch_day_of(year: i64, day_of_year: i32) -> i64 {
    jalali_days_before_year(year) - jalali_days_before_year(i64::from(EPOCH_YEAR))
        + i64::from(day_of_year - EPOCH_DAY_OF_YEAR)
}

impl<'z> CivilDate<'z> {
    /// Jalali date of a day offset from 1970-01-01, at midnight.
    ///
    /// Zone metadata is looked up for the first second of that day.
    pub fn from_epoch_day<Z: ZoneLookup + ?Sized>(day_offset: i64, zone: &'z Z) -> Self {
        let info = zone_at(zone, day_offset * SECONDS_PER_DAY);
        Self::from_epoch_day_in(day_offset, info)
    }

    /// Local civil date and time of a Unix timestamp in `zone`.
    ///
    /// The offset in effect at `timestamp` is applied before splitting it
    /// into a day and a time of day.
    pub fn from_timestamp<Z: ZoneLookup + ?Sized>(timestamp: i64, zone: &'z Z) -> Self {
        let info = zone_at(zone, timestamp);
        let local = AbsoluteInstant::split(timestamp + i64::from(info.utc_offset));

        Self {
            hour: local.hour,
            minute: local.minute,
            second: local.second,
            ..Self::from_epoch_day_in(local.days, info)
        }
    }

    /// Jalali date of a proleptic Gregorian date, at midnight.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` if `is_valid_gregorian`
    /// rejects the input.
    pub fn from_gregorian<Z: ZoneLookup + ?Sized>(
        year: i32,
        month: i32,
        day: i32,
        zone: &'z Z,
    ) -> Result<Self, CalendarError> {
        if !is_valid_gregorian(year, month, day) {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        let day_offset = julian_day_number(year, month, day) - UNIX_EPOCH_JDN;
        Ok(Self::from_epoch_day(day_offset, zone))
    }

    fn from_epoch_day_in(day_offset: i64, info: ZoneInfo<'z>) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let weekday = (day_offset + EPOCH_WEEKDAY).rem_euclid(DAYS_PER_WEEK) as i32;

        let mut year = EPOCH_YEAR;
        let mut remaining = day_offset + i64::from(EPOCH_DAY_OF_YEAR);
        let mut steps = 0_u64;
        loop {
            let forward = remaining >= 0;
            // walking backward consumes the year before the current one
            let length = i64::from(jalali_days_in_year(if forward { year } else { year - 1 }));
            if (0..length).contains(&remaining) {
                break;
            }
            if forward {
                remaining -= length;
                year += 1;
            } else {
                remaining += length;
                year -= 1;
            }
            steps += 1;
        }
        trace!(day_offset, year, steps, "resolved epoch day");

        #[allow(clippy::cast_possible_truncation)]
        let day_of_year = remaining as i32;
        let (month, day) = ordinal::month_day_of(day_of_year);

        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            day_of_year,
            weekday,
            is_dst: info.is_dst,
            utc_offset: info.utc_offset,
            zone: info.name,
        }
    }

    /// Day offset from 1970-01-01, read from `year` and `day_of_year`.
    ///
    /// Inverse of [`CivilDate::from_epoch_day`].
    pub fn epoch_day(&self) -> i64 {
        epoch_day_of(i64::from(self.year), self.day_of_year)
    }

    /// Unix timestamp of this local date and time, using the stored offset.
    pub fn to_timestamp(&self) -> i64 {
        let local = AbsoluteInstant {
            days: self.epoch_day(),
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        };
        local.join() - i64::from(self.utc_offset)
    }

    /// Proleptic Gregorian `(year, month, day)` of this date.
    pub fn to_gregorian(&self) -> (i64, i32, i32) {
        gregorian_from_julian_day_number(self.epoch_day() + UNIX_EPOCH_JDN)
    }

    /// Canonical form of this date, see [`normalize`].
    pub fn normalized<'y, Z: ZoneLookup + ?Sized>(&self, zone: &'y Z) -> CivilDate<'y> {
        normalize(*self, zone)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap(self.year)
    }

    /// Length of the current month, `None` while `month` is out of range.
    pub const fn days_in_month(&self) -> Option<i32> {
        if self.month < 0 || self.month > ESFAND {
            return None;
        }
        Some(jalali_days_in_month(self.year, self.month))
    }

    /// Leap-cycle facts about this date's year.
    pub fn year_info(&self) -> YearCycleInfo {
        YearCycleInfo::for_year(self.year)
    }
}

impl CivilDate<'static> {
    /// Creates a UTC date from a one-based `(year, month, day)`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `is_valid_jalali` rejects the input.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        if !is_valid_jalali(year, month, day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self::from_valid_parts(year, month - 1, day))
    }

    /// `month` is zero-based here and the date must already be valid.
    fn from_valid_parts(year: i32, month: i32, day: i32) -> Self {
        let day_of_year = ordinal::day_of_year_of(month, day);
        Self::from_epoch_day(epoch_day_of(i64::from(year), day_of_year), &Utc)
    }
}

/// Free-function form of [`CivilDate::from_epoch_day`].
pub fn date_from_epoch_day<Z: ZoneLookup + ?Sized>(day_offset: i64, zone: &Z) -> CivilDate<'_> {
    CivilDate::from_epoch_day(day_offset, zone)
}

/// Free-function form of [`CivilDate::epoch_day`].
pub fn epoch_day_from_date(date: &CivilDate<'_>) -> i64 {
    date.epoch_day()
}

impl FromStr for CivilDate<'static> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut pieces = trimmed.split_whitespace();
        let date_part = pieces.next().ok_or(ParseError::EmptyInput)?;
        let time_part = pieces.next();
        if let Some(extra) = pieces.next() {
            return Err(ParseError::InvalidFormat(format!("Unexpected trailing input: {extra}")));
        }

        let (year, month, day) = Self::parse_date_part(date_part)?;
        if !is_valid_jalali(year, month, day) {
            return Err(ParseError::InvalidDate { year, month, day });
        }
        let (hour, minute, second) = time_part.map_or(Ok((0, 0, 0)), Self::parse_time_part)?;

        Ok(Self {
            hour,
            minute,
            second,
            ..Self::from_valid_parts(year, month - 1, day)
        })
    }
}

impl CivilDate<'static> {
    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_date_part(s: &str) -> Result<(i32, i32, i32), ParseError> {
        let separators: Vec<char> = DATE_SEPARATORS.iter().copied().filter(|&c| s.contains(c)).collect();
        let [separator] = separators[..] else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected exactly one of {DATE_SEPARATORS:?} as separator: {s}"
            )));
        };

        let parts: Vec<&str> = s.split(separator).collect();
        match parts[..] {
            [year, month, day] => Ok((
                Self::parse_i32(year)?,
                Self::parse_i32(month)?,
                Self::parse_i32(day)?,
            )),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected year{separator}month{separator}day, found {} parts",
                parts.len()
            ))),
        }
    }

    fn parse_time_part(s: &str) -> Result<(i32, i32, i32), ParseError> {
        let parts: Vec<&str> = s.split(TIME_SEPARATOR).collect();
        let (hour, minute, second) = match parts[..] {
            [hour, minute] => (Self::parse_i32(hour)?, Self::parse_i32(minute)?, 0),
            [hour, minute, second] => (
                Self::parse_i32(hour)?,
                Self::parse_i32(minute)?,
                Self::parse_i32(second)?,
            ),
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS]: {s}"
                )));
            }
        };

        if !(0..HOURS_PER_DAY).contains(&hour)
            || !(0..MINUTES_PER_HOUR).contains(&minute)
            || !(0..SECONDS_PER_MINUTE).contains(&second)
        {
            return Err(ParseError::InvalidTime { hour, minute, second });
        }
        Ok((hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_day_zero_is_11_dey_1348() {
        let date = CivilDate::from_epoch_day(0, &Utc);
        assert_eq!((date.year, date.month, date.day), (1348, 9, 11));
        assert_eq!(date.day_of_year, 286);
        assert_eq!(date.weekday, 5, "1970-01-01 was a Thursday");
        assert_eq!((date.hour, date.minute, date.second), (0, 0, 0));
        assert_eq!(date.zone, Some("UTC"));
        assert_eq!(date.utc_offset, 0);
    }

    #[test]
    fn test_from_epoch_day_cases() {
        struct TestCase {
            day_offset: i64,
            expected: (i32, i32, i32),
            weekday: i32,
            description: &'static str,
        }

        let cases = [
            TestCase {
                day_offset: -1,
                expected: (1348, 9, 10),
                weekday: 4,
                description: "1969-12-31",
            },
            TestCase {
                day_offset: 19_723,
                expected: (1402, 9, 11),
                weekday: 2,
                description: "2024-01-01, a Monday",
            },
            TestCase {
                day_offset: 19_802,
                expected: (1403, 0, 1),
                weekday: 4,
                description: "Nowruz 1403, 2024-03-20",
            },
            TestCase {
                day_offset: 19_801,
                expected: (1402, 11, 29),
                weekday: 3,
                description: "last day of common year 1402",
            },
            TestCase {
                day_offset: 19_802 + 365,
                expected: (1403, 11, 30),
                weekday: 5,
                description: "Esfand 30 of leap year 1403",
            },
            TestCase {
                day_offset: 19_802 + 366,
                expected: (1404, 0, 1),
                weekday: 6,
                description: "Nowruz 1404",
            },
        ];

        for case in &cases {
            let date = CivilDate::from_epoch_day(case.day_offset, &Utc);
            assert_eq!(
                (date.year, date.month, date.day),
                case.expected,
                "{}",
                case.description
            );
            assert_eq!(date.weekday, case.weekday, "{}", case.description);
        }
    }

    #[test]
    fn test_epoch_day_round_trip() {
        for day_offset in (-400_000..400_000).step_by(97) {
            let date = date_from_epoch_day(day_offset, &Utc);
            assert_eq!(epoch_day_from_date(&date), day_offset, "day offset {day_offset}");
        }
        for day_offset in -800..800 {
            let date = date_from_epoch_day(day_offset, &Utc);
            assert_eq!(date.epoch_day(), day_offset, "day offset {day_offset}");
        }
    }

    #[test]
    fn test_consecutive_days_advance_one_field() {
        let mut previous = CivilDate::from_epoch_day(-2_000, &Utc);
        for day_offset in -1_999..2_000 {
            let date = CivilDate::from_epoch_day(day_offset, &Utc);
            assert_eq!(date.weekday, (previous.weekday + 1) % 7);
            if date.day == 1 {
                assert_eq!(previous.day, previous.days_in_month().unwrap());
            } else {
                assert_eq!(date.day, previous.day + 1);
                assert_eq!(date.month, previous.month);
            }
            previous = date;
        }
    }

    #[test]
    fn test_zone_metadata_is_attached() {
        let tehran = FixedZone::new(12_600, "IRST").with_dst(true);
        let date = CivilDate::from_epoch_day(19_723, &tehran);
        assert_eq!(date.utc_offset, 12_600);
        assert!(date.is_dst);
        assert_eq!(date.zone, Some("IRST"));
    }

    #[test]
    fn test_failed_zone_lookup_falls_back_to_utc() {
        struct Broken;
        impl ZoneLookup for Broken {
            fn lookup(&self, _timestamp: i64) -> Option<ZoneInfo<'_>> {
                None
            }
        }

        let date = CivilDate::from_epoch_day(0, &Broken);
        assert_eq!(date.utc_offset, 0);
        assert!(!date.is_dst);
        assert_eq!(date.zone, None);
        assert_eq!((date.year, date.month, date.day), (1348, 9, 11));
    }

    #[test]
    fn test_from_timestamp_applies_offset() {
        let tehran = FixedZone::new(12_600, "IRST");
        // 2024-01-01 00:00:00 UTC is 03:30 in Tehran
        let date = CivilDate::from_timestamp(1_704_067_200, &tehran);
        assert_eq!((date.year, date.month, date.day), (1402, 9, 11));
        assert_eq!((date.hour, date.minute, date.second), (3, 30, 0));
        assert_eq!(date.to_timestamp(), 1_704_067_200);

        // 22:00 UTC on 2023-12-31 is already the next day in Tehran
        let date = CivilDate::from_timestamp(1_704_060_000, &tehran);
        assert_eq!((date.year, date.month, date.day), (1402, 9, 11));
        assert_eq!((date.hour, date.minute), (1, 30));
    }

    #[test]
    fn test_timestamp_round_trip_before_epoch() {
        for timestamp in [-1, -86_400, -86_401, -1_000_000_000, 1_000_000_000] {
            let date = CivilDate::from_timestamp(timestamp, &Utc);
            assert_eq!(date.to_timestamp(), timestamp, "timestamp {timestamp}");
        }
        let date = CivilDate::from_timestamp(-1, &Utc);
        assert_eq!((date.year, date.month, date.day), (1348, 9, 10));
        assert_eq!((date.hour, date.minute, date.second), (23, 59, 59));
    }

    #[test]
    fn test_gregorian_bridge() {
        let date = CivilDate::from_gregorian(2024, 3, 20, &Utc).unwrap();
        assert_eq!((date.year, date.month + 1, date.day), (1403, 1, 1));
        assert_eq!(date.to_gregorian(), (2024, 3, 20));

        let date = CivilDate::from_gregorian(1970, 1, 1, &Utc).unwrap();
        assert_eq!(date.epoch_day(), 0);

        let result = CivilDate::from_gregorian(2023, 2, 29, &Utc);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidGregorianDate {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_new() {
        let date = CivilDate::new(1403, 12, 30).unwrap();
        assert_eq!((date.year, date.month, date.day), (1403, 11, 30));
        assert_eq!(date.day_of_year, 365);
        assert_eq!(date.epoch_day(), 19_802 + 365);
        assert!(date.is_leap_year());
        assert_eq!(date.days_in_month(), Some(30));

        let result = CivilDate::new(1402, 12, 30);
        assert!(matches!(result, Err(CalendarError::InvalidDate { .. })));
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        let date = CivilDate {
            month: 14,
            ..CivilDate::default()
        };
        assert_eq!(date.days_in_month(), None);
    }

    #[test]
    fn test_year_info() {
        let date = CivilDate::new(1403, 1, 1).unwrap();
        assert_eq!(date.year_info(), YearCycleInfo::for_year(1403));
    }

    #[test]
    fn test_display() {
        let date = CivilDate::from_timestamp(1_704_112_496, &Utc);
        assert_eq!(date.to_string(), "1402/10/11 12:34:56");

        let early = CivilDate::new(5, 1, 1).unwrap();
        assert_eq!(early.to_string(), "0005/01/01 00:00:00");
    }

    #[test]
    fn test_parse_date_only() {
        let date = "1402/10/11".parse::<CivilDate>().unwrap();
        assert_eq!(date, CivilDate::from_epoch_day(19_723, &Utc));

        let date = "1402-10-11".parse::<CivilDate>().unwrap();
        assert_eq!(date.epoch_day(), 19_723);
    }

    #[test]
    fn test_parse_with_time() {
        let date = " 1402/10/11 12:34:56 ".parse::<CivilDate>().unwrap();
        assert_eq!(date.to_timestamp(), 1_704_112_496);

        let date = "1402/10/11 12:34".parse::<CivilDate>().unwrap();
        assert_eq!((date.hour, date.minute, date.second), (12, 34, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<CivilDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<CivilDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1402/12/30".parse::<CivilDate>(),
            Err(ParseError::InvalidDate {
                year: 1402,
                month: 12,
                day: 30
            })
        ));
        assert!(matches!(
            "1402/10/11 24:00".parse::<CivilDate>(),
            Err(ParseError::InvalidTime { hour: 24, .. })
        ));
        assert!(matches!(
            "1402/10-11".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/10".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/XX/11".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/10/11 12:00 extra".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/10/11 12".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalendarError::DayOfYearOutOfRange(400).to_string(),
            "Day-of-year 400 is out of range (must be 0-365)"
        );
        assert_eq!(
            CalendarError::MonthOutOfRange(12).to_string(),
            "Month 12 is out of range (must be 0-11)"
        );
        assert_eq!(
            CalendarError::DayOfMonthOutOfRange(0).to_string(),
            "Day of month 0 is out of range (must be 1-31)"
        );
        assert_eq!(
            CalendarError::InvalidDate {
                year: 1402,
                month: 12,
                day: 30
            }
            .to_string(),
            "Invalid Jalali date 1402/12/30"
        );
        assert_eq!(
            ParseError::InvalidTime {
                hour: 24,
                minute: 0,
                second: 0
            }
            .to_string(),
            "Invalid time 24:00:00"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
        assert_impl::<ParseError>();
    }

    #[test]
    fn test_serde() {
        let tehran = FixedZone::new(12_600, "IRST");
        let date = CivilDate::from_timestamp(1_704_067_200, &tehran);
        let json = serde_json::to_string(&date).unwrap();
        assert!(json.contains(r#""zone":"IRST""#));

        let parsed: CivilDate<'_> = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
