/// Maximum Jalali year accepted by [`crate::is_valid_jalali`] (inclusive)
pub const MAX_JALALI_YEAR: i32 = 9378;

/// Maximum Gregorian year accepted by [`crate::is_valid_gregorian`] (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Earliest year [`crate::normalize`] produces; earlier results saturate here
pub const MIN_NORMALIZED_YEAR: i32 = -1_000_000;

/// Latest year [`crate::normalize`] produces; later results saturate here
pub const MAX_NORMALIZED_YEAR: i32 = 1_000_000;

/// Months in a year, in both calendars
pub const MONTHS_IN_YEAR: i32 = 12;

/// Zero-based index of Esfand, the month that grows in a Jalali leap year
pub const ESFAND: i32 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Longest possible month in either calendar
pub const MAX_DAY: i32 = 31;

/// Last valid zero-based day-of-year (the 366th day of a leap year)
pub const MAX_DAY_OF_YEAR: i32 = 365;

/// Jalali month lengths, zero-indexed. Esfand shows 29 days (non-leap default)
pub const JALALI_MONTH_DAYS: [i32; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_jalali_leap check)
];

/// Days elapsed before the first day of each Jalali month
pub const JALALI_DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Gregorian month lengths (index 0 is unused, months are 1-indexed)
pub const GREGORIAN_MONTH_DAYS: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month number for February
pub const FEBRUARY: i32 = 2;

pub const NORMAL_YEAR_DAYS: i32 = 365;
pub const LEAP_YEAR_DAYS: i32 = 366;

pub const SECONDS_PER_MINUTE: i32 = 60;
pub const MINUTES_PER_HOUR: i32 = 60;
pub const HOURS_PER_DAY: i32 = 24;
pub const SECONDS_PER_HOUR: i32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub const SECONDS_PER_DAY: i64 = (SECONDS_PER_HOUR * HOURS_PER_DAY) as i64;
pub const DAYS_PER_WEEK: i64 = 7;

/// Jalali year containing the Unix epoch (1970-01-01 is 11 Dey 1348)
pub const EPOCH_YEAR: i32 = 1348;
/// Zero-based day-of-year of 11 Dey
pub const EPOCH_DAY_OF_YEAR: i32 = 286;
/// Weekday of the Unix epoch, counting Saturday as 0 (Thursday)
pub const EPOCH_WEEKDAY: i64 = 5;

/// Julian Day Number of 1970-01-01
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// First year of the current 2820-year grand cycle (AP 475, AD 1096)
pub const GRAND_CYCLE_BASE: i32 = 475;
/// Length of the grand leap cycle in years
pub const GRAND_CYCLE_YEARS: i32 = 2820;
/// Leap years in one grand cycle
pub const GRAND_CYCLE_LEAPS: i32 = 683;

/// Residues of `year mod 33` that are leap years
pub(crate) const LEAP_RESIDUES: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];
/// Length of the sub-cycle the residue set is expressed against
pub(crate) const SUBCYCLE_YEARS: i32 = 33;
/// Years at or below this are resolved by the plain four-year rule
pub(crate) const EARLY_YEARS_LIMIT: i32 = 5;

/// Leap years in every 33-year sub-cycle
pub(crate) const SUBCYCLE_LEAPS: i32 = 8;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separators accepted when parsing
pub const DATE_SEPARATORS: [char; 2] = ['/', '-'];
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
