use serde::{Deserialize, Serialize};

use crate::consts::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::prelude::*;

/// A timestamp broken into whole days since the Unix epoch and a time of day.
///
/// `days` is negative before 1970-01-01; the time-of-day fields are always
/// measured forward from the start of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{days}d {hour:02}:{minute:02}:{second:02}")]
pub struct AbsoluteInstant {
    pub days: i64,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl AbsoluteInstant {
    /// Splits a Unix timestamp (seconds) into days and time of day.
    ///
    /// Uses floor division, so `-1` is the last second of day `-1` rather
    /// than a negative second of day `0`.
    pub const fn split(timestamp: i64) -> Self {
        let days = timestamp.div_euclid(SECONDS_PER_DAY);
        #[allow(clippy::cast_possible_truncation)]
        let rem = timestamp.rem_euclid(SECONDS_PER_DAY) as i32;

        Self {
            days,
            hour: rem / SECONDS_PER_HOUR,
            minute: (rem % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            second: rem % SECONDS_PER_MINUTE,
        }
    }

    /// Reassembles the Unix timestamp.
    pub const fn join(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR as i64
            + self.minute as i64 * SECONDS_PER_MINUTE as i64
            + self.second as i64
    }
}

impl From<i64> for AbsoluteInstant {
    fn from(timestamp: i64) -> Self {
        Self::split(timestamp)
    }
}

impl From<AbsoluteInstant> for i64 {
    fn from(instant: AbsoluteInstant) -> Self {
        instant.join()
    }
}
