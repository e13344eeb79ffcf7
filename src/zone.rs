//! Timezone metadata attached to civil dates.
//!
//! The calendar core never reads process state itself; it asks a
//! [`ZoneLookup`] for the offset in effect at a timestamp.

use jiff::Timestamp;
use jiff::tz::{Dst, TimeZone};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

/// Offset, DST flag and abbreviation in effect at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ZoneInfo<'z> {
    /// Seconds east of UTC
    pub utc_offset: i32,
    pub is_dst: bool,
    #[serde(borrow)]
    pub name: Option<&'z str>,
}

/// Source of timezone metadata for a Unix timestamp.
///
/// `None` means the lookup failed; callers then record UTC with no zone name.
pub trait ZoneLookup {
    fn lookup(&self, timestamp: i64) -> Option<ZoneInfo<'_>>;
}

impl<T: ZoneLookup + ?Sized> ZoneLookup for &T {
    fn lookup(&self, timestamp: i64) -> Option<ZoneInfo<'_>> {
        (**self).lookup(timestamp)
    }
}

/// Coordinated Universal Time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utc;

impl ZoneLookup for Utc {
    fn lookup(&self, _timestamp: i64) -> Option<ZoneInfo<'_>> {
        Some(ZoneInfo {
            utc_offset: 0,
            is_dst: false,
            name: Some("UTC"),
        })
    }
}

/// A zone with a constant offset, e.g. `IRST` at +03:30.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedZone {
    utc_offset: i32,
    is_dst: bool,
    name: String,
}

impl FixedZone {
    pub fn new(utc_offset: i32, name: impl Into<String>) -> Self {
        Self {
            utc_offset,
            is_dst: false,
            name: name.into(),
        }
    }

    /// Marks every instant in this zone as daylight saving time.
    #[must_use]
    pub fn with_dst(mut self, is_dst: bool) -> Self {
        self.is_dst = is_dst;
        self
    }

    pub const fn utc_offset(&self) -> i32 {
        self.utc_offset
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ZoneLookup for FixedZone {
    fn lookup(&self, _timestamp: i64) -> Option<ZoneInfo<'_>> {
        Some(ZoneInfo {
            utc_offset: self.utc_offset,
            is_dst: self.is_dst,
            name: Some(&self.name),
        })
    }
}

/// Abbreviations handed out by [`LocalZone`], one allocation per distinct name.
static ABBREVIATIONS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

fn intern(abbreviation: &str) -> &'static str {
    let mut names = ABBREVIATIONS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(&name) = names.iter().find(|&&name| name == abbreviation) {
        return name;
    }
    let name: &'static str = Box::leak(Box::<str>::from(abbreviation));
    names.push(name);
    name
}

/// A tz database or POSIX zone, read through `jiff`.
///
/// [`LocalZone::new`] uses the host's configured zone (`TZ`, then
/// `/etc/localtime`). Offset, DST status and abbreviation all come from the
/// transition in effect at the looked-up timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalZone {
    time_zone: TimeZone,
}

impl LocalZone {
    pub fn new() -> Self {
        Self::from_time_zone(TimeZone::system())
    }

    pub const fn from_time_zone(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    pub const fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Default for LocalZone {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneLookup for LocalZone {
    fn lookup(&self, timestamp: i64) -> Option<ZoneInfo<'_>> {
        // None outside jiff's supported range
        let instant = Timestamp::from_second(timestamp).ok()?;
        let info = self.time_zone.to_offset_info(instant);
        Some(ZoneInfo {
            utc_offset: info.offset().seconds(),
            is_dst: info.dst() == Dst::Yes,
            name: Some(intern(info.abbreviation())),
        })
    }
}
