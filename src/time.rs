// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock time and fixed UTC offsets.

use crate::error::{CalendarError, CalendarResult};
use qtty::{Day, Days, Second, Seconds};

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;

// ═══════════════════════════════════════════════════════════════════════════
// TimeOfDay
// ═══════════════════════════════════════════════════════════════════════════

/// Validated wall-clock time, stored as nanoseconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TimeOfDay {
    nanos: i64,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { nanos: 0 };

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> CalendarResult<Self> {
        Self::from_hms_nano(hour, minute, second, 0)
    }

    /// Fails with [`CalendarError::InvalidTime`] outside 0..=23, 0..=59,
    /// 0..=59 and below 10⁹ ns.
    pub fn from_hms_nano(
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> CalendarResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond as i64 >= NANOS_PER_SECOND {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
                nanosecond,
            });
        }
        let secs = hour as i64 * 3_600 + minute as i64 * 60 + second as i64;
        Ok(Self {
            nanos: secs * NANOS_PER_SECOND + nanosecond as i64,
        })
    }

    /// `None` unless `0 <= nanos < 86 400 · 10⁹`.
    pub(crate) fn from_nanos_of_day(nanos: i64) -> Option<Self> {
        (0..NANOS_PER_DAY).contains(&nanos).then_some(Self { nanos })
    }

    #[inline]
    pub const fn nanos_of_day(&self) -> i64 {
        self.nanos
    }

    pub const fn hour(&self) -> u32 {
        (self.nanos / (3_600 * NANOS_PER_SECOND)) as u32
    }

    pub const fn minute(&self) -> u32 {
        (self.nanos / (60 * NANOS_PER_SECOND) % 60) as u32
    }

    pub const fn second(&self) -> u32 {
        (self.nanos / NANOS_PER_SECOND % 60) as u32
    }

    pub const fn nanosecond(&self) -> u32 {
        (self.nanos % NANOS_PER_SECOND) as u32
    }

    /// Sub-second part as a fraction of a second.
    pub fn second_fraction(&self) -> f64 {
        self.nanosecond() as f64 / NANOS_PER_SECOND as f64
    }

    /// Elapsed part of the day, in `[0, 1)`.
    pub fn day_fraction(&self) -> Days {
        Seconds::new(self.nanos as f64 / NANOS_PER_SECOND as f64).to::<Day>()
    }

    pub fn to_chrono(&self) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            (self.nanos / NANOS_PER_SECOND) as u32,
            self.nanosecond(),
        )
    }
}

/// A leap second (nanoseconds ≥ 10⁹ in chrono) is folded into the last
/// nanosecond of its second.
impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        let secs = time.num_seconds_from_midnight() as i64;
        let nanos = (time.nanosecond() as i64).min(NANOS_PER_SECOND - 1);
        Self {
            nanos: secs * NANOS_PER_SECOND + nanos,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.nanosecond() != 0 {
            write!(f, ".{:09}", self.nanosecond())?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UtcOffset
// ═══════════════════════════════════════════════════════════════════════════

/// Fixed offset east of UTC, strictly less than a day in magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { seconds: 0 };

    /// Iran Standard Time, +03:30.
    pub const IRST: Self = Self { seconds: 12_600 };

    /// Fails with [`CalendarError::InvalidOffset`] when `|seconds| >= 86 400`.
    pub fn from_seconds(seconds: i32) -> CalendarResult<Self> {
        if (seconds as i64).abs() >= SECONDS_PER_DAY {
            return Err(CalendarError::InvalidOffset(format!("{seconds}s")));
        }
        Ok(Self { seconds })
    }

    /// Offset of `hours` and `minutes`; the sign of `hours` applies to both.
    pub fn from_hm(hours: i32, minutes: u32) -> CalendarResult<Self> {
        if minutes > 59 {
            return Err(CalendarError::InvalidOffset(format!("{hours}h{minutes}m")));
        }
        let magnitude = hours.unsigned_abs() as i64 * 3_600 + minutes as i64 * 60;
        let seconds = if hours < 0 { -magnitude } else { magnitude };
        let seconds = i32::try_from(seconds)
            .map_err(|_| CalendarError::InvalidOffset(format!("{hours}h{minutes}m")))?;
        Self::from_seconds(seconds)
    }

    /// Parse `Z`, `UTC`, `+03:30`, `-0430`, `+3` or `+330`.
    pub fn parse(s: &str) -> CalendarResult<Self> {
        crate::parse::parse_offset(s)
    }

    #[inline]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Offset as a fraction of a day.
    pub fn as_days(&self) -> Days {
        Seconds::new(self.seconds as f64).to::<Day>()
    }

    pub fn to_chrono(&self) -> Option<chrono::FixedOffset> {
        chrono::FixedOffset::east_opt(self.seconds)
    }

    /// `+HHMM`, or `+HH:MM` when `colon` is set.
    pub(crate) fn write_hm(&self, out: &mut String, colon: bool) {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let minutes = self.seconds.unsigned_abs() / 60;
        let sep = if colon { ":" } else { "" };
        out.push_str(&format!("{sign}{:02}{sep}{:02}", minutes / 60, minutes % 60));
    }
}

impl From<chrono::FixedOffset> for UtcOffset {
    fn from(offset: chrono::FixedOffset) -> Self {
        Self {
            seconds: offset.local_minus_utc(),
        }
    }
}

impl std::str::FromStr for UtcOffset {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(6);
        self.write_hm(&mut out, true);
        f.write_str(&out)
    }
}
