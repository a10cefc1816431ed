// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Jalali date-time with a fixed UTC offset.
//!
//! [`JalaliDateTime`] composes the *local* [`JalaliDate`], a [`TimeOfDay`]
//! and a [`UtcOffset`]. Identity is the absolute instant: two values with
//! different offsets compare equal when they name the same moment.
//!
//! Calendar arithmetic (`add_days`, `add_months`, `add_years`) moves only the
//! embedded date, keeping the clock time and the offset untouched.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use chrono::{DateTime, FixedOffset, Offset, TimeZone};
use qtty::Days;
use tracing::trace;

use crate::calendar::{Jd, Year};
use crate::error::{CalendarError, CalendarResult};
use crate::names::Weekday;
use crate::parse::{self, ParseOptions};
use crate::step::{DayStep, Step};
use crate::time::{TimeOfDay, UtcOffset, NANOS_PER_DAY, NANOS_PER_SECOND};
use crate::{format, JalaliDate, Time, JD, MJD};

/// A Jalali calendar date and wall-clock time at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct JalaliDateTime {
    date: JalaliDate,
    time: TimeOfDay,
    offset: UtcOffset,
}

/// Nanoseconds since the start of chronological JD 0, UTC.
fn midnight_utc(date: &JalaliDate) -> i128 {
    date.jd() as i128 * NANOS_PER_DAY as i128
}

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

impl JalaliDateTime {
    /// Local `date` and `time` at `offset`.
    pub const fn new(date: JalaliDate, time: TimeOfDay, offset: UtcOffset) -> Self {
        Self { date, time, offset }
    }

    /// Civil date and clock time, at UTC.
    pub fn from_civil(
        year: Year,
        month: u8,
        day: u8,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> CalendarResult<Self> {
        Ok(Self::new(
            JalaliDate::from_civil(year, month, day)?,
            TimeOfDay::from_hms(hour, minute, second)?,
            UtcOffset::UTC,
        ))
    }

    /// Ordinal date and clock time, at UTC.
    pub fn from_ordinal(
        year: Year,
        yday: i32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> CalendarResult<Self> {
        Ok(Self::new(
            JalaliDate::from_ordinal(year, yday)?,
            TimeOfDay::from_hms(hour, minute, second)?,
            UtcOffset::UTC,
        ))
    }

    /// Midnight UTC starting the given chronological day.
    pub fn from_jd(jd: Jd) -> Self {
        Self::new(JalaliDate::from_jd(jd), TimeOfDay::MIDNIGHT, UtcOffset::UTC)
    }

    /// The instant `ajd` seen at `offset`, rounded to the microsecond.
    ///
    /// `None` when `ajd` is not finite or out of range.
    pub fn from_ajd(ajd: Time<JD>, offset: UtcOffset) -> Option<Self> {
        let shifted = (ajd + Time::<JD>::HALF_DAY).value();
        if !shifted.is_finite() {
            return None;
        }
        let day = shifted.floor();
        if day < i32::MIN as f64 || day > i32::MAX as f64 {
            return None;
        }
        let micros = ((shifted - day) * 86_400e6).round() as i128;
        let instant = day as i128 * NANOS_PER_DAY as i128 + micros * 1_000;
        Self::from_instant(instant, offset)
    }

    /// Re-derive local fields from an absolute instant.
    fn from_instant(instant: i128, offset: UtcOffset) -> Option<Self> {
        let local = instant + offset.seconds() as i128 * NANOS_PER_SECOND as i128;
        let jd = Jd::try_from(local.div_euclid(NANOS_PER_DAY as i128)).ok()?;
        let nanos = local.rem_euclid(NANOS_PER_DAY as i128) as i64;
        Some(Self::new(
            JalaliDate::from_jd(jd),
            TimeOfDay::from_nanos_of_day(nanos)?,
            offset,
        ))
    }

    /// Current host time, at the host's current UTC offset.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        trace!(gregorian = %now, "reading host clock");
        Self::from_gregorian(&now)
    }

    /// Jalali date-time of a chrono date-time, keeping its offset.
    pub fn from_gregorian<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let offset = UtcOffset::from(datetime.offset().fix());
        let local = datetime.naive_local();
        Self::new(
            JalaliDate::from_gregorian(local.date()),
            TimeOfDay::from(local.time()),
            offset,
        )
    }

    /// The same instant as a chrono date-time at the same offset.
    ///
    /// `None` outside chrono's representable range.
    pub fn to_gregorian(&self) -> Option<DateTime<FixedOffset>> {
        let naive = self.date.to_gregorian()?.and_time(self.time.to_chrono()?);
        self.offset.to_chrono()?.from_local_datetime(&naive).single()
    }

    /// Parse `YYYY-MM-DD[T ]HH:MM[:SS[.fff]][zone]`, or a bare date at
    /// midnight. A missing zone means UTC.
    pub fn parse(s: &str) -> CalendarResult<Self> {
        Self::parse_with(s, ParseOptions::default())
    }

    pub fn parse_with(s: &str, options: ParseOptions) -> CalendarResult<Self> {
        let fields = parse::parse_datetime(s, &options)?;
        Ok(Self::new(
            JalaliDate::from_civil(fields.year, fields.month, fields.day)?,
            TimeOfDay::from_hms_nano(
                fields.hour,
                fields.minute,
                fields.second,
                fields.nanosecond,
            )?,
            fields.offset.unwrap_or(UtcOffset::UTC),
        ))
    }
}

impl From<JalaliDate> for JalaliDateTime {
    /// Midnight UTC.
    fn from(date: JalaliDate) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT, UtcOffset::UTC)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! delegate_to_date {
    ($($(#[$meta:meta])* $name:ident -> $ty:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&self) -> $ty {
                self.date.$name()
            }
        )+
    };
}

impl JalaliDateTime {
    delegate_to_date! {
        year -> Year,
        #[doc(alias = "mon")]
        month -> u8,
        #[doc(alias = "mday")]
        day -> u8,
        yday -> u16,
        /// Chronological day number of the local date.
        jd -> Jd,
        mjd -> i64,
        ld -> i64,
        wday -> u32,
        weekday -> Weekday,
        cwday -> u32,
        cweek -> u32,
        is_leap -> bool,
        days_in_month -> u8,
        days_in_year -> u16,
        is_shanbe -> bool,
        is_yekshanbe -> bool,
        is_doshanbe -> bool,
        is_seshanbe -> bool,
        is_chaharshanbe -> bool,
        is_panjshanbe -> bool,
        is_jomee -> bool,
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    pub fn second_fraction(&self) -> f64 {
        self.time.second_fraction()
    }

    #[inline]
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    #[inline]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// The local calendar date.
    #[inline]
    pub const fn to_date(&self) -> JalaliDate {
        self.date
    }

    /// Elapsed part of the local day.
    pub fn day_fraction(&self) -> Days {
        self.time.day_fraction()
    }

    /// Astronomical Julian Day of this instant.
    pub fn ajd(&self) -> Time<JD> {
        self.date.ajd() + self.time.day_fraction() - self.offset.as_days()
    }

    pub fn amjd(&self) -> Time<MJD> {
        self.ajd().to::<MJD>()
    }

    /// Nanoseconds since the start of chronological JD 0, UTC.
    fn instant(&self) -> i128 {
        midnight_utc(&self.date) + self.time.nanos_of_day() as i128
            - self.offset.seconds() as i128 * NANOS_PER_SECOND as i128
    }

    /// Format with `strftime` tokens; see [`format`](crate::format).
    pub fn strftime(&self, pattern: &str) -> String {
        format::strftime(&self.date, self.time, self.offset, pattern)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl JalaliDateTime {
    fn with_date(&self, date: JalaliDate) -> Self {
        Self::new(date, self.time, self.offset)
    }

    pub fn checked_add_days(&self, days: i32) -> Option<Self> {
        self.date.checked_add_days(days).map(|d| self.with_date(d))
    }

    /// # Panics
    /// When the resulting day number overflows `i32`.
    pub fn add_days(&self, days: i32) -> Self {
        self.with_date(self.date.add_days(days))
    }

    pub fn checked_add_months(&self, months: i32) -> Option<Self> {
        self.date.checked_add_months(months).map(|d| self.with_date(d))
    }

    /// # Panics
    /// When the target date is out of range.
    pub fn add_months(&self, months: i32) -> Self {
        self.with_date(self.date.add_months(months))
    }

    pub fn sub_months(&self, months: i32) -> Self {
        self.with_date(self.date.sub_months(months))
    }

    pub fn checked_add_years(&self, years: i32) -> Option<Self> {
        self.date.checked_add_years(years).map(|d| self.with_date(d))
    }

    /// # Panics
    /// When the target date is out of range.
    pub fn add_years(&self, years: i32) -> Self {
        self.with_date(self.date.add_years(years))
    }

    /// Move by a fractional number of days.
    ///
    /// Fails with [`CalendarError::TypeMismatch`] when `days` is NaN or
    /// infinite, and with [`CalendarError::InvalidDate`] when the result
    /// leaves the day range.
    pub fn checked_add(&self, days: Days) -> CalendarResult<Self> {
        let amount = days.value();
        if !amount.is_finite() {
            return Err(CalendarError::TypeMismatch {
                operation: "JalaliDateTime::checked_add",
                operand: amount.to_string(),
            });
        }
        let out_of_range = || CalendarError::InvalidDate {
            input: format!("{self} + {amount} days"),
            reason: "julian day out of range",
        };
        let delta = amount * NANOS_PER_DAY as f64;
        if delta.abs() > i64::MAX as f64 {
            return Err(out_of_range());
        }
        Self::from_instant(self.instant() + delta.round() as i128, self.offset)
            .ok_or_else(out_of_range)
    }

    /// The same instant at another offset.
    pub fn checked_new_offset(&self, offset: UtcOffset) -> Option<Self> {
        Self::from_instant(self.instant(), offset)
    }

    /// The same instant at another offset, local fields re-derived.
    ///
    /// # Panics
    /// When the local date leaves the day range (only at its extremes).
    pub fn new_offset(&self, offset: UtcOffset) -> Self {
        self.checked_new_offset(offset)
            .expect("`JalaliDateTime::new_offset` overflowed")
    }

    pub fn step(&self, limit: Self, by: i32) -> CalendarResult<Step<Self>> {
        Step::new(*self, limit, by)
    }

    pub fn upto(&self, max: Self) -> Step<Self> {
        Step::forward(*self, max)
    }

    pub fn downto(&self, min: Self) -> Step<Self> {
        Step::backward(*self, min)
    }

    /// Compare this instant against a raw Astronomical Julian Day.
    ///
    /// Fails with [`CalendarError::IncompatibleComparison`] when `ajd` is NaN.
    pub fn try_cmp_ajd(&self, ajd: f64) -> CalendarResult<Ordering> {
        self.ajd()
            .value()
            .partial_cmp(&ajd)
            .ok_or_else(|| CalendarError::IncompatibleComparison {
                lhs: self.to_string(),
                rhs: ajd.to_string(),
            })
    }
}

impl DayStep for JalaliDateTime {
    fn checked_add_days(&self, days: i32) -> Option<Self> {
        JalaliDateTime::checked_add_days(self, days)
    }
}

impl Add<i32> for JalaliDateTime {
    type Output = Self;
    fn add(self, days: i32) -> Self {
        self.add_days(days)
    }
}

impl Sub<i32> for JalaliDateTime {
    type Output = Self;
    fn sub(self, days: i32) -> Self {
        self.with_date(self.date - days)
    }
}

/// Elapsed time between two instants, in days.
impl Sub for JalaliDateTime {
    type Output = Days;
    fn sub(self, rhs: Self) -> Days {
        let nanos = self.instant() - rhs.instant();
        Days::new(nanos as f64 / NANOS_PER_DAY as f64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════════

impl PartialEq for JalaliDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant() == other.instant()
    }
}

impl Eq for JalaliDateTime {}

impl Hash for JalaliDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

impl Ord for JalaliDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl PartialOrd for JalaliDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The date stands for midnight UTC.
impl PartialEq<JalaliDate> for JalaliDateTime {
    fn eq(&self, other: &JalaliDate) -> bool {
        self.instant() == midnight_utc(other)
    }
}

impl PartialOrd<JalaliDate> for JalaliDateTime {
    fn partial_cmp(&self, other: &JalaliDate) -> Option<Ordering> {
        Some(self.instant().cmp(&midnight_utc(other)))
    }
}

/// Equality against a raw Astronomical Julian Day.
impl PartialEq<f64> for JalaliDateTime {
    fn eq(&self, ajd: &f64) -> bool {
        self.ajd().value() == *ajd
    }
}

impl PartialOrd<f64> for JalaliDateTime {
    fn partial_cmp(&self, ajd: &f64) -> Option<Ordering> {
        self.ajd().value().partial_cmp(ajd)
    }
}

impl PartialEq<JalaliDateTime> for JalaliDate {
    fn eq(&self, other: &JalaliDateTime) -> bool {
        other == self
    }
}

impl PartialOrd<JalaliDateTime> for JalaliDate {
    fn partial_cmp(&self, other: &JalaliDateTime) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Text
// ═══════════════════════════════════════════════════════════════════════════

impl std::fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{}{}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time,
            self.offset
        )
    }
}

impl std::str::FromStr for JalaliDateTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for JalaliDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for JalaliDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_with(&s, ParseOptions::exact()).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
