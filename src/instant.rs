// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fractional day counts tagged with their scale.
//!
//! [`Time<S>`] wraps a [`Days`] quantity whose origin is fixed at compile
//! time by `S: TimeScale`. The calendar types hand out their Astronomical
//! Julian Day as [`Time<JD>`](crate::JD) and the Modified and Lilian variants
//! as [`Time<MJD>`](crate::MJD) and [`Time<LD>`](crate::LD). The integer day
//! number of a [`JalaliDate`] stays authoritative; a `Time` is derived from
//! it, or read back into it with [`Time::to_jalali`].

use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{DateTime, Utc};
use qtty::{Day, Days, Seconds};

use crate::scales::UnixTime;
use crate::time::{NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::{JalaliDate, JalaliDateTime, UtcOffset, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// A day count with a fixed origin on the Julian Day line.
///
/// Every scale here is a constant shift of the Astronomical Julian Day, so
/// conversions between any two of them are exact up to `f64` rounding.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used by `Display`.
    const LABEL: &'static str;

    /// Value on this scale → AJD.
    fn to_jd(value: Days) -> Days;

    /// AJD → value on this scale.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A position on the day-count scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The same position as an Astronomical Julian Day.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Re-express on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(self.julian_day())
    }

    // ── chrono ────────────────────────────────────────────────────────

    /// The UTC instant, rounded to the microsecond.
    ///
    /// `None` when the value is not finite or chrono cannot represent it.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let unix = self.to::<UnixTime>().value();
        if !unix.is_finite() {
            return None;
        }
        let day = unix.floor();
        if day.abs() > i32::MAX as f64 {
            return None;
        }
        let micros = ((unix - day) * (SECONDS_PER_DAY as f64 * 1e6)).round() as i64;
        let secs = day as i64 * SECONDS_PER_DAY + micros.div_euclid(1_000_000);
        let nanos = micros.rem_euclid(1_000_000) as u32 * 1_000;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Position of a UTC instant on this scale. UTC is taken as uniform:
    /// leap seconds are not counted.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64)
            + Seconds::new(datetime.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND as f64);
        Time::<UnixTime>::from_days(seconds.to::<Day>()).to::<S>()
    }

    // ── Jalali calendar ───────────────────────────────────────────────

    /// Jalali day containing this position, at UTC.
    ///
    /// `None` when the value is not finite or the day number leaves `i32`.
    pub fn to_jalali(&self) -> Option<JalaliDate> {
        JalaliDate::from_ajd(self.to::<JD>())
    }

    /// Jalali date-time of this position seen at `offset`.
    pub fn to_jalali_datetime(&self, offset: UtcOffset) -> Option<JalaliDateTime> {
        JalaliDateTime::from_ajd(self.to::<JD>(), offset)
    }
}

/// Start of the day, UTC midnight.
impl<S: TimeScale> From<JalaliDate> for Time<S> {
    fn from(date: JalaliDate) -> Self {
        date.ajd().to::<S>()
    }
}

impl<S: TimeScale> From<JalaliDateTime> for Time<S> {
    fn from(datetime: JalaliDateTime) -> Self {
        datetime.ajd().to::<S>()
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde: a bare, finite number of days ──────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom(format!(
                "{} must be finite, got {value}",
                S::LABEL
            )));
        }
        Ok(Self::new(value))
    }
}

// ── Arithmetic with Days ──────────────────────────────────────────────────

macro_rules! impl_day_shift {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)+) => {
        $(
            impl<S: TimeScale> $op<Days> for Time<S> {
                type Output = Self;
                #[inline]
                fn $method(self, days: Days) -> Self {
                    Self::from_days(self.quantity $sym days)
                }
            }

            impl<S: TimeScale> $assign<Days> for Time<S> {
                #[inline]
                fn $assign_method(&mut self, days: Days) {
                    *self = *self $sym days;
                }
            }
        )+
    };
}

impl_day_shift! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
}

/// Signed distance between two positions on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, earlier: Self) -> Days {
        self.quantity - earlier.quantity
    }
}

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}
