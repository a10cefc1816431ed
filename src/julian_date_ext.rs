// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical Julian Day (`Time<JD>`) specific extensions.

use qtty::Days;

use super::calendar::EPOCH_JD;
use super::instant::Time;
use super::scales::{UnixTime, JD, LD, MJD};

impl Time<JD> {
    /// Midnight starting 1 Farvardin of year 1.
    pub const JALALI_EPOCH: Self = Self::new(EPOCH_JD as f64 - 0.5);

    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::from_days(UnixTime::ORIGIN);

    /// Half a day: the shift between the AJD and the chronological day count.
    pub const HALF_DAY: Days = Days::new(0.5);

    /// Chronological Julian Day Number containing this instant (UTC).
    ///
    /// `None` when the value is not finite or overflows `i32`.
    #[inline]
    pub fn chronological_day(&self) -> Option<i32> {
        let day = (self.quantity() + Self::HALF_DAY).value().floor();
        (day.is_finite() && day >= i32::MIN as f64 && day <= i32::MAX as f64)
            .then_some(day as i32)
    }

    /// Convenience wrapper for `self.to::<MJD>()`.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }

    /// Convenience wrapper for `self.to::<LD>()`.
    #[inline]
    pub fn to_ld(&self) -> Time<LD> {
        self.to::<LD>()
    }
}
