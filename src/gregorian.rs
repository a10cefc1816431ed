// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bridge to the proleptic Gregorian calendar, as implemented by `chrono`.
//!
//! Both directions go through the chronological Julian Day Number, never
//! through field-by-field tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::calendar::Jd;
use crate::{JalaliDate, JalaliDateTime};

/// Chronological JD of 0000-12-31, the day before chrono's CE day 1.
const CE_OFFSET: i32 = 1_721_425;

/// Chronological Julian Day Number of a Gregorian date.
pub fn gregorian_to_jd(date: NaiveDate) -> Jd {
    chrono::Datelike::num_days_from_ce(&date) + CE_OFFSET
}

/// Gregorian date of a chronological Julian Day Number.
///
/// `None` outside chrono's range (roughly ±262 000 years).
pub fn jd_to_gregorian(jd: Jd) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(jd.checked_sub(CE_OFFSET)?)
}

/// Conversion of chrono values into the Jalali calendar.
pub trait ToJalali {
    type Output;

    fn to_jalali(&self) -> Self::Output;
}

impl ToJalali for NaiveDate {
    type Output = JalaliDate;

    fn to_jalali(&self) -> JalaliDate {
        JalaliDate::from_gregorian(*self)
    }
}

/// Naive date-times are taken as UTC.
impl ToJalali for NaiveDateTime {
    type Output = JalaliDateTime;

    fn to_jalali(&self) -> JalaliDateTime {
        JalaliDateTime::from_gregorian(&self.and_utc())
    }
}

/// The offset of the value is kept.
impl<Tz: TimeZone> ToJalali for DateTime<Tz> {
    type Output = JalaliDateTime;

    fn to_jalali(&self) -> JalaliDateTime {
        JalaliDateTime::from_gregorian(self)
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        JalaliDate::from_gregorian(date)
    }
}
