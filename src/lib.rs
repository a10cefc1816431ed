// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Jalali (Solar Hijri) calendar
//!
//! This crate provides dates and date-times in the Persian calendar, with
//! exact conversion to and from Julian Day Numbers and the Gregorian
//! calendar of [`chrono`].
//!
//! # Core types
//!
//! - [`JalaliDate`]: a calendar day, anchored to its chronological Julian Day Number.
//! - [`JalaliDateTime`]: a date with a wall-clock time and a fixed UTC offset.
//! - [`TimeOfDay`] / [`UtcOffset`]: validated clock time and offset.
//! - [`Weekday`]: Sunday-first weekday with Persian and Latin names.
//! - [`Step`]: inclusive day-by-day iteration between two dates.
//! - [`Time<S>`]: continuous instant parameterised by a [`TimeScale`] marker.
//!
//! # Day counts
//!
//! | Marker / accessor | Count |
//! |-------------------|-------|
//! | [`JalaliDate::jd`] | Chronological Julian Day Number (day starting at local midnight) |
//! | [`JD`] | Astronomical Julian Date (day starting at noon UTC) |
//! | [`MJD`] | Modified Julian Date, `JD − 2 400 000.5` |
//! | [`LD`] | Lilian Date, days since 1582-10-15 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00:00Z |
//!
//! # Calendar rule
//!
//! Leap years follow the 33-year arithmetic cycle corrected by a table of
//! years where the astronomical calendar departs from it (see
//! [`calendar`]). Years are astronomical: the year before 1 is 0.
//!
//! # Text
//!
//! Dates parse from `1391/8/6`, `1391-8-6`, `1391 8 6` or `13910806`, with
//! Persian or Arabic-Indic digits accepted. Formatting uses `strftime`
//! patterns documented in [`format`].
//!
//! ```
//! use taqvim::JalaliDate;
//!
//! let date = JalaliDate::parse("1403/12/30").unwrap();
//! assert!(date.is_leap());
//! assert_eq!((date + 1).to_string(), "1404/01/01");
//! assert_eq!(date.strftime("%A %-d %B %Y"), "پنج\u{200c}شنبه 30 اسفند 1403");
//! ```

pub mod calendar;
mod date;
mod datetime;
mod error;
pub mod format;
mod gregorian;
pub(crate) mod instant;
mod julian_date_ext;
pub mod names;
mod parse;
pub(crate) mod scales;
mod step;
mod time;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::JalaliDate;
pub use datetime::JalaliDateTime;
pub use error::{CalendarError, CalendarResult};
pub use gregorian::{gregorian_to_jd, jd_to_gregorian, ToJalali};
pub use instant::{Time, TimeScale};
pub use names::{
    Weekday, ABBR_DAY_NAMES, ABBR_EN_DAY_NAMES, ABBR_MONTH_NAMES, DAY_NAMES, EN_DAY_NAMES,
    EN_MONTH_NAMES, MONTH_NAMES,
};
pub use parse::ParseOptions;
pub use scales::{UnixTime, JD, LD, MJD};
pub use step::{DayStep, Step, StepIter};
pub use time::{TimeOfDay, UtcOffset};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Astronomical Julian Date.
///
/// This is a type alias for [`Time<JD>`]; [`JalaliDate::ajd`] returns it.
pub type JulianDate = Time<JD>;

/// Modified Julian Date: `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;

/// Lilian Date: days since the start of 1582-10-15.
pub type LilianDate = Time<LD>;
