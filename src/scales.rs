// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count scale markers.
//!
//! Each zero-sized type names an origin on the **Astronomical Julian Day**
//! line (fractional days since noon UTC, 1 January 4713 BC, proleptic
//! Julian calendar). A value on the scale is that many days after its
//! origin.
//!
//! | Marker | Count | Origin (AJD) |
//! |--------|-------|--------------|
//! | [`JD`] | Astronomical Julian Day | 0.0 |
//! | [`MJD`] | Modified Julian Day | 2 400 000.5 |
//! | [`LD`] | Lilian Day (Gregorian reform, 1582-10-15 is day 1) | 2 299 159.5 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00Z, leap seconds ignored | 2 440 587.5 |

use qtty::Days;

use crate::instant::{Time, TimeScale};

/// Declare a marker whose values are `AJD − origin`.
macro_rules! day_count_scale {
    ($($(#[$meta:meta])* $name:ident, $label:literal, $origin:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
            pub struct $name;

            impl $name {
                /// AJD of day zero on this scale.
                pub const ORIGIN: Days = Days::new($origin);
            }

            impl TimeScale for $name {
                const LABEL: &'static str = $label;

                #[inline(always)]
                fn to_jd(value: Days) -> Days {
                    value + Self::ORIGIN
                }

                #[inline(always)]
                fn from_jd(jd: Days) -> Days {
                    jd - Self::ORIGIN
                }
            }
        )+
    };
}

day_count_scale! {
    /// Astronomical Julian Day, the reference scale.
    JD, "Julian Day:", 0.0;
    /// Modified Julian Day.
    MJD, "MJD", 2_400_000.5;
    /// Lilian Day: the integer Lilian day of a civil date is its
    /// chronological JD minus 2 299 160.
    LD, "LD", 2_299_159.5;
    /// Unix time counted in days.
    UnixTime, "Unix", 2_440_587.5;
}

/// Pairwise `From<Time<A>> for Time<B>`.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, MJD, LD, UnixTime);
