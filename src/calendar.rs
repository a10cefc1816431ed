// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed-form Jalali ⇄ Julian Day conversions.
//!
//! This module is stateless: every function maps plain integers to plain
//! integers. [`JalaliDate`](crate::JalaliDate) and
//! [`JalaliDateTime`](crate::JalaliDateTime) call into it from both their
//! constructors and their accessors.
//!
//! # Leap rule
//!
//! A year is leap (Esfand has 30 days) by the arithmetic 33-year rule
//! `(25·y + 11) mod 33 < 8`, except for the years listed in
//! [`NON_LEAP_CORRECTION`], where the astronomical calendar drops the leap
//! day by one year.
//!
//! # Day numbers
//!
//! Julian Day Numbers here are *chronological*: day `n` starts at civil
//! midnight. Years use astronomical numbering (year 0 exists).
//!
//! | Jalali | Gregorian | JD |
//! |--------|-----------|----|
//! | 1348/10/11 | 1970-01-01 | 2 440 588 |
//! | 1391/08/07 | 2012-10-28 | 2 456 229 |
//! | 1403/12/30 | 2025-03-20 | 2 460 755 |

/// Calendar year (astronomical numbering).
pub type Year = i32;

/// Chronological Julian Day Number.
pub type Jd = i32;

/// JD of 1 Farvardin of year 1 under the arithmetic rule.
pub const EPOCH_JD: i64 = 1_948_320;

/// Length of the regular months, Farvardin through Esfand (non-leap).
pub const DAYS_IN_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days elapsed in the year before the first of each month.
pub const DAYS_TO_FIRST_OF_MONTH: [u16; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Last day of year of the sixth month; the first half has only 31-day months.
pub const FIRST_HALF_DAYS: i64 = 186;

/// Years that are not leap while the 33-year rule marks them as leap.
///
/// The year following each of them is leap instead. Matches the modified
/// astronomical algorithm on the 52.5°E meridian from 1178 AP to 3000 AP.
/// Taken from
/// <https://github.com/unicode-org/icu4x/blob/3e3da0a0a34bfe3056d0f89183270ea683f4a23c/utils/calendrical_calculations/src/persian.rs#L23>
pub const NON_LEAP_CORRECTION: [Year; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

#[inline]
fn is_correction(year: i64) -> bool {
    year >= NON_LEAP_CORRECTION[0] as i64
        && Year::try_from(year).is_ok_and(|y| NON_LEAP_CORRECTION.binary_search(&y).is_ok())
}

/// Is `year` a leap year (366 days, Esfand 30 exists).
pub fn is_leap(year: Year) -> bool {
    let year = year as i64;
    if is_correction(year) {
        return false;
    }
    if is_correction(year - 1) {
        return true;
    }
    (25 * year + 11).rem_euclid(33) < 8
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: Year) -> u16 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` of `year`, `None` when `month` is not 1..=12.
pub fn days_in_month(year: Year, month: u8) -> Option<u8> {
    match month {
        12 if is_leap(year) => Some(30),
        1..=12 => Some(DAYS_IN_MONTH[month as usize - 1]),
        _ => None,
    }
}

/// JD of 1 Farvardin of `year`.
pub fn first_day_of_year(year: Year) -> i64 {
    let y = year as i64;
    let mut jd = EPOCH_JD + 365 * (y - 1) + (8 * y + 21).div_euclid(33);
    if is_correction(y - 1) {
        jd -= 1;
    }
    jd
}

/// JD of the last day of `year` (Esfand 29 or 30).
pub fn last_day_of_year(year: Year) -> i64 {
    first_day_of_year(year) + days_in_year(year) as i64 - 1
}

/// JD of a civil date, without validation.
///
/// `month` must be in 1..=12; `day` is added as an offset so out-of-range
/// days spill into the neighbouring months.
pub fn civil_to_jd(year: Year, month: u8, day: u8) -> i64 {
    first_day_of_year(year) + DAYS_TO_FIRST_OF_MONTH[month as usize - 1] as i64 + day as i64 - 1
}

/// Validate a civil date, returning its JD when it names a day.
pub fn valid_civil(year: Year, month: u8, day: u8) -> Option<i64> {
    let last = days_in_month(year, month)?;
    (1..=last)
        .contains(&day)
        .then(|| civil_to_jd(year, month, day))
}

/// Civil date `(year, month, day)` of a JD. Exact inverse of [`civil_to_jd`].
pub fn jd_to_civil(jd: i64) -> (Year, u8, u8) {
    let (year, yday) = jd_to_ordinal(jd);
    let yday = yday as i64;
    let month = if yday <= FIRST_HALF_DAYS {
        (yday + 30) / 31
    } else {
        (yday - 6 + 29) / 30
    } as u8;
    let day = jd - civil_to_jd(year, month, 1) + 1;
    (year, month, day as u8)
}

/// JD of an ordinal date, without validation.
pub fn ordinal_to_jd(year: Year, yday: u16) -> i64 {
    first_day_of_year(year) + yday as i64 - 1
}

/// Validate an ordinal date, returning its JD.
///
/// Negative `yday` counts back from the last day of the year (`-1` is the
/// last day); zero is never valid.
pub fn valid_ordinal(year: Year, yday: i32) -> Option<i64> {
    let length = days_in_year(year) as i32;
    let yday = if yday < 0 { length + yday + 1 } else { yday };
    (1..=length)
        .contains(&yday)
        .then(|| ordinal_to_jd(year, yday as u16))
}

/// Ordinal date `(year, day_of_year)` of a JD.
pub fn jd_to_ordinal(jd: i64) -> (Year, u16) {
    let days = jd - EPOCH_JD + 1;
    let mut year = 1 + (33 * days + 3).div_euclid(12_053);
    // The estimate is off by at most one year around Nowruz.
    if jd < first_day_of_year(year as Year) {
        year -= 1;
    } else if jd >= first_day_of_year(year as Year + 1) {
        year += 1;
    }
    let year = year as Year;
    (year, (jd - first_day_of_year(year) + 1) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_match_the_calendar() {
        for year in [1387, 1391, 1395, 1399, 1403, 1408] {
            assert!(is_leap(year), "{year} should be leap");
        }
        for year in [1390, 1392, 1400, 1402, 1404] {
            assert!(!is_leap(year), "{year} should not be leap");
        }
    }

    #[test]
    fn leap_aligns_with_wikipedia_list_of_33() {
        const LIST: [Year; 71] = [
            1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263,
            1267, 1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321,
            1325, 1329, 1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379,
            1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436,
            1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494,
            1498,
        ];
        for year in 1210..=1500 {
            assert_eq!(
                is_leap(year),
                LIST.binary_search(&year).is_ok(),
                "year {year} is miscalculated"
            );
        }
    }

    #[test]
    fn correction_years_move_the_leap_day() {
        assert!(!is_leap(1502));
        assert!(is_leap(1503));
        assert!(!is_leap(2987));
        assert!(is_leap(2988));
    }

    #[test]
    fn leap_iff_esfand_30_is_valid() {
        for year in -3000..3500 {
            assert_eq!(is_leap(year), valid_civil(year, 12, 30).is_some(), "{year}");
        }
    }

    #[test]
    fn year_length_matches_consecutive_new_years() {
        for year in -5000..5000 {
            assert_eq!(
                first_day_of_year(year + 1) - first_day_of_year(year),
                days_in_year(year) as i64,
                "{year}"
            );
        }
    }

    #[test]
    fn known_julian_days() {
        assert_eq!(civil_to_jd(1391, 8, 7), 2_456_229);
        assert_eq!(civil_to_jd(1391, 8, 6), 2_456_228);
        assert_eq!(civil_to_jd(1348, 10, 11), 2_440_588);
        assert_eq!(civil_to_jd(1403, 12, 30), 2_460_755);
        assert_eq!(civil_to_jd(1404, 1, 1), 2_460_756);
        assert_eq!(civil_to_jd(1, 1, 1), EPOCH_JD);
    }

    #[test]
    fn jd_to_civil_inverts_known_days() {
        assert_eq!(jd_to_civil(2_456_229), (1391, 8, 7));
        assert_eq!(jd_to_civil(2_440_588), (1348, 10, 11));
        assert_eq!(jd_to_civil(2_460_755), (1403, 12, 30));
        assert_eq!(jd_to_civil(2_460_756), (1404, 1, 1));
    }

    #[test]
    fn civil_roundtrip_every_day_of_selected_years() {
        for year in (-60..60).chain(1370..1420).chain(2980..3000) {
            for month in 1..=12u8 {
                let last = days_in_month(year, month).unwrap();
                for day in 1..=last {
                    let jd = valid_civil(year, month, day).unwrap();
                    assert_eq!(jd_to_civil(jd), (year, month, day));
                }
            }
        }
    }

    #[test]
    fn jd_roundtrip_over_a_wide_range() {
        for jd in (-3_000_000i64..6_000_000).step_by(97) {
            let (y, m, d) = jd_to_civil(jd);
            assert!(valid_civil(y, m, d).is_some(), "jd {jd} -> {y}/{m}/{d}");
            assert_eq!(civil_to_jd(y, m, d), jd);
        }
    }

    #[test]
    fn validation_rejects_out_of_range_fields() {
        assert!(valid_civil(1391, 0, 1).is_none());
        assert!(valid_civil(1391, 13, 1).is_none());
        assert!(valid_civil(1391, 1, 0).is_none());
        assert!(valid_civil(1391, 1, 32).is_none());
        assert!(valid_civil(1391, 8, 31).is_none());
        assert!(valid_civil(1390, 12, 30).is_none());
        assert!(valid_civil(1391, 12, 30).is_some());
    }

    #[test]
    fn ordinal_roundtrip_and_negative_days() {
        assert_eq!(valid_ordinal(1390, 1), Some(civil_to_jd(1390, 1, 1)));
        assert_eq!(valid_ordinal(1390, 100), Some(civil_to_jd(1390, 4, 7)));
        assert_eq!(valid_ordinal(1390, -1), Some(civil_to_jd(1390, 12, 29)));
        assert_eq!(valid_ordinal(1391, -1), Some(civil_to_jd(1391, 12, 30)));
        assert_eq!(valid_ordinal(1391, -366), Some(civil_to_jd(1391, 1, 1)));
        assert_eq!(valid_ordinal(1390, 0), None);
        assert_eq!(valid_ordinal(1390, 366), None);
        assert_eq!(valid_ordinal(1390, -366), None);
        assert_eq!(jd_to_ordinal(civil_to_jd(1391, 8, 6)), (1391, 222));
        assert_eq!(last_day_of_year(1403), civil_to_jd(1403, 12, 30));
    }
}
