// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `strftime`-style formatting.
//!
//! # Conversions
//!
//! | Token | Output |
//! |-------|--------|
//! | `%Y` `%C` `%y` | four-digit year, century, two-digit year |
//! | `%m` `%d` `%e` `%j` | month, day (zero / space padded), day of year |
//! | `%B` `%EB` | month name, Persian / transliterated |
//! | `%b` `%h` | abbreviated transliterated month name |
//! | `%A` `%EA` `%a` `%Ea` | weekday name, full / abbreviated, Persian / transliterated |
//! | `%u` `%w` `%U` | ISO weekday, `wday`, Saturday-started week of year |
//! | `%H` `%M` `%S` `%L` `%N` | hour, minute, second, milli-, nanoseconds |
//! | `%z` `%:z` `%Z` | offset as `+0330`, `+03:30`, `+03:30` |
//! | `%n` `%t` `%%` | newline, tab, percent |
//!
//! Composites expand first: `%c` (`%a %-d %B %Y`), `%D` and `%x`
//! (`%y/%m/%d`), `%F` (`%Y-%m-%d`), `%v` (`%e-%B-%Y`), `%T` and `%X`
//! (`%H:%M:%S`), `%R` (`%H:%M`), `%+` (`%a %b %e %H:%M:%S %Z %Y`).
//!
//! Flags between `%` and the conversion: `-` drops padding, `_` pads with
//! spaces, `0` pads with zeros, `^` capitalises names. Unknown conversions
//! are copied through unchanged.

use std::fmt::Write;

use crate::names::{capitalize, ABBR_MONTH_NAMES, EN_MONTH_NAMES, MONTH_NAMES};
use crate::time::{TimeOfDay, UtcOffset};
use crate::JalaliDate;

/// Default pattern for dates; matches `Display`.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Default pattern for date-times.
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pad {
    Zero,
    Space,
    None,
}

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    pad: Option<Pad>,
    upcase: bool,
    alternate: bool,
    colon: bool,
}

fn composite(conversion: char) -> Option<&'static str> {
    Some(match conversion {
        'c' => "%a %-d %B %Y",
        'D' | 'x' => "%y/%m/%d",
        'F' => "%Y-%m-%d",
        'v' => "%e-%B-%Y",
        'T' | 'X' => "%H:%M:%S",
        'R' => "%H:%M",
        '+' => "%a %b %e %H:%M:%S %Z %Y",
        _ => return None,
    })
}

fn push_number(out: &mut String, value: i64, width: usize, default: Pad, flags: Flags) {
    // writing into a String cannot fail
    let _ = match flags.pad.unwrap_or(default) {
        Pad::Zero => write!(out, "{value:0width$}"),
        Pad::Space => write!(out, "{value:>width$}"),
        Pad::None => write!(out, "{value}"),
    };
}

fn push_name(out: &mut String, name: &str, flags: Flags) {
    if flags.upcase {
        out.push_str(&capitalize(name));
    } else {
        out.push_str(name);
    }
}

/// Render `pattern` for a local date, clock time and offset.
pub(crate) fn strftime(
    date: &JalaliDate,
    time: TimeOfDay,
    offset: UtcOffset,
    pattern: &str,
) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    render(date, time, offset, pattern, &mut out);
    out
}

fn render(date: &JalaliDate, time: TimeOfDay, offset: UtcOffset, pattern: &str, out: &mut String) {
    let mut chars = pattern.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut flags = Flags::default();
        let conversion = loop {
            match chars.next() {
                Some((_, '-')) => flags.pad = Some(Pad::None),
                Some((_, '_')) => flags.pad = Some(Pad::Space),
                Some((_, '0')) => flags.pad = Some(Pad::Zero),
                Some((_, '^')) => flags.upcase = true,
                Some((_, 'E')) => flags.alternate = true,
                Some((_, ':')) => flags.colon = true,
                Some((_, conversion)) => break Some(conversion),
                None => break None,
            }
        };
        let Some(conversion) = conversion else {
            out.push_str(&pattern[start..]);
            return;
        };

        if let Some(expansion) = composite(conversion) {
            render(date, time, offset, expansion, out);
            continue;
        }

        let weekday = date.weekday();
        let month = date.month() as usize;
        match conversion {
            'Y' => push_number(out, date.year() as i64, 4, Pad::Zero, flags),
            'C' => push_number(out, date.year().div_euclid(100) as i64, 2, Pad::Zero, flags),
            'y' => push_number(out, date.year().rem_euclid(100) as i64, 2, Pad::Zero, flags),
            'm' => push_number(out, month as i64, 2, Pad::Zero, flags),
            'd' => push_number(out, date.day() as i64, 2, Pad::Zero, flags),
            'e' => push_number(out, date.day() as i64, 2, Pad::Space, flags),
            'j' => push_number(out, date.yday() as i64, 3, Pad::Zero, flags),
            'B' if flags.alternate => push_name(out, EN_MONTH_NAMES[month], flags),
            'B' => push_name(out, MONTH_NAMES[month], flags),
            'b' | 'h' => push_name(out, ABBR_MONTH_NAMES[month], flags),
            'A' if flags.alternate => push_name(out, weekday.en_name(), flags),
            'A' => push_name(out, weekday.name(), flags),
            'a' if flags.alternate => push_name(out, weekday.en_abbr(), flags),
            'a' => push_name(out, weekday.abbr(), flags),
            'u' => push_number(out, weekday.iso_number() as i64, 1, Pad::None, flags),
            'w' => push_number(out, weekday.number() as i64, 1, Pad::None, flags),
            'U' => push_number(out, date.cweek() as i64, 2, Pad::Zero, flags),
            'H' => push_number(out, time.hour() as i64, 2, Pad::Zero, flags),
            'M' => push_number(out, time.minute() as i64, 2, Pad::Zero, flags),
            'S' => push_number(out, time.second() as i64, 2, Pad::Zero, flags),
            'L' => push_number(out, (time.nanosecond() / 1_000_000) as i64, 3, Pad::Zero, flags),
            'N' => push_number(out, time.nanosecond() as i64, 9, Pad::Zero, flags),
            'z' => offset.write_hm(out, flags.colon),
            'Z' => offset.write_hm(out, true),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            '%' => out.push('%'),
            _ => {
                let end = chars.peek().map_or(pattern.len(), |(i, _)| *i);
                out.push_str(&pattern[start..end]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(year: i32, month: u8, day: u8) -> JalaliDate {
        JalaliDate::from_civil(year, month, day).unwrap()
    }

    #[test]
    fn default_pattern_matches_display() {
        let date = civil(1390, 4, 6);
        assert_eq!(date.strftime(DATE_FORMAT), "1390/04/06");
        assert_eq!(date.strftime(DATE_FORMAT), date.to_string());
    }

    #[test]
    fn names() {
        let date = civil(1390, 4, 6);
        assert_eq!(date.strftime("%A"), "دوشنبه");
        assert_eq!(date.strftime("%a"), "۲ش");
        assert_eq!(date.strftime("%EA"), "doshanbe");
        assert_eq!(date.strftime("%^EA"), "Doshanbe");
        assert_eq!(date.strftime("%Ea"), "do");
        assert_eq!(date.strftime("%B"), "تیر");
        assert_eq!(date.strftime("%EB"), "tir");
        assert_eq!(date.strftime("%^EB"), "Tir");
        assert_eq!(date.strftime("%b"), "tir");
        assert_eq!(date.strftime("%h"), "tir");
        assert_eq!(date.strftime("%^b"), "Tir");
        assert_eq!(date.strftime("%^h"), "Tir");
        assert_eq!(civil(1390, 1, 1).strftime("%^EB"), "Farvardin");
    }

    #[test]
    fn numbers_and_padding() {
        let date = civil(1390, 4, 6);
        assert_eq!(date.strftime("%C"), "13");
        assert_eq!(date.strftime("%d"), "06");
        assert_eq!(civil(1390, 4, 16).strftime("%d"), "16");
        assert_eq!(date.strftime("%-d"), "6");
        assert_eq!(date.strftime("%e"), " 6");
        assert_eq!(civil(1390, 4, 16).strftime("%e"), "16");
        assert_eq!(date.strftime("%m"), "04");
        assert_eq!(date.strftime("%_m"), " 4");
        assert_eq!(date.strftime("%-m"), "4");
        assert_eq!(civil(1390, 11, 6).strftime("%_m"), "11");
        assert_eq!(date.strftime("%j"), "099");
        assert_eq!(civil(1390, 4, 9).strftime("%Y"), "1390");
        assert_eq!(civil(1390, 4, 9).strftime("%y"), "90");
        assert_eq!(civil(1405, 1, 1).strftime("%y"), "05");
        assert_eq!(civil(12, 3, 4).strftime("%Y"), "0012");
        assert_eq!(civil(12, 3, 4).strftime("%-Y"), "12");
        assert_eq!(civil(12, 3, 4).strftime(DATE_FORMAT), "0012/03/04");
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(civil(1390, 4, 11).strftime("%w"), "6");
        assert_eq!(civil(1390, 4, 12).strftime("%w"), "0");
        assert_eq!(civil(1390, 4, 12).strftime("%u"), "7");
        assert_eq!(civil(1394, 1, 8).strftime("%U"), "02");
    }

    #[test]
    fn literals() {
        let date = civil(1390, 4, 6);
        assert_eq!(date.strftime("%n"), "\n");
        assert_eq!(date.strftime("%t"), "\t");
        assert_eq!(date.strftime("%%"), "%");
        assert_eq!(date.strftime("100%% %Q"), "100% %Q");
        assert_eq!(date.strftime("trailing %"), "trailing %");
        assert_eq!(date.strftime("روز %-d"), "روز 6");
    }

    #[test]
    fn composites() {
        let date = civil(1390, 4, 6);
        assert_eq!(date.strftime("%c"), "۲ش 6 تیر 1390");
        assert_eq!(date.strftime("%c"), date.strftime("%a %-d %B %Y"));
        assert_eq!(date.strftime("%D"), "90/04/06");
        assert_eq!(date.strftime("%x"), "90/04/06");
        assert_eq!(date.strftime("%F"), "1390-04-06");
        assert_eq!(civil(1390, 4, 9).strftime("%v"), " 9-تیر-1390");
        assert_eq!(date.strftime("%T"), "00:00:00");
    }

    #[test]
    fn clock_and_offset() {
        let date = civil(1391, 8, 6);
        let time = TimeOfDay::from_hms_nano(7, 5, 9, 123_456_789).unwrap();
        let render = |pattern: &str| strftime(&date, time, UtcOffset::IRST, pattern);
        assert_eq!(render(DATETIME_FORMAT), "1391/08/06 07:05:09");
        assert_eq!(render("%L %N"), "123 123456789");
        assert_eq!(render("%z %:z %Z"), "+0330 +03:30 +03:30");
        assert_eq!(render("%R"), "07:05");
        assert_eq!(render("%-H"), "7");
        assert_eq!(render("%+"), "ش abn  6 07:05:09 +03:30 1391");
    }
}
