// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text front end for dates, date-times and UTC offsets.
//!
//! # Date layouts
//!
//! ```text
//! 1391/8/6   1391-08-06   1391 8 6     separated, month/day 1–2 digits
//! 13910806                             compact, exactly 4+2+2 digits
//! 91/8/6                               two-digit year, century completed
//! ```
//!
//! Persian (۰–۹) and Arabic-Indic (٠–٩) digits are accepted anywhere a
//! digit is.
//!
//! # Date-time layout
//!
//! ```text
//! 1391-08-06T22:15            1391-08-06 22:15:30.25+03:30
//! 1391/8/6 08:00Z             1391-08-06T08:00:00-0430
//! ```
//!
//! The parser only produces fields; validation of the day and clock values
//! happens in the constructors.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::calendar::Year;
use crate::error::{CalendarError, CalendarResult};
use crate::time::UtcOffset;
use crate::JalaliDate;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Prefix a two-digit year with the century of today's Jalali date.
    ///
    /// The result depends on the day the text is parsed: `"91/1/1"` is
    /// 1391/01/01 during the 14th century AP, and 1491/01/01 once the
    /// 15th begins.
    pub century_completion: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            century_completion: true,
        }
    }
}

impl ParseOptions {
    /// Years are taken literally.
    pub const fn exact() -> Self {
        Self {
            century_completion: false,
        }
    }
}

static SEPARATED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<year>-?\d+)[/\- ](?P<month>\d{1,2})[/\- ](?P<day>\d{1,2})\s*$")
        .expect("valid date regex")
});

static COMPACT_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<year>\d{4})(?P<month>\d{2})(?P<day>\d{2})\s*$")
        .expect("valid compact date regex")
});

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<year>-?\d+)[/\-](?P<month>\d{1,2})[/\-](?P<day>\d{1,2})
        (?:
            [T\x20]
            (?P<hour>\d{1,2}):(?P<minute>\d{2})
            (?::(?P<second>\d{2})(?:\.(?P<fraction>\d{1,9}))?)?
            \x20?(?P<zone>Z|UTC|[+-]\d{1,2}(?::?\d{2})?)?
        )?
        \s*$",
    )
    .expect("valid date-time regex")
});

static OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<sign>[+-])?(?P<hour>\d{1,2})(?::?(?P<minute>\d{2}))?\s*$")
        .expect("valid offset regex")
});

/// Map Persian and Arabic-Indic digits to ASCII.
fn normalize_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    s.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            other => other,
        })
        .collect::<String>()
        .into()
}

fn number<T: std::str::FromStr>(caps: &Captures, name: &str, input: &str) -> CalendarResult<T> {
    caps.name(name)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| CalendarError::unparsable(input, "number out of range"))
}

fn year_field(
    caps: &Captures,
    input: &str,
    options: &ParseOptions,
    current_year: impl FnOnce() -> Year,
) -> CalendarResult<Year> {
    let token = caps.name("year").map(|m| m.as_str()).unwrap_or_default();
    let year: Year = number(caps, "year", input)?;
    if options.century_completion && token.len() == 2 && !token.starts_with('-') {
        let century = current_year().div_euclid(100);
        let completed = century * 100 + year;
        trace!(token, completed, "completing two-digit year");
        return Ok(completed);
    }
    Ok(year)
}

fn parse_date_at(
    s: &str,
    options: &ParseOptions,
    current_year: impl FnOnce() -> Year,
) -> CalendarResult<(Year, u8, u8)> {
    let text = normalize_digits(s);
    let Some(caps) = SEPARATED_DATE
        .captures(&text)
        .or_else(|| COMPACT_DATE.captures(&text))
    else {
        debug!(input = s, "no date layout matched");
        return Err(CalendarError::unparsable(s, "no date layout matched"));
    };
    Ok((
        year_field(&caps, s, options, current_year)?,
        number(&caps, "month", s)?,
        number(&caps, "day", s)?,
    ))
}

/// `(year, month, day)` of a date string, unvalidated.
pub(crate) fn parse_date(s: &str, options: &ParseOptions) -> CalendarResult<(Year, u8, u8)> {
    parse_date_at(s, options, || JalaliDate::today().year())
}

/// Fields of a date-time string, unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateTimeFields {
    pub year: Year,
    pub month: u8,
    pub day: u8,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
    pub offset: Option<UtcOffset>,
}

fn parse_datetime_at(
    s: &str,
    options: &ParseOptions,
    current_year: impl FnOnce() -> Year,
) -> CalendarResult<DateTimeFields> {
    let text = normalize_digits(s);
    let Some(caps) = DATE_TIME.captures(&text) else {
        debug!(input = s, "no date-time layout matched");
        return Err(CalendarError::unparsable(s, "no date-time layout matched"));
    };
    let optional = |name: &str| -> CalendarResult<u32> {
        match caps.name(name) {
            Some(_) => number(&caps, name, s),
            None => Ok(0),
        }
    };
    // right-pad the fraction to nanoseconds
    let nanosecond = match caps.name("fraction") {
        Some(m) => format!("{:0<9}", m.as_str())
            .parse()
            .map_err(|_| CalendarError::unparsable(s, "bad fraction of a second"))?,
        None => 0,
    };
    Ok(DateTimeFields {
        year: year_field(&caps, s, options, current_year)?,
        month: number(&caps, "month", s)?,
        day: number(&caps, "day", s)?,
        hour: optional("hour")?,
        minute: optional("minute")?,
        second: optional("second")?,
        nanosecond,
        offset: caps.name("zone").map(|m| parse_offset(m.as_str())).transpose()?,
    })
}

pub(crate) fn parse_datetime(s: &str, options: &ParseOptions) -> CalendarResult<DateTimeFields> {
    parse_datetime_at(s, options, || JalaliDate::today().year())
}

/// Parse `Z`, `UTC`, `+03:30`, `-0430`, `+3` or `+330`.
pub(crate) fn parse_offset(s: &str) -> CalendarResult<UtcOffset> {
    let text = normalize_digits(s);
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    let invalid = || CalendarError::InvalidOffset(s.to_owned());
    let Some(caps) = OFFSET.captures(trimmed) else {
        debug!(input = s, "unrecognised UTC offset");
        return Err(invalid());
    };
    let hours: i64 = caps["hour"].parse().map_err(|_| invalid())?;
    let minutes: i64 = match caps.name("minute") {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    let sign = match caps.name("sign") {
        Some(m) if m.as_str() == "-" => -1,
        _ => 1,
    };
    UtcOffset::from_seconds((sign * (hours * 3_600 + minutes * 60)) as i32).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(s: &str) -> CalendarResult<(Year, u8, u8)> {
        parse_date(s, &ParseOptions::exact())
    }

    #[test]
    fn separated_and_compact_layouts() {
        for s in ["1391/8/6", "1391-8-6", "1391 8 6", "13910806", " 1391/08/06 "] {
            assert_eq!(exact(s), Ok((1391, 8, 6)), "{s}");
        }
        assert_eq!(exact("-12/3/4"), Ok((-12, 3, 4)));
        assert_eq!(parse_date_at("-1/2/3", &ParseOptions::default(), || 1403), Ok((-1, 2, 3)));
    }

    #[test]
    fn native_digits() {
        assert_eq!(exact("۱۳۹۱/۸/۶"), Ok((1391, 8, 6)));
        assert_eq!(exact("١٣٩١-٠٨-٠٦"), Ok((1391, 8, 6)));
    }

    #[test]
    fn malformed_text_is_rejected() {
        for s in [
            "bad date string",
            "12-30-1390",
            "1391/8",
            "1391/123/1",
            "139108061",
            "",
            "date: 1391/8/6",
            "1391/8/6 AP",
        ] {
            assert!(
                matches!(exact(s), Err(CalendarError::InvalidDate { .. })),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn century_completion_uses_the_current_century() {
        let options = ParseOptions::default();
        assert_eq!(parse_date_at("91/8/5", &options, || 1391), Ok((1391, 8, 5)));
        assert_eq!(parse_date_at("03/1/1", &options, || 1403), Ok((1403, 1, 1)));
        assert_eq!(parse_date_at("91/8/5", &options, || 1500), Ok((1591, 8, 5)));
        assert_eq!(parse_date_at("1391/8/5", &options, || 1500), Ok((1391, 8, 5)));
        assert_eq!(
            parse_date_at("91/8/5", &ParseOptions::exact(), || 1391),
            Ok((91, 8, 5))
        );
    }

    #[test]
    fn datetime_fields() {
        let options = ParseOptions::exact();
        let fields = parse_datetime("1391-08-06T22:15:30.25+03:30", &options).unwrap();
        assert_eq!((fields.year, fields.month, fields.day), (1391, 8, 6));
        assert_eq!((fields.hour, fields.minute, fields.second), (22, 15, 30));
        assert_eq!(fields.nanosecond, 250_000_000);
        assert_eq!(fields.offset, Some(UtcOffset::IRST));

        let fields = parse_datetime("1391/8/6 08:00Z", &ParseOptions::exact()).unwrap();
        assert_eq!((fields.hour, fields.minute, fields.second), (8, 0, 0));
        assert_eq!(fields.offset, Some(UtcOffset::UTC));

        let fields = parse_datetime("1391-8-6", &ParseOptions::exact()).unwrap();
        assert_eq!((fields.hour, fields.offset), (0, None));

        assert!(parse_datetime("1391-08-06T25", &ParseOptions::exact()).is_err());
    }

    #[test]
    fn offsets() {
        assert_eq!(parse_offset("Z"), Ok(UtcOffset::UTC));
        assert_eq!(parse_offset("UTC"), Ok(UtcOffset::UTC));
        assert_eq!(parse_offset("+03:30"), Ok(UtcOffset::IRST));
        assert_eq!(parse_offset("+0330"), Ok(UtcOffset::IRST));
        assert_eq!(parse_offset("+3"), Ok(UtcOffset::from_hm(3, 0).unwrap()));
        assert_eq!(parse_offset("-0430").map(|o| o.seconds()), Ok(-16_200));
        assert_eq!(parse_offset("-00:30").map(|o| o.seconds()), Ok(-1_800));
        assert!(matches!(parse_offset("+24:00"), Err(CalendarError::InvalidOffset(_))));
        assert!(matches!(parse_offset("+03:75"), Err(CalendarError::InvalidOffset(_))));
        assert!(matches!(parse_offset("tehran"), Err(CalendarError::InvalidOffset(_))));
    }
}
