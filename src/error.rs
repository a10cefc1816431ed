// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar construction, parsing and comparison.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidDate`](CalendarError::InvalidDate) | civil/ordinal validation, unparsable date strings |
//! | [`InvalidTime`](CalendarError::InvalidTime) | clock fields out of range |
//! | [`InvalidOffset`](CalendarError::InvalidOffset) | unparsable or out-of-range UTC offsets |
//! | [`TypeMismatch`](CalendarError::TypeMismatch) | a non-numeric operand in day arithmetic |
//! | [`IncompatibleComparison`](CalendarError::IncompatibleComparison) | ordering against a value with no defined order |
//! | [`InvalidStep`](CalendarError::InvalidStep) | a zero step increment |
//!
//! Every failure is a deterministic input-validation failure; nothing here is
//! transient.

use thiserror::Error;

/// Unified error type of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Civil or ordinal fields that do not name a day, or text that matches
    /// no supported date layout.
    #[error("invalid date {input}: {reason}")]
    InvalidDate { input: String, reason: &'static str },

    /// Hour, minute, second or nanosecond out of range.
    #[error("invalid time {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    },

    /// A UTC offset that cannot be parsed or is a full day or more.
    #[error("invalid UTC offset {0:?}")]
    InvalidOffset(String),

    /// Arithmetic attempted with an operand that is not a number.
    #[error("{operation} expects a finite day count, got {operand}")]
    TypeMismatch {
        operation: &'static str,
        operand: String,
    },

    /// An ordering was requested against a value that has none.
    #[error("comparison of {lhs} with {rhs} failed")]
    IncompatibleComparison { lhs: String, rhs: String },

    /// `step` called with an increment of zero.
    #[error("step increment must not be zero")]
    InvalidStep,
}

/// Convenience alias used across the crate.
pub type CalendarResult<T> = Result<T, CalendarError>;

impl CalendarError {
    pub(crate) fn invalid_civil(year: i32, month: u8, day: u8, reason: &'static str) -> Self {
        Self::InvalidDate {
            input: format!("{year}/{month}/{day}"),
            reason,
        }
    }

    pub(crate) fn invalid_ordinal(year: i32, yday: i32) -> Self {
        Self::InvalidDate {
            input: format!("{year}/{yday} (ordinal)"),
            reason: "day of year out of range",
        }
    }

    pub(crate) fn unparsable(input: &str, reason: &'static str) -> Self {
        Self::InvalidDate {
            input: format!("{input:?}"),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = CalendarError::invalid_civil(1390, 12, 30, "day out of range for month");
        assert_eq!(
            err.to_string(),
            "invalid date 1390/12/30: day out of range for month"
        );

        let err = CalendarError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 0,
            nanosecond: 0,
        };
        assert_eq!(err.to_string(), "invalid time 24:00:00.000000000");
    }

    #[test]
    fn unparsable_quotes_the_text() {
        let err = CalendarError::unparsable("bad date", "no date pattern matched");
        assert!(err.to_string().contains("\"bad date\""));
    }
}
