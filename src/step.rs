// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive day-stepping sequences.
//!
//! A [`Step<T>`] is the description of a walk from `start` to `limit`; it is
//! `Copy` and can be iterated any number of times, each iteration starting
//! over from `start`.
//!
//! # Examples
//!
//! ```
//! use taqvim::JalaliDate;
//!
//! let start = JalaliDate::from_civil(1391, 9, 29).unwrap();
//! let limit = JalaliDate::from_civil(1391, 10, 11).unwrap();
//!
//! assert_eq!(start.upto(limit).iter().count(), 13);
//! assert_eq!(start.step(limit, 5).unwrap().iter().count(), 3);
//! assert_eq!(limit.upto(start).iter().count(), 0);
//! ```

use crate::error::{CalendarError, CalendarResult};
use std::fmt;
use std::iter::FusedIterator;

/// Values that can move by a whole number of days.
pub trait DayStep: Copy + PartialOrd {
    /// `None` when the result is out of range.
    fn checked_add_days(&self, days: i32) -> Option<Self>;
}

/// Walk from `start` towards `limit`, `by` days at a time, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<T: DayStep> {
    pub start: T,
    pub limit: T,
    by: i32,
}

impl<T: DayStep> Step<T> {
    /// Fails with [`CalendarError::InvalidStep`] when `by` is zero.
    pub fn new(start: T, limit: T, by: i32) -> CalendarResult<Self> {
        if by == 0 {
            return Err(CalendarError::InvalidStep);
        }
        Ok(Step { start, limit, by })
    }

    /// One day at a time, forwards.
    pub fn forward(start: T, limit: T) -> Self {
        Step {
            start,
            limit,
            by: 1,
        }
    }

    /// One day at a time, backwards.
    pub fn backward(start: T, limit: T) -> Self {
        Step {
            start,
            limit,
            by: -1,
        }
    }

    /// Increment in days; never zero.
    #[inline]
    pub fn by(&self) -> i32 {
        self.by
    }

    pub fn iter(&self) -> StepIter<T> {
        StepIter {
            next: Some(self.start),
            limit: self.limit,
            by: self.by,
        }
    }
}

impl<T: DayStep> IntoIterator for Step<T> {
    type Item = T;
    type IntoIter = StepIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: DayStep> IntoIterator for &Step<T> {
    type Item = T;
    type IntoIter = StepIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: DayStep + fmt::Display> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.limit)?;
        if self.by.abs() != 1 {
            write!(f, " by {}", self.by)?;
        }
        Ok(())
    }
}

/// Iterator over a [`Step`].
#[derive(Debug, Clone)]
pub struct StepIter<T: DayStep> {
    next: Option<T>,
    limit: T,
    by: i32,
}

impl<T: DayStep> StepIter<T> {
    fn in_range(&self, value: &T) -> bool {
        if self.by > 0 {
            *value <= self.limit
        } else {
            *value >= self.limit
        }
    }
}

impl<T: DayStep> Iterator for StepIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if !self.in_range(&current) {
            return None;
        }
        self.next = current.checked_add_days(self.by);
        Some(current)
    }
}

impl<T: DayStep> FusedIterator for StepIter<T> {}
