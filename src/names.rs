// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month and weekday names.
//!
//! Month tables carry an empty entry at index 0 so that `MONTH_NAMES[month]`
//! indexes by the 1-based month number. Day tables are indexed by
//! [`Weekday::number`], Sunday (یک‌شنبه) being 0.

/// Persian month names.
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Latin transliteration of the month names.
pub const EN_MONTH_NAMES: [&str; 13] = [
    "",
    "farvardin",
    "ordibehesht",
    "khordad",
    "tir",
    "mordad",
    "shahrivar",
    "mehr",
    "aban",
    "azar",
    "day",
    "bahman",
    "esfand",
];

/// Three-letter Latin month abbreviations.
pub const ABBR_MONTH_NAMES: [&str; 13] = [
    "", "far", "ord", "kho", "tir", "mor", "sha", "meh", "abn", "azr", "day", "bah", "esf",
];

/// Persian weekday names, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "یک\u{200c}شنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
    "شنبه",
];

/// Latin transliteration of the weekday names, Sunday first.
pub const EN_DAY_NAMES: [&str; 7] = [
    "yekshanbe",
    "doshanbe",
    "seshanbe",
    "chaharshanbe",
    "panjshanbe",
    "jomee",
    "shanbe",
];

/// Short Persian weekday names, Sunday first.
pub const ABBR_DAY_NAMES: [&str; 7] = ["۱ش", "۲ش", "۳ش", "۴ش", "۵ش", "ج", "ش"];

/// Two-letter Latin weekday abbreviations, Sunday first.
pub const ABBR_EN_DAY_NAMES: [&str; 7] = ["ye", "do", "se", "ch", "pj", "jo", "sh"];

/// Day of the week.
///
/// Discriminants follow the `wday` convention (Sunday = 0 … Saturday = 6).
/// The Persian week itself starts on [`Weekday::Shanbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// Sunday.
    Yekshanbe = 0,
    /// Monday.
    Doshanbe = 1,
    /// Tuesday.
    Seshanbe = 2,
    /// Wednesday.
    Chaharshanbe = 3,
    /// Thursday.
    Panjshanbe = 4,
    /// Friday.
    Jomee = 5,
    /// Saturday.
    Shanbe = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Yekshanbe,
        Weekday::Doshanbe,
        Weekday::Seshanbe,
        Weekday::Chaharshanbe,
        Weekday::Panjshanbe,
        Weekday::Jomee,
        Weekday::Shanbe,
    ];

    /// Weekday from its `wday` number, taken modulo 7.
    pub const fn from_number(wday: u32) -> Self {
        Self::ALL[(wday % 7) as usize]
    }

    /// Sunday = 0 … Saturday = 6.
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// ISO numbering, Monday = 1 … Sunday = 7.
    pub const fn iso_number(self) -> u32 {
        match self {
            Weekday::Yekshanbe => 7,
            other => other as u32,
        }
    }

    /// Position in the Persian week, Saturday = 0 … Friday = 6.
    pub const fn days_from_shanbe(self) -> u32 {
        (self as u32 + 1) % 7
    }

    pub fn name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }

    pub fn en_name(self) -> &'static str {
        EN_DAY_NAMES[self as usize]
    }

    pub fn abbr(self) -> &'static str {
        ABBR_DAY_NAMES[self as usize]
    }

    pub fn en_abbr(self) -> &'static str {
        ABBR_EN_DAY_NAMES[self as usize]
    }

    /// The same day in chrono's representation.
    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Yekshanbe => chrono::Weekday::Sun,
            Weekday::Doshanbe => chrono::Weekday::Mon,
            Weekday::Seshanbe => chrono::Weekday::Tue,
            Weekday::Chaharshanbe => chrono::Weekday::Wed,
            Weekday::Panjshanbe => chrono::Weekday::Thu,
            Weekday::Jomee => chrono::Weekday::Fri,
            Weekday::Shanbe => chrono::Weekday::Sat,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::from_number(day.num_days_from_sunday())
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.en_name())
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Persian script has no case, so those names come back unchanged.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
