/*
    Spiralife

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Calendar helpers: supported languages, month abbreviations, and day-of-month rules used to
//! annotate the spiral.
//!
//! All date arithmetic is delegated to `chrono`, which implements the proleptic Gregorian
//! calendar.

use chrono::{Datelike, NaiveDate};
use strum::{Display, EnumIter, EnumString};

use crate::SpiralifeError;

/// Twelve month abbreviations, January first.
pub type MonthNames = [&'static str; 12];

pub const MONTH_NAMES_EN: MonthNames = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const MONTH_NAMES_DE: MonthNames = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];
pub const MONTH_NAMES_FR: MonthNames = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];
pub const MONTH_NAMES_ES: MonthNames = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// The language used for month-name micro-labels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
}

impl Language {
    /// Parse a language code such as `de`, ignoring case.
    pub fn parse_code(code: &str) -> Result<Language, SpiralifeError> {
        code.trim()
            .parse()
            .map_err(|_| SpiralifeError::InvalidLanguage(code.to_string()))
    }

    /// Resolve a language code leniently. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Language {
        Language::parse_code(code).unwrap_or_else(|e| {
            log::warn!("{}, falling back to English", e);
            Language::En
        })
    }

    pub fn month_names(&self) -> &'static MonthNames {
        match self {
            Language::En => &MONTH_NAMES_EN,
            Language::De => &MONTH_NAMES_DE,
            Language::Fr => &MONTH_NAMES_FR,
            Language::Es => &MONTH_NAMES_ES,
        }
    }

    /// Return the `n`th character of the abbreviation for `month0` (0 = January), if it exists.
    pub fn month_char(&self, month0: usize, n: usize) -> Option<char> {
        self.month_names().get(month0).and_then(|name| name.chars().nth(n))
    }
}

/// Weekday index with Sunday = 0.
#[inline]
pub fn weekday_index(date: &NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Month index with January = 0.
#[inline]
pub fn month_index(date: &NaiveDate) -> usize {
    date.month0() as usize
}

/// Return the `n`th decimal digit of the date's year, counting from the most significant digit.
pub fn year_char(date: &NaiveDate, n: usize) -> Option<char> {
    date.year().to_string().chars().nth(n)
}

/// A day recurring every year on the same month and day. The year is only used to count how many
/// years have passed, e.g. for birthdays or anniversaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpecialDay {
    origin: NaiveDate,
}

impl SpecialDay {
    pub fn new(origin: NaiveDate) -> SpecialDay {
        SpecialDay { origin }
    }

    /// Return true if `date` falls on the special day's month and day, in any year.
    #[inline]
    pub fn matches(&self, date: &NaiveDate) -> bool {
        date.month() == self.origin.month() && date.day() == self.origin.day()
    }

    /// Number of years between the special day's origin and `date`. May be negative.
    #[inline]
    pub fn years_since(&self, date: &NaiveDate) -> i32 {
        date.year() - self.origin.year()
    }
}
