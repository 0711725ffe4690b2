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

//! Parameters of a single render call.

use chrono::NaiveDate;

use crate::{
    calendar::Language,
    visualization::palette::{AnnotationStyle, ColorScheme},
    SpiralifeError,
    DEFAULT_IMAGE_HEIGHT,
    DEFAULT_IMAGE_WIDTH,
    DEFAULT_TOTAL_DAYS,
};

/// Everything the layout engine needs to lay out a calendar. The engine is a pure function of
/// these parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralParameters {
    pub width: f64,
    pub height: f64,
    /// Unit suffix for the canvas size, e.g. `px` or `mm`. Passed through to renderers unchanged.
    pub unit: String,
    /// Date of day index 0.
    pub start_date: NaiveDate,
    pub total_days: usize,
    /// Turns of spiral spanned by the day cells themselves.
    pub total_turns: f64,
    /// Turns of empty spiral before the first day cell.
    pub empty_turns: f64,
    /// How far the last day cell extends past the reference circle, in turns.
    pub additional_turns: f64,
    /// Month and day highlighted every year. The year only counts anniversaries.
    pub special_date: NaiveDate,
    pub language: Language,
    pub colors: ColorScheme,
    pub annotations: AnnotationStyle,
}

impl Default for SpiralParameters {
    fn default() -> Self {
        let millennium = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        SpiralParameters {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            unit: "px".to_string(),
            start_date: millennium,
            total_days: DEFAULT_TOTAL_DAYS,
            total_turns: 100.0,
            empty_turns: 0.5,
            additional_turns: 1.0,
            special_date: millennium,
            language: Language::En,
            colors: ColorScheme::default(),
            annotations: AnnotationStyle::default(),
        }
    }
}

impl SpiralParameters {
    /// Check the parameters before handing them to the layout engine. The engine itself never
    /// fails, but produces meaningless geometry from non-finite or non-positive dimensions.
    pub fn validate(&self) -> Result<(), SpiralifeError> {
        let reals = [
            ("width", self.width),
            ("height", self.height),
            ("total turns", self.total_turns),
            ("empty turns", self.empty_turns),
            ("additional turns", self.additional_turns),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(SpiralifeError::InvalidParameter(format!("{} must be a finite number", name)));
            }
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SpiralifeError::InvalidParameter(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.total_days == 0 {
            return Err(SpiralifeError::InvalidParameter("day count must be positive".to_string()));
        }
        if self.total_turns <= 0.0 {
            return Err(SpiralifeError::InvalidParameter(format!(
                "total turns must be positive, got {}",
                self.total_turns
            )));
        }
        if self.empty_turns < 0.0 {
            return Err(SpiralifeError::InvalidParameter(format!(
                "empty turns must not be negative, got {}",
                self.empty_turns
            )));
        }

        // Every day index must map to a representable date.
        let last_offset = chrono::Days::new(self.total_days as u64 - 1);
        if self.start_date.checked_add_days(last_offset).is_none() {
            return Err(SpiralifeError::InvalidDate(format!(
                "{} days from {} exceeds the supported calendar range",
                self.total_days, self.start_date
            )));
        }
        Ok(())
    }

    /// The date of the last day cell, if any.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let offset = self.total_days.checked_sub(1)?;
        self.start_date.checked_add_days(chrono::Days::new(offset as u64))
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, SpiralifeError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| SpiralifeError::InvalidDate(format!("'{}': {}", input, e)))
}
