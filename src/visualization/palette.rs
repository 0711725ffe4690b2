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

//! Color tables and annotation styles used by the layout engine.
//!
//! Nothing in here is global state: a [ColorScheme] and an [AnnotationStyle] are carried inside
//! [SpiralParameters](crate::SpiralParameters) and may be replaced wholesale by the caller.

use crate::visualization::types::{
    color::VizColor,
    display_list::{LabelKind, TickKind},
};

/// Weekday colors, Sunday first.
pub const DEFAULT_WEEKDAY_COLORS: [VizColor; 7] = [
    VizColor::WHITE,
    VizColor::WHITE,
    VizColor::WHITE,
    VizColor::WHITE,
    VizColor::WHITE,
    VizColor::from_rgb8(130, 255, 100),
    VizColor::from_rgb8(255, 100, 15),
];

/// Month colors, January first.
#[rustfmt::skip]
pub const DEFAULT_MONTH_COLORS: [VizColor; 12] = [
    VizColor::from_rgb8(2, 100, 255),
    VizColor::from_rgb8(44, 120, 210),
    VizColor::from_rgb8(33, 180, 100),
    VizColor::from_rgb8(100, 240, 120),
    VizColor::from_rgb8(230, 222, 90),
    VizColor::from_rgb8(255, 140, 0),
    VizColor::from_rgb8(255, 0, 0),
    VizColor::from_rgb8(190, 180, 0),
    VizColor::from_rgb8(200, 180, 100),
    VizColor::from_rgb8(190, 210, 100),
    VizColor::from_rgb8(150, 150, 150),
    VizColor::from_rgb8(70, 90, 120),
];

pub const DEFAULT_SPECIAL_DAY_COLOR: VizColor = VizColor::YELLOW;
pub const DEFAULT_BACKGROUND_COLOR: VizColor = VizColor::BLACK;

/// The fill colors of a calendar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    pub weekday_colors: [VizColor; 7],
    pub month_colors: [VizColor; 12],
    pub special_day_color: VizColor,
    pub background: VizColor,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            weekday_colors: DEFAULT_WEEKDAY_COLORS,
            month_colors: DEFAULT_MONTH_COLORS,
            special_day_color: DEFAULT_SPECIAL_DAY_COLOR,
            background: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl ColorScheme {
    /// Build a color scheme from untyped channel lists, such as those read from a settings file.
    /// Each table is validated independently. A missing table, a table of the wrong length or a
    /// channel outside `0..=255` falls back to the default for that table only.
    pub fn from_lists(
        weekday_colors: Option<&[Vec<i64>]>,
        month_colors: Option<&[Vec<i64>]>,
        special_day_color: Option<&[i64]>,
    ) -> ColorScheme {
        let mut scheme = ColorScheme::default();

        if let Some(list) = weekday_colors {
            match color_table::<7>(list) {
                Some(table) => scheme.weekday_colors = table,
                None => log::warn!("Invalid weekday color table, using defaults"),
            }
        }
        if let Some(list) = month_colors {
            match color_table::<12>(list) {
                Some(table) => scheme.month_colors = table,
                None => log::warn!("Invalid month color table, using defaults"),
            }
        }
        if let Some(channels) = special_day_color {
            match VizColor::from_channels(channels) {
                Some(color) => scheme.special_day_color = color,
                None => log::warn!("Invalid special day color {:?}, using default", channels),
            }
        }
        scheme
    }

    pub fn with_background(mut self, background: VizColor) -> ColorScheme {
        self.background = background;
        self
    }

    /// Fill color of an ordinary day: the floored average of its weekday and month colors.
    pub fn day_fill(&self, weekday: usize, month: usize) -> VizColor {
        let weekday_color = self.weekday_colors[weekday % 7];
        let month_color = self.month_colors[month % 12];
        weekday_color.average(&month_color)
    }
}

fn color_table<const N: usize>(list: &[Vec<i64>]) -> Option<[VizColor; N]> {
    if list.len() != N {
        return None;
    }
    let mut table = [VizColor::BLACK; N];
    for (entry, channels) in table.iter_mut().zip(list) {
        *entry = VizColor::from_channels(channels)?;
    }
    Some(table)
}

/// Stroke color and width of a tick line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickStyle {
    pub color: VizColor,
    pub width: f64,
}

/// Fill color and font size of a text label.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub color: VizColor,
    pub font_size: f64,
}

/// Styles for ticks and labels, one entry per kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationStyle {
    pub month_tick: TickStyle,
    pub decade_tick: TickStyle,
    pub lustrum_tick: TickStyle,
    pub decade_label: LabelStyle,
    pub lustrum_label: LabelStyle,
    pub month_name_label: LabelStyle,
    pub year_digit_label: LabelStyle,
    pub special_day_label: LabelStyle,
}

#[rustfmt::skip]
impl Default for AnnotationStyle {
    fn default() -> Self {
        AnnotationStyle {
            month_tick:        TickStyle { color: VizColor::from_rgb8(200, 0, 0), width: 2.0 },
            decade_tick:       TickStyle { color: VizColor::from_rgb8(0, 0, 200), width: 1.5 },
            lustrum_tick:      TickStyle { color: VizColor::from_rgb8(0, 200, 0), width: 1.4 },
            decade_label:      LabelStyle { color: VizColor::from_rgb8(0, 0, 200), font_size: 4.0 },
            lustrum_label:     LabelStyle { color: VizColor::from_rgb8(0, 100, 0), font_size: 4.0 },
            month_name_label:  LabelStyle { color: VizColor::BLACK, font_size: 6.0 },
            year_digit_label:  LabelStyle { color: VizColor::BLACK, font_size: 7.0 },
            special_day_label: LabelStyle { color: VizColor::BLACK, font_size: 4.0 },
        }
    }
}

impl AnnotationStyle {
    pub fn tick(&self, kind: TickKind) -> TickStyle {
        match kind {
            TickKind::Month => self.month_tick,
            TickKind::Decade => self.decade_tick,
            TickKind::Lustrum => self.lustrum_tick,
        }
    }

    pub fn label(&self, kind: LabelKind) -> LabelStyle {
        match kind {
            LabelKind::Decade => self.decade_label,
            LabelKind::Lustrum => self.lustrum_label,
            LabelKind::MonthName => self.month_name_label,
            LabelKind::YearDigit => self.year_digit_label,
            LabelKind::SpecialDay => self.special_day_label,
        }
    }
}
