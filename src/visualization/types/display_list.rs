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

//! A [CalendarDisplayList] is the structured output of the layout engine: every drawable
//! primitive for one calendar, plus a description of the canvas it is drawn on.
//!
//! Primitives are kept in separate lists per kind. [CalendarDisplayList::iter] walks them in draw
//! order (cells, ticks, labels, special-day markers) so that annotations are painted over cells.

use bitflags::bitflags;
use chrono::NaiveDate;
use strum::{Display, EnumIter};

use crate::visualization::types::{
    color::VizColor,
    shapes::{VizLine, VizPoint2d, VizQuad, VizRect},
};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[rustfmt::skip]
    pub struct VizCellFlags: u8 {
        /// The special-day color override fired for this cell.
        const SPECIAL_DAY = 0b0000_0001;
        /// The cell is the first day of a month.
        const MONTH_START = 0b0000_0010;
    }
}

/// Identifies the day a primitive belongs to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayInfo {
    /// Zero-based day index from the start date.
    pub index: usize,
    pub date:  NaiveDate,
}

/// The weight class of a boundary tick.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TickKind {
    /// Heavy tick on the first day of a month.
    Month,
    /// Medium tick on the 11th, 21st and 31st.
    Decade,
    /// Light tick on the 6th, 16th and 26th.
    Lustrum,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum LabelKind {
    /// Day number on the 10th, 20th and 30th.
    Decade,
    /// Day number on the 15th and 25th.
    Lustrum,
    /// One character of the month abbreviation.
    MonthName,
    /// One digit of the year.
    YearDigit,
    /// Number of years since the special date.
    SpecialDay,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VizCell {
    pub day:   DayInfo,
    pub quad:  VizQuad,
    pub fill:  VizColor,
    pub flags: VizCellFlags,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VizTick {
    pub day:   DayInfo,
    pub kind:  TickKind,
    pub line:  VizLine<f64>,
    pub color: VizColor,
    pub width: f64,
}

/// A centered text label. `rotation` is in degrees, applied after translating to `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct VizLabel {
    pub day: DayInfo,
    pub kind: LabelKind,
    pub position: VizPoint2d<f64>,
    pub rotation: f64,
    pub text: String,
    pub font_size: f64,
    pub color: VizColor,
}

/// A borrowed reference to any primitive in a [CalendarDisplayList].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CalendarPrimitive<'a> {
    Cell(&'a VizCell),
    Tick(&'a VizTick),
    Label(&'a VizLabel),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarDisplayList {
    pub width: f64,
    pub height: f64,
    pub unit: String,
    pub background: VizColor,
    cells: Vec<VizCell>,
    ticks: Vec<VizTick>,
    labels: Vec<VizLabel>,
    special_markers: Vec<VizLabel>,
}

impl CalendarDisplayList {
    pub fn new(width: f64, height: f64, unit: &str, background: VizColor) -> CalendarDisplayList {
        CalendarDisplayList {
            width,
            height,
            unit: unit.to_string(),
            background,
            cells: Vec::new(),
            ticks: Vec::new(),
            labels: Vec::new(),
            special_markers: Vec::new(),
        }
    }

    /// Reserve space for `days` cells.
    pub fn with_capacity(mut self, days: usize) -> CalendarDisplayList {
        self.cells.reserve_exact(days);
        self
    }

    pub fn push_cell(&mut self, cell: VizCell) {
        self.cells.push(cell);
    }

    pub fn push_tick(&mut self, tick: VizTick) {
        self.ticks.push(tick);
    }

    /// Push a label. Labels of kind [LabelKind::SpecialDay] are kept with the special-day markers
    /// so they are drawn last.
    pub fn push_label(&mut self, label: VizLabel) {
        match label.kind {
            LabelKind::SpecialDay => self.special_markers.push(label),
            _ => self.labels.push(label),
        }
    }

    pub fn cells(&self) -> &[VizCell] {
        &self.cells
    }

    pub fn ticks(&self) -> &[VizTick] {
        &self.ticks
    }

    pub fn labels(&self) -> &[VizLabel] {
        &self.labels
    }

    pub fn special_markers(&self) -> &[VizLabel] {
        &self.special_markers
    }

    /// All labels in draw order, ordinary labels first and special-day markers last.
    pub fn texts(&self) -> impl Iterator<Item = &VizLabel> {
        self.labels.iter().chain(self.special_markers.iter())
    }

    /// The canvas rectangle, centered on the origin.
    pub fn view_box(&self) -> VizRect<f64> {
        VizRect::centered(self.width, self.height)
    }

    /// Total number of primitives, not counting the background.
    pub fn len(&self) -> usize {
        self.cells.len() + self.ticks.len() + self.labels.len() + self.special_markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an Iterator that yields every primitive in draw order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarPrimitive<'_>> {
        self.cells
            .iter()
            .map(CalendarPrimitive::Cell)
            .chain(self.ticks.iter().map(CalendarPrimitive::Tick))
            .chain(self.texts().map(CalendarPrimitive::Label))
    }
}
