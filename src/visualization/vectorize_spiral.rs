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

//! The spiral layout engine.
//!
//! [layout_days] walks the calendar one day at a time, producing a [DayCell] per day with its
//! projected geometry, fill color and rotation angles. [render] annotates those cells with ticks
//! and labels and collects everything into a [CalendarDisplayList].
//!
//! Each day's cell shares its trailing edge with the previous day's leading edge. Rather than
//! recomputing it, the iterator carries a [DayCursor] from one day to the next.

use chrono::{Datelike, NaiveDate};

use crate::{
    calendar::{self, SpecialDay},
    params::SpiralParameters,
    projection::project_point_within_circle_to_rectangle,
    spiral::SpiralGeometry,
    visualization::types::{
        color::VizColor,
        display_list::{
            CalendarDisplayList,
            DayInfo,
            LabelKind,
            TickKind,
            VizCell,
            VizCellFlags,
            VizLabel,
            VizTick,
        },
        shapes::{VizLine, VizPoint2d, VizQuad},
    },
};

/// The geometry and styling of one day, before annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub index: usize,
    pub date: NaiveDate,
    /// Turn value of the trailing outer edge, shared with the previous day.
    pub turn_outer_start: f64,
    /// Turn value of the leading outer edge.
    pub turn_outer_end: f64,
    /// Corners in winding order: current outer, current inner, previous inner, previous outer.
    pub quad: VizQuad,
    pub center: VizPoint2d<f64>,
    /// Rotation in degrees that keeps text reading left to right along the spiral.
    pub left_to_right_angle: f64,
    /// Rotation in degrees that keeps text reading bottom to top across the spiral.
    pub bottom_to_top_angle: f64,
    pub fill: VizColor,
    pub flags: VizCellFlags,
    /// Years since the special date, if this day is a special day.
    pub anniversary: Option<i32>,
}

impl DayCell {
    pub fn info(&self) -> DayInfo {
        DayInfo {
            index: self.index,
            date:  self.date,
        }
    }

    /// The edge this cell shares with the previous day, from outer to inner.
    pub fn trailing_edge(&self) -> VizLine<f64> {
        VizLine::new(self.quad.outer2, self.quad.inner2)
    }
}

/// State carried from one day to the next.
#[derive(Copy, Clone, Debug)]
struct DayCursor {
    index: usize,
    date: NaiveDate,
    prev_outer_turn: f64,
    prev_outer: VizPoint2d<f64>,
    prev_inner: VizPoint2d<f64>,
}

/// Iterator over the [DayCell]s of a calendar. Created by [layout_days].
pub struct DayCells<'a> {
    params: &'a SpiralParameters,
    geometry: SpiralGeometry,
    special: SpecialDay,
    box_arc_width: f64,
    cursor: Option<DayCursor>,
}

impl DayCells<'_> {
    fn project_turn(&self, turns: f64) -> VizPoint2d<f64> {
        project_point_within_circle_to_rectangle(
            self.geometry.turn_to_polar(turns),
            self.params.width,
            self.params.height,
        )
    }

    pub fn geometry(&self) -> &SpiralGeometry {
        &self.geometry
    }

    pub fn box_arc_width(&self) -> f64 {
        self.box_arc_width
    }
}

impl Iterator for DayCells<'_> {
    type Item = DayCell;

    fn next(&mut self) -> Option<DayCell> {
        let cursor = self.cursor.take()?;
        if cursor.index >= self.params.total_days {
            return None;
        }

        let outer_turn = self.geometry.outer_turn_for_day(cursor.index, self.box_arc_width);
        let inner_turn = SpiralGeometry::inner_turn(outer_turn);
        let outer = self.project_turn(outer_turn);
        let inner = self.project_turn(inner_turn);

        let quad = VizQuad::new(outer, inner, cursor.prev_inner, cursor.prev_outer);

        let avg_outer_turn = (cursor.prev_outer_turn + outer_turn) / 2.0;
        let left_to_right_angle = -avg_outer_turn.fract() * 360.0;
        let bottom_to_top_angle = left_to_right_angle + 90.0;

        let date = cursor.date;
        let colors = &self.params.colors;
        let mut flags = VizCellFlags::empty();
        let mut anniversary = None;
        let mut fill = colors.day_fill(calendar::weekday_index(&date), calendar::month_index(&date));

        if self.special.matches(&date) {
            fill = colors.special_day_color;
            flags |= VizCellFlags::SPECIAL_DAY;
            anniversary = Some(self.special.years_since(&date));
        }
        if date.day() == 1 {
            flags |= VizCellFlags::MONTH_START;
        }

        // Advance. A date past the end of the calendar range ends the walk.
        self.cursor = match date.succ_opt() {
            Some(next_date) => Some(DayCursor {
                index: cursor.index + 1,
                date: next_date,
                prev_outer_turn: outer_turn,
                prev_outer: outer,
                prev_inner: inner,
            }),
            None => {
                if cursor.index + 1 < self.params.total_days {
                    log::warn!("DayCells::next(): calendar range ends at {}", date);
                }
                None
            }
        };

        Some(DayCell {
            index: cursor.index,
            date,
            turn_outer_start: cursor.prev_outer_turn,
            turn_outer_end: outer_turn,
            quad,
            center: quad.center(),
            left_to_right_angle,
            bottom_to_top_angle,
            fill,
            flags,
            anniversary,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .cursor
            .map(|c| self.params.total_days.saturating_sub(c.index))
            .unwrap_or(0);
        (0, Some(remaining))
    }
}

/// Lay out every day of the calendar described by `params`.
///
/// The parameters are not validated here. Call [SpiralParameters::validate] first.
pub fn layout_days(params: &SpiralParameters) -> DayCells<'_> {
    let geometry = SpiralGeometry::from_params(params);
    let box_arc_width = geometry.box_arc_width(params.total_days);
    let prev_outer_turn = geometry.outer_box_start_turns;
    let prev_inner_turn = SpiralGeometry::inner_turn(prev_outer_turn);

    let mut cells = DayCells {
        params,
        geometry,
        special: SpecialDay::new(params.special_date),
        box_arc_width,
        cursor: None,
    };
    cells.cursor = Some(DayCursor {
        index: 0,
        date: params.start_date,
        prev_outer_turn,
        prev_outer: cells.project_turn(prev_outer_turn),
        prev_inner: cells.project_turn(prev_inner_turn),
    });
    cells
}

/// Which tick, if any, marks the start of a day. Checked in priority order.
pub fn tick_kind(day_of_month: u32) -> Option<TickKind> {
    if day_of_month == 1 {
        Some(TickKind::Month)
    }
    else if day_of_month % 10 == 1 {
        Some(TickKind::Decade)
    }
    else if day_of_month % 5 == 1 {
        Some(TickKind::Lustrum)
    }
    else {
        None
    }
}

/// Which day-number label, if any, a day carries. Checked in priority order.
pub fn day_number_kind(day_of_month: u32) -> Option<LabelKind> {
    if day_of_month <= 9 {
        None
    }
    else if day_of_month % 10 == 0 {
        Some(LabelKind::Decade)
    }
    else if day_of_month % 5 == 0 {
        Some(LabelKind::Lustrum)
    }
    else {
        None
    }
}

/// The micro-label character for a day, if any: a month abbreviation character on days 1 to 3,
/// or a year digit on days 5 to 8.
pub fn micro_label(cell: &DayCell, language: calendar::Language) -> Option<(LabelKind, char)> {
    let dom = cell.date.day() as usize;
    match dom {
        1..=3 => language
            .month_char(calendar::month_index(&cell.date), dom - 1)
            .map(|c| (LabelKind::MonthName, c)),
        5..=8 => calendar::year_char(&cell.date, dom - 5).map(|c| (LabelKind::YearDigit, c)),
        _ => None,
    }
}

fn annotate(cell: &DayCell, params: &SpiralParameters, display_list: &mut CalendarDisplayList) {
    let style = &params.annotations;
    let day_of_month = cell.date.day();

    let label = |kind: LabelKind, rotation: f64, text: String| {
        let label_style = style.label(kind);
        VizLabel {
            day: cell.info(),
            kind,
            position: cell.center,
            rotation,
            text,
            font_size: label_style.font_size,
            color: label_style.color,
        }
    };

    if let Some(years) = cell.anniversary {
        display_list.push_label(label(LabelKind::SpecialDay, cell.left_to_right_angle, years.to_string()));
    }

    if let Some(kind) = tick_kind(day_of_month) {
        let tick_style = style.tick(kind);
        display_list.push_tick(VizTick {
            day: cell.info(),
            kind,
            line: cell.trailing_edge(),
            color: tick_style.color,
            width: tick_style.width,
        });
    }

    if let Some(kind) = day_number_kind(day_of_month) {
        display_list.push_label(label(kind, cell.bottom_to_top_angle, day_of_month.to_string()));
    }

    if let Some((kind, c)) = micro_label(cell, params.language) {
        display_list.push_label(label(kind, cell.left_to_right_angle, c.to_string()));
    }
}

/// Lay out and annotate the calendar described by `params`, returning every drawable primitive.
///
/// The parameters are not validated here. Call [SpiralParameters::validate] first.
pub fn render(params: &SpiralParameters) -> CalendarDisplayList {
    let mut display_list =
        CalendarDisplayList::new(params.width, params.height, &params.unit, params.colors.background)
            .with_capacity(params.total_days);

    let days = layout_days(params);
    log::debug!(
        "render(): {} days from {} on a {}x{}{} canvas, box arc width: {}",
        params.total_days,
        params.start_date,
        params.width,
        params.height,
        params.unit,
        days.box_arc_width()
    );

    for cell in days {
        annotate(&cell, params, &mut display_list);
        display_list.push_cell(VizCell {
            day:   cell.info(),
            quad:  cell.quad,
            fill:  cell.fill,
            flags: cell.flags,
        });
    }

    log::debug!(
        "render(): {} cells, {} ticks, {} labels, {} special days",
        display_list.cells().len(),
        display_list.ticks().len(),
        display_list.labels().len(),
        display_list.special_markers().len()
    );
    display_list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(days: usize) -> SpiralParameters {
        SpiralParameters {
            width: 1000.0,
            height: 1000.0,
            start_date: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
            total_days: days,
            total_turns: 10.0,
            empty_turns: 0.0,
            additional_turns: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn tick_priority() {
        assert_eq!(tick_kind(1), Some(TickKind::Month));
        assert_eq!(tick_kind(11), Some(TickKind::Decade));
        assert_eq!(tick_kind(31), Some(TickKind::Decade));
        assert_eq!(tick_kind(6), Some(TickKind::Lustrum));
        assert_eq!(tick_kind(26), Some(TickKind::Lustrum));
        assert_eq!(tick_kind(2), None);
    }

    #[test]
    fn day_number_priority() {
        assert_eq!(day_number_kind(5), None);
        assert_eq!(day_number_kind(10), Some(LabelKind::Decade));
        assert_eq!(day_number_kind(15), Some(LabelKind::Lustrum));
        assert_eq!(day_number_kind(30), Some(LabelKind::Decade));
        assert_eq!(day_number_kind(31), None);
    }

    #[test]
    fn cells_share_edges() {
        let params = params(40);
        let cells: Vec<_> = layout_days(&params).collect();
        assert_eq!(cells.len(), 40);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].quad.outer2, pair[0].quad.outer1);
            assert_eq!(pair[1].quad.inner2, pair[0].quad.inner1);
            assert_eq!(pair[1].turn_outer_start, pair[0].turn_outer_end);
        }
    }

    #[test]
    fn angles_follow_average_turn() {
        let params = params(365);
        for cell in layout_days(&params) {
            let avg = (cell.turn_outer_start + cell.turn_outer_end) / 2.0;
            assert!((cell.left_to_right_angle + avg.fract() * 360.0).abs() < 1e-9);
            assert_eq!(cell.bottom_to_top_angle, cell.left_to_right_angle + 90.0);
            assert!(cell.left_to_right_angle <= 0.0 && cell.left_to_right_angle > -360.0);
        }
    }

    #[test]
    fn micro_labels_spell_month_and_year() {
        let params = SpiralParameters {
            language: calendar::Language::Fr,
            ..params(31)
        };
        let cells: Vec<_> = layout_days(&params).collect();
        let chars: String = cells
            .iter()
            .filter_map(|c| micro_label(c, params.language))
            .map(|(_, c)| c)
            .collect();
        assert_eq!(chars, "Jan2001");
    }

    #[test]
    fn special_day_overrides_fill() {
        let params = SpiralParameters {
            special_date: NaiveDate::from_ymd_opt(1991, 1, 3).unwrap(),
            ..params(5)
        };
        let cells: Vec<_> = layout_days(&params).collect();
        assert_eq!(cells[2].fill, params.colors.special_day_color);
        assert!(cells[2].flags.contains(VizCellFlags::SPECIAL_DAY));
        assert_eq!(cells[2].anniversary, Some(10));
        assert!(cells[0].flags.contains(VizCellFlags::MONTH_START));
        assert_eq!(cells[1].anniversary, None);
    }

    #[test]
    fn last_representable_date_ends_walk() {
        let last_day = SpiralParameters {
            start_date: NaiveDate::MAX,
            ..params(1)
        };
        let mut days = layout_days(&last_day);
        let cell = days.next().unwrap();
        assert_eq!(cell.date, NaiveDate::MAX);
        assert_eq!(days.size_hint(), (0, Some(0)));
        assert!(days.next().is_none());

        // More days than chrono can represent stops after the last one.
        let overflowing = SpiralParameters {
            start_date: NaiveDate::MAX.pred_opt().unwrap(),
            ..params(5)
        };
        let dates: Vec<_> = layout_days(&overflowing).map(|c| c.date).collect();
        assert_eq!(dates, vec![NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX]);
    }

    #[test]
    fn zero_days_renders_background_only() {
        let display_list = render(&params(0));
        assert!(display_list.is_empty());
        assert_eq!(display_list.background, VizColor::BLACK);
    }
}
