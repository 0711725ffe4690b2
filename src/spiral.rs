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

//! Arc-length model of the spiral line.
//!
//! The spiral line is Archimedean: its radius grows linearly with the number of turns. Day cells
//! are bounded by two points on that line one turn apart, and consecutive day boundaries are placed
//! at equal increments of cumulative arc length. The closed form used here is
//! `distance(t) = t² / L × π`, where `L` is the number of turns that reach the reference (unit)
//! circle.

use std::f64::consts::{PI, TAU};

use crate::{params::SpiralParameters, visualization::types::shapes::VizPoint2d};

/// Constants derived from [SpiralParameters] once per render call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpiralGeometry {
    /// Turn value of the first day cell's trailing outer edge. Always at least 1.
    pub outer_box_start_turns: f64,
    /// Turn value of the last day cell's leading outer edge.
    pub outer_box_end_turns: f64,
    /// Number of turns of spiral line that reach the unit circle. Always positive.
    pub total_line_turns: f64,
}

impl SpiralGeometry {
    pub fn new(total_turns: f64, empty_turns: f64, additional_turns: f64) -> SpiralGeometry {
        let outer_box_start_turns = empty_turns + 1.0;
        let outer_box_end_turns = total_turns + outer_box_start_turns;
        let mut total_line_turns = outer_box_end_turns - additional_turns;

        // Keep the spiral drawable even for nonsensical turn combinations.
        if total_line_turns <= 0.0 || total_line_turns.is_nan() {
            let floored = total_turns.max(1.0);
            log::warn!(
                "SpiralGeometry::new(): total line turns {} is not positive, using {}",
                total_line_turns,
                floored
            );
            total_line_turns = floored;
        }

        log::debug!(
            "SpiralGeometry::new(): outer start: {} outer end: {} line turns: {}",
            outer_box_start_turns,
            outer_box_end_turns,
            total_line_turns
        );

        SpiralGeometry {
            outer_box_start_turns,
            outer_box_end_turns,
            total_line_turns,
        }
    }

    pub fn from_params(params: &SpiralParameters) -> SpiralGeometry {
        SpiralGeometry::new(params.total_turns, params.empty_turns, params.additional_turns)
    }

    /// Cumulative arc length of the spiral line from the origin to `turns`. Negative turn values
    /// are treated as zero.
    #[inline]
    pub fn turns_to_distance(&self, turns: f64) -> f64 {
        let turns = turns.max(0.0);
        turns * turns / self.total_line_turns * PI
    }

    /// Inverse of [turns_to_distance](Self::turns_to_distance). Negative distances map to turn 0.
    #[inline]
    pub fn distance_to_turns(&self, distance: f64) -> f64 {
        if distance >= 0.0 {
            (distance * self.total_line_turns / PI).sqrt()
        }
        else {
            0.0
        }
    }

    /// Point on the spiral line at `turns`, in unit-disk space. The angle is measured clockwise
    /// from "up", so turn 0 points along +y.
    pub fn turn_to_polar(&self, turns: f64) -> VizPoint2d<f64> {
        let radius = (turns / self.total_line_turns).max(0.0);
        let theta = turns * TAU;
        VizPoint2d::new(theta.sin() * radius, theta.cos() * radius)
    }

    #[inline]
    pub fn initial_outer_distance(&self) -> f64 {
        self.turns_to_distance(self.outer_box_start_turns)
    }

    #[inline]
    pub fn final_outer_distance(&self) -> f64 {
        self.turns_to_distance(self.outer_box_end_turns)
    }

    /// Arc length covered by one day cell along its outer edge. Zero if there are no days.
    pub fn box_arc_width(&self, total_days: usize) -> f64 {
        if total_days == 0 {
            return 0.0;
        }
        (self.final_outer_distance() - self.initial_outer_distance()) / total_days as f64
    }

    /// Turn value of the leading outer edge of the day at `index`.
    pub fn outer_turn_for_day(&self, index: usize, box_arc_width: f64) -> f64 {
        let distance = self.initial_outer_distance() + (index + 1) as f64 * box_arc_width;
        self.distance_to_turns(distance)
    }

    /// The inner edge of a cell trails its outer edge by exactly one turn.
    #[inline]
    pub fn inner_turn(outer_turn: f64) -> f64 {
        (outer_turn - 1.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn derived_constants() {
        let geometry = SpiralGeometry::new(100.0, 0.5, 1.0);
        assert_eq!(geometry.outer_box_start_turns, 1.5);
        assert_eq!(geometry.outer_box_end_turns, 101.5);
        assert_eq!(geometry.total_line_turns, 100.5);
    }

    #[test]
    fn non_positive_line_turns_are_floored() {
        let geometry = SpiralGeometry::new(10.0, 0.0, 50.0);
        assert_eq!(geometry.total_line_turns, 10.0);
        let geometry = SpiralGeometry::new(0.25, 0.0, 5.0);
        assert_eq!(geometry.total_line_turns, 1.0);
    }

    #[test]
    fn turns_distance_round_trip() {
        for line_turns in [0.5, 1.0, 11.0, 101.5] {
            let geometry = SpiralGeometry::new(line_turns, 0.0, 1.0);
            for t in [0.0, 0.1, 1.0, 3.75, 42.0, 1000.0] {
                let back = geometry.distance_to_turns(geometry.turns_to_distance(t));
                assert!((back - t).abs() < EPSILON * t.max(1.0), "t={} back={}", t, back);
            }
        }
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let geometry = SpiralGeometry::new(10.0, 0.0, 0.0);
        assert_eq!(geometry.turns_to_distance(-3.0), 0.0);
        assert_eq!(geometry.distance_to_turns(-3.0), 0.0);
        assert_eq!(geometry.turn_to_polar(-0.5).length(), 0.0);
        assert_eq!(SpiralGeometry::inner_turn(0.4), 0.0);
    }

    #[test]
    fn polar_angle_is_clockwise_from_up() {
        let geometry = SpiralGeometry::new(4.0, 0.0, 1.0);
        let up = geometry.turn_to_polar(4.0);
        assert!((up.x).abs() < EPSILON && (up.y - 1.0).abs() < EPSILON);
        let right = geometry.turn_to_polar(2.25);
        assert!((right.x - 0.5625).abs() < EPSILON && right.y.abs() < EPSILON);
    }

    #[test]
    fn box_arc_width_is_zero_without_days() {
        let geometry = SpiralGeometry::new(10.0, 0.0, 0.0);
        assert_eq!(geometry.box_arc_width(0), 0.0);
        let width = geometry.box_arc_width(365);
        assert!(width > 0.0);
        let last = geometry.outer_turn_for_day(364, width);
        assert!((last - geometry.outer_box_end_turns).abs() < 1e-6);
    }
}
