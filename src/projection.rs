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

//! Projection of points from the unit disk onto a rectangle centered at the origin.
//!
//! A spiral is naturally round, but a calendar is printed on a rectangular page. Rather than
//! leaving the corners of the page empty, points are blended between two mappings based on their
//! distance from the origin:
//!
//! - The *inscribed* mapping scales the disk uniformly so that the unit circle touches the shorter
//!   sides of the rectangle. Near the origin the spiral stays circular.
//! - The *edge* mapping pushes a point along its ray from the origin until it meets the border of
//!   the rectangle. At the unit circle the spiral follows the rectangle outline.
//!
//! The blend factor is the distance from the origin itself, so the mapping is continuous and
//! points beyond the unit circle extrapolate past the rectangle border.

use crate::visualization::types::shapes::VizPoint2d;

/// Linearly interpolate between `p1` and `p2` by `factor`. A factor of 0 returns `p1` and a factor
/// of 1 returns `p2`. Factors outside that range extrapolate along the same line.
#[inline]
pub fn lerp_points(p1: VizPoint2d<f64>, p2: VizPoint2d<f64>, factor: f64) -> VizPoint2d<f64> {
    VizPoint2d::new(p1.x + (p2.x - p1.x) * factor, p1.y + (p2.y - p1.y) * factor)
}

/// Project `point` from the origin onto the border of a `width` × `height` rectangle centered at
/// the origin. The origin itself maps to the origin.
pub fn project_point_to_rectangle_edges(point: VizPoint2d<f64>, width: f64, height: f64) -> VizPoint2d<f64> {
    if point.x == 0.0 && point.y == 0.0 {
        return VizPoint2d::new(0.0, 0.0);
    }
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    // Whichever side the ray from the origin hits first determines the scale.
    let scale = if point.x.abs() / half_width > point.y.abs() / half_height {
        half_width / point.x.abs()
    }
    else {
        half_height / point.y.abs()
    };

    point.scale(scale)
}

/// Map a point in (or slightly beyond) the unit disk to a `width` × `height` rectangle centered at
/// the origin, blending the inscribed-circle mapping with the edge mapping by the point's distance
/// from the origin.
///
/// `width` and `height` must be positive; this is guaranteed by
/// [SpiralParameters::validate](crate::SpiralParameters::validate).
pub fn project_point_within_circle_to_rectangle(point: VizPoint2d<f64>, width: f64, height: f64) -> VizPoint2d<f64> {
    if point.x == 0.0 && point.y == 0.0 {
        return VizPoint2d::new(0.0, 0.0);
    }

    let edge = project_point_to_rectangle_edges(point, width, height);
    let inscribed_radius = width.min(height) / 2.0;
    let distance = point.length();

    let inscribed = point.scale(inscribed_radius);
    lerp_points(inscribed, edge.scale(distance), distance)
}
