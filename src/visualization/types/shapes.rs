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

//! Basic geometric primitives used by the spiral layout engine and its renderers.
//!
//! Points and lines are generic across numeric types using `num_traits`, although the layout
//! engine itself works exclusively in `f64` so that projected coordinates are stable across
//! very long (century-scale) calendars.

use std::fmt::{self, Display, Formatter};

use num_traits::{Float, Num};

/// A [VizPoint2d] represents a point in 2D space. The layout engine uses a coordinate system
/// with the origin at the center of the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizPoint2d<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default + Display> Display for VizPoint2d<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num + Copy + Default> Default for VizPoint2d<T> {
    fn default() -> Self {
        VizPoint2d {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for VizPoint2d<T> {
    fn from(tuple: (T, T)) -> Self {
        VizPoint2d { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default> VizPoint2d<T> {
    pub fn new(x: T, y: T) -> Self {
        VizPoint2d { x, y }
    }

    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }

    pub fn scale(&self, factor: T) -> VizPoint2d<T> {
        VizPoint2d {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl<T: Float + Default> VizPoint2d<T> {
    /// Distance of the point from the origin.
    #[inline]
    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, other: &VizPoint2d<T>) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Return true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A [VizLine] represents a line segment in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizLine<T> {
    pub start: VizPoint2d<T>,
    pub end:   VizPoint2d<T>,
}

impl<T: Num + Copy + Default> VizLine<T> {
    pub fn new(start: VizPoint2d<T>, end: VizPoint2d<T>) -> VizLine<T> {
        VizLine { start, end }
    }
}

impl<T: Float + Default> VizLine<T> {
    pub fn length(&self) -> T {
        self.start.distance(&self.end)
    }
}

impl<T: Num + Copy + Default> From<(T, T, T, T)> for VizLine<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        VizLine {
            start: VizPoint2d::from((tuple.0, tuple.1)),
            end:   VizPoint2d::from((tuple.2, tuple.3)),
        }
    }
}

/// A [VizRect] represents a rectangle in 2D space. It is generic across numeric types, using
/// `num_traits`.
///
/// The rectangle is defined by two points, the top-left and bottom-right corners.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct VizRect<T: Num + Copy + PartialOrd + Default> {
    pub top_left: VizPoint2d<T>,
    pub bottom_right: VizPoint2d<T>,
}

impl<T: Num + Copy + PartialOrd + Default> VizRect<T> {
    pub fn new(top_left: VizPoint2d<T>, bottom_right: VizPoint2d<T>) -> VizRect<T> {
        VizRect { top_left, bottom_right }
    }

    pub fn from_tuple(top_left: (T, T), bottom_right: (T, T)) -> VizRect<T> {
        VizRect {
            top_left: VizPoint2d::from(top_left),
            bottom_right: VizPoint2d::from(bottom_right),
        }
    }

    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }

    /// Return whether the specified point is within Self
    pub fn contains_point(&self, point: &VizPoint2d<T>) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Return the rectangle as an `(x, y, width, height)` tuple, the form an SVG `viewBox` expects.
    pub fn to_view_box(&self) -> (T, T, T, T) {
        (self.top_left.x, self.top_left.y, self.width(), self.height())
    }
}

impl<T: Float + Default> VizRect<T> {
    /// Create a rectangle of the given size centered on the origin.
    pub fn centered(width: T, height: T) -> VizRect<T> {
        let two = T::one() + T::one();
        VizRect::from_tuple((-width / two, -height / two), (width / two, height / two))
    }
}

/// A [VizQuad] is a closed four-point polygon. For a day cell the corners are, in winding order,
/// the current outer point, the current inner point, the previous inner point and the previous
/// outer point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VizQuad {
    pub outer1: VizPoint2d<f64>,
    pub inner1: VizPoint2d<f64>,
    pub inner2: VizPoint2d<f64>,
    pub outer2: VizPoint2d<f64>,
}

impl VizQuad {
    pub fn new(
        outer1: VizPoint2d<f64>,
        inner1: VizPoint2d<f64>,
        inner2: VizPoint2d<f64>,
        outer2: VizPoint2d<f64>,
    ) -> VizQuad {
        VizQuad {
            outer1,
            inner1,
            inner2,
            outer2,
        }
    }

    /// Corners in winding order.
    #[inline]
    pub fn points(&self) -> [VizPoint2d<f64>; 4] {
        [self.outer1, self.inner1, self.inner2, self.outer2]
    }

    /// Arithmetic mean of the four corners.
    pub fn center(&self) -> VizPoint2d<f64> {
        VizPoint2d::new(
            (self.outer1.x + self.inner1.x + self.inner2.x + self.outer2.x) / 4.0,
            (self.outer1.y + self.inner1.y + self.inner2.y + self.outer2.y) / 4.0,
        )
    }

    /// Return true if any two adjacent corners coincide, including across the closing edge.
    pub fn is_degenerate(&self) -> bool {
        let p = self.points();
        (0..4).any(|i| p[i] == p[(i + 1) % 4])
    }

    pub fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_center_is_mean_of_corners() {
        let quad = VizQuad::new(
            VizPoint2d::new(2.0, 2.0),
            VizPoint2d::new(0.0, 2.0),
            VizPoint2d::new(0.0, 0.0),
            VizPoint2d::new(2.0, 0.0),
        );
        assert_eq!(quad.center(), VizPoint2d::new(1.0, 1.0));
        assert!(!quad.is_degenerate());
    }

    #[test]
    fn quad_with_repeated_corner_is_degenerate() {
        let p = VizPoint2d::new(1.0, 1.0);
        let quad = VizQuad::new(p, VizPoint2d::new(0.0, 0.0), VizPoint2d::new(0.0, 1.0), p);
        assert!(quad.is_degenerate());
    }

    #[test]
    fn centered_rect_view_box() {
        let rect = VizRect::centered(2000.0, 1500.0);
        assert_eq!(rect.to_view_box(), (-1000.0, -750.0, 2000.0, 1500.0));
        assert!(rect.contains_point(&VizPoint2d::new(0.0, 0.0)));
        assert!(!rect.contains_point(&VizPoint2d::new(1001.0, 0.0)));
    }

    #[test]
    fn point_length_and_line_length() {
        assert_eq!(VizPoint2d::new(3.0, 4.0).length(), 5.0);
        let line = VizLine::from((0.0, 0.0, 0.0, 2.0));
        assert_eq!(line.length(), 2.0);
    }
}
