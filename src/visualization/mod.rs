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

//! # Spiralife Visualization
//! The `visualization` module turns [SpiralParameters](crate::SpiralParameters) into drawable
//! primitives.
//!
//! The calendar is first laid out on the unit disk. Angle 0 points "up" and the angle increases
//! clockwise, matching the way a clock face or a printed calendar page is read. Every point is
//! then projected onto the canvas rectangle by [project_point_within_circle_to_rectangle](crate::projection::project_point_within_circle_to_rectangle).
//!
//! ## Output
//!
//! [render](vectorize_spiral::render) returns a [CalendarDisplayList](types::display_list::CalendarDisplayList),
//! which may be serialized to SVG with the `spiralife_svg` crate, or drawn by any other backend.
//! The display list's coordinate origin is the center of the canvas.

pub mod palette;
pub mod prelude;
pub mod types;
pub mod vectorize_spiral;
