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

//! # spiralife_svg
//!
//! A library crate that serializes a spiralife
//! [CalendarDisplayList](spiralife::visualization::prelude::CalendarDisplayList) into an SVG
//! document using the `svg` crate.
//!
//! The produced document's coordinate origin is the center of the canvas, so the `viewBox` is
//! offset by half the canvas size. Width, height and unit are passed through from the display list
//! unchanged.
//!
//! ```no_run
//! use spiralife::prelude::*;
//! use spiralife_svg::prelude::*;
//!
//! let display_list = render(&SpiralParameters::default());
//! SvgRenderer::new().save(&display_list, "calendar.svg").unwrap();
//! ```

pub mod prelude;
pub mod render_display_list;
pub mod render_elements;
pub mod renderer;
pub mod styles;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_CELL_STROKE_WIDTH: f64 = 0.5;
