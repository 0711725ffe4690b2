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

//! # Spiralife
//!
//! Spiralife lays out a calendar as a continuous outward spiral of day cells. Each calendar day
//! becomes one quadrilateral bounded by two turns of a spiral line, and the spiral is stretched
//! from the unit disk onto an arbitrary W×H rectangle so that it fills the whole canvas.
//!
//! Day boundaries are placed at equal arc-length intervals along the spiral line rather than at
//! equal angles, so cells near the center have roughly the same width as cells near the rim.
//!
//! The engine is a pure function of a [SpiralParameters] struct. It returns a
//! [CalendarDisplayList](visualization::prelude::CalendarDisplayList) of drawable primitives
//! which may be serialized by the `spiralife_svg` crate, or rasterized by any other backend.
//!
//! ```no_run
//! use spiralife::prelude::*;
//!
//! let params = SpiralParameters::default();
//! params.validate().unwrap();
//! let display_list = render(&params);
//! println!("{} cells", display_list.cells().len());
//! ```

pub mod calendar;
pub mod params;
pub mod prelude;
pub mod projection;
pub mod spiral;
pub mod visualization;

use thiserror::Error;

pub use crate::{
    calendar::Language,
    params::SpiralParameters,
    visualization::vectorize_spiral::{layout_days, render},
};

/// Default width of the canvas, in `unit`s.
pub const DEFAULT_IMAGE_WIDTH: f64 = 2000.0;
/// Default height of the canvas, in `unit`s.
pub const DEFAULT_IMAGE_HEIGHT: f64 = 1500.0;
/// Roughly one hundred years of days.
pub const DEFAULT_TOTAL_DAYS: usize = 36526;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpiralifeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),
}
