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

//! Styles applied by the SVG renderer that are not part of the display list itself.

use crate::{DEFAULT_CELL_STROKE_WIDTH, DEFAULT_FONT_FAMILY};
use spiralife::visualization::prelude::VizColor;

/// Define style attributes for SVG elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementStyle {
    /// The color to fill the element with. Day cells carry their own fill, which takes precedence.
    pub fill: VizColor,
    /// The color to use to stroke the element path. If no stroke is desired, use `VizColor::TRANSPARENT`
    /// or set stroke_width to 0.0.
    pub stroke: VizColor,
    pub stroke_width: f64,
}

impl Default for ElementStyle {
    /// The default style is the outline drawn around each day cell: a black hairline.
    fn default() -> Self {
        ElementStyle {
            fill: VizColor::TRANSPARENT,
            stroke: VizColor::BLACK,
            stroke_width: DEFAULT_CELL_STROKE_WIDTH,
        }
    }
}

/// Attributes shared by every text node. Labels are always centered on their anchor point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub text_anchor: String,
    pub dominant_baseline: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            text_anchor: "middle".to_string(),
            dominant_baseline: "central".to_string(),
        }
    }
}
