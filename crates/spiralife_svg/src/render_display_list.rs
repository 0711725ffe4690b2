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

use crate::{
    render_elements::*,
    styles::{ElementStyle, TextStyle},
};

use spiralife::visualization::prelude::{CalendarDisplayList, VizRect};
use svg::node::element::{Group, Rectangle};

/// Render a rectangle covering the whole view box, filled with the display list's background.
pub fn render_background(view_box: &VizRect<f64>, display_list: &CalendarDisplayList) -> Rectangle {
    let (x, y, width, height) = view_box.to_view_box();
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", viz_color_to_value(display_list.background))
}

pub fn render_cells_as_svg(display_list: &CalendarDisplayList, style: &ElementStyle) -> Group {
    let mut group = Group::new().set("id", "cells");
    for cell in display_list.cells() {
        group = group.add(svg_render_cell(cell, style));
    }
    group
}

pub fn render_ticks_as_svg(display_list: &CalendarDisplayList) -> Group {
    let mut group = Group::new().set("id", "ticks");
    for tick in display_list.ticks() {
        group = group.add(svg_render_tick(tick));
    }
    group
}

/// Render ordinary labels, then special-day markers, so that markers end up on top.
pub fn render_texts_as_svg(display_list: &CalendarDisplayList, style: &TextStyle) -> Group {
    let mut group = Group::new().set("id", "texts");
    for label in display_list.texts() {
        group = group.add(svg_render_label(label, style));
    }
    group
}
