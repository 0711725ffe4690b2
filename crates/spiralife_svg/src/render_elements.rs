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

//! Conversion of individual display list primitives into SVG nodes.

use crate::styles::{ElementStyle, TextStyle};
use spiralife::visualization::prelude::{VizCell, VizColor, VizLabel, VizPoint2d, VizTick};

use svg::node::{
    element::{path::Data, Line, Path, Text},
    Value,
};

pub(crate) fn viz_color_to_value(color: VizColor) -> Value {
    if color.a == 0 {
        // Fully transparent, return 'none' to prevent rendering
        Value::from("none")
    }
    else if color.a < 255 {
        Value::from(format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0 // Alpha normalized to [0.0, 1.0]
        ))
    }
    else {
        Value::from(color.to_hex_string())
    }
}

/// Every coordinate written to the document is narrowed to `f32`, the precision of path data,
/// so ticks and labels line up exactly with the cell corners they share.
#[inline]
fn to_param(point: &VizPoint2d<f64>) -> (f32, f32) {
    (point.x as f32, point.y as f32)
}

/// Render a day cell as a closed four-point path. The cell's own fill overrides `style.fill`.
pub fn svg_render_cell(cell: &VizCell, style: &ElementStyle) -> Path {
    let [outer1, inner1, inner2, outer2] = cell.quad.points();
    let data = Data::new()
        .move_to(to_param(&outer1))
        .line_to(to_param(&inner1))
        .line_to(to_param(&inner2))
        .line_to(to_param(&outer2))
        .close();

    let fill = if cell.fill.a == 0 { style.fill } else { cell.fill };

    Path::new()
        .set("d", data)
        .set("fill", viz_color_to_value(fill))
        .set("stroke", viz_color_to_value(style.stroke))
        .set("stroke-width", style.stroke_width)
}

/// Render a tick as a stroke-only line.
pub fn svg_render_tick(tick: &VizTick) -> Line {
    let (x1, y1) = to_param(&tick.line.start);
    let (x2, y2) = to_param(&tick.line.end);
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", viz_color_to_value(tick.color))
        .set("stroke-width", tick.width)
}

/// Render a label as a text node translated to its position and rotated about it.
pub fn svg_render_label(label: &VizLabel, style: &TextStyle) -> Text {
    let (x, y) = to_param(&label.position);
    Text::new(label.text.clone())
        .set("transform", format!("translate({}, {}) rotate({:.3})", x, y, label.rotation))
        .set("font-size", label.font_size)
        .set("fill", viz_color_to_value(label.color))
        .set("font-family", style.font_family.as_str())
        .set("text-anchor", style.text_anchor.as_str())
        .set("dominant-baseline", style.dominant_baseline.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiralife::prelude::{parse_date, render, SpiralParameters};

    #[test]
    fn color_values() {
        assert_eq!(viz_color_to_value(VizColor::TRANSPARENT).to_string(), "none");
        assert_eq!(viz_color_to_value(VizColor::from_rgb8(255, 100, 15)).to_string(), "#ff640f");
        assert_eq!(
            viz_color_to_value(VizColor::from_rgba8(0, 0, 0, 51)).to_string(),
            "rgba(0, 0, 0, 0.200)"
        );
    }

    #[test]
    fn tick_endpoints_match_cell_corners() {
        // A wide canvas puts coordinates where f32 and f64 formatting differ.
        let params = SpiralParameters {
            width: 123_456.789,
            height: 98_765.4321,
            start_date: parse_date("2001-01-01").unwrap(),
            total_days: 40,
            total_turns: 3.0,
            ..Default::default()
        };
        let display_list = render(&params);
        let style = ElementStyle::default();

        for tick in display_list.ticks() {
            let cell = &display_list.cells()[tick.day.index];
            let path = svg_render_cell(cell, &style).to_string();
            let line = svg_render_tick(tick).to_string();

            let (x1, y1) = to_param(&cell.quad.outer2);
            let (x2, y2) = to_param(&cell.quad.inner2);
            for (attr, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
                assert!(line.contains(&format!("{}=\"{}\"", attr, value)), "{} in {}", attr, line);
                assert!(path.contains(&value.to_string()), "{} not in {}", value, path);
            }
        }
        assert!(!display_list.ticks().is_empty());
    }
}
