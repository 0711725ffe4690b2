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

use std::path::Path;

use spiralife::visualization::prelude::CalendarDisplayList;
use svg::Document;
use web_time::Instant;

use crate::{
    render_display_list::{render_background, render_cells_as_svg, render_texts_as_svg, render_ticks_as_svg},
    styles::{ElementStyle, TextStyle},
};

/// Builder for SVG documents. The renderer holds only styling options, so a single instance may
/// render any number of display lists.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    // Outline style for day cells. The fill of each cell comes from the display list.
    cell_style: ElementStyle,
    // Attributes applied to every text node.
    text_style: TextStyle,
    // Whether to emit the background rectangle.
    render_background: bool,
    // Whether to emit ticks and labels. If false, only the cells are rendered.
    render_annotations: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            cell_style: ElementStyle::default(),
            text_style: TextStyle::default(),
            render_background: true,
            render_annotations: true,
        }
    }

    /// Set the outline style of the day cells.
    pub fn with_cell_style(mut self, style: ElementStyle) -> Self {
        self.cell_style = style;
        self
    }

    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn with_font_family(mut self, font_family: &str) -> Self {
        self.text_style.font_family = font_family.to_string();
        self
    }

    /// Set a flag to render the background rectangle. Disabling it produces a transparent
    /// background.
    pub fn with_background(mut self, state: bool) -> Self {
        self.render_background = state;
        self
    }

    /// Set a flag to render ticks, labels and special-day markers on top of the cells.
    pub fn with_annotations(mut self, state: bool) -> Self {
        self.render_annotations = state;
        self
    }

    /// Render `display_list` into a new SVG [Document].
    pub fn render(&self, display_list: &CalendarDisplayList) -> Document {
        let render_timer = Instant::now();
        let view_box = display_list.view_box();

        let mut document = Document::new()
            .set("width", format!("{}{}", display_list.width, display_list.unit))
            .set("height", format!("{}{}", display_list.height, display_list.unit))
            .set("viewBox", view_box.to_view_box())
            .set("version", "1.1")
            .set("baseProfile", "full");

        if self.render_background {
            document = document.add(render_background(&view_box, display_list));
        }

        document = document.add(render_cells_as_svg(display_list, &self.cell_style));
        log::trace!(
            "render(): Rendered {} cells in {:.3}ms",
            display_list.cells().len(),
            render_timer.elapsed().as_secs_f64() * 1000.0
        );

        if self.render_annotations {
            document = document
                .add(render_ticks_as_svg(display_list))
                .add(render_texts_as_svg(display_list, &self.text_style));
        }

        log::trace!(
            "render(): Rendered {} primitives in {:.3}ms",
            display_list.len(),
            render_timer.elapsed().as_secs_f64() * 1000.0
        );
        document
    }

    /// Render `display_list` and return the SVG markup as a string.
    pub fn render_to_string(&self, display_list: &CalendarDisplayList) -> String {
        self.render(display_list).to_string()
    }

    /// Render `display_list` and write it to the file at `path`.
    pub fn save(&self, display_list: &CalendarDisplayList, path: impl AsRef<Path>) -> std::io::Result<()> {
        let document = self.render(display_list);
        log::debug!("save(): Writing SVG to {}", path.as_ref().display());
        svg::save(path, &document)
    }
}
