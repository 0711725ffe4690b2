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

//! spiralife
//!
//! Command line front end for the spiralife spiral calendar engine. Reads options from the
//! command line and an optional TOML settings file, renders the calendar and saves it as SVG.

mod args;
mod config;

use anyhow::{Context, Error};
use spiralife_svg::prelude::*;

use crate::{
    args::{opts, CliOptions},
    config::{build_parameters, load_settings, resolve_out_file, SettingsFile},
};

fn main() {
    // Get the command line options.
    let opts = opts().run();

    if opts.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    }
    else {
        env_logger::init();
    }

    if let Err(e) = run(&opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: &CliOptions) -> Result<(), Error> {
    let settings = match &opts.config {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            load_settings(path)?
        }
        None => SettingsFile::default(),
    };

    let params = build_parameters(opts, &settings)?;
    let out_file = resolve_out_file(opts, &settings);

    let render_timer = std::time::Instant::now();
    let display_list = spiralife::render(&params);
    log::debug!(
        "Layout of {} days took {:.3}ms",
        params.total_days,
        render_timer.elapsed().as_secs_f64() * 1000.0
    );

    println!("Saving SVG to {}...", out_file.display());
    SvgRenderer::new()
        .save(&display_list, &out_file)
        .with_context(|| format!("Couldn't write {}", out_file.display()))?;

    Ok(())
}
