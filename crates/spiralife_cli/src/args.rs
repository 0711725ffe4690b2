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

//! Argument parsers for the spiralife command line tool.

use std::path::PathBuf;

use bpaf::*;
use chrono::NaiveDate;
use spiralife::{params::parse_date, visualization::prelude::VizColor, Language};

pub(crate) const DEFAULT_OUT_FILE: &str = "calendar.svg";

/// Options given on the command line. Anything left unset may be supplied by a settings file.
#[derive(Clone, Debug)]
pub(crate) struct CliOptions {
    pub(crate) config: Option<PathBuf>,
    pub(crate) out_file: Option<PathBuf>,
    pub(crate) width: Option<f64>,
    pub(crate) height: Option<f64>,
    pub(crate) unit: Option<String>,
    pub(crate) start: Option<NaiveDate>,
    pub(crate) days: Option<usize>,
    pub(crate) turns: Option<f64>,
    pub(crate) empty_turns: Option<f64>,
    pub(crate) additional_turns: Option<f64>,
    pub(crate) special: Option<NaiveDate>,
    pub(crate) language: Option<Language>,
    pub(crate) background: Option<VizColor>,
    pub(crate) debug: bool,
}

/// Parse a `YYYY-MM-DD` date, or the word `today`.
pub(crate) fn parse_cli_date(input: &str) -> Result<NaiveDate, String> {
    if input.trim().eq_ignore_ascii_case("today") {
        return Ok(chrono::Local::now().date_naive());
    }
    parse_date(input).map_err(|e| e.to_string())
}

/// Make sure the output filename ends in `.svg`, appending the extension if it is missing.
pub(crate) fn normalize_out_file(path: PathBuf) -> PathBuf {
    let has_svg_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if has_svg_extension {
        path
    }
    else {
        let mut name = path.into_os_string();
        name.push(".svg");
        PathBuf::from(name)
    }
}

fn date_parser(name: &'static str, metavar: &'static str, help: &'static str) -> impl Parser<Option<NaiveDate>> {
    long(name)
        .argument::<String>(metavar)
        .help(help)
        .parse(|s| parse_cli_date(&s))
        .optional()
}

fn positive_f64(name: &'static str, metavar: &'static str, help: &'static str) -> impl Parser<Option<f64>> {
    long(name)
        .argument::<f64>(metavar)
        .help(help)
        .guard(|&v| v.is_finite() && v > 0.0, "Value must be a positive number")
        .optional()
}

fn finite_f64(name: &'static str, metavar: &'static str, help: &'static str) -> impl Parser<Option<f64>> {
    long(name)
        .argument::<f64>(metavar)
        .help(help)
        .guard(|&v| v.is_finite(), "Value must be a finite number")
        .optional()
}

pub(crate) fn opts() -> OptionParser<CliOptions> {
    let config = long("config")
        .short('c')
        .argument::<PathBuf>("CONFIG_FILE")
        .help("Path to a TOML settings file")
        .optional();

    let out_file = long("out_file")
        .short('o')
        .argument::<PathBuf>("OUTPUT_FILE")
        .help("Path to output SVG file. Default: calendar.svg")
        .optional();

    let width = positive_f64("width", "WIDTH", "Width of the image. Default: 2000");
    let height = positive_f64("height", "HEIGHT", "Height of the image. Default: 1500");

    let unit = long("unit")
        .argument::<String>("UNIT")
        .help("Unit of the image size, such as px or mm. Default: px")
        .optional();

    let start = date_parser(
        "start",
        "START_DATE",
        "Date of the first day cell, as YYYY-MM-DD or 'today'. Default: 2000-01-01",
    );

    let days = long("days")
        .argument::<usize>("DAYS")
        .help("Number of days to draw. Default: 36526")
        .guard(|&days| days > 0, "Day count must be positive")
        .optional();

    let turns = positive_f64("turns", "TURNS", "Number of spiral turns spanned by the days. Default: 100");
    let empty_turns = finite_f64(
        "empty_turns",
        "EMPTY_TURNS",
        "Turns of empty spiral in the middle. Default: 0.5",
    )
    .guard(|v| v.map(|v| v >= 0.0).unwrap_or(true), "Empty turns must not be negative");
    let additional_turns = finite_f64(
        "additional_turns",
        "ADDITIONAL_TURNS",
        "Turns the last day extends past the border. Default: 1",
    );

    let special = date_parser(
        "special",
        "SPECIAL_DATE",
        "A date highlighted every year, such as a birthday, as YYYY-MM-DD. Default: 2000-01-01",
    );

    let language = long("language")
        .argument::<String>("LANGUAGE")
        .help("Language of the month names: en, de, fr or es. Default: en")
        .parse(|s| Language::parse_code(&s))
        .optional();

    let background = long("background")
        .argument::<String>("COLOR")
        .help("Background color as #RRGGBB, #RGB or R,G,B. Default: #000000")
        .parse(|s| s.parse::<VizColor>())
        .optional();

    let debug = long("debug").short('d').help("Enable debug logging").switch();

    construct!(CliOptions {
        config,
        out_file,
        width,
        height,
        unit,
        start,
        days,
        turns,
        empty_turns,
        additional_turns,
        special,
        language,
        background,
        debug,
    })
    .to_options()
    .version(env!("CARGO_PKG_VERSION"))
    .descr("Render a calendar as a spiral of day cells, saved as an SVG image.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_file_gets_svg_extension() {
        assert_eq!(normalize_out_file(PathBuf::from("cal")), PathBuf::from("cal.svg"));
        assert_eq!(normalize_out_file(PathBuf::from("cal.SVG")), PathBuf::from("cal.SVG"));
        assert_eq!(normalize_out_file(PathBuf::from("cal.2024")), PathBuf::from("cal.2024.svg"));
    }

    #[test]
    fn parses_command_line() {
        let opts = opts()
            .run_inner(&["--width", "800", "--start", "2001-01-01", "--language", "DE", "-o", "out"])
            .unwrap();
        assert_eq!(opts.width, Some(800.0));
        assert_eq!(opts.start, NaiveDate::from_ymd_opt(2001, 1, 1));
        assert_eq!(opts.language, Some(Language::De));
        assert_eq!(opts.out_file, Some(PathBuf::from("out")));
        assert_eq!(opts.height, None);
        assert!(!opts.debug);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(opts().run_inner(&["--width", "-5"]).is_err());
        assert!(opts().run_inner(&["--width", "NaN"]).is_err());
        assert!(opts().run_inner(&["--start", "2001-13-01"]).is_err());
        assert!(opts().run_inner(&["--language", "xx"]).is_err());
        assert!(opts().run_inner(&["--background", "#12"]).is_err());
        assert!(opts().run_inner(&["--days", "0"]).is_err());
        assert!(opts().run_inner(&["--empty_turns", "-1"]).is_err());
    }
}
