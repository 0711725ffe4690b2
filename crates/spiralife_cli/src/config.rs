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

//! Settings file support. A settings file is a TOML document holding any of the command line
//! options, plus the color tables, which can only be given in a file.
//!
//! ```toml
//! width = 1000
//! start = 2024-01-01
//! language = "fr"
//! background = "#202020"
//! special_day_color = [255, 0, 255]
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use chrono::NaiveDate;
use serde::Deserialize;
use spiralife::prelude::*;

use crate::args::{normalize_out_file, CliOptions, DEFAULT_OUT_FILE};

// Deserialize colors as either a string or an [r, g, b] array
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum ConfigColor {
    Text(String),
    Channels(Vec<i64>),
}

impl ConfigColor {
    fn to_viz_color(&self) -> Result<VizColor, SpiralifeError> {
        match self {
            ConfigColor::Text(text) => text.parse(),
            ConfigColor::Channels(channels) => VizColor::from_channels(channels)
                .ok_or_else(|| SpiralifeError::InvalidColor(format!("{:?}", channels))),
        }
    }
}

// Dates may be given as a quoted string or as a bare TOML date
fn config_date(value: &toml::Value) -> Result<NaiveDate, SpiralifeError> {
    match value {
        toml::Value::String(text) => parse_date(text),
        toml::Value::Datetime(datetime) => parse_date(&datetime.to_string()),
        other => Err(SpiralifeError::InvalidDate(other.to_string())),
    }
}

/// The contents of a settings file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct SettingsFile {
    out_file: Option<PathBuf>,
    width: Option<f64>,
    height: Option<f64>,
    unit: Option<String>,
    start: Option<toml::Value>,
    days: Option<usize>,
    turns: Option<f64>,
    empty_turns: Option<f64>,
    additional_turns: Option<f64>,
    special: Option<toml::Value>,
    language: Option<String>,
    background: Option<ConfigColor>,
    weekday_colors: Option<Vec<Vec<i64>>>,
    month_colors: Option<Vec<Vec<i64>>>,
    special_day_color: Option<Vec<i64>>,
}

pub(crate) fn parse_settings(text: &str) -> Result<SettingsFile, Error> {
    let settings: SettingsFile = toml::from_str(text)?;
    Ok(settings)
}

pub(crate) fn load_settings(path: impl AsRef<Path>) -> Result<SettingsFile, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("Couldn't read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("Couldn't parse settings file {}", path.display()))
}

/// Resolve the output path. Precedence is command line, then settings file, then the default.
pub(crate) fn resolve_out_file(opts: &CliOptions, settings: &SettingsFile) -> PathBuf {
    let path = opts
        .out_file
        .clone()
        .or_else(|| settings.out_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));
    normalize_out_file(path)
}

/// Merge the command line with a settings file into [SpiralParameters]. Precedence is command
/// line, then settings file, then the library defaults. The result is validated.
pub(crate) fn build_parameters(opts: &CliOptions, settings: &SettingsFile) -> Result<SpiralParameters, Error> {
    let defaults = SpiralParameters::default();

    let start_date = match (opts.start, &settings.start) {
        (Some(date), _) => date,
        (None, Some(value)) => config_date(value).context("Invalid start date in settings file")?,
        (None, None) => defaults.start_date,
    };
    let special_date = match (opts.special, &settings.special) {
        (Some(date), _) => date,
        (None, Some(value)) => config_date(value).context("Invalid special date in settings file")?,
        (None, None) => defaults.special_date,
    };

    let language = opts
        .language
        .or_else(|| settings.language.as_deref().map(Language::from_code))
        .unwrap_or(defaults.language);

    let background = match (opts.background, &settings.background) {
        (Some(color), _) => color,
        (None, Some(color)) => color.to_viz_color().context("Invalid background color in settings file")?,
        (None, None) => defaults.colors.background,
    };

    let colors = ColorScheme::from_lists(
        settings.weekday_colors.as_deref(),
        settings.month_colors.as_deref(),
        settings.special_day_color.as_deref(),
    )
    .with_background(background);

    let params = SpiralParameters {
        width: opts.width.or(settings.width).unwrap_or(defaults.width),
        height: opts.height.or(settings.height).unwrap_or(defaults.height),
        unit: opts
            .unit
            .clone()
            .or_else(|| settings.unit.clone())
            .unwrap_or(defaults.unit),
        start_date,
        total_days: opts.days.or(settings.days).unwrap_or(defaults.total_days),
        total_turns: opts.turns.or(settings.turns).unwrap_or(defaults.total_turns),
        empty_turns: opts.empty_turns.or(settings.empty_turns).unwrap_or(defaults.empty_turns),
        additional_turns: opts
            .additional_turns
            .or(settings.additional_turns)
            .unwrap_or(defaults.additional_turns),
        special_date,
        language,
        colors,
        annotations: defaults.annotations,
    };

    params.validate().context("Invalid calendar parameters")?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_options() -> CliOptions {
        CliOptions {
            config: None,
            out_file: None,
            width: None,
            height: None,
            unit: None,
            start: None,
            days: None,
            turns: None,
            empty_turns: None,
            additional_turns: None,
            special: None,
            language: None,
            background: None,
            debug: false,
        }
    }

    #[test]
    fn defaults_without_settings() {
        let params = build_parameters(&no_options(), &SettingsFile::default()).unwrap();
        assert_eq!(params, SpiralParameters::default());
        assert_eq!(
            resolve_out_file(&no_options(), &SettingsFile::default()),
            PathBuf::from("calendar.svg")
        );
    }

    #[test]
    fn command_line_overrides_file() {
        let settings = parse_settings(
            r##"
            width = 1200
            height = 900
            start = 2024-01-01
            special = "1990-06-15"
            language = "fr"
            background = "#202020"
            out_file = "from_file"
            "##,
        )
        .unwrap();

        let opts = CliOptions {
            width: Some(640.0),
            out_file: Some(PathBuf::from("from_flag.svg")),
            ..no_options()
        };
        let params = build_parameters(&opts, &settings).unwrap();

        assert_eq!(params.width, 640.0);
        assert_eq!(params.height, 900.0);
        assert_eq!(params.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(params.special_date, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(params.language, Language::Fr);
        assert_eq!(params.colors.background, VizColor::from_rgb8(0x20, 0x20, 0x20));
        assert_eq!(resolve_out_file(&opts, &settings), PathBuf::from("from_flag.svg"));
        assert_eq!(resolve_out_file(&no_options(), &settings), PathBuf::from("from_file.svg"));
    }

    #[test]
    fn color_tables_from_file() {
        let settings = parse_settings(
            r#"
            weekday_colors = [[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4], [5, 5, 5], [6, 6, 6]]
            month_colors = [[1, 2, 3]]
            special_day_color = [255, 0, 255]
            background = [10, 20, 30]
            "#,
        )
        .unwrap();
        let params = build_parameters(&no_options(), &settings).unwrap();

        assert_eq!(params.colors.weekday_colors[6], VizColor::from_rgb8(6, 6, 6));
        // Wrong length falls back to the defaults
        assert_eq!(params.colors.month_colors, ColorScheme::default().month_colors);
        assert_eq!(params.colors.special_day_color, VizColor::from_rgb8(255, 0, 255));
        assert_eq!(params.colors.background, VizColor::from_rgb8(10, 20, 30));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let settings = parse_settings("start = \"2024-13-01\"").unwrap();
        assert!(build_parameters(&no_options(), &settings).is_err());

        let settings = parse_settings("special = 12").unwrap();
        assert!(build_parameters(&no_options(), &settings).is_err());

        let settings = parse_settings("width = nan").unwrap();
        assert!(build_parameters(&no_options(), &settings).is_err());

        let settings = parse_settings("background = [0, 0, 256]").unwrap();
        assert!(build_parameters(&no_options(), &settings).is_err());

        assert!(parse_settings("width = \"wide\"").is_err());
    }

    #[test]
    fn unknown_language_in_file_falls_back() {
        let settings = parse_settings("language = \"tlh\"").unwrap();
        let params = build_parameters(&no_options(), &settings).unwrap();
        assert_eq!(params.language, Language::En);
    }

    #[test]
    fn load_settings_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "days = 365\nturns = 10").unwrap();
        let settings = load_settings(file.path()).unwrap();
        let params = build_parameters(&no_options(), &settings).unwrap();
        assert_eq!(params.total_days, 365);
        assert_eq!(params.total_turns, 10.0);

        assert!(load_settings("/nonexistent/spiralife.toml").is_err());
    }
}
