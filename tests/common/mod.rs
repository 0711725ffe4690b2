#![allow(dead_code)]

use spiralife::prelude::*;

pub const EPSILON: f64 = 1e-9;

pub fn date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (±{}), got {}",
        expected,
        tolerance,
        actual
    );
}

/// One year of 2001 on ten turns of a square canvas.
pub fn one_year_params() -> SpiralParameters {
    SpiralParameters {
        width: 1000.0,
        height: 1000.0,
        start_date: date(2001, 1, 1),
        total_days: 365,
        total_turns: 10.0,
        empty_turns: 0.0,
        additional_turns: 0.0,
        ..Default::default()
    }
}
