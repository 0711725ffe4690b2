mod common;

use common::*;
use spiralife::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_cell_count_and_order() {
    init();
    let params = SpiralParameters {
        total_days: 3660,
        ..Default::default()
    };
    params.validate().unwrap();
    let display_list = render(&params);

    assert_eq!(display_list.cells().len(), 3660);
    for (i, cell) in display_list.cells().iter().enumerate() {
        assert_eq!(cell.day.index, i);
        assert!(!cell.quad.is_degenerate(), "cell {} is degenerate: {:?}", i, cell.quad);
        assert!(cell.quad.is_finite());
    }
    assert_eq!(display_list.cells()[0].day.date, date(2000, 1, 1));
    assert_eq!(display_list.cells()[3659].day.date, date(2010, 1, 7));
}

#[test]
fn test_default_calendar_spans_a_century() {
    init();
    let params = SpiralParameters::default();
    let display_list = render(&params);
    assert_eq!(display_list.cells().len(), params.total_days);
    assert_eq!(display_list.cells().last().unwrap().day.date, date(2100, 1, 1));
    assert_eq!((display_list.width, display_list.height), (2000.0, 1500.0));
    assert_eq!(display_list.unit, "px");
}

#[test]
fn test_one_year_end_to_end() {
    init();
    let params = one_year_params();
    params.validate().unwrap();

    let cells: Vec<DayCell> = layout_days(&params).collect();
    assert_eq!(cells.len(), 365);

    let first = &cells[0];
    let last = &cells[364];
    assert_close(first.turn_outer_start, 1.0, EPSILON);
    assert_close(last.turn_outer_end, 11.0, 1e-9);

    // Day cells cover the outer turns 1 to 11, plus the one turn their inner edges trail behind.
    let span: f64 = cells.iter().map(|c| c.turn_outer_end - c.turn_outer_start).sum();
    assert_close(span, 10.0, 1e-9);
    assert_eq!(SpiralGeometry::inner_turn(first.turn_outer_start), 0.0);

    // Nothing reaches past the reference circle, so everything stays on the canvas.
    let canvas = VizRect::centered(1000.0 + 1e-6, 1000.0 + 1e-6);
    for cell in &cells {
        for point in cell.quad.points() {
            assert!(canvas.contains_point(&point), "{} is outside the canvas", point);
        }
    }

    // The last leading edge ends straight up, on the top border.
    assert_close(last.quad.outer1.x, 0.0, 1e-6);
    assert_close(last.quad.outer1.y, 500.0, 1e-6);
}

#[test]
fn test_cells_have_equal_arc_width() {
    init();
    let params = one_year_params();
    let days = layout_days(&params);
    let geometry = *days.geometry();
    let width = days.box_arc_width();
    assert_eq!(geometry, SpiralGeometry::from_params(&params));
    assert_close(width, geometry.box_arc_width(params.total_days), 1e-12);

    for cell in days {
        let arc = geometry.turns_to_distance(cell.turn_outer_end) - geometry.turns_to_distance(cell.turn_outer_start);
        assert_close(arc, width, 1e-6);
    }
}

#[test]
fn test_degenerate_turns_are_floored() {
    init();
    let params = SpiralParameters {
        total_days: 500,
        total_turns: 3.0,
        empty_turns: 0.0,
        additional_turns: 50.0,
        ..Default::default()
    };
    let geometry = SpiralGeometry::from_params(&params);
    assert_eq!(geometry.total_line_turns, 3.0);

    let display_list = render(&params);
    assert_eq!(display_list.cells().len(), 500);
    assert!(display_list.cells().iter().all(|c| c.quad.is_finite()));
    assert!(display_list.ticks().iter().all(|t| t.line.start.is_finite() && t.line.end.is_finite()));
    assert!(display_list.texts().all(|l| l.position.is_finite() && l.rotation.is_finite()));
}

#[test]
fn test_zero_days() {
    init();
    let params = SpiralParameters {
        total_days: 0,
        ..Default::default()
    };
    assert!(params.validate().is_err());

    let display_list = render(&params);
    assert!(display_list.is_empty());
    assert_eq!(display_list.iter().count(), 0);
    assert_eq!(display_list.background, VizColor::BLACK);
}

#[test]
fn test_layout_is_deterministic() {
    init();
    let params = one_year_params();
    assert_eq!(render(&params), render(&params));
}
