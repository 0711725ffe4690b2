use spiralife::prelude::*;
use spiralife_svg::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_calendar() -> CalendarDisplayList {
    let params = SpiralParameters {
        width: 1000.0,
        height: 800.0,
        unit: "mm".to_string(),
        start_date: parse_date("2001-01-01").unwrap(),
        total_days: 62,
        total_turns: 4.0,
        ..Default::default()
    };
    params.validate().unwrap();
    render(&params)
}

#[test]
fn test_document_root_attributes() {
    init();
    let markup = SvgRenderer::new().render_to_string(&small_calendar());

    assert!(markup.contains(r#"width="1000mm""#), "{}", &markup[..200]);
    assert!(markup.contains(r#"height="800mm""#));
    assert!(markup.contains(r#"viewBox="-500 -400 1000 800""#));
    assert!(markup.contains(r#"baseProfile="full""#));
    assert!(markup.contains(r##"fill="#000000""##));
}

#[test]
fn test_one_path_per_cell() {
    init();
    let display_list = small_calendar();
    let markup = SvgRenderer::new().render_to_string(&display_list);

    assert_eq!(markup.matches("<path").count(), display_list.cells().len());
    assert_eq!(markup.matches("<line").count(), display_list.ticks().len());
    assert_eq!(
        markup.matches("<text").count(),
        display_list.labels().len() + display_list.special_markers().len()
    );
}

#[test]
fn test_groups_are_in_draw_order() {
    init();
    let markup = SvgRenderer::new().render_to_string(&small_calendar());
    let cells = markup.find(r#"id="cells""#).unwrap();
    let ticks = markup.find(r#"id="ticks""#).unwrap();
    let texts = markup.find(r#"id="texts""#).unwrap();
    assert!(cells < ticks && ticks < texts);
}

#[test]
fn test_text_attributes() {
    init();
    let markup = SvgRenderer::new()
        .with_font_family("serif")
        .render_to_string(&small_calendar());

    assert!(markup.contains(r#"font-family="serif""#));
    assert!(markup.contains(r#"text-anchor="middle""#));
    assert!(markup.contains(r#"dominant-baseline="central""#));
    assert!(markup.contains("rotate("));
}

#[test]
fn test_annotations_can_be_disabled() {
    init();
    let display_list = small_calendar();
    let markup = SvgRenderer::new()
        .with_annotations(false)
        .with_background(false)
        .render_to_string(&display_list);

    assert_eq!(markup.matches("<path").count(), display_list.cells().len());
    assert!(!markup.contains("<line"));
    assert!(!markup.contains("<text"));
    assert!(!markup.contains("<rect"));
}

#[test]
fn test_cell_outline_style() {
    init();
    let markup = SvgRenderer::new()
        .with_cell_style(ElementStyle {
            fill: VizColor::TRANSPARENT,
            stroke: VizColor::from_rgb8(255, 0, 0),
            stroke_width: 0.25,
        })
        .render_to_string(&small_calendar());

    assert!(markup.contains(r##"stroke="#ff0000""##));
    assert!(markup.contains(r#"stroke-width="0.25""#));
}

#[test]
fn test_empty_calendar_has_background_only() {
    init();
    let params = SpiralParameters {
        total_days: 0,
        ..Default::default()
    };
    let markup = SvgRenderer::new().render_to_string(&render(&params));
    assert_eq!(markup.matches("<rect").count(), 1);
    assert!(!markup.contains("<path"));
}

#[test]
fn test_save_writes_file() {
    init();
    let path = std::env::temp_dir().join(format!("spiralife_svg_test_{}.svg", std::process::id()));
    SvgRenderer::new().save(&small_calendar(), &path).unwrap();
    let markup = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(markup.starts_with("<svg") || markup.contains("<svg"));
}
