use approx::assert_relative_eq;
use chrono::NaiveDate;
use fx_chart::api::{ChartEngine, ChartEngineConfig, EMPTY_CHART_MESSAGE, RenderStyle};
use fx_chart::core::HistoricalPoint;
use fx_chart::fx::mock_history;
use fx_chart::interaction::ContainerRect;
use fx_chart::render::{Color, NullRenderer, TextAnchor};

fn five_points() -> Vec<HistoricalPoint> {
    [1.0, 2.0, 1.5, 1.8, 2.1]
        .into_iter()
        .enumerate()
        .map(|(idx, rate)| {
            HistoricalPoint::parse(&format!("2025-11-{:02}", idx + 1), rate).expect("valid point")
        })
        .collect()
}

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init")
}

#[test]
fn empty_window_builds_placeholder_frame() {
    let mut engine = engine();
    let frame = engine.build_render_frame();
    assert!(frame.is_empty_state());
    assert_eq!(frame.empty_message.as_deref(), Some(EMPTY_CHART_MESSAGE));
    assert!(frame.lines.is_empty() && frame.polylines.is_empty());

    engine.render().expect("render");
    assert!(engine.renderer().last_was_empty_state);
}

#[test]
fn frame_has_axes_gridlines_labels_and_series() {
    let mut engine = engine();
    engine.set_data(five_points()).expect("set data");

    let frame = engine.build_render_frame();
    frame.validate().expect("valid frame");
    assert_eq!(frame.lines.len(), 2 + 5, "two axes plus five gridlines");
    assert_eq!(frame.texts.len(), 5 + 5, "five rate labels plus five date labels");
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 5);
    assert!(frame.circles.is_empty());
    assert!(frame.tooltip.is_none());

    let rate_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|t| t.anchor == TextAnchor::End)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(rate_labels, ["1.0000", "1.2750", "1.5500", "1.8250", "2.1000"]);

    let date_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|t| t.anchor == TextAnchor::Middle)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(date_labels, ["11-01", "11-02", "11-03", "11-04", "11-05"]);
    for label in frame.texts.iter().filter(|t| t.anchor == TextAnchor::Middle) {
        assert_relative_eq!(label.y, 320.0 - 36.0 + 16.0);
    }
}

#[test]
fn date_labels_are_thinned_to_budget() {
    let mut engine = engine();
    let start = NaiveDate::from_ymd_opt(2025, 11, 5).expect("valid date");
    engine.set_data(mock_history(0.6512, start, 14)).expect("set data");

    let frame = engine.build_render_frame();
    let date_labels = frame
        .texts
        .iter()
        .filter(|t| t.anchor == TextAnchor::Middle)
        .count();
    // every ceil(14 / 6) = 3rd point
    assert_eq!(date_labels, 5);
}

#[test]
fn single_point_draws_marker_instead_of_polyline() {
    let mut engine = engine();
    engine
        .set_data(vec![HistoricalPoint::parse("2025-11-05", 0.6512).expect("valid point")])
        .expect("set data");

    let frame = engine.build_render_frame();
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.circles.len(), 1);
    assert_relative_eq!(frame.circles[0].cx, 48.0);
}

#[test]
fn hover_adds_dashed_crosshair_marker_and_tooltip() {
    let mut engine = engine();
    engine.set_data(five_points()).expect("set data");
    engine.set_container_rect(Some(ContainerRect::new(0.0, 0.0, 760.0, 320.0)));
    engine.pointer_move(100.0, 50.0);

    let frame = engine.build_render_frame();
    let crosshair = frame.lines.last().expect("crosshair line");
    assert_eq!(crosshair.dash, Some((3.0, 3.0)));
    assert_relative_eq!(crosshair.y1, 16.0);
    assert_relative_eq!(crosshair.y2, 284.0);
    assert_eq!(frame.circles.len(), 1);
    assert_relative_eq!(frame.circles[0].radius, 4.0);

    let tooltip = frame.tooltip.as_ref().expect("tooltip");
    assert_relative_eq!(tooltip.left_px, 108.0);
    assert_relative_eq!(tooltip.top_px, 22.0);
    assert_eq!(tooltip.date, "2025-11-01");
    assert_eq!(tooltip.rate, "1.2989");

    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_had_tooltip);
    assert_eq!(renderer.last_line_count, 8);

    engine.pointer_leave();
    assert!(engine.build_render_frame().tooltip.is_none());
}

#[test]
fn render_style_is_validated() {
    let mut engine = engine();
    let style = RenderStyle {
        series_stroke_width: 0.0,
        ..RenderStyle::default()
    };
    assert!(engine.set_render_style(style).is_err());

    let style = RenderStyle {
        series_color: Color::rgb(1.0, 0.0, 0.0),
        ..RenderStyle::default()
    };
    engine.set_render_style(style).expect("valid style");
    assert_eq!(engine.render_style().series_color, Color::rgb(1.0, 0.0, 0.0));
}
