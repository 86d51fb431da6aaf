use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use fx_chart::api::{ChartEngine, ChartEngineConfig};
use fx_chart::core::HistoricalPoint;
use fx_chart::interaction::{ContainerRect, HoverPoint, HoverState};
use fx_chart::render::NullRenderer;

fn sample_window() -> Vec<HistoricalPoint> {
    [
        ("2025-11-01", 1.0),
        ("2025-11-02", 2.0),
        ("2025-11-03", 1.5),
        ("2025-11-04", 1.8),
        ("2025-11-05", 2.1),
    ]
    .into_iter()
    .map(|(date, rate)| HistoricalPoint::parse(date, rate).expect("valid point"))
    .collect()
}

fn engine_with(data: Vec<HistoricalPoint>) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.set_data(data).expect("set data");
    engine.set_container_rect(Some(ContainerRect::new(0.0, 0.0, 760.0, 320.0)));
    engine
}

fn recorded_hovers(
    engine: &mut ChartEngine<NullRenderer>,
) -> Rc<RefCell<Vec<Option<HoverPoint>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.set_on_hover(Some(Box::new(move |hover| sink.borrow_mut().push(hover))));
    seen
}

#[test]
fn pointer_move_then_leave_round_trips_hover() {
    let mut engine = engine_with(sample_window());
    let seen = recorded_hovers(&mut engine);

    engine.pointer_move(100.0, 50.0);
    let hover = *engine.hover().expect("hover after move");
    assert!(engine.data().iter().any(|p| p.date == hover.date));
    assert!((1.0..=2.1).contains(&hover.rate));
    assert_eq!(hover.date.to_string(), "2025-11-01");
    assert_relative_eq!(hover.vx, 100.0, epsilon = 1e-9);
    assert_relative_eq!(hover.rate, 1.0 + 52.0 / 696.0 * 4.0, epsilon = 1e-9);
    assert_relative_eq!(hover.dom_x, 100.0);
    assert_relative_eq!(hover.dom_y, 50.0);

    engine.pointer_leave();
    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert!(engine.last_pointer().is_none());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    let payload = seen[0].expect("hover payload");
    assert_relative_eq!(payload.x, hover.vx);
    assert_relative_eq!(payload.y, hover.vy);
    assert!(seen[1].is_none());
}

#[test]
fn container_edges_resolve_to_first_and_last_samples() {
    let data = sample_window();
    let mut engine = engine_with(data.clone());

    engine.pointer_move(0.0, 10.0);
    let left = *engine.hover().expect("left edge");
    assert_eq!(left.date, data[0].date);
    assert_relative_eq!(left.rate, data[0].rate);
    assert_relative_eq!(left.vx, 48.0);

    engine.pointer_move(760.0, 10.0);
    let right = *engine.hover().expect("right edge");
    assert_eq!(right.date, data[4].date);
    assert_relative_eq!(right.rate, data[4].rate, epsilon = 1e-12);
    assert_relative_eq!(right.vx, 744.0);
}

#[test]
fn pointer_outside_plot_is_clamped_to_margins() {
    let mut engine = engine_with(sample_window());
    engine.pointer_move(-50.0, 10.0);
    assert_relative_eq!(engine.hover().expect("hover").vx, 48.0);
    engine.pointer_move(5_000.0, 10.0);
    assert_relative_eq!(engine.hover().expect("hover").vx, 744.0);
}

#[test]
fn pointer_position_is_scaled_by_container_size() {
    let mut engine = engine_with(sample_window());
    engine.set_container_rect(Some(ContainerRect::new(20.0, 40.0, 380.0, 160.0)));

    engine.pointer_move(20.0 + 190.0, 40.0 + 80.0);
    let hover = *engine.hover().expect("hover");
    assert_relative_eq!(hover.vx, 380.0, epsilon = 1e-9);
    assert_relative_eq!(hover.dom_x, 190.0);
    assert_relative_eq!(hover.dom_y, 80.0);
}

#[test]
fn single_point_hover_targets_that_point() {
    let point = HistoricalPoint::parse("2025-11-05", 0.6512).expect("valid point");
    let mut engine = engine_with(vec![point]);

    engine.pointer_move(600.0, 200.0);
    let hover = *engine.hover().expect("hover");
    let plotted = engine.plot_points()[0];
    assert_eq!(hover.date, point.date);
    assert_relative_eq!(hover.rate, point.rate);
    assert_relative_eq!(hover.vx, plotted.x);
    assert_relative_eq!(hover.vy, plotted.y);
    assert_relative_eq!(hover.dom_x, 600.0);
}

#[test]
fn empty_data_never_hovers() {
    let mut engine = engine_with(Vec::new());
    let seen = recorded_hovers(&mut engine);

    engine.pointer_move(100.0, 50.0);
    assert_eq!(engine.hover_state(), HoverState::Idle);
    assert!(engine.last_pointer().is_some());
    assert!(seen.borrow().is_empty());
}

#[test]
fn missing_container_geometry_is_a_no_op() {
    let mut engine = engine_with(sample_window());
    engine.set_container_rect(None);
    engine.pointer_move(100.0, 50.0);
    assert!(engine.hover().is_none());
    assert!(engine.last_pointer().is_none());

    engine.set_container_rect(Some(ContainerRect::new(0.0, 0.0, 0.0, 320.0)));
    engine.pointer_move(100.0, 50.0);
    assert!(engine.hover().is_none());
}

#[test]
fn repeated_moves_at_same_position_are_idempotent() {
    let mut engine = engine_with(sample_window());
    engine.pointer_move(333.0, 120.0);
    let first = *engine.hover().expect("first");
    engine.pointer_move(333.0, 120.0);
    let second = *engine.hover().expect("second");
    assert_eq!(first, second);
}
