use std::cell::RefCell;
use std::rc::Rc;

use fx_chart::api::{ChartEngine, ChartEngineConfig};
use fx_chart::core::HistoricalPoint;
use fx_chart::interaction::{ContainerRect, ZoomDirection, zoom_intent_from_wheel};
use fx_chart::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine
        .set_data(vec![
            HistoricalPoint::parse("2025-11-01", 1.0).expect("valid point"),
            HistoricalPoint::parse("2025-11-02", 2.0).expect("valid point"),
        ])
        .expect("set data");
    engine.set_container_rect(Some(ContainerRect::new(0.0, 0.0, 760.0, 320.0)));
    engine
}

#[test]
fn wheel_delta_sign_maps_to_zoom_direction() {
    let mut engine = engine();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.set_on_zoom(Some(Box::new(move |direction| sink.borrow_mut().push(direction))));

    let up = engine.wheel(-100.0, 10.0, 10.0);
    assert_eq!(up.intent, Some(ZoomDirection::In));
    assert!(up.prevent_default);

    let down = engine.wheel(100.0, 10.0, 10.0);
    assert_eq!(down.intent, Some(ZoomDirection::Out));

    let flat = engine.wheel(0.0, 10.0, 10.0);
    assert_eq!(flat.intent, None);
    assert!(flat.prevent_default);

    assert_eq!(*seen.borrow(), vec![ZoomDirection::In, ZoomDirection::Out]);
}

#[test]
fn wheel_without_observer_keeps_default_scrolling() {
    let mut engine = engine();
    assert!(!engine.has_zoom_observer());

    let outcome = engine.wheel(-100.0, 200.0, 100.0);
    assert_eq!(outcome.intent, None);
    assert!(!outcome.prevent_default);

    // The pointer is still remembered for later hover recomputation.
    let pointer = engine.last_pointer().expect("pointer remembered");
    assert_eq!((pointer.x, pointer.y), (200.0, 100.0));
}

#[test]
fn wheel_does_not_move_the_crosshair_by_itself() {
    let mut engine = engine();
    engine.set_on_zoom(Some(Box::new(|_| {})));
    engine.pointer_move(300.0, 100.0);
    let before = *engine.hover().expect("hover");

    engine.wheel(-100.0, 500.0, 100.0);
    assert_eq!(*engine.hover().expect("hover kept"), before);
}

#[test]
fn zoom_intent_ignores_nan_and_zero() {
    assert_eq!(zoom_intent_from_wheel(f64::NAN), None);
    assert_eq!(zoom_intent_from_wheel(0.0), None);
    assert_eq!(zoom_intent_from_wheel(-0.5), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::Out.as_str(), "out");
}
