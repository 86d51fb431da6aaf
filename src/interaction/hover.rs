use tracing::trace;

use crate::core::{PlotPoint, ViewBox};

use super::{ChartHover, ContainerRect, PointerPosition};

/// Resolves a container-relative pointer position against cached plot points.
///
/// The pointer x is scaled into view-box space and clamped to the plotting
/// rectangle, so positions over the margins (or outside the container) still
/// resolve to the nearest in-bounds sample. Returns `None` for an empty cache,
/// an unusable container rectangle or a non-finite pointer.
#[must_use]
pub fn resolve_hover(
    points: &[PlotPoint],
    view_box: ViewBox,
    rect: ContainerRect,
    pointer: PointerPosition,
) -> Option<ChartHover> {
    if points.is_empty() || !rect.is_usable() || !pointer.is_finite() {
        return None;
    }

    if let [point] = points {
        return Some(ChartHover {
            vx: point.x,
            vy: point.y,
            dom_x: pointer.x,
            dom_y: pointer.y,
            date: point.date,
            rate: point.rate,
        });
    }

    let plot = view_box.plot_rect();
    let vx = plot.clamp_x(pointer.x / rect.width * view_box.width);

    let last = points.len() - 1;
    let i_float = (vx - plot.left) / plot.width() * last as f64;
    let i_left = (i_float.floor().max(0.0) as usize).min(last - 1);
    let i_right = i_left + 1;
    let t = i_float - i_left as f64;

    let left = points[i_left];
    let right = points[i_right];
    let vy = left.y + t * (right.y - left.y);
    let rate = left.rate + t * (right.rate - left.rate);
    let nearest = (i_float.round().max(0.0) as usize).min(last);

    trace!(vx, i_float, nearest, "resolved hover");
    Some(ChartHover {
        vx,
        vy,
        dom_x: pointer.x,
        dom_y: pointer.y,
        date: points[nearest].date,
        rate,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::resolve_hover;
    use crate::core::{PlotPoint, ViewBox};
    use crate::interaction::{ContainerRect, PointerPosition};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).expect("valid date")
    }

    fn two_points() -> Vec<PlotPoint> {
        vec![
            PlotPoint {
                date: day(1),
                rate: 1.0,
                x: 48.0,
                y: 268.0,
            },
            PlotPoint {
                date: day(2),
                rate: 2.0,
                x: 744.0,
                y: 16.0,
            },
        ]
    }

    #[test]
    fn midpoint_interpolates_rate_and_y() {
        let rect = ContainerRect::new(0.0, 0.0, 760.0, 320.0);
        let hover = resolve_hover(
            &two_points(),
            ViewBox::default(),
            rect,
            PointerPosition { x: 396.0, y: 10.0 },
        )
        .expect("hover");
        assert!((hover.rate - 1.5).abs() <= 1e-12);
        assert!((hover.vy - 142.0).abs() <= 1e-12);
    }

    #[test]
    fn zero_width_container_does_not_resolve() {
        let rect = ContainerRect::new(0.0, 0.0, 0.0, 320.0);
        let hover = resolve_hover(
            &two_points(),
            ViewBox::default(),
            rect,
            PointerPosition { x: 10.0, y: 10.0 },
        );
        assert!(hover.is_none());
    }
}
