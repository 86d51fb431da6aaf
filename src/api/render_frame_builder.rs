use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextAnchor,
    TextPrimitive, TooltipPrimitive,
};

use super::ChartEngine;

pub const EMPTY_CHART_MESSAGE: &str = "No data";

const Y_LABEL_GAP: f64 = 8.0;
const X_LABEL_OFFSET: f64 = 16.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current scene from the plot cache and hover state.
    ///
    /// Zero points produce an empty-state frame carrying only the placeholder
    /// message.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let view_box = self.config.view_box;
        let points = self.cache.points();
        let Some(rate_scale) = self.cache.rate_scale().filter(|_| !points.is_empty()) else {
            return RenderFrame::empty_state(view_box, EMPTY_CHART_MESSAGE);
        };

        let style = self.style;
        let plot = view_box.plot_rect();
        let decimals = self.config.rate_decimals;
        let mut frame = RenderFrame::new(view_box)
            .with_line(LinePrimitive::new(
                plot.left,
                plot.top,
                plot.left,
                plot.bottom,
                style.axis_stroke_width,
                style.axis_color,
            ))
            .with_line(LinePrimitive::new(
                plot.left,
                plot.bottom,
                plot.right,
                plot.bottom,
                style.axis_stroke_width,
                style.axis_color,
            ));

        for tick in rate_scale.ticks(self.config.y_tick_count) {
            frame = frame
                .with_line(LinePrimitive::new(
                    plot.left,
                    tick.y,
                    plot.right,
                    tick.y,
                    style.axis_stroke_width,
                    style.grid_color,
                ))
                .with_text(TextPrimitive::new(
                    format!("{:.*}", decimals, tick.value),
                    plot.left - Y_LABEL_GAP,
                    tick.y,
                    style.tick_label_font_size,
                    style.tick_label_color,
                    TextAnchor::End,
                ));
        }

        let every = points.len().div_ceil(self.config.x_label_budget).max(1);
        for point in points.iter().step_by(every) {
            frame = frame.with_text(TextPrimitive::new(
                point.date.format("%m-%d").to_string(),
                point.x,
                plot.bottom + X_LABEL_OFFSET,
                style.tick_label_font_size,
                style.tick_label_color,
                TextAnchor::Middle,
            ));
        }

        if let [single] = points {
            frame = frame.with_circle(CirclePrimitive {
                cx: single.x,
                cy: single.y,
                radius: self.config.marker_radius,
                fill_color: style.series_color,
            });
        } else {
            frame = frame.with_polyline(PolylinePrimitive {
                points: points.iter().map(|p| (p.x, p.y)).collect(),
                stroke_width: style.series_stroke_width,
                color: style.series_color,
            });
        }

        if let Some(hover) = self.interaction.hover() {
            let (dash, gap) = style.crosshair_dash;
            let (dx, dy) = self.config.tooltip_offset_px;
            frame = frame
                .with_line(
                    LinePrimitive::new(
                        hover.vx,
                        plot.top,
                        hover.vx,
                        plot.bottom,
                        style.axis_stroke_width,
                        style.crosshair_color,
                    )
                    .dashed(dash, gap),
                )
                .with_circle(CirclePrimitive {
                    cx: hover.vx,
                    cy: hover.vy,
                    radius: self.config.marker_radius,
                    fill_color: style.series_color,
                })
                .with_tooltip(TooltipPrimitive {
                    left_px: hover.dom_x + dx,
                    top_px: hover.dom_y + dy,
                    date: hover.date.to_string(),
                    rate: format!("{:.*}", decimals, hover.rate),
                });
        }

        frame
    }
}
