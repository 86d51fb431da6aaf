use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut ChartEngine<R>) -> ChartResult<()> {
        let frame = engine.build_render_frame();
        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            tooltip = frame.tooltip.is_some(),
            empty = frame.is_empty_state(),
            "render frame"
        );
        engine.renderer.render(&frame)
    }
}
