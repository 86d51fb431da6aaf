mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, TextAnchor, TextPrimitive,
    TooltipPrimitive,
};
pub use svg_backend::{SvgMarkup, SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`; they never see data,
/// hover state or interaction events.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
