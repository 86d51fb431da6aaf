use std::sync::Arc;

use crate::core::{HistoricalPoint, PlotPointCache};
use crate::error::ChartResult;
use crate::interaction::{ContainerRect, HoverPoint, InteractionState, ZoomDirection};
use crate::render::Renderer;

use super::render_coordinator::RenderCoordinator;
use super::{ChartEngineConfig, RenderStyle};

/// Observer notified with every resolved hover, or `None` when it clears.
pub type HoverObserver = Box<dyn FnMut(Option<HoverPoint>)>;

/// Observer notified with each discrete zoom intent.
pub type ZoomObserver = Box<dyn FnMut(ZoomDirection)>;

/// Main facade consumed by host applications.
///
/// `ChartEngine` owns the visible data window, its plot-coordinate cache,
/// hover state and the last container geometry. It never owns the zoom
/// window size: wheel gestures are reported as intents and the host answers
/// with a new window through `set_data`.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) style: RenderStyle,
    pub(super) data: Arc<[HistoricalPoint]>,
    pub(super) cache: PlotPointCache,
    pub(super) interaction: InteractionState,
    pub(super) container: Option<ContainerRect>,
    pub(super) on_hover: Option<HoverObserver>,
    pub(super) on_zoom: Option<ZoomObserver>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
