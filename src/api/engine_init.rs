use std::sync::Arc;

use tracing::debug;

use crate::core::{HistoricalPoint, PlotPointCache};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, RenderStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty data window and no container geometry.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let data: Arc<[HistoricalPoint]> = Arc::from(Vec::new());
        let mut cache = PlotPointCache::new();
        cache.sync(&data, config.view_box)?;

        debug!(
            width = config.view_box.width,
            height = config.view_box.height,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            data,
            cache,
            interaction: InteractionState::default(),
            container: None,
            on_hover: None,
            on_zoom: None,
        })
    }
}
