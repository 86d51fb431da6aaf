use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{HistoricalPoint, PlotPoint, RateScale, ViewBox};
use crate::error::{ChartError, ChartResult};
use crate::interaction::resolve_hover;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the visible data window.
    ///
    /// The plot cache is rebuilt only when the window's identity or length
    /// differs from the cached one. After a rebuild, hover is recomputed at
    /// the last known pointer position so the crosshair follows zoom changes
    /// without a new pointer event. An empty window forces hover to idle.
    pub fn set_data(&mut self, data: impl Into<Arc<[HistoricalPoint]>>) -> ChartResult<()> {
        let data = data.into();
        validate_rates(&data)?;

        let rebuilt = self.cache.sync(&data, self.config.view_box)?;
        self.data = data;
        if !rebuilt {
            trace!(len = self.data.len(), "data window unchanged");
            return Ok(());
        }

        debug!(len = self.data.len(), "set data window");
        self.refresh_hover_after_data_change();
        Ok(())
    }

    /// Applies a new view box, rebuilding the cache and hover against it.
    pub fn set_view_box(&mut self, view_box: ViewBox) -> ChartResult<()> {
        let view_box = view_box.validate()?;
        self.config.view_box = view_box;
        if self.cache.sync(&self.data, view_box)? {
            self.refresh_hover_after_data_change();
        }
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &[HistoricalPoint] {
        &self.data
    }

    /// Shared handle to the current window, suitable for passing back to
    /// `set_data` without triggering a rebuild.
    #[must_use]
    pub fn data_handle(&self) -> Arc<[HistoricalPoint]> {
        Arc::clone(&self.data)
    }

    #[must_use]
    pub fn plot_points(&self) -> &[PlotPoint] {
        self.cache.points()
    }

    #[must_use]
    pub fn rate_scale(&self) -> Option<RateScale> {
        self.cache.rate_scale()
    }

    #[must_use]
    pub fn cache_rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    /// Re-resolves hover once the cache matches the new window.
    ///
    /// Must only run after `PlotPointCache::sync`.
    pub(super) fn refresh_hover_after_data_change(&mut self) {
        if self.cache.is_empty() {
            let was_hovering = self.interaction.hover_state().is_hovering();
            self.interaction.set_hover(None);
            if was_hovering {
                self.notify_hover(None);
            }
            return;
        }

        let Some(pointer) = self.interaction.last_pointer() else {
            return;
        };
        let Some(rect) = self.usable_container() else {
            warn!("skipping hover recompute after data change: container geometry unavailable");
            return;
        };

        let hover = resolve_hover(self.cache.points(), self.config.view_box, rect, pointer);
        trace!(hovering = hover.is_some(), "recomputed hover after data change");
        self.interaction.set_hover(hover);
        self.notify_hover(hover.map(Into::into));
    }
}

fn validate_rates(points: &[HistoricalPoint]) -> ChartResult<()> {
    if let Some(point) = points.iter().find(|p| !p.rate.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "rate for {} must be finite",
            point.date
        )));
    }
    Ok(())
}
