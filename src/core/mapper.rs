use std::sync::Arc;

use tracing::debug;

use crate::core::{HistoricalPoint, LinearScale, PlotPoint, RateScale, ViewBox};
use crate::error::ChartResult;

/// Projects a chronological window onto the view box's plotting rectangle.
///
/// Index `i` of `n` lands at `left + i / (n - 1) * plot_width`; a single point
/// sits on the left edge. Rates are scaled between the window's min and max,
/// with higher rates closer to the top.
pub fn project_points(
    points: &[HistoricalPoint],
    view_box: ViewBox,
) -> ChartResult<Vec<PlotPoint>> {
    let plot = view_box.plot_rect();
    let Some(rate_scale) = RateScale::fit(points, plot)? else {
        return Ok(Vec::new());
    };

    if points.len() == 1 {
        let point = points[0];
        return Ok(vec![PlotPoint {
            date: point.date,
            rate: point.rate,
            x: plot.left,
            y: rate_scale.rate_to_y(point.rate),
        }]);
    }

    let index_scale = LinearScale::new(0.0, (points.len() - 1) as f64, plot.left, plot.right)?;
    Ok(points
        .iter()
        .enumerate()
        .map(|(idx, point)| PlotPoint {
            date: point.date,
            rate: point.rate,
            x: index_scale.to_range(idx as f64),
            y: rate_scale.rate_to_y(point.rate),
        })
        .collect())
}

/// Plot coordinates memoized on the identity of the source window.
///
/// The cache holds the `Arc` it was built from, so pointer identity cannot be
/// recycled by a later allocation while the entry is alive.
#[derive(Debug, Clone, Default)]
pub struct PlotPointCache {
    source: Option<Arc<[HistoricalPoint]>>,
    view_box: Option<ViewBox>,
    points: Vec<PlotPoint>,
    rate_scale: Option<RateScale>,
    rebuilds: u64,
}

impl PlotPointCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the cache if `data` differs from the cached window by
    /// identity or length, or if the view box changed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn sync(&mut self, data: &Arc<[HistoricalPoint]>, view_box: ViewBox) -> ChartResult<bool> {
        if self.is_current(data, view_box) {
            return Ok(false);
        }

        let points = project_points(data, view_box)?;
        self.rate_scale = RateScale::fit(data, view_box.plot_rect())?;
        self.points = points;
        self.source = Some(Arc::clone(data));
        self.view_box = Some(view_box);
        self.rebuilds += 1;
        debug!(
            points = self.points.len(),
            rebuilds = self.rebuilds,
            "rebuilt plot point cache"
        );
        Ok(true)
    }

    fn is_current(&self, data: &Arc<[HistoricalPoint]>, view_box: ViewBox) -> bool {
        match (&self.source, self.view_box) {
            (Some(source), Some(cached_box)) => {
                Arc::ptr_eq(source, data) && source.len() == data.len() && cached_box == view_box
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    #[must_use]
    pub fn rate_scale(&self) -> Option<RateScale> {
        self.rate_scale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of rebuilds since construction.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
