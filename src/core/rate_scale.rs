use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{HistoricalPoint, LinearScale, PlotRect};
use crate::error::ChartResult;

/// One horizontal gridline with its rate value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTick {
    pub value: f64,
    pub y: f64,
}

/// Vertical scale fitted to the visible window's min/max rate.
///
/// A flat window (`min == max`) uses a unit range so the mapping stays finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateScale {
    min: f64,
    max: f64,
    range: f64,
    linear: LinearScale,
}

impl RateScale {
    /// Fits the scale to `points`. Returns `Ok(None)` for an empty window.
    pub fn fit(points: &[HistoricalPoint], plot: PlotRect) -> ChartResult<Option<Self>> {
        let Some(min) = points.iter().map(|p| OrderedFloat(p.rate)).min() else {
            return Ok(None);
        };
        let Some(max) = points.iter().map(|p| OrderedFloat(p.rate)).max() else {
            return Ok(None);
        };
        let (min, max) = (min.into_inner(), max.into_inner());

        let mut range = max - min;
        if range == 0.0 {
            range = 1.0;
        }

        let linear = LinearScale::new(min, min + range, plot.bottom, plot.top)?;
        Ok(Some(Self {
            min,
            max,
            range,
            linear,
        }))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Span used for the mapping; `1.0` for a flat window.
    #[must_use]
    pub fn range(self) -> f64 {
        self.range
    }

    #[must_use]
    pub fn rate_to_y(self, rate: f64) -> f64 {
        self.linear.to_range(rate)
    }

    #[must_use]
    pub fn y_to_rate(self, y: f64) -> f64 {
        self.linear.to_domain(y)
    }

    /// Evenly spaced gridlines from `min` (bottom) to `min + range` (top).
    #[must_use]
    pub fn ticks(self, count: usize) -> SmallVec<[RateTick; 8]> {
        match count {
            0 => SmallVec::new(),
            1 => SmallVec::from_elem(
                RateTick {
                    value: self.min,
                    y: self.rate_to_y(self.min),
                },
                1,
            ),
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|idx| {
                        let value = self.min + (idx as f64 / last) * self.range;
                        RateTick {
                            value,
                            y: self.rate_to_y(value),
                        }
                    })
                    .collect()
            }
        }
    }
}
