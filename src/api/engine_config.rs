use serde::{Deserialize, Serialize};

use crate::core::ViewBox;
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship chart setup as JSON next to their other
/// settings. Every field has a default matching the dashboard's chart modal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub view_box: ViewBox,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_x_label_budget")]
    pub x_label_budget: usize,
    #[serde(default = "default_rate_decimals")]
    pub rate_decimals: usize,
    #[serde(default = "default_tooltip_offset_px")]
    pub tooltip_offset_px: (f64, f64),
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ViewBox::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            y_tick_count: default_y_tick_count(),
            x_label_budget: default_x_label_budget(),
            rate_decimals: default_rate_decimals(),
            tooltip_offset_px: default_tooltip_offset_px(),
            marker_radius: default_marker_radius(),
        }
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    /// Caps the number of x-axis date labels; every `ceil(n / budget)`-th
    /// point gets one.
    #[must_use]
    pub fn with_x_label_budget(mut self, budget: usize) -> Self {
        self.x_label_budget = budget;
        self
    }

    #[must_use]
    pub fn with_rate_decimals(mut self, decimals: usize) -> Self {
        self.rate_decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset_px(mut self, dx: f64, dy: f64) -> Self {
        self.tooltip_offset_px = (dx, dy);
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.view_box.validate()?;
        if self.x_label_budget == 0 {
            return Err(ChartError::InvalidData(
                "x label budget must be > 0".to_owned(),
            ));
        }
        if self.rate_decimals > 12 {
            return Err(ChartError::InvalidData(
                "rate decimals must be <= 12".to_owned(),
            ));
        }
        if !self.tooltip_offset_px.0.is_finite() || !self.tooltip_offset_px.1.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_y_tick_count() -> usize {
    5
}

fn default_x_label_budget() -> usize {
    6
}

fn default_rate_decimals() -> usize {
    4
}

fn default_tooltip_offset_px() -> (f64, f64) {
    (8.0, -28.0)
}

fn default_marker_radius() -> f64 {
    4.0
}
