use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One daily exchange-rate sample.
///
/// Serialized as `{ "date": "YYYY-MM-DD", "rate": 0.6512 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub rate: f64,
}

impl HistoricalPoint {
    #[must_use]
    pub fn new(date: NaiveDate, rate: f64) -> Self {
        Self { date, rate }
    }

    /// Parses an ISO-8601 calendar day (`YYYY-MM-DD`) and pairs it with `rate`.
    pub fn parse(date: &str, rate: f64) -> ChartResult<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            ChartError::InvalidData(format!("invalid calendar date `{date}`: {e}"))
        })?;
        Ok(Self { date, rate })
    }
}

/// A historical point projected into view-box space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub date: NaiveDate,
    pub rate: f64,
    pub x: f64,
    pub y: f64,
}

/// Space reserved around the plotting rectangle for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left: 48.0,
            right: 16.0,
            top: 16.0,
            bottom: 36.0,
        }
    }
}

/// Fixed virtual coordinate space the chart is drawn in.
///
/// The host scales it to the container at render time, so pointer positions
/// must be converted with `ViewBox::width / ContainerRect::width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: ChartMargins,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 320.0,
            margins: ChartMargins::default(),
        }
    }
}

impl ViewBox {
    #[must_use]
    pub fn new(width: f64, height: f64, margins: ChartMargins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let margins = [
            self.margins.left,
            self.margins.right,
            self.margins.top,
            self.margins.bottom,
        ];
        self.width.is_finite()
            && self.height.is_finite()
            && margins.iter().all(|m| m.is_finite() && *m >= 0.0)
            && self.plot_width() > 0.0
            && self.plot_height() > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewBox {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    #[must_use]
    pub fn plot_rect(self) -> PlotRect {
        PlotRect {
            left: self.margins.left,
            top: self.margins.top,
            right: self.width - self.margins.right,
            bottom: self.height - self.margins.bottom,
        }
    }
}

/// Plotting rectangle inside the view box, in view-box units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Clamps a view-box x coordinate to the horizontal plotting extent.
    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.clamp(self.left, self.right)
    }
}
