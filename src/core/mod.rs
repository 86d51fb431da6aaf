pub mod mapper;
pub mod rate_scale;
pub mod scale;
pub mod types;

pub use mapper::{PlotPointCache, project_points};
pub use rate_scale::{RateScale, RateTick};
pub use scale::LinearScale;
pub use types::{ChartMargins, HistoricalPoint, PlotPoint, PlotRect, ViewBox};
