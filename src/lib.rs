//! fx-chart-rs: exchange-rate dashboard core.
//!
//! The centre of the crate is a historical rate chart: a coordinate mapper
//! from `(date, rate)` samples to a fixed view box, a hover engine that turns
//! pointer pixels into interpolated tooltip values, and zoom intents that the
//! host answers with a resized data window. The `fx` module carries the
//! surrounding dashboard plumbing (formatting, conversion, amount input,
//! rate responses).

pub mod api;
pub mod core;
pub mod error;
pub mod fx;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartSession};
pub use error::{ChartError, ChartResult};
