mod chart_session;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod render_coordinator;
mod render_frame_builder;
mod render_style;
mod zoom_window;

pub use chart_session::{
    CHART_LOADING_MESSAGE, CHART_SUBTITLE, CHART_UNAVAILABLE_MESSAGE, ChartSession,
    ChartSessionView,
};
pub use engine::{ChartEngine, HoverObserver, ZoomObserver};
pub use engine_config::ChartEngineConfig;
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use render_frame_builder::EMPTY_CHART_MESSAGE;
pub use render_style::RenderStyle;
pub use zoom_window::{ZoomWindow, ZoomWindowPolicy};
