use serde::{Deserialize, Serialize};

/// Discrete zoom intent. `In` shrinks the visible window, `Out` grows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

/// Maps a wheel `deltaY` to an intent: negative zooms in, positive zooms out.
#[must_use]
pub fn zoom_intent_from_wheel(delta_y: f64) -> Option<ZoomDirection> {
    if delta_y < 0.0 {
        Some(ZoomDirection::In)
    } else if delta_y > 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

/// What the host should do with a wheel event after the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelOutcome {
    /// Intent forwarded to the zoom observer, if any was emitted.
    pub intent: Option<ZoomDirection>,
    /// Set whenever a zoom observer is registered, so the page does not
    /// scroll underneath the chart.
    pub prevent_default: bool,
}
