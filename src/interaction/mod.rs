mod hover;
mod zoom;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use hover::resolve_hover;
pub use zoom::{WheelOutcome, ZoomDirection, zoom_intent_from_wheel};

/// On-screen bounding rectangle of the chart container, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-sized or non-finite rectangle cannot scale pointer positions.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Converts client (viewport) coordinates into container-relative pixels.
    #[must_use]
    pub fn to_local(self, client_x: f64, client_y: f64) -> PointerPosition {
        PointerPosition {
            x: client_x - self.left,
            y: client_y - self.top,
        }
    }
}

/// Pointer offset inside the container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Resolved hover position.
///
/// `vx`/`vy` are view-box coordinates for the crosshair; `dom_x`/`dom_y` are
/// the container pixel offsets used to place the tooltip. `rate` is
/// interpolated between the bracketing samples while `date` is the nearest
/// sample's date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartHover {
    pub vx: f64,
    pub vy: f64,
    pub dom_x: f64,
    pub dom_y: f64,
    pub date: NaiveDate,
    pub rate: f64,
}

/// Payload delivered to the hover observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverPoint {
    pub x: f64,
    pub y: f64,
    pub date: NaiveDate,
    pub rate: f64,
    pub dom_x: f64,
    pub dom_y: f64,
}

impl From<ChartHover> for HoverPoint {
    fn from(hover: ChartHover) -> Self {
        Self {
            x: hover.vx,
            y: hover.vy,
            date: hover.date,
            rate: hover.rate,
            dom_x: hover.dom_x,
            dom_y: hover.dom_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(ChartHover),
}

impl HoverState {
    #[must_use]
    pub fn hover(&self) -> Option<&ChartHover> {
        match self {
            Self::Idle => None,
            Self::Hovering(hover) => Some(hover),
        }
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering(_))
    }
}

/// Hover lifecycle plus the last pointer position seen over the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    last_pointer: Option<PointerPosition>,
}

impl InteractionState {
    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn hover(&self) -> Option<&ChartHover> {
        self.hover.hover()
    }

    #[must_use]
    pub fn last_pointer(&self) -> Option<PointerPosition> {
        self.last_pointer
    }

    pub fn remember_pointer(&mut self, pointer: PointerPosition) {
        self.last_pointer = Some(pointer);
    }

    /// Applies a resolution result: `Some` enters or stays in `Hovering`,
    /// `None` returns to `Idle`.
    pub fn set_hover(&mut self, hover: Option<ChartHover>) {
        self.hover = match hover {
            Some(hover) => HoverState::Hovering(hover),
            None => HoverState::Idle,
        };
    }

    /// Pointer left the container: back to `Idle` and forget the position.
    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
        self.last_pointer = None;
    }
}
