use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::ZoomDirection;

/// Step and bounds for the trailing-days zoom window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomWindowPolicy {
    pub default_days: usize,
    pub min_days: usize,
    pub step_days: usize,
}

impl Default for ZoomWindowPolicy {
    fn default() -> Self {
        Self {
            default_days: 14,
            min_days: 5,
            step_days: 2,
        }
    }
}

impl ZoomWindowPolicy {
    pub fn validate(self) -> ChartResult<Self> {
        if self.default_days == 0 || self.min_days == 0 || self.step_days == 0 {
            return Err(ChartError::InvalidData(
                "zoom window days and step must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Caller-owned count of trailing days to display.
///
/// Window size moves in `step_days` increments and stays within
/// `[min(min_days, available), available]`. With no history available the
/// ceiling falls back to `default_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    policy: ZoomWindowPolicy,
    available_days: usize,
    days: usize,
}

impl ZoomWindow {
    pub fn new(available_days: usize, policy: ZoomWindowPolicy) -> ChartResult<Self> {
        let policy = policy.validate()?;
        let mut window = Self {
            policy,
            available_days,
            days: 0,
        };
        window.days = window.default_days();
        Ok(window)
    }

    #[must_use]
    pub fn policy(&self) -> ZoomWindowPolicy {
        self.policy
    }

    /// Requested window size in days (may exceed the available history).
    #[must_use]
    pub fn days(&self) -> usize {
        self.days
    }

    #[must_use]
    pub fn available_days(&self) -> usize {
        self.available_days
    }

    /// Number of points actually displayed.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.days.min(self.available_days)
    }

    /// Window-length label shown between the zoom buttons, e.g. `"14d"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}d", self.visible_len())
    }

    fn ceiling(&self) -> usize {
        if self.available_days == 0 {
            self.policy.default_days
        } else {
            self.available_days
        }
    }

    fn floor(&self) -> usize {
        self.policy.min_days.min(self.ceiling())
    }

    fn default_days(&self) -> usize {
        self.policy.default_days.min(self.ceiling())
    }

    /// Applies one zoom step. Returns `true` when the window size changed.
    /// Without history there is nothing to resize.
    pub fn apply(&mut self, direction: ZoomDirection) -> bool {
        if self.available_days == 0 {
            return false;
        }
        let next = match direction {
            ZoomDirection::In => self.days.saturating_sub(self.policy.step_days),
            ZoomDirection::Out => self.days.saturating_add(self.policy.step_days),
        };
        let next = next.clamp(self.floor(), self.ceiling());
        let changed = next != self.days;
        trace!(
            direction = direction.as_str(),
            from = self.days,
            to = next,
            "zoom window step"
        );
        self.days = next;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.apply(ZoomDirection::In)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.apply(ZoomDirection::Out)
    }

    /// Restores the default window. Returns `true` when the size changed.
    pub fn reset(&mut self) -> bool {
        let next = self.default_days();
        let changed = next != self.days;
        self.days = next;
        changed
    }

    /// Zoom-in affordance stays enabled while the visible window is above the
    /// minimum.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.available_days > 0 && self.visible_len() > self.floor()
    }

    /// Zoom-out affordance stays enabled until every available day is shown.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.available_days > 0 && self.visible_len() < self.available_days
    }

    /// Replaces the history length and resets to the default window.
    pub fn set_available_days(&mut self, available_days: usize) {
        self.available_days = available_days;
        self.days = self.default_days();
    }

    /// Trailing slice of `history` covered by the window.
    #[must_use]
    pub fn visible_slice<'a, T>(&self, history: &'a [T]) -> &'a [T] {
        let len = self.days.min(history.len());
        &history[history.len() - len..]
    }
}
