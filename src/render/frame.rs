use crate::core::ViewBox;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, TextPrimitive, TooltipPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Geometry lives in view-box units; only `tooltip` is in container pixels.
/// A frame with `empty_message` set carries no geometry and asks the backend
/// to show a placeholder instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view_box: ViewBox,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
    pub empty_message: Option<String>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            lines: Vec::new(),
            polylines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            tooltip: None,
            empty_message: None,
        }
    }

    #[must_use]
    pub fn empty_state(view_box: ViewBox, message: impl Into<String>) -> Self {
        Self {
            empty_message: Some(message.into()),
            ..Self::new(view_box)
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPrimitive) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.view_box.is_valid() {
            return Err(ChartError::InvalidViewBox {
                width: self.view_box.width,
                height: self.view_box.height,
            });
        }
        if self.empty_message.is_some() && !self.is_empty() {
            return Err(ChartError::InvalidData(
                "empty-state frame must not carry geometry".to_owned(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }

        Ok(())
    }

    /// `true` when the frame holds no drawable geometry or tooltip.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.tooltip.is_none()
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.empty_message.is_some()
    }
}
