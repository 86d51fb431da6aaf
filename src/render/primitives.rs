use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgba(...)` notation.
    #[must_use]
    pub fn to_css(self) -> String {
        let to_byte = |v: f64| (v * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            self.alpha
        )
    }
}

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// Draw command for one line segment in view-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// `(dash, gap)` lengths; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        ensure_positive(self.stroke_width, "line stroke width")?;
        if let Some((dash, gap)) = self.dash {
            ensure_positive(dash, "line dash length")?;
            ensure_positive(gap, "line dash gap")?;
        }
        self.color.validate()
    }
}

/// Connected series geometry in view-box space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        for &(x, y) in &self.points {
            ensure_finite(&[x, y], "polyline coordinates")?;
        }
        ensure_positive(self.stroke_width, "polyline stroke width")?;
        self.color.validate()
    }
}

/// Filled circle marker in view-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle center")?;
        ensure_positive(self.radius, "circle radius")?;
        self.fill_color.validate()
    }
}

/// Horizontal text anchor relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Draw command for one label in view-box space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        color: Color,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            color,
            anchor,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text coordinates")?;
        ensure_positive(self.font_size, "font size")?;
        self.color.validate()
    }
}

/// Floating tooltip placed in container pixels, outside the view box.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub left_px: f64,
    pub top_px: f64,
    pub date: String,
    pub rate: String,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.left_px, self.top_px], "tooltip position")?;
        if self.date.is_empty() || self.rate.is_empty() {
            return Err(ChartError::InvalidData(
                "tooltip text must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
