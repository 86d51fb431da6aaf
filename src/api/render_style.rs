use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and stroke widths used by the frame builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub grid_color: Color,
    pub tick_label_color: Color,
    pub series_color: Color,
    pub crosshair_color: Color,
    pub series_stroke_width: f64,
    pub axis_stroke_width: f64,
    pub tick_label_font_size: f64,
    /// `(dash, gap)` for the vertical crosshair.
    pub crosshair_dash: (f64, f64),
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::from_hex(0xe5e7eb),
            grid_color: Color::from_hex(0xf3f4f6),
            tick_label_color: Color::from_hex(0x6b7280),
            series_color: Color::from_hex(0x2563eb),
            crosshair_color: Color::from_hex(0x9ca3af),
            series_stroke_width: 2.0,
            axis_stroke_width: 1.0,
            tick_label_font_size: 11.0,
            crosshair_dash: (3.0, 3.0),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.axis_color,
            self.grid_color,
            self.tick_label_color,
            self.series_color,
            self.crosshair_color,
        ] {
            color.validate()?;
        }
        for (value, what) in [
            (self.series_stroke_width, "series stroke width"),
            (self.axis_stroke_width, "axis stroke width"),
            (self.tick_label_font_size, "tick label font size"),
            (self.crosshair_dash.0, "crosshair dash"),
            (self.crosshair_dash.1, "crosshair gap"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{what} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}
