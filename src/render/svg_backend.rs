use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, TooltipPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Markup produced for one frame.
///
/// `svg` is scaled by the host to the container (`preserveAspectRatio="none"`)
/// while `overlay_html` is absolutely positioned in container pixels: either
/// the tooltip or, for an empty frame, the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SvgMarkup {
    pub svg: Option<String>,
    pub overlay_html: Option<String>,
}

/// Renders frames to SVG markup for browser hosts.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_markup: SvgMarkup,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn last_markup(&self) -> &SvgMarkup {
        &self.last_markup
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn render_svg(&mut self, frame: &RenderFrame) -> ChartResult<String> {
        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        let vb = frame.view_box;

        write_markup(
            &mut out,
            format_args!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
                num(vb.width),
                num(vb.height)
            ),
        )?;

        for line in &frame.lines {
            write_markup(
                &mut out,
                format_args!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                    num(line.x1),
                    num(line.y1),
                    num(line.x2),
                    num(line.y2),
                    line.color.to_css(),
                    num(line.stroke_width)
                ),
            )?;
            if let Some((dash, gap)) = line.dash {
                write_markup(
                    &mut out,
                    format_args!(r#" stroke-dasharray="{} {}""#, num(dash), num(gap)),
                )?;
            }
            out.push_str("/>");
            stats.lines_drawn += 1;
        }

        for polyline in &frame.polylines {
            let points = polyline
                .points
                .iter()
                .map(|&(x, y)| format!("{},{}", num(x), num(y)))
                .collect::<Vec<_>>()
                .join(" ");
            write_markup(
                &mut out,
                format_args!(
                    r#"<polyline fill="none" stroke="{}" stroke-width="{}" points="{}"/>"#,
                    polyline.color.to_css(),
                    num(polyline.stroke_width),
                    points
                ),
            )?;
            stats.polylines_drawn += 1;
        }

        for circle in &frame.circles {
            write_markup(
                &mut out,
                format_args!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    num(circle.cx),
                    num(circle.cy),
                    num(circle.radius),
                    circle.fill_color.to_css()
                ),
            )?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            write_markup(
                &mut out,
                format_args!(
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
                    num(text.x),
                    num(text.y),
                    num(text.font_size),
                    text.color.to_css(),
                    text.anchor.as_svg(),
                    escape_markup(&text.text)
                ),
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        self.last_stats = stats;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(message) = &frame.empty_message {
            self.last_stats = SvgRenderStats::default();
            self.last_markup = SvgMarkup {
                svg: None,
                overlay_html: Some(format!(
                    r#"<div class="chart-empty">{}</div>"#,
                    escape_markup(message)
                )),
            };
            return Ok(());
        }

        let svg = self.render_svg(frame)?;
        self.last_markup = SvgMarkup {
            svg: Some(svg),
            overlay_html: frame.tooltip.as_ref().map(tooltip_html),
        };
        Ok(())
    }
}

fn tooltip_html(tooltip: &TooltipPrimitive) -> String {
    format!(
        r#"<div class="chart-tooltip" style="left: {}px; top: {}px"><div class="tooltip-date">{}</div><div class="tooltip-rate">{}</div></div>"#,
        num(tooltip.left_px),
        num(tooltip.top_px),
        escape_markup(&tooltip.date),
        escape_markup(&tooltip.rate)
    )
}

fn write_markup(out: &mut String, args: std::fmt::Arguments<'_>) -> ChartResult<()> {
    out.write_fmt(args)
        .map_err(|e| ChartError::InvalidData(format!("failed to write svg markup: {e}")))
}

/// Compact number formatting: at most three decimals, no trailing zeros.
fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
