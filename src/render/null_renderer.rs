use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and server-side use.
///
/// Draws nothing but validates every frame and records what it received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_had_tooltip: bool,
    pub last_was_empty_state: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_had_tooltip = frame.tooltip.is_some();
        self.last_was_empty_state = frame.is_empty_state();
        Ok(())
    }
}
