use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::core::HistoricalPoint;
use crate::error::ChartResult;
use crate::interaction::{ContainerRect, WheelOutcome, ZoomDirection};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, HoverObserver, ZoomWindow, ZoomWindowPolicy};

pub const CHART_SUBTITLE: &str = "Foreign Exchange rate";
pub const CHART_LOADING_MESSAGE: &str = "Loading chart data...";
pub const CHART_UNAVAILABLE_MESSAGE: &str = "No chart data available";

/// What the chart modal body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSessionView {
    Loading,
    Empty,
    Chart,
}

impl ChartSessionView {
    /// Placeholder text for non-chart states.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(CHART_LOADING_MESSAGE),
            Self::Empty => Some(CHART_UNAVAILABLE_MESSAGE),
            Self::Chart => None,
        }
    }
}

/// Historical chart for one currency pair with its zoom window.
///
/// The session is the engine's zoom observer: wheel intents are queued by the
/// observer and applied to the `ZoomWindow` right after the engine returns,
/// then the re-sliced window goes back through `ChartEngine::set_data`, which
/// recomputes hover at the remembered pointer.
pub struct ChartSession<R: Renderer> {
    base_currency: String,
    target_currency: String,
    history: Arc<[HistoricalPoint]>,
    window: ZoomWindow,
    engine: ChartEngine<R>,
    pending_zoom: Rc<Cell<Option<ZoomDirection>>>,
    loading: bool,
}

impl<R: Renderer> ChartSession<R> {
    pub fn new(
        renderer: R,
        config: ChartEngineConfig,
        policy: ZoomWindowPolicy,
        base_currency: impl Into<String>,
        target_currency: impl Into<String>,
    ) -> ChartResult<Self> {
        let mut engine = ChartEngine::new(renderer, config)?;
        let pending_zoom = Rc::new(Cell::new(None));
        let queue = Rc::clone(&pending_zoom);
        engine.set_on_zoom(Some(Box::new(move |direction| queue.set(Some(direction)))));

        Ok(Self {
            base_currency: base_currency.into(),
            target_currency: target_currency.into(),
            history: Arc::from(Vec::new()),
            window: ZoomWindow::new(0, policy)?,
            engine,
            pending_zoom,
            loading: false,
        })
    }

    /// Modal title, e.g. `"AUD / USD"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} / {}", self.base_currency, self.target_currency)
    }

    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    #[must_use]
    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn view(&self) -> ChartSessionView {
        if self.loading {
            ChartSessionView::Loading
        } else if self.history.is_empty() {
            ChartSessionView::Empty
        } else {
            ChartSessionView::Chart
        }
    }

    /// Replaces the full history, resets the zoom window and shows its
    /// trailing slice. A rejected history leaves the session untouched.
    pub fn set_history(&mut self, history: impl Into<Arc<[HistoricalPoint]>>) -> ChartResult<()> {
        let history = history.into();
        debug!(
            pair = %self.title(),
            len = history.len(),
            "chart history replaced"
        );
        let mut window = self.window;
        window.set_available_days(history.len());
        self.engine.set_data(window.visible_slice(&history))?;

        self.history = history;
        self.window = window;
        self.loading = false;
        Ok(())
    }

    #[must_use]
    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    #[must_use]
    pub fn window(&self) -> &ZoomWindow {
        &self.window
    }

    #[must_use]
    pub fn zoom_label(&self) -> String {
        self.window.label()
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.window.can_zoom_in()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.window.can_zoom_out()
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine<R> {
        &self.engine
    }

    pub fn set_container_rect(&mut self, rect: Option<ContainerRect>) {
        self.engine.set_container_rect(rect);
    }

    pub fn set_on_hover(&mut self, observer: Option<HoverObserver>) {
        self.engine.set_on_hover(observer);
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.engine.pointer_move(client_x, client_y);
    }

    pub fn pointer_leave(&mut self) {
        self.engine.pointer_leave();
    }

    /// Forwards a wheel gesture and applies the resulting zoom step.
    pub fn wheel(
        &mut self,
        delta_y: f64,
        client_x: f64,
        client_y: f64,
    ) -> ChartResult<WheelOutcome> {
        let outcome = self.engine.wheel(delta_y, client_x, client_y);
        if let Some(direction) = self.pending_zoom.take() {
            self.apply_zoom(direction)?;
        }
        Ok(outcome)
    }

    /// Zoom-in button (shrinks the window).
    pub fn zoom_in(&mut self) -> ChartResult<bool> {
        self.apply_zoom(ZoomDirection::In)
    }

    /// Zoom-out button (grows the window).
    pub fn zoom_out(&mut self) -> ChartResult<bool> {
        self.apply_zoom(ZoomDirection::Out)
    }

    pub fn reset_zoom(&mut self) -> ChartResult<bool> {
        if !self.window.reset() {
            return Ok(false);
        }
        self.sync_visible_window()?;
        Ok(true)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.engine.render()
    }

    #[must_use]
    pub fn into_engine(self) -> ChartEngine<R> {
        self.engine
    }

    fn apply_zoom(&mut self, direction: ZoomDirection) -> ChartResult<bool> {
        if !self.window.apply(direction) {
            return Ok(false);
        }
        self.sync_visible_window()?;
        Ok(true)
    }

    fn sync_visible_window(&mut self) -> ChartResult<()> {
        let visible = self.window.visible_slice(&self.history);
        self.engine.set_data(visible)
    }
}
