use tracing::trace;

use crate::interaction::{
    ChartHover, ContainerRect, HoverPoint, HoverState, PointerPosition, WheelOutcome,
    resolve_hover, zoom_intent_from_wheel,
};
use crate::render::Renderer;

use super::{ChartEngine, HoverObserver, ZoomObserver};

impl<R: Renderer> ChartEngine<R> {
    /// Updates the container's on-screen rectangle.
    ///
    /// Hosts refresh this before forwarding pointer events (layout may have
    /// moved). `None` means geometry is unavailable and pointer events become
    /// no-ops.
    pub fn set_container_rect(&mut self, rect: Option<ContainerRect>) {
        self.container = rect;
    }

    #[must_use]
    pub fn container_rect(&self) -> Option<ContainerRect> {
        self.container
    }

    pub fn set_on_hover(&mut self, observer: Option<HoverObserver>) {
        self.on_hover = observer;
    }

    /// Registers the zoom observer. While one is registered, wheel events
    /// report `prevent_default` so the page does not scroll.
    pub fn set_on_zoom(&mut self, observer: Option<ZoomObserver>) {
        self.on_zoom = observer;
    }

    #[must_use]
    pub fn has_zoom_observer(&self) -> bool {
        self.on_zoom.is_some()
    }

    #[must_use]
    pub fn hover(&self) -> Option<&ChartHover> {
        self.interaction.hover()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        *self.interaction.hover_state()
    }

    /// Last pointer position over the container, in container pixels.
    #[must_use]
    pub fn last_pointer(&self) -> Option<PointerPosition> {
        self.interaction.last_pointer()
    }

    /// Handles pointer movement given viewport (client) coordinates.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        let Some(rect) = self.usable_container() else {
            trace!("pointer move ignored: container geometry unavailable");
            return;
        };
        let pointer = rect.to_local(client_x, client_y);
        if !pointer.is_finite() {
            return;
        }
        self.interaction.remember_pointer(pointer);

        if self.cache.is_empty() {
            self.interaction.set_hover(None);
            return;
        }

        let hover = resolve_hover(self.cache.points(), self.config.view_box, rect, pointer);
        trace!(x = pointer.x, y = pointer.y, "pointer move");
        self.interaction.set_hover(hover);
        self.notify_hover(hover.map(Into::into));
    }

    /// Pointer left the container: hover clears and the observer gets `None`.
    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        self.interaction.on_pointer_leave();
        self.notify_hover(None);
    }

    /// Handles a wheel gesture.
    ///
    /// The pointer position is remembered so hover can be recomputed once the
    /// host supplies the zoomed window. Without a zoom observer nothing is
    /// emitted and the page keeps its default scrolling.
    pub fn wheel(&mut self, delta_y: f64, client_x: f64, client_y: f64) -> WheelOutcome {
        if let Some(rect) = self.usable_container() {
            let pointer = rect.to_local(client_x, client_y);
            if pointer.is_finite() {
                self.interaction.remember_pointer(pointer);
            }
        }

        let Some(observer) = self.on_zoom.as_mut() else {
            return WheelOutcome::default();
        };

        let intent = zoom_intent_from_wheel(delta_y);
        if let Some(direction) = intent {
            trace!(delta_y, direction = direction.as_str(), "wheel zoom intent");
            observer(direction);
        }

        WheelOutcome {
            intent,
            prevent_default: true,
        }
    }

    pub(super) fn usable_container(&self) -> Option<ContainerRect> {
        self.container.filter(|rect| rect.is_usable())
    }

    pub(super) fn notify_hover(&mut self, payload: Option<HoverPoint>) {
        if let Some(observer) = self.on_hover.as_mut() {
            observer(payload);
        }
    }
}
