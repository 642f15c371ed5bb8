//! Canvas transformations - scroll, zoom, surface layout.

use crate::app::Macroboard;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, PALETTE_WIDTH, SCROLL_LINE_PAN};
use crate::types::ZoomDirection;
use gpui::*;

impl Macroboard {
    /// The design surface's current screen-space rectangle.
    ///
    /// Recomputed from the live window layout on every call; callers must
    /// not cache it across layout changes.
    pub fn surface_bounds(&self, window: &Window) -> Bounds<Pixels> {
        let window_size = window.bounds().size;
        Bounds {
            origin: point(px(PALETTE_WIDTH), px(HEADER_HEIGHT)),
            size: size(
                px((f32::from(window_size.width) - PALETTE_WIDTH).max(0.0)),
                px((f32::from(window_size.height) - HEADER_HEIGHT - FOOTER_HEIGHT).max(0.0)),
            ),
        }
    }

    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let surface = self.surface_bounds(window);
        let board = &mut self.canvas.board;

        // Scrolling over the palette or chrome is not a canvas interaction.
        if !board.hit_test(event.position, surface) {
            return;
        }

        // Zoom with Command (platform) or Control key, one step per notch,
        // anchored at the pointer.
        if event.modifiers.platform || event.modifiers.control {
            let delta_y = match event.delta {
                ScrollDelta::Pixels(delta) => f32::from(delta.y),
                ScrollDelta::Lines(delta) => delta.y,
            };
            if delta_y == 0.0 {
                return;
            }
            let direction = if delta_y > 0.0 {
                ZoomDirection::In
            } else {
                ZoomDirection::Out
            };
            if board.zoom_at(direction, event.position, surface.origin) {
                cx.notify();
            }
            return;
        }

        // Default: canvas panning
        match event.delta {
            ScrollDelta::Pixels(delta) => board.pan(delta),
            ScrollDelta::Lines(delta) => board.pan(point(
                px(delta.x * SCROLL_LINE_PAN),
                px(delta.y * SCROLL_LINE_PAN),
            )),
        }
        cx.notify();
    }
}
