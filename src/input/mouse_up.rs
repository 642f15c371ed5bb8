//! Mouse up event handling - drop resolution and drag finalization.

use crate::app::Macroboard;
use crate::input::coords;
use gpui::*;

impl Macroboard {
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(template_id) = self.canvas.drag_state.dragging_template().map(str::to_string) {
            let surface = self.surface_bounds(window);
            let release = event.position;

            // Inclusive bounds: a release exactly on the surface border
            // counts as a hit.
            if coords::is_finite(release) && self.canvas.board.hit_test(release, surface) {
                match self.palette.catalog.get(&template_id) {
                    Some(template) => {
                        if let Some(action) =
                            self.canvas.board.commit_placement(&template, release, surface)
                        {
                            tracing::debug!(
                                template = %template_id,
                                instance = %action.instance_id,
                                "placement committed"
                            );
                        }
                    }
                    None => {
                        tracing::warn!(template = %template_id, "dropped template missing from catalog");
                    }
                }
            } else {
                tracing::debug!(template = %template_id, "drag cancelled outside the surface");
            }
        } else if let Some(instance_id) = self.canvas.drag_state.dragging_placed() {
            self.canvas.board.update_spatial_index(instance_id);
        } else {
            // Panning ends on middle-button release; nothing to do here.
            return;
        }

        self.canvas.drag_state.reset();
        cx.notify();
    }

    pub fn handle_middle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.canvas.drag_state.is_panning() {
            self.canvas.drag_state.reset();
            cx.notify();
        }
    }
}
