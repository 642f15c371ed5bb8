//! Drag operations - live preview movement, placed-action repositioning,
//! canvas panning.
//!
//! ## Performance Notes
//!
//! Mouse move fires for every native pointer event (no coalescing is
//! guaranteed by the host). Each arm is a pure recomputation from the event
//! position: nothing accumulates, so replaying an identical event is a no-op.

use crate::app::Macroboard;
use crate::input::coords::{self, CoordinateContext, CoordinateConverter};
use crate::profile_scope;
use gpui::*;

impl Macroboard {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let mouse_pos = event.position;
        if !coords::is_finite(mouse_pos) {
            return;
        }

        if self.canvas.drag_state.is_dragging_template() {
            let Some(offset) = self.canvas.drag_state.pointer_offset() else {
                return;
            };
            let live_position = CoordinateConverter::apply_offset(mouse_pos, offset);

            // Zero-delta move events are permitted and are no-ops.
            if self.canvas.drag_state.live_position() == Some(live_position) {
                return;
            }
            self.canvas.drag_state.update_live_position(live_position);
            cx.notify();
        } else if let Some(instance_id) = self.canvas.drag_state.dragging_placed() {
            profile_scope!("action_drag");

            let Some(offset) = self.canvas.drag_state.drag_offset() else {
                return;
            };
            let surface = self.surface_bounds(window);
            let board = &mut self.canvas.board;

            let ctx = CoordinateContext::new(surface.origin, board.pan_offset, board.zoom());
            let adjusted = CoordinateConverter::apply_offset(mouse_pos, offset);
            let canvas_pos = CoordinateConverter::screen_to_canvas(adjusted, &ctx);

            if board.move_action(
                instance_id,
                (f32::from(canvas_pos.x), f32::from(canvas_pos.y)),
            ) {
                cx.notify();
            }
        } else if self.canvas.drag_state.is_panning() {
            if let Some(last_pos) = self.canvas.drag_state.last_mouse_pos() {
                let delta = mouse_pos - last_pos;
                self.canvas.board.pan(delta);
                self.canvas.drag_state.update_last_mouse_pos(mouse_pos);
                cx.notify();
            }
        }
    }
}
