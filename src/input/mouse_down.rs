//! Mouse down event handling - palette pickup, placed-action pickup, panning.
//!
//! ## Performance Notes
//!
//! Mouse down is a hot path during user interaction. Placed-action lookup
//! goes through the R-tree spatial index (O(log n)); candidates are checked
//! in reverse z-order so the topmost action wins.

use crate::app::Macroboard;
use crate::constants::PALETTE_WIDTH;
use crate::input::coords::{self, CoordinateContext, CoordinateConverter};
use crate::profile_scope;
use crate::render::palette::palette_item_at;
use gpui::*;

impl Macroboard {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        let mouse_pos = event.position;
        if !coords::is_finite(mouse_pos) {
            return;
        }

        // At most one drag session system-wide. A pointer-down while a drag
        // is in flight is a stray duplicate (or a second touch point).
        if self.canvas.drag_state.is_dragging_template() || self.canvas.drag_state.is_dragging_placed() {
            debug_assert!(false, "pointer-down during an active drag session");
            tracing::warn!("ignoring pointer-down during an active drag session");
            return;
        }
        if self.canvas.drag_state.is_panning() {
            return;
        }

        // Pickup from the palette
        if f32::from(mouse_pos.x) < PALETTE_WIDTH {
            let templates = self.palette.catalog.snapshot();
            let Some((index, card)) = palette_item_at(mouse_pos, templates.len()) else {
                return;
            };
            let template = &templates[index];

            // Center-anchor offset, measured once from the source card's
            // laid-out size and reused for the whole drag. The floating
            // preview may not be laid out yet at this point.
            let offset = CoordinateConverter::center_anchor_offset((
                f32::from(card.size.width),
                f32::from(card.size.height),
            ));
            let live_position = CoordinateConverter::apply_offset(mouse_pos, offset);

            if self
                .canvas
                .drag_state
                .start_template_drag(template.id.as_str(), offset, live_position)
            {
                tracing::debug!(template = %template.id, "template drag started");
                cx.notify();
            }
            return;
        }

        // Pickup of an action already on the surface
        profile_scope!("hit_test_actions");

        let surface = self.surface_bounds(window);
        if !self.canvas.board.hit_test(mouse_pos, surface) {
            return;
        }

        let board = &self.canvas.board;
        let ctx = CoordinateContext::new(surface.origin, board.pan_offset, board.zoom());
        let canvas_pos = CoordinateConverter::screen_to_canvas(mouse_pos, &ctx);

        let hit = board.action_at_point(f32::from(canvas_pos.x), f32::from(canvas_pos.y));
        let Some(instance_id) = hit else { return };
        let Some(action) = board.get_action(instance_id) else { return };

        let top_left = CoordinateConverter::canvas_to_screen(
            point(px(action.position.0), px(action.position.1)),
            &ctx,
        );
        let drag_offset = point(mouse_pos.x - top_left.x, mouse_pos.y - top_left.y);

        if self.canvas.drag_state.start_placed_drag(instance_id, drag_offset) {
            cx.notify();
        }
    }

    pub fn handle_middle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let surface = self.surface_bounds(window);
        if !self.canvas.board.hit_test(event.position, surface) {
            return;
        }
        if self.canvas.drag_state.start_panning(event.position) {
            cx.notify();
        }
    }
}
