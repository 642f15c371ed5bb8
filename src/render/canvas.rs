//! Canvas rendering - the background grid and placed-action projection.
//!
//! Rendering is a pure projection: every placed action's canvas-space
//! position goes through the current pan/zoom to a screen rectangle, drawn
//! at `size * zoom`. Nothing is re-derived from previous frames.
//!
//! ## Performance Notes
//!
//! This is a hot path - rendering happens every frame. Off-screen actions
//! are culled with a margin so they do not pop in at the edges, and the grid
//! is painted directly to the GPU via `paint_quad`.

use crate::constants::{ACTION_LABEL_SIZE, CULLING_MARGIN, GRID_SPACING, PALETTE_ITEM_HEIGHT, PALETTE_ITEM_WIDTH};
use crate::profile_scope;
use crate::theme::Theme;
use crate::types::{ActionTemplate, PlacedAction};
use gpui::*;
use std::collections::HashMap;

/// Paint the tiled background reference grid.
///
/// Spacing scales with zoom and the line phase follows the pan offset, so
/// pan/zoom feedback is visible even with zero placed actions.
fn paint_grid(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    pan_offset: Point<Pixels>,
    zoom: f32,
    color: Hsla,
) {
    let spacing = GRID_SPACING * zoom;
    if spacing < 4.0 {
        return;
    }

    let left = f32::from(bounds.origin.x);
    let top = f32::from(bounds.origin.y);
    let width = f32::from(bounds.size.width);
    let height = f32::from(bounds.size.height);

    let phase_x = f32::from(pan_offset.x).rem_euclid(spacing);
    let phase_y = f32::from(pan_offset.y).rem_euclid(spacing);

    let mut x = left + phase_x;
    while x <= left + width {
        window.paint_quad(quad(
            Bounds {
                origin: point(px(x), px(top)),
                size: size(px(1.0), px(height)),
            },
            px(0.0),
            color,
            px(0.0),
            color,
            Default::default(),
        ));
        x += spacing;
    }

    let mut y = top + phase_y;
    while y <= top + height {
        window.paint_quad(quad(
            Bounds {
                origin: point(px(left), px(y)),
                size: size(px(width), px(1.0)),
            },
            px(0.0),
            color,
            px(0.0),
            color,
            Default::default(),
        ));
        y += spacing;
    }
}

fn render_grid(pan_offset: Point<Pixels>, zoom: f32, grid_line: Hsla) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_grid(bounds, window, pan_offset, zoom, grid_line);
        },
    )
    .absolute()
    .size_full()
}

/// Project every placed action through the current view state into
/// absolutely positioned cards.
fn render_actions(
    actions: &[PlacedAction],
    pan_offset: Point<Pixels>,
    zoom: f32,
    templates: &HashMap<String, ActionTemplate>,
    viewport_size: Size<Pixels>,
    theme: &Theme,
) -> Vec<Div> {
    profile_scope!("render_actions");

    let offset_x = f32::from(pan_offset.x);
    let offset_y = f32::from(pan_offset.y);

    // Viewport bounds for culling (with margin to prevent pop-in)
    let vp_left = -CULLING_MARGIN;
    let vp_top = -CULLING_MARGIN;
    let vp_right = f32::from(viewport_size.width) + CULLING_MARGIN;
    let vp_bottom = f32::from(viewport_size.height) + CULLING_MARGIN;

    let mut result = Vec::with_capacity(actions.len().min(100));

    for action in actions {
        let x = action.position.0 * zoom + offset_x;
        let y = action.position.1 * zoom + offset_y;
        let w = action.size.0 * zoom;
        let h = action.size.1 * zoom;

        if x + w < vp_left || x > vp_right || y + h < vp_top || y > vp_bottom {
            continue;
        }

        let template = templates.get(&action.template_id);
        let label = template
            .map(|t| t.label.clone())
            .unwrap_or_else(|| action.template_id.clone());
        let accent = template
            .map(|t| theme.for_kind(t.kind))
            .unwrap_or(theme.card_border);

        result.push(
            div()
                .absolute()
                .left(px(x))
                .top(px(y))
                .w(px(w))
                .h(px(h))
                .bg(theme.card_background)
                .border_1()
                .border_color(accent)
                .rounded(px(6.0 * zoom))
                .overflow_hidden()
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_size(px(ACTION_LABEL_SIZE * zoom))
                        .text_color(theme.foreground)
                        .child(label),
                ),
        );
    }

    result
}

/// Render the canvas area container: grid underneath, projected actions on
/// top.
pub fn render_canvas_area(
    actions: &[PlacedAction],
    pan_offset: Point<Pixels>,
    zoom: f32,
    templates: &HashMap<String, ActionTemplate>,
    viewport_size: Size<Pixels>,
    theme: &Theme,
) -> Div {
    profile_scope!("render_canvas_area");

    div()
        .flex_1()
        .h_full()
        .bg(theme.surface_background)
        .overflow_hidden()
        .relative()
        .child(render_grid(pan_offset, zoom, theme.grid_line))
        .children(render_actions(
            actions,
            pan_offset,
            zoom,
            templates,
            viewport_size,
            theme,
        ))
}

/// The floating preview that follows the pointer during a template drag.
///
/// It floats over the whole window in screen space and is not zoom-scaled;
/// its size mirrors the palette card the drag started from.
pub fn render_drag_preview(template: &ActionTemplate, live_position: Point<Pixels>, theme: &Theme) -> Div {
    div()
        .absolute()
        .left(live_position.x)
        .top(live_position.y)
        .w(px(PALETTE_ITEM_WIDTH))
        .h(px(PALETTE_ITEM_HEIGHT))
        .bg(theme.card_background)
        .border_2()
        .border_color(theme.ghost_border)
        .rounded(px(6.0))
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(ACTION_LABEL_SIZE))
                .text_color(theme.foreground)
                .child(template.label.clone()),
        )
}
