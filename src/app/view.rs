//! The root view - window chrome and listener wiring.

use super::Macroboard;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::render::canvas::{render_canvas_area, render_drag_preview};
use crate::render::palette::render_palette;
use crate::theme::Theme;
use crate::types::ActionTemplate;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::collections::HashMap;

fn render_header(zoom: f32, theme: &Theme) -> Div {
    div()
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px(px(12.0))
        .bg(theme.chrome_background)
        .border_b_1()
        .border_color(theme.border)
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::MEDIUM)
                .child("Macroboard"),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(theme.muted_foreground)
                .child(format!("{:.0}%", zoom * 100.0)),
        )
}

fn render_footer(
    zoom: f32,
    pan_offset: Point<Pixels>,
    action_count: usize,
    theme: &Theme,
) -> Div {
    div()
        .h(px(FOOTER_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px(px(12.0))
        .bg(theme.chrome_background)
        .border_t_1()
        .border_color(theme.border)
        .text_size(px(11.0))
        .text_color(theme.muted_foreground)
        .child(format!(
            "{} action{}",
            action_count,
            if action_count == 1 { "" } else { "s" }
        ))
        .child(format!(
            "pan ({:.0}, {:.0}) \u{00b7} zoom {:.0}%",
            f32::from(pan_offset.x),
            f32::from(pan_offset.y),
            zoom * 100.0
        ))
}

impl Render for Macroboard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.system.perf.frame();

        let theme = self.system.theme;
        let templates = self.palette.catalog.snapshot();
        let template_map: HashMap<String, ActionTemplate> = templates
            .iter()
            .map(|t| (t.id.clone(), t.clone()))
            .collect();

        let surface = self.surface_bounds(window);
        let board = &self.canvas.board;
        let zoom = board.zoom();
        let pan_offset = board.pan_offset;
        let action_count = board.actions.len();

        let dragging_template = self
            .canvas
            .drag_state
            .dragging_template()
            .map(str::to_string);
        let preview = dragging_template
            .as_deref()
            .and_then(|id| template_map.get(id).cloned())
            .zip(self.canvas.drag_state.live_position());

        div()
            .size_full()
            .flex()
            .flex_col()
            .relative()
            .bg(theme.background)
            .text_color(theme.foreground)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Middle, cx.listener(Self::handle_middle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up(MouseButton::Middle, cx.listener(Self::handle_middle_mouse_up))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .child(render_header(zoom, &theme))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(render_palette(&templates, dragging_template.as_deref(), &theme))
                    .child(render_canvas_area(
                        &board.actions,
                        pan_offset,
                        zoom,
                        &template_map,
                        surface.size,
                        &theme,
                    )),
            )
            .child(render_footer(zoom, pan_offset, action_count, &theme))
            .when_some(preview, |d, (template, live_position)| {
                d.child(render_drag_preview(&template, live_position, &theme))
            })
    }
}
