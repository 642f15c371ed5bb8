//! Action palette rendering - the left dock of draggable templates.
//!
//! The card layout math lives in [`palette_item_bounds`] and is shared with
//! the mouse-down handler, so rendering and pickup hit-testing can never
//! disagree about where a card is.

use crate::constants::{
    HEADER_HEIGHT, PALETTE_HEADER_HEIGHT, PALETTE_ITEM_GAP, PALETTE_ITEM_HEIGHT,
    PALETTE_ITEM_INSET, PALETTE_ITEM_WIDTH, PALETTE_WIDTH,
};
use crate::theme::Theme;
use crate::types::ActionTemplate;
use gpui::*;

/// Screen-space rectangle of the palette card at `index`.
pub fn palette_item_bounds(index: usize) -> Bounds<Pixels> {
    let x = PALETTE_ITEM_INSET;
    let y = HEADER_HEIGHT
        + PALETTE_HEADER_HEIGHT
        + PALETTE_ITEM_GAP
        + index as f32 * (PALETTE_ITEM_HEIGHT + PALETTE_ITEM_GAP);
    Bounds {
        origin: point(px(x), px(y)),
        size: size(px(PALETTE_ITEM_WIDTH), px(PALETTE_ITEM_HEIGHT)),
    }
}

/// The palette card under the pointer, if any.
pub fn palette_item_at(pos: Point<Pixels>, count: usize) -> Option<(usize, Bounds<Pixels>)> {
    (0..count)
        .map(|index| (index, palette_item_bounds(index)))
        .find(|(_, bounds)| bounds.contains(&pos))
}

fn render_palette_card(template: &ActionTemplate, dragging: bool, theme: &Theme) -> Stateful<Div> {
    let accent = theme.for_kind(template.kind);
    let hover_border = theme.primary;

    div()
        .id(ElementId::Name(format!("palette-{}", template.id).into()))
        .w(px(PALETTE_ITEM_WIDTH))
        .h(px(PALETTE_ITEM_HEIGHT))
        .bg(theme.card_background)
        .border_1()
        .border_color(if dragging { theme.ghost_border } else { theme.card_border })
        .rounded(px(6.0))
        .cursor_pointer()
        .hover(move |s| s.border_color(hover_border))
        .flex()
        .flex_row()
        .items_center()
        .gap(px(8.0))
        .px(px(10.0))
        .child(
            div()
                .w(px(8.0))
                .h(px(8.0))
                .rounded(px(2.0))
                .bg(accent),
        )
        .child(
            div()
                .text_size(px(13.0))
                .text_color(theme.foreground)
                .child(template.label.clone()),
        )
        .child(
            div()
                .flex_1()
                .flex()
                .justify_end()
                .child(
                    div()
                        .text_size(px(9.0))
                        .text_color(theme.muted_foreground)
                        .child(template.kind.type_label()),
                ),
        )
}

/// Render the palette dock.
pub fn render_palette(
    templates: &[ActionTemplate],
    dragging_template: Option<&str>,
    theme: &Theme,
) -> Div {
    div()
        .w(px(PALETTE_WIDTH))
        .h_full()
        .bg(theme.chrome_background)
        .border_r_1()
        .border_color(theme.border)
        .flex()
        .flex_col()
        .child(
            div()
                .h(px(PALETTE_HEADER_HEIGHT))
                .flex()
                .items_center()
                .px(px(PALETTE_ITEM_INSET))
                .text_size(px(14.0))
                .text_color(theme.muted_foreground)
                .child("Actions"),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .pt(px(PALETTE_ITEM_GAP))
                .gap(px(PALETTE_ITEM_GAP))
                .children(templates.iter().map(|template| {
                    let dragging = dragging_template == Some(template.id.as_str());
                    render_palette_card(template, dragging, theme)
                })),
        )
}
