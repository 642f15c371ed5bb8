//! Coordinate conversion utilities for canvas interactions.
//!
//! Three coordinate spaces are in play:
//!
//! - **screen**: window-relative pointer coordinates, as delivered by mouse
//!   events;
//! - **surface-local**: screen minus the design surface's current origin;
//! - **canvas**: pan- and zoom-adjusted logical space where placed actions
//!   live, normalized to zoom 1.0.
//!
//! All conversions are pure. A [`CoordinateContext`] must be rebuilt from the
//! current layout on every event; a cached surface origin goes stale the
//! moment the window is resized.

use gpui::{Pixels, Point, point, px};

/// Context needed for coordinate conversions.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    /// Screen-space origin of the design surface at call time
    pub surface_origin: Point<Pixels>,
    pub pan_offset: Point<Pixels>,
    pub zoom: f32,
}

impl CoordinateContext {
    #[inline]
    pub fn new(surface_origin: Point<Pixels>, pan_offset: Point<Pixels>, zoom: f32) -> Self {
        Self {
            surface_origin,
            pan_offset,
            zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to surface-local space.
    #[inline]
    pub fn screen_to_local(screen_pos: Point<Pixels>, surface_origin: Point<Pixels>) -> Point<Pixels> {
        point(screen_pos.x - surface_origin.x, screen_pos.y - surface_origin.y)
    }

    /// Convert a surface-local position to canvas space.
    #[inline]
    pub fn local_to_canvas(local_pos: Point<Pixels>, ctx: &CoordinateContext) -> Point<Pixels> {
        point(
            px((f32::from(local_pos.x) - f32::from(ctx.pan_offset.x)) / ctx.zoom),
            px((f32::from(local_pos.y) - f32::from(ctx.pan_offset.y)) / ctx.zoom),
        )
    }

    /// Convert a screen position to canvas space.
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point<Pixels>, ctx: &CoordinateContext) -> Point<Pixels> {
        Self::local_to_canvas(Self::screen_to_local(screen_pos, ctx.surface_origin), ctx)
    }

    /// Convert a canvas position back to screen space.
    #[inline]
    pub fn canvas_to_screen(canvas_pos: Point<Pixels>, ctx: &CoordinateContext) -> Point<Pixels> {
        point(
            px(f32::from(canvas_pos.x) * ctx.zoom
                + f32::from(ctx.pan_offset.x)
                + f32::from(ctx.surface_origin.x)),
            px(f32::from(canvas_pos.y) * ctx.zoom
                + f32::from(ctx.pan_offset.y)
                + f32::from(ctx.surface_origin.y)),
        )
    }

    /// Offset that centers a dragged preview of the given size on the
    /// pointer. Computed once at drag start from the measured size of the
    /// source palette card, not the live preview's own layout.
    #[inline]
    pub fn center_anchor_offset(size: (f32, f32)) -> Point<Pixels> {
        point(px(size.0 / 2.0), px(size.1 / 2.0))
    }

    /// Apply an offset to a point.
    #[inline]
    pub fn apply_offset(pos: Point<Pixels>, offset: Point<Pixels>) -> Point<Pixels> {
        point(pos.x - offset.x, pos.y - offset.y)
    }
}

/// Whether a pointer position has finite coordinates. Detached or off-screen
/// widgets can report non-finite positions; handlers ignore those events.
#[inline]
pub fn is_finite(pos: Point<Pixels>) -> bool {
    f32::from(pos.x).is_finite() && f32::from(pos.y).is_finite()
}
