//! Coordinate converter tests - round trips and the normative placement
//! scenarios.

use crate::helpers::pos;
use gpui::{Pixels, Point};
use macroboard::input::coords::{CoordinateContext, CoordinateConverter, is_finite};

fn ctx(origin: (f32, f32), pan: (f32, f32), zoom: f32) -> CoordinateContext {
    CoordinateContext::new(pos(origin.0, origin.1), pos(pan.0, pan.1), zoom)
}

fn assert_close(actual: Point<Pixels>, expected: (f32, f32), tolerance: f32) {
    let dx = (f32::from(actual.x) - expected.0).abs();
    let dy = (f32::from(actual.y) - expected.1).abs();
    assert!(
        dx <= tolerance && dy <= tolerance,
        "expected ({}, {}), got ({}, {})",
        expected.0,
        expected.1,
        f32::from(actual.x),
        f32::from(actual.y)
    );
}

#[test]
fn test_round_trip_is_identity() {
    let zooms = [0.62, 1.0, 1.1236, 1.59];
    let pans = [(0.0, 0.0), (10.0, 10.0), (-250.0, 400.0)];
    let points = [(0.0, 0.0), (250.0, 250.0), (-31.5, 7.25), (1000.0, -1000.0)];

    for &zoom in &zooms {
        for &pan in &pans {
            let ctx = ctx((50.0, 50.0), pan, zoom);
            for &p in &points {
                let screen = CoordinateConverter::canvas_to_screen(pos(p.0, p.1), &ctx);
                let back = CoordinateConverter::screen_to_canvas(screen, &ctx);
                assert_close(back, p, 0.01);
            }
        }
    }
}

#[test]
fn test_screen_to_local_subtracts_origin() {
    let local = CoordinateConverter::screen_to_local(pos(300.0, 300.0), pos(50.0, 50.0));
    assert_eq!(local, pos(250.0, 250.0));
}

#[test]
fn test_canvas_space_equals_local_space_at_default_view() {
    // At zoom 1, pan 0 the canvas space is the local space.
    let ctx = ctx((50.0, 50.0), (0.0, 0.0), 1.0);
    let canvas = CoordinateConverter::screen_to_canvas(pos(300.0, 300.0), &ctx);
    assert_close(canvas, (250.0, 250.0), 0.0);
}

#[test]
fn test_zoomed_panned_conversion() {
    // Two zoom-in steps at 6% and a (10,10) pan: screen (300,300) lands at
    // (300 - 50 - 10) / 1.06^2 on both axes.
    let zoom = 1.06_f32 * 1.06;
    let expected = 240.0 / zoom;
    let ctx = ctx((50.0, 50.0), (10.0, 10.0), zoom);
    let canvas = CoordinateConverter::screen_to_canvas(pos(300.0, 300.0), &ctx);
    assert_close(canvas, (expected, expected), 0.01);
}

#[test]
fn test_center_anchor_offset() {
    let offset = CoordinateConverter::center_anchor_offset((40.0, 20.0));
    assert_eq!(offset, pos(20.0, 10.0));

    let centered = CoordinateConverter::apply_offset(pos(100.0, 100.0), offset);
    assert_eq!(centered, pos(80.0, 90.0));
}

#[test]
fn test_is_finite_rejects_bad_coordinates() {
    assert!(is_finite(pos(0.0, 0.0)));
    assert!(is_finite(pos(-1e6, 1e6)));
    assert!(!is_finite(pos(f32::NAN, 0.0)));
    assert!(!is_finite(pos(0.0, f32::INFINITY)));
    assert!(!is_finite(pos(f32::NEG_INFINITY, f32::NAN)));
}

#[test]
fn test_context_carries_call_time_origin() {
    // The same screen point maps differently once the surface origin moves;
    // callers must rebuild the context after layout changes.
    let before = CoordinateConverter::screen_to_canvas(pos(300.0, 300.0), &ctx((50.0, 50.0), (0.0, 0.0), 1.0));
    let after = CoordinateConverter::screen_to_canvas(pos(300.0, 300.0), &ctx((80.0, 50.0), (0.0, 0.0), 1.0));
    assert_eq!(f32::from(before.x) - f32::from(after.x), 30.0);
    assert_eq!(f32::from(before.y), f32::from(after.y));
}
