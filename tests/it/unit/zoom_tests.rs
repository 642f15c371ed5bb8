//! Stepwise zoom tests - bounds, anchoring, and counter authority.

use crate::helpers::{TestBoardBuilder, pos};
use macroboard::board::Board;
use macroboard::config::Config;
use macroboard::input::coords::{CoordinateContext, CoordinateConverter};
use macroboard::types::ZoomDirection;

const ORIGIN: (f32, f32) = (50.0, 50.0);

fn canvas_under(board: &Board, anchor: (f32, f32)) -> (f32, f32) {
    let ctx = CoordinateContext::new(pos(ORIGIN.0, ORIGIN.1), board.pan_offset, board.zoom());
    let p = CoordinateConverter::screen_to_canvas(pos(anchor.0, anchor.1), &ctx);
    (f32::from(p.x), f32::from(p.y))
}

#[test]
fn test_zoom_in_is_bounded_by_step_limit() {
    let mut board = Board::new_for_test();
    let anchor = pos(300.0, 300.0);
    let origin = pos(ORIGIN.0, ORIGIN.1);
    let limit = board.zoom_limit();

    for i in 1..=(limit + 4) {
        let stepped = board.zoom_at(ZoomDirection::In, anchor, origin);
        assert_eq!(stepped, i <= limit);
        assert_eq!(board.zoom_step(), i.min(limit));
    }

    let expected = 1.06_f32.powi(limit);
    assert!((board.zoom() - expected).abs() < 1e-4);
}

#[test]
fn test_zoom_out_is_bounded_symmetrically() {
    let mut board = Board::new_for_test();
    let anchor = pos(300.0, 300.0);
    let origin = pos(ORIGIN.0, ORIGIN.1);
    let limit = board.zoom_limit();

    for _ in 0..(limit + 4) {
        board.zoom_at(ZoomDirection::Out, anchor, origin);
    }

    assert_eq!(board.zoom_step(), -limit);
    assert!(!board.zoom_at(ZoomDirection::Out, anchor, origin));

    let expected = 1.0 / 1.06_f32.powi(limit);
    assert!((board.zoom() - expected).abs() < 1e-4);
}

#[test]
fn test_zoom_is_anchored_at_the_pointer() {
    let mut board = TestBoardBuilder::new().with_pan(37.0, -12.0).build();
    let anchor = (300.0, 200.0);
    let origin = pos(ORIGIN.0, ORIGIN.1);

    let before = canvas_under(&board, anchor);
    assert!(board.zoom_at(ZoomDirection::In, pos(anchor.0, anchor.1), origin));
    let after = canvas_under(&board, anchor);

    assert!((before.0 - after.0).abs() < 0.01);
    assert!((before.1 - after.1).abs() < 0.01);

    // And back out again, anchored at a different point.
    let anchor2 = (120.0, 400.0);
    let before = canvas_under(&board, anchor2);
    assert!(board.zoom_at(ZoomDirection::Out, pos(anchor2.0, anchor2.1), origin));
    let after = canvas_under(&board, anchor2);

    assert!((before.0 - after.0).abs() < 0.01);
    assert!((before.1 - after.1).abs() < 0.01);
}

#[test]
fn test_zoom_level_is_recomputed_from_the_counter() {
    let mut board = Board::new_for_test();
    let anchor = pos(250.0, 250.0);
    let origin = pos(ORIGIN.0, ORIGIN.1);

    // A long in/out walk must land exactly back on 1.0: the scale is
    // recomputed from the step counter, never accumulated.
    for _ in 0..8 {
        board.zoom_at(ZoomDirection::In, anchor, origin);
    }
    for _ in 0..8 {
        board.zoom_at(ZoomDirection::Out, anchor, origin);
    }

    assert_eq!(board.zoom_step(), 0);
    assert_eq!(board.zoom(), 1.0);
}

#[test]
fn test_zoom_respects_configured_limit() {
    let config = Config {
        zoom_limit: 3,
        ..Config::default()
    };
    let mut board = Board::new(&config);
    let anchor = pos(100.0, 100.0);
    let origin = pos(0.0, 0.0);

    for _ in 0..10 {
        board.zoom_at(ZoomDirection::In, anchor, origin);
    }
    assert_eq!(board.zoom_step(), 3);
}

#[test]
fn test_restored_zoom_step_is_clamped() {
    let board = TestBoardBuilder::new().with_zoom_steps(40).build();
    assert_eq!(board.zoom_step(), board.zoom_limit());
    assert!((board.zoom() - 1.06_f32.powi(board.zoom_limit())).abs() < 1e-4);
}

#[test]
fn test_pan_is_unbounded() {
    let mut board = Board::new_for_test();
    board.pan(pos(1e6, -1e6));
    board.pan(pos(0.5, 0.5));

    assert_eq!(f32::from(board.pan_offset.x), 1e6 + 0.5);
    assert_eq!(f32::from(board.pan_offset.y), -1e6 + 0.5);
}
