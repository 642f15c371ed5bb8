//! Board tests - placement commits, hit testing, sinks, and snapshots.

use crate::helpers::{
    FailingSink, RecordingSink, TestBoardBuilder, assert_action_count, click_template,
    delay_template, pos, test_surface,
};
use macroboard::board::{Board, BoardState};
use macroboard::config::Config;

#[test]
fn test_new_board_is_empty_at_default_view() {
    let board = Board::new_for_test();
    assert!(board.actions.is_empty());
    assert_eq!(board.zoom(), 1.0);
    assert_eq!(board.zoom_step(), 0);
    assert_eq!(f32::from(board.pan_offset.x), 0.0);
}

// ==================== Hit Testing ====================

#[test]
fn test_hit_test_is_edge_inclusive() {
    let board = Board::new_for_test();
    let surface = test_surface();

    assert!(board.hit_test(pos(50.0, 50.0), surface));
    assert!(board.hit_test(pos(450.0, 450.0), surface));
    assert!(board.hit_test(pos(450.0, 50.0), surface));
    assert!(board.hit_test(pos(300.0, 300.0), surface));

    // One unit outside on either axis misses.
    assert!(!board.hit_test(pos(451.0, 450.0), surface));
    assert!(!board.hit_test(pos(450.0, 451.0), surface));
    assert!(!board.hit_test(pos(49.0, 50.0), surface));
    assert!(!board.hit_test(pos(50.0, 49.0), surface));
}

// ==================== Placement ====================

#[test]
fn test_commit_placement_at_default_view() {
    // Canonical scenario: surface (50,50)-(450,450), zoom 0, pan (0,0),
    // release at (300,300).
    let mut board = Board::new_for_test();
    let template = click_template();

    let action = board
        .commit_placement(&template, pos(300.0, 300.0), test_surface())
        .expect("drop inside the surface must commit");

    assert_eq!(action.template_id, "click");
    assert_eq!(action.position, (250.0, 250.0));
    assert_eq!(action.size, (40.0, 20.0));
    assert_action_count(&board, 1);
    assert_eq!(board.actions[0].instance_id, action.instance_id);
}

#[test]
fn test_commit_placement_zoomed_and_panned() {
    // Two zoom-in steps (zoom = 1.06^2) with pan (10,10); release at
    // (300,300) lands at (300 - 50 - 10) / 1.1236 on both axes.
    let mut board = TestBoardBuilder::new()
        .with_zoom_steps(2)
        .with_pan(10.0, 10.0)
        .build();
    let template = click_template();

    let action = board
        .commit_placement(&template, pos(300.0, 300.0), test_surface())
        .unwrap();

    let expected = 240.0 / (1.06_f32 * 1.06);
    assert!((action.position.0 - expected).abs() < 0.01);
    assert!((action.position.1 - expected).abs() < 0.01);
}

#[test]
fn test_commit_on_the_boundary_commits() {
    let mut board = Board::new_for_test();
    let action = board.commit_placement(&click_template(), pos(450.0, 450.0), test_surface());
    assert!(action.is_some());
    assert_action_count(&board, 1);
}

#[test]
fn test_instance_ids_are_unique() {
    let mut board = Board::new_for_test();
    let a = board
        .commit_placement(&click_template(), pos(100.0, 100.0), test_surface())
        .unwrap();
    let b = board
        .commit_placement(&click_template(), pos(100.0, 100.0), test_surface())
        .unwrap();
    assert_ne!(a.instance_id, b.instance_id);
    assert_action_count(&board, 2);
}

#[test]
fn test_placement_carries_template_defaults() {
    let mut board = Board::new_for_test();
    let action = board
        .commit_placement(&delay_template(), pos(200.0, 200.0), test_surface())
        .unwrap();
    assert_eq!(action.config.delay_ms, 1000);
    assert_eq!(action.config.occurrences, 1);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "placement commit outside the surface")]
fn test_commit_outside_the_surface_asserts() {
    let mut board = Board::new_for_test();
    board.commit_placement(&click_template(), pos(451.0, 300.0), test_surface());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "placement commit outside the surface")]
fn test_commit_with_non_finite_point_asserts() {
    let mut board = Board::new_for_test();
    board.commit_placement(&click_template(), pos(f32::NAN, 300.0), test_surface());
}

// ==================== Sinks ====================

#[test]
fn test_sink_receives_committed_placement() {
    let mut board = Board::new_for_test();
    let sink = RecordingSink::new();
    board.register_sink(Box::new(sink.clone()));

    board
        .commit_placement(&click_template(), pos(300.0, 300.0), test_surface())
        .unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template_id, "click");
    assert_eq!(events[0].position, (250.0, 250.0));
    assert_eq!(events[0].size, (40.0, 20.0));
}

#[test]
fn test_failing_sink_does_not_roll_back_the_placement() {
    let mut board = Board::new_for_test();
    let sink = RecordingSink::new();
    board.register_sink(Box::new(FailingSink));
    board.register_sink(Box::new(sink.clone()));

    let action = board.commit_placement(&click_template(), pos(300.0, 300.0), test_surface());

    assert!(action.is_some());
    assert_action_count(&board, 1);
    // Later sinks still run after an earlier one failed.
    assert_eq!(sink.events().len(), 1);
}

// ==================== Pointer Lookup & Repositioning ====================

#[test]
fn test_action_at_point_finds_the_topmost_hit() {
    let mut board = Board::new_for_test();
    let first = board
        .commit_placement(&click_template(), pos(300.0, 300.0), test_surface())
        .unwrap();
    let second = board
        .commit_placement(&click_template(), pos(305.0, 302.0), test_surface())
        .unwrap();

    // Both cards overlap at the first card's position; the later placement
    // is on top.
    let hit = board.action_at_point(first.position.0 + 10.0, first.position.1 + 5.0);
    assert_eq!(hit, Some(second.instance_id));

    assert_eq!(board.action_at_point(-500.0, -500.0), None);
}

#[test]
fn test_move_action_updates_record_and_index() {
    let mut board = Board::new_for_test();
    let action = board
        .commit_placement(&click_template(), pos(300.0, 300.0), test_surface())
        .unwrap();
    let id = action.instance_id;

    assert!(board.move_action(id, (800.0, 900.0)));
    board.update_spatial_index(id);

    assert_eq!(board.get_action(id).unwrap().position, (800.0, 900.0));
    assert_eq!(board.action_at_point(810.0, 905.0), Some(id));
    assert_eq!(board.action_at_point(255.0, 255.0), None);
}

#[test]
fn test_move_unknown_action_is_refused() {
    let mut board = Board::new_for_test();
    assert!(!board.move_action(uuid::Uuid::new_v4(), (0.0, 0.0)));
}

// ==================== Snapshots ====================

#[test]
fn test_board_state_round_trip() {
    let board = TestBoardBuilder::new()
        .with_pan(50.0, 75.0)
        .with_zoom_steps(3)
        .with_action("click", (100.0, 200.0), (40.0, 20.0))
        .with_action("delay", (400.0, 300.0), (120.0, 32.0))
        .build();

    let state = board.to_state();
    let json = serde_json::to_string_pretty(&state).unwrap();
    let restored: BoardState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.pan_offset, (50.0, 75.0));
    assert_eq!(restored.zoom_step, 3);
    assert_eq!(restored.actions.len(), 2);

    // The zoom float is reconstructed from the counter on restore.
    let restored_board = Board::from_state(restored, &Config::default());
    assert_eq!(restored_board.zoom_step(), 3);
    assert!((restored_board.zoom() - 1.06_f32.powi(3)).abs() < 1e-4);
}

#[test]
fn test_restored_board_answers_pointer_queries() {
    let state = TestBoardBuilder::new()
        .with_action("click", (100.0, 200.0), (40.0, 20.0))
        .build()
        .to_state();

    let board = Board::from_state(state, &Config::default());
    let id = board.actions[0].instance_id;
    assert_eq!(board.action_at_point(120.0, 210.0), Some(id));
}
