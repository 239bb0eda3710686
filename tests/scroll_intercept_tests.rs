//! Scroll interception tests
//!
//! Tests for committed-offset clamping, touch-drag scrolling, and the
//! edge-only wheel takeover.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::gesture::{wheel_intercept, TouchMemo};
use gridview::ScrollState;

fn state(left: f32, top: f32) -> ScrollState {
    ScrollState {
        scroll_left: left,
        scroll_top: top,
        client_width: 300.0,
        client_height: 100.0,
        virtual_width: 900.0,
        virtual_height: 500.0,
    }
}

// =============================================================================
// CLAMP RANGE TESTS
// =============================================================================

#[test]
fn test_max_scroll_is_virtual_minus_client() {
    let s = state(0.0, 0.0);
    assert_eq!(s.max_scroll_left(), 600.0);
    assert_eq!(s.max_scroll_top(), 400.0);
}

#[test]
fn test_max_scroll_floors_at_one_when_content_fits() {
    let mut s = state(0.0, 0.0);
    s.virtual_width = 200.0;
    s.virtual_height = 50.0;
    assert_eq!(s.max_scroll_left(), 1.0, "Range must stay non-degenerate");
    assert_eq!(s.max_scroll_top(), 1.0);
}

#[test]
fn test_scroll_by_clamps_each_axis_independently() {
    let mut s = state(0.0, 390.0);
    let applied = s.scroll_by(50.0, 50.0);
    assert_eq!(applied, Some((50.0, 10.0)), "Top axis clamps, left doesn't");
    assert_eq!(s.scroll_left, 50.0);
    assert_eq!(s.scroll_top, 400.0);
}

#[test]
fn test_scroll_by_reports_no_movement_at_the_edge() {
    let mut s = state(0.0, 400.0);
    assert_eq!(s.scroll_by(0.0, 25.0), None, "Already at the bottom edge");
}

// =============================================================================
// TOUCH DRAG TESTS
// =============================================================================

#[test]
fn test_touch_deltas_accumulate_from_gesture_start() {
    // Start offset (0,0), client height 100, total scrollable height 500.
    let s = ScrollState {
        scroll_left: 0.0,
        scroll_top: 0.0,
        client_width: 300.0,
        client_height: 100.0,
        virtual_width: 300.0,
        virtual_height: 500.0,
    };
    let memo = TouchMemo::capture(300.0, 300.0, &s);

    // Touch-move to y=280: delta 20, committed top 20.
    let (_, top) = memo.target(300.0, 280.0, &s);
    assert_eq!(top, 20.0);

    // Same gesture, touch-move to y=50: delta 250, committed top
    // clamp(250, 0, 400) = 250.
    let s = ScrollState {
        scroll_top: top,
        ..s
    };
    let (_, top) = memo.target(300.0, 50.0, &s);
    assert_eq!(top, 250.0);
}

#[test]
fn test_touch_target_matches_clamped_sum_of_deltas() {
    let start = state(100.0, 100.0);
    let memo = TouchMemo::capture(500.0, 500.0, &start);

    let moves = [
        (480.0, 460.0),
        (420.0, 380.0),
        (350.0, 900.0),
        (900.0, -400.0),
    ];
    let mut current = start;
    for (x, y) in moves {
        let (left, top) = memo.target(x, y, &current);
        let expected_left = current.clamp_left(100.0 + (500.0 - x));
        let expected_top = current.clamp_top(100.0 + (500.0 - y));
        assert_eq!(left, expected_left);
        assert_eq!(top, expected_top);
        current.scroll_left = left;
        current.scroll_top = top;
    }
}

#[test]
fn test_touch_gesture_returning_inside_bounds_recovers() {
    // Drag far past the bottom edge, then back up: the committed offset
    // follows the finger again once the target re-enters the range.
    let s = state(0.0, 0.0);
    let memo = TouchMemo::capture(0.0, 600.0, &s);
    let (_, top) = memo.target(0.0, -400.0, &s);
    assert_eq!(top, 400.0, "Clamped at the bottom edge");
    let (_, top) = memo.target(0.0, 300.0, &s);
    assert_eq!(top, 300.0, "Back inside the range");
}

// =============================================================================
// WHEEL BOUNDARY TESTS
// =============================================================================

#[test]
fn test_wheel_strictly_inside_bounds_passes_through() {
    let test_cases = [
        (200.0, 40.0),
        (200.0, -40.0),
        (1.0, 40.0),
        (399.0, -40.0),
    ];
    for (top, delta_y) in test_cases {
        let s = state(0.0, top);
        assert_eq!(
            wheel_intercept(&s, 0.0, delta_y, true),
            None,
            "No takeover at top={top} delta={delta_y}"
        );
    }
}

#[test]
fn test_wheel_takeover_only_when_pushing_past_an_edge() {
    let top_edge = state(0.0, 0.0);
    assert!(wheel_intercept(&top_edge, 0.0, -40.0, true).is_some());
    assert_eq!(
        wheel_intercept(&top_edge, 0.0, 40.0, true),
        None,
        "Scrolling away from the top edge is native"
    );

    let bottom_edge = state(0.0, 400.0);
    assert!(wheel_intercept(&bottom_edge, 0.0, 40.0, true).is_some());
    assert_eq!(
        wheel_intercept(&bottom_edge, 0.0, -40.0, true),
        None,
        "Scrolling away from the bottom edge is native"
    );
}

#[test]
fn test_wheel_takeover_clamps_both_axes() {
    let s = state(580.0, 400.0);
    let (left, top) = wheel_intercept(&s, 40.0, 40.0, true).unwrap();
    assert_eq!(left, 600.0);
    assert_eq!(top, 400.0);
}

#[test]
fn test_wheel_takeover_disabled_by_config() {
    let s = state(0.0, 0.0);
    assert_eq!(wheel_intercept(&s, 0.0, -40.0, false), None);
}
