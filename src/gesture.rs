//! Pure gesture math: touch scrolling, edge-wheel interception, and the
//! column resize drag session.
//!
//! Nothing here touches the DOM. The glue in `widget` reads the browser
//! state into a [`ScrollState`], asks these types what the gesture means,
//! and writes the answer back.

use crate::layout::ScrollState;

/// Anchor captured at `touchstart`.
///
/// Touch-move events carry no delta of their own, so the start position is
/// memoized and every subsequent move is measured against it. The scroll
/// offsets at gesture start are captured alongside so each move recomputes
/// the committed offset from the gesture origin with a single clamp.
/// Adding per-event deltas to an already-clamped offset would double-count
/// at the scroll extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchMemo {
    start_x: f32,
    start_y: f32,
    origin_left: f32,
    origin_top: f32,
}

impl TouchMemo {
    /// Memoize a touch-start at screen position (x, y).
    pub fn capture(x: f32, y: f32, scroll: &ScrollState) -> Self {
        Self {
            start_x: x,
            start_y: y,
            origin_left: scroll.scroll_left,
            origin_top: scroll.scroll_top,
        }
    }

    /// Committed (left, top) offset for a touch-move at screen position
    /// (x, y). Dragging the finger up (y shrinking) scrolls down.
    pub fn target(&self, x: f32, y: f32, scroll: &ScrollState) -> (f32, f32) {
        let left = scroll.clamp_left(self.origin_left + (self.start_x - x));
        let top = scroll.clamp_top(self.origin_top + (self.start_y - y));
        (left, top)
    }
}

/// Decide whether a wheel event must be taken over.
///
/// Wheel deltas are discrete and bounded, so native handling is left alone
/// except at the top/bottom extremes, where platforms with rubber-band
/// overscroll desynchronize the virtual window from the scrollbar. Returns
/// the clamped (left, top) offset to commit, or `None` to let the event
/// through untouched.
pub fn wheel_intercept(
    scroll: &ScrollState,
    delta_x: f32,
    delta_y: f32,
    enabled: bool,
) -> Option<(f32, f32)> {
    if !enabled {
        return None;
    }
    let overscroll = (delta_y > 0.0 && scroll.at_bottom()) || (delta_y < 0.0 && scroll.at_top());
    if !overscroll {
        return None;
    }
    let left = scroll.clamp_left(scroll.scroll_left + delta_x);
    let top = scroll.clamp_top(scroll.scroll_top + delta_y);
    Some((left, top))
}

/// Fields of one in-flight column resize drag. At most one session exists
/// at a time (single-pointer model); it is created on a resize-handle
/// pointer-down and destroyed on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Stable size key of the column being resized.
    pub size_key: u32,
    /// Logical column the drag resizes: the handle cell's column index
    /// adjusted by its span, so a handle on a spanning header resizes the
    /// last constituent column.
    pub header_x: u32,
    /// Pointer x at drag start (page coordinates).
    pub start_x: f32,
    /// Committed width of the column when the drag began.
    pub start_width: f32,
}

/// What one throttled resize-move must do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeStep {
    /// The column shrank: columns beyond the trailing edge may become
    /// visible, so the window membership itself must be recomputed.
    Redraw { width: f32 },
    /// The column grew (or is back at its start width): the visible column
    /// set cannot change, so the rendered cells are updated in place.
    /// `clipped` is set when the column's auto width exceeds the new width
    /// and content must be visually truncated.
    InPlace { width: f32, clipped: bool },
}

impl DragSession {
    /// Candidate width for the current pointer position, floored at 1 px.
    pub fn candidate_width(&self, page_x: f32) -> f32 {
        (self.start_width + (page_x - self.start_x)).max(1.0)
    }

    /// Classify a move at `page_x`. `auto_width` is the column's last
    /// auto-computed width, read at call time rather than snapshotted at
    /// drag start, since a redraw may have re-measured the column mid-drag.
    pub fn step(&self, page_x: f32, auto_width: Option<f32>) -> ResizeStep {
        let width = self.candidate_width(page_x);
        if page_x - self.start_x < 0.0 {
            ResizeStep::Redraw { width }
        } else {
            let clipped = auto_width.is_some_and(|auto| auto > width);
            ResizeStep::InPlace { width, clipped }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn scroll(top: f32, client_h: f32, virtual_h: f32) -> ScrollState {
        ScrollState {
            scroll_left: 0.0,
            scroll_top: top,
            client_width: 200.0,
            client_height: client_h,
            virtual_width: 200.0,
            virtual_height: virtual_h,
        }
    }

    #[test]
    fn touch_drag_scrolls_against_finger() {
        let state = scroll(0.0, 100.0, 500.0);
        let memo = TouchMemo::capture(300.0, 300.0, &state);
        let (_, top) = memo.target(300.0, 280.0, &state);
        assert_eq!(top, 20.0);
    }

    #[test]
    fn touch_target_clamps_at_range_end() {
        let state = scroll(0.0, 100.0, 500.0);
        let memo = TouchMemo::capture(300.0, 300.0, &state);
        // A 250 px finger travel stays inside the 400 px range…
        let (_, top) = memo.target(300.0, 50.0, &state);
        assert_eq!(top, 250.0);
        // …but a 600 px travel clamps to it.
        let (_, top) = memo.target(300.0, -300.0, &state);
        assert_eq!(top, 400.0);
    }

    #[test]
    fn wheel_inside_bounds_is_not_intercepted() {
        let state = scroll(150.0, 100.0, 500.0);
        assert_eq!(wheel_intercept(&state, 0.0, 30.0, true), None);
        assert_eq!(wheel_intercept(&state, 0.0, -30.0, true), None);
    }

    #[test]
    fn wheel_at_bottom_edge_is_intercepted_downward_only() {
        let state = scroll(400.0, 100.0, 500.0);
        assert_eq!(wheel_intercept(&state, 0.0, 30.0, true), Some((0.0, 400.0)));
        assert_eq!(wheel_intercept(&state, 0.0, -30.0, true), None);
    }

    #[test]
    fn wheel_intercept_respects_config_flag() {
        let state = scroll(0.0, 100.0, 500.0);
        assert!(wheel_intercept(&state, 0.0, -30.0, true).is_some());
        assert_eq!(wheel_intercept(&state, 0.0, -30.0, false), None);
    }

    #[test]
    fn shrinking_drag_requests_redraw() {
        let session = DragSession {
            size_key: 0,
            header_x: 0,
            start_x: 100.0,
            start_width: 80.0,
        };
        assert_eq!(
            session.step(70.0, None),
            ResizeStep::Redraw { width: 50.0 }
        );
    }

    #[test]
    fn growing_drag_updates_in_place() {
        let session = DragSession {
            size_key: 0,
            header_x: 0,
            start_x: 100.0,
            start_width: 80.0,
        };
        assert_eq!(
            session.step(130.0, Some(90.0)),
            ResizeStep::InPlace {
                width: 110.0,
                clipped: false,
            }
        );
        assert_eq!(
            session.step(110.0, Some(120.0)),
            ResizeStep::InPlace {
                width: 90.0,
                clipped: true,
            }
        );
    }

    #[test]
    fn candidate_width_floors_at_one_pixel() {
        let session = DragSession {
            size_key: 0,
            header_x: 0,
            start_x: 100.0,
            start_width: 80.0,
        };
        assert_eq!(session.candidate_width(-500.0), 1.0);
    }
}
