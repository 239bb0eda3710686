//! Scroll interception for `GridView`.
//!
//! Normalizes native scroll, wheel, and touch input into a single committed
//! scroll-offset update, then drives the host redraw. Wheel events are only
//! taken over at the scroll extremes (see `gesture::wheel_intercept`);
//! touch inertia is suppressed unconditionally, since momentum cannot be
//! told apart from a deliberate drag after the fact.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{CustomEvent, HtmlElement, TouchEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState, SCROLL_EVENT};
#[cfg(target_arch = "wasm32")]
use crate::draw::{invoke_draw, report_draw_failure, DrawOptions};
#[cfg(target_arch = "wasm32")]
use crate::gesture::{wheel_intercept, TouchMemo};
#[cfg(target_arch = "wasm32")]
use crate::layout::ScrollState;

/// Read a possibly-fractional scroll offset. `Element::scroll_left` rounds
/// through `i32`, which loses sub-pixel positions on zoomed/high-DPI pages.
#[cfg(target_arch = "wasm32")]
pub(crate) fn scroll_left_f64(element: &HtmlElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_left()))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn scroll_top_f64(element: &HtmlElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_top()))
}

/// Write the committed offsets back, preserving fractional positions.
#[cfg(target_arch = "wasm32")]
fn set_scroll_offsets(element: &HtmlElement, left: f32, top: f32) {
    let _ = Reflect::set(
        element.as_ref(),
        &JsValue::from_str("scrollLeft"),
        &JsValue::from_f64(f64::from(left)),
    );
    let _ = Reflect::set(
        element.as_ref(),
        &JsValue::from_str("scrollTop"),
        &JsValue::from_f64(f64::from(top)),
    );
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Snapshot the scrollable state from the DOM. Recomputed per gesture;
    /// the container's own offset stays authoritative between gestures.
    pub(crate) fn read_scroll_state(s: &SharedState) -> ScrollState {
        ScrollState {
            scroll_left: scroll_left_f64(&s.container) as f32,
            scroll_top: scroll_top_f64(&s.container) as f32,
            client_width: s.container.client_width() as f32,
            client_height: s.container.client_height() as f32,
            virtual_width: s.virtual_panel.offset_width() as f32,
            virtual_height: s.virtual_panel.offset_height() as f32,
        }
    }

    /// The scroll-commit path shared by every input source: redraw the
    /// window for the (already committed) offset, then notify observers.
    pub(crate) fn commit_scroll(state: &Rc<RefCell<SharedState>>) {
        let (draw, container) = {
            let s = state.borrow();
            (s.hooks.draw.clone(), s.container.clone())
        };
        spawn_local(async move {
            if let Some(draw) = draw {
                if let Err(error) = invoke_draw(&draw, DrawOptions::scroll()).await {
                    report_draw_failure(&error);
                    return;
                }
            }
            if let Ok(event) = CustomEvent::new(SCROLL_EVENT) {
                let _ = container.dispatch_event(&event);
            }
        });
    }

    pub(crate) fn internal_scroll(state: &Rc<RefCell<SharedState>>, event: &web_sys::Event) {
        event.stop_propagation();
        event.prevent_default();
        Self::commit_scroll(state);
    }

    /// Wheel events at the top/bottom extremes would rubber-band on some
    /// platforms and desynchronize the virtual window; take those over and
    /// advance the committed offset manually.
    pub(crate) fn internal_wheel(state: &Rc<RefCell<SharedState>>, event: &WheelEvent) {
        let target = {
            let s = state.borrow();
            let scroll = Self::read_scroll_state(&s);
            wheel_intercept(
                &scroll,
                event.delta_x() as f32,
                event.delta_y() as f32,
                s.options.intercept_edge_wheel,
            )
        };
        let Some((left, top)) = target else {
            return;
        };
        event.prevent_default();
        let container = state.borrow().container.clone();
        set_scroll_offsets(&container, left, top);
        Self::commit_scroll(state);
    }

    /// Memoize touch-start positions to calculate deltas, since touch-move
    /// events do not carry one.
    pub(crate) fn internal_touchstart(state: &Rc<RefCell<SharedState>>, event: &TouchEvent) {
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        let mut s = state.borrow_mut();
        let scroll = Self::read_scroll_state(&s);
        s.touch_memo = Some(TouchMemo::capture(
            touch.screen_x() as f32,
            touch.screen_y() as f32,
            &scroll,
        ));
    }

    /// Touch scrolling is taken over entirely. This disables scroll
    /// inertia, but the alternative is a glitchy mess: once momentum
    /// starts, the native offset and the virtual window cannot be kept in
    /// sync.
    pub(crate) fn internal_touchmove(state: &Rc<RefCell<SharedState>>, event: &TouchEvent) {
        event.prevent_default();
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        let target = {
            let s = state.borrow();
            let Some(memo) = s.touch_memo else {
                return;
            };
            let scroll = Self::read_scroll_state(&s);
            memo.target(touch.screen_x() as f32, touch.screen_y() as f32, &scroll)
        };
        let container = state.borrow().container.clone();
        set_scroll_offsets(&container, target.0, target.1);
        Self::commit_scroll(state);
    }
}
