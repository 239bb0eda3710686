//! Main GridView struct - the interaction entry point for the widget.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Intercepting scroll, wheel, and touch gestures on the scroll container
//! - Driving asynchronous host redraws of the visible window
//! - Live drag-based column resizing and double-click width reset
//!
//! The host renders the table; `GridView` is attached to the host's scroll
//! container and virtual panel (the spacer that gives the container its
//! full scrollable size) and reaches every collaborator through callbacks
//! set after construction.

mod events;
mod hit;
mod hooks;
mod listeners;
mod scroll;

pub use hit::{CELL_CLIP_CLASS, RESIZE_HANDLE_CLASS};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, MouseEvent, TouchEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use crate::gesture::{DragSession, TouchMemo};
#[cfg(target_arch = "wasm32")]
use crate::layout::ColumnSizes;
#[cfg(target_arch = "wasm32")]
use crate::throttle::Coalescer;
#[cfg(target_arch = "wasm32")]
use hooks::HostHooks;
#[cfg(target_arch = "wasm32")]
use listeners::ListenerHandle;

/// Name of the notification dispatched on the container once per completed
/// scroll-commit cycle. Carries no payload; observers re-query the widget.
pub const SCROLL_EVENT: &str = "gridview-scroll";

/// Tunable interception behavior.
///
/// `intercept_edge_wheel` replaces the platform sniff the problem calls
/// for: wheel events are only taken over at the scroll extremes, where
/// rubber-band overscroll would desynchronize the virtual window. The
/// takeover is invisible on platforms without the glitch, so it defaults
/// to on; hosts that want untouched native edge behavior disable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Intercept wheel events at the top/bottom scroll boundaries.
    pub intercept_edge_wheel: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            intercept_edge_wheel: true,
        }
    }
}

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    /// The host's scroll container; the widget's own element tree.
    pub(crate) container: HtmlElement,
    /// The spacer element sized to the full virtual content.
    pub(crate) virtual_panel: HtmlElement,
    pub(crate) options: GridOptions,
    pub(crate) columns: ColumnSizes,
    pub(crate) touch_memo: Option<TouchMemo>,
    pub(crate) drag: Option<ActiveDrag>,
    pub(crate) move_throttle: Coalescer<f32>,
    pub(crate) hooks: HostHooks,
}

/// The one in-flight resize drag, if any. Dropping it unregisters the
/// document-scoped listeners.
#[cfg(target_arch = "wasm32")]
pub(crate) struct ActiveDrag {
    pub(crate) session: DragSession,
    pub(crate) header: Option<HtmlElement>,
    #[allow(dead_code)] // Held for the removal-on-drop side effect
    pub(crate) listeners: Vec<ListenerHandle>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Serialize)]
struct ScrollMetrics {
    scroll_left: f32,
    scroll_top: f32,
    max_left: f32,
    max_top: f32,
    client_width: f32,
    client_height: f32,
    virtual_width: f32,
    virtual_height: f32,
}

/// The main widget struct exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Held for the removal-on-drop side effect
    listeners: Vec<ListenerHandle>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Attach the interaction core to the host's scroll container and
    /// virtual panel. Gesture listeners are registered immediately; the
    /// collaborator callbacks are wired afterwards with the `set_*`
    /// methods, and the widget no-ops until they are.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, virtual_panel: HtmlElement) -> GridView {
        console_error_panic_hook::set_once();

        let state = Rc::new(RefCell::new(SharedState {
            container: container.clone(),
            virtual_panel,
            options: GridOptions::default(),
            columns: ColumnSizes::new(),
            touch_memo: None,
            drag: None,
            move_throttle: Coalescer::new(),
            hooks: HostHooks::default(),
        }));

        let mut listeners = Vec::new();

        // Mouse down (resize dispatch)
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new(
                container.as_ref(),
                "mousedown",
                move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        Self::internal_mousedown(&state, event);
                    }
                },
            ));
        }

        // Double click (width reset)
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new(
                container.as_ref(),
                "dblclick",
                move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        Self::internal_dblclick(&state, event);
                    }
                },
            ));
        }

        // Native scroll commit
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new_active(
                container.as_ref(),
                "scroll",
                move |event| {
                    Self::internal_scroll(&state, &event);
                },
            ));
        }

        // Modern and mobile browsers layer inertia and rubber-band effects
        // on top of scrolling; these must be intercepted to keep virtual
        // scrolling clean, so the three glitch listeners are non-passive.
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new_active(
                container.as_ref(),
                "wheel",
                move |event| {
                    if let Some(event) = event.dyn_ref::<WheelEvent>() {
                        Self::internal_wheel(&state, event);
                    }
                },
            ));
        }
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new_active(
                container.as_ref(),
                "touchstart",
                move |event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>() {
                        Self::internal_touchstart(&state, event);
                    }
                },
            ));
        }
        {
            let state = Rc::clone(&state);
            listeners.push(ListenerHandle::new_active(
                container.as_ref(),
                "touchmove",
                move |event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>() {
                        Self::internal_touchmove(&state, event);
                    }
                },
            ));
        }

        GridView { state, listeners }
    }

    /// Register the host's asynchronous `draw(options)` callback.
    #[wasm_bindgen]
    pub fn set_draw_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().hooks.draw = callback;
    }

    /// Register the metadata-by-cell lookup.
    #[wasm_bindgen]
    pub fn set_metadata_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().hooks.metadata = callback;
    }

    /// Register the header-cell-by-logical-column lookup.
    #[wasm_bindgen]
    pub fn set_header_cell_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().hooks.header_cell = callback;
    }

    /// Register the rendered-body-cells-by-logical-column lookup.
    #[wasm_bindgen]
    pub fn set_column_cells_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().hooks.column_cells = callback;
    }

    /// Register the every-rendered-cell lookup used by reset-all.
    #[wasm_bindgen]
    pub fn set_all_cells_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().hooks.all_cells = callback;
    }

    /// Toggle wheel interception at the scroll boundaries.
    #[wasm_bindgen]
    pub fn set_intercept_edge_wheel(&mut self, enabled: bool) {
        self.state.borrow_mut().options.intercept_edge_wheel = enabled;
    }

    /// Record the renderer's auto-computed width for a column. The resize
    /// controller compares against it to decide when content must clip.
    #[wasm_bindgen]
    pub fn set_auto_width(&mut self, size_key: u32, width: f32) {
        self.state.borrow_mut().columns.set_auto(size_key, width);
    }

    /// The committed width for a column, if the user has set one. The host
    /// reads this while rendering instead of its auto-computed width.
    #[wasm_bindgen]
    pub fn committed_width(&self, size_key: u32) -> Option<f32> {
        self.state.borrow().columns.committed_width(size_key)
    }

    /// The live preview width for a column, present during a resize drag.
    #[wasm_bindgen]
    pub fn override_width(&self, size_key: u32) -> Option<f32> {
        self.state.borrow().columns.override_width(size_key)
    }

    /// Diagnostic snapshot of the current scroll state.
    #[wasm_bindgen]
    pub fn scroll_metrics(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        let scroll = Self::read_scroll_state(&s);
        let metrics = ScrollMetrics {
            scroll_left: scroll.scroll_left,
            scroll_top: scroll.scroll_top,
            max_left: scroll.max_scroll_left(),
            max_top: scroll.max_scroll_top(),
            client_width: scroll.client_width,
            client_height: scroll.client_height,
            virtual_width: scroll.virtual_width,
            virtual_height: scroll.virtual_height,
        };
        serde_wasm_bindgen::to_value(&metrics).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
