//! Pointer dispatch, column resizing, and width reset for `GridView`.
//!
//! Every pointer event is classified by walking up to the nearest managed
//! cell; resize-handle hits are handed to the drag state machine, and
//! double-clicks on a handle reset the column (or, with Shift, the whole
//! table) to auto-sizing.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, Event, HtmlElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use super::hit::{enclosing_cell, is_resize_handle, CELL_CLIP_CLASS};
#[cfg(target_arch = "wasm32")]
use super::listeners::ListenerHandle;
#[cfg(target_arch = "wasm32")]
use super::{ActiveDrag, GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::draw::{invoke_draw, report_draw_failure, DrawOptions};
#[cfg(target_arch = "wasm32")]
use crate::gesture::{DragSession, ResizeStep};
#[cfg(target_arch = "wasm32")]
use crate::metadata::CellMetadata;

#[cfg(target_arch = "wasm32")]
fn set_cell_width(cell: &HtmlElement, width: f32) {
    let px = format!("{width}px");
    let _ = cell.style().set_property("min-width", &px);
    let _ = cell.style().set_property("max-width", &px);
}

#[cfg(target_arch = "wasm32")]
fn clear_cell_width(cell: &HtmlElement) {
    let _ = cell.style().remove_property("min-width");
    let _ = cell.style().remove_property("max-width");
    let _ = cell.class_list().remove_1(CELL_CLIP_CLASS);
}

#[cfg(target_arch = "wasm32")]
fn request_draw(state: &Rc<RefCell<SharedState>>, options: DrawOptions) {
    let draw = state.borrow().hooks.draw.clone();
    let Some(draw) = draw else {
        return;
    };
    spawn_local(async move {
        if let Err(error) = invoke_draw(&draw, options).await {
            report_draw_failure(&error);
        }
    });
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Dispatch a mousedown to the resize controller when it lands on a
    /// resize handle; anything else is left for the host's own click
    /// semantics.
    pub(crate) fn internal_mousedown(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        if event.button() != 0 {
            return;
        }
        let Some((target, _cell, metadata)) = Self::resolve_target(state, event) else {
            return;
        };
        if !is_resize_handle(&target) {
            return;
        }
        event.stop_immediate_propagation();
        Self::begin_resize(state, event.page_x() as f32, &metadata);
    }

    /// Double-click on a resize handle clears the column's width overrides;
    /// with Shift held, every column reverts to auto-sizing.
    pub(crate) fn internal_dblclick(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        let Some((target, cell, metadata)) = Self::resolve_target(state, event) else {
            return;
        };
        if !is_resize_handle(&target) {
            return;
        }
        event.stop_immediate_propagation();

        let reset_all = event.shift_key();
        let hooks = {
            let mut s = state.borrow_mut();
            if reset_all {
                s.columns.reset_all();
            } else {
                s.columns.reset(metadata.size_key);
            }
            s.hooks.clone()
        };

        // Borrow released: the accessors below call back into the host.
        let mut cells = if reset_all {
            hooks.all_cells()
        } else {
            hooks.column_cells(metadata.virtual_x)
        };
        if let Ok(cell) = cell.dyn_into::<HtmlElement>() {
            cells.push(cell);
        }
        for cell in &cells {
            clear_cell_width(cell);
        }

        request_draw(state, DrawOptions::default());
    }

    /// Ancestor-walk the event target to a managed cell and resolve its
    /// metadata. `None` (walk left the widget, or no metadata) means the
    /// event is ignored.
    fn resolve_target(
        state: &Rc<RefCell<SharedState>>,
        event: &MouseEvent,
    ) -> Option<(Element, Element, CellMetadata)> {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        let (container, hooks) = {
            let s = state.borrow();
            (s.container.clone(), s.hooks.clone())
        };
        let cell = enclosing_cell(container.as_ref(), &target)?;
        let metadata = hooks.metadata_for(&cell)?;
        Some((target, cell, metadata))
    }

    /// Start a resize drag session: capture the session fields and register
    /// the document-scoped move/up listeners. The drag may leave the
    /// widget's bounds, so the listeners must not be scoped to it.
    fn begin_resize(state: &Rc<RefCell<SharedState>>, page_x: f32, metadata: &CellMetadata) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let header_x = metadata.header_x();
        let (session, hooks) = {
            let s = state.borrow();
            let session = DragSession {
                size_key: metadata.size_key,
                header_x,
                start_x: page_x,
                start_width: s.columns.drag_start_width(metadata.size_key),
            };
            (session, s.hooks.clone())
        };
        // Borrow released: the header lookup calls back into the host.
        let header = hooks.header_cell(header_x);

        let move_state = Rc::clone(state);
        let move_listener = ListenerHandle::new(
            document.as_ref(),
            "mousemove",
            move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    Self::internal_resize_move(&move_state, event.page_x() as f32);
                }
            },
        );
        let up_state = Rc::clone(state);
        let up_listener = ListenerHandle::new(document.as_ref(), "mouseup", move |_event: Event| {
            Self::end_resize(&up_state);
        });

        state.borrow_mut().drag = Some(ActiveDrag {
            session,
            header,
            listeners: vec![move_listener, up_listener],
        });
    }

    /// Throttled move handler: overlapping moves collapse so at most one
    /// redraw-triggering path runs per drag, without losing the final
    /// pointer position.
    pub(crate) fn internal_resize_move(state: &Rc<RefCell<SharedState>>, page_x: f32) {
        let run = {
            let mut s = state.borrow_mut();
            if s.drag.is_none() {
                return;
            }
            s.move_throttle.offer(page_x)
        };
        if let Some(page_x) = run {
            let state = Rc::clone(state);
            spawn_local(async move {
                Self::resize_move_task(&state, page_x).await;
            });
        }
    }

    /// The single in-flight move runner. Loops while the coalescer hands
    /// back parked positions, re-reading the session and the size store on
    /// every pass, since a draw may have resolved in between.
    async fn resize_move_task(state: &Rc<RefCell<SharedState>>, mut page_x: f32) {
        loop {
            let work = {
                let mut guard = state.borrow_mut();
                let s = &mut *guard;
                match s.drag.as_ref() {
                    None => None,
                    Some(active) => {
                        let session = active.session;
                        let step = session.step(page_x, s.columns.auto_width(session.size_key));
                        let width = match step {
                            ResizeStep::Redraw { width }
                            | ResizeStep::InPlace { width, .. } => width,
                        };
                        s.columns.set_override(session.size_key, width);
                        Some((step, session.header_x, active.header.clone(), s.hooks.clone()))
                    }
                }
            };

            if let Some((step, header_x, header, hooks)) = work {
                match step {
                    ResizeStep::Redraw { .. } => {
                        // Shrinking may expose unfetched columns at the
                        // trailing edge; the window's column set can change.
                        if let Some(draw) = hooks.draw {
                            if let Err(error) =
                                invoke_draw(&draw, DrawOptions::preserve_width()).await
                            {
                                report_draw_failure(&error);
                            }
                        }
                    }
                    ResizeStep::InPlace { width, clipped } => {
                        // Growing never changes which columns are visible;
                        // update the rendered cells directly.
                        if let Some(header) = &header {
                            set_cell_width(header, width);
                        }
                        for cell in hooks.column_cells(header_x) {
                            set_cell_width(&cell, width);
                            let _ = cell
                                .class_list()
                                .toggle_with_force(CELL_CLIP_CLASS, clipped);
                        }
                    }
                }
            }

            let next = state.borrow_mut().move_throttle.complete();
            match next {
                Some(parked) => page_x = parked,
                None => return,
            }
        }
    }

    /// Release the drag: unregister the session listeners, make the
    /// preview width authoritative, and redraw once if it changed.
    pub(crate) fn end_resize(state: &Rc<RefCell<SharedState>>) {
        let (active, should_redraw) = {
            let mut s = state.borrow_mut();
            let Some(active) = s.drag.take() else {
                return;
            };
            // No preview write or redraw may land after the commit.
            s.move_throttle.clear_pending();
            let changed = s.columns.commit(active.session.size_key);
            (active, changed)
        };
        // The session listeners unregister here, outside the state borrow.
        drop(active);
        if should_redraw {
            request_draw(state, DrawOptions::default());
        }
    }
}
