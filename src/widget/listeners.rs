//! RAII DOM event listeners.
//!
//! Native listeners are ambient global state; holding them as values pairs
//! registration with removal. The widget keeps its permanent listeners for
//! its own lifetime, and a resize drag keeps its two document-scoped
//! listeners for the session's; dropping the session unregisters them, so
//! a leaked global listener cannot occur even while a draw is still
//! resolving.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// One registered DOM listener; unregisters on drop.
#[cfg(target_arch = "wasm32")]
pub(crate) struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ListenerHandle {
    /// Register a listener with default options.
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Register a non-passive listener, allowed to call `preventDefault`.
    /// Browsers default scroll-blocking events to passive, which would make
    /// the interceptor's `preventDefault` a no-op.
    pub(crate) fn new_active(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
