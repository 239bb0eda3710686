//! Draw scheduler contract.
//!
//! The host owns the actual window rendering; the core only requests it.
//! A draw is asynchronous and idempotent: the host returns a `Promise`, and
//! the caller must not assume the visible window has updated until it
//! resolves. There is no cancellation: once requested, a draw runs to
//! completion.

use serde::Serialize;

/// Hints passed to the host's `draw` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawOptions {
    /// Whether the logical scroll position changed and the visible window
    /// membership must be recomputed, rather than only re-rendered in place.
    pub invalid_viewport: bool,
    /// Recompute window membership but keep the current column width
    /// overrides instead of reverting to auto-sizing.
    pub preserve_width: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            invalid_viewport: true,
            preserve_width: false,
        }
    }
}

impl DrawOptions {
    /// Options for a scroll-commit redraw: the container's own offset is
    /// already authoritative, only the window contents need to catch up.
    pub fn scroll() -> Self {
        Self {
            invalid_viewport: false,
            preserve_width: false,
        }
    }

    /// Options for a shrinking-column redraw: window membership may change
    /// but user widths must survive.
    pub fn preserve_width() -> Self {
        Self {
            invalid_viewport: true,
            preserve_width: true,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod glue {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::DrawOptions;
    use crate::error::{GridError, Result};

    fn describe(value: &JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"))
    }

    /// Call the host draw callback and await the returned `Promise`.
    ///
    /// A callback that returns a non-`Promise` value is treated as a draw
    /// that completed synchronously.
    pub(crate) async fn invoke_draw(callback: &Function, options: DrawOptions) -> Result<()> {
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| GridError::Callback(e.to_string()))?;
        let returned = callback
            .call1(&JsValue::NULL, &options)
            .map_err(|e| GridError::Draw(describe(&e)))?;
        if let Some(promise) = returned.dyn_ref::<Promise>() {
            JsFuture::from(promise.clone())
                .await
                .map_err(|e| GridError::Draw(describe(&e)))?;
        }
        Ok(())
    }

    /// Report a failed draw to the console. Draw failures are the host's to
    /// handle, but they are never swallowed silently.
    pub(crate) fn report_draw_failure(error: &GridError) {
        web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use glue::{invoke_draw, report_draw_failure};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_host_contract() {
        let value = serde_json::to_value(DrawOptions::scroll()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"invalid_viewport": false, "preserve_width": false})
        );
    }

    #[test]
    fn default_invalidates_viewport() {
        let options = DrawOptions::default();
        assert!(options.invalid_viewport);
        assert!(!options.preserve_width);
    }

    #[test]
    fn preserve_width_recomputes_membership() {
        let options = DrawOptions::preserve_width();
        assert!(options.invalid_viewport);
        assert!(options.preserve_width);
    }
}
