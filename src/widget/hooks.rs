//! Host callback handles.
//!
//! Every collaborator the core consumes (the draw scheduler, the metadata
//! registry, the header/body cell accessors) is a JS function the host
//! sets on the widget. Lookup misses (unset callback, `undefined` return,
//! unparseable payload) resolve to `None`/empty: missing targets are
//! no-ops, not errors.

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlElement};

#[cfg(target_arch = "wasm32")]
use crate::metadata::CellMetadata;

/// The host-provided collaborator callbacks.
#[cfg(target_arch = "wasm32")]
#[derive(Default, Clone)]
pub(crate) struct HostHooks {
    /// `draw(options) -> Promise`: asynchronous window redraw.
    pub(crate) draw: Option<Function>,
    /// `metadata(cell) -> {virtual_x, size_key, col_span} | undefined`.
    pub(crate) metadata: Option<Function>,
    /// `header_cell(header_x) -> Element | undefined`.
    pub(crate) header_cell: Option<Function>,
    /// `column_cells(virtual_x) -> Element[]`: rendered body cells of one
    /// window column.
    pub(crate) column_cells: Option<Function>,
    /// `all_cells() -> Element[]`: every rendered header and body cell.
    pub(crate) all_cells: Option<Function>,
}

#[cfg(target_arch = "wasm32")]
fn elements_of(value: JsValue) -> Vec<HtmlElement> {
    let Some(array) = value.dyn_ref::<Array>() else {
        return Vec::new();
    };
    array
        .iter()
        .filter_map(|item| item.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(target_arch = "wasm32")]
impl HostHooks {
    pub(crate) fn metadata_for(&self, cell: &Element) -> Option<CellMetadata> {
        let lookup = self.metadata.as_ref()?;
        let value = lookup.call1(&JsValue::NULL, cell).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(value).ok()
    }

    pub(crate) fn header_cell(&self, header_x: u32) -> Option<HtmlElement> {
        let lookup = self.header_cell.as_ref()?;
        let value = lookup
            .call1(&JsValue::NULL, &JsValue::from_f64(f64::from(header_x)))
            .ok()?;
        value.dyn_into::<HtmlElement>().ok()
    }

    pub(crate) fn column_cells(&self, virtual_x: u32) -> Vec<HtmlElement> {
        let Some(lookup) = self.column_cells.as_ref() else {
            return Vec::new();
        };
        match lookup.call1(&JsValue::NULL, &JsValue::from_f64(f64::from(virtual_x))) {
            Ok(value) => elements_of(value),
            Err(_) => Vec::new(),
        }
    }

    pub(crate) fn all_cells(&self) -> Vec<HtmlElement> {
        let Some(lookup) = self.all_cells.as_ref() else {
            return Vec::new();
        };
        match lookup.call0(&JsValue::NULL) {
            Ok(value) => elements_of(value),
            Err(_) => Vec::new(),
        }
    }
}
