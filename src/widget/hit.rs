//! Hit testing: resolve an event target to the nearest managed cell.

#[cfg(target_arch = "wasm32")]
use web_sys::Element;

/// Class marking the drag affordance inside a header cell.
pub const RESIZE_HANDLE_CLASS: &str = "gv-column-resize";

/// Class set on body cells whose content overflows a user-narrowed column.
pub const CELL_CLIP_CLASS: &str = "gv-cell-clip";

/// Walk up from `target` to the nearest enclosing cell (`<td>`/`<th>`)
/// inside `container`. Returns `None` when the walk leaves the widget's
/// element tree first, meaning the event is not ours.
#[cfg(target_arch = "wasm32")]
pub(crate) fn enclosing_cell(container: &Element, target: &Element) -> Option<Element> {
    let mut element = target.clone();
    loop {
        if !container.contains(Some(element.as_ref())) {
            return None;
        }
        let tag = element.tag_name();
        if tag.eq_ignore_ascii_case("td") || tag.eq_ignore_ascii_case("th") {
            return Some(element);
        }
        element = element.parent_element()?;
    }
}

/// Whether the original event target is a resize handle.
#[cfg(target_arch = "wasm32")]
pub(crate) fn is_resize_handle(target: &Element) -> bool {
    target.class_list().contains(RESIZE_HANDLE_CLASS)
}
