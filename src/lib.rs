//! gridview - interaction core for virtualized HTML tables
//!
//! Keeps the illusion of a fully-rendered large table while only a small
//! window of it exists, by owning the inputs that would break it:
//! - Scroll, wheel, and touch gestures normalized into one committed
//!   scroll position (inertia and rubber-band effects suppressed)
//! - Asynchronous, coalesced re-renders of the visible window
//! - Live drag-based column resizing and double-click width reset
//!
//! Cell rendering, data fetching, and styling belong to the host; the
//! widget reaches them through callbacks.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const view = new GridView(container, virtualPanel);
//! view.set_draw_callback(async (opts) => renderWindow(opts));
//! view.set_metadata_callback((cell) => metadataFor(cell));
//! ```

// Pure interaction state and math
pub mod draw;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod metadata;
pub mod throttle;

// DOM glue (wasm32)
pub mod widget;

use wasm_bindgen::prelude::*;

// Re-export the main widget struct
pub use widget::GridView;

pub use draw::DrawOptions;
pub use error::{GridError, Result};
pub use gesture::{DragSession, ResizeStep, TouchMemo};
pub use layout::{ColumnSizes, ScrollState};
pub use metadata::CellMetadata;
pub use throttle::Coalescer;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
