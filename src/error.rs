//! Structured error types for gridview.
//!
//! Missing-target conditions (a pointer that never resolves to a managed
//! cell, a metadata miss) are not errors; handlers treat them as no-ops.
//! Errors are reserved for the host boundary: a draw callback that rejects,
//! or a widget wired to elements it cannot use.

/// All errors that can occur while driving the interaction core.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The host draw callback rejected or threw.
    #[error("Draw failed: {0}")]
    Draw(String),

    /// A host callback returned a value the core could not interpret.
    #[error("Host callback: {0}")]
    Callback(String),

    /// The widget was attached to unusable elements or a document-less window.
    #[error("Attach failed: {0}")]
    Attach(String),

    /// Catch-all for string errors at the JS boundary.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
