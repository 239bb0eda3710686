//! Per-cell structural metadata, produced by the host's registry.
//!
//! The core never stores or mutates cell metadata; it resolves a pointer
//! target to a [`CellMetadata`] through the host lookup callback and reads
//! it to find the logical column under the pointer.

use serde::Deserialize;

fn default_col_span() -> u32 {
    1
}

/// Structural metadata for one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CellMetadata {
    /// Column index of the cell within the current virtual window.
    pub virtual_x: u32,
    /// Stable identifier for the cell's logical column, independent of its
    /// position in the window.
    pub size_key: u32,
    /// Number of columns the cell spans (header groups span several).
    #[serde(default = "default_col_span")]
    pub col_span: u32,
}

impl CellMetadata {
    /// Logical column a resize handle anchored to this cell resizes: the
    /// last column the cell spans.
    pub fn header_x(&self) -> u32 {
        self.virtual_x + self.col_span.saturating_sub(1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn header_x_accounts_for_span() {
        let meta = CellMetadata {
            virtual_x: 2,
            size_key: 9,
            col_span: 3,
        };
        assert_eq!(meta.header_x(), 4);
    }

    #[test]
    fn col_span_defaults_to_one() {
        let meta: CellMetadata =
            serde_json::from_str(r#"{"virtual_x": 5, "size_key": 12}"#).unwrap();
        assert_eq!(meta.col_span, 1);
        assert_eq!(meta.header_x(), 5);
    }
}
