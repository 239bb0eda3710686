//! Column width store: live overrides, auto-computed widths, and the
//! committed (authoritative) widths.

use std::collections::HashMap;

/// Width used for a column that has never been sized by the user or the
/// renderer.
pub const DEFAULT_COLUMN_WIDTH: f32 = 64.0;

/// Three parallel width maps keyed by a column's stable size key.
///
/// - `overrides` holds the live preview while a resize drag is active (and
///   the last explicit user width afterwards).
/// - `autos` holds the last width the renderer measured for the column.
/// - `indices` holds the committed width the renderer treats as
///   authoritative; it only picks up the override when a drag is released.
#[derive(Debug, Clone, Default)]
pub struct ColumnSizes {
    overrides: HashMap<u32, f32>,
    autos: HashMap<u32, f32>,
    indices: HashMap<u32, f32>,
}

fn same_width(a: Option<f32>, b: Option<f32>) -> bool {
    a.map(f32::to_bits) == b.map(f32::to_bits)
}

impl ColumnSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live preview width for a column, if a drag has set one.
    pub fn override_width(&self, size_key: u32) -> Option<f32> {
        self.overrides.get(&size_key).copied()
    }

    /// Store a live preview width. Does not touch the committed width.
    pub fn set_override(&mut self, size_key: u32, width: f32) {
        self.overrides.insert(size_key, width);
    }

    /// Last auto-computed width reported by the renderer.
    pub fn auto_width(&self, size_key: u32) -> Option<f32> {
        self.autos.get(&size_key).copied()
    }

    /// Record the renderer's measured width for a column.
    pub fn set_auto(&mut self, size_key: u32, width: f32) {
        self.autos.insert(size_key, width);
    }

    /// Committed width, if any.
    pub fn committed_width(&self, size_key: u32) -> Option<f32> {
        self.indices.get(&size_key).copied()
    }

    /// Starting width for a resize drag: committed, else auto, else the
    /// default.
    pub fn drag_start_width(&self, size_key: u32) -> f32 {
        self.committed_width(size_key)
            .or_else(|| self.auto_width(size_key))
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Make the current override authoritative. Returns `true` when the
    /// committed width actually changed (the caller redraws in that case).
    ///
    /// A drag whose pointer never moved has no override; committing it
    /// clears the committed width instead.
    pub fn commit(&mut self, size_key: u32) -> bool {
        let next = self.override_width(size_key);
        let prev = match next {
            Some(width) => self.indices.insert(size_key, width),
            None => self.indices.remove(&size_key),
        };
        !same_width(prev, next)
    }

    /// Forget every width recorded for one column.
    pub fn reset(&mut self, size_key: u32) {
        self.overrides.remove(&size_key);
        self.autos.remove(&size_key);
        self.indices.remove(&size_key);
    }

    /// Forget every width for every column; the whole table reverts to
    /// intrinsic auto-sizing.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
        self.autos.clear();
        self.indices.clear();
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn commit_adopts_override() {
        let mut sizes = ColumnSizes::new();
        sizes.set_override(3, 110.0);
        assert!(sizes.commit(3));
        assert_eq!(sizes.committed_width(3), Some(110.0));
    }

    #[test]
    fn commit_is_idempotent() {
        let mut sizes = ColumnSizes::new();
        sizes.set_override(3, 110.0);
        assert!(sizes.commit(3));
        assert!(!sizes.commit(3), "second commit of the same width is a no-op");
    }

    #[test]
    fn commit_without_override_clears() {
        let mut sizes = ColumnSizes::new();
        sizes.set_override(3, 110.0);
        sizes.commit(3);
        let mut untouched = sizes.clone();
        untouched.overrides.remove(&3);
        assert!(untouched.commit(3));
        assert_eq!(untouched.committed_width(3), None);
    }

    #[test]
    fn drag_start_width_fallback_chain() {
        let mut sizes = ColumnSizes::new();
        assert_eq!(sizes.drag_start_width(7), DEFAULT_COLUMN_WIDTH);
        sizes.set_auto(7, 48.0);
        assert_eq!(sizes.drag_start_width(7), 48.0);
        sizes.set_override(7, 90.0);
        sizes.commit(7);
        assert_eq!(sizes.drag_start_width(7), 90.0);
    }

    #[test]
    fn reset_is_per_column() {
        let mut sizes = ColumnSizes::new();
        for key in [1, 2] {
            sizes.set_override(key, 100.0);
            sizes.set_auto(key, 50.0);
            sizes.commit(key);
        }
        sizes.reset(1);
        assert_eq!(sizes.override_width(1), None);
        assert_eq!(sizes.auto_width(1), None);
        assert_eq!(sizes.committed_width(1), None);
        assert_eq!(sizes.committed_width(2), Some(100.0));
    }
}
