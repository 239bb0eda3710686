//! Scroll and column-size state for the virtualized table.
//!
//! This module handles:
//! - The committed scroll position and its clamp range
//! - The three-way column width store (override / auto / committed)
//!
//! Everything here is plain data with pure methods; the DOM glue in
//! `widget` reads the browser state into these values per gesture.

mod columns;
mod viewport;

pub use columns::{ColumnSizes, DEFAULT_COLUMN_WIDTH};
pub use viewport::ScrollState;
