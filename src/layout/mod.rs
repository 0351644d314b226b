//! Geometry engine for the grid.
//!
//! This module handles:
//! - Coordinate-space tags and the frozen/scrollable split
//! - Row height presets
//! - Pre-computed column (and variable row) edges with binary-search lookup
//! - Scroll state clamping and visible ranges for virtualization

mod coordinate;
pub mod row_height;
pub mod space;
mod viewport;

pub use coordinate::{CoordinateManager, CoordinateParams, RowHeights};
pub use space::{AbsoluteX, AbsoluteY, ViewportX, ViewportY};
pub use viewport::ScrollState;
