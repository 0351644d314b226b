//! Pointer → region classification.
//!
//! [`resolve_region`] runs on every pointer move; it is a pure function of the
//! pointer position and a borrowed [`RegionContext`].

mod resolver;

pub use resolver::{resolve_region, RegionContext};

use crate::types::LinearRow;

/// Row-variant lookup supplied by the grouping/virtualization layer.
pub trait LinearRowSource {
    /// Variant of the row at `row_index`, if known.
    fn linear_row(&self, row_index: usize) -> Option<&LinearRow>;
}

impl LinearRowSource for [LinearRow] {
    fn linear_row(&self, row_index: usize) -> Option<&LinearRow> {
        self.get(row_index)
    }
}

impl LinearRowSource for Vec<LinearRow> {
    fn linear_row(&self, row_index: usize) -> Option<&LinearRow> {
        self.get(row_index)
    }
}
