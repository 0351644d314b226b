//! Pointer gesture state machines.
//!
//! Each controller owns an explicit state object, created on pointer-down over
//! a matching region and reset on pointer-up or cancel. Controllers never touch
//! the [`CoordinateManager`](crate::layout::CoordinateManager); they only report
//! target values, committed once per gesture.

mod freeze;
mod resize;
mod selection;

pub use freeze::{ColumnFreezeController, ColumnFreezeState};
pub use resize::{ColumnResizeController, ColumnResizeState};
pub use selection::SelectionController;

use crate::types::CombinedSelection;

/// Commit sinks owned by the surrounding application.
///
/// Calls are fire-and-forget: the engine neither awaits nor retries them.
pub trait GridCallbacks {
    /// A resize gesture finished with the given width.
    fn on_column_resize(&mut self, column_index: usize, width: f32);

    /// A freeze drag finished with the given freeze count.
    fn on_column_freeze_change(&mut self, freeze_column_count: usize);

    /// Per-frame resize preview, for cheap repaints.
    fn on_resize_preview(&mut self, _column_index: usize, _width: f32) {}

    /// The selection changed.
    fn on_selection_change(&mut self, _selection: &CombinedSelection) {}
}

/// The single gesture a view may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Resize,
    Freeze,
    Selection,
}
