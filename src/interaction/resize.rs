//! Column resize gesture.

use crate::layout::{CoordinateManager, ViewportX};
use crate::types::{RegionType, ResolvedRegion, MIN_COLUMN_WIDTH};

/// Snapshot of an in-flight column resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnResizeState {
    /// Column being resized (`None` while idle)
    pub column_index: Option<usize>,
    /// Width shown while dragging
    pub preview_width: f32,
    /// Pointer x at pointer-down
    pub anchor_x: f32,
    /// Column width at pointer-down
    pub start_width: f32,
    pub is_resizing: bool,
}

/// Idle → Resizing → Idle. The width is committed once, on release.
#[derive(Debug, Clone, Default)]
pub struct ColumnResizeController {
    state: ColumnResizeState,
    /// Pointer is over a resize band (hover indicator only)
    hovered: bool,
}

impl ColumnResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ColumnResizeState {
        &self.state
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing
    }

    pub fn is_handle_hovered(&self) -> bool {
        self.hovered
    }

    /// Track whether the pointer hovers a resize band.
    pub fn update_hover(&mut self, region: &ResolvedRegion) {
        self.hovered = region.region_type == RegionType::ColumnResizeHandler;
    }

    /// Start resizing if `region` is a resize band. Returns true if started.
    pub fn begin(&mut self, region: &ResolvedRegion, coords: &CoordinateManager) -> bool {
        if region.region_type != RegionType::ColumnResizeHandler {
            return false;
        }
        let Some(col) = region
            .column_index
            .index()
            .filter(|&c| c < coords.column_count())
        else {
            return false;
        };
        let start_width = coords.column_width(col);
        self.state = ColumnResizeState {
            column_index: Some(col),
            preview_width: start_width.max(MIN_COLUMN_WIDTH),
            anchor_x: region.x,
            start_width,
            is_resizing: true,
        };
        tracing::debug!(column = col, start_width, "column resize started");
        true
    }

    /// Update the live preview. Returns `(column, preview_width)` while resizing.
    pub fn update(&mut self, x: ViewportX) -> Option<(usize, f32)> {
        if !self.state.is_resizing {
            return None;
        }
        let col = self.state.column_index?;
        let width = (self.state.start_width + (x.0 - self.state.anchor_x))
            .round()
            .max(MIN_COLUMN_WIDTH);
        self.state.preview_width = width;
        tracing::trace!(column = col, width, "column resize preview");
        Some((col, width))
    }

    /// Finish the gesture, calling `on_commit(column, width)` if one was active.
    ///
    /// Safe to call when idle. Returns true if a commit happened.
    pub fn end(&mut self, on_commit: impl FnOnce(usize, f32)) -> bool {
        let state = std::mem::take(&mut self.state);
        self.hovered = false;
        match state.column_index {
            Some(col) if state.is_resizing => {
                tracing::debug!(column = col, width = state.preview_width, "column resize committed");
                on_commit(col, state.preview_width);
                true
            }
            _ => false,
        }
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        if self.state.is_resizing {
            tracing::debug!(column = ?self.state.column_index, "column resize cancelled");
        }
        self.state = ColumnResizeState::default();
        self.hovered = false;
    }

    /// Viewport x of the previewed right edge while resizing.
    pub fn preview_edge_x(&self, coords: &CoordinateManager, scroll_left: f32) -> Option<ViewportX> {
        if !self.state.is_resizing {
            return None;
        }
        let col = self.state.column_index?;
        let left = coords.column_relative_offset(col, scroll_left).0;
        Some(ViewportX(left + self.state.preview_width))
    }
}
