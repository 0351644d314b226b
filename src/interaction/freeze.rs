//! Freeze-boundary drag gesture.
//!
//! Indices here are "last frozen column" positions: `None` means the boundary
//! sits left of the first column (the -1 position), `Some(i)` means columns
//! `0..=i` end up frozen.

use crate::layout::{CoordinateManager, ViewportX};
use crate::types::{RegionType, ResolvedRegion};

/// Snapshot of an in-flight freeze drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnFreezeState {
    /// Last frozen column when the drag started
    pub source_index: Option<usize>,
    /// Last frozen column under the pointer
    pub target_index: Option<usize>,
    pub is_freezing: bool,
}

impl ColumnFreezeState {
    /// Freeze count the current target would commit.
    pub fn target_freeze_count(&self) -> usize {
        self.target_index.map_or(0, |t| t + 1)
    }
}

/// Idle → Freezing → Idle. The freeze count is committed once, on release.
#[derive(Debug, Clone, Default)]
pub struct ColumnFreezeController {
    state: ColumnFreezeState,
}

impl ColumnFreezeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ColumnFreezeState {
        &self.state
    }

    pub fn is_freezing(&self) -> bool {
        self.state.is_freezing
    }

    /// Start dragging if `region` is the freeze handle. Returns true if started.
    pub fn begin(&mut self, region: &ResolvedRegion, coords: &CoordinateManager) -> bool {
        if region.region_type != RegionType::ColumnFreezeHandler {
            return false;
        }
        let source = coords.freeze_column_count().checked_sub(1);
        self.state = ColumnFreezeState {
            source_index: source,
            target_index: source,
            is_freezing: true,
        };
        tracing::debug!(source = ?source, "column freeze drag started");
        true
    }

    /// Retarget the boundary to the column under viewport `x`.
    ///
    /// Left half of a column puts the boundary before it, right half after it.
    /// Returns the new target while dragging.
    pub fn update(
        &mut self,
        x: ViewportX,
        scroll_left: f32,
        coords: &CoordinateManager,
    ) -> Option<Option<usize>> {
        if !self.state.is_freezing {
            return None;
        }
        let target = if coords.column_count() == 0 {
            None
        } else {
            let abs_x = coords.absolute_x(x, scroll_left);
            let col = coords.column_start_index(abs_x);
            let midpoint = coords.column_offset(col).0 + coords.column_width(col) / 2.0;
            if abs_x.0 < midpoint {
                col.checked_sub(1)
            } else {
                Some(col)
            }
        };
        self.state.target_index = target;
        tracing::trace!(target = ?target, "column freeze target");
        Some(target)
    }

    /// Finish the gesture, calling `on_commit(freeze_count)` if one was active.
    ///
    /// Safe to call when idle. Returns true if a commit happened.
    pub fn end(&mut self, on_commit: impl FnOnce(usize)) -> bool {
        let state = std::mem::take(&mut self.state);
        if !state.is_freezing {
            return false;
        }
        let count = state.target_freeze_count();
        tracing::debug!(freeze_column_count = count, "column freeze committed");
        on_commit(count);
        true
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        if self.state.is_freezing {
            tracing::debug!("column freeze cancelled");
        }
        self.state = ColumnFreezeState::default();
    }

    /// Viewport x of the drop line for the current target.
    pub fn indicator_x(&self, coords: &CoordinateManager, scroll_left: f32) -> Option<ViewportX> {
        if !self.state.is_freezing {
            return None;
        }
        let x = match self.state.target_index {
            None => coords.row_header_width(),
            Some(t) => coords.column_relative_offset(t, scroll_left).0 + coords.column_width(t),
        };
        Some(ViewportX(x))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use crate::layout::{CoordinateParams, RowHeights};
    use crate::types::GridIndex;

    fn coords(freeze: usize, row_header: f32) -> CoordinateManager {
        CoordinateManager::new(CoordinateParams {
            column_widths: vec![100.0, 80.0, 80.0, 80.0],
            freeze_column_count: freeze,
            row_count: 3,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 24.0,
            row_header_width: row_header,
            container_width: 400.0,
            container_height: 300.0,
        })
    }

    fn handle(x: f32) -> ResolvedRegion {
        ResolvedRegion::new(
            RegionType::ColumnFreezeHandler,
            GridIndex::Index(0),
            GridIndex::Index(0),
            x,
            40.0,
        )
    }

    #[test]
    fn test_begin_snapshots_source() {
        let coords = coords(2, 0.0);
        let mut ctrl = ColumnFreezeController::new();
        assert!(ctrl.begin(&handle(180.0), &coords));
        assert_eq!(ctrl.state().source_index, Some(1));
        assert_eq!(ctrl.state().target_index, Some(1));
    }

    #[test]
    fn test_halves_pick_target() {
        let coords = coords(1, 0.0);
        let mut ctrl = ColumnFreezeController::new();
        ctrl.begin(&handle(100.0), &coords);
        // Column 2 spans 180..260
        assert_eq!(ctrl.update(ViewportX(200.0), 0.0, &coords), Some(Some(1)));
        assert_eq!(ctrl.update(ViewportX(230.0), 0.0, &coords), Some(Some(2)));
        assert_eq!(ctrl.update(ViewportX(10.0), 0.0, &coords), Some(None));
    }

    #[test]
    fn test_gutter_maps_before_first_column() {
        let coords = coords(1, 40.0);
        let mut ctrl = ColumnFreezeController::new();
        ctrl.begin(&handle(140.0), &coords);
        assert_eq!(ctrl.update(ViewportX(20.0), 0.0, &coords), Some(None));
        let mut committed = None;
        ctrl.end(|n| committed = Some(n));
        assert_eq!(committed, Some(0));
    }

    #[test]
    fn test_scrolled_region_uses_scroll() {
        let coords = coords(1, 0.0);
        let mut ctrl = ColumnFreezeController::new();
        ctrl.begin(&handle(100.0), &coords);
        // viewport 150 + scroll 100 = absolute 250: right half of column 2
        assert_eq!(ctrl.update(ViewportX(150.0), 100.0, &coords), Some(Some(2)));
        assert_eq!(ctrl.indicator_x(&coords, 100.0), Some(ViewportX(160.0)));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut ctrl = ColumnFreezeController::new();
        assert!(!ctrl.end(|_| panic!("idle end must not commit")));
    }
}
