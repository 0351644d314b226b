//! Drag-select gesture.

use crate::layout::CoordinateManager;
use crate::types::{CombinedSelection, RegionType, ResolvedRegion, SelectionRegionType};

/// Owns the current selection and extends it while the pointer drags.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: CombinedSelection,
    is_selecting: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &CombinedSelection {
        &self.selection
    }

    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    /// React to pointer-down. Returns true if the selection changed.
    ///
    /// Cells, column headers and row headers start a drag; checkboxes change
    /// the selection without one.
    pub fn begin(&mut self, region: &ResolvedRegion, coords: &CoordinateManager) -> bool {
        let col = region.column_index.index();
        let row = region.row_index.index();
        let (next, drag) = match region.region_type {
            RegionType::Cell => {
                let Some((col, row)) = region.cell() else {
                    return false;
                };
                (CombinedSelection::cells([col, row], [col, row]), true)
            }
            RegionType::ColumnHeader => {
                let Some(col) = col else {
                    return false;
                };
                (CombinedSelection::columns(col, col), true)
            }
            RegionType::RowHeader => {
                let Some(row) = row else {
                    return false;
                };
                (CombinedSelection::rows(row, row), true)
            }
            RegionType::AllCheckbox => (CombinedSelection::all_rows(coords.row_count()), false),
            RegionType::RowHeaderCheckbox => {
                let Some(row) = row else {
                    return false;
                };
                let mut next = self.selection.clone();
                next.toggle_row(row);
                (next, false)
            }
            _ => return false,
        };
        if drag {
            tracing::debug!(kind = ?next.region_type, "selection drag started");
        }
        self.is_selecting = drag;
        self.selection = next;
        true
    }

    /// Extend the end anchor to `region`. Returns true if the selection changed.
    ///
    /// Sentinel and out-of-bounds regions keep the last valid end.
    pub fn update(&mut self, region: &ResolvedRegion) -> bool {
        if !self.is_selecting || region.is_out_of_bounds {
            return false;
        }
        let Some(range) = self.selection.ranges.last().copied() else {
            return false;
        };
        let extended = match self.selection.region_type {
            SelectionRegionType::Cells => match region.cell() {
                Some((col, row)) => range.with_end(col, row),
                None => return false,
            },
            SelectionRegionType::Columns => match region.column_index.index() {
                Some(col) => range.with_end(col, 0),
                None => return false,
            },
            SelectionRegionType::Rows => match region.row_index.index() {
                Some(row) => range.with_end(0, row),
                None => return false,
            },
            SelectionRegionType::None => return false,
        };
        if extended == range {
            return false;
        }
        if let Some(last) = self.selection.ranges.last_mut() {
            *last = extended;
        }
        true
    }

    /// Finish the drag. Safe to call when idle; returns true if one was active.
    pub fn end(&mut self) -> bool {
        std::mem::take(&mut self.is_selecting)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::{CoordinateParams, RowHeights};
    use crate::types::{GridIndex, SelectionRange};

    fn coords() -> CoordinateManager {
        CoordinateManager::new(CoordinateParams {
            column_widths: vec![80.0; 4],
            freeze_column_count: 0,
            row_count: 5,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 24.0,
            row_header_width: 40.0,
            container_width: 400.0,
            container_height: 300.0,
        })
    }

    fn cell(col: usize, row: usize) -> ResolvedRegion {
        ResolvedRegion::new(
            RegionType::Cell,
            GridIndex::Index(col),
            GridIndex::Index(row),
            0.0,
            0.0,
        )
    }

    #[test]
    fn test_cell_drag_extends_end() {
        let mut ctrl = SelectionController::new();
        assert!(ctrl.begin(&cell(2, 3), &coords()));
        assert!(ctrl.update(&cell(0, 1)));
        assert!(!ctrl.update(&cell(0, 1)));
        assert_eq!(
            ctrl.selection().ranges,
            vec![SelectionRange::Cells {
                start: [2, 3],
                end: [0, 1]
            }]
        );
        assert!(ctrl.end());
        assert!(!ctrl.end());
    }

    #[test]
    fn test_out_of_bounds_keeps_last_end() {
        let mut ctrl = SelectionController::new();
        ctrl.begin(&cell(1, 1), &coords());
        ctrl.update(&cell(2, 2));
        assert!(!ctrl.update(&cell(3, 3).out_of_bounds()));
        assert!(ctrl.selection().contains_cell(2, 2));
        assert!(!ctrl.selection().contains_cell(3, 3));
    }

    #[test]
    fn test_all_checkbox_selects_rows_without_drag() {
        let mut ctrl = SelectionController::new();
        let region = ResolvedRegion::new(
            RegionType::AllCheckbox,
            GridIndex::None,
            GridIndex::None,
            20.0,
            12.0,
        );
        assert!(ctrl.begin(&region, &coords()));
        assert!(!ctrl.is_selecting());
        assert_eq!(ctrl.selection(), &CombinedSelection::rows(0, 4));
    }

    #[test]
    fn test_row_checkbox_toggles() {
        let mut ctrl = SelectionController::new();
        let region = ResolvedRegion::new(
            RegionType::RowHeaderCheckbox,
            GridIndex::None,
            GridIndex::Index(2),
            20.0,
            100.0,
        );
        ctrl.begin(&region, &coords());
        assert!(ctrl.selection().contains_row(2));
        ctrl.begin(&region, &coords());
        assert!(ctrl.selection().is_empty());
    }

    #[test]
    fn test_column_drag_follows_cells() {
        let mut ctrl = SelectionController::new();
        let header = ResolvedRegion::new(
            RegionType::ColumnHeader,
            GridIndex::Index(1),
            GridIndex::None,
            100.0,
            10.0,
        );
        ctrl.begin(&header, &coords());
        assert!(ctrl.update(&cell(3, 4)));
        assert_eq!(ctrl.selection(), &CombinedSelection::columns(1, 3));
    }
}
