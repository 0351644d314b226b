//! Pixel geometry for both grid axes.
//!
//! Column edges are pre-computed into a cumulative array once per structural
//! change so that position→index lookups are O(log n). Rows take the same
//! approach when heights vary; uniform rows skip the array and use plain
//! arithmetic.

use std::ops::Range;

use super::row_height::{uniform_row_index, uniform_row_offset, uniform_rows_height};
use super::space::{self, AbsoluteX, AbsoluteY, ViewportX, ViewportY};
use crate::types::GridConfig;

/// Row height source.
#[derive(Debug, Clone, PartialEq)]
pub enum RowHeights {
    /// Every row has the same height
    Uniform(f32),
    /// One height per row
    Variable(Vec<f32>),
}

impl RowHeights {
    /// Materialize heights from a per-row accessor.
    pub fn from_fn(row_count: usize, height_of: impl Fn(usize) -> f32) -> Self {
        Self::Variable((0..row_count).map(height_of).collect())
    }
}

/// Inputs needed to build a [`CoordinateManager`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateParams {
    pub column_widths: Vec<f32>,
    pub freeze_column_count: usize,
    pub row_count: usize,
    pub row_heights: RowHeights,
    pub header_height: f32,
    pub row_header_width: f32,
    pub container_width: f32,
    pub container_height: f32,
}

/// Geometry engine for a grid with frozen columns and a pinned header.
#[derive(Debug, Clone)]
pub struct CoordinateManager {
    /// Column widths
    col_widths: Vec<f32>,
    /// Absolute left edges; `col_positions[i]` = x of column i, last entry is the right edge
    col_positions: Vec<f32>,
    row_heights: RowHeights,
    /// Absolute top edges for variable heights (empty for uniform rows)
    row_positions: Vec<f32>,
    row_count: usize,
    freeze_column_count: usize,
    header_height: f32,
    row_header_width: f32,
    container_width: f32,
    container_height: f32,
}

impl CoordinateManager {
    pub fn new(params: CoordinateParams) -> Self {
        let row_count = match &params.row_heights {
            RowHeights::Uniform(_) => params.row_count,
            RowHeights::Variable(heights) => heights.len(),
        };
        let mut manager = Self {
            col_widths: params.column_widths.iter().map(|w| w.max(0.0)).collect(),
            col_positions: Vec::new(),
            row_heights: params.row_heights,
            row_positions: Vec::new(),
            row_count,
            freeze_column_count: 0,
            header_height: params.header_height.max(0.0),
            row_header_width: params.row_header_width.max(0.0),
            container_width: params.container_width.max(0.0),
            container_height: params.container_height.max(0.0),
        };
        manager.freeze_column_count = params.freeze_column_count.min(manager.col_widths.len());
        manager.rebuild_columns();
        manager.rebuild_rows();
        manager
    }

    /// Build geometry from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        let row_heights = match &config.row_heights {
            Some(heights) => RowHeights::Variable(heights.clone()),
            None => RowHeights::Uniform(config.row_height_level.pixels()),
        };
        Self::new(CoordinateParams {
            column_widths: config.columns.iter().map(|c| c.width).collect(),
            freeze_column_count: config.freeze_column_count,
            row_count: config.row_count,
            row_heights,
            header_height: config.header_height,
            row_header_width: config.row_header_width,
            container_width: config.container_width,
            container_height: config.container_height,
        })
    }

    fn rebuild_columns(&mut self) {
        let mut positions = Vec::with_capacity(self.col_widths.len() + 1);
        let mut x = self.row_header_width;
        for w in &self.col_widths {
            positions.push(x);
            x += w;
        }
        positions.push(x); // Final edge
        self.col_positions = positions;
    }

    fn rebuild_rows(&mut self) {
        self.row_positions = match &self.row_heights {
            RowHeights::Uniform(_) => Vec::new(),
            RowHeights::Variable(heights) => {
                let mut positions = Vec::with_capacity(heights.len() + 1);
                let mut y = self.header_height;
                for h in heights {
                    positions.push(y);
                    y += h.max(0.0);
                }
                positions.push(y);
                positions
            }
        };
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn freeze_column_count(&self) -> usize {
        self.freeze_column_count
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn row_header_width(&self) -> f32 {
        self.row_header_width
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    fn clamp_column(&self, index: usize) -> Option<usize> {
        self.col_widths.len().checked_sub(1).map(|last| index.min(last))
    }

    fn clamp_row(&self, index: usize) -> Option<usize> {
        self.row_count.checked_sub(1).map(|last| index.min(last))
    }

    /// Width of column `index`, clamped to the valid range (0 without columns).
    pub fn column_width(&self, index: usize) -> f32 {
        self.clamp_column(index)
            .and_then(|i| self.col_widths.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Height of row `index`, clamped to the valid range (0 without rows).
    pub fn row_height(&self, index: usize) -> f32 {
        let Some(i) = self.clamp_row(index) else {
            return 0.0;
        };
        match &self.row_heights {
            RowHeights::Uniform(h) => *h,
            RowHeights::Variable(heights) => heights.get(i).copied().unwrap_or(0.0).max(0.0),
        }
    }

    /// Absolute left edge of column `index` (clamped).
    pub fn column_offset(&self, index: usize) -> AbsoluteX {
        let x = self
            .clamp_column(index)
            .and_then(|i| self.col_positions.get(i))
            .copied()
            .unwrap_or(self.row_header_width);
        AbsoluteX(x)
    }

    /// Absolute top edge of row `index` (clamped).
    pub fn row_offset(&self, index: usize) -> AbsoluteY {
        let Some(i) = self.clamp_row(index) else {
            return AbsoluteY(self.header_height);
        };
        let y = match &self.row_heights {
            RowHeights::Uniform(h) => uniform_row_offset(*h, self.header_height, i),
            RowHeights::Variable(_) => self
                .row_positions
                .get(i)
                .copied()
                .unwrap_or(self.header_height),
        };
        AbsoluteY(y)
    }

    /// Left edge of column `index` in viewport space.
    ///
    /// Frozen columns ignore `scroll_left`.
    pub fn column_relative_offset(&self, index: usize, scroll_left: f32) -> ViewportX {
        let offset = self.column_offset(index).0;
        if index < self.freeze_column_count {
            ViewportX(offset)
        } else {
            ViewportX(offset - scroll_left)
        }
    }

    /// Top edge of row `index` in viewport space.
    pub fn row_relative_offset(&self, index: usize, scroll_top: f32) -> ViewportY {
        ViewportY(self.row_offset(index).0 - scroll_top)
    }

    /// Column under an absolute x, clamped to `[0, column_count - 1]`.
    pub fn column_start_index(&self, x: AbsoluteX) -> usize {
        let Some(last) = self.col_widths.len().checked_sub(1) else {
            return 0;
        };
        let edges_at_or_before = self.col_positions.partition_point(|&pos| pos <= x.0);
        edges_at_or_before.saturating_sub(1).min(last)
    }

    /// Row under an absolute y, clamped to `[0, row_count - 1]`.
    pub fn row_start_index(&self, y: AbsoluteY) -> usize {
        let Some(last) = self.row_count.checked_sub(1) else {
            return 0;
        };
        match &self.row_heights {
            RowHeights::Uniform(h) => uniform_row_index(*h, self.header_height, y, self.row_count),
            RowHeights::Variable(_) => {
                let edges_at_or_before = self.row_positions.partition_point(|&pos| pos <= y.0);
                edges_at_or_before.saturating_sub(1).min(last)
            }
        }
    }

    /// Map a viewport x to absolute space using the frozen/scrollable split.
    pub fn absolute_x(&self, x: ViewportX, scroll_left: f32) -> AbsoluteX {
        space::absolute_x(x, scroll_left, self.freeze_region_width())
    }

    /// Map a viewport y to absolute space; the column header is pinned.
    pub fn absolute_y(&self, y: ViewportY, scroll_top: f32) -> AbsoluteY {
        space::absolute_y(y, scroll_top, self.header_height)
    }

    /// Content width: row header plus every column.
    pub fn total_width(&self) -> f32 {
        self.col_positions
            .last()
            .copied()
            .unwrap_or(self.row_header_width)
    }

    /// Content height: column header plus every row.
    pub fn total_height(&self) -> f32 {
        match &self.row_heights {
            RowHeights::Uniform(h) => self.header_height + uniform_rows_height(*h, self.row_count),
            RowHeights::Variable(_) => self
                .row_positions
                .last()
                .copied()
                .unwrap_or(self.header_height),
        }
    }

    /// Row header width plus the width of every frozen column.
    pub fn freeze_region_width(&self) -> f32 {
        self.col_positions
            .get(self.freeze_column_count)
            .copied()
            .unwrap_or(self.row_header_width)
    }

    /// Scrollable columns intersecting the container at `scroll_left`.
    ///
    /// Frozen columns are always drawn and are not part of this range.
    pub fn visible_column_range(&self, scroll_left: f32) -> Range<usize> {
        let count = self.col_widths.len();
        if self.freeze_column_count >= count {
            return count..count;
        }
        let left = AbsoluteX(self.freeze_region_width() + scroll_left);
        let right = scroll_left + self.container_width;
        let start = self
            .column_start_index(left)
            .max(self.freeze_column_count);
        let end = self
            .col_positions
            .partition_point(|&pos| pos < right)
            .min(count)
            .max(start);
        start..end
    }

    /// Rows intersecting the container at `scroll_top`.
    pub fn visible_row_range(&self, scroll_top: f32) -> Range<usize> {
        if self.row_count == 0 {
            return 0..0;
        }
        let top = AbsoluteY(self.header_height + scroll_top);
        let bottom = AbsoluteY(scroll_top + self.container_height);
        let start = self.row_start_index(top);
        let end = (self.row_start_index(bottom) + 1).clamp(start, self.row_count);
        start..end
    }

    /// Change one column's width. Returns false for an unknown column.
    pub fn set_column_width(&mut self, index: usize, width: f32) -> bool {
        let Some(w) = self.col_widths.get_mut(index) else {
            return false;
        };
        *w = width.max(0.0);
        self.rebuild_columns();
        tracing::debug!(column = index, width, "column geometry rebuilt");
        true
    }

    /// Change the freeze count, clamped to `[0, column_count]`.
    pub fn set_freeze_column_count(&mut self, count: usize) {
        self.freeze_column_count = count.min(self.col_widths.len());
        tracing::debug!(
            freeze_column_count = self.freeze_column_count,
            "freeze boundary moved"
        );
    }

    /// Change the number of rows. Variable heights are padded with the last
    /// known height (or truncated).
    pub fn set_row_count(&mut self, row_count: usize) {
        if let RowHeights::Variable(heights) = &mut self.row_heights {
            let fill = heights.last().copied().unwrap_or(0.0);
            heights.resize(row_count, fill);
        }
        self.row_count = row_count;
        self.rebuild_rows();
        tracing::debug!(row_count, "row geometry rebuilt");
    }

    /// Change header sizes and rebuild both axes.
    pub fn set_header_dimensions(&mut self, row_header_width: f32, header_height: f32) {
        self.row_header_width = row_header_width.max(0.0);
        self.header_height = header_height.max(0.0);
        self.rebuild_columns();
        self.rebuild_rows();
    }

    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.container_width = width.max(0.0);
        self.container_height = height.max(0.0);
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

    fn manager(widths: &[f32], freeze: usize, rows: usize) -> CoordinateManager {
        CoordinateManager::new(CoordinateParams {
            column_widths: widths.to_vec(),
            freeze_column_count: freeze,
            row_count: rows,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 24.0,
            row_header_width: 0.0,
            container_width: 200.0,
            container_height: 300.0,
        })
    }

    #[test]
    fn test_totals() {
        let m = manager(&[80.0, 80.0, 80.0], 0, 10);
        assert_eq!(m.total_width(), 240.0);
        assert_eq!(m.total_height(), 24.0 + 320.0);
        assert_eq!(m.freeze_region_width(), 0.0);
    }

    #[test]
    fn test_empty_grid() {
        let m = manager(&[], 0, 0);
        assert_eq!(m.total_width(), 0.0);
        assert_eq!(m.total_height(), 24.0);
        assert_eq!(m.column_width(3), 0.0);
        assert_eq!(m.row_height(3), 0.0);
        assert_eq!(m.column_start_index(AbsoluteX(50.0)), 0);
        assert_eq!(m.row_start_index(AbsoluteY(50.0)), 0);
        assert!(m.visible_column_range(0.0).is_empty());
        assert!(m.visible_row_range(0.0).is_empty());
    }

    #[test]
    fn test_lookups_clamp() {
        let m = manager(&[80.0, 100.0], 0, 2);
        assert_eq!(m.column_width(9), 100.0);
        assert_eq!(m.column_offset(9), AbsoluteX(80.0));
        assert_eq!(m.column_start_index(AbsoluteX(-5.0)), 0);
        assert_eq!(m.column_start_index(AbsoluteX(500.0)), 1);
        assert_eq!(m.row_offset(7), AbsoluteY(56.0));
    }

    #[test]
    fn test_relative_offset_frozen() {
        let m = manager(&[100.0, 80.0, 80.0], 1, 1);
        assert_eq!(m.column_relative_offset(0, 50.0), ViewportX(0.0));
        assert_eq!(m.column_relative_offset(1, 50.0), ViewportX(50.0));
        assert_eq!(m.freeze_region_width(), 100.0);
    }

    #[test]
    fn test_freeze_count_clamped() {
        let mut m = manager(&[80.0, 80.0], 5, 1);
        assert_eq!(m.freeze_column_count(), 2);
        m.set_freeze_column_count(1);
        assert_eq!(m.freeze_region_width(), 80.0);
    }

    #[test]
    fn test_variable_rows() {
        let m = CoordinateManager::new(CoordinateParams {
            column_widths: vec![80.0],
            freeze_column_count: 0,
            row_count: 0,
            row_heights: RowHeights::from_fn(3, |i| if i == 1 { 100.0 } else { 20.0 }),
            header_height: 10.0,
            row_header_width: 0.0,
            container_width: 100.0,
            container_height: 100.0,
        });
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.row_offset(2), AbsoluteY(130.0));
        assert_eq!(m.row_start_index(AbsoluteY(29.9)), 0);
        assert_eq!(m.row_start_index(AbsoluteY(30.0)), 1);
        assert_eq!(m.row_start_index(AbsoluteY(129.0)), 1);
        assert_eq!(m.total_height(), 150.0);
    }

    #[test]
    fn test_set_column_width_rebuilds() {
        let mut m = manager(&[80.0, 80.0, 80.0], 0, 1);
        assert!(m.set_column_width(0, 120.0));
        assert_eq!(m.column_offset(1), AbsoluteX(120.0));
        assert_eq!(m.total_width(), 280.0);
        assert!(!m.set_column_width(3, 120.0));
    }

    #[test]
    fn test_visible_ranges() {
        let m = manager(&[100.0, 80.0, 80.0, 80.0, 80.0], 1, 100);
        // 200px container: frozen 0..100, scrollable part shows absolute 130..230
        assert_eq!(m.visible_column_range(30.0), 1..3);
        // 300px container minus 24px header at 32px rows
        assert_eq!(m.visible_row_range(0.0), 0..9);
        assert_eq!(m.visible_row_range(64.0), 2..11);
    }
}
