//! Shared builders for the integration tests.
//!
//! `GridBuilder` assembles a `GridConfig` fluently and turns it into either a
//! `CoordinateManager` or a full `GridView`. `Recorder` captures every
//! callback a gesture fires.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use vgrid::{
    Column, CombinedSelection, CoordinateManager, GridCallbacks, GridConfig, GridFeatures,
    GridTheme, GridView, LinearRow, RowHeightLevel,
};

// ============================================================================
// Grid Builder
// ============================================================================

/// Fluent builder over `GridConfig`.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    /// Three 80px columns, 10 short rows, 24px header, no row header.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GridConfig {
                columns: columns(&[80.0, 80.0, 80.0]),
                row_count: 10,
                header_height: 24.0,
                ..GridConfig::default()
            },
        }
    }

    #[must_use]
    pub fn widths(mut self, widths: &[f32]) -> Self {
        self.config.columns = columns(widths);
        self
    }

    #[must_use]
    pub fn freeze(mut self, count: usize) -> Self {
        self.config.freeze_column_count = count;
        self
    }

    #[must_use]
    pub fn rows(mut self, count: usize) -> Self {
        self.config.row_count = count;
        self
    }

    #[must_use]
    pub fn level(mut self, level: RowHeightLevel) -> Self {
        self.config.row_height_level = level;
        self
    }

    #[must_use]
    pub fn row_heights(mut self, heights: Vec<f32>) -> Self {
        self.config.row_count = heights.len();
        self.config.row_heights = Some(heights);
        self
    }

    #[must_use]
    pub fn header_height(mut self, height: f32) -> Self {
        self.config.header_height = height;
        self
    }

    #[must_use]
    pub fn row_header_width(mut self, width: f32) -> Self {
        self.config.row_header_width = width;
        self
    }

    #[must_use]
    pub fn container(mut self, width: f32, height: f32) -> Self {
        self.config.container_width = width;
        self.config.container_height = height;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: GridTheme) -> Self {
        self.config.theme = theme;
        self
    }

    #[must_use]
    pub fn standard_theme(self) -> Self {
        self.theme(GridTheme::standard())
    }

    #[must_use]
    pub fn features(mut self, features: GridFeatures) -> Self {
        self.config.features = features;
        self
    }

    #[must_use]
    pub fn linear_rows(mut self, rows: Vec<LinearRow>) -> Self {
        self.config.row_count = rows.len();
        self.config.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config.clone()
    }

    #[must_use]
    pub fn coords(&self) -> CoordinateManager {
        CoordinateManager::from_config(&self.config)
    }

    #[must_use]
    pub fn view(&self) -> GridView {
        GridView::new(self.config.clone()).expect("valid grid config")
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Columns `c0..cN` with the given widths.
#[must_use]
pub fn columns(widths: &[f32]) -> Vec<Column> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| Column::new(format!("c{i}"), w))
        .collect()
}

// ============================================================================
// Callback Recorder
// ============================================================================

/// Records every callback in arrival order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub resizes: Vec<(usize, f32)>,
    pub freezes: Vec<usize>,
    pub previews: Vec<(usize, f32)>,
    pub selections: Vec<CombinedSelection>,
}

impl GridCallbacks for Recorder {
    fn on_column_resize(&mut self, column_index: usize, width: f32) {
        self.resizes.push((column_index, width));
    }

    fn on_column_freeze_change(&mut self, freeze_column_count: usize) {
        self.freezes.push(freeze_column_count);
    }

    fn on_resize_preview(&mut self, column_index: usize, width: f32) {
        self.previews.push((column_index, width));
    }

    fn on_selection_change(&mut self, selection: &CombinedSelection) {
        self.selections.push(selection.clone());
    }
}
