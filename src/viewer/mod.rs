//! The owning grid view.
//!
//! `GridView` owns everything the engine needs for one grid instance:
//! - Column configuration, row variants, theme and feature switches
//! - The `CoordinateManager` (rebuilt only here, on structural change)
//! - Scroll state
//! - The resize, freeze and selection controllers, of which at most one is
//!   active at a time
//!
//! Pointer routing lives in `events.rs`; the JavaScript export in `wasm.rs`.

mod events;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::GridHandle;

use crate::error::Result;
use crate::interaction::{
    ColumnFreezeController, ColumnFreezeState, ColumnResizeController, ColumnResizeState,
    InteractionKind, SelectionController,
};
use crate::layout::{CoordinateManager, ScrollState, ViewportX, ViewportY};
use crate::region::{resolve_region, LinearRowSource, RegionContext};
use crate::types::{
    Column, CombinedSelection, GridConfig, GridFeatures, GridTheme, LinearRow, ResolvedRegion,
    MIN_COLUMN_WIDTH,
};

/// One grid instance: geometry, scroll and interaction state.
#[derive(Debug, Clone)]
pub struct GridView {
    columns: Vec<Column>,
    rows: Option<Vec<LinearRow>>,
    coords: CoordinateManager,
    scroll: ScrollState,
    theme: GridTheme,
    features: GridFeatures,
    resize: ColumnResizeController,
    freeze: ColumnFreezeController,
    selection: SelectionController,
    /// Region under the pointer while no gesture is active
    hover: Option<ResolvedRegion>,
}

impl GridView {
    /// Build a view from a configuration, validating it first.
    ///
    /// # Errors
    /// Returns an error if the configuration violates a grid invariant.
    pub fn new(mut config: GridConfig) -> Result<Self> {
        config.validate()?;
        let coords = CoordinateManager::from_config(&config);
        tracing::debug!(
            columns = config.columns.len(),
            rows = config.row_count,
            freeze_column_count = config.freeze_column_count,
            "grid view created"
        );
        Ok(Self {
            columns: config.columns,
            rows: config.rows,
            coords,
            scroll: ScrollState::default(),
            theme: config.theme,
            features: config.features,
            resize: ColumnResizeController::new(),
            freeze: ColumnFreezeController::new(),
            selection: SelectionController::new(),
            hover: None,
        })
    }

    /// Parse a JSON configuration and build a view from it.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(GridConfig::from_json(json)?)
    }

    pub fn coords(&self) -> &CoordinateManager {
        &self.coords
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> Option<&[LinearRow]> {
        self.rows.as_deref()
    }

    pub fn theme(&self) -> &GridTheme {
        &self.theme
    }

    pub fn features(&self) -> GridFeatures {
        self.features
    }

    pub fn selection(&self) -> &CombinedSelection {
        self.selection.selection()
    }

    pub fn resize_state(&self) -> &ColumnResizeState {
        self.resize.state()
    }

    pub fn freeze_state(&self) -> &ColumnFreezeState {
        self.freeze.state()
    }

    pub fn hovered_region(&self) -> Option<&ResolvedRegion> {
        self.hover.as_ref()
    }

    pub fn is_resize_handle_hovered(&self) -> bool {
        self.resize.is_handle_hovered()
    }

    /// The gesture currently in flight, if any.
    pub fn active_interaction(&self) -> Option<InteractionKind> {
        if self.resize.is_resizing() {
            Some(InteractionKind::Resize)
        } else if self.freeze.is_freezing() {
            Some(InteractionKind::Freeze)
        } else if self.selection.is_selecting() {
            Some(InteractionKind::Selection)
        } else {
            None
        }
    }

    /// Borrowed resolver inputs for the current state.
    pub fn region_context(&self) -> RegionContext<'_> {
        let ctx = RegionContext::new(&self.coords, self.scroll, &self.columns, &self.theme)
            .with_features(self.features);
        match &self.rows {
            Some(rows) => ctx.with_rows(rows as &dyn LinearRowSource),
            None => ctx,
        }
    }

    /// Classify a viewport position without changing any state.
    pub fn resolve(&self, x: f32, y: f32) -> ResolvedRegion {
        resolve_region(&self.region_context(), ViewportX(x), ViewportY(y))
    }

    /// CSS cursor for the current pointer state.
    pub fn cursor(&self) -> &'static str {
        match self.active_interaction() {
            Some(InteractionKind::Resize) => "col-resize",
            Some(InteractionKind::Freeze) => "grabbing",
            Some(InteractionKind::Selection) => "default",
            None => self
                .hover
                .map_or("default", |region| region.region_type.cursor()),
        }
    }

    /// Viewport x of the live resize edge, while resizing.
    pub fn resize_preview_x(&self) -> Option<f32> {
        self.resize
            .preview_edge_x(&self.coords, self.scroll.scroll_left)
            .map(|x| x.0)
    }

    /// Viewport x of the freeze drop line, while dragging the freeze handle.
    pub fn freeze_indicator_x(&self) -> Option<f32> {
        self.freeze
            .indicator_x(&self.coords, self.scroll.scroll_left)
            .map(|x| x.0)
    }

    pub fn set_scroll(&mut self, scroll_left: f32, scroll_top: f32) {
        self.scroll.set_scroll(scroll_left, scroll_top, &self.coords);
    }

    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) -> Option<(f32, f32)> {
        self.scroll.scroll_by(delta_x, delta_y, &self.coords)
    }

    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.coords.set_container_size(width, height);
        self.scroll.clamp(&self.coords);
    }

    /// Apply a committed column width. Returns false for an unknown column.
    pub fn apply_column_width(&mut self, index: usize, width: f32) -> bool {
        let width = width.max(MIN_COLUMN_WIDTH);
        let Some(column) = self.columns.get_mut(index) else {
            return false;
        };
        column.width = width;
        self.coords.set_column_width(index, width);
        self.scroll.clamp(&self.coords);
        true
    }

    /// Apply a committed freeze count (clamped to the column count).
    pub fn apply_freeze_column_count(&mut self, count: usize) {
        self.coords.set_freeze_column_count(count);
        let freeze = self.coords.freeze_column_count();
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.frozen = i < freeze;
        }
    }

    /// Replace the row variants; the row count follows their length.
    pub fn set_rows(&mut self, rows: Vec<LinearRow>) {
        self.coords.set_row_count(rows.len());
        self.rows = Some(rows);
        self.scroll.clamp(&self.coords);
    }

    /// Change the row count and drop any row variants.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.rows = None;
        self.coords.set_row_count(row_count);
        self.scroll.clamp(&self.coords);
    }
}
