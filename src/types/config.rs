//! Serializable grid configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Column, GridFeatures, GridTheme, LinearRow, RowHeightLevel, MIN_COLUMN_WIDTH};
use crate::error::{GridError, Result};

/// Everything the owning view needs to build its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub columns: Vec<Column>,
    pub freeze_column_count: usize,
    pub row_count: usize,
    pub row_height_level: RowHeightLevel,
    /// Per-row pixel heights; overrides `row_height_level` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_heights: Option<Vec<f32>>,
    pub header_height: f32,
    pub row_header_width: f32,
    pub container_width: f32,
    pub container_height: f32,
    pub theme: GridTheme,
    pub features: GridFeatures,
    /// Row variants from the grouping layer; all rows are plain when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<LinearRow>>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            freeze_column_count: 0,
            row_count: 0,
            row_height_level: RowHeightLevel::Short,
            row_heights: None,
            header_height: 32.0,
            row_header_width: 0.0,
            container_width: 800.0,
            container_height: 600.0,
            theme: GridTheme::default(),
            features: GridFeatures::default(),
            rows: None,
        }
    }
}

impl GridConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or violates a grid invariant.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants and normalize recoverable values in place.
    ///
    /// Widths below [`MIN_COLUMN_WIDTH`] are raised to it and each column's
    /// `frozen` flag is derived from `freeze_column_count`.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] for a freeze count past the column
    /// count, duplicate column ids, or row lists whose length disagrees with
    /// `row_count`.
    pub fn validate(&mut self) -> Result<()> {
        if self.freeze_column_count > self.columns.len() {
            return Err(GridError::InvalidConfig(format!(
                "freeze column count {} exceeds {} columns",
                self.freeze_column_count,
                self.columns.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.id.as_str()) {
                return Err(GridError::InvalidConfig(format!(
                    "duplicate column id {:?}",
                    column.id
                )));
            }
        }

        if let Some(rows) = &self.rows {
            if rows.len() != self.row_count {
                return Err(GridError::InvalidConfig(format!(
                    "{} row variants for {} rows",
                    rows.len(),
                    self.row_count
                )));
            }
        }
        if let Some(heights) = &self.row_heights {
            if heights.len() != self.row_count {
                return Err(GridError::InvalidConfig(format!(
                    "{} row heights for {} rows",
                    heights.len(),
                    self.row_count
                )));
            }
        }

        let freeze = self.freeze_column_count;
        for (i, column) in self.columns.iter_mut().enumerate() {
            if column.width < MIN_COLUMN_WIDTH {
                tracing::warn!(
                    column = %column.id,
                    width = column.width,
                    "column width below minimum, clamping"
                );
                column.width = MIN_COLUMN_WIDTH;
            }
            column.frozen = i < freeze;
        }
        Ok(())
    }
}
