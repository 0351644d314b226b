use serde::{Deserialize, Serialize};

/// Pixel metrics used by the region resolver.
///
/// Optional metrics gate optional hit-tests: when a metric is missing the
/// corresponding region is never produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridTheme {
    /// Full width of a column resize band, centered on the column edge
    pub resize_handle_width: f32,
    /// Side of the square checkbox icon (all-rows and per-row checkboxes)
    pub checkbox_icon_size: Option<f32>,
    /// Full width of the freeze-boundary drag band
    pub freeze_handle_width: Option<f32>,
    /// Width of the dropdown zone at the right end of a column header
    pub column_menu_width: Option<f32>,
    /// Width of the "add column" strip past the last column
    pub append_column_width: Option<f32>,
    /// Height of the footer strip at the bottom of the container
    pub footer_height: f32,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            resize_handle_width: 8.0,
            checkbox_icon_size: None,
            freeze_handle_width: None,
            column_menu_width: None,
            append_column_width: None,
            footer_height: 0.0,
        }
    }
}

impl GridTheme {
    /// Theme with every optional hit-test enabled.
    pub fn standard() -> Self {
        Self {
            resize_handle_width: 8.0,
            checkbox_icon_size: Some(16.0),
            freeze_handle_width: Some(6.0),
            column_menu_width: Some(20.0),
            append_column_width: Some(60.0),
            footer_height: 0.0,
        }
    }
}

/// Feature switches of the surrounding view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridFeatures {
    pub multi_select: bool,
    pub column_resize: bool,
    pub column_freeze: bool,
    pub column_append: bool,
    pub row_append: bool,
}

impl Default for GridFeatures {
    fn default() -> Self {
        Self {
            multi_select: true,
            column_resize: true,
            column_freeze: true,
            column_append: true,
            row_append: true,
        }
    }
}
