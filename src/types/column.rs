use serde::{Deserialize, Serialize};

/// Smallest width a column may have at rest or during a resize preview.
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Width used when a column is created without an explicit width.
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;

/// A column of the grid as seen by the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable column id (owned by the surrounding application)
    pub id: String,
    /// Display name shown in the header
    #[serde(default)]
    pub name: String,
    /// Width in pixels
    #[serde(default = "default_width")]
    pub width: f32,
    /// True if the column sits inside the frozen region
    #[serde(default)]
    pub frozen: bool,
    /// Enumerated option set for select-like columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Marks a synthetic "add column" placeholder
    #[serde(default)]
    pub append: bool,
}

fn default_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}

impl Column {
    /// Create a regular column with the given id and width.
    pub fn new(id: impl Into<String>, width: f32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            width,
            frozen: false,
            options: None,
            append: false,
        }
    }

    /// Width clamped to [`MIN_COLUMN_WIDTH`].
    pub fn resting_width(&self) -> f32 {
        self.width.max(MIN_COLUMN_WIDTH)
    }

    /// True if the column carries an enumerated option set.
    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|o| !o.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_width_clamps() {
        assert_eq!(Column::new("a", 20.0).resting_width(), MIN_COLUMN_WIDTH);
        assert_eq!(Column::new("a", 120.0).resting_width(), 120.0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let col: Column = serde_json::from_str(r#"{"id":"fld1"}"#).unwrap();
        assert_eq!(col.width, DEFAULT_COLUMN_WIDTH);
        assert!(!col.frozen);
        assert!(!col.append);
        assert!(!col.has_options());
    }
}
