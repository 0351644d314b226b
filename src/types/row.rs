use serde::{Deserialize, Serialize};

/// Preset row height applied to every row of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowHeightLevel {
    #[default]
    Short,
    Medium,
    Tall,
    ExtraTall,
}

impl RowHeightLevel {
    /// Pixel height for this level.
    pub const fn pixels(self) -> f32 {
        match self {
            Self::Short => 32.0,
            Self::Medium => 56.0,
            Self::Tall => 84.0,
            Self::ExtraTall => 108.0,
        }
    }
}

/// Flattened row descriptor supplied by the grouping/virtualization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LinearRow {
    /// A real record
    Row {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    /// Aggregation header of a group
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        depth: u32,
        #[serde(default)]
        collapsed: bool,
    },
    /// Virtual "add new record" row
    Append,
    /// Any variant this engine does not know; resolved like a plain row
    #[serde(other)]
    Unknown,
}

impl LinearRow {
    pub fn row(id: impl Into<String>) -> Self {
        Self::Row {
            id: Some(id.into()),
        }
    }

    pub fn group(depth: u32, collapsed: bool) -> Self {
        Self::Group {
            id: None,
            depth,
            collapsed,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    pub fn is_append(&self) -> bool {
        matches!(self, Self::Append)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_degrades() {
        let row: LinearRow = serde_json::from_str(r#"{"type":"summary"}"#).unwrap();
        assert_eq!(row, LinearRow::Unknown);
    }

    #[test]
    fn test_group_round_trip_fields() {
        let row: LinearRow =
            serde_json::from_str(r#"{"type":"group","depth":2,"collapsed":true}"#).unwrap();
        assert_eq!(row, LinearRow::group(2, true));
        assert!(row.is_group());
    }
}
