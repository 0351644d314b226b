use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic classification of a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionType {
    /// Nothing actionable (corner gutter, empty header space)
    Blank,
    /// "Select all rows" checkbox in the top-left corner
    AllCheckbox,
    ColumnHeader,
    /// Trailing dropdown affordance inside a column header
    ColumnHeaderMenu,
    ColumnResizeHandler,
    /// "Add column" strip past the last column
    ColumnAppender,
    ColumnFreezeHandler,
    RowHeader,
    RowHeaderCheckbox,
    /// Collapse/expand toggle of a group row in the row header gutter
    RowGroupControl,
    /// Group row content in the first column
    RowGroupHeader,
    /// Virtual "add new record" row
    AppendRow,
    Cell,
}

impl RegionType {
    /// CSS cursor name used for the hover indicator.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::ColumnResizeHandler => "col-resize",
            Self::ColumnFreezeHandler => "grab",
            Self::AllCheckbox
            | Self::RowHeaderCheckbox
            | Self::RowGroupControl
            | Self::ColumnHeaderMenu
            | Self::ColumnAppender
            | Self::AppendRow => "pointer",
            Self::Blank | Self::ColumnHeader | Self::RowHeader | Self::RowGroupHeader | Self::Cell => {
                "default"
            }
        }
    }
}

/// A resolved row or column index, or one of the sentinels used when no real
/// index applies.
///
/// Serialized as a plain number: the index itself, -1 or -2. `BeforeStart`
/// is written as -Infinity, which JSON cannot represent, so `serde_json`
/// emits `null` for it and reads `null` back as `BeforeStart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridIndex {
    /// A real index, always within `[0, count)`
    Index(usize),
    /// Not applicable for this region (wire value -1)
    None,
    /// Pointer is over the trailing append-column strip (wire value -2)
    AppendColumn,
    /// Pointer is left of the grid's left bound (wire value -Infinity)
    BeforeStart,
}

impl GridIndex {
    /// The real index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(i),
            Self::None | Self::AppendColumn | Self::BeforeStart => None,
        }
    }

    /// True for every sentinel.
    pub fn is_sentinel(self) -> bool {
        self.index().is_none()
    }

    /// Numeric wire form: the index itself, or -1, -2, -Infinity.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Index(i) => i as f64,
            Self::None => -1.0,
            Self::AppendColumn => -2.0,
            Self::BeforeStart => f64::NEG_INFINITY,
        }
    }
}

impl Serialize for GridIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Index(i) => serializer.serialize_u64(i as u64),
            Self::None => serializer.serialize_i64(-1),
            Self::AppendColumn => serializer.serialize_i64(-2),
            Self::BeforeStart => serializer.serialize_f64(f64::NEG_INFINITY),
        }
    }
}

struct GridIndexVisitor;

impl<'de> Visitor<'de> for GridIndexVisitor {
    type Value = GridIndex;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative index, -1, -2, -Infinity or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<GridIndex, E> {
        usize::try_from(v)
            .map(GridIndex::Index)
            .map_err(|_| E::custom(format!("index {v} out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<GridIndex, E> {
        match v {
            -1 => Ok(GridIndex::None),
            -2 => Ok(GridIndex::AppendColumn),
            _ => match u64::try_from(v) {
                Ok(v) => self.visit_u64(v),
                Err(_) => Err(E::custom(format!("unknown index sentinel {v}"))),
            },
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<GridIndex, E> {
        if v == f64::NEG_INFINITY {
            return Ok(GridIndex::BeforeStart);
        }
        if v.fract() != 0.0 || !v.is_finite() {
            return Err(E::custom(format!("index {v} is not an integer")));
        }
        if v < 0.0 {
            self.visit_i64(v as i64)
        } else {
            self.visit_u64(v as u64)
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<GridIndex, E> {
        Ok(GridIndex::BeforeStart)
    }

    fn visit_none<E: de::Error>(self) -> Result<GridIndex, E> {
        Ok(GridIndex::BeforeStart)
    }
}

impl<'de> Deserialize<'de> for GridIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GridIndexVisitor)
    }
}

/// The outcome of resolving one pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRegion {
    pub region_type: RegionType,
    pub column_index: GridIndex,
    pub row_index: GridIndex,
    /// Raw pointer x in viewport space
    pub x: f32,
    /// Raw pointer y in viewport space
    pub y: f32,
    /// True when the pointer lies past the content (no actionable cell)
    pub is_out_of_bounds: bool,
}

impl ResolvedRegion {
    /// A region with both indices set to [`GridIndex::None`].
    pub fn blank(x: f32, y: f32) -> Self {
        Self {
            region_type: RegionType::Blank,
            column_index: GridIndex::None,
            row_index: GridIndex::None,
            x,
            y,
            is_out_of_bounds: false,
        }
    }

    pub fn new(
        region_type: RegionType,
        column_index: GridIndex,
        row_index: GridIndex,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            region_type,
            column_index,
            row_index,
            x,
            y,
            is_out_of_bounds: false,
        }
    }

    /// Demote to an out-of-bounds cell, keeping the indices.
    #[must_use]
    pub fn out_of_bounds(mut self) -> Self {
        self.region_type = RegionType::Cell;
        self.is_out_of_bounds = true;
        self
    }

    /// Real `(column, row)` pair, if both indices are real.
    pub fn cell(&self) -> Option<(usize, usize)> {
        if self.is_out_of_bounds {
            return None;
        }
        Some((self.column_index.index()?, self.row_index.index()?))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_wire_values() {
        assert_eq!(GridIndex::Index(4).as_f64(), 4.0);
        assert_eq!(GridIndex::None.as_f64(), -1.0);
        assert_eq!(GridIndex::AppendColumn.as_f64(), -2.0);
        assert!(GridIndex::BeforeStart.as_f64().is_infinite());
        assert!(GridIndex::BeforeStart.is_sentinel());
    }

    #[test]
    fn test_index_serializes_as_number() {
        assert_eq!(serde_json::to_string(&GridIndex::Index(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&GridIndex::None).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&GridIndex::AppendColumn).unwrap(), "-2");
        assert_eq!(serde_json::to_string(&GridIndex::BeforeStart).unwrap(), "null");
    }

    #[test]
    fn test_index_reads_numbers_and_null() {
        let parsed: Vec<GridIndex> = serde_json::from_str("[0, 7, -1, -2, null, 4.0]").unwrap();
        assert_eq!(
            parsed,
            vec![
                GridIndex::Index(0),
                GridIndex::Index(7),
                GridIndex::None,
                GridIndex::AppendColumn,
                GridIndex::BeforeStart,
                GridIndex::Index(4),
            ]
        );
        assert!(serde_json::from_str::<GridIndex>("-3").is_err());
        assert!(serde_json::from_str::<GridIndex>("1.5").is_err());
        assert!(serde_json::from_str::<GridIndex>("\"none\"").is_err());
    }

    #[test]
    fn test_out_of_bounds_has_no_cell() {
        let region = ResolvedRegion::new(
            RegionType::Cell,
            GridIndex::Index(1),
            GridIndex::Index(2),
            0.0,
            0.0,
        );
        assert_eq!(region.cell(), Some((1, 2)));
        assert_eq!(region.out_of_bounds().cell(), None);
    }
}
