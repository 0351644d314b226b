use serde::{Deserialize, Serialize};

/// Which kind of ranges a [`CombinedSelection`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionRegionType {
    Rows,
    Columns,
    Cells,
    #[default]
    None,
}

/// One inclusive selection range.
///
/// Ranges keep the order in which they were dragged: `start` may exceed `end`.
/// Use [`SelectionRange::normalized`] before iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectionRange {
    /// Rectangle spanned by two `[col, row]` anchors
    Cells { start: [usize; 2], end: [usize; 2] },
    Columns { start: usize, end: usize },
    Rows { start: usize, end: usize },
}

/// Normalized bounds of a range: `(min_col, min_row, max_col, max_row)`.
/// Row and column ranges use `usize::MAX` for the unbounded axis.
pub type RangeBounds = (usize, usize, usize, usize);

impl SelectionRange {
    pub fn cell(col: usize, row: usize) -> Self {
        Self::Cells {
            start: [col, row],
            end: [col, row],
        }
    }

    pub fn normalized(&self) -> RangeBounds {
        match *self {
            Self::Cells { start, end } => (
                start[0].min(end[0]),
                start[1].min(end[1]),
                start[0].max(end[0]),
                start[1].max(end[1]),
            ),
            Self::Columns { start, end } => (start.min(end), 0, start.max(end), usize::MAX),
            Self::Rows { start, end } => (0, start.min(end), usize::MAX, start.max(end)),
        }
    }

    pub fn contains_cell(&self, col: usize, row: usize) -> bool {
        let (min_col, min_row, max_col, max_row) = self.normalized();
        (min_col..=max_col).contains(&col) && (min_row..=max_row).contains(&row)
    }

    /// Move the end anchor, keeping the start anchor.
    #[must_use]
    pub fn with_end(self, col: usize, row: usize) -> Self {
        match self {
            Self::Cells { start, .. } => Self::Cells {
                start,
                end: [col, row],
            },
            Self::Columns { start, .. } => Self::Columns { start, end: col },
            Self::Rows { start, .. } => Self::Rows { start, end: row },
        }
    }
}

/// Selection state: a list of ranges tagged with their kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSelection {
    pub region_type: SelectionRegionType,
    pub ranges: Vec<SelectionRange>,
}

impl CombinedSelection {
    pub fn none() -> Self {
        Self::default()
    }

    /// A single cell rectangle between two `[col, row]` anchors.
    pub fn cells(start: [usize; 2], end: [usize; 2]) -> Self {
        Self {
            region_type: SelectionRegionType::Cells,
            ranges: vec![SelectionRange::Cells { start, end }],
        }
    }

    pub fn columns(start: usize, end: usize) -> Self {
        Self {
            region_type: SelectionRegionType::Columns,
            ranges: vec![SelectionRange::Columns { start, end }],
        }
    }

    pub fn rows(start: usize, end: usize) -> Self {
        Self {
            region_type: SelectionRegionType::Rows,
            ranges: vec![SelectionRange::Rows { start, end }],
        }
    }

    /// Every row of a grid with `row_count` rows (empty for zero rows).
    pub fn all_rows(row_count: usize) -> Self {
        match row_count.checked_sub(1) {
            Some(last) => Self::rows(0, last),
            None => Self::none(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.region_type == SelectionRegionType::None || self.ranges.is_empty()
    }

    pub fn contains_cell(&self, col: usize, row: usize) -> bool {
        self.ranges.iter().any(|r| r.contains_cell(col, row))
    }

    pub fn contains_row(&self, row: usize) -> bool {
        self.region_type == SelectionRegionType::Rows
            && self.ranges.iter().any(|r| r.contains_cell(0, row))
    }

    /// Add or remove a single row, switching the selection to rows if needed.
    ///
    /// Removing a row from inside a wider range splits that range.
    pub fn toggle_row(&mut self, row: usize) {
        if self.region_type != SelectionRegionType::Rows {
            *self = Self::rows(row, row);
            return;
        }
        if !self.contains_row(row) {
            self.ranges.push(SelectionRange::Rows {
                start: row,
                end: row,
            });
            return;
        }
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for range in self.ranges.drain(..) {
            let (_, min_row, _, max_row) = range.normalized();
            if !(min_row..=max_row).contains(&row) {
                kept.push(range);
                continue;
            }
            if row > min_row {
                kept.push(SelectionRange::Rows {
                    start: min_row,
                    end: row - 1,
                });
            }
            if row < max_row {
                kept.push(SelectionRange::Rows {
                    start: row + 1,
                    end: max_row,
                });
            }
        }
        self.ranges = kept;
        if self.ranges.is_empty() {
            self.region_type = SelectionRegionType::None;
        }
    }
}
