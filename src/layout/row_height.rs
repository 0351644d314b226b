//! Row height presets.
//!
//! One [`RowHeightLevel`] applies to every row of a view. The uniform-height
//! helpers here are also what [`CoordinateManager`](super::CoordinateManager)
//! uses for its uniform fast path, so both always agree.

use super::space::AbsoluteY;
use crate::types::RowHeightLevel;

/// Height of any row in a view at `level`. A per-row override is ignored.
pub fn row_height(level: RowHeightLevel, _override_height: Option<f32>) -> f32 {
    level.pixels()
}

/// Sum of all row heights (column header excluded).
pub fn total_height(level: RowHeightLevel, row_count: usize) -> f32 {
    uniform_rows_height(level.pixels(), row_count)
}

/// Absolute top edge of `row_index`.
pub fn row_offset(level: RowHeightLevel, header_height: f32, row_index: usize) -> f32 {
    uniform_row_offset(level.pixels(), header_height, row_index)
}

/// Row under an absolute y, clamped to `[0, row_count - 1]`.
pub fn row_index_from_y(
    level: RowHeightLevel,
    header_height: f32,
    y: AbsoluteY,
    row_count: usize,
) -> usize {
    uniform_row_index(level.pixels(), header_height, y, row_count)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn uniform_rows_height(row_height: f32, row_count: usize) -> f32 {
    row_height * row_count as f32
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn uniform_row_offset(row_height: f32, header_height: f32, row_index: usize) -> f32 {
    header_height + row_index as f32 * row_height
}

/// The float→usize cast is safe: the value is floored, non-negative and
/// clamped to the row count right after.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn uniform_row_index(
    row_height: f32,
    header_height: f32,
    y: AbsoluteY,
    row_count: usize,
) -> usize {
    let Some(last) = row_count.checked_sub(1) else {
        return 0;
    };
    if row_height <= 0.0 {
        return 0;
    }
    let rows = ((y.0 - header_height) / row_height).floor();
    if rows.is_nan() || rows <= 0.0 {
        return 0;
    }
    (rows as usize).min(last)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(row_height(RowHeightLevel::Short, None), 32.0);
        assert_eq!(row_height(RowHeightLevel::Medium, Some(200.0)), 56.0);
        assert_eq!(row_height(RowHeightLevel::Tall, None), 84.0);
        assert_eq!(row_height(RowHeightLevel::ExtraTall, None), 108.0);
    }

    #[test]
    fn test_total_and_offset() {
        assert_eq!(total_height(RowHeightLevel::Medium, 10), 560.0);
        assert_eq!(total_height(RowHeightLevel::Medium, 0), 0.0);
        assert_eq!(row_offset(RowHeightLevel::Medium, 32.0, 3), 200.0);
    }

    #[test]
    fn test_index_from_y() {
        let level = RowHeightLevel::Medium;
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(210.0), 10), 3);
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(200.0), 10), 3);
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(199.9), 10), 2);
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(5.0), 10), 0);
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(1.0e6), 10), 9);
        assert_eq!(row_index_from_y(level, 32.0, AbsoluteY(100.0), 0), 0);
    }
}
