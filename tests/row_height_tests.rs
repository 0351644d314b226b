//! Row height preset tests
//!
//! The preset helpers in `layout::row_height` must agree with the
//! `CoordinateManager` row accessors for every level.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::GridBuilder;
use test_case::test_case;
use vgrid::layout::{row_height, AbsoluteY};
use vgrid::RowHeightLevel;

#[test_case(RowHeightLevel::Short, 32.0)]
#[test_case(RowHeightLevel::Medium, 56.0)]
#[test_case(RowHeightLevel::Tall, 84.0)]
#[test_case(RowHeightLevel::ExtraTall, 108.0)]
fn test_level_pixels(level: RowHeightLevel, pixels: f32) {
    assert_eq!(level.pixels(), pixels);
    assert_eq!(row_height::row_height(level, None), pixels);
    assert_eq!(row_height::row_height(level, Some(999.0)), pixels);
}

#[test_case(RowHeightLevel::Short)]
#[test_case(RowHeightLevel::Medium)]
#[test_case(RowHeightLevel::Tall)]
#[test_case(RowHeightLevel::ExtraTall)]
fn test_presets_agree_with_coordinate_manager(level: RowHeightLevel) {
    let rows = 40;
    let header = 32.0;
    let coords = GridBuilder::new()
        .level(level)
        .rows(rows)
        .header_height(header)
        .coords();

    assert_eq!(
        row_height::total_height(level, rows) + header,
        coords.total_height()
    );
    for i in 0..rows {
        assert_eq!(row_height::row_offset(level, header, i), coords.row_offset(i).0);
        assert_eq!(coords.row_height(i), level.pixels());
    }

    let mut y = -10.0;
    while y < coords.total_height() + 50.0 {
        assert_eq!(
            row_height::row_index_from_y(level, header, AbsoluteY(y), rows),
            coords.row_start_index(AbsoluteY(y)),
            "y={y}"
        );
        y += 7.0;
    }
}

#[test]
fn test_level_from_json() {
    let level: RowHeightLevel = serde_json::from_str(r#""extraTall""#).unwrap();
    assert_eq!(level, RowHeightLevel::ExtraTall);
}

#[test]
fn test_zero_rows() {
    assert_eq!(row_height::total_height(RowHeightLevel::Tall, 0), 0.0);
    assert_eq!(
        row_height::row_index_from_y(RowHeightLevel::Tall, 32.0, AbsoluteY(500.0), 0),
        0
    );
}
