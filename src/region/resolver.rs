//! Region resolution for a single pointer position.
//!
//! Order of precedence (first match wins):
//! 1. all-rows checkbox in the top-left corner
//! 2. header row: resize bands, append-column strip, header menu, header
//! 3. freeze handle band, which floats over cells and the gutter edge
//! 4. row header gutter: append row, group control, row checkbox, row header
//! 5. data area: column lookup with sentinels, group header content, bounds
//!    checks and the append-row band re-check

use super::LinearRowSource;
use crate::layout::{CoordinateManager, ScrollState, ViewportX, ViewportY};
use crate::types::{
    Column, GridFeatures, GridIndex, GridTheme, LinearRow, RegionType, ResolvedRegion,
};

/// Everything the resolver reads. Borrowed for the duration of one query.
#[derive(Clone, Copy)]
pub struct RegionContext<'a> {
    pub coords: &'a CoordinateManager,
    pub scroll: ScrollState,
    pub columns: &'a [Column],
    /// Row variants; every row is a plain row when absent
    pub rows: Option<&'a dyn LinearRowSource>,
    pub theme: &'a GridTheme,
    pub features: GridFeatures,
}

impl<'a> RegionContext<'a> {
    pub fn new(
        coords: &'a CoordinateManager,
        scroll: ScrollState,
        columns: &'a [Column],
        theme: &'a GridTheme,
    ) -> Self {
        Self {
            coords,
            scroll,
            columns,
            rows: None,
            theme,
            features: GridFeatures::default(),
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: &'a dyn LinearRowSource) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: GridFeatures) -> Self {
        self.features = features;
        self
    }

    fn linear_row(&self, row: usize) -> Option<&'a LinearRow> {
        self.rows.and_then(|rows| rows.linear_row(row))
    }

    /// Viewport x of the right edge of column `index`.
    fn column_right(&self, index: usize) -> f32 {
        self.coords
            .column_relative_offset(index, self.scroll.scroll_left)
            .0
            + self.coords.column_width(index)
    }
}

/// Classify the pointer at viewport position `(x, y)`.
pub fn resolve_region(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY) -> ResolvedRegion {
    if is_on_all_checkbox(ctx, x, y) {
        return ResolvedRegion::new(
            RegionType::AllCheckbox,
            GridIndex::None,
            GridIndex::None,
            x.0,
            y.0,
        );
    }
    if y.0 < ctx.coords.header_height() {
        return header_region(ctx, x, y);
    }
    data_region(ctx, x, y)
}

fn is_on_all_checkbox(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY) -> bool {
    if !ctx.features.multi_select {
        return false;
    }
    let Some(size) = ctx.theme.checkbox_icon_size else {
        return false;
    };
    let width = ctx.coords.row_header_width();
    let height = ctx.coords.header_height();
    if width <= 0.0 || height <= 0.0 {
        return false;
    }
    is_in_icon(x.0, y.0, width / 2.0, height / 2.0, size)
}

/// Square icon of side `size` centered at `(cx, cy)`.
fn is_in_icon(x: f32, y: f32, cx: f32, cy: f32, size: f32) -> bool {
    let half = size / 2.0;
    (x - cx).abs() <= half && (y - cy).abs() <= half
}

fn header_region(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY) -> ResolvedRegion {
    if let Some(col) = resize_handle_column(ctx, x) {
        return ResolvedRegion::new(
            RegionType::ColumnResizeHandler,
            GridIndex::Index(col),
            GridIndex::None,
            x.0,
            y.0,
        );
    }
    if is_in_append_column_strip(ctx, x) {
        return ResolvedRegion::new(
            RegionType::ColumnAppender,
            GridIndex::AppendColumn,
            GridIndex::None,
            x.0,
            y.0,
        );
    }
    let Some(col) = header_column_under(ctx, x) else {
        return ResolvedRegion::blank(x.0, y.0);
    };
    if ctx.columns.get(col).is_some_and(|c| c.append) {
        return ResolvedRegion::new(
            RegionType::ColumnAppender,
            GridIndex::Index(col),
            GridIndex::None,
            x.0,
            y.0,
        );
    }
    let region_type = match ctx.theme.column_menu_width {
        Some(menu_width) if x.0 >= ctx.column_right(col) - menu_width => {
            RegionType::ColumnHeaderMenu
        }
        _ => RegionType::ColumnHeader,
    };
    ResolvedRegion::new(region_type, GridIndex::Index(col), GridIndex::None, x.0, y.0)
}

/// Column whose resize band contains `x`.
///
/// Bands sit on both edges of the column under the pointer; a hit on a left
/// edge resizes the previous column. Edges of scrolled columns that slid under
/// the frozen region are hidden, the frozen boundary takes their place.
fn resize_handle_column(ctx: &RegionContext<'_>, x: ViewportX) -> Option<usize> {
    if !ctx.features.column_resize {
        return None;
    }
    let coords = ctx.coords;
    let last = coords.column_count().checked_sub(1)?;
    let half = ctx.theme.resize_handle_width / 2.0;
    let scroll_left = ctx.scroll.scroll_left;
    let freeze = coords.freeze_column_count();
    let freeze_width = coords.freeze_region_width();
    let col = coords
        .column_start_index(coords.absolute_x(x, scroll_left))
        .min(last);
    let visible = |index: usize, edge: f32| index < freeze || edge >= freeze_width;

    let right = ctx.column_right(col);
    if (x.0 - right).abs() <= half && visible(col, right) {
        return Some(col);
    }
    if col > 0 {
        let left = coords.column_relative_offset(col, scroll_left).0;
        if (x.0 - left).abs() <= half && visible(col, left) {
            return Some(col - 1);
        }
    }
    if freeze > 0 && col >= freeze && (x.0 - freeze_width).abs() <= half {
        return Some(freeze - 1);
    }
    None
}

/// Column under `x` in the header, `None` over the corner or past the content.
fn header_column_under(ctx: &RegionContext<'_>, x: ViewportX) -> Option<usize> {
    let coords = ctx.coords;
    if coords.column_count() == 0 || x.0 < coords.row_header_width() {
        return None;
    }
    let abs_x = coords.absolute_x(x, ctx.scroll.scroll_left);
    if abs_x.0 >= coords.total_width() {
        return None;
    }
    Some(coords.column_start_index(abs_x))
}

fn is_in_append_column_strip(ctx: &RegionContext<'_>, x: ViewportX) -> bool {
    if !ctx.features.column_append {
        return false;
    }
    let Some(width) = ctx.theme.append_column_width else {
        return false;
    };
    let start = match ctx.coords.column_count().checked_sub(1) {
        Some(last) => ctx.column_right(last),
        None => ctx.coords.row_header_width(),
    };
    x.0 >= start && x.0 < start + width
}

fn data_region(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY) -> ResolvedRegion {
    let coords = ctx.coords;
    let column_index = data_column_index(ctx, x);
    if coords.row_count() == 0 {
        return ResolvedRegion::new(RegionType::Cell, column_index, GridIndex::None, x.0, y.0)
            .out_of_bounds();
    }

    let abs_y = coords.absolute_y(y, ctx.scroll.scroll_top);
    let row = coords.row_start_index(abs_y);
    let linear = ctx.linear_row(row);
    let below_content = abs_y.0 >= coords.total_height();

    let mut region =
        ResolvedRegion::new(RegionType::Cell, column_index, GridIndex::Index(row), x.0, y.0);

    // The band straddles the row header edge when nothing is frozen.
    if is_on_freeze_handle(ctx, x, y) {
        region.region_type = RegionType::ColumnFreezeHandler;
        return region;
    }

    if x.0 >= 0.0 && x.0 < coords.row_header_width() {
        let region = gutter_region(ctx, x, y, row, linear);
        return if below_content {
            region.out_of_bounds()
        } else {
            region
        };
    }

    if column_index == GridIndex::Index(0) && linear.is_some_and(LinearRow::is_group) {
        region.region_type = RegionType::RowGroupHeader;
        return region;
    }

    let past_right = match column_index {
        GridIndex::Index(_) => {
            coords.absolute_x(x, ctx.scroll.scroll_left).0 >= coords.total_width()
        }
        GridIndex::None | GridIndex::AppendColumn | GridIndex::BeforeStart => true,
    };
    if past_right || below_content {
        return region.out_of_bounds();
    }

    if linear.is_some_and(LinearRow::is_append) {
        if !is_in_row_band(ctx, y, row) {
            return region.out_of_bounds();
        }
        if ctx.features.row_append {
            region.region_type = RegionType::AppendRow;
        }
    }
    region
}

/// Column index for a data-area pointer, with sentinels.
fn data_column_index(ctx: &RegionContext<'_>, x: ViewportX) -> GridIndex {
    if x.0 < 0.0 {
        return GridIndex::BeforeStart;
    }
    if is_in_append_column_strip(ctx, x) {
        return GridIndex::AppendColumn;
    }
    if ctx.coords.column_count() == 0 {
        return GridIndex::None;
    }
    let abs_x = ctx.coords.absolute_x(x, ctx.scroll.scroll_left);
    GridIndex::Index(ctx.coords.column_start_index(abs_x))
}

fn gutter_region(
    ctx: &RegionContext<'_>,
    x: ViewportX,
    y: ViewportY,
    row: usize,
    linear: Option<&LinearRow>,
) -> ResolvedRegion {
    let region = |region_type| {
        ResolvedRegion::new(region_type, GridIndex::None, GridIndex::Index(row), x.0, y.0)
    };
    match linear {
        Some(LinearRow::Append) => {
            if !is_in_row_band(ctx, y, row) {
                region(RegionType::Cell).out_of_bounds()
            } else if ctx.features.row_append {
                region(RegionType::AppendRow)
            } else {
                region(RegionType::RowHeader)
            }
        }
        Some(LinearRow::Group { .. }) => region(RegionType::RowGroupControl),
        Some(LinearRow::Row { .. } | LinearRow::Unknown) | None => {
            if is_on_row_checkbox(ctx, x, y, row) {
                region(RegionType::RowHeaderCheckbox)
            } else {
                region(RegionType::RowHeader)
            }
        }
    }
}

fn is_on_row_checkbox(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY, row: usize) -> bool {
    if !ctx.features.multi_select {
        return false;
    }
    let Some(size) = ctx.theme.checkbox_icon_size else {
        return false;
    };
    let top = ctx
        .coords
        .row_relative_offset(row, ctx.scroll.scroll_top)
        .0;
    let cx = ctx.coords.row_header_width() / 2.0;
    let cy = top + ctx.coords.row_height(row) / 2.0;
    is_in_icon(x.0, y.0, cx, cy, size)
}

/// True if `y` lies in the half-open viewport band `[top, bottom)` of `row`.
fn is_in_row_band(ctx: &RegionContext<'_>, y: ViewportY, row: usize) -> bool {
    let top = ctx
        .coords
        .row_relative_offset(row, ctx.scroll.scroll_top)
        .0;
    let bottom = top + ctx.coords.row_height(row);
    y.0 >= top && y.0 < bottom
}

fn is_on_freeze_handle(ctx: &RegionContext<'_>, x: ViewportX, y: ViewportY) -> bool {
    if !ctx.features.column_freeze || ctx.coords.column_count() == 0 {
        return false;
    }
    let Some(width) = ctx.theme.freeze_handle_width else {
        return false;
    };
    let coords = ctx.coords;
    if (x.0 - coords.freeze_region_width()).abs() > width / 2.0 {
        return false;
    }
    let content_bottom = coords.total_height() - ctx.scroll.scroll_top;
    let visible_bottom = coords.container_height() - ctx.theme.footer_height;
    y.0 >= coords.header_height() && y.0 < content_bottom.min(visible_bottom)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::layout::{CoordinateParams, RowHeights};

    fn coords(widths: &[f32], freeze: usize, rows: usize, row_header: f32) -> CoordinateManager {
        CoordinateManager::new(CoordinateParams {
            column_widths: widths.to_vec(),
            freeze_column_count: freeze,
            row_count: rows,
            row_heights: RowHeights::Uniform(32.0),
            header_height: 24.0,
            row_header_width: row_header,
            container_width: 800.0,
            container_height: 600.0,
        })
    }

    fn columns(n: usize) -> Vec<Column> {
        (0..n).map(|i| Column::new(format!("c{i}"), 80.0)).collect()
    }

    #[test]
    fn test_header_hit() {
        let coords = coords(&[80.0, 80.0, 80.0], 0, 5, 0.0);
        let cols = columns(3);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(85.0), ViewportY(10.0));
        assert_eq!(region.region_type, RegionType::ColumnHeader);
        assert_eq!(region.column_index, GridIndex::Index(1));
        assert_eq!(region.row_index, GridIndex::None);
    }

    #[test]
    fn test_left_edge_resizes_previous_column() {
        let coords = coords(&[80.0, 80.0, 80.0], 0, 5, 0.0);
        let cols = columns(3);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(83.0), ViewportY(10.0));
        assert_eq!(region.region_type, RegionType::ColumnResizeHandler);
        assert_eq!(region.column_index, GridIndex::Index(0));
    }

    #[test]
    fn test_first_column_left_edge_is_not_a_handle() {
        let coords = coords(&[80.0, 80.0], 0, 5, 40.0);
        let cols = columns(2);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(41.0), ViewportY(10.0));
        assert_eq!(region.region_type, RegionType::ColumnHeader);
        assert_eq!(region.column_index, GridIndex::Index(0));
    }

    #[test]
    fn test_resize_disabled_by_feature() {
        let coords = coords(&[80.0, 80.0, 80.0], 0, 5, 0.0);
        let cols = columns(3);
        let theme = GridTheme::default();
        let features = GridFeatures {
            column_resize: false,
            ..GridFeatures::default()
        };
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme)
            .with_features(features);
        let region = resolve_region(&ctx, ViewportX(79.0), ViewportY(10.0));
        assert_eq!(region.region_type, RegionType::ColumnHeader);
    }

    #[test]
    fn test_corner_without_checkbox_is_blank() {
        let coords = coords(&[80.0], 0, 5, 40.0);
        let cols = columns(1);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(20.0), ViewportY(12.0));
        assert_eq!(region.region_type, RegionType::Blank);
    }

    #[test]
    fn test_data_before_left_bound() {
        let coords = coords(&[80.0], 0, 5, 0.0);
        let cols = columns(1);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(-3.0), ViewportY(40.0));
        assert_eq!(region.column_index, GridIndex::BeforeStart);
        assert!(region.is_out_of_bounds);
    }

    #[test]
    fn test_zero_rows_is_out_of_bounds() {
        let coords = coords(&[80.0], 0, 0, 0.0);
        let cols = columns(1);
        let theme = GridTheme::default();
        let ctx = RegionContext::new(&coords, ScrollState::default(), &cols, &theme);
        let region = resolve_region(&ctx, ViewportX(10.0), ViewportY(40.0));
        assert_eq!(region.region_type, RegionType::Cell);
        assert_eq!(region.row_index, GridIndex::None);
        assert!(region.is_out_of_bounds);
    }
}
