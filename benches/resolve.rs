//! Benchmarks for the pointer-move hot path.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vgrid::layout::{AbsoluteX, AbsoluteY, CoordinateParams, RowHeights, ViewportX, ViewportY};
use vgrid::{
    resolve_region, Column, CoordinateManager, GridCallbacks, GridConfig, GridTheme, GridView,
    RegionContext, ScrollState,
};

const ROWS: usize = 100_000;
const COLS: usize = 200;

struct NoopCallbacks;

impl GridCallbacks for NoopCallbacks {
    fn on_column_resize(&mut self, _column_index: usize, _width: f32) {}
    fn on_column_freeze_change(&mut self, _freeze_column_count: usize) {}
}

fn large_config() -> GridConfig {
    GridConfig {
        columns: (0..COLS)
            .map(|i| Column::new(format!("c{i}"), 80.0 + (i % 7) as f32 * 10.0))
            .collect(),
        freeze_column_count: 2,
        row_count: ROWS,
        row_header_width: 48.0,
        container_width: 1600.0,
        container_height: 900.0,
        theme: GridTheme::standard(),
        ..GridConfig::default()
    }
}

/// Index lookups for uniform and variable row heights
fn bench_lookups(c: &mut Criterion) {
    let config = large_config();
    let uniform = CoordinateManager::from_config(&config);
    let variable = CoordinateManager::new(CoordinateParams {
        column_widths: config.columns.iter().map(|col| col.width).collect(),
        freeze_column_count: 2,
        row_count: ROWS,
        row_heights: RowHeights::from_fn(ROWS, |i| if i % 3 == 0 { 56.0 } else { 32.0 }),
        header_height: 32.0,
        row_header_width: 48.0,
        container_width: 1600.0,
        container_height: 900.0,
    });

    let mut group = c.benchmark_group("lookup");
    for (name, coords) in [("uniform", &uniform), ("variable", &variable)] {
        group.bench_with_input(BenchmarkId::new("row_start_index", name), coords, |b, coords| {
            b.iter(|| coords.row_start_index(black_box(AbsoluteY(1_234_567.0))))
        });
    }
    group.bench_function("column_start_index", |b| {
        b.iter(|| uniform.column_start_index(black_box(AbsoluteX(9_000.0))))
    });
    group.finish();
}

/// One `resolve_region` call per simulated pointer move
fn bench_resolve(c: &mut Criterion) {
    let config = large_config();
    let coords = CoordinateManager::from_config(&config);
    let theme = GridTheme::standard();
    let ctx = RegionContext::new(
        &coords,
        ScrollState::new(5_000.0, 1_000_000.0),
        &config.columns,
        &theme,
    );

    let probes = [
        ("header", 700.0, 10.0),
        ("cell", 700.0, 400.0),
        ("frozen_cell", 100.0, 400.0),
        ("row_header", 20.0, 400.0),
    ];
    let mut group = c.benchmark_group("resolve_region");
    for (name, x, y) in probes {
        group.bench_function(name, |b| {
            b.iter(|| resolve_region(&ctx, black_box(ViewportX(x)), black_box(ViewportY(y))))
        });
    }
    group.finish();
}

/// Full pointer-move routing through `GridView`, hover path and resize path
fn bench_pointer_move(c: &mut Criterion) {
    let mut view = GridView::new(large_config()).expect("valid config");
    view.set_scroll(2_000.0, 500_000.0);
    let mut callbacks = NoopCallbacks;

    c.bench_function("pointer_move_hover", |b| {
        let mut x = 300.0;
        b.iter(|| {
            x = if x > 1_500.0 { 300.0 } else { x + 7.0 };
            view.pointer_move(black_box(x), black_box(450.0), &mut callbacks)
        })
    });
}

criterion_group!(benches, bench_lookups, bench_resolve, bench_pointer_move);

criterion_main!(benches);
