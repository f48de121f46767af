//! Criterion micro-benchmarks for flood fill, boundary tracing and A*.

use std::hint::black_box;

use cleave_core::{CellState, GridCoord, LinePoints};
use cleave_grid::{find_path, flood_fill, trace_boundaries, GridStore, Layout};
use criterion::{criterion_group, criterion_main, Criterion};

/// Reference grid with a vertical line marked down column 8.
fn cut_reference_grid() -> (GridStore, LinePoints) {
    let mut grid = GridStore::new(&Layout::default());
    let line = LinePoints::new(GridCoord::new(8, 0), GridCoord::new(8, 48));
    grid.set_all(line.cells(), CellState::Crawl, false);
    (grid, line)
}

/// Benchmark: flood both sides of a wall-to-wall cut on the 24x48 grid.
fn bench_flood_fill_reference(c: &mut Criterion) {
    let (grid, line) = cut_reference_grid();

    c.bench_function("flood_fill_reference", |b| {
        b.iter(|| {
            let left = flood_fill(&grid, line.a(), line.b(), (-1, 1));
            let right = flood_fill(&grid, line.a(), line.b(), (1, 1));
            black_box((left.len(), right.len()));
        });
    });
}

/// Benchmark: trace a 240x480 border broken up by a comb of wall stubs.
fn bench_trace_boundaries_stress(c: &mut Criterion) {
    let mut layout = Layout::bordered(240, 480).unwrap();
    for x in (20..240).step_by(20) {
        layout = layout.with_rect(GridCoord::new(x, 1), GridCoord::new(x, 200), CellState::Bounds);
    }
    let grid = GridStore::new(&layout);

    c.bench_function("trace_boundaries_stress", |b| {
        b.iter(|| black_box(trace_boundaries(&grid)));
    });
}

/// Benchmark: corner-to-corner A* on an open 24x48 grid.
fn bench_find_path_open(c: &mut Criterion) {
    let grid = GridStore::new(&Layout::default());
    let (start, goal) = (GridCoord::new(1, 1), GridCoord::new(23, 47));

    c.bench_function("find_path_open_reference", |b| {
        b.iter(|| black_box(find_path(&grid, start, goal)));
    });
}

/// Benchmark: A* forced around a long wall with a single gap.
fn bench_find_path_detour(c: &mut Criterion) {
    let layout = Layout::default().with_rect(
        GridCoord::new(1, 24),
        GridCoord::new(22, 24),
        CellState::Bounds,
    );
    let grid = GridStore::new(&layout);
    let (start, goal) = (GridCoord::new(2, 2), GridCoord::new(2, 46));

    c.bench_function("find_path_detour_reference", |b| {
        b.iter(|| black_box(find_path(&grid, start, goal)));
    });
}

criterion_group!(
    benches,
    bench_flood_fill_reference,
    bench_trace_boundaries_stress,
    bench_find_path_open,
    bench_find_path_detour
);
criterion_main!(benches);
