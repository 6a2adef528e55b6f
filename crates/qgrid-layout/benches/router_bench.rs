//! Benchmarks for control-wire routing
//!
//! Run with: cargo bench -p qgrid-layout

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qgrid_ir::{BinaryGate, Cell, Grid, UnaryGate};
use qgrid_layout::{Geometry, Router};

/// Two interleaved binary gates and a unary gate in every column.
fn crowded_grid(columns: usize) -> Grid {
    (0..columns).fold(Grid::empty(5, columns), |grid, c| {
        grid.add_gate(0, c, Cell::control(BinaryGate::CX, 2))
            .add_gate(1, c, Cell::control(BinaryGate::CZ, 3))
            .add_gate(4, c, Cell::Unary(UnaryGate::H))
    })
}

/// A single straight wire per column.
fn sparse_grid(columns: usize) -> Grid {
    (0..columns).fold(Grid::empty(5, columns), |grid, c| {
        grid.add_gate(c % 4, c, Cell::control(BinaryGate::CX, c % 4 + 1))
    })
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");

    for columns in [1, 3, 6] {
        let router = Router::new(Geometry::for_grid(5, columns));

        let crowded = crowded_grid(columns);
        group.bench_with_input(BenchmarkId::new("crowded", columns), &crowded, |b, grid| {
            b.iter(|| router.route(black_box(grid)));
        });

        let sparse = sparse_grid(columns);
        group.bench_with_input(BenchmarkId::new("sparse", columns), &sparse, |b, grid| {
            b.iter(|| router.route(black_box(grid)));
        });
    }

    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let grid = crowded_grid(6);
    let routed = Router::new(Geometry::for_grid(5, 6)).route(&grid);

    c.bench_function("to_svg_path", |b| {
        b.iter(|| {
            routed
                .iter()
                .flat_map(|column| &column.wires)
                .map(|wire| black_box(wire.path.to_svg_path()).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_route, bench_svg);
criterion_main!(benches);
