use criterion::{criterion_group, Criterion};
use sandfall::sim::occupancy::OccupancyGrid;
use sandfall::sim::spawn::find_free_cell;
use sandfall::util::vectors::CellVector;

/// Worst case: the whole diamond is occupied, every candidate is probed
fn bench_full_ring_scan(c: &mut Criterion) {
    let mut grid = OccupancyGrid::new(100);
    for x in 0..100 {
        for y in 0..100 {
            grid.set(CellVector { x, y }, true);
        }
    }
    let center = CellVector { x: 50, y: 50 };

    c.bench_function("spawn_full_ring_scan", |b| {
        b.iter(|| find_free_cell(&grid, center, 3))
    });
}

criterion_group!(benches, bench_full_ring_scan);
