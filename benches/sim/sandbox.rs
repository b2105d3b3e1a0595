use std::time::Duration;

use criterion::{criterion_group, Criterion};
use sandfall::sim::config::SandConfig;
use sandfall::sim::coords;
use sandfall::sim::sandbox::Sandbox;
use sandfall::util::vectors::CellVector;

/// A sandbox mid-pour: a column of grains still falling onto a bed
fn poured_sandbox() -> Sandbox {
    let config = SandConfig {
        grid_size: 100,
        ..SandConfig::default()
    };
    let mut sandbox = Sandbox::with_seed(config, 42);
    let spout = coords::cell_to_world(CellVector { x: 50, y: 90 }, config.grid_size);

    for _ in 0..2000 {
        sandbox.update(Duration::from_millis(20));
        sandbox.request_spawn(spout);
    }
    sandbox
}

fn bench_full_tick(c: &mut Criterion) {
    let mut sandbox = poured_sandbox();
    c.bench_function("sandbox_full_tick", |b| {
        b.iter(|| {
            sandbox.update(Duration::from_millis(16));
        })
    });
}

criterion_group!(benches, bench_full_tick);
