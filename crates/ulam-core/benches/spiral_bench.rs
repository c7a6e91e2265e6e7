//! Benchmarks for the Ulam spiral core
//!
//! Measures performance of:
//! - Trial-division primality at different magnitudes
//! - Single steps of the spiral walk
//! - Walking a full grid up to its reset

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ulam_core::{is_prime, Grid, SpiralEngine, Surface};

/// Benchmark primality checks for primes of increasing size
fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    for &n in &[97u64, 7_919, 104_729, 1_299_709, 15_485_863, 1_000_000_007] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| is_prime(black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark a batch of steps on grids of different sizes
fn bench_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("steps");

    for &side in &[101u32, 1_001, 4_001] {
        let grid = Grid::from_surface(Surface::new(side, side), 1).expect("valid grid");
        let batch = 1_000u64;
        group.throughput(Throughput::Elements(batch));
        group.bench_with_input(BenchmarkId::new("side", side), &grid, |b, &grid| {
            let mut engine = SpiralEngine::with_grid(grid);
            b.iter(|| {
                for _ in 0..batch {
                    black_box(engine.step());
                }
            })
        });
    }
    group.finish();
}

/// Benchmark walking every cell of a grid until it resets
fn bench_full_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_grid");
    group.sample_size(20);

    for &side in &[51u32, 161, 321] {
        let grid = Grid::from_surface(Surface::new(side, side), 1).expect("valid grid");
        group.throughput(Throughput::Elements(grid.capacity()));
        group.bench_with_input(BenchmarkId::new("side", side), &grid, |b, &grid| {
            b.iter(|| {
                let mut engine = SpiralEngine::with_grid(grid);
                engine.steps().take_while(|s| !s.reset).count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_is_prime, bench_steps, bench_full_grid);
criterion_main!(benches);
