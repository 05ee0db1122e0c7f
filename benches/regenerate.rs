//! Criterion benchmarks for terrain generation.
//!
//! Benchmarks:
//!   - single gradient-noise evaluation
//!   - one vertex height (six default octaves + shaping)
//!   - full regeneration of the default 512x512 grid
//!
//! Run with: cargo bench --bench regenerate

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use perlin_terrain::movement::WorldOffset;
use perlin_terrain::noise::GradientNoise;
use perlin_terrain::params::TerrainParams;
use perlin_terrain::terrain::{OctaveCompositor, TerrainGrid};

// ---------------------------------------------------------------------------
// Benchmark: point sampling
// ---------------------------------------------------------------------------

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_sampling");
    group.sample_size(1000);

    let noise = GradientNoise::default();
    group.bench_function("noise_evaluate", |b| {
        b.iter(|| black_box(noise.evaluate(black_box(123.45), black_box(-67.89))));
    });

    let compositor = OctaveCompositor::new(&TerrainParams::default()).unwrap();
    group.bench_function("octave_height", |b| {
        b.iter(|| {
            black_box(compositor.height(
                black_box(200),
                black_box(311),
                black_box(WorldOffset::new(10.5, -3.25)),
            ))
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: full grid regeneration
// ---------------------------------------------------------------------------

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_regenerate");
    group.sample_size(10);

    let params = TerrainParams::default();
    let compositor = OctaveCompositor::new(&params).unwrap();
    let mut grid = TerrainGrid::new(params.map_size).unwrap();

    let mut step = 0.0_f32;
    group.bench_function("grid_512", |b| {
        b.iter(|| {
            step += 0.5;
            grid.mark_dirty();
            black_box(grid.regenerate(&compositor, WorldOffset::new(step, step)))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_regenerate);
criterion_main!(benches);
