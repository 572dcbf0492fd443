//! Benchmarks for star field simulation and frame painting.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use starwheel::{FieldEngine, FieldTuning, NeverCancel, Viewport};

fn engine(width: u32, height: u32) -> FieldEngine<StdRng> {
    FieldEngine::new(
        StdRng::seed_from_u64(42),
        Viewport::new(width, height).unwrap(),
        FieldTuning::default(),
    )
}

fn bench_paint_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_frame");

    for (width, height) in [(400, 300), (800, 600), (1280, 720)] {
        let mut field_engine = engine(width, height);
        field_engine.advance(Duration::from_secs(3));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &field_engine,
            |b, field_engine| b.iter(|| black_box(field_engine.render(&NeverCancel).unwrap())),
        );
    }

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    group.bench_function("one_tick_800x600", |b| {
        let mut field_engine = engine(800, 600);
        b.iter(|| black_box(field_engine.advance(Duration::from_secs_f64(1.0 / 60.0))))
    });

    group.bench_function("capped_burst_800x600", |b| {
        let mut field_engine = engine(800, 600);
        b.iter(|| black_box(field_engine.advance(Duration::from_secs(2))))
    });

    group.finish();
}

criterion_group!(benches, bench_paint_frame, bench_advance);
criterion_main!(benches);
