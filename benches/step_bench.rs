use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use petri_dish::{GridState, Pattern, ScatterDensity, SimulationEngine};

fn seeded(size: usize, parallel_threshold: usize) -> SimulationEngine {
    let mut engine = SimulationEngine::new(GridState::new(size, size).unwrap())
        .with_parallel_threshold(parallel_threshold);
    let pattern = Pattern::scatter(size, size, &ScatterDensity::default(), 42).unwrap();
    engine.load_pattern(&pattern).unwrap();
    engine
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64usize, 256] {
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            let mut engine = seeded(size, usize::MAX);
            b.iter(|| black_box(engine.step()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            let mut engine = seeded(size, 0);
            b.iter(|| black_box(engine.step()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
